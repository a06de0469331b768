pub mod app;
pub mod art;
pub mod config;
pub mod params;
pub mod render;
pub mod terminal;
