use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "polarbrot", version, about = "Animated fractal x polar-interference art in the terminal")]
pub struct Config {
    /// Image resolution (size x size pixels), snapped to the slider grid.
    #[arg(long, default_value_t = 300)]
    pub size: usize,

    /// Escape-time iteration budget per point.
    #[arg(long, default_value_t = 50)]
    pub iterations: u32,

    /// Number of superposed polar interference layers.
    #[arg(long, default_value_t = 6)]
    pub layers: u32,

    /// Colormap name or registry index (see --list-colormaps).
    #[arg(long, default_value = "prism")]
    pub colormap: String,

    #[arg(long, value_enum, default_value_t = RendererMode::HalfBlock)]
    pub renderer: RendererMode,

    /// Target redraw rate; 20 fps matches the classic 50ms tick.
    #[arg(long, default_value_t = 20)]
    pub fps: u32,

    /// Animation phase advance per tick.
    #[arg(long, default_value_t = 0.1)]
    pub time_step: f64,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub sync_updates: bool,

    #[arg(long, default_value_t = false)]
    pub list_colormaps: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RendererMode {
    #[value(name = "half-block", alias = "halfblock", alias = "half_block", alias = "hb")]
    HalfBlock,
    #[value(alias = "ansi", alias = "text")]
    Ascii,
}
