use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cfg = polarbrot::config::Config::parse();
    if cfg.list_colormaps {
        polarbrot::art::list_colormaps();
        return Ok(());
    }

    polarbrot::app::run(cfg)
}
