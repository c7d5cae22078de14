mod app;
mod commands;
mod config;
mod effects;
mod persistence;
mod render;

use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let args = config::Args::parse();
    extractor_logging::initialize(args.log.into(), LevelFilter::Info);
    app::run_app(args)
}
