mod cli;
mod handlers;

use std::fs::File;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "siteanno";
    pub const BIN_NAME: &str = "siteanno";
}

fn init_logging(matches: &ArgMatches) -> Result<()> {
    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if let Some(path) = matches.get_one::<String>("log-file") {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file: {}", path))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let app = cli::build_parser();
    let matches = app.get_matches();

    init_logging(&matches)?;

    handlers::run_annotate(&matches)
}
