use anyhow::Context;
use clap::Parser;
use icon_extract::cli::Cli;
use icon_extract::{run_pipeline, ExtractConfig};
use std::io::{self, Write};

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let config = ExtractConfig::from(Cli::parse());
    log::debug!("Running with {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_pipeline(&config, &mut out).with_context(|| {
        format!(
            "Failed to extract icons listed in {}",
            config.manifest.display()
        )
    })?;
    out.flush()?;
    Ok(())
}
