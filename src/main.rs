use anyhow::{Context, Result};
use depsite::Config;
use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let site = config.site_context();
    let clock = config.clock();

    let report = depsite::build(&config.content, &config.output, &site, clock.as_ref())
        .context("Failed to generate site")?;

    println!(
        "Generated {} pages into {}",
        report.pages,
        config.output.display()
    );

    if !config.no_open
        && let Err(e) = open::that(&report.index)
    {
        tracing::warn!(error = %e, path = %report.index.display(), "Failed to open browser");
    }

    Ok(())
}
