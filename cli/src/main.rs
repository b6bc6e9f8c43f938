use anyhow::{Context, Result};
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Stderr only, stdout carries the banner
    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    let config = cli.to_config().context("invalid options")?;
    log::info!(
        "rendering {} as {}x{} {:?}",
        cli.image_path.display(),
        config.width,
        config.height,
        config.format
    );

    let art = ascii_banner::convert(&cli.image_path, &config)
        .with_context(|| format!("failed to process image {}", cli.image_path.display()))?;

    println!("{}", ascii_banner::render(&art, &config));
    Ok(())
}
