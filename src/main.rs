use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let cli = arcmon::cli::Cli::parse();
    arcmon::app::run(cli)?;
    Ok(())
}
