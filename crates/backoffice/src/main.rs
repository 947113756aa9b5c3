use backoffice::shared::config;
use backoffice::system::{self, cli::Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    system::tracing::initialize()?;
    let config = config::load_config()?;
    tracing::debug!("Config loaded: {:?}", config);

    let output = system::cli::run(cli, &config)?;
    print!("{}", output);
    Ok(())
}
