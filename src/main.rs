use clap::Parser;

use moviesdecade::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.resolve()?;
    moviesdecade::logging::init(&settings.config.logging.level)?;
    cli::run(settings).await
}
