mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rede_core::{Dashboard, DataSource, DatasetLoader, LoaderConfig};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let query = cli.query()?;

    let mut config = LoaderConfig::default();
    if let Some(source) = cli.source.as_deref() {
        config.source = DataSource::parse(source).context("invalid --source")?;
    }

    log::info!("Carregando dados de {}", config.source);
    let loader = DatasetLoader::from_config(&config)?;
    let dataset = loader.load_or_empty().await;

    if let Some(position) = cli.detail {
        match dataset.get(position) {
            Some(record) => print!("{}", render::detail(position, record)),
            None => eprintln!("Nenhuma instituição na posição {}", position),
        }
        return Ok(());
    }

    let view = Dashboard::compute(&dataset, &query);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render::dashboard(&view));
    }

    Ok(())
}
