use clap::Parser;
use error_chain::ChainedError;
use hw_maps::config::Config;
use hw_maps::data_structs::ExtractedMap;
use hw_maps::driver::{Driver, LocalPages};
use hw_maps::error::*;
use hw_maps::http_client::Downloader;
use hw_maps::render::Renderer;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

/// Scrape the Hyrule Warriors map FAQ into one interactive page.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map tables to use instead of the built-in ones (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the page. Defaults to the configured output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read pages saved as <DIR>/<map path>.html instead of downloading them.
    #[arg(long, value_name = "DIR")]
    pages_dir: Option<PathBuf>,

    /// Save every downloaded page to <DIR>.
    #[arg(long, value_name = "DIR", conflicts_with = "pages_dir")]
    save_pages: Option<PathBuf>,

    /// Also dump the extracted records as JSON.
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Log filter, used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = actual_main(cli) {
        eprintln!("{}", e.display_chain());
        process::exit(1);
    }
}

// We write a function so that we can return a `Result` and use `?`
fn actual_main(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path).chain_err(|| format!("failed to load {}", path.display()))?,
        None => Config::embedded()?
    };
    let driver = Driver::new(&config)?;

    let pages = match &cli.pages_dir {
        Some(dir) => driver.gather(&LocalPages::new(dir.clone()))?,
        None => driver.gather(&Downloader::new(&config)?)?
    };

    if let Some(dir) = &cli.save_pages {
        let local = LocalPages::new(dir.clone());
        for page in &pages {
            local.save(&page.spec, &page.html)?;
        }
    }

    let maps = driver.extract(pages)?;

    if let Some(path) = &cli.json {
        write_json(path, &maps)?;
    }

    let output = cli.output.unwrap_or_else(|| config.output.clone());
    info!("Writing {}", output.display());
    Renderer::new(&config, chrono::Utc::now()).write(&output, &maps)?;

    Ok(())
}

fn write_json(path: &Path, maps: &[ExtractedMap]) -> Result<()> {
    let by_name: BTreeMap<&str, _> = maps.iter()
        .map(|m| (m.spec.name.as_str(), &m.record))
        .collect();

    fs::write(path, serde_json::to_string_pretty(&by_name)?)?;
    Ok(())
}
