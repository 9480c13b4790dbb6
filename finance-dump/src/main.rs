#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use finance_lib::config::Config;
use finance_lib::export;
use finance_lib::fixture::Fixture;
use finance_lib::view::Depth;
use finance_repo::models::EntityKind;

/// Seeds an in-memory store from a fixture and prints one row as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of the default lookup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Row kind, e.g. user, transaction, loan_given
    kind: EntityKind,

    id: i32,

    /// Include related rows
    #[arg(long)]
    deep: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr));
    let tracing_guard = tracing::subscriber::set_default(subscriber);
    info!("tracing initialized");

    let config = match args.config.clone().or_else(get_config_file) {
        Some(path) => {
            info!(path = %path.display(), "Reading config file");
            Config::from_file(path)?
        }
        None => {
            warn!("Config file not found, reading config from environment");
            Config::from_env()?
        }
    };

    drop(tracing_guard);
    finance_lib::logging::init(config.level_filter()?)?;

    let repo = finance_repo::mem_repo::create_repo();
    Fixture::from_file(&config.fixture_path)?.load_into(repo.as_ref())?;

    let depth = if args.deep { Depth::Deep } else { Depth::Shallow };
    let value = export::render(repo.as_ref(), args.kind, args.id, depth)
        .with_context(|| format!("Unable to render {} {}", args.kind, args.id))?;

    let output = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{}", output);

    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
