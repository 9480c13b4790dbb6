use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};
use tracing::level_filters::LevelFilter;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub fixture_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub pretty: bool,
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config: Config =
            toml::from_str(config.as_str()).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let fixture_path = PathBuf::from(read_env("FINANCE_FIXTURE_PATH")?);
        let log_level = read_env("FINANCE_LOG_LEVEL").unwrap_or_else(|_| default_log_level());
        let pretty = match env::var("FINANCE_PRETTY") {
            Ok(pretty) => pretty
                .parse()
                .context("Unable to parse FINANCE_PRETTY value")?,
            Err(_) => false,
        };

        let config = Config {
            fixture_path,
            log_level,
            pretty,
        };
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, anyhow::Error> {
        self.log_level
            .parse()
            .with_context(|| format!("Invalid log level: {}", self.log_level))
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
