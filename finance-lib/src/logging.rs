use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

/// Installs the global subscriber. Log lines go to stderr so that rendered
/// output on stdout stays machine readable.
pub fn init(level: LevelFilter) -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(level)
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up subscriber")?;
    tracing::info!("tracing initialized");
    Ok(())
}
