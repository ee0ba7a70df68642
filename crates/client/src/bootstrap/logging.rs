use dnslookup_domain::ClientConfig;
use tracing::info;

/// Installs the global fmt subscriber. Later calls are no-ops, so an
/// embedding host that already set up tracing keeps its subscriber.
pub fn init_logging(config: &ClientConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(config.logging.ansi)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging initialized at level: {}", config.logging.level);
    }
}
