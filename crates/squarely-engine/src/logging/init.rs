use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "squarely=debug,wgpu_core=warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter; wins over `RUST_LOG`.
    pub env_filter: Option<String>,

    /// Level used when neither `env_filter` nor `RUST_LOG` is set.
    pub default_level: log::LevelFilter,

    /// ANSI coloring behavior.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// wgpu internals are chatty at info; keep them at warn unless asked for.
const GPU_QUIET: &str = "wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; later calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let env = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(&config, env.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // `try_init` so a logger installed by a test harness is not an error.
        if builder.try_init().is_ok() {
            log::debug!("logging initialized ({filter})");
        }
    });
}

fn resolve_filter(config: &LoggingConfig, env: Option<&str>) -> String {
    if let Some(filter) = config.env_filter.as_deref().filter(|f| !f.trim().is_empty()) {
        return filter.to_string();
    }
    if let Some(filter) = env.filter(|f| !f.trim().is_empty()) {
        return filter.to_string();
    }
    format!("{},{GPU_QUIET}", config.default_level.as_str().to_ascii_lowercase())
}
