//! Logger initialization.
//!
//! Native builds log through `env_logger`. In the browser, records go to the
//! developer console.

use std::sync::Once;

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Maximum level to emit. On native targets `RUST_LOG` takes precedence.
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: log::LevelFilter::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once. Subsequent calls are ignored.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: &LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(config.level);
    }

    // Another logger may already be installed (e.g. by a host application).
    let _ = builder.try_init();
}

#[cfg(target_arch = "wasm32")]
fn install(config: &LoggingConfig) {
    static LOGGER: ConsoleLogger = ConsoleLogger;

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(config.level);
    }
}

/// Forwards log records to the browser console.
#[cfg(target_arch = "wasm32")]
struct ConsoleLogger;

#[cfg(target_arch = "wasm32")]
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = wasm_bindgen::JsValue::from_str(&format!(
            "[{}] {}",
            record.target(),
            record.args()
        ));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&message),
            log::Level::Warn => web_sys::console::warn_1(&message),
            log::Level::Info => web_sys::console::info_1(&message),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}
