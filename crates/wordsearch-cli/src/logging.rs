use log::LevelFilter;
use std::env;

/// Environment variable that switches on debug logging
pub const DEBUG_ENV: &str = "WORDSEARCH_DEBUG";

/// Initialize logging to stderr.
///
/// Defaults to warnings only so the puzzle on stdout stays clean;
/// `debug_enabled` raises that to debug. `RUST_LOG` overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second init (e.g. from tests) keeps the first logger
    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}

/// True when debug logging was requested through the environment
pub fn debug_from_env() -> bool {
    env::var(DEBUG_ENV).is_ok()
}
