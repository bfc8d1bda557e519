use log::LevelFilter;

/// Installs an `env_logger` backend for the `log` macros used across the engine.
///
/// Searches report at `debug` and traversal steps at `trace`, so pass
/// `verbose` to see per-query detail. A `RUST_LOG` filter takes precedence
/// over the chosen level. Only the first call installs a logger; later calls do nothing.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(default_level)
        .format_timestamp(None)
        .format_target(false);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    match builder.try_init() {
        Ok(()) => log::debug!("wordsearch logging at {default_level}"),
        Err(_) => log::trace!("logger already installed"),
    }
}
