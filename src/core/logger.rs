use log::LevelFilter;

/// Info by default, HTTP client internals only from Warn. `RUST_LOG` wins over both.
pub fn setup_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper_util", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
