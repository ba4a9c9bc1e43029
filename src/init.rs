use env_logger::Env;

/// Installs the logger; `RUST_LOG` overrides the default `warn` level.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
