use log::LevelFilter;

/// Starts `env_logger` at the given level; `RUST_LOG` can still narrow it per module.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
