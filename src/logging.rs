//! Logging setup.

/// Init logging. `RUST_LOG` defaults to `info`.
pub fn init() {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
}
