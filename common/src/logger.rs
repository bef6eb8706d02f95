use crate::env::Mode;
use std::io::Write;

/// Installs the global logger. `RUST_LOG` takes precedence over the
/// mode-derived default filter.
pub fn init(prefix: &'static str, mode: &Mode) {
    let default_filter = if mode.is_production() { "info" } else { "debug" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{} {} {}] {}",
                buf.timestamp(),
                record.level(),
                prefix,
                record.args()
            )
        })
        .init();
}
