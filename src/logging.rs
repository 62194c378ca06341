//! Console logging setup
//!
//! The library logs through the `log` facade; binaries and test harnesses call
//! [`init`] once to install an `env_logger` backend.

use std::io::Write;

/// Install the logger with the given default level.
///
/// `RUST_LOG` still takes precedence. Calling this more than once is harmless.
pub fn init(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} | {} | {} | {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.target(),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

/// Install the logger for tests: captured by the test harness, debug level
pub fn init_for_tests() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
