//! Helper crate for fast log initializing.
//!
//! This crate reexports all macros from [`log`] crate and uses [`env_logger`]
//! crate for logger initializing.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger();
//!
//! info!("Logger initialized successfully!");
//! ```

pub use log::{debug, error, info, trace, warn};

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable for log style setting.
const LOG_STYLE_ENV: &str = "LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

use env_logger::fmt::{Color, Formatter};
use log::{Level, Record};
use std::io;

/// Logger initializer. Run this function in binary crate to initialize logging.
/// This function should be ran only once.
pub fn init_logger() {
	let log_level = match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	};

	env_logger::Builder::from_env(
		env_logger::Env::default()
			.filter_or(LOG_LEVEL_ENV, log_level)
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	)
	.format(format)
	.init();
}

/// Logging output format: millisecond timestamp, padded level, message.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use std::io::Write;

	let mut style = buf.style();
	match record.level() {
		Level::Error => style.set_color(Color::Red).set_bold(true),
		Level::Warn => style.set_color(Color::Yellow),
		Level::Info => style.set_color(Color::Green),
		Level::Debug => style.set_color(Color::Cyan),
		Level::Trace => style.set_color(Color::Magenta),
	};

	let timestamp = buf.timestamp_millis();

	writeln!(
		buf,
		"{} {:<5} {}",
		timestamp,
		style.value(record.level()),
		record.args()
	)
}
