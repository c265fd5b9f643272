//! Log output for the `ecodir` binary.
//!
//! The library only talks to the `log` facade; the binary installs
//! `env_logger` once at startup. `RUST_LOG` always wins over the verbosity
//! requested on the command line.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Map the number of `-v` flags to a default level filter.
#[must_use]
pub fn filter_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Install the global logger. Later calls are ignored.
pub fn initialize(verbosity: u8) {
	let default_filter = filter_for(verbosity).to_string().to_lowercase();
	let result = Builder::from_env(Env::default().default_filter_or(default_filter))
		.format_timestamp(None)
		.format_target(false)
		.try_init();
	if result.is_err() {
		log::debug!("logger already initialized");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_the_level() {
		assert_eq!(filter_for(0), LevelFilter::Warn);
		assert_eq!(filter_for(1), LevelFilter::Info);
		assert_eq!(filter_for(2), LevelFilter::Debug);
		assert_eq!(filter_for(9), LevelFilter::Trace);
	}

	#[test]
	fn repeated_initialization_is_harmless() {
		initialize(0);
		initialize(2);
	}
}
