use thiserror::Error;

use super::SettingSource;

/// A directory setting that parsed but cannot be used.
#[derive(Debug, Error)]
#[error("{origin} sets `{key}` to an unusable value: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn message_names_the_origin_before_the_key() {
		let err = ConfigError::invalid(
			"directory.sorting",
			"Newest",
			SettingSource::ConfigKey("directory.sorting"),
			"expected `A - Z` or `Followers`",
		);
		assert_eq!(
			err.to_string(),
			"configuration key `directory.sorting` sets `directory.sorting` to an unusable value: \
			 expected `A - Z` or `Followers` (value: Newest)"
		);
	}
}
