use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"directory.page_size",
			config.page_size.to_string(),
			sources.source_for_page_size(),
			"must be greater than zero",
		));
	}

	if config.related_limit == 0 {
		return Err(ConfigError::invalid(
			"directory.related_limit",
			config.related_limit.to_string(),
			sources.source_for_related_limit(),
			"must be at least 1",
		));
	}

	Ok(())
}
