use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the validated directory settings came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) sorting: Option<SettingSource>,
	pub(crate) related_limit: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("directory.page_size"))
	}

	pub(crate) fn source_for_sorting(&self) -> SettingSource {
		self.sorting
			.clone()
			.unwrap_or(SettingSource::ConfigKey("directory.sorting"))
	}

	pub(crate) fn source_for_related_limit(&self) -> SettingSource {
		self.related_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("directory.related_limit"))
	}
}
