use serde::Deserialize;

use crate::cli::CliArgs;

/// Listing options as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DirectorySection {
	pub(super) page_size: Option<usize>,
	pub(super) sorting: Option<String>,
	pub(super) related_limit: Option<usize>,
}

impl DirectorySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.page_size {
			self.page_size = Some(value);
		}
		if let Some(value) = cli.sort {
			self.sorting = Some(value.as_str().to_string());
		}
		if let Some(value) = cli.related_limit {
			self.related_limit = Some(value);
		}
	}
}
