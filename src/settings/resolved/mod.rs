use std::path::PathBuf;

use ecodir::{CuratedSets, ProjectSorting};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	/// `None` selects the bundled catalog.
	pub catalog_path: Option<PathBuf>,
	pub page_size: usize,
	pub sorting: ProjectSorting,
	pub related_limit: usize,
	pub curated: CuratedSets,
	pub curation_customized: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl Default for ResolvedConfig {
	fn default() -> Self {
		Self {
			catalog_path: None,
			page_size: ecodir::directory::DEFAULT_PAGE_SIZE,
			sorting: ProjectSorting::Followers,
			related_limit: ecodir::RELATED_LIMIT,
			curated: CuratedSets::builtin(),
			curation_customized: false,
		}
	}
}
