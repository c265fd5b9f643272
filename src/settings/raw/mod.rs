use std::env;
use std::path::PathBuf;

use anyhow::{Error, Result};
use ecodir::ProjectSorting;
use ecodir::directory::DEFAULT_PAGE_SIZE;
use ecodir::related::RELATED_LIMIT;
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod curation;
mod directory;

use curation::CurationSection;
use directory::DirectorySection;

/// Catalog location as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CatalogSection {
	path: Option<PathBuf>,
}

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	directory: DirectorySection,
	curation: CurationSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.catalog.clone() {
			self.catalog.path = Some(path);
		}
		self.directory.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			page_size: detect_source(
				cli.page_size.is_some(),
				self.directory.page_size.is_some(),
				"ECODIR__DIRECTORY__PAGE_SIZE",
				"--page-size",
				"directory.page_size",
			),
			sorting: detect_source(
				cli.sort.is_some(),
				self.directory.sorting.is_some(),
				"ECODIR__DIRECTORY__SORTING",
				"--sort",
				"directory.sorting",
			),
			related_limit: detect_source(
				cli.related_limit.is_some(),
				self.directory.related_limit.is_some(),
				"ECODIR__DIRECTORY__RELATED_LIMIT",
				"--related-limit",
				"directory.related_limit",
			),
		};

		let sorting_label = self
			.directory
			.sorting
			.unwrap_or_else(|| ProjectSorting::Followers.label().to_string());
		let sorting = ProjectSorting::from_label(&sorting_label).ok_or_else(|| {
			ConfigError::invalid(
				"directory.sorting",
				sorting_label.clone(),
				sources.source_for_sorting(),
				"expected `A - Z` or `Followers`",
			)
		})?;

		let curation_customized = self.curation.is_customized();
		let config = ResolvedConfig {
			catalog_path: self.catalog.path,
			page_size: self.directory.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			sorting,
			related_limit: self.directory.related_limit.unwrap_or(RELATED_LIMIT),
			curated: self.curation.resolve(),
			curation_customized,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
