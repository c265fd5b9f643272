use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Resolve the directory settings for one run.
///
/// Config files are read first, `ECODIR__*` variables override them, and
/// explicit CLI flags win over both.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = build_config(cli)?
		.try_deserialize()
		.context("config files or ECODIR__ variables do not match the expected layout")?;
	raw.apply_cli_overrides(cli);
	let resolved = raw.resolve(cli)?;
	log::debug!(
		"directory settings: page size {}, sorting {}, related limit {}",
		resolved.page_size,
		resolved.sorting,
		resolved.related_limit
	);
	Ok(resolved)
}
