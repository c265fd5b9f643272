use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.catalog_path {
		Some(path) => println!("  Catalog: {}", path.display()),
		None => println!("  Catalog: (bundled)"),
	}
	println!("  Page size: {}", config.page_size);
	println!("  Sorting: {}", config.sorting);
	println!("  Related limit: {}", config.related_limit);
	println!(
		"  Curated sets: {} ({} featured, {} multichain)",
		curation_origin(config.curation_customized),
		config.curated.featured_len(),
		config.curated.multichain_len()
	);
}

fn curation_origin(customized: bool) -> &'static str {
	if customized { "configured" } else { "builtin" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn curation_origin_matches_expectations() {
		assert_eq!(super::curation_origin(true), "configured");
		assert_eq!(super::curation_origin(false), "builtin");
	}

	#[test]
	fn summary_prints_without_panic() {
		let config = ResolvedConfig {
			catalog_path: Some(PathBuf::from("/tmp/projects.json")),
			..ResolvedConfig::default()
		};

		print_summary(&config);
	}
}
