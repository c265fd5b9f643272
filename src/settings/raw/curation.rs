use std::collections::HashSet;

use ecodir::CuratedSets;
use serde::Deserialize;

/// Replacement curated id lists. A missing list keeps the builtin one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CurationSection {
	pub(super) featured: Option<Vec<String>>,
	pub(super) multichain: Option<Vec<String>>,
}

impl CurationSection {
	pub(super) fn is_customized(&self) -> bool {
		self.featured.is_some() || self.multichain.is_some()
	}

	pub(super) fn resolve(self) -> CuratedSets {
		if !self.is_customized() {
			return CuratedSets::builtin();
		}

		let builtin = |ids: &[&str]| ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
		let featured = self
			.featured
			.map(sanitize_ids)
			.unwrap_or_else(|| builtin(ecodir::ranking::FEATURED_PROJECT_IDS));
		let multichain = self
			.multichain
			.map(sanitize_ids)
			.unwrap_or_else(|| builtin(ecodir::ranking::MULTICHAIN_PROJECT_IDS));

		CuratedSets::new(featured, multichain)
	}
}

/// Trim ids, dropping blanks and duplicates.
fn sanitize_ids(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	values
		.into_iter()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty() && seen.insert(value.clone()))
		.collect()
}
