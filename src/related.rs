//! Related-project recommendations for the project detail view.

use std::cmp::Reverse;

use crate::project::Project;

/// Number of recommendations shown on a detail page.
pub const RELATED_LIMIT: usize = 6;

/// Tags too broad to indicate topical similarity.
pub const GENERIC_RELATED_TAGS: [&str; 4] = ["all", "infrastructure", "tools", "security"];

/// Tags of `source` used for matching: its specific tags, or every tag when
/// it only carries generic ones.
#[must_use]
pub fn match_tags(source: &Project) -> Vec<&str> {
	let specific: Vec<&str> = source
		.tags
		.iter()
		.map(String::as_str)
		.filter(|tag| !GENERIC_RELATED_TAGS.contains(tag))
		.collect();
	if specific.is_empty() {
		source.tags.iter().map(String::as_str).collect()
	} else {
		specific
	}
}

/// Select up to `limit` deployed, visible projects sharing tags with
/// `source`, ranked by shared-tag count then follower count.
#[must_use]
pub fn related_projects<'a>(
	source: &Project,
	candidates: &'a [Project],
	limit: usize,
) -> Vec<&'a Project> {
	let tags = match_tags(source);
	let shared = |candidate: &Project| {
		candidate
			.tags
			.iter()
			.filter(|tag| tags.contains(&tag.as_str()))
			.count()
	};

	let mut related: Vec<(usize, &Project)> = candidates
		.iter()
		.filter(|candidate| {
			candidate.id != source.id && !candidate.is_hidden && candidate.is_deployed()
		})
		.map(|candidate| (shared(candidate), candidate))
		.filter(|(count, _)| *count > 0)
		.collect();

	related.sort_by_key(|(count, candidate)| (Reverse(*count), Reverse(candidate.followers())));
	related.truncate(limit);

	log::debug!(
		"selected {} related projects for {} using tags {:?}",
		related.len(),
		source.id,
		tags
	);

	related.into_iter().map(|(_, candidate)| candidate).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
		projects.iter().map(|project| project.id.as_str()).collect()
	}

	#[test]
	fn generic_tags_are_ignored_when_specific_ones_exist() {
		let source = Project::new("src", "Source").with_tags(["defi", "tools", "all"]);
		assert_eq!(match_tags(&source), vec!["defi"]);
	}

	#[test]
	fn generic_only_sources_fall_back_to_all_tags() {
		let source = Project::new("src", "Source").with_tags(["tools", "security"]);
		assert_eq!(match_tags(&source), vec!["tools", "security"]);

		let candidates = vec![Project::new("a", "Auditor").with_tags(["security"])];
		assert_eq!(ids(&related_projects(&source, &candidates, RELATED_LIMIT)), vec!["a"]);
	}

	#[test]
	fn excludes_source_hidden_and_undeployed_projects() {
		let source = Project::new("src", "Source").with_tags(["defi"]);
		let candidates = vec![
			source.clone(),
			Project::new("hidden", "Hidden").with_tags(["defi"]).hidden(),
			Project::new("offline", "Offline")
				.with_tags(["defi"])
				.with_liveness(false, false),
			Project::new("testnet", "Testnet")
				.with_tags(["defi"])
				.with_liveness(false, true),
			Project::new("unrelated", "Unrelated").with_tags(["gamefi"]),
		];
		assert_eq!(
			ids(&related_projects(&source, &candidates, RELATED_LIMIT)),
			vec!["testnet"]
		);
	}

	#[test]
	fn ranks_by_shared_tags_then_followers_and_caps_results() {
		let source = Project::new("src", "Source").with_tags(["defi", "wallet", "infrastructure"]);
		let candidates = vec![
			Project::new("one-tag-popular", "A").with_tags(["defi"]).with_followers(90_000),
			Project::new("two-tags", "B").with_tags(["wallet", "defi"]).with_followers(5),
			Project::new("one-tag-a", "C").with_tags(["wallet"]).with_followers(300),
			Project::new("one-tag-b", "D").with_tags(["defi", "infrastructure"]).with_followers(200),
			Project::new("one-tag-c", "E").with_tags(["defi"]).with_followers(100),
			Project::new("one-tag-d", "F").with_tags(["defi"]),
			Project::new("one-tag-e", "G").with_tags(["wallet"]),
		];
		let related = related_projects(&source, &candidates, RELATED_LIMIT);
		assert_eq!(
			ids(&related),
			vec![
				"two-tags",
				"one-tag-popular",
				"one-tag-a",
				"one-tag-b",
				"one-tag-c",
				"one-tag-d",
			]
		);
	}

	#[test]
	fn source_without_tags_has_no_related_projects() {
		let source = Project::new("src", "Source");
		let candidates = vec![Project::new("a", "A").with_tags(["defi"])];
		assert!(related_projects(&source, &candidates, RELATED_LIMIT).is_empty());
	}
}
