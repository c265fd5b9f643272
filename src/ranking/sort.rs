use std::cmp::Reverse;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::{CuratedSets, ProjectSorting};
use crate::project::Project;

/// Reorder `projects` in place according to `sorting`.
///
/// The sort is stable, so equal keys keep their incoming order and repeated
/// calls paginate identically. `None` leaves the slice untouched.
pub fn sort_by(projects: &mut [Project], sorting: Option<ProjectSorting>, curated: &CuratedSets) {
	match sorting {
		Some(ProjectSorting::Alphabetical) => {
			projects.sort_by_cached_key(|project| collation_key(&project.name));
		}
		Some(ProjectSorting::Followers) => {
			projects.sort_by_key(|project| (curated.tier_of(&project.id), Reverse(project.followers())));
		}
		None => {}
	}
}

/// Case- and accent-insensitive ordering key for project names.
///
/// Names compare by their base letters first; the lowercased original only
/// breaks ties, so `eclair` sorts before `éclair` and both before `fibrous`.
fn collation_key(name: &str) -> (String, String) {
	let lower = name.to_lowercase();
	let base = lower.nfd().filter(|c| !is_combining_mark(*c)).collect();
	(base, lower)
}

/// Owned variant of [`sort_by`] for callers that keep their list intact.
#[must_use]
pub fn sorted_by(
	projects: &[Project],
	sorting: Option<ProjectSorting>,
	curated: &CuratedSets,
) -> Vec<Project> {
	let mut sorted = projects.to_vec();
	sort_by(&mut sorted, sorting, curated);
	sorted
}
