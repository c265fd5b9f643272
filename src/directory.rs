//! Listing pipeline behind the directory page: deployment filter, category
//! filter, keyword filter, ordering and pagination.

use std::cmp::Reverse;

use crate::project::Project;
use crate::ranking::{CuratedSets, ProjectSorting, sort_by};
use crate::search::{includes_keyword, relevance_score};
use crate::tags::{ECOSYSTEM_TAGS, Tag, matches_tag};

/// Projects per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 24;

/// Page buttons rendered by the pager.
const PAGE_WINDOW: usize = 7;

/// Filters and page selection for a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
	pub tag: Option<String>,
	pub keyword: String,
	/// 1-based page number.
	pub page: usize,
	pub page_size: usize,
}

impl Default for DirectoryQuery {
	fn default() -> Self {
		Self {
			tag: None,
			keyword: String::new(),
			page: 1,
			page_size: DEFAULT_PAGE_SIZE,
		}
	}
}

impl DirectoryQuery {
	#[must_use]
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	#[must_use]
	pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
		self.keyword = keyword.into();
		self
	}

	#[must_use]
	pub fn with_page(mut self, page: usize) -> Self {
		self.page = page;
		self
	}

	#[must_use]
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size;
		self
	}
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPage {
	pub items: Vec<Project>,
	/// Matching projects across all pages.
	pub total: usize,
	pub page: usize,
	pub total_pages: usize,
}

impl DirectoryPage {
	/// Page numbers to render in the pager.
	#[must_use]
	pub fn window(&self) -> Vec<usize> {
		page_window(self.page, self.total_pages)
	}
}

/// Run a listing request over the full catalog.
///
/// With a keyword the matches are ordered by relevance, then followers.
/// Without one, `sorting` applies.
#[must_use]
pub fn search_directory(
	projects: &[Project],
	query: &DirectoryQuery,
	sorting: Option<ProjectSorting>,
	curated: &CuratedSets,
) -> DirectoryPage {
	let mut matching: Vec<Project> = projects
		.iter()
		.filter(|project| project.is_deployed())
		.filter(|project| {
			matches_tag(project, query.tag.as_deref()) && includes_keyword(project, &query.keyword)
		})
		.cloned()
		.collect();

	if query.keyword.trim().is_empty() {
		sort_by(&mut matching, sorting, curated);
	} else {
		matching.sort_by_cached_key(|project| {
			(
				Reverse(relevance_score(project, &query.keyword)),
				Reverse(project.followers()),
			)
		});
	}

	let total = matching.len();
	let page_size = query.page_size.max(1);
	let page = query.page.max(1);
	let total_pages = total.div_ceil(page_size);
	let start = (page - 1).saturating_mul(page_size).min(total);
	let end = start.saturating_add(page_size).min(total);

	log::debug!(
		"directory query tag={:?} keyword={:?} matched {total} of {} projects",
		query.tag,
		query.keyword,
		projects.len()
	);

	DirectoryPage {
		items: matching.drain(start..end).collect(),
		total,
		page,
		total_pages,
	}
}

/// Up to seven page numbers centred on `current` where possible.
#[must_use]
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
	let shown = total_pages.min(PAGE_WINDOW);
	(0..shown)
		.map(|offset| {
			if total_pages <= PAGE_WINDOW || current <= 4 {
				offset + 1
			} else if current >= total_pages - 3 {
				total_pages - (PAGE_WINDOW - 1) + offset
			} else {
				current - 3 + offset
			}
		})
		.collect()
}

/// Projects deployed on mainnet or testnet.
#[must_use]
pub fn live_count(projects: &[Project]) -> usize {
	projects.iter().filter(|project| project.is_deployed()).count()
}

/// Deployed project count per catalog tag, in catalog order.
#[must_use]
pub fn tag_counts(projects: &[Project]) -> Vec<(&'static Tag, usize)> {
	ECOSYSTEM_TAGS
		.iter()
		.map(|tag| {
			let count = projects
				.iter()
				.filter(|project| project.is_deployed() && matches_tag(project, Some(tag.value)))
				.count();
			(tag, count)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(page: &DirectoryPage) -> Vec<&str> {
		page.items.iter().map(|project| project.name.as_str()).collect()
	}

	fn catalog() -> Vec<Project> {
		vec![
			Project::new("1", "Nostra").with_tags(["defi"]).with_followers(900),
			Project::new("2", "Ekubo Exchange")
				.with_short_name("Ekubo")
				.with_tags(["defi"])
				.with_followers(400),
			Project::new("3", "Realms").with_tags(["gamefi"]).with_followers(5_000),
			Project::new("4", "Ghost")
				.with_tags(["defi"])
				.with_liveness(false, false)
				.with_followers(9_999),
			Project::new("5", "Testnet Swap")
				.with_description("An ekubo fork")
				.with_tags(["defi"])
				.with_liveness(false, true),
		]
	}

	#[test]
	fn blank_keyword_uses_configured_sorting() {
		let page = search_directory(
			&catalog(),
			&DirectoryQuery::default(),
			Some(ProjectSorting::Followers),
			&CuratedSets::default(),
		);
		assert_eq!(page.total, 4);
		assert_eq!(page.total_pages, 1);
		assert_eq!(names(&page), vec!["Realms", "Nostra", "Ekubo Exchange", "Testnet Swap"]);
	}

	#[test]
	fn tag_filter_restricts_results() {
		let query = DirectoryQuery::default().with_tag("defi");
		let page = search_directory(
			&catalog(),
			&query,
			Some(ProjectSorting::Alphabetical),
			&CuratedSets::default(),
		);
		assert_eq!(names(&page), vec!["Ekubo Exchange", "Nostra", "Testnet Swap"]);

		let query = DirectoryQuery::default().with_tag(crate::tags::ALL_TAG);
		let page = search_directory(&catalog(), &query, None, &CuratedSets::default());
		assert_eq!(page.total, 4);
	}

	#[test]
	fn keyword_orders_by_relevance_then_followers() {
		let query = DirectoryQuery::default().with_keyword("ekubo");
		let page = search_directory(
			&catalog(),
			&query,
			Some(ProjectSorting::Alphabetical),
			&CuratedSets::default(),
		);
		assert_eq!(names(&page), vec!["Ekubo Exchange", "Testnet Swap"]);

		let query = DirectoryQuery::default().with_keyword("defi");
		let page = search_directory(&catalog(), &query, None, &CuratedSets::default());
		assert_eq!(names(&page), vec!["Nostra", "Ekubo Exchange", "Testnet Swap"]);
	}

	#[test]
	fn paginates_with_default_page_size() {
		let projects: Vec<Project> = (0..50)
			.map(|index| Project::new(index.to_string(), format!("Project {index:02}")))
			.collect();
		let sorting = Some(ProjectSorting::Alphabetical);
		let curated = CuratedSets::default();

		let first = search_directory(&projects, &DirectoryQuery::default(), sorting, &curated);
		assert_eq!(first.items.len(), DEFAULT_PAGE_SIZE);
		assert_eq!(first.total, 50);
		assert_eq!(first.total_pages, 3);
		assert_eq!(first.items[0].name, "Project 00");

		let last = search_directory(
			&projects,
			&DirectoryQuery::default().with_page(3),
			sorting,
			&curated,
		);
		assert_eq!(names(&last), vec!["Project 48", "Project 49"]);

		let beyond = search_directory(
			&projects,
			&DirectoryQuery::default().with_page(9),
			sorting,
			&curated,
		);
		assert!(beyond.items.is_empty());
		assert_eq!(beyond.total, 50);
	}

	#[test]
	fn empty_catalog_has_no_pages() {
		let page = search_directory(&[], &DirectoryQuery::default(), None, &CuratedSets::default());
		assert_eq!(page.total_pages, 0);
		assert!(page.window().is_empty());
	}

	#[test]
	fn pager_window_tracks_current_page() {
		assert_eq!(page_window(1, 3), vec![1, 2, 3]);
		assert_eq!(page_window(2, 20), vec![1, 2, 3, 4, 5, 6, 7]);
		assert_eq!(page_window(10, 20), vec![7, 8, 9, 10, 11, 12, 13]);
		assert_eq!(page_window(18, 20), vec![14, 15, 16, 17, 18, 19, 20]);
	}

	#[test]
	fn counts_live_projects_per_tag() {
		let projects = catalog();
		assert_eq!(live_count(&projects), 4);
		let counts = tag_counts(&projects);
		let defi = counts.iter().find(|(tag, _)| tag.value == "defi").map(|(_, count)| *count);
		assert_eq!(defi, Some(3));
		assert_eq!(counts[0].1, 4);
	}
}
