//! Search, ranking and recommendation engine for an ecosystem project
//! directory.
//!
//! Every operation is a pure function over project records already held in
//! memory: keyword relevance scoring, tiered sorting, lookup, truncation and
//! related-project selection. The [`directory`] and [`catalog`] modules
//! compose them into the listing and detail-page flows.

pub mod app_dirs;
pub mod catalog;
pub mod directory;
pub mod logging;
pub mod project;
pub mod ranking;
pub mod related;
pub mod search;
pub mod tags;
pub mod text;

pub use catalog::{Catalog, CatalogError, resolve_project};
pub use directory::{DirectoryPage, DirectoryQuery, search_directory};
pub use project::{Network, Project, SocialMetrics};
pub use ranking::{CuratedSets, ProjectSorting, Tier, sort_by, sorted_by};
pub use related::{RELATED_LIMIT, related_projects};
pub use search::{find_by_id, includes_keyword, relevance_score};
pub use text::shorten_text;
