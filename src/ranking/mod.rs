//! Ordering of directory listings.
//!
//! Two orderings exist: alphabetical by name, and popularity, which buckets
//! projects into curated [`Tier`]s before comparing follower counts.

mod curated;
mod sort;

use std::fmt;

pub use curated::{CuratedSets, FEATURED_PROJECT_IDS, MULTICHAIN_PROJECT_IDS, Tier};
pub use sort::{sort_by, sorted_by};

/// Listing orders offered by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectSorting {
	Alphabetical,
	Followers,
}

impl ProjectSorting {
	pub const ALL: [Self; 2] = [Self::Alphabetical, Self::Followers];

	/// Display label, also accepted by [`ProjectSorting::from_label`].
	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Alphabetical => "A - Z",
			Self::Followers => "Followers",
		}
	}

	/// Parse a label. Unrecognized labels yield `None`, which sorts as a
	/// no-op.
	#[must_use]
	pub fn from_label(label: &str) -> Option<Self> {
		let label = label.trim();
		Self::ALL
			.into_iter()
			.find(|sorting| sorting.label().eq_ignore_ascii_case(label))
	}
}

impl fmt::Display for ProjectSorting {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}
