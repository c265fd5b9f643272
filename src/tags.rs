//! The fixed category catalog shown as filter pills above the listing.

use serde::Serialize;

use crate::project::Project;

/// Tag value that disables category filtering.
pub const ALL_TAG: &str = "all";

/// A filterable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tag {
	pub value: &'static str,
	pub label: &'static str,
}

const fn tag(value: &'static str, label: &'static str) -> Tag {
	Tag { value, label }
}

pub const ECOSYSTEM_TAGS: [Tag; 14] = [
	tag(ALL_TAG, "All"),
	tag("bridge", "Bridge"),
	tag("defi", "DeFi"),
	tag("gamefi", "Gaming"),
	tag("governance", "Governance"),
	tag("infrastructure", "Infrastructure"),
	tag("mobile", "Mobile"),
	tag("nft", "NFT"),
	tag("payments", "Payments"),
	tag("privacy", "Privacy"),
	tag("security", "Security"),
	tag("social", "Social"),
	tag("tools", "Tools"),
	tag("wallet", "Wallet"),
];

#[must_use]
pub fn find_tag(value: &str) -> Option<&'static Tag> {
	ECOSYSTEM_TAGS.iter().find(|tag| tag.value == value)
}

/// Catalog entries carried by `project`, in catalog order. Unknown tags are
/// skipped.
#[must_use]
pub fn tag_refs(project: &Project) -> Vec<&'static Tag> {
	ECOSYSTEM_TAGS
		.iter()
		.filter(|tag| project.has_tag(tag.value))
		.collect()
}

/// Whether `project` passes the category filter `tag`.
#[must_use]
pub fn matches_tag(project: &Project, tag: Option<&str>) -> bool {
	match tag {
		None | Some(ALL_TAG) => true,
		Some(value) => project.has_tag(value),
	}
}
