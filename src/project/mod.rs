//! Project records as they appear in the ecosystem catalog.

use serde::{Deserialize, Serialize};

/// Projects whose catalog logo must always be served from the local asset
/// directory, even when a social avatar is available.
const FORCE_LOCAL_LOGO_PROJECT_IDS: &[&str] = &["a7e1c712-84a2-4457-8610-1cab7af37b16"];

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub short_name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub network: Network,
	#[serde(default)]
	pub is_live: bool,
	#[serde(default)]
	pub is_testnet_live: bool,
	#[serde(default)]
	pub is_hidden: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub social_metrics: Option<SocialMetrics>,
}

/// Outbound links for a project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
	#[serde(default)]
	pub website: String,
	#[serde(default)]
	pub github: String,
	#[serde(default)]
	pub twitter: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_image: Option<String>,
}

/// Popularity signals attached by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub twitter_follower: Option<u64>,
}

impl Project {
	/// Create a live project with the given identity and no other metadata.
	#[must_use]
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			is_live: true,
			..Self::default()
		}
	}

	#[must_use]
	pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
		self.short_name = short_name.into();
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = description.into();
		self
	}

	#[must_use]
	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	#[must_use]
	pub fn with_followers(mut self, followers: u64) -> Self {
		self.social_metrics = Some(SocialMetrics {
			twitter_follower: Some(followers),
		});
		self
	}

	/// Set both deployment flags.
	#[must_use]
	pub fn with_liveness(mut self, mainnet: bool, testnet: bool) -> Self {
		self.is_live = mainnet;
		self.is_testnet_live = testnet;
		self
	}

	#[must_use]
	pub fn hidden(mut self) -> Self {
		self.is_hidden = true;
		self
	}

	/// Twitter follower count, with a missing metric counted as zero.
	#[must_use]
	pub fn followers(&self) -> u64 {
		self.social_metrics
			.and_then(|metrics| metrics.twitter_follower)
			.unwrap_or(0)
	}

	/// Whether the project is deployed on mainnet or testnet.
	#[must_use]
	pub fn is_deployed(&self) -> bool {
		self.is_live || self.is_testnet_live
	}

	#[must_use]
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|candidate| candidate == tag)
	}

	/// Resolve the logo URL: the social avatar when known, otherwise the
	/// bundled asset under `/logos/`.
	#[must_use]
	pub fn logo_src(&self) -> String {
		let local = format!("/logos/{}", self.image);
		if FORCE_LOCAL_LOGO_PROJECT_IDS.contains(&self.id.as_str()) {
			return local;
		}
		match self.network.twitter_image.as_deref() {
			Some(avatar) if !avatar.is_empty() => avatar.to_string(),
			_ => local,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_metrics_count_as_zero_followers() {
		let project = Project::new("1", "Alpha");
		assert_eq!(project.followers(), 0);

		let project = Project {
			social_metrics: Some(SocialMetrics::default()),
			..Project::new("1", "Alpha")
		};
		assert_eq!(project.followers(), 0);
		assert_eq!(project.with_followers(42).followers(), 42);
	}

	#[test]
	fn catalog_json_uses_camel_case_names() {
		let json = r#"{
			"id": "abc",
			"name": "Alpha Protocol",
			"shortName": "Alpha",
			"description": "Lending.",
			"tags": ["defi"],
			"image": "alpha.png",
			"network": {"website": "https://alpha.xyz", "twitterImage": "https://img/alpha"},
			"isLive": false,
			"isTestnetLive": true,
			"socialMetrics": {"twitterFollower": 1200}
		}"#;
		let project: Project = serde_json::from_str(json).expect("parse");
		assert_eq!(project.short_name, "Alpha");
		assert!(!project.is_hidden);
		assert!(project.is_deployed());
		assert_eq!(project.followers(), 1200);
		assert_eq!(project.logo_src(), "https://img/alpha");
	}

	#[test]
	fn forced_local_logo_ignores_avatar() {
		let mut project = Project::new("a7e1c712-84a2-4457-8610-1cab7af37b16", "Endur");
		project.image = "endur.png".into();
		project.network.twitter_image = Some("https://img/endur".into());
		assert_eq!(project.logo_src(), "/logos/endur.png");

		project.id = "other".into();
		assert_eq!(project.logo_src(), "https://img/endur");

		project.network.twitter_image = Some(String::new());
		assert_eq!(project.logo_src(), "/logos/endur.png");
	}
}
