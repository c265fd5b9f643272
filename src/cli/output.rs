use anyhow::Result;
use ecodir::shorten_text;
use ecodir::tags::tag_refs;
use ecodir::{DirectoryPage, Project};
use serde_json::{Value, json};
use unicode_width::UnicodeWidthStr;

use crate::workflow::Outcome;

const DESCRIPTION_WIDTH: usize = 80;

/// Print a plain-text representation of a command outcome.
pub(crate) fn print_plain(outcome: &Outcome) {
	print!("{}", format_plain(outcome));
}

pub(crate) fn format_plain(outcome: &Outcome) -> String {
	let mut lines = Vec::new();
	match outcome {
		Outcome::Listing { page, .. } => {
			if page.items.is_empty() {
				lines.push("No projects found".to_string());
			} else {
				lines.extend(listing_rows(page));
			}
			lines.push(format!(
				"Page {}/{} ({} projects) [{}]",
				page.page,
				page.total_pages,
				page.total,
				page.window()
					.iter()
					.map(ToString::to_string)
					.collect::<Vec<_>>()
					.join(" ")
			));
		}
		Outcome::Detail { project, related } => {
			lines.push(format!("{} ({})", project.name, project.id));
			lines.push(format!("  Status: {}", status(project)));
			lines.push(format!("  Tags: {}", tag_labels(project).join(", ")));
			lines.push(format!("  Followers: {}", project.followers()));
			if !project.network.website.is_empty() {
				lines.push(format!("  Website: {}", project.network.website));
			}
			lines.push(format!("  Logo: {}", project.logo_src()));
			lines.push(format!("  {}", project.description));
			if !related.is_empty() {
				lines.push("Related projects:".to_string());
				for other in related {
					lines.push(format!(
						"  - {} ({})",
						other.name,
						other.tags.iter().take(2).cloned().collect::<Vec<_>>().join(" · ")
					));
				}
			}
		}
		Outcome::Tags { counts, live } => {
			for (tag, count) in counts {
				lines.push(format!("{:<16}{:>5}", tag.label, count));
			}
			lines.push(format!("{live} projects building the future"));
		}
	}

	let mut text = lines.join("\n");
	text.push('\n');
	text
}

fn listing_rows(page: &DirectoryPage) -> Vec<String> {
	let name_width = page
		.items
		.iter()
		.map(|project| project.name.width())
		.max()
		.unwrap_or(0);

	page.items
		.iter()
		.map(|project| {
			let padding = " ".repeat(name_width - project.name.width());
			format!(
				"{}{padding}  {:>9}  {}",
				project.name,
				project.followers(),
				shorten_text(&project.description, DESCRIPTION_WIDTH)
			)
		})
		.collect()
}

fn status(project: &Project) -> &'static str {
	if project.is_live {
		"Mainnet"
	} else if project.is_testnet_live {
		"Testnet"
	} else {
		"Not deployed"
	}
}

fn tag_labels(project: &Project) -> Vec<&'static str> {
	tag_refs(project).iter().map(|tag| tag.label).collect()
}

/// Format a command outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = match outcome {
		Outcome::Listing {
			query,
			sorting,
			page,
		} => json!({
			"type": "listing",
			"keyword": query.keyword,
			"tag": query.tag,
			"sorting": sorting.label(),
			"page": page.page,
			"totalPages": page.total_pages,
			"total": page.total,
			"pageWindow": page.window(),
			"projects": page.items,
		}),
		Outcome::Detail { project, related } => {
			let mut detail = serde_json::to_value(project)?;
			if let Value::Object(fields) = &mut detail {
				fields.insert("logoSrc".into(), json!(project.logo_src()));
				fields.insert("tagLabels".into(), json!(tag_labels(project)));
			}
			json!({
				"type": "project",
				"project": detail,
				"related": related,
			})
		}
		Outcome::Tags { counts, live } => json!({
			"type": "tags",
			"live": live,
			"tags": counts
				.iter()
				.map(|(tag, count)| json!({
					"value": tag.value,
					"label": tag.label,
					"count": count,
				}))
				.collect::<Vec<_>>(),
		}),
	};

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of a command outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use ecodir::directory::DirectoryQuery;
	use ecodir::{ProjectSorting, tags};

	use super::*;

	fn listing() -> Outcome {
		Outcome::Listing {
			query: DirectoryQuery::default().with_keyword("dex"),
			sorting: ProjectSorting::Followers,
			page: DirectoryPage {
				items: vec![
					Project::new("1", "ZKEX").with_followers(12),
					Project::new("2", "Ekubo Exchange").with_description(
						"Concentrated liquidity AMM with extensions, built natively for the network and its users.",
					),
				],
				total: 2,
				page: 1,
				total_pages: 1,
			},
		}
	}

	#[test]
	fn json_listing_includes_pagination_and_projects() {
		let json = format_outcome_json(&listing()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["type"], "listing");
		assert_eq!(value["keyword"], "dex");
		assert_eq!(value["sorting"], "Followers");
		assert_eq!(value["totalPages"], 1);
		assert_eq!(value["projects"][0]["shortName"], "");
		assert_eq!(value["projects"][0]["socialMetrics"]["twitterFollower"], 12);
	}

	#[test]
	fn plain_listing_aligns_and_truncates() {
		let text = format_plain(&listing());
		let lines: Vec<&str> = text.lines().collect();
		assert!(lines[0].starts_with("ZKEX            "));
		assert!(lines[1].ends_with("..."));
		assert_eq!(lines[2], "Page 1/1 (2 projects) [1]");
	}

	#[test]
	fn json_detail_adds_display_fields() {
		let outcome = Outcome::Detail {
			project: Project::new("1", "Vesu").with_tags(["defi", "custom"]),
			related: vec![Project::new("2", "Nostra")],
		};
		let value: Value =
			serde_json::from_str(&format_outcome_json(&outcome).unwrap()).expect("parse");
		assert_eq!(value["project"]["tagLabels"], json!(["DeFi"]));
		assert_eq!(value["project"]["logoSrc"], "/logos/");
		assert_eq!(value["related"][0]["name"], "Nostra");
	}

	#[test]
	fn plain_tags_list_counts() {
		let outcome = Outcome::Tags {
			counts: vec![(&tags::ECOSYSTEM_TAGS[0], 3)],
			live: 3,
		};
		let text = format_plain(&outcome);
		assert!(text.starts_with("All"));
		assert!(text.contains("3 projects building the future"));
	}
}
