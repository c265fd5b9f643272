use crate::project::Project;

/// Points awarded per matching condition. Conditions are checked
/// independently and their points add up, so an exact name match also
/// collects the prefix and substring points for that field.
const NAME_EXACT: u32 = 120;
const SHORT_NAME_EXACT: u32 = 110;
const NAME_PREFIX: u32 = 95;
const SHORT_NAME_PREFIX: u32 = 85;
const NAME_CONTAINS: u32 = 75;
const SHORT_NAME_CONTAINS: u32 = 65;
const TAG_CONTAINS: u32 = 35;
const DESCRIPTION_CONTAINS: u32 = 20;

/// Strip surrounding whitespace, including the byte-order mark that pasted
/// search text sometimes carries.
fn trim_keyword(keyword: &str) -> &str {
	keyword.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Score how well `project` matches a free-text `keyword`.
///
/// Comparison is case-insensitive against the trimmed keyword. A blank
/// keyword scores `0`.
#[must_use]
pub fn relevance_score(project: &Project, keyword: &str) -> u32 {
	let keyword = trim_keyword(keyword).to_lowercase();
	if keyword.is_empty() {
		return 0;
	}

	let name = project.name.to_lowercase();
	let short_name = project.short_name.to_lowercase();
	let keyword = keyword.as_str();

	let mut score = 0;
	if name == keyword {
		score += NAME_EXACT;
	}
	if short_name == keyword {
		score += SHORT_NAME_EXACT;
	}
	if name.starts_with(keyword) {
		score += NAME_PREFIX;
	}
	if short_name.starts_with(keyword) {
		score += SHORT_NAME_PREFIX;
	}
	if name.contains(keyword) {
		score += NAME_CONTAINS;
	}
	if short_name.contains(keyword) {
		score += SHORT_NAME_CONTAINS;
	}
	if project
		.tags
		.iter()
		.any(|tag| tag.to_lowercase().contains(keyword))
	{
		score += TAG_CONTAINS;
	}
	if project.description.to_lowercase().contains(keyword) {
		score += DESCRIPTION_CONTAINS;
	}

	score
}

/// Filter predicate for the directory search box. A blank keyword keeps
/// every project.
#[must_use]
pub fn includes_keyword(project: &Project, keyword: &str) -> bool {
	if trim_keyword(keyword).is_empty() {
		return true;
	}
	relevance_score(project, keyword) > 0
}
