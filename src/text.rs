use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shorten `text` to at most `max_len` characters on a word boundary and
/// append an ellipsis.
///
/// The cut happens at the last whitespace character positioned at or before
/// `max_len`. When there is none the result is the bare ellipsis.
#[must_use]
pub fn shorten_text(text: &str, max_len: usize) -> Cow<'_, str> {
	if text.chars().count() <= max_len {
		return Cow::Borrowed(text);
	}

	let cut = text
		.char_indices()
		.take(max_len + 1)
		.filter(|(_, ch)| ch.is_whitespace())
		.map(|(offset, _)| offset)
		.last()
		.unwrap_or(0);

	Cow::Owned(format!("{}{ELLIPSIS}", &text[..cut]))
}
