//! Keyword matching over project records.

mod lookup;
mod relevance;

pub use lookup::find_by_id;
pub use relevance::{includes_keyword, relevance_score};
