use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading a project catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	/// The catalog file could not be read.
	#[error("failed to read catalog {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The catalog contents are not a JSON array of projects.
	#[error("failed to parse catalog{}", origin_suffix(.path.as_ref()))]
	Parse {
		path: Option<PathBuf>,
		#[source]
		source: serde_json::Error,
	},
}

fn origin_suffix(path: Option<&PathBuf>) -> String {
	path.map(|path| format!(" {}", path.display()))
		.unwrap_or_default()
}
