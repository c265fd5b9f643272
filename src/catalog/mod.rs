//! Project catalogs: a JSON file supplied by the caller, or the static list
//! bundled with the crate that stands in when the file is unavailable.

mod error;

use std::fs;
use std::path::Path;

pub use error::CatalogError;

use crate::project::Project;
use crate::search::find_by_id;

/// Most records accepted from a single catalog.
pub const CATALOG_LIMIT: usize = 1_000;

const BUNDLED_CATALOG: &str = include_str!("../../data/projects.json");

/// An in-memory snapshot of directory entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
	projects: Vec<Project>,
}

impl Catalog {
	#[must_use]
	pub fn new(mut projects: Vec<Project>) -> Self {
		if projects.len() > CATALOG_LIMIT {
			log::warn!(
				"catalog holds {} projects; keeping the first {CATALOG_LIMIT}",
				projects.len()
			);
			projects.truncate(CATALOG_LIMIT);
		}
		Self { projects }
	}

	/// Parse a JSON array of project records.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Parse`] when the text is not a valid catalog.
	pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
		let projects = serde_json::from_str(json)
			.map_err(|source| CatalogError::Parse { path: None, source })?;
		Ok(Self::new(projects))
	}

	/// Read and parse a catalog file.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::Read`] when the file cannot be read and
	/// [`CatalogError::Parse`] when its contents are invalid.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let projects = serde_json::from_str(&json).map_err(|source| CatalogError::Parse {
			path: Some(path.to_path_buf()),
			source,
		})?;
		log::debug!("loaded catalog from {}", path.display());
		Ok(Self::new(projects))
	}

	/// The static catalog compiled into the crate.
	#[must_use]
	pub fn bundled() -> Self {
		match Self::from_json_str(BUNDLED_CATALOG) {
			Ok(catalog) => catalog,
			Err(err) => {
				log::error!("bundled catalog is invalid: {err}");
				Self::default()
			}
		}
	}

	/// Load `path`, falling back to the bundled catalog when it cannot be
	/// read or parsed.
	#[must_use]
	pub fn load_or_fallback(path: impl AsRef<Path>) -> Self {
		match Self::from_path(path) {
			Ok(catalog) => catalog,
			Err(err) => {
				log::warn!("{err}; using the bundled catalog");
				Self::bundled()
			}
		}
	}

	#[must_use]
	pub fn projects(&self) -> &[Project] {
		&self.projects
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.projects.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.projects.is_empty()
	}

	#[must_use]
	pub fn find(&self, id: &str) -> Option<&Project> {
		find_by_id(&self.projects, id)
	}

	/// Projects that should appear anywhere on the site.
	pub fn visible(&self) -> impl Iterator<Item = &Project> {
		self.projects.iter().filter(|project| !project.is_hidden)
	}
}

/// Resolve a detail-page project: the primary catalog first, then the
/// fallback when the primary entry is missing or hidden. Hidden fallback
/// entries are not found either.
#[must_use]
pub fn resolve_project<'a>(
	primary: &'a Catalog,
	fallback: &'a Catalog,
	id: &str,
) -> Option<&'a Project> {
	if let Some(project) = primary.find(id)
		&& !project.is_hidden
	{
		return Some(project);
	}
	fallback.find(id).filter(|project| !project.is_hidden)
}
