use crate::project::Project;

/// Return the first project whose id equals `id`.
#[must_use]
pub fn find_by_id<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
	projects.iter().find(|project| project.id == id)
}
