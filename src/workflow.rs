use anyhow::{Result, anyhow};
use ecodir::directory::{DirectoryPage, DirectoryQuery, live_count, search_directory, tag_counts};
use ecodir::tags::{Tag, find_tag};
use ecodir::{Catalog, Project, ProjectSorting, related_projects, resolve_project};

use crate::cli::Command;
use crate::settings::ResolvedConfig;

/// Result of running one directory command.
#[derive(Debug)]
pub(crate) enum Outcome {
    Listing {
        query: DirectoryQuery,
        sorting: ProjectSorting,
        page: DirectoryPage,
    },
    Detail {
        project: Project,
        related: Vec<Project>,
    },
    Tags {
        counts: Vec<(&'static Tag, usize)>,
        live: usize,
    },
}

/// Runs directory commands against the configured catalog.
pub(crate) struct DirectoryWorkflow {
    catalog: Catalog,
    fallback: Catalog,
    settings: ResolvedConfig,
}

impl DirectoryWorkflow {
    pub(crate) fn from_config(settings: ResolvedConfig) -> Self {
        let fallback = Catalog::bundled();
        let catalog = match &settings.catalog_path {
            Some(path) => Catalog::load_or_fallback(path),
            None => fallback.clone(),
        };
        log::info!("catalog holds {} projects", catalog.len());
        Self::new(catalog, fallback, settings)
    }

    pub(crate) fn new(catalog: Catalog, fallback: Catalog, settings: ResolvedConfig) -> Self {
        Self {
            catalog,
            fallback,
            settings,
        }
    }

    pub(crate) fn run(&self, command: Command) -> Result<Outcome> {
        match command {
            Command::Search { keyword, tag, page } => self.search(keyword, tag, page),
            Command::Show { id } => self.show(&id),
            Command::Tags => Ok(self.tags()),
        }
    }

    fn search(&self, keyword: Option<String>, tag: Option<String>, page: usize) -> Result<Outcome> {
        if let Some(tag) = tag.as_deref()
            && find_tag(tag).is_none()
        {
            log::warn!("tag `{tag}` is not part of the category catalog");
        }

        let mut query = DirectoryQuery::default()
            .with_keyword(keyword.unwrap_or_default())
            .with_page(page)
            .with_page_size(self.settings.page_size);
        query.tag = tag;

        let visible: Vec<Project> = self.catalog.visible().cloned().collect();
        let sorting = self.settings.sorting;
        let page = search_directory(&visible, &query, Some(sorting), &self.settings.curated);
        Ok(Outcome::Listing {
            query,
            sorting,
            page,
        })
    }

    fn show(&self, id: &str) -> Result<Outcome> {
        let project = resolve_project(&self.catalog, &self.fallback, id)
            .ok_or_else(|| anyhow!("project `{id}` not found"))?;

        // Recommendations only come from the primary catalog.
        let in_primary = self
            .catalog
            .find(id)
            .is_some_and(|primary| !primary.is_hidden);
        let related = if in_primary {
            related_projects(project, self.catalog.projects(), self.settings.related_limit)
                .into_iter()
                .cloned()
                .collect()
        } else {
            Vec::new()
        };

        Ok(Outcome::Detail {
            project: project.clone(),
            related,
        })
    }

    fn tags(&self) -> Outcome {
        let visible: Vec<Project> = self.catalog.visible().cloned().collect();
        Outcome::Tags {
            counts: tag_counts(&visible),
            live: live_count(&visible),
        }
    }
}
