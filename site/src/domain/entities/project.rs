//! Project domain entity
//!
//! Entries of the showcase grid. The table is loaded once at startup and never
//! changes afterwards.

use serde::{Deserialize, Serialize};

/// Outbound links shown next to a project's tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: String,
    pub hosted: String,
}

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Path of the logo image
    pub logo: String,
    /// CSS class for the tile background
    pub background_color: String,
    pub links: ProjectLinks,
}

/// The ordered, immutable project table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        fn project(id: i64, name: &str, logo: &str, background_color: &str) -> Project {
            Project {
                id,
                name: name.to_string(),
                logo: logo.to_string(),
                background_color: background_color.to_string(),
                links: ProjectLinks {
                    github: "#".to_string(),
                    hosted: "#".to_string(),
                },
            }
        }

        Self::new(vec![
            project(0, "Pokemon Application", "/pokemon.png", "bg-amber-400"),
            project(1, "Bifrost Application", "/bifrost.png", "bg-green-400"),
            project(2, "Planet Visualizer Application", "/planet.png", "bg-orange-400"),
        ])
    }
}
