//! Project catalog
//!
//! The fixed list of projects shown in the strip. The built-in catalog is
//! embedded from `assets/projects.toml`; a replacement can be loaded from disk.

use anyhow::Context;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FolioError, Result};

const BUILTIN_CATALOG: &str = include_str!("../assets/projects.toml");

/// Shown in the modal when a project has no description
pub const DEFAULT_DESCRIPTION: &str = "This is a detailed description of the project. It explains the goals, challenges, and outcomes of the project. The description provides context about why the project was undertaken and what problems it solves.";

/// A showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    /// Card thumbnail
    pub image: String,
    /// Carousel images; falls back to the thumbnail
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// External "View Project" link
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    /// Images for the details carousel
    pub fn gallery(&self) -> Vec<String> {
        match &self.images {
            Some(images) if !images.is_empty() => images.clone(),
            _ => vec![self.image.clone()],
        }
    }

    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Ordered projects with an id index
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    index: FxHashMap<u32, usize>,
}

impl Catalog {
    /// Build a catalog; project ids must be unique
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, project) in projects.iter().enumerate() {
            if index.insert(project.id, position).is_some() {
                return Err(FolioError::Catalog(format!(
                    "duplicate project id {}",
                    project.id
                )));
            }
        }
        Ok(Self { projects, index })
    }

    /// The embedded reference catalog
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(input).map_err(|e| FolioError::Catalog(e.to_string()))?;
        Self::new(file.projects)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn get(&self, id: u32) -> Option<&Project> {
        self.index.get(&id).map(|&position| &self.projects[position])
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
