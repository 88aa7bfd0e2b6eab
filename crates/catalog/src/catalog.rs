//! The immutable catalog and its loaders.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use common::CategoryId;
use serde::de::DeserializeOwned;

use crate::model::{Category, Startup};
use crate::{CatalogError, Result};

/// Read access to a static dataset of startups and categories.
///
/// Implementations hand out shared slices only; the query side never
/// mutates the dataset.
pub trait DatasetSource {
    /// Returns every startup, in source order.
    fn startups(&self) -> &[Startup];

    /// Returns every category definition, in source order.
    fn categories(&self) -> &[Category];
}

/// The startup catalog, loaded once and read-only afterwards.
///
/// Cloning is cheap: both lists are shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    startups: Arc<[Startup]>,
    categories: Arc<[Category]>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate startup names and category ids.
    pub fn new(startups: Vec<Startup>, categories: Vec<Category>) -> Result<Self> {
        let mut names = HashSet::with_capacity(startups.len());
        for startup in &startups {
            if !names.insert(startup.name.as_str()) {
                return Err(CatalogError::DuplicateStartup(startup.name.clone()));
            }
        }

        let mut ids = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !ids.insert(&category.id) {
                return Err(CatalogError::DuplicateCategory(category.id.clone()));
            }
        }

        let catalog = Self {
            startups: startups.into(),
            categories: categories.into(),
        };

        for (name, id) in catalog.dangling_references() {
            tracing::warn!(startup = name, category = %id, "startup references unknown category");
        }

        Ok(catalog)
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self {
            startups: Arc::from(Vec::new()),
            categories: Arc::from(Vec::new()),
        }
    }

    /// Parses a catalog from the startups and categories JSON documents.
    pub fn from_json(startups_json: &str, categories_json: &str) -> Result<Self> {
        let startups: Vec<Startup> = parse_document("startups", startups_json)?;
        let categories: Vec<Category> = parse_document("categories", categories_json)?;

        Self::new(startups, categories)
    }

    /// Reads and parses the two JSON dataset files.
    #[tracing::instrument(skip_all, fields(startups = %startups_path.as_ref().display()))]
    pub fn load(
        startups_path: impl AsRef<Path>,
        categories_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let startups_json = read_file(startups_path.as_ref())?;
        let categories_json = read_file(categories_path.as_ref())?;

        let catalog = Self::from_json(&startups_json, &categories_json)?;
        tracing::info!(
            startups = catalog.startups.len(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Looks up a startup by its unique name.
    pub fn startup(&self, name: &str) -> Option<&Startup> {
        self.startups.iter().find(|s| s.name == name)
    }

    /// Looks up a category definition by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Lists (startup name, category id) pairs whose category is not defined.
    pub fn dangling_references(&self) -> Vec<(&str, &CategoryId)> {
        let known: HashSet<&CategoryId> = self.categories.iter().map(|c| &c.id).collect();
        self.startups
            .iter()
            .flat_map(|s| s.category_ids.iter().map(move |id| (s.name.as_str(), id)))
            .filter(|(_, id)| !known.contains(id))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl DatasetSource for Catalog {
    fn startups(&self) -> &[Startup] {
        &self.startups
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

fn parse_document<T: DeserializeOwned>(document: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| CatalogError::Deserialization { document, source })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}
