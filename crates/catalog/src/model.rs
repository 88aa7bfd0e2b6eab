//! Startup and category records.

use common::CategoryId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A catalog entry.
///
/// Only `name`, `category_ids` and `founded_year` take part in queries.
/// Every other field of the source document is kept in `attributes` and
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    /// Unique within the catalog; used as the stable key.
    pub name: String,

    #[serde(default)]
    pub category_ids: Vec<CategoryId>,

    pub founded_year: i32,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Startup {
    /// Creates a startup with no categories and no extra attributes.
    pub fn new(name: impl Into<String>, founded_year: i32) -> Self {
        Self {
            name: name.into(),
            category_ids: Vec::new(),
            founded_year,
            attributes: Map::new(),
        }
    }

    /// Adds category memberships.
    pub fn with_categories<I, C>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CategoryId>,
    {
        self.category_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Sets a display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns true if this startup belongs to the given category.
    pub fn in_category(&self, id: &CategoryId) -> bool {
        self.category_ids.contains(id)
    }

    /// Returns a string attribute, if present.
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

/// A category definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Category {
    /// Creates a category with no display attributes.
    pub fn new(id: impl Into<CategoryId>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Sets a display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the `name` attribute, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.attributes
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_else(|| self.id.as_str())
    }
}
