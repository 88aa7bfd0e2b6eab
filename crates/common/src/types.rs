use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Textual sentinel meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Identifier of a category.
///
/// Startups reference categories by id; the id is not required to exist in
/// the category list.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a category ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the category ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Direction of the founding-year sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[serde(alias = "asc")]
    Ascending,

    /// Most recently founded first.
    #[default]
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Returns the short name used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a sort order string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order '{0}', expected 'asc' or 'desc'")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// The category filter selected by the user.
///
/// `All` is the "no filter" sentinel, written as `"all"` in text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Only(CategoryId),
}

impl CategorySelection {
    /// Returns the selected category, or `None` for `All`.
    pub fn category_id(&self) -> Option<&CategoryId> {
        match self {
            CategorySelection::All => None,
            CategorySelection::Only(id) => Some(id),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategorySelection::All)
    }

    /// Returns the text form: `"all"` or the category id.
    pub fn as_str(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(id) => id.as_str(),
        }
    }
}

impl std::fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for CategorySelection {
    fn from(s: &str) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(CategoryId::new(s))
        }
    }
}

impl From<String> for CategorySelection {
    fn from(s: String) -> Self {
        if s == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(CategoryId::from(s))
        }
    }
}

impl From<CategoryId> for CategorySelection {
    fn from(id: CategoryId) -> Self {
        CategorySelection::Only(id)
    }
}

impl Serialize for CategorySelection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CategorySelection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(CategorySelection::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_id_display_and_as_str() {
        let id = CategoryId::new("fintech");
        assert_eq!(id.as_str(), "fintech");
        assert_eq!(id.to_string(), "fintech");
    }

    #[test]
    fn category_id_serializes_transparently() {
        let id = CategoryId::new("ai");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ai\"");
    }

    #[test]
    fn sort_order_defaults_to_descending() {
        assert_eq!(SortOrder::default(), SortOrder::Descending);
    }

    #[test]
    fn sort_order_parses_short_and_long_names() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("DESC".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!(" ascending ".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!(
            "sideways".parse::<SortOrder>(),
            Err(ParseSortOrderError("sideways".to_string()))
        );
    }

    #[test]
    fn sort_order_toggle() {
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    }

    #[test]
    fn sort_order_accepts_short_alias_in_json() {
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Ascending);
        assert_eq!(
            serde_json::to_string(&SortOrder::Descending).unwrap(),
            "\"descending\""
        );
    }

    #[test]
    fn selection_all_sentinel() {
        assert_eq!(CategorySelection::from("all"), CategorySelection::All);
        assert!(CategorySelection::default().is_all());
        assert_eq!(CategorySelection::All.category_id(), None);
    }

    #[test]
    fn selection_concrete_id() {
        let selection = CategorySelection::from("fin");
        assert_eq!(selection.category_id(), Some(&CategoryId::new("fin")));
        assert_eq!(selection.to_string(), "fin");
    }

    #[test]
    fn selection_serializes_as_text() {
        let json = serde_json::to_string(&CategorySelection::All).unwrap();
        assert_eq!(json, "\"all\"");

        let parsed: CategorySelection = serde_json::from_str("\"ai\"").unwrap();
        assert_eq!(parsed, CategorySelection::Only(CategoryId::new("ai")));
    }
}
