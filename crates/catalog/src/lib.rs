//! Startup catalog: the static dataset the directory queries run against.
//!
//! - [`Startup`] and [`Category`] records with pass-through display attributes
//! - [`Catalog`], the immutable, cheaply cloneable dataset
//! - [`DatasetSource`] trait for read access to any dataset
//! - JSON loading via [`Catalog::from_json`] and [`Catalog::load`]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::{Catalog, DatasetSource};
pub use common::CategoryId;
pub use error::{CatalogError, Result};
pub use model::{Category, Startup};
