//! Reference tables consulted by light classification
//!
//! All tables are ordered lists rather than maps: the first matching entry
//! wins, so file order is part of the data.

mod builtin;
pub mod color;
pub mod models;
pub mod texture;

pub use color::{ColorEntry, ColorTable};
pub use models::{ModelPathEntry, ModelPaths};
pub use texture::{match_path, CategoryTable, TableEntry, TextureTables};
