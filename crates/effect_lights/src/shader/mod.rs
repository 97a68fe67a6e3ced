//! Effect shader data carriers
//!
//! These types only hold what light classification reads (texture paths,
//! flags, colors) and the one field it writes (the addon model list).

pub mod descriptor;
pub mod flags;
pub mod form;
pub mod models;

pub use descriptor::{ShaderColors, ShaderDescriptor, TexturePaths};
pub use flags::ShaderFlags;
pub use form::{FormOrigin, FormRecord};
pub use models::{AddonModels, DecorationModel, ModelData};
