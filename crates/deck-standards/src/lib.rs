#![deny(unsafe_code)]

pub mod colors;
pub mod error;
pub mod pins;
pub mod registry;

pub use crate::colors::{palette_color, rarity_color};
pub use crate::error::StandardsError;
pub use crate::pins::{
    FRAMEWORK_DEPENDENCIES, HOMEPAGE_URL, PLUGIN_DEPENDENCIES, framework_dependencies,
};
pub use crate::registry::{
    Effect, StatDefinition, VALUE_PLACEHOLDER, all_definitions, definition, lookup,
};
