//! hf-scenarios: practice configuration sets and scenario generation.
//!
//! - built-in configuration library (compiled-in definition data)
//! - YAML definition files for user-authored sets
//! - randomized "realistic" variations of a base set

pub mod bounds;
pub mod build;
pub mod builtin;
pub mod randomizer;
pub mod schema;
pub mod validate;

pub use bounds::{FloorRange, LengthRange, RealisticBounds};
pub use build::{build_library, library_to_document};
pub use builtin::builtin_library;
pub use randomizer::{build_realistic_configurations_set, realistic_set};
pub use schema::*;
pub use validate::{ValidationError, validate_document};

use hf_chain::ConfigurationLibrary;
use hf_core::HfError;
use std::path::Path;

pub type DefinitionResult<T> = Result<T, DefinitionError>;

#[derive(thiserror::Error, Debug)]
pub enum DefinitionError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid component at {context}: {source}")]
    Component { context: String, source: HfError },

    #[error(transparent)]
    Core(#[from] HfError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse and validate a definition document.
pub fn document_from_str(content: &str) -> DefinitionResult<DefinitionDocument> {
    let document: DefinitionDocument = serde_yaml::from_str(content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn library_from_str(content: &str) -> DefinitionResult<ConfigurationLibrary> {
    build_library(&document_from_str(content)?)
}

pub fn load_yaml(path: &Path) -> DefinitionResult<DefinitionDocument> {
    let content = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loading definitions");
    document_from_str(&content)
}

pub fn load_library(path: &Path) -> DefinitionResult<ConfigurationLibrary> {
    build_library(&load_yaml(path)?)
}

pub fn save_yaml(path: &Path, document: &DefinitionDocument) -> DefinitionResult<()> {
    validate_document(document)?;
    let content = serde_yaml::to_string(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_bounds_yaml(path: &Path) -> DefinitionResult<RealisticBounds> {
    let content = std::fs::read_to_string(path)?;
    let bounds: RealisticBounds = serde_yaml::from_str(&content)?;
    bounds.validate()?;
    Ok(bounds)
}
