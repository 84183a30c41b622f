//! Built-in practice configuration sets.

use hf_chain::ConfigurationLibrary;

use crate::{DefinitionResult, library_from_str};

pub const BASE_CONFIGURATIONS: &str = "BASE_CONFIGURATIONS";
pub const NOZZLES_ALONE: &str = "NOZZLES_ALONE";
pub const BASE_FRICTION_LOSS_ITEMS_COMMON: &str = "BASE_FRICTION_LOSS_ITEMS_COMMON";

const BUILTIN_DEFINITIONS: &str = include_str!("../data/builtin.yaml");

/// The three built-in sets, in presentation order.
pub fn builtin_library() -> DefinitionResult<ConfigurationLibrary> {
    library_from_str(BUILTIN_DEFINITIONS)
}
