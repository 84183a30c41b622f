//! Definition file schema for user-authored configuration sets.

use hf_components::{ApplianceKind, NozzleKind};
use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefinitionDocument {
    pub version: u32,
    #[serde(default)]
    pub sets: Vec<SetDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetDef {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub chains: Vec<ChainDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainDef {
    /// Description template; see `hf_chain::Description::Template`.
    pub description: String,
    #[serde(flatten)]
    pub line: LineDef,
}

/// A straight run of components, pump side first, optionally ending in branches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_flow_rate: Option<f64>,
    pub components: Vec<ComponentDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub branches: Vec<LineDef>,
}

/// One component. `type` names the variant; the other fields it needs are:
///
/// | type | fields |
/// |------|--------|
/// | `Nozzle` | `nozzle`, optional `diameter` / `identifier` |
/// | `Hose` | `diameter`, `length` |
/// | `IntermediateAppliance` | `appliance` |
/// | `Elevation` | `floor_count` |
/// | `SectionStart` | `label` |
///
/// Any component may also carry `forced_flow_rate`, which overrides the
/// line's rate for that link only.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ComponentDef {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forced_flow_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nozzle: Option<NozzleKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appliance: Option<ApplianceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
