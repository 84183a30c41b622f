use thiserror::Error;

pub type HfResult<T> = Result<T, HfError>;

/// Every failure here is a configuration or data-integrity error. None of
/// them are transient, so callers should never retry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HfError {
    #[error("Unresolved flow rate for {nozzle}: no catalog entry matches {selector}")]
    UnresolvedFlowRate {
        nozzle: &'static str,
        selector: String,
    },

    #[error("Invalid configuration: no nozzle; unable to determine flow rate")]
    NoNozzleFound,

    #[error("Invalid configuration: conflicting elevations downstream ({first} vs {second} floors)")]
    ConflictingElevation { first: i32, second: i32 },

    #[error("Unable to find tail hose with diameter {diameter}\"")]
    TailHoseNotFound { diameter: f64 },

    #[error("Unrecognized component type: {kind}")]
    UnrecognizedComponentType { kind: String },

    #[error("No friction loss table for {diameter}\" hose")]
    UnsupportedHoseDiameter { diameter: f64 },

    #[error("Invalid floor count: {floor_count}")]
    InvalidFloorCount { floor_count: i32 },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
