//! hf-components: component catalog and component variants for hose delivery chains.
//!
//! Provides:
//! - The static catalog (nozzle kinds, hose friction-loss tables, appliances)
//! - Nozzle, Hose, IntermediateAppliance, Elevation and SectionStart values
//! - The closed [`Component`] sum type used by the chain graph
//!
//! Every component implements [`DeliveryComponent`], exposing a description
//! and a pressure contribution that is either a constant or, for hose, a
//! function of the flow rate through it.
//!
//! # Example
//!
//! ```
//! use hf_components::{Hose, Nozzle, NozzleKind, DeliveryComponent};
//!
//! let nozzle = Nozzle::with_diameter(NozzleKind::HandFogLowPressure, 1.5);
//! let flow = nozzle.flow_rate().unwrap();
//! let hose = Hose::new(1.75, 200);
//!
//! assert_eq!(flow, 150.0);
//! assert_eq!(hose.pressure_contribution().at(flow).unwrap(), 64.0);
//! ```

pub mod appliance;
pub mod catalog;
pub mod component;
pub mod elevation;
pub mod hose;
pub mod nozzle;
pub mod traits;

// Re-exports
pub use appliance::{IntermediateAppliance, SectionStart};
pub use catalog::{
    ApplianceKind, NozzleKind, PSI_PER_FLOOR, diameter_description, hose_friction_loss,
    nozzle_flow_rate,
};
pub use component::{Component, ComponentKind};
pub use elevation::{Elevation, elevation_text, verbose_elevation_text};
pub use hose::Hose;
pub use nozzle::Nozzle;
pub use traits::{DeliveryComponent, PressureContribution};
