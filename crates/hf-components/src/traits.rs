//! Core traits for delivery-chain components.

use crate::hose::Hose;
use hf_core::{HfResult, Real};

/// A component's share of the discharge pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PressureContribution<'a> {
    /// Fixed psi regardless of flow (nozzles, appliances, elevation, markers).
    Constant(Real),
    /// Depends on the flow through the component; only hose behaves this way.
    FlowDependent(&'a Hose),
}

impl PressureContribution<'_> {
    /// Evaluate at the given flow rate (gpm).
    pub fn at(&self, flow_rate: Real) -> HfResult<Real> {
        match self {
            PressureContribution::Constant(psi) => Ok(*psi),
            PressureContribution::FlowDependent(hose) => hose.friction_loss(flow_rate),
        }
    }

    pub fn is_flow_dependent(&self) -> bool {
        matches!(self, PressureContribution::FlowDependent(_))
    }
}

/// Behaviour shared by every component in a delivery chain.
///
/// Components are plain immutable values; everything is a deterministic
/// function of their catalog data.
pub trait DeliveryComponent: Send + Sync {
    /// Human-readable text used in scenario descriptions and walkthroughs.
    fn description(&self) -> String;

    /// Pressure this component adds to what the pump must deliver.
    fn pressure_contribution(&self) -> PressureContribution<'_>;
}
