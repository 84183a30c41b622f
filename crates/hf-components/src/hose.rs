//! Hose: friction loss depends on diameter, length and the flow through it.

use crate::catalog::{diameter_description, hose_friction_loss};
use crate::traits::{DeliveryComponent, PressureContribution};
use hf_core::{HfResult, Real};

#[derive(Debug, Clone, PartialEq)]
pub struct Hose {
    /// Inside diameter in inches.
    pub diameter: Real,
    /// Length in feet.
    pub length: u32,
}

impl Hose {
    pub fn new(diameter: Real, length: u32) -> Self {
        Self { diameter, length }
    }

    /// Friction loss (psi) for this hose at `flow_rate` gpm.
    pub fn friction_loss(&self, flow_rate: Real) -> HfResult<Real> {
        hose_friction_loss(self.diameter, self.length, flow_rate)
    }

    /// Same diameter, new length.
    pub fn with_length(&self, length: u32) -> Self {
        Self {
            diameter: self.diameter,
            length,
        }
    }
}

impl DeliveryComponent for Hose {
    fn description(&self) -> String {
        format!(
            "{}' of {} hose",
            self.length,
            diameter_description(self.diameter)
        )
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        PressureContribution::FlowDependent(self)
    }
}
