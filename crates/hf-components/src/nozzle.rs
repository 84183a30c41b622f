//! Nozzle: the flow-producing end of a line.

use crate::catalog::{NozzleKind, diameter_description, nozzle_flow_rate};
use crate::traits::{DeliveryComponent, PressureContribution};
use hf_core::{HfResult, Real};

/// A nozzle of a catalog kind, optionally narrowed by tip diameter or model identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Nozzle {
    pub kind: NozzleKind,
    pub diameter: Option<Real>,
    pub identifier: Option<String>,
}

impl Nozzle {
    /// Nozzle whose kind has a single fixed flow rate.
    pub fn fixed(kind: NozzleKind) -> Self {
        Self {
            kind,
            diameter: None,
            identifier: None,
        }
    }

    pub fn with_diameter(kind: NozzleKind, diameter: Real) -> Self {
        Self {
            kind,
            diameter: Some(diameter),
            identifier: None,
        }
    }

    pub fn with_identifier(kind: NozzleKind, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            diameter: None,
            identifier: Some(identifier.into()),
        }
    }

    /// Flow rate in gpm, resolved against the catalog.
    pub fn flow_rate(&self) -> HfResult<Real> {
        nozzle_flow_rate(self.kind, self.diameter, self.identifier.as_deref())
    }

    pub fn nozzle_pressure(&self) -> Real {
        self.kind.nozzle_pressure()
    }
}

impl DeliveryComponent for Nozzle {
    fn description(&self) -> String {
        match self.diameter {
            Some(d) => format!("a {} {}", diameter_description(d), self.kind.description()),
            None => format!("a {}", self.kind.description()),
        }
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        PressureContribution::Constant(self.nozzle_pressure())
    }
}
