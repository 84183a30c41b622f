//! Intermediate appliances and section markers: fixed pressure contributions.

use crate::catalog::ApplianceKind;
use crate::traits::{DeliveryComponent, PressureContribution};

/// A wye, Siamese, standpipe, master-stream device or aerial waterway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntermediateAppliance {
    pub kind: ApplianceKind,
}

impl IntermediateAppliance {
    pub fn new(kind: ApplianceKind) -> Self {
        Self { kind }
    }
}

impl DeliveryComponent for IntermediateAppliance {
    fn description(&self) -> String {
        self.kind.description().to_string()
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        PressureContribution::Constant(self.kind.friction_loss())
    }
}

/// Narration marker: the links after this one form a named sub-assembly.
///
/// Contributes nothing to pressure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionStart {
    pub label: String,
}

impl SectionStart {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl DeliveryComponent for SectionStart {
    fn description(&self) -> String {
        self.label.clone()
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        PressureContribution::Constant(0.0)
    }
}
