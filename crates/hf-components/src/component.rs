//! The closed set of components a delivery chain is built from.

use crate::appliance::{IntermediateAppliance, SectionStart};
use crate::elevation::Elevation;
use crate::hose::Hose;
use crate::nozzle::Nozzle;
use crate::traits::{DeliveryComponent, PressureContribution};
use hf_core::HfError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Nozzle(Nozzle),
    Hose(Hose),
    IntermediateAppliance(IntermediateAppliance),
    Elevation(Elevation),
    SectionStart(SectionStart),
}

/// Discriminant of [`Component`], used where a kind is named in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Nozzle,
    Hose,
    IntermediateAppliance,
    Elevation,
    SectionStart,
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::Nozzle(_) => ComponentKind::Nozzle,
            Component::Hose(_) => ComponentKind::Hose,
            Component::IntermediateAppliance(_) => ComponentKind::IntermediateAppliance,
            Component::Elevation(_) => ComponentKind::Elevation,
            Component::SectionStart(_) => ComponentKind::SectionStart,
        }
    }

    fn as_delivery(&self) -> &dyn DeliveryComponent {
        match self {
            Component::Nozzle(c) => c,
            Component::Hose(c) => c,
            Component::IntermediateAppliance(c) => c,
            Component::Elevation(c) => c,
            Component::SectionStart(c) => c,
        }
    }

    pub fn as_nozzle(&self) -> Option<&Nozzle> {
        match self {
            Component::Nozzle(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_hose(&self) -> Option<&Hose> {
        match self {
            Component::Hose(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_elevation(&self) -> Option<&Elevation> {
        match self {
            Component::Elevation(e) => Some(e),
            _ => None,
        }
    }
}

impl DeliveryComponent for Component {
    fn description(&self) -> String {
        self.as_delivery().description()
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        self.as_delivery().pressure_contribution()
    }
}

impl From<Nozzle> for Component {
    fn from(n: Nozzle) -> Self {
        Component::Nozzle(n)
    }
}

impl From<Hose> for Component {
    fn from(h: Hose) -> Self {
        Component::Hose(h)
    }
}

impl From<IntermediateAppliance> for Component {
    fn from(a: IntermediateAppliance) -> Self {
        Component::IntermediateAppliance(a)
    }
}

impl From<Elevation> for Component {
    fn from(e: Elevation) -> Self {
        Component::Elevation(e)
    }
}

impl From<SectionStart> for Component {
    fn from(s: SectionStart) -> Self {
        Component::SectionStart(s)
    }
}

impl ComponentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Nozzle => "Nozzle",
            ComponentKind::Hose => "Hose",
            ComponentKind::IntermediateAppliance => "IntermediateAppliance",
            ComponentKind::Elevation => "Elevation",
            ComponentKind::SectionStart => "SectionStart",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = HfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Nozzle" => Ok(ComponentKind::Nozzle),
            "Hose" => Ok(ComponentKind::Hose),
            "IntermediateAppliance" | "Appliance" => Ok(ComponentKind::IntermediateAppliance),
            "Elevation" => Ok(ComponentKind::Elevation),
            "SectionStart" | "Section" => Ok(ComponentKind::SectionStart),
            other => Err(HfError::UnrecognizedComponentType {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ApplianceKind, NozzleKind};

    #[test]
    fn only_hose_is_flow_dependent() {
        let components: Vec<Component> = vec![
            Nozzle::fixed(NozzleKind::MasterFog).into(),
            Hose::new(2.5, 100).into(),
            IntermediateAppliance::new(ApplianceKind::Wye).into(),
            Elevation::new(2).into(),
            SectionStart::new("marker").into(),
        ];
        let flow_dependent: Vec<ComponentKind> = components
            .iter()
            .filter(|c| c.pressure_contribution().is_flow_dependent())
            .map(Component::kind)
            .collect();
        assert_eq!(flow_dependent, vec![ComponentKind::Hose]);
    }

    #[test]
    fn kind_round_trips_through_text() {
        for kind in [
            ComponentKind::Nozzle,
            ComponentKind::Hose,
            ComponentKind::IntermediateAppliance,
            ComponentKind::Elevation,
            ComponentKind::SectionStart,
        ] {
            assert_eq!(kind.to_string().parse::<ComponentKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = "Pump".parse::<ComponentKind>().unwrap_err();
        assert_eq!(
            err,
            HfError::UnrecognizedComponentType {
                kind: "Pump".into()
            }
        );
    }

    #[test]
    fn component_delegates_description() {
        let c: Component = Elevation::new(0).into();
        assert_eq!(c.description(), "the ground floor");
    }
}
