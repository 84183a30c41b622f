//! Per-component transforms applied while duplicating a chain.

use hf_components::{Elevation, Hose, IntermediateAppliance, Nozzle, SectionStart};
use hf_core::Real;

/// Hook points consulted by [`ChainLink::duplicate`](crate::ChainLink::duplicate).
///
/// Each method receives the original component and returns the one to put in
/// the copy. Component hooks are only called for links on the tail: the
/// single unbranched run nearest the pump. Links at or past a branch are
/// copied unchanged. The default for every hook is an unchanged copy.
pub trait ComponentTransform {
    fn nozzle(&mut self, nozzle: &Nozzle) -> Nozzle {
        nozzle.clone()
    }

    fn tail_hose(&mut self, hose: &Hose) -> Hose {
        hose.clone()
    }

    fn tail_appliance(&mut self, appliance: &IntermediateAppliance) -> IntermediateAppliance {
        *appliance
    }

    fn elevation(&mut self, elevation: &Elevation) -> Elevation {
        *elevation
    }

    fn section(&mut self, section: &SectionStart) -> SectionStart {
        section.clone()
    }

    /// Forced flow rate for the copied link. Called for every link.
    fn forced_flow_rate(&mut self, current: Option<Real>) -> Option<Real> {
        current
    }
}

/// Copies everything unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ComponentTransform for Identity {}

type Hook<'a, T> = Option<Box<dyn FnMut(&T) -> T + 'a>>;

/// Closure-based transform set; any hook left unset copies unchanged.
#[derive(Default)]
pub struct TransformSet<'a> {
    nozzle: Hook<'a, Nozzle>,
    tail_hose: Hook<'a, Hose>,
    tail_appliance: Hook<'a, IntermediateAppliance>,
    elevation: Hook<'a, Elevation>,
    section: Hook<'a, SectionStart>,
    forced_flow_rate: Option<Real>,
}

impl<'a> TransformSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nozzle(mut self, f: impl FnMut(&Nozzle) -> Nozzle + 'a) -> Self {
        self.nozzle = Some(Box::new(f));
        self
    }

    pub fn tail_hose(mut self, f: impl FnMut(&Hose) -> Hose + 'a) -> Self {
        self.tail_hose = Some(Box::new(f));
        self
    }

    pub fn tail_appliance(
        mut self,
        f: impl FnMut(&IntermediateAppliance) -> IntermediateAppliance + 'a,
    ) -> Self {
        self.tail_appliance = Some(Box::new(f));
        self
    }

    pub fn elevation(mut self, f: impl FnMut(&Elevation) -> Elevation + 'a) -> Self {
        self.elevation = Some(Box::new(f));
        self
    }

    pub fn section(mut self, f: impl FnMut(&SectionStart) -> SectionStart + 'a) -> Self {
        self.section = Some(Box::new(f));
        self
    }

    /// Force this flow rate on every copied link.
    pub fn forced_flow_rate(mut self, flow_rate: Real) -> Self {
        self.forced_flow_rate = Some(flow_rate);
        self
    }
}

fn apply<T: Clone>(hook: &mut Hook<'_, T>, value: &T) -> T {
    match hook {
        Some(f) => f(value),
        None => value.clone(),
    }
}

impl ComponentTransform for TransformSet<'_> {
    fn nozzle(&mut self, nozzle: &Nozzle) -> Nozzle {
        apply(&mut self.nozzle, nozzle)
    }

    fn tail_hose(&mut self, hose: &Hose) -> Hose {
        apply(&mut self.tail_hose, hose)
    }

    fn tail_appliance(&mut self, appliance: &IntermediateAppliance) -> IntermediateAppliance {
        apply(&mut self.tail_appliance, appliance)
    }

    fn elevation(&mut self, elevation: &Elevation) -> Elevation {
        apply(&mut self.elevation, elevation)
    }

    fn section(&mut self, section: &SectionStart) -> SectionStart {
        apply(&mut self.section, section)
    }

    fn forced_flow_rate(&mut self, current: Option<Real>) -> Option<Real> {
        self.forced_flow_rate.or(current)
    }
}
