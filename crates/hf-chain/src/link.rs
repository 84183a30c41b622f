//! Chain links: the nodes of a delivery-chain tree.

use std::sync::OnceLock;

use hf_components::{Component, DeliveryComponent, Hose};
use hf_core::{HfError, HfResult, Real, same_key};

use crate::transform::ComponentTransform;

/// One component plus the links it feeds.
///
/// Children are ordered and exclusively owned, so a chain is always a tree:
/// zero children is a line end, one is a straight continuation, two or more
/// is a branch (a wye feeding several lines).
///
/// The flow rate is computed on first read and cached for the life of the
/// link. Links are never edited after a query; a changed scenario is a new
/// graph produced by [`ChainLink::duplicate`].
#[derive(Debug)]
pub struct ChainLink {
    component: Component,
    children: Vec<ChainLink>,
    forced_flow_rate: Option<Real>,
    flow_rate: OnceLock<Real>,
}

impl ChainLink {
    pub fn new(component: impl Into<Component>) -> Self {
        Self {
            component: component.into(),
            children: Vec::new(),
            forced_flow_rate: None,
            flow_rate: OnceLock::new(),
        }
    }

    /// Use a fixed flow rate here instead of looking downstream for a nozzle.
    pub fn with_forced_flow_rate(mut self, flow_rate: Real) -> Self {
        self.forced_flow_rate = Some(flow_rate);
        self.flow_rate = OnceLock::new();
        self
    }

    /// Append one downstream link.
    pub fn then(mut self, next: ChainLink) -> Self {
        self.children.push(next);
        self.flow_rate = OnceLock::new();
        self
    }

    /// Append several downstream links at once.
    pub fn branch(mut self, next: impl IntoIterator<Item = ChainLink>) -> Self {
        self.children.extend(next);
        self.flow_rate = OnceLock::new();
        self
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn children(&self) -> &[ChainLink] {
        &self.children
    }

    pub fn forced_flow_rate(&self) -> Option<Real> {
        self.forced_flow_rate
    }

    pub fn is_branch(&self) -> bool {
        self.children.len() > 1
    }

    /// Flow rate (gpm) through this link.
    ///
    /// A forced rate wins, then a nozzle's own rate; otherwise the sum of
    /// everything downstream. A link with neither and nothing downstream has
    /// no way to know its flow and is rejected.
    pub fn flow_rate(&self) -> HfResult<Real> {
        if let Some(flow_rate) = self.flow_rate.get() {
            return Ok(*flow_rate);
        }
        let computed = self.compute_flow_rate()?;
        Ok(*self.flow_rate.get_or_init(|| computed))
    }

    fn compute_flow_rate(&self) -> HfResult<Real> {
        if let Some(forced) = self.forced_flow_rate {
            return Ok(forced);
        }
        if let Component::Nozzle(nozzle) = &self.component {
            return nozzle.flow_rate();
        }
        if self.children.is_empty() {
            return Err(HfError::NoNozzleFound);
        }
        self.children
            .iter()
            .try_fold(0.0, |total, child| Ok(total + child.flow_rate()?))
    }

    /// This component's own pressure contribution at this link's flow rate.
    pub fn pressure_delta(&self) -> HfResult<Real> {
        let contribution = self.component.pressure_contribution();
        if contribution.is_flow_dependent() {
            contribution.at(self.flow_rate()?)
        } else {
            contribution.at(0.0)
        }
    }

    /// Pressure the pump must supply at this point.
    ///
    /// A pump delivers one discharge pressure to every branch downstream of
    /// it, so where branches need different pressures the greatest one is
    /// taken rather than the sum.
    pub fn total_needed_pressure(&self) -> HfResult<Real> {
        let own = self.pressure_delta()?;
        let downstream = self
            .children
            .iter()
            .map(ChainLink::total_needed_pressure)
            .try_fold(0.0_f64, |max, p| p.map(|p| max.max(p)))?;
        Ok(own + downstream)
    }

    /// Every elevation floor count at or below this link, depth first.
    pub fn all_downstream_elevations(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.collect_elevations(&mut out);
        out
    }

    fn collect_elevations(&self, out: &mut Vec<i32>) {
        if let Component::Elevation(e) = &self.component {
            out.push(e.floor_count);
        }
        for child in &self.children {
            child.collect_elevations(out);
        }
    }

    /// The single elevation that applies downstream of here (0 when none is given).
    pub fn downstream_elevation(&self) -> HfResult<i32> {
        let elevations = self.all_downstream_elevations();
        let Some((&first, rest)) = elevations.split_first() else {
            return Ok(0);
        };
        match rest.iter().find(|&&e| e != first) {
            Some(&second) => Err(HfError::ConflictingElevation { first, second }),
            None => Ok(first),
        }
    }

    /// Links from here toward the nozzle end.
    ///
    /// At a branch only the first child is followed. This assumes every branch
    /// mirrors the first one, which holds for any sensible layout but is not
    /// checked here; see [`crate::walkthrough`] for where divergence is reported.
    pub fn all_chain_links_from_here(&self) -> Vec<&ChainLink> {
        let mut links = vec![self];
        let mut current = self;
        while let Some(next) = current.children.first() {
            links.push(next);
            current = next;
        }
        links
    }

    /// First hose of `diameter` on the unbranched run starting here.
    pub fn find_tail_hose(&self, diameter: Real) -> Option<&Hose> {
        let mut current = self;
        loop {
            if let Component::Hose(hose) = &current.component {
                if same_key(hose.diameter, diameter) {
                    return Some(hose);
                }
            }
            match current.children.as_slice() {
                [only] => current = only,
                _ => return None,
            }
        }
    }

    /// Deep copy of this subtree with `transform` applied along the tail.
    pub fn duplicate(&self, transform: &mut dyn ComponentTransform) -> ChainLink {
        self.duplicate_from(transform, true)
    }

    fn duplicate_from(&self, transform: &mut dyn ComponentTransform, in_tail: bool) -> ChainLink {
        let component = if in_tail {
            match &self.component {
                Component::Nozzle(n) => Component::Nozzle(transform.nozzle(n)),
                Component::Hose(h) => Component::Hose(transform.tail_hose(h)),
                Component::IntermediateAppliance(a) => {
                    Component::IntermediateAppliance(transform.tail_appliance(a))
                }
                Component::Elevation(e) => Component::Elevation(transform.elevation(e)),
                Component::SectionStart(s) => Component::SectionStart(transform.section(s)),
            }
        } else {
            self.component.clone()
        };

        let children_in_tail = in_tail && self.children.len() < 2;
        let mut children = Vec::with_capacity(self.children.len());
        for child in &self.children {
            children.push(child.duplicate_from(transform, children_in_tail));
        }

        ChainLink {
            component,
            children,
            forced_flow_rate: transform.forced_flow_rate(self.forced_flow_rate),
            flow_rate: OnceLock::new(),
        }
    }

    /// Build a non-branching chain, first component nearest the pump.
    ///
    /// Returns `None` for an empty list. A forced flow rate applies to every link.
    pub fn create_straight_line_chain(
        components: impl IntoIterator<Item = Component>,
        forced_flow_rate: Option<Real>,
    ) -> Option<ChainLink> {
        Self::straight_line_into(components, forced_flow_rate, Vec::new())
    }

    /// Like [`create_straight_line_chain`](Self::create_straight_line_chain), but
    /// the last link feeds `branches`.
    pub fn straight_line_into(
        components: impl IntoIterator<Item = Component>,
        forced_flow_rate: Option<Real>,
        branches: Vec<ChainLink>,
    ) -> Option<ChainLink> {
        let components: Vec<Component> = components.into_iter().collect();
        let mut pending = Some(branches);
        components.into_iter().rev().fold(None, |next, component| {
            let mut link = ChainLink::new(component);
            link.forced_flow_rate = forced_flow_rate;
            link.children = match next {
                Some(next) => vec![next],
                None => pending.take().unwrap_or_default(),
            };
            Some(link)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::{Identity, TransformSet};
    use hf_components::{
        ApplianceKind, Elevation, IntermediateAppliance, Nozzle, NozzleKind, SectionStart,
    };

    fn fog_line(length: u32) -> ChainLink {
        ChainLink::create_straight_line_chain(
            [
                Hose::new(1.75, length).into(),
                Nozzle::with_diameter(NozzleKind::HandFogLowPressure, 1.5).into(),
            ],
            None,
        )
        .unwrap()
    }

    #[test]
    fn empty_straight_line_is_none() {
        assert!(ChainLink::create_straight_line_chain(Vec::new(), None).is_none());
    }

    #[test]
    fn straight_line_order_is_pump_first() {
        let chain = fog_line(200);
        let kinds: Vec<_> = chain
            .all_chain_links_from_here()
            .iter()
            .map(|l| l.component().kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                hf_components::ComponentKind::Hose,
                hf_components::ComponentKind::Nozzle
            ]
        );
    }

    #[test]
    fn crosslay_totals() {
        let chain = fog_line(200);
        assert_eq!(chain.flow_rate().unwrap(), 150.0);
        assert_eq!(chain.pressure_delta().unwrap(), 64.0);
        assert_eq!(chain.total_needed_pressure().unwrap(), 139.0);
    }

    #[test]
    fn leaf_without_nozzle_fails() {
        let chain = ChainLink::new(Hose::new(2.5, 100));
        assert_eq!(chain.flow_rate().unwrap_err(), HfError::NoNozzleFound);
        assert_eq!(chain.total_needed_pressure().unwrap_err(), HfError::NoNozzleFound);
    }

    #[test]
    fn forced_flow_rate_stands_in_for_nozzle() {
        let chain = ChainLink::create_straight_line_chain([Hose::new(2.5, 100).into()], Some(250.0))
            .unwrap();
        assert_eq!(chain.flow_rate().unwrap(), 250.0);
        assert_eq!(chain.total_needed_pressure().unwrap(), 15.0);
    }

    #[test]
    fn wye_sums_flow_and_takes_max_pressure() {
        let wye = ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
            .branch([fog_line(150), fog_line(250)]);
        assert_eq!(wye.flow_rate().unwrap(), 300.0);
        // 250' at 150 gpm: 80 psi hose + 75 nozzle; shorter line needs only 123
        assert_eq!(wye.total_needed_pressure().unwrap(), 10.0 + 155.0);
    }

    #[test]
    fn elevations_must_agree() {
        let agreeing = ChainLink::new(Elevation::new(2))
            .then(ChainLink::new(Elevation::new(2)).then(fog_line(100)));
        assert_eq!(agreeing.downstream_elevation().unwrap(), 2);

        let conflicting = ChainLink::new(Elevation::new(2))
            .then(ChainLink::new(Elevation::new(3)).then(fog_line(100)));
        assert_eq!(
            conflicting.downstream_elevation().unwrap_err(),
            HfError::ConflictingElevation {
                first: 2,
                second: 3
            }
        );

        assert_eq!(fog_line(100).downstream_elevation().unwrap(), 0);
    }

    #[test]
    fn tail_hose_stops_at_branch() {
        let chain = ChainLink::new(Hose::new(3.0, 300)).then(
            ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
                .branch([fog_line(150), fog_line(150)]),
        );
        assert_eq!(chain.find_tail_hose(3.0).unwrap().length, 300);
        assert!(chain.find_tail_hose(1.75).is_none());
        assert!(fog_line(100).find_tail_hose(1.75).is_some());
    }

    #[test]
    fn duplicate_transforms_only_the_tail() {
        let chain = ChainLink::new(Hose::new(1.75, 100)).then(
            ChainLink::new(SectionStart::new("split"))
                .branch([fog_line(150), fog_line(150)]),
        );
        let mut transform = TransformSet::new().tail_hose(|h| h.with_length(h.length + 50));
        let copy = chain.duplicate(&mut transform);

        let Component::Hose(tail) = copy.component() else {
            panic!("expected hose");
        };
        assert_eq!(tail.length, 150);
        for line in copy.children()[0].children() {
            let Component::Hose(h) = line.component() else {
                panic!("expected hose");
            };
            assert_eq!(h.length, 150, "branch hose must be untouched");
        }
    }

    #[test]
    fn duplicate_is_independent_and_equal() {
        let chain = fog_line(200);
        let copy = chain.duplicate(&mut Identity);
        assert_eq!(copy.component(), chain.component());
        assert_eq!(
            copy.total_needed_pressure().unwrap(),
            chain.total_needed_pressure().unwrap()
        );
    }

    #[test]
    fn straight_line_into_branches() {
        let chain = ChainLink::straight_line_into(
            [
                Hose::new(3.0, 0).into(),
                IntermediateAppliance::new(ApplianceKind::Wye).into(),
            ],
            None,
            vec![fog_line(150), fog_line(150)],
        )
        .unwrap();
        assert_eq!(chain.children().len(), 1);
        assert!(chain.children()[0].is_branch());
        assert_eq!(chain.flow_rate().unwrap(), 300.0);
    }
}
