//! Step-by-step numbers for narrating a chain, nozzle end first.

use hf_components::Component;
use hf_core::{HfResult, Real, nearly_equal};

use crate::link::ChainLink;

/// Computed figures for one link, as a quiz would ask about them.
#[derive(Debug, Clone, Copy)]
pub struct WalkthroughStep<'a> {
    pub link: &'a ChainLink,
    pub component: &'a Component,
    pub flow_rate: Real,
    pub pressure_delta: Real,
    pub total_needed_pressure: Real,
}

/// Walk from the nozzle end back toward `root`.
///
/// Follows only the first child at each branch (see
/// [`ChainLink::all_chain_links_from_here`]). When sibling branches do not
/// match the first one the numbers narrate that first branch only; this is
/// reported with a warning rather than treated as an error.
pub fn walkthrough(root: &ChainLink) -> HfResult<Vec<WalkthroughStep<'_>>> {
    let links = root.all_chain_links_from_here();
    let mut steps = Vec::with_capacity(links.len());

    for link in links.into_iter().rev() {
        if link.is_branch() {
            warn_on_divergent_branches(link)?;
        }
        steps.push(WalkthroughStep {
            link,
            component: link.component(),
            flow_rate: link.flow_rate()?,
            pressure_delta: link.pressure_delta()?,
            total_needed_pressure: link.total_needed_pressure()?,
        });
    }

    Ok(steps)
}

fn warn_on_divergent_branches(link: &ChainLink) -> HfResult<()> {
    let [first, rest @ ..] = link.children() else {
        return Ok(());
    };
    let first_flow = first.flow_rate()?;
    let first_pressure = first.total_needed_pressure()?;
    for (offset, other) in rest.iter().enumerate() {
        let flow = other.flow_rate()?;
        let pressure = other.total_needed_pressure()?;
        if !nearly_equal(flow, first_flow) || !nearly_equal(pressure, first_pressure) {
            tracing::warn!(
                branch = offset + 1,
                first_flow,
                flow,
                first_pressure,
                pressure,
                "walkthrough follows the first branch only, but this branch differs"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_components::{ApplianceKind, ComponentKind, Hose, IntermediateAppliance, Nozzle, NozzleKind};

    fn line(length: u32) -> ChainLink {
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
    fn steps_run_from_nozzle_back_to_pump() {
        let root = ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
            .branch([line(150), line(150)]);
        let steps = walkthrough(&root).unwrap();

        let kinds: Vec<_> = steps.iter().map(|s| s.component.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ComponentKind::Nozzle,
                ComponentKind::Hose,
                ComponentKind::IntermediateAppliance
            ]
        );

        assert_eq!(steps[0].flow_rate, 150.0);
        assert_eq!(steps[0].pressure_delta, 75.0);
        assert_eq!(steps[1].pressure_delta, 48.0);
        assert_eq!(steps[1].total_needed_pressure, 123.0);
        assert_eq!(steps[2].flow_rate, 300.0);
        assert_eq!(steps[2].total_needed_pressure, 133.0);
    }

    #[test]
    fn divergent_branches_narrate_first_branch_only() {
        // The second line is longer; the walkthrough still shows the first
        // line's figures while the total at the wye reflects the longer one.
        let root = ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
            .branch([line(100), line(300)]);
        let steps = walkthrough(&root).unwrap();

        assert_eq!(steps[1].pressure_delta, 32.0);
        assert_eq!(steps[2].total_needed_pressure, 10.0 + 96.0 + 75.0);
    }
}
