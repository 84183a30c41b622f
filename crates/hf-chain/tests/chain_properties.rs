//! Chain-level behavior: aggregation, merges, elevations and duplication.

use hf_chain::{Chain, ChainLink, ConfigurationSet, Identity, TransformSet};
use hf_components::{
    ApplianceKind, Component, Elevation, Hose, IntermediateAppliance, Nozzle, NozzleKind,
    hose_friction_loss,
};
use hf_core::{HfError, nearly_equal};
use proptest::prelude::*;

fn hand_line(length: u32, kind: NozzleKind, tip: f64) -> ChainLink {
    ChainLink::create_straight_line_chain(
        [
            Hose::new(1.75, length).into(),
            Nozzle::with_diameter(kind, tip).into(),
        ],
        None,
    )
    .unwrap()
}

fn wye_into(lines: Vec<ChainLink>) -> ChainLink {
    ChainLink::straight_line_into(
        [
            Hose::new(3.0, 300).into(),
            IntermediateAppliance::new(ApplianceKind::Wye).into(),
        ],
        None,
        lines,
    )
    .unwrap()
}

#[test]
fn scenario_a_crosslay() {
    let chain = Chain::new(
        "200' crosslay",
        hand_line(200, NozzleKind::HandFogLowPressure, 1.5),
    );
    assert_eq!(chain.flow_rate().unwrap(), 150.0);
    assert_eq!(chain.root().pressure_delta().unwrap(), 64.0);
    assert_eq!(chain.total_needed_pressure().unwrap(), 139.0);
}

#[test]
fn scenario_b_smooth_bore_alone() {
    let link = ChainLink::new(Nozzle::with_diameter(NozzleKind::HandSmooth, 1.25));
    assert_eq!(link.flow_rate().unwrap(), 300.0);
    assert_eq!(link.pressure_delta().unwrap(), 50.0);
}

#[test]
fn scenario_c_formula_path() {
    // 275 gpm has no 3" table entry: ((2 * 2.75^2) + 2.75) * 0.4 = 7.15
    let loss = hose_friction_loss(3.0, 100, 275.0).unwrap();
    assert!(nearly_equal(loss, 7.15));

    let forced =
        ChainLink::create_straight_line_chain([Hose::new(3.0, 100).into()], Some(275.0)).unwrap();
    assert_eq!(forced.total_needed_pressure().unwrap(), loss);
}

#[test]
fn scenario_d_master_stream() {
    let chain = ChainLink::create_straight_line_chain(
        [
            Nozzle::fixed(NozzleKind::MasterFog).into(),
            IntermediateAppliance::new(ApplianceKind::MasterStreamDevice).into(),
        ],
        None,
    )
    .unwrap();
    assert_eq!(chain.flow_rate().unwrap(), 1000.0);
    assert_eq!(chain.total_needed_pressure().unwrap(), 120.0);
}

#[test]
fn elevation_conflict_across_branches() {
    let up = |floors| {
        ChainLink::new(Elevation::new(floors))
            .then(hand_line(150, NozzleKind::HandFogLowPressure, 1.5))
    };

    let agreeing = Chain::new("agree", wye_into(vec![up(2), up(2)]));
    assert_eq!(agreeing.elevation().unwrap(), 2);
    assert_eq!(agreeing.elevation_text().unwrap(), "floor 4");

    let conflicting = Chain::new("conflict", wye_into(vec![up(2), up(1)]));
    assert_eq!(
        conflicting.elevation().unwrap_err(),
        HfError::ConflictingElevation {
            first: 2,
            second: 1
        }
    );
}

#[test]
fn branch_without_nozzle_fails_the_whole_chain() {
    let chain = wye_into(vec![
        hand_line(150, NozzleKind::HandFogLowPressure, 1.5),
        ChainLink::new(Hose::new(1.75, 150)),
    ]);
    assert_eq!(chain.flow_rate().unwrap_err(), HfError::NoNozzleFound);
}

#[test]
fn walkthrough_over_dual_hand_lines() {
    let chain = Chain::new(
        "dual 1 3/4\" lines off a wye",
        wye_into(vec![
            hand_line(150, NozzleKind::HandFogLowPressure, 1.5),
            hand_line(150, NozzleKind::HandFogLowPressure, 1.5),
        ]),
    );
    let steps = chain.walkthrough().unwrap();
    let last = steps.last().unwrap();

    assert_eq!(steps.len(), 4);
    assert!(matches!(steps[0].component, Component::Nozzle(_)));
    assert_eq!(last.flow_rate, 300.0);
    // 300' of 3" at 300 gpm = 8 * 3 = 24; wye 10; line 48 + nozzle 75
    assert_eq!(last.total_needed_pressure, 24.0 + 10.0 + 48.0 + 75.0);
}

#[test]
fn duplicating_a_set_leaves_the_source_untouched() {
    let set = ConfigurationSet::new(
        "BASE",
        "base",
        vec![Chain::templated(
            "{tail_hose:3} to {elevation}",
            ChainLink::new(Hose::new(3.0, 0)).then(
                ChainLink::new(Elevation::new(0))
                    .then(hand_line(150, NozzleKind::HandFogLowPressure, 1.5)),
            ),
        )],
    );

    let mut transform = TransformSet::new()
        .tail_hose(|h| if h.diameter == 3.0 { h.with_length(400) } else { h.clone() })
        .elevation(|_| Elevation::new(-1));
    let copies: Vec<Chain> = set.iter().map(|c| c.duplicate(&mut transform)).collect();

    assert_eq!(
        copies[0].description().unwrap(),
        "400' of 3\" hose to the basement"
    );
    assert_eq!(
        set.chains()[0].description().unwrap(),
        "0' of 3\" hose to the ground floor"
    );
}

#[test]
fn forced_flow_override_on_duplicate() {
    let chain =
        ChainLink::create_straight_line_chain([Hose::new(2.5, 100).into()], Some(200.0)).unwrap();
    let copy = chain.duplicate(&mut TransformSet::new().forced_flow_rate(300.0));
    assert_eq!(chain.total_needed_pressure().unwrap(), 10.0);
    assert_eq!(copy.total_needed_pressure().unwrap(), 21.0);
}

proptest! {
    #[test]
    fn queries_are_idempotent(length in 0_u32..=20, tip in prop::sample::select(vec![1.5, 2.5])) {
        let chain = hand_line(length * 50, NozzleKind::HandFogLowPressure, tip);
        let flow = chain.flow_rate().unwrap();
        let pressure = chain.total_needed_pressure().unwrap();
        prop_assert_eq!(chain.flow_rate().unwrap(), flow);
        prop_assert_eq!(chain.total_needed_pressure().unwrap(), pressure);

        let copy = chain.duplicate(&mut Identity);
        prop_assert_eq!(copy.flow_rate().unwrap(), flow);
        prop_assert_eq!(copy.total_needed_pressure().unwrap(), pressure);
    }

    #[test]
    fn equal_branches_sum_flow(
        tip in prop::sample::select(vec![15.0 / 16.0, 1.0, 1.125, 1.25]),
        length in 1_u32..=6,
    ) {
        let line = || hand_line(length * 50, NozzleKind::HandSmooth, tip);
        let single = line().flow_rate().unwrap();
        let wye = ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
            .branch([line(), line()]);
        prop_assert_eq!(wye.flow_rate().unwrap(), 2.0 * single);
    }

    #[test]
    fn merge_takes_max_pressure(a in 1_u32..=8, b in 1_u32..=8) {
        let first = hand_line(a * 50, NozzleKind::HandFogLowPressure, 1.5);
        let second = hand_line(b * 50, NozzleKind::HandFogLowPressure, 1.5);
        let p1 = first.total_needed_pressure().unwrap();
        let p2 = second.total_needed_pressure().unwrap();

        let wye = ChainLink::new(IntermediateAppliance::new(ApplianceKind::Wye))
            .branch([first, second]);
        let expected = wye.pressure_delta().unwrap() + p1.max(p2);
        prop_assert!(nearly_equal(wye.total_needed_pressure().unwrap(), expected));
    }
}
