//! Static catalog: nozzle kinds, hose friction-loss tables, appliance kinds.
//!
//! Everything here is compiled-in constant data. Values are the fire-service
//! training figures (gpm, psi, inches, feet) and are never mutated.

use hf_core::{HfError, HfResult, Real, ensure_finite, same_key};
use serde::{Deserialize, Serialize};

/// Pressure added (or recovered, below grade) per floor of elevation.
pub const PSI_PER_FLOOR: Real = 5.0;

/// How a nozzle kind's flow rate is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlowSelector {
    Diameter(Real),
    Identifier(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRateEntry {
    pub selector: FlowSelector,
    pub flow_rate: Real,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NozzleFlow {
    /// The kind always flows this rate regardless of tip.
    Fixed(Real),
    /// Flow depends on the tip diameter or a model identifier.
    Table(&'static [FlowRateEntry]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleSpec {
    pub description: &'static str,
    pub nozzle_pressure: Real,
    pub flow: NozzleFlow,
}

const fn by_diameter(diameter: Real, flow_rate: Real) -> FlowRateEntry {
    FlowRateEntry {
        selector: FlowSelector::Diameter(diameter),
        flow_rate,
    }
}

const fn by_identifier(identifier: &'static str, flow_rate: Real) -> FlowRateEntry {
    FlowRateEntry {
        selector: FlowSelector::Identifier(identifier),
        flow_rate,
    }
}

const HAND_SMOOTH: NozzleSpec = NozzleSpec {
    description: "smoothbore nozzle (hand line pressure)",
    nozzle_pressure: 50.0,
    flow: NozzleFlow::Table(&[
        by_diameter(15.0 / 16.0, 185.0),
        by_diameter(1.0, 200.0),
        by_diameter(1.0 + 1.0 / 8.0, 250.0),
        by_diameter(1.0 + 1.0 / 4.0, 300.0),
        by_diameter(1.0 + 3.0 / 8.0, 400.0),
        by_diameter(1.0 + 1.0 / 2.0, 500.0),
    ]),
};

const HAND_FOG_TRASH_LINE: NozzleSpec = NozzleSpec {
    description: "fog nozzle (hand line, conventional, trash line setting)",
    nozzle_pressure: 100.0,
    flow: NozzleFlow::Table(&[by_diameter(1.5, 125.0)]),
};

const HAND_FOG_LOW_PRESSURE: NozzleSpec = NozzleSpec {
    description: "fog nozzle (hand line, low pressure)",
    nozzle_pressure: 75.0,
    flow: NozzleFlow::Table(&[by_diameter(1.5, 150.0), by_diameter(2.5, 250.0)]),
};

const MASTER_SMOOTH: NozzleSpec = NozzleSpec {
    description: "smooth bore nozzle (master stream pressure)",
    nozzle_pressure: 80.0,
    flow: NozzleFlow::Table(&[
        by_diameter(1.25, 400.0),
        by_diameter(1.0 + 3.0 / 8.0, 500.0),
        by_diameter(1.5, 600.0),
        by_diameter(1.75, 800.0),
        by_diameter(2.0, 1000.0),
    ]),
};

const MASTER_SMOOTH_REDUCED_PRESSURE: NozzleSpec = NozzleSpec {
    description: "smooth bore nozzle (master stream, reduced pressure)",
    nozzle_pressure: 50.0,
    flow: NozzleFlow::Table(&[by_diameter(1.5, 500.0)]),
};

const MASTER_FOG: NozzleSpec = NozzleSpec {
    description: "fog nozzle (master stream)",
    nozzle_pressure: 100.0,
    flow: NozzleFlow::Fixed(1000.0),
};

const CELLAR: NozzleSpec = NozzleSpec {
    description: "cellar nozzle",
    nozzle_pressure: 100.0,
    flow: NozzleFlow::Table(&[
        by_identifier("E60/63", 350.0),
        by_identifier("E61", 400.0),
        by_identifier("E62", 500.0),
    ]),
};

const PIERCING: NozzleSpec = NozzleSpec {
    description: "piercing nozzle",
    nozzle_pressure: 100.0,
    flow: NozzleFlow::Fixed(125.0),
};

const FOAM_EDUCTOR: NozzleSpec = NozzleSpec {
    description: "foam eductor",
    nozzle_pressure: 200.0,
    flow: NozzleFlow::Fixed(125.0),
};

/// Nozzle kinds known to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NozzleKind {
    HandSmooth,
    HandFogTrashLine,
    HandFogLowPressure,
    MasterSmooth,
    MasterSmoothReducedPressure,
    MasterFog,
    Cellar,
    Piercing,
    FoamEductor,
}

impl NozzleKind {
    pub const ALL: [NozzleKind; 9] = [
        NozzleKind::HandSmooth,
        NozzleKind::HandFogTrashLine,
        NozzleKind::HandFogLowPressure,
        NozzleKind::MasterSmooth,
        NozzleKind::MasterSmoothReducedPressure,
        NozzleKind::MasterFog,
        NozzleKind::Cellar,
        NozzleKind::Piercing,
        NozzleKind::FoamEductor,
    ];

    pub fn spec(self) -> &'static NozzleSpec {
        match self {
            NozzleKind::HandSmooth => &HAND_SMOOTH,
            NozzleKind::HandFogTrashLine => &HAND_FOG_TRASH_LINE,
            NozzleKind::HandFogLowPressure => &HAND_FOG_LOW_PRESSURE,
            NozzleKind::MasterSmooth => &MASTER_SMOOTH,
            NozzleKind::MasterSmoothReducedPressure => &MASTER_SMOOTH_REDUCED_PRESSURE,
            NozzleKind::MasterFog => &MASTER_FOG,
            NozzleKind::Cellar => &CELLAR,
            NozzleKind::Piercing => &PIERCING,
            NozzleKind::FoamEductor => &FOAM_EDUCTOR,
        }
    }

    pub fn description(self) -> &'static str {
        self.spec().description
    }

    pub fn nozzle_pressure(self) -> Real {
        self.spec().nozzle_pressure
    }

    pub fn name(self) -> &'static str {
        match self {
            NozzleKind::HandSmooth => "HandSmooth",
            NozzleKind::HandFogTrashLine => "HandFogTrashLine",
            NozzleKind::HandFogLowPressure => "HandFogLowPressure",
            NozzleKind::MasterSmooth => "MasterSmooth",
            NozzleKind::MasterSmoothReducedPressure => "MasterSmoothReducedPressure",
            NozzleKind::MasterFog => "MasterFog",
            NozzleKind::Cellar => "Cellar",
            NozzleKind::Piercing => "Piercing",
            NozzleKind::FoamEductor => "FoamEductor",
        }
    }
}

impl std::str::FromStr for NozzleKind {
    type Err = HfError;

    /// Case-insensitive match on the variant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NozzleKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or(HfError::InvalidArg {
                what: "unknown nozzle kind",
            })
    }
}

/// Resolve a nozzle's flow rate.
///
/// A kind with a fixed flow rate ignores both selectors. Otherwise an
/// identifier, when given, is the only key consulted; the diameter is used
/// when no identifier is given.
pub fn nozzle_flow_rate(
    kind: NozzleKind,
    diameter: Option<Real>,
    identifier: Option<&str>,
) -> HfResult<Real> {
    let spec = kind.spec();
    let entries = match spec.flow {
        NozzleFlow::Fixed(flow_rate) => return Ok(flow_rate),
        NozzleFlow::Table(entries) => entries,
    };

    let unresolved = |selector: String| HfError::UnresolvedFlowRate {
        nozzle: spec.description,
        selector,
    };

    match (identifier, diameter) {
        (Some(id), _) => entries
            .iter()
            .find(|e| matches!(e.selector, FlowSelector::Identifier(i) if i == id))
            .map(|e| e.flow_rate)
            .ok_or_else(|| unresolved(format!("identifier {id}"))),
        (None, Some(d)) => entries
            .iter()
            .find(|e| matches!(e.selector, FlowSelector::Diameter(x) if same_key(x, d)))
            .map(|e| e.flow_rate)
            .ok_or_else(|| unresolved(format!("diameter {}", diameter_description(d)))),
        (None, None) => Err(unresolved("no diameter or identifier".to_string())),
    }
}

/// One precalculated friction loss (psi per 100 ft) at a documented flow rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionLossEntry {
    pub flow_rate: Real,
    pub loss_per_100ft: Real,
}

/// Friction-loss data for one hose diameter.
#[derive(Debug, Clone, Copy)]
pub struct HoseFrictionTable {
    pub diameter: Real,
    pub precalculated: &'static [FrictionLossEntry],
    /// Loss per 100 ft as a function of `Q = flow_rate / 100`.
    pub formula_per_100ft: fn(Real) -> Real,
}

const fn fl(flow_rate: Real, loss_per_100ft: Real) -> FrictionLossEntry {
    FrictionLossEntry {
        flow_rate,
        loss_per_100ft,
    }
}

fn formula_1_75(q: Real) -> Real {
    10.0 * q * q + 10.0
}

fn formula_2_5(q: Real) -> Real {
    2.0 * q * q + q
}

fn formula_3(q: Real) -> Real {
    (2.0 * q * q + q) * 0.4
}

fn formula_5(q: Real) -> Real {
    (2.0 * q * q + q) * 0.031
}

pub const HOSE_FRICTION_TABLES: [HoseFrictionTable; 4] = [
    HoseFrictionTable {
        diameter: 1.75,
        precalculated: &[
            fl(100.0, 20.0),
            fl(125.0, 26.0),
            fl(150.0, 32.0),
            fl(185.0, 44.0),
            fl(200.0, 50.0),
            fl(250.0, 72.0),
        ],
        formula_per_100ft: formula_1_75,
    },
    HoseFrictionTable {
        diameter: 2.5,
        precalculated: &[
            fl(100.0, 3.0),
            fl(125.0, 5.0),
            fl(150.0, 6.0),
            fl(200.0, 10.0),
            fl(250.0, 15.0),
            fl(300.0, 21.0),
            fl(350.0, 28.0),
            fl(400.0, 36.0),
            fl(500.0, 55.0),
        ],
        formula_per_100ft: formula_2_5,
    },
    HoseFrictionTable {
        diameter: 3.0,
        precalculated: &[
            fl(150.0, 2.0),
            fl(185.0, 3.0),
            fl(200.0, 4.0),
            fl(250.0, 6.0),
            fl(300.0, 8.0),
            fl(350.0, 11.0),
            fl(400.0, 14.0),
            fl(500.0, 22.0),
            fl(600.0, 31.0),
            fl(700.0, 42.0),
            fl(800.0, 54.0),
        ],
        formula_per_100ft: formula_3,
    },
    HoseFrictionTable {
        diameter: 5.0,
        precalculated: &[
            fl(500.0, 2.0),
            fl(600.0, 2.0),
            fl(700.0, 3.0),
            fl(800.0, 4.0),
            fl(900.0, 5.0),
            fl(1000.0, 7.0),
        ],
        formula_per_100ft: formula_5,
    },
];

pub fn hose_friction_table(diameter: Real) -> HfResult<&'static HoseFrictionTable> {
    HOSE_FRICTION_TABLES
        .iter()
        .find(|t| same_key(t.diameter, diameter))
        .ok_or(HfError::UnsupportedHoseDiameter { diameter })
}

/// Friction loss (psi) for `length` feet of hose at `flow_rate` gpm.
///
/// A precalculated table entry always wins over the formula, even where the
/// two disagree; the table holds the figures trainees are expected to quote.
pub fn hose_friction_loss(diameter: Real, length: u32, flow_rate: Real) -> HfResult<Real> {
    let flow_rate = ensure_finite(flow_rate, "hose flow rate")?;
    let table = hose_friction_table(diameter)?;
    let length = Real::from(length);

    if let Some(entry) = table
        .precalculated
        .iter()
        .find(|e| same_key(e.flow_rate, flow_rate))
    {
        return Ok(entry.loss_per_100ft * length / 100.0);
    }

    tracing::trace!(diameter, flow_rate, "no precalculated friction loss, using formula");
    let per_100ft = (table.formula_per_100ft)(flow_rate / 100.0);
    ensure_finite(per_100ft * length / 100.0, "hose friction loss")
}

/// Fixed-friction-loss appliances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplianceKind {
    Wye,
    Siamese,
    MasterStreamDevice,
    Standpipe,
    AerialWaterwayInlet,
    AerialWaterwayPump,
}

impl ApplianceKind {
    pub const ALL: [ApplianceKind; 6] = [
        ApplianceKind::Wye,
        ApplianceKind::Siamese,
        ApplianceKind::MasterStreamDevice,
        ApplianceKind::Standpipe,
        ApplianceKind::AerialWaterwayInlet,
        ApplianceKind::AerialWaterwayPump,
    ];

    pub fn description(self) -> &'static str {
        match self {
            ApplianceKind::Wye => "a wye",
            ApplianceKind::Siamese => "a Siamese Connection",
            ApplianceKind::MasterStreamDevice => "a master stream device",
            ApplianceKind::Standpipe => "a standpipe",
            ApplianceKind::AerialWaterwayInlet => "an aerial waterway (from direct intake)",
            ApplianceKind::AerialWaterwayPump => "an aerial waterway (from pump)",
        }
    }

    /// Friction loss in psi, independent of flow.
    pub fn friction_loss(self) -> Real {
        match self {
            ApplianceKind::Wye | ApplianceKind::Siamese => 10.0,
            ApplianceKind::MasterStreamDevice => 20.0,
            ApplianceKind::Standpipe => 25.0,
            ApplianceKind::AerialWaterwayInlet => 60.0,
            ApplianceKind::AerialWaterwayPump => 80.0,
        }
    }
}

/// Render a decimal diameter as a fractional-inch label, e.g. `1+3/4"`.
///
/// Fractions are reduced to the smallest of halves, quarters, eighths or
/// sixteenths that represents them exactly; anything else falls back to the
/// decimal value, as does anything that is not a positive size.
pub fn diameter_description(diameter: Real) -> String {
    if !(diameter.is_finite() && diameter > 0.0) {
        return format!("{diameter}\"");
    }
    let whole = diameter.trunc();
    let fraction = diameter - whole;

    if fraction == 0.0 {
        return format!("{whole}\"");
    }

    for denominator in [2_u32, 4, 8, 16] {
        let numerator = fraction * Real::from(denominator);
        if numerator.fract() == 0.0 {
            let numerator = numerator as u32;
            return if whole == 0.0 {
                format!("{numerator}/{denominator}\"")
            } else {
                format!("{whole}+{numerator}/{denominator}\"")
            };
        }
    }

    format!("{diameter}\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hf_core::nearly_equal;
    use proptest::prelude::*;

    #[test]
    fn diameter_text_reduces_fractions() {
        assert_eq!(diameter_description(3.0), "3\"");
        assert_eq!(diameter_description(2.5), "2+1/2\"");
        assert_eq!(diameter_description(1.75), "1+3/4\"");
        assert_eq!(diameter_description(1.25), "1+1/4\"");
        assert_eq!(diameter_description(1.125), "1+1/8\"");
        assert_eq!(diameter_description(1.375), "1+3/8\"");
        assert_eq!(diameter_description(15.0 / 16.0), "15/16\"");
    }

    #[test]
    fn diameter_text_falls_back_to_decimal() {
        assert_eq!(diameter_description(1.3), "1.3\"");
    }

    #[test]
    fn diameter_text_for_non_positive_sizes_is_decimal() {
        assert_eq!(diameter_description(-0.5), "-0.5\"");
        assert_eq!(diameter_description(-2.25), "-2.25\"");
        assert_eq!(diameter_description(0.0), "0\"");
    }

    #[test]
    fn hand_smooth_by_diameter() {
        let flow = nozzle_flow_rate(NozzleKind::HandSmooth, Some(1.25), None).unwrap();
        assert_eq!(flow, 300.0);
        assert_eq!(NozzleKind::HandSmooth.nozzle_pressure(), 50.0);
    }

    #[test]
    fn fixed_flow_ignores_selectors() {
        assert_eq!(
            nozzle_flow_rate(NozzleKind::MasterFog, None, None).unwrap(),
            1000.0
        );
        assert_eq!(
            nozzle_flow_rate(NozzleKind::Piercing, Some(9.0), Some("nope")).unwrap(),
            125.0
        );
    }

    #[test]
    fn nozzle_kind_names_parse() {
        for kind in NozzleKind::ALL {
            assert_eq!(kind.name().parse::<NozzleKind>().unwrap(), kind);
        }
        assert_eq!(
            "masterfog".parse::<NozzleKind>().unwrap(),
            NozzleKind::MasterFog
        );
        assert!("Deluge".parse::<NozzleKind>().is_err());
    }

    #[test]
    fn cellar_by_identifier() {
        let flow = nozzle_flow_rate(NozzleKind::Cellar, None, Some("E61")).unwrap();
        assert_eq!(flow, 400.0);
    }

    #[test]
    fn unmatched_selector_is_unresolved() {
        let err = nozzle_flow_rate(NozzleKind::HandSmooth, Some(3.0), None).unwrap_err();
        assert!(matches!(err, HfError::UnresolvedFlowRate { .. }));

        let err = nozzle_flow_rate(NozzleKind::Cellar, None, Some("E99")).unwrap_err();
        assert!(matches!(err, HfError::UnresolvedFlowRate { .. }));

        let err = nozzle_flow_rate(NozzleKind::HandFogLowPressure, None, None).unwrap_err();
        assert!(matches!(err, HfError::UnresolvedFlowRate { .. }));
    }

    #[test]
    fn table_entry_wins_over_formula() {
        // 1 3/4" at 150 gpm: table says 32/100ft, formula would say 32.5
        let loss = hose_friction_loss(1.75, 200, 150.0).unwrap();
        assert_eq!(loss, 64.0);
        let formula = (HOSE_FRICTION_TABLES[0].formula_per_100ft)(1.5) * 2.0;
        assert_ne!(loss, formula);
    }

    #[test]
    fn formula_used_off_table() {
        // 3" at 275 gpm has no table entry: ((2 * 2.75^2) + 2.75) * 0.4 per 100 ft
        let loss = hose_friction_loss(3.0, 100, 275.0).unwrap();
        assert!((loss - 7.15).abs() < 1e-9);
    }

    #[test]
    fn zero_length_hose_has_no_loss() {
        assert_eq!(hose_friction_loss(3.0, 0, 275.0).unwrap(), 0.0);
    }

    #[test]
    fn unknown_hose_diameter() {
        let err = hose_friction_loss(4.0, 100, 500.0).unwrap_err();
        assert_eq!(err, HfError::UnsupportedHoseDiameter { diameter: 4.0 });
    }

    #[test]
    fn appliance_constants() {
        assert_eq!(ApplianceKind::Wye.friction_loss(), 10.0);
        assert_eq!(ApplianceKind::Standpipe.friction_loss(), 25.0);
        assert_eq!(ApplianceKind::AerialWaterwayPump.friction_loss(), 80.0);
    }

    proptest! {
        #[test]
        fn friction_loss_scales_with_length(flow in 50.0_f64..1200.0, len in 0_u32..2000) {
            for table in &HOSE_FRICTION_TABLES {
                let per_100 = hose_friction_loss(table.diameter, 100, flow).unwrap();
                let scaled = hose_friction_loss(table.diameter, len, flow).unwrap();
                let expected = per_100 * f64::from(len) / 100.0;
                prop_assert!(nearly_equal(scaled, expected));
            }
        }

        #[test]
        fn sixteenths_always_render_as_fractions(whole in 0_u32..5, sixteenths in 1_u32..16) {
            let d = f64::from(whole) + f64::from(sixteenths) / 16.0;
            let text = diameter_description(d);
            prop_assert!(text.contains('/'));
            prop_assert!(text.ends_with('"'));
        }
    }
}
