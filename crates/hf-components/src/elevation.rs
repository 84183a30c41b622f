//! Elevation: pressure gained or lost going up or down floors.

use crate::catalog::PSI_PER_FLOOR;
use crate::traits::{DeliveryComponent, PressureContribution};
use hf_core::{HfError, HfResult, Real};

/// Floors above (positive) or below (negative) ground level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elevation {
    pub floor_count: i32,
}

impl Elevation {
    pub fn new(floor_count: i32) -> Self {
        Self { floor_count }
    }

    pub fn pressure(&self) -> Real {
        Real::from(self.floor_count) * PSI_PER_FLOOR
    }
}

/// Label for where a line ends up.
///
/// Floor counts are stored relative to the ground floor, and the label for a
/// positive count is `floor_count + 2` (so 1 reads as "floor 3").
pub fn elevation_text(floor_count: i32) -> HfResult<String> {
    match floor_count {
        -1 => Ok("the basement".to_string()),
        0 => Ok("the ground floor".to_string()),
        n if n > 0 => Ok(format!("floor {}", n + 2)),
        n => Err(HfError::InvalidFloorCount { floor_count: n }),
    }
}

pub fn verbose_elevation_text(floor_count: i32) -> String {
    format!(
        "an elevation of {} floors {} ground level",
        floor_count.unsigned_abs(),
        if floor_count >= 0 { "above" } else { "below" }
    )
}

impl DeliveryComponent for Elevation {
    fn description(&self) -> String {
        elevation_text(self.floor_count)
            .unwrap_or_else(|_| verbose_elevation_text(self.floor_count))
    }

    fn pressure_contribution(&self) -> PressureContribution<'_> {
        PressureContribution::Constant(self.pressure())
    }
}
