//! Bounds for randomized "realistic" scenarios.

use hf_core::{HfError, HfResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Inclusive hose-length range in feet, sampled in whole multiples of `step`
/// above `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl LengthRange {
    pub const fn new(min: u32, max: u32, step: u32) -> Self {
        Self { min, max, step }
    }

    fn validate(&self) -> HfResult<()> {
        if self.step == 0 {
            return Err(HfError::InvalidArg {
                what: "length step must be positive",
            });
        }
        if self.min > self.max {
            return Err(HfError::InvalidArg {
                what: "length range min exceeds max",
            });
        }
        if (self.max - self.min) % self.step != 0 {
            return Err(HfError::InvalidArg {
                what: "length range is not a whole number of steps",
            });
        }
        Ok(())
    }

    /// Uniform pick among `min, min + step, ..., max`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        let steps = (self.max - self.min) / self.step;
        self.min + rng.gen_range(0..=steps) * self.step
    }

    pub fn contains(&self, length: u32) -> bool {
        (self.min..=self.max).contains(&length) && (length - self.min) % self.step == 0
    }
}

/// Inclusive floor-count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorRange {
    pub min: i32,
    pub max: i32,
}

impl FloorRange {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, floor_count: i32) -> bool {
        (self.min..=self.max).contains(&floor_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealisticBounds {
    /// Floors relative to ground; -1 is the basement.
    pub floors: FloorRange,
    /// 3" supply hose off the pump.
    pub three_inch: LengthRange,
    /// 5" supply hose to a standpipe.
    pub five_inch: LengthRange,
}

impl Default for RealisticBounds {
    fn default() -> Self {
        Self {
            floors: FloorRange { min: -1, max: 5 },
            three_inch: LengthRange::new(0, 600, 50),
            five_inch: LengthRange::new(50, 1000, 50),
        }
    }
}

impl RealisticBounds {
    pub fn validate(&self) -> HfResult<()> {
        if self.floors.min > self.floors.max {
            return Err(HfError::InvalidArg {
                what: "floor range min exceeds max",
            });
        }
        if self.floors.min < -1 {
            return Err(HfError::InvalidFloorCount {
                floor_count: self.floors.min,
            });
        }
        self.three_inch.validate()?;
        self.five_inch.validate()
    }
}
