//! Randomized "realistic" variations of a configuration set.
//!
//! Every chain of the base set is duplicated with its 3" and 5" supply hose
//! lengths and its elevation redrawn within [`RealisticBounds`]; one floor
//! count is drawn per chain. Only the unbranched run nearest the pump is
//! touched (see [`ComponentTransform`]). The base set is never modified, so it
//! can be reused as the source on every cycle.

use hf_chain::{Chain, ComponentTransform, ConfigurationSet};
use hf_components::{Elevation, Hose};
use hf_core::{HfResult, same_key};
use rand::Rng;

use crate::bounds::RealisticBounds;

struct RealisticTransform<'a, R: ?Sized> {
    bounds: &'a RealisticBounds,
    rng: &'a mut R,
    /// Floor count drawn for the chain being duplicated; every elevation in
    /// one chain gets the same value so they still agree.
    floors: Option<i32>,
}

impl<R: Rng + ?Sized> ComponentTransform for RealisticTransform<'_, R> {
    fn tail_hose(&mut self, hose: &Hose) -> Hose {
        if same_key(hose.diameter, 3.0) {
            hose.with_length(self.bounds.three_inch.sample(&mut *self.rng))
        } else if same_key(hose.diameter, 5.0) {
            hose.with_length(self.bounds.five_inch.sample(&mut *self.rng))
        } else {
            hose.clone()
        }
    }

    fn elevation(&mut self, _elevation: &Elevation) -> Elevation {
        let floors = match self.floors {
            Some(floors) => floors,
            None => {
                let floors = self.bounds.floors.sample(&mut *self.rng);
                self.floors = Some(floors);
                floors
            }
        };
        Elevation::new(floors)
    }
}

/// New set of randomized duplicates of every chain in `base`.
///
/// The id is the base id plus a random suffix; the description notes the
/// randomization. Repeated calls give different chains.
pub fn build_realistic_configurations_set<R: Rng + ?Sized>(
    base: &ConfigurationSet,
    bounds: &RealisticBounds,
    rng: &mut R,
) -> HfResult<ConfigurationSet> {
    bounds.validate()?;

    let mut transform = RealisticTransform {
        bounds,
        rng,
        floors: None,
    };
    let chains: Vec<Chain> = base
        .iter()
        .map(|chain| {
            transform.floors = None;
            chain.duplicate(&mut transform)
        })
        .collect();

    let suffix = uuid::Builder::from_random_bytes(transform.rng.r#gen()).into_uuid();
    let id = format!("{}_REALISTIC_{}", base.id(), suffix.simple());
    tracing::debug!(base = base.id(), %id, chains = chains.len(), "generated realistic set");

    Ok(ConfigurationSet::new(
        id,
        format!(
            "{} (with random, realistic modifications)",
            base.description()
        ),
        chains,
    ))
}

/// [`build_realistic_configurations_set`] with default bounds and the thread RNG.
pub fn realistic_set(base: &ConfigurationSet) -> HfResult<ConfigurationSet> {
    build_realistic_configurations_set(base, &RealisticBounds::default(), &mut rand::thread_rng())
}
