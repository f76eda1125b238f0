use anyhow::Result;
use rand::seq::SliceRandom;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
};

/// Randomizes the animal collection's order so grazing and drinking never
/// favor the same individuals turn after turn. Predation keeps its own
/// independent pass and is unaffected.
pub struct ShuffleSystem;

impl ShuffleSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShuffleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ShuffleSystem {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        eco.animals.shuffle(rng);
        Ok(())
    }
}
