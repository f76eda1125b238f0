use anyhow::Result;
use rand::Rng;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
};

const GRASS_GROWTH_MIN: i32 = 50;
const GRASS_GROWTH_MAX: i32 = 100;
const WATER_GROWTH_MIN: i32 = 30;
const WATER_GROWTH_MAX: i32 = 70;

/// Regrows both resource stocks at the top of the turn.
pub struct GrowthSystem;

impl GrowthSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrowthSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GrowthSystem {
    fn name(&self) -> &'static str {
        "growth"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        eco.adjust_grass(rng.gen_range(GRASS_GROWTH_MIN..=GRASS_GROWTH_MAX));
        eco.adjust_water(rng.gen_range(WATER_GROWTH_MIN..=WATER_GROWTH_MAX));
        Ok(())
    }
}
