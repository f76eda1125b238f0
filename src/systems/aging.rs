use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
};

/// Ages every animal one turn and charges upkeep. Deaths from old age or
/// exhaustion are recorded here; the bodies stay in place until the cull.
pub struct AgingSystem;

impl AgingSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AgingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for AgingSystem {
    fn name(&self) -> &'static str {
        "aging"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let mut deaths = 0;
        for animal in &mut eco.animals {
            let was_alive = animal.alive;
            animal.age_one_turn();
            if was_alive && !animal.alive {
                deaths += 1;
            }
        }
        eco.log.natural_deaths += deaths;
        if deaths > 0 {
            tracing::debug!(deaths, "animals died of age or exhaustion");
        }
        Ok(())
    }
}
