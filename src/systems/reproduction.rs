use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
    species::ALL_SPECIES,
};

/// Each species breeds on its own: fertile animals pair off and the litter
/// size is floor(pairs x species rate). All fertile counts are taken before
/// any offspring are appended, so no species sees this turn's newborns —
/// not even its own.
pub struct ReproductionSystem;

impl ReproductionSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReproductionSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for ReproductionSystem {
    fn name(&self) -> &'static str {
        "reproduction"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let mut litters = Vec::new();
        for species in ALL_SPECIES {
            let fertile = eco
                .animals
                .iter()
                .filter(|a| a.species == species && a.can_reproduce())
                .count();
            if fertile < 2 {
                continue;
            }
            // Float division then truncation, matching the game's balance.
            let births = (fertile as f64 / 2.0 * species.profile().reproduction_rate) as usize;
            if births > 0 {
                litters.push((species, births));
            }
        }

        for (species, births) in litters {
            eco.introduce(species, births);
            eco.log.births += births as u32;
            tracing::debug!(species = species.name(), births, "litter born");
        }
        Ok(())
    }
}
