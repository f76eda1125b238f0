use anyhow::Result;
use rand::{seq::SliceRandom, Rng};

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
    species::Diet,
};

/// Energy a hunter gains from a successful kill.
const KILL_ENERGY: i32 = 40;

/// Hunters take one shot each at the prey standing when the phase began.
/// A victim leaves the working set immediately, so no animal can be killed
/// twice in one turn. Hunters never prey on other hunters.
pub struct PredationSystem;

impl PredationSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PredationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for PredationSystem {
    fn name(&self) -> &'static str {
        "predation"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        eco: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let hunters: Vec<usize> = (0..eco.animals.len())
            .filter(|&i| eco.animals[i].alive && eco.animals[i].species.is_hunter())
            .collect();
        let mut prey: Vec<usize> = (0..eco.animals.len())
            .filter(|&i| eco.animals[i].alive && !eco.animals[i].species.is_hunter())
            .collect();

        for hunter in hunters {
            if prey.is_empty() {
                break;
            }
            if !rng.gen_bool(ctx.tuning.hunt_success) {
                continue;
            }
            let preferred = match eco.animals[hunter].species.profile().diet {
                Diet::Hunter { preferred } => preferred,
                Diet::Grazer { .. } => continue,
            };
            let preferred_pool: Vec<usize> = prey
                .iter()
                .copied()
                .filter(|&i| eco.animals[i].species == preferred)
                .collect();
            let pool = if preferred_pool.is_empty() {
                &prey
            } else {
                &preferred_pool
            };
            let victim = match pool.choose(rng) {
                Some(&i) => i,
                None => continue,
            };
            eco.animals[victim].alive = false;
            eco.animals[hunter].feed(KILL_ENERGY);
            prey.retain(|&i| i != victim);
            eco.log.kills += 1;
        }

        if eco.log.kills > 0 {
            tracing::debug!(kills = eco.log.kills, "hunts resolved");
        }
        Ok(())
    }
}
