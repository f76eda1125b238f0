use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
    species::Diet,
};

/// Live grazers draw down the grass stock, each taking at most its species
/// ration, in the order the shuffle phase left the collection.
pub struct GrazingSystem;

impl GrazingSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrazingSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for GrazingSystem {
    fn name(&self) -> &'static str {
        "grazing"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        for i in 0..eco.animals.len() {
            let animal = &eco.animals[i];
            if !animal.alive {
                continue;
            }
            let ration = match animal.species.profile().diet {
                Diet::Grazer { ration } => ration,
                Diet::Hunter { .. } => continue,
            };
            if eco.grass > 0 {
                let eaten = ration.min(eco.grass);
                eco.grass -= eaten;
                eco.animals[i].feed(eaten);
            }
        }
        Ok(())
    }
}
