use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
};

/// Water drawn and energy gained per animal per turn.
const SIP: i32 = 2;

/// Every live animal drinks, grazer and hunter alike.
pub struct HydrationSystem;

impl HydrationSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HydrationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for HydrationSystem {
    fn name(&self) -> &'static str {
        "hydration"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        for i in 0..eco.animals.len() {
            if !eco.animals[i].alive {
                continue;
            }
            if eco.water > 0 {
                eco.water = (eco.water - SIP).max(0);
                eco.animals[i].feed(SIP);
            }
        }
        Ok(())
    }
}
