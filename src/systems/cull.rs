use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{System, SystemContext},
    rng::SystemRng,
};

/// Sweeps dead animals out of the collection at the end of the turn.
pub struct CullSystem;

impl CullSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CullSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CullSystem {
    fn name(&self) -> &'static str {
        "cull"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        eco: &mut Ecosystem,
        _rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        eco.animals.retain(|a| a.alive);
        Ok(())
    }
}
