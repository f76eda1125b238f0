use anyhow::Result;
use rand::Rng;

use crate::{
    ecosystem::{EcoEvent, Ecosystem},
    engine::{System, SystemContext},
    rng::SystemRng,
};

const DROUGHT_WATER_LOSS: i32 = 300;
const DROUGHT_GRASS_LOSS: i32 = 200;
const RAIN_WATER_GAIN: i32 = 400;
const RAIN_GRASS_GAIN: i32 = 300;

/// One weather draw per turn: drought, abundant rain, or nothing.
/// The two events are mutually exclusive.
pub struct EventSystem;

impl EventSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for EventSystem {
    fn name(&self) -> &'static str {
        "events"
    }

    fn run(
        &mut self,
        ctx: &SystemContext,
        eco: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        let draw: f64 = rng.gen();
        let tuning = ctx.tuning;
        if draw < tuning.drought_chance {
            eco.adjust_water(-DROUGHT_WATER_LOSS);
            eco.adjust_grass(-DROUGHT_GRASS_LOSS);
            eco.log.event = Some(EcoEvent::Drought);
            tracing::debug!(turn = ctx.turn, "drought struck");
        } else if draw < tuning.drought_chance + tuning.rain_chance {
            eco.adjust_water(RAIN_WATER_GAIN);
            eco.adjust_grass(RAIN_GRASS_GAIN);
            eco.log.event = Some(EcoEvent::AbundantRain);
            tracing::debug!(turn = ctx.turn, "abundant rain fell");
        }
        Ok(())
    }
}
