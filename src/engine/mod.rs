use anyhow::Result;

use crate::{
    ecosystem::{EcoEvent, Ecosystem},
    rng::{RngManager, SystemRng},
    scenario::Tuning,
    systems::{
        AgingSystem, CullSystem, EventSystem, GrazingSystem, GrowthSystem, HydrationSystem,
        PredationSystem, ReproductionSystem, ShuffleSystem,
    },
};

pub struct EngineSettings {
    pub seed: u64,
    pub tuning: Tuning,
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: RngManager::new(self.settings.seed),
            tuning: self.settings.tuning,
            systems: self.systems,
        }
    }
}

pub struct Engine {
    rng: RngManager,
    tuning: Tuning,
    systems: Vec<Box<dyn System>>,
}

impl Engine {
    /// Engine wired with the canonical phase order. The order is
    /// load-bearing: it decides who eats before whom and who is still
    /// standing when the hunters pass through.
    pub fn standard(settings: EngineSettings) -> Self {
        EngineBuilder::new(settings)
            .with_system(GrowthSystem::new())
            .with_system(ShuffleSystem::new())
            .with_system(GrazingSystem::new())
            .with_system(PredationSystem::new())
            .with_system(HydrationSystem::new())
            .with_system(AgingSystem::new())
            .with_system(ReproductionSystem::new())
            .with_system(CullSystem::new())
            .with_system(EventSystem::new())
            .build()
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn advance_turn(&mut self, eco: &mut Ecosystem) -> Result<TurnSummary> {
        eco.begin_turn();
        for system in &mut self.systems {
            let ctx = SystemContext {
                turn: eco.turn(),
                tuning: &self.tuning,
            };
            let mut stream = self.rng.stream(system.name());
            system.run(&ctx, eco, &mut stream)?;
        }
        let summary = TurnSummary {
            turn: eco.turn(),
            births: eco.log.births,
            kills: eco.log.kills,
            natural_deaths: eco.log.natural_deaths,
            event: eco.log.event,
        };
        tracing::debug!(
            turn = summary.turn,
            births = summary.births,
            kills = summary.kills,
            deaths = summary.natural_deaths,
            population = eco.total_population(),
            "turn complete"
        );
        Ok(summary)
    }
}

pub struct SystemContext<'a> {
    pub turn: u64,
    pub tuning: &'a Tuning,
}

pub trait System {
    /// Stable name; also keys the system's RNG stream.
    fn name(&self) -> &'static str;

    fn run(&mut self, ctx: &SystemContext, eco: &mut Ecosystem, rng: &mut SystemRng<'_>)
        -> Result<()>;
}

#[derive(Clone, Copy, Debug)]
pub struct TurnSummary {
    pub turn: u64,
    pub births: u32,
    pub kills: u32,
    pub natural_deaths: u32,
    pub event: Option<EcoEvent>,
}
