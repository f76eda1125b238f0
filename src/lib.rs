pub mod ecosystem;
pub mod engine;
pub mod game;
pub mod rng;
pub mod scenario;
pub mod species;
pub mod systems;
pub mod ui;

pub use ecosystem::{Animal, EcoEvent, Ecosystem, TurnLog};
pub use engine::{Engine, EngineSettings, TurnSummary};
pub use game::{Action, Game};
pub use scenario::{Scenario, ScenarioLoader, Tuning};
pub use species::Species;
