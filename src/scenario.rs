use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use crate::ecosystem::Ecosystem;
use crate::species::Species;

fn default_name() -> String {
    "meadow".to_string()
}

fn default_grass() -> i32 {
    1000
}

fn default_water() -> i32 {
    1000
}

fn default_rabbits() -> usize {
    20
}

fn default_deer() -> usize {
    10
}

fn default_foxes() -> usize {
    5
}

fn default_wolves() -> usize {
    3
}

fn default_hunt_success() -> f64 {
    0.30
}

fn default_drought_chance() -> f64 {
    0.05
}

fn default_rain_chance() -> f64 {
    0.05
}

/// Starting conditions plus tuning knobs. Every field has a default that
/// reproduces the stock game, so a scenario file only states what it
/// changes.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    /// Fixed seed for reproducible runs. Omitted = seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_grass")]
    pub grass: i32,
    #[serde(default = "default_water")]
    pub water: i32,
    #[serde(default)]
    pub population: StartingPopulation,
    #[serde(default)]
    pub tuning: Tuning,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: default_name(),
            seed: None,
            grass: default_grass(),
            water: default_water(),
            population: StartingPopulation::default(),
            tuning: Tuning::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartingPopulation {
    #[serde(default = "default_rabbits")]
    pub rabbits: usize,
    #[serde(default = "default_deer")]
    pub deer: usize,
    #[serde(default = "default_foxes")]
    pub foxes: usize,
    #[serde(default = "default_wolves")]
    pub wolves: usize,
}

impl Default for StartingPopulation {
    fn default() -> Self {
        Self {
            rabbits: default_rabbits(),
            deer: default_deer(),
            foxes: default_foxes(),
            wolves: default_wolves(),
        }
    }
}

/// Probabilities the turn pipeline draws against. Exposed so scenarios and
/// tests can pin them (a hunt probability of zero makes predation inert).
#[derive(Debug, Clone, Deserialize)]
pub struct Tuning {
    #[serde(default = "default_hunt_success")]
    pub hunt_success: f64,
    #[serde(default = "default_drought_chance")]
    pub drought_chance: f64,
    #[serde(default = "default_rain_chance")]
    pub rain_chance: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            hunt_success: default_hunt_success(),
            drought_chance: default_drought_chance(),
            rain_chance: default_rain_chance(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scenario file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid scenario: {0}")]
    Validation(String),
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path).map_err(|source| ScenarioError::Io {
            path: path.clone(),
            source,
        })?;
        let scenario: Scenario =
            serde_yaml::from_str(&data).map_err(|source| ScenarioError::Parse { path, source })?;
        scenario.validate()?;
        Ok(scenario)
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        for (label, value) in [
            ("tuning.hunt_success", self.tuning.hunt_success),
            ("tuning.drought_chance", self.tuning.drought_chance),
            ("tuning.rain_chance", self.tuning.rain_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScenarioError::Validation(format!(
                    "{label} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.tuning.drought_chance + self.tuning.rain_chance > 1.0 {
            return Err(ScenarioError::Validation(
                "drought and rain chances must not sum past 1".to_string(),
            ));
        }
        if self.grass < 0 || self.water < 0 {
            return Err(ScenarioError::Validation(
                "starting resources must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_ecosystem(&self) -> Ecosystem {
        let mut eco = Ecosystem::new(self.grass, self.water);
        eco.introduce(Species::Rabbit, self.population.rabbits);
        eco.introduce(Species::Deer, self.population.deer);
        eco.introduce(Species::Fox, self.population.foxes);
        eco.introduce(Species::Wolf, self.population.wolves);
        eco
    }
}
