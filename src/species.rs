//! The closed set of species and their constant profiles.
//!
//! Every per-species number lives in one static table so the rest of the
//! crate never branches on species beyond a profile lookup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rabbit,
    Deer,
    Fox,
    Wolf,
}

pub const ALL_SPECIES: [Species; 4] = [Species::Rabbit, Species::Deer, Species::Fox, Species::Wolf];

/// What a species eats. Grazers draw down the shared grass stock; hunters
/// take live prey, falling back to any prey when their preferred species
/// has run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diet {
    Grazer { ration: i32 },
    Hunter { preferred: Species },
}

/// Constant profile for one species.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProfile {
    pub name: &'static str,
    pub plural: &'static str,
    pub glyph: &'static str,
    /// Age beyond which the animal dies of old age.
    pub max_age: u32,
    /// Minimum age to qualify for reproduction.
    pub reproduction_age: u32,
    /// Offspring per fertile pair, applied with floor semantics.
    pub reproduction_rate: f64,
    /// Energy burned every turn just staying alive.
    pub upkeep: i32,
    pub diet: Diet,
}

impl Species {
    pub fn profile(self) -> &'static SpeciesProfile {
        match self {
            Species::Rabbit => &RABBIT,
            Species::Deer => &DEER,
            Species::Fox => &FOX,
            Species::Wolf => &WOLF,
        }
    }

    pub fn name(self) -> &'static str {
        self.profile().name
    }

    pub fn is_hunter(self) -> bool {
        matches!(self.profile().diet, Diet::Hunter { .. })
    }
}

static RABBIT: SpeciesProfile = SpeciesProfile {
    name: "Rabbit",
    plural: "Rabbits",
    glyph: "🐰",
    max_age: 8,
    reproduction_age: 1,
    reproduction_rate: 0.50,
    upkeep: 5,
    diet: Diet::Grazer { ration: 10 },
};

static DEER: SpeciesProfile = SpeciesProfile {
    name: "Deer",
    plural: "Deer",
    glyph: "🦌",
    max_age: 15,
    reproduction_age: 2,
    reproduction_rate: 0.30,
    upkeep: 8,
    diet: Diet::Grazer { ration: 20 },
};

static FOX: SpeciesProfile = SpeciesProfile {
    name: "Fox",
    plural: "Foxes",
    glyph: "🦊",
    max_age: 10,
    reproduction_age: 2,
    reproduction_rate: 0.20,
    upkeep: 12,
    diet: Diet::Hunter {
        preferred: Species::Rabbit,
    },
};

static WOLF: SpeciesProfile = SpeciesProfile {
    name: "Wolf",
    plural: "Wolves",
    glyph: "🐺",
    max_age: 12,
    reproduction_age: 3,
    reproduction_rate: 0.15,
    upkeep: 15,
    diet: Diet::Hunter {
        preferred: Species::Deer,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hunters_prefer_the_right_prey() {
        assert!(Species::Fox.is_hunter());
        assert!(Species::Wolf.is_hunter());
        assert_eq!(
            Species::Fox.profile().diet,
            Diet::Hunter {
                preferred: Species::Rabbit
            }
        );
        assert_eq!(
            Species::Wolf.profile().diet,
            Diet::Hunter {
                preferred: Species::Deer
            }
        );
    }

    #[test]
    fn grazers_have_rations() {
        assert_eq!(Species::Rabbit.profile().diet, Diet::Grazer { ration: 10 });
        assert_eq!(Species::Deer.profile().diet, Diet::Grazer { ration: 20 });
    }
}
