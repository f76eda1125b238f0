use anyhow::Result;

use crate::{
    ecosystem::Ecosystem,
    engine::{Engine, TurnSummary},
    species::Species,
};

/// One discrete menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance,
    AdvanceFive,
    AddGrass,
    AddWater,
    IntroduceRabbits,
    IntroduceDeer,
    IntroduceFox,
    IntroduceWolf,
    ShowTips,
    Quit,
}

impl Action {
    /// Maps trimmed menu input to an action. Anything unrecognized is
    /// `None`; the caller just redraws the menu.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Advance),
            "2" => Some(Self::AdvanceFive),
            "3" => Some(Self::AddGrass),
            "4" => Some(Self::AddWater),
            "5" => Some(Self::IntroduceRabbits),
            "6" => Some(Self::IntroduceDeer),
            "7" => Some(Self::IntroduceFox),
            "8" => Some(Self::IntroduceWolf),
            "9" => Some(Self::ShowTips),
            "0" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Owns the whole run: ecosystem, engine, score, and the terminal flags.
/// Everything the render/input/apply cycle needs travels through this one
/// context object.
pub struct Game {
    ecosystem: Ecosystem,
    engine: Engine,
    score: i64,
    game_over: bool,
    collapsed: bool,
}

impl Game {
    pub fn new(ecosystem: Ecosystem, engine: Engine) -> Self {
        Self {
            ecosystem,
            engine,
            score: 0,
            game_over: false,
            collapsed: false,
        }
    }

    pub fn ecosystem(&self) -> &Ecosystem {
        &self.ecosystem
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// True once the population hit zero; this run ends without the
    /// standard summary.
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    /// Applies one action and its score delta. Returns the summaries of any
    /// turns that ran. The extinction check runs after every action, even
    /// the ones that cannot change the population.
    pub fn apply(&mut self, action: Action) -> Result<Vec<TurnSummary>> {
        let mut summaries = Vec::new();
        match action {
            Action::Advance => summaries.push(self.step()?),
            Action::AdvanceFive => {
                for _ in 0..5 {
                    summaries.push(self.step()?);
                }
            }
            Action::AddGrass => {
                self.ecosystem.adjust_grass(200);
                self.score -= 5;
            }
            Action::AddWater => {
                self.ecosystem.adjust_water(200);
                self.score -= 5;
            }
            Action::IntroduceRabbits => {
                self.ecosystem.introduce(Species::Rabbit, 5);
                self.score -= 10;
            }
            Action::IntroduceDeer => {
                self.ecosystem.introduce(Species::Deer, 2);
                self.score -= 10;
            }
            Action::IntroduceFox => {
                self.ecosystem.introduce(Species::Fox, 1);
                self.score -= 15;
            }
            Action::IntroduceWolf => {
                self.ecosystem.introduce(Species::Wolf, 1);
                self.score -= 15;
            }
            Action::ShowTips => {}
            Action::Quit => self.game_over = true,
        }

        if self.ecosystem.total_population() == 0 {
            self.game_over = true;
            self.collapsed = true;
            tracing::info!(score = self.score, "ecosystem collapsed");
        }
        Ok(summaries)
    }

    /// One turn, scored +10 when the ecosystem is balanced afterwards.
    /// Each of the five turns of [`Action::AdvanceFive`] is scored
    /// independently.
    fn step(&mut self) -> Result<TurnSummary> {
        let summary = self.engine.advance_turn(&mut self.ecosystem)?;
        if self.ecosystem.is_balanced() {
            self.score += 10;
        }
        Ok(summary)
    }
}
