//! Text rendering for the terminal surface.
//!
//! Screens are built as plain strings so the controller stays testable
//! without a live terminal; the only IO here is printing and the ANSI
//! clear.

use std::fmt::Write as _;

use crate::ecosystem::Ecosystem;
use crate::game::Game;
use crate::species::ALL_SPECIES;

const SCREEN_WIDTH: usize = 60;
const BAR_SEGMENTS: i32 = 50;

/// Fixed-width gauge: one filled segment per 40 units, 2000 = full.
pub fn resource_bar(level: i32) -> String {
    let filled = (level / 40).clamp(0, BAR_SEGMENTS) as usize;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_SEGMENTS as usize - filled));
    bar
}

fn rule(c: char) -> String {
    std::iter::repeat(c).take(SCREEN_WIDTH).collect()
}

pub fn status_screen(game: &Game) -> String {
    let eco = game.ecosystem();
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "{:^width$}", "🌲 ECOSYSTEM SIMULATION GAME 🌲", width = SCREEN_WIDTH);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out);
    let _ = writeln!(out, "Turn: {}  |  Score: {}", eco.turn(), game.score());
    let _ = writeln!(out);
    let _ = writeln!(out, "RESOURCES:");
    let _ = writeln!(out, "  Grass: [{}] {}", resource_bar(eco.grass()), eco.grass());
    let _ = writeln!(out, "  Water: [{}] {}", resource_bar(eco.water()), eco.water());
    let _ = writeln!(out);
    let _ = write!(out, "{}", population_block(eco));
    let _ = writeln!(out);
    if eco.is_balanced() {
        let _ = writeln!(out, "Ecosystem Status: ✓ HEALTHY");
    } else {
        let _ = writeln!(out, "Ecosystem Status: ⚠ AT RISK");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule('-'));
    out
}

fn population_block(eco: &Ecosystem) -> String {
    let counts = eco.population_counts();
    let mut out = String::new();
    let _ = writeln!(out, "POPULATION:");
    for species in ALL_SPECIES {
        let profile = species.profile();
        let label = format!("{}:", profile.plural);
        let _ = writeln!(out, "  {} {label:<9}{}", profile.glyph, counts[&species]);
    }
    let _ = writeln!(out, "  Total Animals: {}", eco.total_population());
    out
}

pub fn menu() -> &'static str {
    "\nACTIONS:\n  1. Advance 1 turn\n  2. Advance 5 turns\n  3. Add grass (+200)\n  4. Add water (+200)\n  5. Introduce 5 rabbits\n  6. Introduce 2 deer\n  7. Introduce 1 fox\n  8. Introduce 1 wolf\n  9. View ecosystem tips\n  0. Quit game\n"
}

pub fn tips() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "ECOSYSTEM TIPS:");
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out, "• Herbivores (rabbits, deer) eat grass and need water");
    let _ = writeln!(out, "• Predators (foxes, wolves) hunt herbivores");
    let _ = writeln!(out, "• Foxes prefer rabbits, wolves prefer deer");
    let _ = writeln!(out, "• Animals need energy to survive and reproduce");
    let _ = writeln!(out, "• Balance is key - too many predators will collapse the food chain");
    let _ = writeln!(out, "• Too many herbivores will deplete grass resources");
    let _ = writeln!(out, "• Watch for random events like droughts and rain");
    let _ = writeln!(out, "• Score increases each turn if ecosystem is healthy");
    let _ = write!(out, "{}", rule('='));
    out
}

pub fn welcome() -> &'static str {
    "\nWelcome to Ecosystem Simulation Game!\nYour goal is to maintain a balanced ecosystem."
}

pub fn collapse_message(score: i64) -> String {
    format!("\n⚠ All animals have died! Ecosystem collapsed!\nFinal Score: {score}")
}

pub fn summary_screen(game: &Game) -> String {
    let eco = game.ecosystem();
    let counts = eco.population_counts();
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rule('='));
    let _ = writeln!(out, "{:^width$}", "GAME OVER", width = SCREEN_WIDTH);
    let _ = writeln!(out, "{}", rule('='));
    let _ = writeln!(out);
    let _ = writeln!(out, "Final Score: {}", game.score());
    let _ = writeln!(out, "Turns Survived: {}", eco.turn());
    let _ = writeln!(out);
    let _ = writeln!(out, "Final Population:");
    for species in ALL_SPECIES {
        let _ = writeln!(out, "  {}: {}", species.name(), counts[&species]);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Thanks for playing!");
    let _ = write!(out, "{}", rule('='));
    out
}

/// ANSI full-screen clear; incidental IO, nothing to test.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_always_fifty_segments() {
        for level in [0, 1, 39, 40, 1000, 1999, 2000] {
            let bar = resource_bar(level);
            assert_eq!(bar.chars().count(), 50, "level {level}");
        }
    }

    #[test]
    fn bar_fill_tracks_level_div_40() {
        assert_eq!(resource_bar(0).chars().filter(|&c| c == '█').count(), 0);
        assert_eq!(resource_bar(1000).chars().filter(|&c| c == '█').count(), 25);
        assert_eq!(resource_bar(2000).chars().filter(|&c| c == '█').count(), 50);
    }
}
