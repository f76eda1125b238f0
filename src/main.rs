use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ecotone::{
    engine::{Engine, EngineSettings},
    game::{Action, Game},
    scenario::{Scenario, ScenarioLoader},
    ui,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Turn-based terminal ecosystem management game")]
struct Cli {
    /// Path to a scenario YAML file (built-in meadow defaults when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Fixed RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many turns unattended and print the final report
    #[arg(long)]
    turns: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ecotone=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::default(),
    };
    let seed = cli.seed.or(scenario.seed).unwrap_or_else(rand::random);
    tracing::info!(scenario = %scenario.name, seed, "starting run");

    let ecosystem = scenario.build_ecosystem();
    let engine = Engine::standard(EngineSettings {
        seed,
        tuning: scenario.tuning.clone(),
    });
    let mut game = Game::new(ecosystem, engine);

    match cli.turns {
        Some(turns) => run_unattended(&mut game, turns),
        None => run_interactive(&mut game),
    }
}

/// Advances the given number of turns without the menu, in the manner of a
/// batch scenario runner, then prints the closing report.
fn run_unattended(game: &mut Game, turns: u64) -> Result<()> {
    for _ in 0..turns {
        if game.is_over() {
            break;
        }
        for summary in game.apply(Action::Advance)? {
            tracing::info!(
                turn = summary.turn,
                births = summary.births,
                kills = summary.kills,
                deaths = summary.natural_deaths,
                "turn"
            );
        }
    }
    if game.collapsed() {
        println!("{}", ui::collapse_message(game.score()));
    } else {
        println!("{}", ui::summary_screen(game));
    }
    Ok(())
}

fn run_interactive(game: &mut Game) -> Result<()> {
    println!("{}", ui::welcome());
    wait_for_enter("\nPress Enter to start...")?;

    ui::clear_screen();
    println!("{}", ui::status_screen(game));
    println!("{}", ui::tips());
    wait_for_enter("\nPress Enter to continue...")?;

    while !game.is_over() {
        ui::clear_screen();
        println!("{}", ui::status_screen(game));
        println!("{}", ui::menu());
        print!("Choose an action: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed; treat like quitting
            game.apply(Action::Quit)?;
            break;
        }
        let action = match Action::parse(&input) {
            Some(action) => action,
            None => continue,
        };
        if action == Action::ShowTips {
            println!("{}", ui::tips());
            wait_for_enter("\nPress Enter to continue...")?;
        }
        game.apply(action)?;
    }

    if game.collapsed() {
        println!("{}", ui::collapse_message(game.score()));
        wait_for_enter("\nPress Enter to exit...")?;
    } else {
        ui::clear_screen();
        println!("{}", ui::summary_screen(game));
    }
    Ok(())
}

fn wait_for_enter(prompt: &str) -> Result<()> {
    print!("{prompt} ");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(())
}
