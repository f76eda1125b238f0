use ecotone::{
    ecosystem::Ecosystem,
    engine::{Engine, EngineSettings},
    game::{Action, Game},
    scenario::{Scenario, Tuning},
    species::Species,
};

fn quiet_tuning() -> Tuning {
    Tuning {
        hunt_success: 0.0,
        drought_chance: 0.0,
        rain_chance: 0.0,
    }
}

fn stock_game(seed: u64, tuning: Tuning) -> Game {
    let scenario = Scenario::default();
    let eco = scenario.build_ecosystem();
    Game::new(eco, Engine::standard(EngineSettings { seed, tuning }))
}

fn game_with(eco: Ecosystem, seed: u64, tuning: Tuning) -> Game {
    Game::new(eco, Engine::standard(EngineSettings { seed, tuning }))
}

#[test]
fn menu_parsing_accepts_digits_and_ignores_everything_else() {
    assert_eq!(Action::parse("1"), Some(Action::Advance));
    assert_eq!(Action::parse("2"), Some(Action::AdvanceFive));
    assert_eq!(Action::parse(" 5 \n"), Some(Action::IntroduceRabbits));
    assert_eq!(Action::parse("0"), Some(Action::Quit));
    assert_eq!(Action::parse("99"), None);
    assert_eq!(Action::parse("abc"), None);
    assert_eq!(Action::parse(""), None);
}

#[test]
fn unknown_input_leaves_state_untouched() {
    let mut game = stock_game(1, quiet_tuning());
    let before_grass = game.ecosystem().grass();
    let before_pop = game.ecosystem().total_population();

    // the controller only ever applies parsed actions; garbage never
    // reaches apply()
    assert_eq!(Action::parse("99"), None);
    assert_eq!(Action::parse("abc"), None);

    assert_eq!(game.ecosystem().grass(), before_grass);
    assert_eq!(game.ecosystem().total_population(), before_pop);
    assert_eq!(game.score(), 0);
    assert!(!game.is_over());
    // and tips really are a no-op on state
    game.apply(Action::ShowTips).unwrap();
    assert_eq!(game.ecosystem().total_population(), before_pop);
    assert_eq!(game.score(), 0);
}

#[test]
fn resource_actions_cost_five_and_cap_at_two_thousand() {
    let mut eco = Ecosystem::new(0, 0);
    eco.introduce(Species::Rabbit, 1);
    let mut game = game_with(eco, 2, quiet_tuning());

    for _ in 0..9 {
        game.apply(Action::AddGrass).unwrap();
    }
    assert_eq!(game.ecosystem().grass(), 1800);
    assert_eq!(game.score(), -45);

    // two more shots would pass the cap; the stock clamps instead
    game.apply(Action::AddGrass).unwrap();
    game.apply(Action::AddGrass).unwrap();
    assert_eq!(game.ecosystem().grass(), 2000);

    game.apply(Action::AddWater).unwrap();
    assert_eq!(game.ecosystem().water(), 200);
    assert_eq!(game.score(), -60);
}

#[test]
fn introductions_append_the_right_headcounts() {
    let mut game = stock_game(3, quiet_tuning());

    game.apply(Action::IntroduceRabbits).unwrap();
    game.apply(Action::IntroduceDeer).unwrap();
    game.apply(Action::IntroduceFox).unwrap();
    game.apply(Action::IntroduceWolf).unwrap();

    let counts = game.ecosystem().population_counts();
    assert_eq!(counts[&Species::Rabbit], 25);
    assert_eq!(counts[&Species::Deer], 12);
    assert_eq!(counts[&Species::Fox], 6);
    assert_eq!(counts[&Species::Wolf], 4);
    assert_eq!(game.score(), -10 - 10 - 15 - 15);
}

#[test]
fn advancing_scores_ten_per_balanced_turn() {
    let mut game = stock_game(4, quiet_tuning());
    let summaries = game.apply(Action::Advance).unwrap();
    assert_eq!(summaries.len(), 1);
    assert!(game.ecosystem().is_balanced());
    assert_eq!(game.score(), 10);

    let summaries = game.apply(Action::AdvanceFive).unwrap();
    assert_eq!(summaries.len(), 5);
    assert!(game.score() <= 60, "at most +10 per turn");
    assert!(game.score() > 10, "the quiet meadow stays balanced a while");
}

#[test]
fn an_unbalanced_ecosystem_earns_nothing() {
    // a lone wolf is far under the ten-animal floor
    let mut eco = Ecosystem::new(1000, 1000);
    eco.introduce(Species::Wolf, 1);
    let mut game = game_with(eco, 5, quiet_tuning());

    game.apply(Action::Advance).unwrap();
    assert_eq!(game.score(), 0);
}

#[test]
fn quitting_ends_the_game_without_collapse() {
    let mut game = stock_game(6, quiet_tuning());
    game.apply(Action::Quit).unwrap();
    assert!(game.is_over());
    assert!(!game.collapsed());
}

#[test]
fn extinction_forces_game_over_even_from_a_no_op_action() {
    // empty ecosystem: even "show tips" trips the collapse check
    let eco = Ecosystem::new(1000, 1000);
    let mut game = game_with(eco, 7, quiet_tuning());
    game.apply(Action::ShowTips).unwrap();
    assert!(game.is_over());
    assert!(game.collapsed());
}

#[test]
fn a_dying_last_animal_collapses_the_run() {
    let mut eco = Ecosystem::new(1000, 1000);
    eco.introduce(Species::Wolf, 1);
    let mut game = game_with(eco, 8, quiet_tuning());

    let mut rounds = 0;
    while !game.is_over() {
        game.apply(Action::Advance).unwrap();
        rounds += 1;
        assert!(rounds < 20, "lone wolf must starve within 20 turns");
    }
    assert!(game.collapsed());
    assert_eq!(game.ecosystem().total_population(), 0);
}

#[test]
fn same_seed_and_actions_replay_identically() {
    let script = [
        Action::Advance,
        Action::AddGrass,
        Action::AdvanceFive,
        Action::IntroduceDeer,
        Action::Advance,
    ];

    let run = |seed| {
        let scenario = Scenario::default();
        let mut game = Game::new(
            scenario.build_ecosystem(),
            Engine::standard(EngineSettings {
                seed,
                tuning: scenario.tuning.clone(),
            }),
        );
        for action in script {
            game.apply(action).unwrap();
        }
        (
            game.score(),
            game.ecosystem().grass(),
            game.ecosystem().water(),
            game.ecosystem().population_counts(),
        )
    };

    assert_eq!(run(42), run(42));
}
