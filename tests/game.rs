//! Game integration tests.

#![allow(clippy::float_cmp)]

use core::f32::consts::PI;
use core::time::Duration;

use chestrs::{
    Affordance, Chest, ChestError, ClickError, Game, GameEvent, GameOptions, GameState, LidPose,
    OptionsError, Outcome, PlayError, ScoreDisplay, ScriptedSource, Slot, UniformSource,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const ANIMATION: Duration = Duration::from_secs(1);
const BANNER: Duration = Duration::from_secs(2);

fn scripted_game(options: GameOptions, draws: &[f64]) -> Game<ScriptedSource> {
    Game::with_source(options, ScriptedSource::new(draws.iter().copied())).unwrap()
}

/// Draw values producing each outcome with the default chances.
fn draws_for(outcomes: &[Outcome]) -> Vec<f64> {
    let mut draws = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Lost => draws.push(0.9),
            Outcome::Win => draws.extend([0.1, 0.9]),
            Outcome::Bonus => draws.extend([0.1, 0.1]),
        }
    }
    draws
}

fn count_completions(events: &[GameEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, GameEvent::RoundCompleted { .. }))
        .count()
}

#[test]
fn draw_follows_two_stage_process() {
    let mut source = ScriptedSource::new([0.1, 0.1]);
    assert_eq!(Outcome::draw(&mut source, 0.5, 0.25), Outcome::Bonus);

    let mut source = ScriptedSource::new([0.1, 0.9]);
    assert_eq!(Outcome::draw(&mut source, 0.5, 0.25), Outcome::Win);

    let mut source = ScriptedSource::new([0.9, 0.1]);
    assert_eq!(Outcome::draw(&mut source, 0.5, 0.25), Outcome::Lost);
    assert_eq!(source.consumed(), 1);

    // Boundary: a first draw equal to the win chance loses.
    let mut source = ScriptedSource::new([0.5]);
    assert_eq!(Outcome::draw(&mut source, 0.5, 0.25), Outcome::Lost);
}

#[test]
fn seeded_draws_match_expected_distribution() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let (mut lost, mut win, mut bonus) = (0_u32, 0_u32, 0_u32);

    for _ in 0..20_000 {
        match Outcome::draw(&mut rng, 0.5, 0.25) {
            Outcome::Lost => lost += 1,
            Outcome::Win => win += 1,
            Outcome::Bonus => bonus += 1,
        }
    }

    let ratio = |count: u32| f64::from(count) / 20_000.0;
    assert!((ratio(lost) - 0.5).abs() < 0.02);
    assert!((ratio(win) - 0.375).abs() < 0.02);
    assert!((ratio(bonus) - 0.125).abs() < 0.02);
}

#[test]
fn chacha_source_yields_unit_values() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..1_000 {
        let value = rng.next_unit();
        assert!((0.0..1.0).contains(&value));
    }
}

#[test]
fn outcome_points_and_labels() {
    let options = GameOptions::default();
    assert_eq!(Outcome::Lost.points(&options), 0);
    assert_eq!(Outcome::Win.points(&options), 100);
    assert_eq!(Outcome::Bonus.points(&options), 200);

    assert_eq!(Outcome::Lost.label(), "LOSE");
    assert_eq!(Outcome::Win.label(), "WIN");
    assert_eq!(Outcome::Bonus.label(), "BONUS");
    assert!(Outcome::Bonus.is_win());
    assert!(!Outcome::Lost.is_win());
}

#[test]
fn options_builder_and_validation() {
    let options = GameOptions::default()
        .with_chest_count(9)
        .with_win_chance(0.3)
        .with_win_bonus_chance(0.5)
        .with_animation_duration(Duration::from_millis(400))
        .with_bonus_banner_duration(Duration::from_secs(3))
        .with_win_points(10)
        .with_bonus_points(20);

    assert_eq!(options.chest_count, 9);
    assert_eq!(options.win_chance, 0.3);
    assert_eq!(options.win_bonus_chance, 0.5);
    assert_eq!(options.animation_duration, Duration::from_millis(400));
    assert_eq!(options.bonus_banner_duration, Duration::from_secs(3));
    assert_eq!(options.win_points, 10);
    assert_eq!(options.bonus_points, 20);
    assert_eq!(options.validate(), Ok(()));

    assert_eq!(
        GameOptions::default().with_chest_count(0).validate(),
        Err(OptionsError::NoChests)
    );
    assert_eq!(
        GameOptions::default().with_win_chance(1.5).validate(),
        Err(OptionsError::WinChanceOutOfRange)
    );
    assert_eq!(
        GameOptions::default().with_win_bonus_chance(f64::NAN).validate(),
        Err(OptionsError::BonusChanceOutOfRange)
    );
    assert!(Game::new(GameOptions::default().with_chest_count(0), 1).is_err());
}

#[test]
fn chest_opens_at_most_once_per_round() {
    let mut chest = Chest::new(0, ANIMATION);
    assert!(!chest.is_opened());
    assert!(!chest.is_enabled());
    assert_eq!(chest.affordance(), Affordance::DISABLED);

    chest.enable();
    assert_eq!(chest.affordance(), Affordance::ENABLED);

    let animation = chest.open(Outcome::Win).unwrap();
    assert_eq!(animation.duration(), ANIMATION);
    assert!(chest.is_opened());
    assert!(!chest.is_enabled());
    assert_eq!(chest.label(), Some("WIN"));

    assert_eq!(chest.open(Outcome::Bonus), Err(ChestError::AlreadyOpened));
    assert_eq!(chest.outcome(), Some(Outcome::Win));

    let close = chest.reset();
    assert_eq!(close.final_pose(), LidPose::CLOSED);
    assert!(!chest.is_opened());
    assert_eq!(chest.label(), None);
    assert_eq!(chest.lid(), LidPose::CLOSED);

    assert!(chest.open(Outcome::Lost).is_ok());
}

#[test]
fn open_animations_depend_on_outcome() {
    let mut bonus = Chest::new(0, ANIMATION);
    let animation = bonus.open(Outcome::Bonus).unwrap();
    assert_eq!(animation.steps.len(), 1);
    assert_eq!(animation.final_pose().rotation, -PI / 2.0);
    assert_eq!(bonus.lid(), animation.final_pose());

    let mut win = Chest::new(1, ANIMATION);
    let animation = win.open(Outcome::Win).unwrap();
    assert_eq!(animation.final_pose().rotation, -PI / 4.0);

    let mut lost = Chest::new(2, ANIMATION);
    let animation = lost.open(Outcome::Lost).unwrap();
    assert_eq!(animation.steps.len(), 2);
    assert_eq!(animation.steps[0].to, LidPose::new(-30.0, -PI / 16.0));
    assert_eq!(animation.steps[0].duration, Duration::from_millis(500));
    assert_eq!(animation.duration(), ANIMATION);
    assert_eq!(animation.final_pose(), LidPose::CLOSED);
}

#[test]
fn chests_are_laid_out_in_rows_of_three() {
    assert_eq!(Slot::for_index(0), Slot { x: 0.0, y: 0.0 });
    assert_eq!(Slot::for_index(2), Slot { x: 260.0, y: 0.0 });
    assert_eq!(Slot::for_index(4), Slot { x: 130.0, y: 170.0 });
}

#[test]
fn display_renders_score_and_banner() {
    let mut display = ScoreDisplay::new();
    assert_eq!(display.score_text(), "");

    display.show_score(0);
    assert_eq!(display.score_text(), "You won 0 $!");
    display.clear_score();
    assert_eq!(display.score_text(), "");

    display.show_bonus_banner(200);
    assert!(display.is_banner_visible());
    assert_eq!(display.banner_text(), "YOU WON THE BONUS - 200$!");
    display.hide_bonus_banner();
    assert!(!display.is_banner_visible());
}

#[test]
fn new_game_waits_for_play() {
    let game = Game::new(GameOptions::default(), 1).unwrap();

    assert_eq!(game.state(), GameState::Idle);
    assert!(game.is_play_enabled());
    assert!(game.chests().iter().all(|chest| !chest.is_enabled()));
    assert_eq!(game.click_chest(0), Err(ClickError::RoundNotActive));
    assert_eq!(game.opened_count(), 0);
}

#[test]
fn score_accumulates_over_full_round() {
    let outcomes = [
        Outcome::Lost,
        Outcome::Win,
        Outcome::Lost,
        Outcome::Bonus,
        Outcome::Lost,
        Outcome::Win,
    ];
    let game = scripted_game(GameOptions::default(), &draws_for(&outcomes));

    game.press_play().unwrap();
    for (index, expected) in outcomes.iter().enumerate() {
        assert_eq!(game.click_chest(index), Ok(*expected));
        game.advance(ANIMATION);
    }

    assert_eq!(game.score(), 400);
    assert_eq!(game.opened_count(), 6);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.display().score_text(), "You won 400 $!");
    assert!(game.is_play_enabled());
    assert_eq!(game.click_chest(0), Err(ClickError::RoundNotActive));
}

#[test]
fn score_is_applied_at_click_time() {
    let game = scripted_game(GameOptions::default(), &draws_for(&[Outcome::Bonus]));
    game.press_play().unwrap();

    game.click_chest(3).unwrap();
    assert_eq!(game.score(), 200);
    assert_eq!(game.opened_count(), 1);
    assert_eq!(game.display().score_text(), "");
}

#[test]
fn round_completion_fires_exactly_once() {
    let options = GameOptions::default().with_chest_count(3);
    let game = scripted_game(options, &draws_for(&[Outcome::Win; 3]));
    game.press_play().unwrap();

    let mut completions = 0;
    for index in 0..3 {
        game.click_chest(index).unwrap();
        completions += count_completions(&game.drain_events());
        assert_eq!(completions, 0);

        game.advance(ANIMATION);
        completions += count_completions(&game.drain_events());
    }
    assert_eq!(completions, 1);

    game.advance(Duration::from_secs(10));
    assert_eq!(game.click_chest(1), Err(ClickError::RoundNotActive));
    assert_eq!(count_completions(&game.drain_events()), 0);
}

#[test]
fn final_score_is_not_published_before_the_last_animation_ends() {
    let options = GameOptions::default().with_chest_count(1);
    let game = scripted_game(options, &draws_for(&[Outcome::Win]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    game.advance(Duration::from_millis(999));
    assert_eq!(game.state(), GameState::Opening);
    assert!(!game.is_play_enabled());
    assert_eq!(game.display().score_text(), "");

    assert_eq!(game.advance(Duration::from_millis(1)), 1);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.display().score_text(), "You won 100 $!");
}

#[test]
fn click_during_open_window_is_ignored() {
    let game = scripted_game(GameOptions::default(), &draws_for(&[Outcome::Lost]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    assert!(game.chests().iter().all(|chest| !chest.is_enabled()));

    assert_eq!(game.click_chest(1), Err(ClickError::InputLocked));
    assert_eq!(game.opened_count(), 1);
    assert_eq!(game.round_state().remaining(), 5);

    game.advance(Duration::from_millis(500));
    assert_eq!(game.click_chest(1), Err(ClickError::InputLocked));
    assert_eq!(game.opened_count(), 1);

    game.advance(Duration::from_millis(500));
    assert_eq!(game.state(), GameState::Picking);
    assert!(game.click_chest(1).is_ok());
    assert_eq!(game.opened_count(), 2);
}

#[test]
fn opened_chests_stay_disabled() {
    let game = scripted_game(GameOptions::default(), &draws_for(&[Outcome::Win]));
    game.press_play().unwrap();

    game.click_chest(2).unwrap();
    game.advance(ANIMATION);

    for chest in game.chests() {
        assert_eq!(chest.is_enabled(), chest.index() != 2);
    }
    assert_eq!(game.click_chest(2), Err(ClickError::AlreadyOpened));
    assert_eq!(game.click_chest(6), Err(ClickError::ChestNotFound));
    assert_eq!(game.opened_count(), 1);
}

#[test]
fn bonus_banner_hides_itself() {
    let game = scripted_game(GameOptions::default(), &draws_for(&[Outcome::Bonus]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    assert!(!game.display().is_banner_visible());

    game.advance(ANIMATION);
    let display = game.display();
    assert!(display.is_banner_visible());
    assert_eq!(display.banner_text(), "YOU WON THE BONUS - 200$!");

    game.advance(BANNER - Duration::from_millis(1));
    assert!(game.display().is_banner_visible());

    game.advance(Duration::from_millis(1));
    assert!(!game.display().is_banner_visible());
    assert_eq!(game.pending_continuations(), 0);
}

#[test]
fn banner_hide_runs_within_a_single_long_advance() {
    let game = scripted_game(GameOptions::default(), &draws_for(&[Outcome::Bonus]));
    game.press_play().unwrap();
    game.click_chest(0).unwrap();
    game.drain_events();

    assert_eq!(game.advance(Duration::from_secs(5)), 2);
    assert!(!game.display().is_banner_visible());

    let events = game.drain_events();
    let shown = events
        .iter()
        .position(|event| matches!(event, GameEvent::BonusBannerShown { .. }));
    let hidden = events
        .iter()
        .position(|event| matches!(event, GameEvent::BonusBannerHidden));
    assert!(shown.unwrap() < hidden.unwrap());
}

#[test]
fn newer_banner_is_not_hidden_by_older_timer() {
    let options = GameOptions::default()
        .with_animation_duration(Duration::from_millis(500))
        .with_bonus_banner_duration(BANNER);
    let game = scripted_game(options, &draws_for(&[Outcome::Bonus, Outcome::Bonus]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    game.advance(Duration::from_millis(500)); // first banner, hides at 2.5s
    game.click_chest(1).unwrap();
    game.advance(Duration::from_millis(500)); // second banner, hides at 3.0s

    game.advance(Duration::from_millis(1_600)); // 2.6s
    assert!(game.display().is_banner_visible());

    game.advance(Duration::from_millis(400)); // 3.0s
    assert!(!game.display().is_banner_visible());
}

#[test]
fn banner_outlives_round_restart() {
    let options = GameOptions::default().with_chest_count(1);
    let game = scripted_game(options, &draws_for(&[Outcome::Bonus]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    game.advance(ANIMATION);
    assert_eq!(game.state(), GameState::RoundOver);
    assert!(game.display().is_banner_visible());

    game.advance(Duration::from_secs(1));
    game.press_play().unwrap();
    assert_eq!(game.now(), ANIMATION + Duration::from_secs(1));
    assert!(game.display().is_banner_visible());
    assert_eq!(game.state(), GameState::Picking);
    assert_eq!(game.round_state().remaining(), 1);

    // The old banner's timer still fires, and only hides the banner.
    assert_eq!(game.advance(Duration::from_secs(1)), 1);
    assert_eq!(game.now(), ANIMATION + BANNER);
    assert!(!game.display().is_banner_visible());
    assert_eq!(game.state(), GameState::Picking);
    assert_eq!(game.opened_count(), 0);
    assert_eq!(game.score(), 0);
    assert_eq!(game.display().score_text(), "");
    assert!(game.chests().iter().all(Chest::is_enabled));
    assert!(!game.is_play_enabled());
}

#[test]
fn start_round_resets_from_any_state() {
    let game = scripted_game(
        GameOptions::default(),
        &draws_for(&[Outcome::Win, Outcome::Bonus]),
    );
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    game.advance(ANIMATION);
    game.click_chest(1).unwrap();
    assert_eq!(game.state(), GameState::Opening);

    game.start_round();
    assert_eq!(game.state(), GameState::Picking);
    assert_eq!(game.opened_count(), 0);
    assert_eq!(game.score(), 0);
    assert!(!game.is_play_enabled());
    assert_eq!(game.display().score_text(), "");
    for chest in game.chests() {
        assert!(!chest.is_opened());
        assert!(chest.is_enabled());
        assert_eq!(chest.outcome(), None);
    }

    game.start_round();
    assert_eq!(game.opened_count(), 0);
    assert!(game.chests().iter().all(Chest::is_enabled));
}

#[test]
fn continuation_from_previous_round_is_dropped() {
    let options = GameOptions::default().with_chest_count(2);
    let game = scripted_game(options, &draws_for(&[Outcome::Bonus, Outcome::Lost]));
    game.press_play().unwrap();

    game.click_chest(0).unwrap();
    let round = game.round_state().round;
    game.start_round();
    assert_eq!(game.round_state().round, round + 1);
    assert_eq!(game.pending_continuations(), 0);

    game.click_chest(1).unwrap();
    game.advance(ANIMATION);

    // The first round's bonus never reaches the screen.
    assert!(!game.display().is_banner_visible());
    assert_eq!(game.state(), GameState::Picking);
    assert_eq!(game.opened_count(), 1);
    assert!(game.chest(0).unwrap().is_enabled());
}

#[test]
fn play_trigger_is_locked_during_round() {
    let options = GameOptions::default().with_chest_count(1);
    let game = scripted_game(options, &draws_for(&[Outcome::Lost]));

    game.press_play().unwrap();
    assert_eq!(game.press_play(), Err(PlayError::Disabled));

    game.click_chest(0).unwrap();
    assert_eq!(game.press_play(), Err(PlayError::Disabled));

    game.advance(ANIMATION);
    assert_eq!(game.display().score_text(), "You won 0 $!");
    assert!(game.press_play().is_ok());
    assert_eq!(game.state(), GameState::Picking);
    assert_eq!(game.display().score_text(), "");
}

#[test]
fn click_emits_events_in_order() {
    let options = GameOptions::default().with_chest_count(2);
    let game = scripted_game(options, &draws_for(&[Outcome::Win]));

    game.press_play().unwrap();
    let events = game.drain_events();
    assert_eq!(events[0], GameEvent::RoundStarted { round: 1 });
    assert!(events.contains(&GameEvent::PlayDisabled));
    assert!(events.contains(&GameEvent::ChestEnabled { index: 0 }));
    assert!(events.contains(&GameEvent::ChestEnabled { index: 1 }));

    game.click_chest(1).unwrap();
    let events = game.drain_events();
    assert_eq!(events[0], GameEvent::ChestDisabled { index: 0 });
    assert_eq!(events[1], GameEvent::ChestDisabled { index: 1 });
    assert!(matches!(
        events[2],
        GameEvent::ChestOpened {
            index: 1,
            outcome: Outcome::Win,
            ..
        }
    ));

    game.advance(ANIMATION);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::ChestEnabled { index: 0 }]
    );
    assert!(game.drain_events().is_empty());
}

#[test]
fn seeded_games_are_reproducible() {
    let play = |seed| {
        let game = Game::new(GameOptions::default(), seed).unwrap();
        game.press_play().unwrap();
        let mut outcomes = Vec::new();
        for index in 0..6 {
            outcomes.push(game.click_chest(index).unwrap());
            game.advance(ANIMATION);
        }
        (outcomes, game.score())
    };

    assert_eq!(play(11), play(11));
}
