//! CLI chest game example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use chestrs::{Chest, Game, GameEvent, GameOptions, GameState};

fn main() {
    println!("Chest game CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Invalid options: {err}");
            return;
        }
    };

    loop {
        let Some(input) = prompt_line("Press enter to play: ") else {
            break;
        };
        if matches!(input.as_str(), "q" | "quit") {
            break;
        }

        if let Err(err) = game.press_play() {
            println!("Play error: {err}");
            continue;
        }
        game.drain_events();

        while game.state() == GameState::Picking {
            print_chests(&game.chests());

            let count = game.options.chest_count;
            let left = game.round_state().remaining();
            let Some(pick) = prompt_usize(&format!("Open chest (1-{count}, {left} left): ")) else {
                return;
            };

            match game.click_chest(pick.wrapping_sub(1)) {
                Ok(outcome) => println!("Opening chest {pick}... {}", outcome.label()),
                Err(err) => {
                    println!("Ignored: {err}");
                    continue;
                }
            }

            thread::sleep(game.options.animation_duration);
            game.advance(game.options.animation_duration);
            report(&game.drain_events());
        }

        print_chests(&game.chests());
        println!("Round score: {}", game.score());
    }
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::BonusBannerShown { text } => println!("*** {text} ***"),
            GameEvent::ScoreChanged { text } if !text.is_empty() => println!("{text}"),
            _ => {}
        }
    }
}

fn print_chests(chests: &[Chest]) {
    let cells: Vec<String> = chests
        .iter()
        .map(|chest| {
            let number = chest.index() + 1;
            chest
                .label()
                .map_or_else(|| format!("[{number}]"), |label| format!("{number}:{label}"))
        })
        .collect();

    for row in cells.chunks(chestrs::chest::CHESTS_PER_ROW) {
        println!("  {}", row.join("  "));
    }
}

/// Reads one trimmed line; `None` once stdin is closed or unreadable.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
