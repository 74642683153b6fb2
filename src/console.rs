//! Line-oriented console front end: prompts for the game setup, then
//! plays turns until someone wins. Reads from any `BufRead` so whole
//! sessions can be driven from test scripts.

use std::io::{self, BufRead};

use rand::Rng;

use crate::knowledge::KnowledgeBase;
use crate::matching::Matcher;
use crate::session::{self, StartRequest, TurnReply};
use crate::state::Mode;

/// Run one interactive session: setup prompts, then the turn loop.
///
/// An unknown category aborts the session. Typing `exit` (or reaching
/// end of input) quits mid-game.
pub fn game_loop<R: BufRead, G: Rng>(
    kb: &KnowledgeBase,
    matcher: &dyn Matcher,
    rng: &mut G,
    mut reader: R,
) -> io::Result<()> {
    println!("Welcome to Memory Master!");
    println!("Repeat the growing chain of words, then add one of your own.");

    let Some(category) = read_category(kb, &mut reader)? else {
        println!("Exiting.");
        return Ok(());
    };
    if kb.category(&category).is_none() {
        println!("Unknown category '{category}'. Session aborted.");
        return Ok(());
    }
    let Some(mode) = read_mode(&mut reader)? else {
        println!("Exiting.");
        return Ok(());
    };

    let num_players = match mode {
        Mode::Human => match read_player_count(&mut reader)? {
            Some(count) => count,
            None => {
                println!("Exiting.");
                return Ok(());
            }
        },
        Mode::VsComputer => 2,
    };

    let request = StartRequest {
        category,
        mode,
        num_players,
    };
    let (mut state, _reply) = match session::start_game(kb, &request) {
        Ok(started) => started,
        Err(err) => {
            println!("{err}. Session aborted.");
            return Ok(());
        }
    };

    if mode == Mode::Human {
        let Some(names) = read_player_names(&mut reader, num_players)? else {
            println!("Exiting.");
            return Ok(());
        };
        state.players = names;
    }

    println!("\nThe chain starts empty. First up: {}.", state.current_player());

    while !state.finished {
        let current = state.current_player().to_string();
        println!(
            "\n{current}, repeat the chain and add one word ({} item(s), separated by commas):",
            state.expected_len()
        );
        let Some(line) = read_line(&mut reader)? else {
            println!("Exiting.");
            return Ok(());
        };
        if line.eq_ignore_ascii_case("exit") {
            println!("Exiting.");
            return Ok(());
        }

        log::debug!("{current} submitted '{line}'");
        match session::submit_turn(&mut state, &line, matcher, rng) {
            TurnReply::SuccessHumanPlayed {
                sequence,
                next_player,
            } => {
                println!("Accepted! The chain is: {}", sequence.join(", "));
                println!("Next up: {next_player}.");
            }
            TurnReply::SuccessComputerPlayed {
                new_word_from_computer,
                sequence,
                ..
            } => {
                println!("Accepted! The chain is: {}", sequence.join(", "));
                println!(
                    "The computer adds '{new_word_from_computer}'. {} item(s) to remember now.",
                    sequence.len() + 1
                );
            }
            TurnReply::PlayerEliminated {
                eliminated_player,
                next_player,
                sequence,
            } => {
                println!("{eliminated_player} is out of the game!");
                println!("The chain stays: {}", sequence.join(", "));
                println!("Next up: {next_player}.");
            }
            TurnReply::GameOver {
                message,
                correct_sequence,
                your_sequence,
            } => {
                println!("{message}");
                println!("The chain was: {}", correct_sequence.join(", "));
                println!("You said: {}", your_sequence.join(", "));
            }
            TurnReply::Win { message, sequence } => {
                println!("{message}");
                println!("Final chain: {}", sequence.join(", "));
            }
        }
    }

    println!("\nThanks for playing!");
    Ok(())
}

/// One trimmed input line, or `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

fn read_category<R: BufRead>(kb: &KnowledgeBase, reader: &mut R) -> io::Result<Option<String>> {
    println!("\nAvailable categories:");
    for name in kb.names() {
        println!("  - {name}");
    }
    println!("Choose a category:");
    Ok(read_line(reader)?.map(|input| input.to_lowercase()))
}

fn read_mode<R: BufRead>(reader: &mut R) -> io::Result<Option<Mode>> {
    loop {
        println!("Play with (1) other humans or (2) against the computer? [1/2]:");
        let Some(input) = read_line(reader)? else {
            return Ok(None);
        };
        match input.as_str() {
            "1" => return Ok(Some(Mode::Human)),
            "2" => return Ok(Some(Mode::VsComputer)),
            _ => println!("Please answer 1 or 2."),
        }
    }
}

fn read_player_count<R: BufRead>(reader: &mut R) -> io::Result<Option<usize>> {
    loop {
        println!("How many players? (2 or more):");
        let Some(input) = read_line(reader)? else {
            return Ok(None);
        };
        match input.parse::<usize>() {
            Ok(count) if count >= 2 => return Ok(Some(count)),
            _ => println!("Please enter a number of at least 2."),
        }
    }
}

fn read_player_names<R: BufRead>(
    reader: &mut R,
    count: usize,
) -> io::Result<Option<Vec<String>>> {
    let mut names = Vec::with_capacity(count);
    for i in 1..=count {
        println!("Name for player {i} (press Enter for 'Player {i}'):");
        let Some(input) = read_line(reader)? else {
            return Ok(None);
        };
        if input.is_empty() {
            names.push(format!("Player {i}"));
        } else {
            names.push(input);
        }
    }
    Ok(Some(names))
}
