//! The web variant's two operations, as pure library calls.
//!
//! An HTTP collaborator owns routing and the per-session store: it
//! deserializes a request, loads the `GameState` blob for the session,
//! calls `start_game` / `submit_turn`, stores the new state, and JSON-
//! encodes the reply. Configuration failures (`GameError`) map to its
//! 400-equivalent error responses; everything else is a normal reply
//! whose `status` tag matches the wire protocol.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::knowledge::KnowledgeBase;
use crate::matching::Matcher;
use crate::resolver::{TurnOutcome, TurnSubmission, resolve};
use crate::selector::{ComputerMove, select_move};
use crate::state::{GameState, Mode};

/// Seat name of the computer player.
pub const COMPUTER_NAME: &str = "Computer";

fn default_num_players() -> usize {
    2
}

/// Parameters of a new game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    pub category: String,
    pub mode: Mode,
    #[serde(default = "default_num_players")]
    pub num_players: usize,
}

/// Reply to a successful game start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartReply {
    pub status: String,
    pub first_player: String,
}

/// Reply to a submitted turn. Serializes with a `status` tag carrying
/// the wire statuses of the protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TurnReply {
    SuccessHumanPlayed {
        sequence: Vec<String>,
        next_player: String,
    },
    SuccessComputerPlayed {
        new_word_from_computer: String,
        sequence: Vec<String>,
        next_player: String,
    },
    PlayerEliminated {
        eliminated_player: String,
        next_player: String,
        sequence: Vec<String>,
    },
    GameOver {
        message: String,
        correct_sequence: Vec<String>,
        your_sequence: Vec<String>,
    },
    Win {
        message: String,
        sequence: Vec<String>,
    },
}

/// Start a new game of `request.category`, returning the initial state
/// (for the caller to persist) and the start reply.
pub fn start_game(kb: &KnowledgeBase, request: &StartRequest) -> Result<(GameState, StartReply)> {
    let category = request.category.trim().to_lowercase();
    let pool = kb
        .category(&category)
        .ok_or_else(|| GameError::UnknownCategory {
            name: category.clone(),
        })?
        .to_vec();

    let players: Vec<String> = match request.mode {
        Mode::Human => {
            if request.num_players < 2 {
                return Err(GameError::NotEnoughPlayers {
                    got: request.num_players,
                });
            }
            (1..=request.num_players)
                .map(|i| format!("Player {i}"))
                .collect()
        }
        Mode::VsComputer => vec!["Player 1".to_string(), COMPUTER_NAME.to_string()],
    };

    log::info!(
        "starting '{category}' game, mode {:?}, {} players",
        request.mode,
        players.len()
    );
    let state = GameState::new(category, pool, players, request.mode);
    let reply = StartReply {
        status: "success".to_string(),
        first_player: state.players[0].clone(),
    };
    Ok((state, reply))
}

/// Submit one turn's raw input for the current player and, against the
/// computer, let the computer answer in the same call.
pub fn submit_turn<R: Rng + ?Sized>(
    state: &mut GameState,
    raw_input: &str,
    matcher: &dyn Matcher,
    rng: &mut R,
) -> TurnReply {
    let submission = TurnSubmission::parse(raw_input);

    if state.finished {
        return TurnReply::GameOver {
            message: "The game is already over!".to_string(),
            correct_sequence: state.chain.clone(),
            your_sequence: submission.words,
        };
    }

    let player = state.current_player().to_string();
    match resolve(state, &submission, matcher) {
        TurnOutcome::Accepted => match state.mode {
            Mode::VsComputer => {
                let human_sequence = state.chain.clone();
                match select_move(&state.chain, &state.pool, rng) {
                    ComputerMove::Word(word) => {
                        state.chain.push(word.clone());
                        TurnReply::SuccessComputerPlayed {
                            new_word_from_computer: word,
                            sequence: human_sequence,
                            next_player: player,
                        }
                    }
                    ComputerMove::Exhausted => {
                        state.finished = true;
                        TurnReply::Win {
                            message: "The computer ran out of words! You are the Memory Master!"
                                .to_string(),
                            sequence: human_sequence,
                        }
                    }
                }
            }
            Mode::Human => TurnReply::SuccessHumanPlayed {
                sequence: state.chain.clone(),
                next_player: state.current_player().to_string(),
            },
        },
        TurnOutcome::Eliminated {
            player,
            next_player,
            mistake: _,
        } => TurnReply::PlayerEliminated {
            eliminated_player: player,
            next_player,
            sequence: state.chain.clone(),
        },
        TurnOutcome::GameOver {
            loser,
            winner,
            mistake,
            attempted,
        } => {
            let message = match winner {
                Some(winner) => format!("{} - {winner} wins!", mistake.message(&loser)),
                None => mistake.message(&loser),
            };
            TurnReply::GameOver {
                message,
                correct_sequence: state.chain.clone(),
                your_sequence: attempted,
            }
        }
    }
}
