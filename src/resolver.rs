//! Turn resolution: validate a player's repeated-and-extended chain,
//! decide acceptance, elimination, or game over, and grow the candidate
//! pool when a player introduces a word the category does not know.

use crate::matching::{
    DUPLICATE_THRESHOLD, Matcher, NOVELTY_THRESHOLD, PREFIX_THRESHOLD, best_match,
};
use crate::state::{GameState, Mode};

/// A player's raw input, parsed into the claimed word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnSubmission {
    pub words: Vec<String>,
}

impl TurnSubmission {
    /// Split a raw input line into claimed words: comma-separated when a
    /// comma is present, whitespace-separated otherwise. Items are
    /// trimmed but otherwise kept verbatim.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self { words: Vec::new() };
        }
        let words = if raw.contains(',') {
            raw.split(',').map(|item| item.trim().to_string()).collect()
        } else {
            raw.split_whitespace().map(str::to_string).collect()
        };
        Self { words }
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mistake {
    /// The submission did not contain exactly chain length + 1 words.
    WrongCount { expected: usize, got: usize },
    /// A repeated position did not match the chain closely enough.
    WrongWord { position: usize, expected: String, got: String },
    /// The new word is a near-duplicate of something already said.
    Duplicate { word: String, duplicate_of: String },
    /// A claimed word was empty.
    EmptyItem,
}

impl Mistake {
    /// Player-facing description of the mistake.
    #[must_use]
    pub fn message(&self, player: &str) -> String {
        match self {
            Mistake::WrongCount { .. } => {
                format!("{player} repeated the wrong number of items!")
            }
            Mistake::WrongWord { .. } => {
                format!("{player} made a mistake in the sequence!")
            }
            Mistake::Duplicate { word, duplicate_of } => {
                format!("'{word}' is a duplicate of '{duplicate_of}'!")
            }
            Mistake::EmptyItem => {
                format!("{player} submitted an empty item!")
            }
        }
    }
}

/// Result of resolving one submitted turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The chain grew by one word; in pass-and-play the turn has already
    /// advanced to the next active player.
    Accepted,
    /// The offender left a game of three or more humans; play continues.
    Eliminated {
        player: String,
        next_player: String,
        mistake: Mistake,
    },
    /// Terminal: the offender lost. `winner` is the surviving player,
    /// absent only for a degenerate roster. The chain is left unchanged
    /// for display; `attempted` is what the offender claimed.
    GameOver {
        loser: String,
        winner: Option<String>,
        mistake: Mistake,
        attempted: Vec<String>,
    },
}

/// Resolve one submitted turn against the game state.
///
/// On acceptance the chain becomes exactly the submitted list — the
/// player's spelling is kept verbatim, never corrected to the knowledge
/// base's — and an unrecognized new word is added to this game's
/// candidate pool so the computer can use it later.
pub fn resolve(
    state: &mut GameState,
    submission: &TurnSubmission,
    matcher: &dyn Matcher,
) -> TurnOutcome {
    let words = &submission.words;
    let expected = state.expected_len();

    if words.len() != expected {
        log::debug!("expected {} items, got {}", expected, words.len());
        return handle_mistake(
            state,
            Mistake::WrongCount {
                expected,
                got: words.len(),
            },
            words,
        );
    }

    if words.iter().any(String::is_empty) {
        return handle_mistake(state, Mistake::EmptyItem, words);
    }

    for (position, claimed) in words[..state.chain.len()].iter().enumerate() {
        let score = matcher.score(&state.chain[position], claimed);
        log::debug!(
            "position {position}: '{claimed}' vs '{}' scored {score}",
            state.chain[position]
        );
        if score < PREFIX_THRESHOLD {
            return handle_mistake(
                state,
                Mistake::WrongWord {
                    position,
                    expected: state.chain[position].clone(),
                    got: claimed.clone(),
                },
                words,
            );
        }
    }

    let new_word = &words[state.chain.len()];

    // Near-duplicates are rejected even though they were never literally
    // used, to block trivial rephrasings.
    if let Some((said, score)) = best_match(new_word, &state.chain) {
        if score >= DUPLICATE_THRESHOLD {
            let mistake = Mistake::Duplicate {
                word: new_word.clone(),
                duplicate_of: said.to_string(),
            };
            return handle_mistake(state, mistake, words);
        }
    }

    let recognized = best_match(new_word, &state.pool).map_or(0, |(_, score)| score);
    if recognized < NOVELTY_THRESHOLD {
        let learned = title_case(new_word);
        log::debug!("learning new word '{learned}' for category '{}'", state.category);
        state.pool.push(learned);
    }

    state.chain = words.clone();
    if state.mode == Mode::Human {
        state.advance_turn();
    }
    TurnOutcome::Accepted
}

/// Route a mistake to elimination (three or more humans) or game over
/// (two-player game, or any game against the computer).
fn handle_mistake(state: &mut GameState, mistake: Mistake, attempted: &[String]) -> TurnOutcome {
    if state.players.len() > 2 && state.mode == Mode::Human {
        let player = state.eliminate_current();
        log::debug!("{player} eliminated, {} players remain", state.players.len());
        return TurnOutcome::Eliminated {
            player,
            next_player: state.current_player().to_string(),
            mistake,
        };
    }

    state.finished = true;
    let loser = state.current_player().to_string();
    let winner_index = if state.current == 0 { 1 } else { 0 };
    let winner = state.players.get(winner_index).cloned();
    TurnOutcome::GameOver {
        loser,
        winner,
        mistake,
        attempted: attempted.to_vec(),
    }
}

/// Normalized form of a learned word: trimmed, each whitespace-separated
/// token capitalized.
fn title_case(word: &str) -> String {
    word.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
