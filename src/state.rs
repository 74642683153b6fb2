//! Per-game state: the chain of accepted words, the candidate pool, and
//! the active player roster. Serializable so a web front end can park it
//! in a session store between turns.

use serde::{Deserialize, Serialize};

/// How the game is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Pass-and-play between two or more humans.
    Human,
    /// One human against the computer.
    VsComputer,
}

/// The whole state of one game.
///
/// Everything a turn needs is carried here explicitly; nothing lives in
/// process-wide globals, so any number of games can share a process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Lowercased category name this game draws from.
    pub category: String,
    /// Ordered words accepted so far.
    pub chain: Vec<String>,
    /// This game's copy of the category's candidate words. Grows
    /// (append-only) when players introduce words the category does not
    /// recognize.
    pub pool: Vec<String>,
    /// Still-active players, in seating order.
    pub players: Vec<String>,
    /// Index into `players` of whoever acts next.
    pub current: usize,
    pub mode: Mode,
    /// Set once the game reaches a terminal outcome.
    pub finished: bool,
}

impl GameState {
    #[must_use]
    pub fn new(category: String, pool: Vec<String>, players: Vec<String>, mode: Mode) -> Self {
        Self {
            category,
            chain: Vec::new(),
            pool,
            players,
            current: 0,
            mode,
            finished: false,
        }
    }

    /// Name of the player who acts next.
    #[must_use]
    pub fn current_player(&self) -> &str {
        &self.players[self.current]
    }

    /// Number of words the next submission must contain.
    #[must_use]
    pub fn expected_len(&self) -> usize {
        self.chain.len() + 1
    }

    /// Pass the turn to the next active player in seating order.
    pub fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }

    /// Remove the current player from the roster and renormalize the
    /// turn pointer. Returns the removed player's name.
    pub fn eliminate_current(&mut self) -> String {
        let eliminated = self.players.remove(self.current);
        self.current = renormalize_index(self.current, self.players.len());
        eliminated
    }
}

/// Where the turn pointer lands after the slot at `removed` is vacated:
/// the same index now names the next player in seating order, except
/// that removing the last slot wraps back to the first player.
#[must_use]
pub(crate) fn renormalize_index(removed: usize, remaining: usize) -> usize {
    if removed >= remaining { 0 } else { removed }
}
