// Library interface for memory-master
// This allows integration tests to access internal modules

pub mod cli;
pub mod console;
pub mod error;
pub mod knowledge;
pub mod matching;
pub mod resolver;
pub mod selector;
pub mod session;
pub mod state;

// Re-export commonly used items for easier testing
pub use console::game_loop;
pub use error::{GameError, Result};
pub use knowledge::{EMBEDDED_CATEGORIES, KnowledgeBase};
pub use matching::{
    DUPLICATE_THRESHOLD, Exact, Fuzzy, Matcher, NOVELTY_THRESHOLD, PREFIX_THRESHOLD, best_match,
    ratio,
};
pub use resolver::{Mistake, TurnOutcome, TurnSubmission, resolve};
pub use selector::{ComputerMove, select_move};
pub use session::{
    COMPUTER_NAME, StartReply, StartRequest, TurnReply, start_game, submit_turn,
};
pub use state::{GameState, Mode};
