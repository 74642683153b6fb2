use std::io;

use rand::SeedableRng;
use rand::rngs::StdRng;

use memory_master::cli::parse_cli;
use memory_master::console::game_loop;
use memory_master::knowledge::{EMBEDDED_CATEGORIES, KnowledgeBase};
use memory_master::matching::{Exact, Fuzzy, Matcher};

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let kb = match &cli.knowledge_path {
        Some(path) => match KnowledgeBase::from_path(path) {
            Ok(kb) => kb,
            Err(e) => {
                eprintln!("Failed to load knowledge base from '{path}': {e}");
                return;
            }
        },
        None => match KnowledgeBase::from_csv_str(EMBEDDED_CATEGORIES) {
            Ok(kb) => kb,
            Err(e) => {
                eprintln!("Failed to load the embedded knowledge base: {e}");
                return;
            }
        },
    };
    if kb.is_empty() {
        eprintln!("The knowledge base has no categories. The game will not work.");
        return;
    }
    println!("Loaded {} categories.", kb.len());

    let matcher: &dyn Matcher = if cli.exact { &Exact } else { &Fuzzy };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    if let Err(e) = game_loop(&kb, matcher, &mut rng, stdin.lock()) {
        eprintln!("Input error: {e}");
    }
}
