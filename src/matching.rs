//! String-similarity scoring used by the turn resolver and the computer
//! player. Scores are normalized edit-distance ratios on a 0-100 scale,
//! computed over trimmed, lowercased input.

use strsim::normalized_damerau_levenshtein;

/// A repeated chain word is accepted when it scores at least this much
/// against the original.
pub const PREFIX_THRESHOLD: u8 = 75;

/// A new word scoring at least this much against anything already in the
/// chain counts as a near-duplicate.
pub const DUPLICATE_THRESHOLD: u8 = 90;

/// A new word scoring below this against the candidate pool is unknown to
/// the category and gets remembered for the computer player.
pub const NOVELTY_THRESHOLD: u8 = 75;

/// Similarity policy for comparing a repeated word against the chain.
///
/// The resolver is generic over this seam so the fuzzy and exact-match
/// game variants share one implementation.
pub trait Matcher {
    /// Similarity between two words on a 0-100 scale.
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Edit-distance similarity. Tolerates nicknames and typos.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fuzzy;

impl Matcher for Fuzzy {
    fn score(&self, a: &str, b: &str) -> u8 {
        ratio(a, b)
    }
}

/// Case-insensitive equality. All-or-nothing scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl Matcher for Exact {
    fn score(&self, a: &str, b: &str) -> u8 {
        if a.trim().to_lowercase() == b.trim().to_lowercase() {
            100
        } else {
            0
        }
    }
}

/// Normalized edit-distance similarity of two words, 0-100.
///
/// Damerau-Levenshtein, so a transposed pair of letters costs one edit.
#[must_use]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    (normalized_damerau_levenshtein(&a, &b) * 100.0).round() as u8
}

/// Best fuzzy match for `query` within `pool`, with its score.
///
/// Returns `None` only when the pool is empty. Earlier entries win ties.
#[must_use]
pub fn best_match<'a>(query: &str, pool: &'a [String]) -> Option<(&'a str, u8)> {
    let mut best: Option<(&'a str, u8)> = None;
    for word in pool {
        let score = ratio(query, word);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((word.as_str(), score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ratio_identical_words() {
        assert_eq!(ratio("Messi", "Messi"), 100);
        assert_eq!(ratio("Messi", "messi"), 100);
        assert_eq!(ratio("  Messi ", "messi"), 100);
    }

    #[test]
    fn test_ratio_close_words_pass_prefix_threshold() {
        // Typos and near-spellings stay above 75
        assert!(ratio("Ronaldo", "Ronadlo") >= PREFIX_THRESHOLD);
        assert!(ratio("Federer", "federer") >= PREFIX_THRESHOLD);
        assert!(ratio("Serena Williams", "serena williams") >= PREFIX_THRESHOLD);
    }

    #[test]
    fn test_ratio_unrelated_words_fail_prefix_threshold() {
        assert!(ratio("Messi", "Federer") < PREFIX_THRESHOLD);
        assert!(ratio("Inception", "Titanic") < PREFIX_THRESHOLD);
    }

    #[test]
    fn test_ratio_near_duplicate_threshold() {
        assert!(ratio("Messi", "Messi") >= DUPLICATE_THRESHOLD);
        assert!(ratio("Ronaldo", "ronaldo ") >= DUPLICATE_THRESHOLD);
        // One letter off in a long word is still a near-duplicate
        assert!(ratio("Cristiano Ronaldo", "Cristiano Ronaldos") >= DUPLICATE_THRESHOLD);
        // Short distinct words are not
        assert!(ratio("Lion", "Bison") < DUPLICATE_THRESHOLD);
    }

    #[test]
    fn test_exact_matcher_all_or_nothing() {
        let m = Exact;
        assert_eq!(m.score("Messi", "MESSI"), 100);
        assert_eq!(m.score("Messi", "Mesi"), 0);
        assert_eq!(m.score("Messi", "Ronaldo"), 0);
    }

    #[test]
    fn test_fuzzy_matcher_uses_ratio() {
        let m = Fuzzy;
        assert_eq!(m.score("Messi", "messi"), ratio("Messi", "messi"));
        assert!(m.score("Ronaldo", "Ronadlo") >= PREFIX_THRESHOLD);
    }

    #[test]
    fn test_best_match_picks_highest_score() {
        let pool = vec![
            "Messi".to_string(),
            "Ronaldo".to_string(),
            "Federer".to_string(),
        ];
        let (word, score) = best_match("ronaldo", &pool).unwrap();
        assert_eq!(word, "Ronaldo");
        assert_eq!(score, 100);
    }

    #[test]
    fn test_best_match_empty_pool() {
        assert_eq!(best_match("Messi", &[]), None);
    }

    #[test]
    fn test_best_match_prefers_earlier_entry_on_tie() {
        // Both spellings score 100 after lowercasing; the first wins
        let pool = vec!["Aaaa".to_string(), "aaaa".to_string()];
        let (word, score) = best_match("aaaa", &pool).unwrap();
        assert_eq!(score, 100);
        assert_eq!(word, "Aaaa");
    }

    proptest! {
        #[test]
        fn prop_ratio_self_is_100(word in "[a-zA-Z ]{1,20}") {
            prop_assert_eq!(ratio(&word, &word), 100);
        }

        #[test]
        fn prop_ratio_symmetric(a in "[a-zA-Z]{1,12}", b in "[a-zA-Z]{1,12}") {
            prop_assert_eq!(ratio(&a, &b), ratio(&b, &a));
        }

        #[test]
        fn prop_ratio_bounded(a in "[a-zA-Z]{0,12}", b in "[a-zA-Z]{0,12}") {
            prop_assert!(ratio(&a, &b) <= 100);
        }
    }
}
