//! Knowledge base: named categories mapped to their ordered candidate
//! words, loaded from a two-column CSV file (category, comma-separated
//! items).

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{GameError, Result};

pub const EMBEDDED_CATEGORIES: &str = include_str!("resources/categories.csv");

/// Category name (lowercased) to ordered candidate words.
///
/// Immutable after load; each game copies its category's words into the
/// game state, where the copy may grow as players introduce novel words.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    categories: BTreeMap<String, Vec<String>>,
}

impl KnowledgeBase {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    pub fn from_csv_str(data: &str) -> Result<Self> {
        Self::from_reader(data.as_bytes())
    }

    /// Parse the two-column CSV format. The first row is a header; each
    /// data row holds a category name and one quoted field of
    /// comma-separated items.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut categories = BTreeMap::new();
        for (i, record) in csv_reader.records().enumerate() {
            let record = record?;
            let row = i + 2; // header occupies row 1
            let Some(name) = record.get(0) else {
                continue;
            };
            let name = name.trim().to_lowercase();
            if name.is_empty() {
                continue;
            }
            let items = record
                .get(1)
                .ok_or(GameError::MissingItems { row })?;
            let words: Vec<String> = items
                .split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect();
            if words.is_empty() {
                return Err(GameError::EmptyCategory {
                    row,
                    category: name,
                });
            }
            log::debug!("loaded category '{}' with {} words", name, words.len());
            categories.insert(name, words);
        }
        Ok(Self { categories })
    }

    /// Candidate words for `name`, looked up case-insensitively.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories
            .get(&name.trim().to_lowercase())
            .map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
