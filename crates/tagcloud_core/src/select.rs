use std::cmp::Ordering;

use thiserror::Error;

use crate::counter::WordCounts;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub count: u32,
}

impl Entry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("cannot select {requested} words, input has {available} distinct words")]
    InvalidCount { requested: usize, available: usize },
}

/// The top entries of a count, in display (alphabetical) order.
///
/// `max_count` and `min_count` are the extreme counts of the chosen entries;
/// both are 0 for an empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    entries: Vec<Entry>,
    max_count: u32,
    min_count: u32,
}

impl Selection {
    /// Puts `entries` in display order; their input order does not matter.
    pub fn new(mut entries: Vec<Entry>) -> Self {
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        let min_count = entries.iter().map(|e| e.count).min().unwrap_or(0);
        entries.sort_by(by_word_ignore_case);
        Self {
            entries,
            max_count,
            min_count,
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    pub fn min_count(&self) -> u32 {
        self.min_count
    }
}

/// Picks the `n` most frequent words and returns them alphabetically.
///
/// Equal counts are ranked alphabetically, so the cut at `n` is deterministic.
pub fn select_top(counts: &WordCounts, n: usize) -> Result<Selection, SelectionError> {
    if n > counts.len() {
        return Err(SelectionError::InvalidCount {
            requested: n,
            available: counts.len(),
        });
    }

    let mut ranked: Vec<Entry> = counts
        .iter()
        .map(|(word, count)| Entry::new(word, count))
        .collect();
    ranked.sort_by(by_count_desc);
    ranked.truncate(n);

    Ok(Selection::new(ranked))
}

/// Count descending, then word ascending.
pub fn by_count_desc(a: &Entry, b: &Entry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| by_word_ignore_case(a, b))
}

/// Case-insensitive word order; exact byte order breaks ties between case variants.
pub fn by_word_ignore_case(a: &Entry, b: &Entry) -> Ordering {
    a.word
        .to_lowercase()
        .cmp(&b.word.to_lowercase())
        .then_with(|| a.word.cmp(&b.word))
}
