use std::collections::HashMap;
use std::io::{self, BufRead};

use thiserror::Error;

use crate::tokenizer::tokenize;

#[derive(Debug, Error)]
pub enum CountError {
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Case-folded word occurrence counts for one input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordCounts {
    counts: HashMap<String, u32>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every word of an in-memory text.
    pub fn from_text(text: &str) -> Self {
        let mut counts = Self::new();
        for line in text.lines() {
            counts.add_line(line);
        }
        counts
    }

    /// Adds the words of one line to the running counts.
    pub fn add_line(&mut self, line: &str) {
        for token in tokenize(line).filter(|t| t.is_word()) {
            *self.counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
        }
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrences.
    pub fn total_words(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }
}

/// Reads `reader` to the end and counts its words line by line.
///
/// On a read failure the partially built counts are dropped and the error is
/// returned with the 1-based number of the line that failed.
pub fn count_words<R: BufRead>(reader: R) -> Result<WordCounts, CountError> {
    let mut counts = WordCounts::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CountError::Read {
            line: idx + 1,
            source,
        })?;
        counts.add_line(&line);
    }
    Ok(counts)
}
