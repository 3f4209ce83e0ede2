/// Characters that separate words: whitespace plus the punctuation the cloud ignores.
pub const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', '\r', ',', '-', '.', '!', '?', '[', ']', '\'', ';', ':', '/', '(', ')',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

impl TokenKind {
    fn of(c: char) -> Self {
        if is_separator(c) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        }
    }
}

/// A maximal run of characters of one [`TokenKind`], borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Length in bytes; the amount to advance the scan position by.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Returns the word or separator run starting at byte offset `position`.
///
/// The run extends while characters stay in the same class as the one at
/// `position`, so the result is never empty and never straddles a word
/// boundary.
///
/// # Panics
///
/// Panics if `position` is past the end of `text` or not on a char boundary.
pub fn next_word_or_separator(text: &str, position: usize) -> Token<'_> {
    assert!(
        position < text.len(),
        "position {position} out of range for text of length {}",
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {position} is not on a char boundary"
    );

    let rest = &text[position..];
    let mut chars = rest.char_indices();
    // Non-empty by the range check above.
    let kind = chars
        .next()
        .map(|(_, c)| TokenKind::of(c))
        .unwrap_or(TokenKind::Word);
    let end = chars
        .find(|&(_, c)| TokenKind::of(c) != kind)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    Token {
        text: &rest[..end],
        kind,
    }
}

/// Iterates over consecutive tokens of `line` from the start.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens { line, position: 0 }
}

#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    line: &'a str,
    position: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.line.len() {
            return None;
        }
        let token = next_word_or_separator(self.line, self.position);
        self.position += token.len();
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::{next_word_or_separator, tokenize, TokenKind};

    #[test]
    fn word_run_stops_at_first_separator() {
        let token = next_word_or_separator("hello, world", 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.kind, TokenKind::Word);
    }

    #[test]
    fn separator_run_is_maximal() {
        let token = next_word_or_separator("hello, -- world", 5);
        assert_eq!(token.text, ", -- ");
        assert_eq!(token.kind, TokenKind::Separator);
    }

    #[test]
    fn run_reaching_end_of_text_is_returned_whole() {
        let token = next_word_or_separator("end of line", 7);
        assert_eq!(token.text, "line");
    }

    #[test]
    fn multibyte_words_are_kept_intact() {
        let tokens: Vec<_> = tokenize("café—crème").map(|t| t.text).collect();
        // The em dash is not a separator.
        assert_eq!(tokens, vec!["café—crème"]);
    }

    #[test]
    fn apostrophes_split_contractions() {
        let words: Vec<_> = tokenize("don't")
            .filter(|t| t.is_word())
            .map(|t| t.text)
            .collect();
        assert_eq!(words, vec!["don", "t"]);
    }

    #[test]
    #[should_panic]
    fn position_past_end_panics() {
        next_word_or_separator("abc", 3);
    }
}
