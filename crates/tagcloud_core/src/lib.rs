//! Tag cloud core: pure tokenizing, counting, selection and font mapping.
mod cloud;
mod counter;
mod font;
mod select;
mod tokenizer;

pub use cloud::{build_tag_cloud, CloudWord, TagCloud};
pub use counter::{count_words, CountError, WordCounts};
pub use font::{font_size, map_fonts, FontAssignment, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use select::{
    by_count_desc, by_word_ignore_case, select_top, Entry, Selection, SelectionError,
};
pub use tokenizer::{
    is_separator, next_word_or_separator, tokenize, Token, TokenKind, Tokens, SEPARATORS,
};
