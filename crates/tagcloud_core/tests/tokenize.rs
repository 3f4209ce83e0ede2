use tagcloud_core::{is_separator, next_word_or_separator, tokenize, TokenKind, SEPARATORS};

const LINES: &[&str] = &[
    "The quick brown fox -- jumped; over (the) lazy dog!",
    "   leading and trailing   ",
    "[bracketed]/slashed:colon's",
    "x",
    ",.!?",
    "tabs\tand\r\ncarriage returns",
    "naïve façade, déjà vu",
];

#[test]
fn tokens_reassemble_the_line_exactly() {
    for line in LINES {
        let rebuilt: String = tokenize(line).map(|t| t.text).collect();
        assert_eq!(&rebuilt, line);
    }
}

#[test]
fn every_token_is_homogeneous_and_non_empty() {
    for line in LINES {
        for token in tokenize(line) {
            assert!(!token.is_empty());
            let expect_sep = token.kind == TokenKind::Separator;
            assert!(
                token.text.chars().all(|c| is_separator(c) == expect_sep),
                "mixed token {:?} in {:?}",
                token.text,
                line
            );
        }
    }
}

#[test]
fn adjacent_tokens_alternate_kind() {
    for line in LINES {
        let kinds: Vec<_> = tokenize(line).map(|t| t.kind).collect();
        assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]));
    }
}

#[test]
fn manual_stepping_matches_iterator() {
    let line = LINES[0];
    let mut position = 0;
    let mut stepped = Vec::new();
    while position < line.len() {
        let token = next_word_or_separator(line, position);
        position += token.len();
        stepped.push(token);
    }
    assert_eq!(stepped, tokenize(line).collect::<Vec<_>>());
}

#[test]
fn every_listed_separator_is_recognized() {
    for &c in SEPARATORS {
        let text = c.to_string();
        assert_eq!(next_word_or_separator(&text, 0).kind, TokenKind::Separator);
    }
    for c in ['a', 'Z', '0', '_', '"', '<', '&', 'é'] {
        assert!(!is_separator(c), "{c:?} should be part of words");
    }
}

#[test]
fn empty_line_yields_no_tokens() {
    assert_eq!(tokenize("").count(), 0);
}

#[test]
fn tokens_from_any_char_boundary_are_homogeneous_and_maximal() {
    for line in LINES {
        for (position, first) in line.char_indices() {
            let token = next_word_or_separator(line, position);
            let kind = if is_separator(first) {
                TokenKind::Separator
            } else {
                TokenKind::Word
            };
            assert_eq!(token.kind, kind);
            let expect_sep = kind == TokenKind::Separator;
            assert!(token.text.chars().all(|c| is_separator(c) == expect_sep));
            assert_eq!(token.text, &line[position..position + token.len()]);

            // The next character, if any, belongs to the other class.
            if let Some(next) = line[position + token.len()..].chars().next() {
                assert_ne!(
                    is_separator(next),
                    expect_sep,
                    "token {:?} at {} in {:?} stopped early",
                    token.text,
                    position,
                    line
                );
            }
        }
    }
}
