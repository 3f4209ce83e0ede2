use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::bail;

/// Line-oriented questions on a reader/writer pair (stdin/stdout in the binary).
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks `question` and returns the trimmed answer. End of input is an error.
    pub fn ask_line(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(answer.trim().to_string())
    }

    /// Asks until a non-empty path is given.
    pub fn ask_path(&mut self, question: &str) -> io::Result<PathBuf> {
        loop {
            let answer = self.ask_line(question)?;
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
        }
    }

    /// Asks until the answer is a whole number in `0..=available`.
    pub fn ask_count(&mut self, available: usize) -> io::Result<usize> {
        let question = format!(
            "Enter a number of words to include in the tag cloud (0 to {available}): "
        );
        loop {
            let answer = self.ask_line(&question)?;
            match answer.parse::<usize>() {
                Ok(n) if n <= available => return Ok(n),
                _ => writeln!(self.output, "Please enter a whole number from 0 to {available}.")?,
            }
        }
    }
}

/// Uses the count given on the command line, or asks for one.
///
/// A given count above `available` is rejected rather than re-asked, since
/// the caller chose not to run interactively.
pub fn resolve_count<R: BufRead, W: Write>(
    requested: Option<usize>,
    available: usize,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<usize> {
    match requested {
        Some(n) if n > available => {
            bail!("requested {n} words but the input has only {available} distinct words")
        }
        Some(n) => Ok(n),
        None => Ok(prompter.ask_count(available)?),
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::{resolve_count, Prompter};

    fn prompter(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn count_reprompts_until_in_range() {
        let mut p = prompter("-1\nten\n12\n  3 \n");
        assert_eq!(p.ask_count(5).unwrap(), 3);

        let transcript = String::from_utf8(p.output).unwrap();
        assert_eq!(transcript.matches("(0 to 5)").count(), 4);
        assert_eq!(transcript.matches("Please enter").count(), 3);
    }

    #[test]
    fn zero_and_upper_bound_are_accepted() {
        assert_eq!(prompter("0\n").ask_count(0).unwrap(), 0);
        assert_eq!(prompter("7\n").ask_count(7).unwrap(), 7);
    }

    #[test]
    fn blank_paths_are_asked_again() {
        let mut p = prompter("\n   \nbooks/moby.txt\n");
        let path = p.ask_path("Enter an input file: ").unwrap();
        assert_eq!(path, std::path::PathBuf::from("books/moby.txt"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = prompter("abc\n").ask_count(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn given_count_above_available_is_rejected() {
        let mut p = prompter("");
        let err = resolve_count(Some(6), 5, &mut p).unwrap_err();
        assert!(err.to_string().contains("only 5 distinct words"));
        assert!(p.output.is_empty());
    }

    #[test]
    fn given_count_up_to_available_is_used_without_asking() {
        let mut p = prompter("");
        assert_eq!(resolve_count(Some(5), 5, &mut p).unwrap(), 5);
        assert_eq!(resolve_count(Some(0), 5, &mut p).unwrap(), 0);
        assert!(p.output.is_empty());
    }

    #[test]
    fn missing_count_is_asked_for() {
        let mut p = prompter("9\n4\n");
        assert_eq!(resolve_count(None, 5, &mut p).unwrap(), 4);
        let transcript = String::from_utf8(p.output).unwrap();
        assert_eq!(transcript.matches("(0 to 5)").count(), 2);
    }
}
