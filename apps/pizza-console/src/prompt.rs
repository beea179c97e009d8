//! # Prompt
//!
//! Line-oriented console I/O for the shell.
//!
//! Generic over `BufRead`/`Write` so tests can drive it with a `Cursor`
//! and capture output in a `Vec<u8>`.
//!
//! ## Input Rules
//! - A line longer than [`MAX_INPUT_LENGTH`] characters is rejected
//!   without buffering the rest of it
//! - End-of-input yields [`AppError::InputTerminated`]
//! - Numeric prompts re-ask until the answer is an integer in range

use std::io::{BufRead, Read, Write};

use crate::error::{AppError, AppResult};

/// Maximum characters accepted on one input line.
pub const MAX_INPUT_LENGTH: usize = 1000;

// Enough bytes for MAX_INPUT_LENGTH four-byte characters plus "\r\n".
const MAX_LINE_BYTES: u64 = (MAX_INPUT_LENGTH * 4 + 2) as u64;

/// Reads answers from `input` and writes prompts to `output`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// The trailing line ending is stripped; other whitespace is kept.
    pub fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        let read = self
            .input
            .by_ref()
            .take(MAX_LINE_BYTES)
            .read_until(b'\n', &mut buf)?;

        if read == 0 {
            return Err(AppError::InputTerminated);
        }

        let complete = buf.last() == Some(&b'\n');
        if !complete && read as u64 == MAX_LINE_BYTES {
            self.discard_rest_of_line()?;
            return Err(AppError::InputTooLong {
                max: MAX_INPUT_LENGTH,
            });
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if line.chars().count() > MAX_INPUT_LENGTH {
            return Err(AppError::InputTooLong {
                max: MAX_INPUT_LENGTH,
            });
        }

        Ok(line.to_string())
    }

    /// Asks until the answer is an integer within `min..=max`.
    ///
    /// ## User Workflow
    /// ```text
    /// Choose an option (1-3): abc
    /// Invalid input. Please enter a number between 1 and 3.
    /// Choose an option (1-3): 7
    /// Invalid input. Please enter a number between 1 and 3.
    /// Choose an option (1-3): 2      → Ok(2)
    /// ```
    pub fn choice(&mut self, prompt: &str, min: i64, max: i64) -> AppResult<i64> {
        loop {
            match self.read_line(prompt) {
                Ok(text) => {
                    if let Ok(value) = text.trim().parse::<i64>() {
                        if (min..=max).contains(&value) {
                            return Ok(value);
                        }
                    }
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(_) => {}
            }
            self.say(format!(
                "Invalid input. Please enter a number between {min} and {max}."
            ))?;
        }
    }

    /// Returns the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn discard_rest_of_line(&mut self) -> AppResult<()> {
        let mut scratch = Vec::new();
        loop {
            scratch.clear();
            let read = self
                .input
                .by_ref()
                .take(MAX_LINE_BYTES)
                .read_until(b'\n', &mut scratch)?;
            if read == 0 || scratch.last() == Some(&b'\n') {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompter: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompter.into_inner().1).unwrap()
    }

    #[test]
    fn test_read_line_strips_line_ending() {
        let mut p = prompter("Margherita\r\nnext\n");
        assert_eq!(p.read_line("Name: ").unwrap(), "Margherita");
        assert_eq!(p.read_line("Name: ").unwrap(), "next");
        assert_eq!(output(p), "Name: Name: ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut p = prompter("3");
        assert_eq!(p.read_line("").unwrap(), "3");
        assert!(matches!(p.read_line(""), Err(AppError::InputTerminated)));
    }

    #[test]
    fn test_eof_is_terminated() {
        let mut p = prompter("");
        assert!(matches!(p.read_line("> "), Err(AppError::InputTerminated)));
    }

    #[test]
    fn test_length_cap() {
        let ok = "a".repeat(MAX_INPUT_LENGTH);
        let too_long = "a".repeat(MAX_INPUT_LENGTH + 1);
        let mut p = prompter(&format!("{ok}\n{too_long}\nafter\n"));

        assert_eq!(p.read_line("").unwrap().len(), MAX_INPUT_LENGTH);
        assert!(matches!(
            p.read_line(""),
            Err(AppError::InputTooLong { max: 1000 })
        ));
        assert_eq!(p.read_line("").unwrap(), "after");
    }

    #[test]
    fn test_huge_line_is_discarded() {
        let huge = "9".repeat(50_000);
        let mut p = prompter(&format!("{huge}\n2\n"));

        assert!(matches!(p.read_line(""), Err(AppError::InputTooLong { .. })));
        assert_eq!(p.read_line("").unwrap(), "2");
    }

    #[test]
    fn test_choice_reprompts() {
        let mut p = prompter("abc\n7\n\n 2 \n");
        assert_eq!(p.choice("Pick (1-3): ", 1, 3).unwrap(), 2);

        let out = output(p);
        assert_eq!(
            out.matches("Invalid input. Please enter a number between 1 and 3.")
                .count(),
            3
        );
    }

    #[test]
    fn test_choice_eof() {
        let mut p = prompter("x\n");
        assert!(matches!(
            p.choice("Pick: ", 0, 1),
            Err(AppError::InputTerminated)
        ));
    }
}
