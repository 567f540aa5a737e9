use std::io;

use console::Term;
use lotto_common::LottoError;
use tracing::warn;

use crate::terminal::print;

const MAX_ATTEMPTS: usize = 5;

/// Reads answers from the terminal, asking again while the input is invalid.
pub struct Prompter {
    term: Term,
}

impl Prompter {
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }

    pub fn ask<T, F>(&self, question: &str, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, LottoError>,
    {
        print::print_status(question);
        self.read_valid(&parse)
    }

    /// Asks once, then reads `count` answers.
    pub fn ask_many<T, F>(&self, question: &str, count: usize, parse: F) -> anyhow::Result<Vec<T>>
    where
        F: Fn(&str) -> Result<T, LottoError>,
    {
        if count == 0 {
            return Ok(Vec::new());
        }

        print::print_status(question);
        (0..count).map(|_| self.read_valid(&parse)).collect()
    }

    fn read_valid<T, F>(&self, parse: &F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, LottoError>,
    {
        read_valid_from(|| self.term.read_line(), parse)
    }
}

/// Pulls lines from `next_line` until one parses, giving up after `MAX_ATTEMPTS`.
fn read_valid_from<T, F, L>(mut next_line: L, parse: &F) -> anyhow::Result<T>
where
    F: Fn(&str) -> Result<T, LottoError>,
    L: FnMut() -> io::Result<String>,
{
    for _ in 0..MAX_ATTEMPTS {
        let line = next_line()?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => warn!("{e}, please try again"),
        }
    }
    anyhow::bail!("no valid input after {MAX_ATTEMPTS} attempts")
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lotto_common::lotto::number::LottoNumber;
    use std::str::FromStr;

    fn lines(input: &[&str]) -> impl FnMut() -> io::Result<String> {
        let mut queue: Vec<String> = input.iter().rev().map(|s| s.to_string()).collect();
        move || Ok(queue.pop().unwrap_or_default())
    }

    #[test]
    fn returns_first_valid_answer() {
        let number = read_valid_from(lines(&["7"]), &LottoNumber::from_str).unwrap();
        assert_eq!(number.value(), 7);
    }

    #[test]
    fn asks_again_after_invalid_answers() {
        let mut source = lines(&["abc", "0", "46", "12", "13"]);
        let number = read_valid_from(&mut source, &LottoNumber::from_str).unwrap();
        assert_eq!(number.value(), 12);

        // The line after the accepted one is left for the next question.
        assert_eq!(source().unwrap(), "13");
    }

    #[test]
    fn gives_up_after_max_attempts() {
        let answers = vec!["x"; MAX_ATTEMPTS];
        let result = read_valid_from(lines(&answers), &LottoNumber::from_str);
        assert!(result.is_err());

        let mut answers = vec!["x"; MAX_ATTEMPTS - 1];
        answers.push("5");
        let number = read_valid_from(lines(&answers), &LottoNumber::from_str).unwrap();
        assert_eq!(number.value(), 5);
    }

    #[test]
    fn closed_input_does_not_loop_forever() {
        assert!(read_valid_from(lines(&[]), &LottoNumber::from_str).is_err());
    }

    #[test]
    fn read_errors_propagate() {
        let failing = || -> io::Result<String> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        };
        assert!(read_valid_from(failing, &LottoNumber::from_str).is_err());
    }
}
