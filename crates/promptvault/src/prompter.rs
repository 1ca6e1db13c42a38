//! Line-based interactive questions

use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Asks questions on `output` and reads one answer line each from `input`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a question and return the trimmed answer
    ///
    /// # Errors
    ///
    /// Fails if input ends before an answer is given.
    pub fn ask(&mut self, label: &str) -> Result<String> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("Input ended while waiting for: {}", label);
        }
        Ok(line.trim().to_string())
    }

    /// Ask a question; an empty answer selects `default`
    pub fn ask_with_default(&mut self, label: &str, default: &str) -> Result<String> {
        let answer = self.ask(&format!("{} (default: {})", label, default))?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Pick an existing category by number, or name a new one
    ///
    /// The entry after the last category asks for a new name. A non-numeric
    /// answer is taken as the category name directly.
    pub fn choose_category(&mut self, categories: &[String]) -> Result<String> {
        writeln!(self.output, "\n{} Select category or create new:", "→".cyan())?;
        for (i, category) in categories.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, category)?;
        }
        let create_new = categories.len() + 1;
        writeln!(self.output, "  {}. Create new category", create_new)?;

        let choice = self.ask("\nEnter choice (number)")?;
        match choice.parse::<usize>() {
            Ok(n) if n == create_new => self.ask("New category name"),
            Ok(n) if (1..create_new).contains(&n) => Ok(categories[n - 1].clone()),
            Ok(_) => bail!("Invalid choice: {}", choice),
            Err(_) if choice.is_empty() => bail!("No category selected"),
            Err(_) => Ok(choice),
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

    fn categories() -> Vec<String> {
        vec!["coding".to_string(), "writing".to_string()]
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  Friendly  \n");
        assert_eq!(p.ask("Tone").unwrap(), "Friendly");
        assert_eq!(String::from_utf8(p.output).unwrap(), "Tone: ");
    }

    #[test]
    fn test_ask_fails_on_end_of_input() {
        let mut p = prompter("");
        let err = p.ask("Tone").unwrap_err();
        assert!(err.to_string().contains("Tone"));
    }

    #[test]
    fn test_ask_with_default_on_empty_answer() {
        let mut p = prompter("\n2.0.0\n");
        assert_eq!(p.ask_with_default("Version", "1.0.0").unwrap(), "1.0.0");
        assert_eq!(p.ask_with_default("Version", "1.0.0").unwrap(), "2.0.0");
    }

    #[test]
    fn test_choose_existing_category_by_number() {
        let mut p = prompter("2\n");
        assert_eq!(p.choose_category(&categories()).unwrap(), "writing");
    }

    #[test]
    fn test_choose_new_category() {
        let mut p = prompter("3\nresearch\n");
        assert_eq!(p.choose_category(&categories()).unwrap(), "research");
    }

    #[test]
    fn test_choose_category_by_name() {
        let mut p = prompter("support\n");
        assert_eq!(p.choose_category(&categories()).unwrap(), "support");
    }

    #[test]
    fn test_choose_out_of_range() {
        let mut p = prompter("7\n");
        assert!(p.choose_category(&categories()).is_err());
        let mut p = prompter("0\n");
        assert!(p.choose_category(&categories()).is_err());
    }
}
