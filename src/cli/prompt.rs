//! Console prompting
//!
//! Line-based reading and writing over any `BufRead`/`Write` pair, so the
//! menu can run against stdin/stdout or in-memory buffers.

use std::io::{BufRead, Write};

use crate::error::{ExpenseError, ExpenseResult};

/// A line-oriented console
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over the given input and output
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Direct access to the output, for operations that stream to it
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a line
    pub fn say(&mut self, text: &str) -> ExpenseResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print text without a trailing newline
    pub fn print(&mut self, text: &str) -> ExpenseResult<()> {
        write!(self.output, "{}", text)?;
        Ok(())
    }

    /// Read one line with its line ending removed; `None` at end of input
    pub fn read_line(&mut self) -> ExpenseResult<Option<String>> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Print `prompt` on its own line, then read the answer
    pub fn ask(&mut self, prompt: &str) -> ExpenseResult<String> {
        self.say(prompt)?;
        self.read_line()?.ok_or(ExpenseError::InputClosed)
    }

    /// Print `prompt` inline, then read the answer on the same line
    pub fn ask_inline(&mut self, prompt: &str) -> ExpenseResult<String> {
        self.print(prompt)?;
        self.read_line()?.ok_or(ExpenseError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new("first\r\nsecond\n".as_bytes(), &mut output);

        assert_eq!(console.read_line().unwrap().as_deref(), Some("first"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new("  padded text  \n".as_bytes(), &mut output);

        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("  padded text  ")
        );
    }

    #[test]
    fn test_ask_prints_prompt() {
        let mut output: Vec<u8> = Vec::new();
        {
            let mut console = Console::new("42\n".as_bytes(), &mut output);
            assert_eq!(console.ask_inline("Value: ").unwrap(), "42");
        }
        assert_eq!(String::from_utf8(output).unwrap(), "Value: ");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut output: Vec<u8> = Vec::new();
        let mut console = Console::new("".as_bytes(), &mut output);

        assert!(matches!(
            console.ask("Enter amount: "),
            Err(ExpenseError::InputClosed)
        ));
    }
}
