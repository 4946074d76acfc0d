//! Line-oriented terminal prompting

use colored::Colorize;
use std::io::{self, BufRead, BufReader, Write};
use std::sync::Mutex;

/// Prints prompts to stdout and reads replies one line at a time.
///
/// There must be only one of these per input stream; the document intake and
/// the answer prompts share it so no buffered input is lost between them.
pub struct LinePrompter {
    reader: Mutex<Box<dyn BufRead + Send>>,
}

impl LinePrompter {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(io::stdin()))
    }

    pub fn from_reader(reader: impl BufRead + Send + 'static) -> Self {
        Self {
            reader: Mutex::new(Box::new(reader)),
        }
    }

    /// Print `label` (if any) and read a line without its terminator.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn ask(&self, label: &str) -> io::Result<Option<String>> {
        if !label.is_empty() {
            print!("{} ", label.bold());
            io::stdout().flush()?;
        }

        let mut reader = self
            .reader
            .lock()
            .map_err(|_| io::Error::other("input reader poisoned"))?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`ask`](Self::ask), but end of input is an error.
    pub fn ask_required(&self, label: &str) -> io::Result<String> {
        self.ask(label)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    }

    /// Read lines until a blank line or end of input, joined with newlines.
    pub fn ask_block(&self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.ask("")? {
            if line.trim().is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }
}
