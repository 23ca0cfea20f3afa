//! The line-oriented terminal a choice prompt talks to.
//!
//! Queries only need three operations: show a prompt, read a line, and
//! write a message line. [`MockTerminal`] scripts all three for tests.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Line-oriented terminal used by choice queries.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt to stdout, without a trailing newline.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Read a line from stdin.
    ///
    /// Returns the line including its newline, or an empty string at
    /// end-of-input.
    fn read_line(&self) -> io::Result<String>;

    /// Write a full message line to stdout.
    fn write_line(&self, message: &str) -> io::Result<()>;
}

/// Stdin/stdout terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()
    }

    fn read_line(&self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", message)
    }
}

/// Scripted terminal for tests.
///
/// Replays scripted responses in order and records every prompt and
/// message written to it. Once the responses run out it reports
/// end-of-input.
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    response_index: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    messages: Mutex<Vec<String>>,
}

impl MockTerminal {
    /// A terminal that answers once, then reports end-of-input.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response])
    }

    /// A terminal that answers with each response in turn.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// A terminal already at end-of-input.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Number of lines read so far, including the final EOF read.
    pub fn reads(&self) -> usize {
        self.response_index.load(Ordering::SeqCst)
    }

    /// Prompts written so far.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Message lines written so far.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

fn lock(records: &Mutex<Vec<String>>) -> std::sync::MutexGuard<'_, Vec<String>> {
    records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        lock(&self.prompts).push(prompt.to_string());
        Ok(())
    }

    fn read_line(&self) -> io::Result<String> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(idx) {
            Some(response) => Ok(format!("{}\n", response)),
            None => Ok(String::new()),
        }
    }

    fn write_line(&self, message: &str) -> io::Result<()> {
        lock(&self.messages).push(message.to_string());
        Ok(())
    }
}
