use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

/// What a single blocking read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A line of input, without the trailing newline.
    Line(String),
    /// The user pressed Ctrl-C while waiting for input.
    Interrupted,
    /// No more input will arrive.
    Eof,
}

/// Source of input lines for the interpreter loop.
///
/// `read_line` is the only place the loop blocks. An `Err` is a failed read
/// that is neither end-of-input nor an interrupt.
pub trait LineReader {
    /// Show `prompt` and block until the next line or a termination signal.
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome>;
}

/// Interactive reader backed by [`rustyline`], with in-memory history.
pub struct Editor {
    inner: DefaultEditor,
}

impl Editor {
    /// Create an editor attached to the terminal.
    pub fn new() -> Result<Self> {
        let inner = DefaultEditor::new().context("can't initialize line editor")?;
        Ok(Self { inner })
    }
}

impl LineReader for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        match self.inner.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.inner.add_history_entry(line.as_str()) {
                        tracing::warn!(error = %e, "can't record history entry");
                    }
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(err).context("can't read input line"),
        }
    }
}

/// Line reader over any buffered input, for piped scripts and tests.
///
/// The prompt is written to `prompt_out` before every read.
pub struct PlainReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> PlainReader<R, W> {
    /// Read from `input`, echoing prompts to `prompt_out`.
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl PlainReader<io::StdinLock<'static>, io::Stdout> {
    /// Read from the process standard input, prompting on standard output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineReader for PlainReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome> {
        self.prompt_out
            .write_all(prompt.as_bytes())
            .and_then(|()| self.prompt_out.flush())
            .context("can't write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("can't read input line")?;
        if read == 0 {
            return Ok(ReadOutcome::Eof);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(ReadOutcome::Line(line))
    }
}
