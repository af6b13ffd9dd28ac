use crate::dispatcher::Dispatcher;
use crate::io_adapters::{LineReader, ReadOutcome};
use crate::lexer;
use crate::normalize::panic_detail;
use crate::store::ContactStore;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};

/// Prompt shown before every read.
pub const PROMPT: &str = "Enter a command: ";

const BANNER: &str = "Welcome to the assistant bot!\nType 'help' to see available commands.";
const GREETING: &str = "How can I help you?";
const FAREWELL: &str = "Good bye!";
const INTERRUPTED: &str = "Program interrupted by user. Good bye!";
const END_OF_INPUT: &str = "End of input. Good bye!";

const EXIT_COMMANDS: [&str; 4] = ["close", "exit", "quit", "bye"];

/// Consecutive failed reads after which the input is treated as exhausted.
const MAX_READ_FAILURES: usize = 5;

/// Lifecycle of the interpreter loop. `Terminated` is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reading and answering commands.
    Running,
    /// An exit command, end-of-input or an interrupt was seen.
    Terminated,
}

/// The assistant bot's read-dispatch-print loop.
///
/// The interpreter owns the [`ContactStore`] and the [`Dispatcher`]. Each line
/// is tokenized, greeting and exit commands are handled here, and everything
/// else is dispatched to a handler. Replies are always plain text.
///
/// Example
/// ```
/// use assistant_bot::{Interpreter, State};
/// let mut bot = Interpreter::default();
/// assert_eq!(bot.handle_line("add John 0501234567").as_deref(), Some("Contact added."));
/// assert_eq!(bot.handle_line("phone John").as_deref(), Some("John: 0501234567"));
/// assert_eq!(bot.handle_line("bye").as_deref(), Some("Good bye!"));
/// assert_eq!(bot.state(), State::Terminated);
/// ```
pub struct Interpreter {
    store: ContactStore,
    dispatcher: Dispatcher,
    state: State,
    read_failures: usize,
}

impl Interpreter {
    /// Create an interpreter with an empty store and a custom dispatcher.
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            store: ContactStore::new(),
            dispatcher,
            state: State::Running,
            read_failures: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Read-only view of the directory.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Process one input line and return the reply, if any.
    ///
    /// Blank lines produce no reply. Once terminated, further lines are ignored.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        if self.state == State::Terminated {
            return None;
        }

        let command = lexer::tokenize(line);
        if command.is_empty() {
            return None;
        }

        let name = command.name.as_str();
        if EXIT_COMMANDS.contains(&name) {
            return Some(self.terminate(FAREWELL));
        }
        if name == "hello" {
            return Some(GREETING.to_string());
        }
        Some(self.dispatcher.dispatch(&command, &mut self.store))
    }

    /// Apply the result of one blocking read and return the reply, if any.
    ///
    /// End-of-input and interrupts terminate the loop. A failed read is
    /// reported and the loop keeps running, unless reads keep failing.
    pub fn handle_read(&mut self, outcome: anyhow::Result<ReadOutcome>) -> Option<String> {
        if self.state == State::Terminated {
            return None;
        }
        match outcome {
            Ok(ReadOutcome::Line(line)) => {
                self.read_failures = 0;
                self.handle_line(&line)
            }
            Ok(ReadOutcome::Interrupted) => Some(self.terminate(INTERRUPTED)),
            Ok(ReadOutcome::Eof) => Some(self.terminate(END_OF_INPUT)),
            Err(err) => {
                self.read_failures += 1;
                tracing::warn!(error = %format!("{err:#}"), failures = self.read_failures, "read failed");
                if self.read_failures >= MAX_READ_FAILURES {
                    return Some(self.terminate(END_OF_INPUT));
                }
                Some(format!("Unexpected error: {err:#}"))
            }
        }
    }

    /// Drive the loop until it terminates.
    ///
    /// Prints the start-up banner, then alternates between reading from
    /// `reader` and writing replies to `out`. A failed write is logged and the
    /// loop keeps going; only the termination transitions end it. A panic while
    /// reading or handling a line is reported like a failed read.
    pub fn run(&mut self, reader: &mut dyn LineReader, out: &mut dyn Write) {
        emit(out, BANNER);
        while self.state == State::Running {
            let step = panic::catch_unwind(AssertUnwindSafe(|| {
                let outcome = reader.read_line(PROMPT);
                self.handle_read(outcome)
            }));
            let reply = step.unwrap_or_else(|payload| {
                let detail = panic_detail(payload.as_ref());
                self.handle_read(Err(anyhow::anyhow!(detail)))
            });
            if let Some(reply) = reply {
                emit(out, &reply);
            }
        }
    }

    fn terminate(&mut self, message: &str) -> String {
        tracing::debug!(reason = message, "terminating");
        self.state = State::Terminated;
        message.to_string()
    }
}

impl Default for Interpreter {
    /// Create an interpreter with an empty store and every builtin command.
    fn default() -> Self {
        Self::new(Dispatcher::default())
    }
}

fn emit(out: &mut dyn Write, message: &str) {
    if let Err(e) = writeln!(out, "{message}").and_then(|()| out.flush()) {
        tracing::error!(error = %e, "can't write reply");
    }
}
