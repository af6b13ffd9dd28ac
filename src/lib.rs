//! A small interactive assistant bot that keeps a phone directory in memory.
//!
//! Each input line is split into a command and its arguments by the [`lexer`],
//! resolved through the [`dispatcher`] to one of the [`builtin`] handlers and
//! executed against a [`store::ContactStore`]. Handlers report failures as
//! categorized [`error::CommandError`] values, which the [`normalize`] boundary
//! turns into fixed user-facing text, so a reply is always a plain string.
//!
//! The main entry point is [`Interpreter`], which owns the store and drives the
//! read-dispatch-print loop over any [`io_adapters::LineReader`].

pub mod builtin;
pub mod cli;
pub mod dispatcher;
pub mod error;
pub mod io_adapters;
mod interpreter;
pub mod lexer;
pub mod normalize;
pub mod store;

/// Re-export of the read-dispatch-print loop.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Interpreter, State, PROMPT};
