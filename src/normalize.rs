//! The boundary between fallible handlers and the text the user sees.
//!
//! [`normalize`] is the only place a handler is invoked. Whatever the handler
//! does, including panicking, the caller gets back a single message string.

use crate::error::{CommandError, Result};
use crate::store::ContactStore;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Uniform handler signature shared by every command.
pub type Handler = fn(&[String], &mut ContactStore) -> Result<String>;

/// Fixed user-facing text for a categorized failure.
pub fn user_message(err: &CommandError) -> String {
    err.to_string()
}

/// Run `handler` and turn its outcome into the reply text.
///
/// Success messages pass through unchanged. Categorized failures are rendered
/// with [`user_message`]. A panic inside the handler is contained and reported
/// as [`CommandError::Uncategorized`].
pub fn normalize(handler: Handler, args: &[String], store: &mut ContactStore) -> String {
    // Store operations are single map calls, so a panic cannot leave a
    // half-applied mutation behind.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(args, store)))
        .unwrap_or_else(|payload| Err(CommandError::Uncategorized(panic_detail(payload.as_ref()))));

    match outcome {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!(error = ?err, "handler failed");
            if let CommandError::Uncategorized(detail) = &err {
                tracing::warn!(detail = %detail, "uncategorized handler failure");
            }
            user_message(&err)
        }
    }
}

/// Text carried by a panic payload.
pub(crate) fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown failure".to_string()
    }
}
