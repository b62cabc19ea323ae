//! Panic-safe outcome boundary
//!
//! Outcomes are plain `Result<T, Error>` throughout the library; this module
//! guards the one place where a Rust panic could otherwise escape an async
//! operation. [`try_catch`] converts a panicking operation into
//! [`Error::Unknown`] carrying the extracted panic message, so callers only
//! ever branch on the result.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::error::Error;

/// Runs a fallible async operation, converting any panic into an error.
///
/// On normal completion the operation's own `Result` passes through
/// unchanged. A panic becomes `Err(Error::Unknown(message))`, with the
/// message extracted from the panic payload. No panic escapes this boundary.
///
/// # Example
///
/// ```ignore
/// let outcome = try_catch(|| async { client.get_post(1).await }).await;
/// match outcome {
///     Ok(post) => println!("{}", post.title),
///     Err(err) => eprintln!("{err}"),
/// }
/// ```
pub async fn try_catch<F, Fut, T>(operation: F) -> Result<T, Error>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, Error>>,
{
    match AssertUnwindSafe(operation()).catch_unwind().await {
        Ok(outcome) => outcome,
        Err(panic) => Err(Error::Unknown(extract_panic_message(&panic))),
    }
}

/// Extract a human-readable message from a panic payload.
///
/// Panics can contain either `&str` or `String` payloads. This function
/// attempts to extract either, falling back to a generic message.
pub fn extract_panic_message(panic: &Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "An unknown error occurred".to_string()
    }
}
