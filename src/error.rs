//! Renderer error types
//!
//! Failures the element primitives can raise while the report tree is being
//! built. The renderer catches every one of them and swaps in the error
//! panel; none of them reaches the caller.

use thiserror::Error;

/// Errors that can occur while building the report element tree
#[derive(Error, Debug)]
pub enum RenderError {
    /// Element creation failed
    #[error("failed to create <{tag}> element: {reason}")]
    CreateElement { tag: &'static str, reason: String },

    /// Attaching a child to its parent failed
    #[error("failed to attach element: {0}")]
    AppendChild(String),
}
