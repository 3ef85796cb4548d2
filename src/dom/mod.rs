//! Document abstraction
//!
//! The renderer consumes a handful of element primitives and nothing else.
//! [`Dom`] names them; [`browser::BrowserDom`] backs them with the real
//! document and [`memory::MemoryDom`] with an in-memory tree so the renderer
//! runs headless in unit tests.

pub mod browser;
pub mod memory;

pub use browser::BrowserDom;
pub use memory::MemoryDom;

use crate::error::RenderError;

/// Minimal element capabilities consumed by the renderer.
pub trait Dom {
    /// Handle to one element in the host tree.
    type Node: Clone;

    /// Create a detached element.
    fn create_element(&self, tag: &'static str) -> Result<Self::Node, RenderError>;

    /// Replace the element's text content.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Replace the element's class label.
    fn set_class(&self, node: &Self::Node, class: &str);

    /// Append `child` as the last child of `parent`.
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), RenderError>;

    /// Remove every child of the element.
    fn clear_children(&self, node: &Self::Node);

    /// Informational diagnostic.
    fn log_info(&self, message: &str);

    /// Error diagnostic.
    fn log_error(&self, message: &str);
}
