//! # Biohack Research Report UI
//!
//! WASM front end for the biohack research site. It renders a nested
//! research report (health target -> mechanisms -> approaches -> health
//! hacks -> products) into a mount element of the host page by direct
//! element construction.
//!
//! ## Modules
//!
//! - [`report`]: the read-only report data model and the inline sample
//! - [`dom`]: the minimal element capability set, browser-backed and in-memory
//! - [`render`]: the single-pass, all-or-nothing tree renderer
//! - [`lifecycle`]: the one-shot document-ready trigger
//!
//! ## Quick Start
//!
//! ```rust
//! use biohack_ui::dom::MemoryDom;
//! use biohack_ui::render::render;
//! use biohack_ui::report::Report;
//!
//! let dom = MemoryDom::new();
//! let mount = dom.mount();
//!
//! render(&dom, &Report::sample(), Some(&mount));
//! assert_eq!(dom.child_count(mount), 1);
//! ```

pub mod dom;
pub mod error;
pub mod lifecycle;
pub mod render;
pub mod report;

// Re-export top-level types for convenience
pub use dom::{BrowserDom, Dom, MemoryDom};
pub use error::RenderError;
pub use lifecycle::{ReadySignal, RenderTrigger, TriggerPhase};
pub use render::{render, ERROR_TITLE};
pub use report::{Approach, HealthHack, Mechanism, Product, Report};
