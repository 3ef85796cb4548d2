//! Browser-backed document handle
//!
//! Wraps `web_sys::Document` behind the [`Dom`] capability set and the
//! [`ReadySignal`] load-phase queries. Diagnostics go to the browser console.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use super::Dom;
use crate::error::RenderError;
use crate::lifecycle::ReadySignal;

/// Id of the container element the report is rendered into.
pub const MOUNT_ID: &str = "report-root";

/// [`Dom`] implementation over the real browser document.
#[derive(Clone)]
pub struct BrowserDom {
    document: Document,
}

impl BrowserDom {
    /// Acquire the document of the current window, if the host has one.
    pub fn from_window() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    /// Look up the report mount point by its fixed id.
    pub fn mount_point(&self) -> Option<Element> {
        self.document.get_element_by_id(MOUNT_ID)
    }
}

impl Dom for BrowserDom {
    type Node = Element;

    fn create_element(&self, tag: &'static str) -> Result<Element, RenderError> {
        self.document
            .create_element(tag)
            .map_err(|err| RenderError::CreateElement {
                tag,
                reason: js_error_message(&err),
            })
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn set_class(&self, node: &Element, class: &str) {
        node.set_class_name(class);
    }

    fn append_child(&self, parent: &Element, child: &Element) -> Result<(), RenderError> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|err| RenderError::AppendChild(js_error_message(&err)))
    }

    fn clear_children(&self, node: &Element) {
        node.set_inner_html("");
    }

    fn log_info(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }

    fn log_error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }
}

impl ReadySignal for BrowserDom {
    fn is_parsed(&self) -> bool {
        // "loading" means the parser has not finished the initial document
        self.document.ready_state() != "loading"
    }

    fn on_ready(&self, callback: Box<dyn FnOnce()>) {
        let closure = Closure::once(callback);
        let target: &web_sys::EventTarget = self.document.as_ref();
        if target
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
            .is_err()
        {
            self.log_error("failed to register DOMContentLoaded listener");
        }
        // The one-shot listener stays registered for the lifetime of the page.
        closure.forget();
    }
}

/// Message text of a thrown JS value, or a fixed fallback when the exception
/// carries none.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| "Unknown error".to_string())
}
