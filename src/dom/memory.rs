//! In-memory element tree
//!
//! A [`Dom`] implementation with no browser behind it. Unit tests render
//! against it and inspect the produced tree directly. An armed failure point
//! makes a chosen element creation fail so error paths can be exercised.

use std::cell::{Cell, RefCell};

use super::Dom;
use crate::error::RenderError;

/// Handle to an element in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    class: String,
    text: String,
    children: Vec<NodeId>,
}

/// Arena-backed element tree with the same capability set as the browser
/// document.
#[derive(Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    diagnostics: RefCell<Vec<String>>,
    fail_after: Cell<Option<usize>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached element usable as a mount point.
    pub fn mount(&self) -> NodeId {
        self.insert("div")
    }

    /// Arm the failure point: the element creation `n` calls from now fails
    /// (`0` fails the next one). Disarms itself after firing.
    pub fn fail_create_after(&self, n: usize) {
        self.fail_after.set(Some(n));
    }

    /// Number of elements created so far.
    pub fn node_count(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn class(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].class.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes.borrow()[node.0].children.len()
    }

    /// Recorded diagnostics, oldest first.
    pub fn diagnostics(&self) -> Vec<String> {
        self.diagnostics.borrow().clone()
    }

    /// Descendants of `node` in document order, excluding `node` itself.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect(node, &mut out);
        out
    }

    /// Descendants carrying `label` as one of their class tokens.
    pub fn descendants_with_class(&self, node: NodeId, label: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|id| self.class(*id).split_whitespace().any(|token| token == label))
            .collect()
    }

    /// Descendants with the given tag name.
    pub fn descendants_with_tag(&self, node: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|id| self.tag(*id) == tag)
            .collect()
    }

    /// Serialize the subtree rooted at `node` the way `outerHTML` would.
    pub fn outer_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn insert(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(NodeData {
            tag: tag.to_string(),
            ..NodeData::default()
        });
        NodeId(nodes.len() - 1)
    }

    fn collect(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(node) {
            out.push(child);
            self.collect(child, out);
        }
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let tag = self.tag(node);
        let class = self.class(node);
        let text = self.text(node);
        let children = self.children(node);

        if class.is_empty() && text.is_empty() && children.is_empty() {
            out.push_str(&format!("<{tag}/>"));
            return;
        }

        out.push('<');
        out.push_str(&tag);
        if !class.is_empty() {
            out.push_str(&format!(" class=\"{class}\""));
        }
        out.push('>');
        out.push_str(&text);
        for child in children {
            self.write_html(child, out);
        }
        out.push_str(&format!("</{tag}>"));
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn create_element(&self, tag: &'static str) -> Result<NodeId, RenderError> {
        match self.fail_after.get() {
            Some(0) => {
                self.fail_after.set(None);
                return Err(RenderError::CreateElement {
                    tag,
                    reason: "simulated element failure".to_string(),
                });
            }
            Some(n) => self.fail_after.set(Some(n - 1)),
            None => {}
        }
        Ok(self.insert(tag))
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    fn set_class(&self, node: &NodeId, class: &str) {
        self.nodes.borrow_mut()[node.0].class = class.to_string();
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) -> Result<(), RenderError> {
        self.nodes.borrow_mut()[parent.0].children.push(*child);
        Ok(())
    }

    fn clear_children(&self, node: &NodeId) {
        self.nodes.borrow_mut()[node.0].children.clear();
    }

    fn log_info(&self, message: &str) {
        self.diagnostics.borrow_mut().push(format!("info: {message}"));
    }

    fn log_error(&self, message: &str) {
        self.diagnostics.borrow_mut().push(format!("error: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armed_failure_fires_on_the_chosen_call_then_disarms() {
        let dom = MemoryDom::new();
        dom.fail_create_after(1);

        assert!(dom.create_element("div").is_ok());
        assert!(dom.create_element("div").is_err());
        assert!(dom.create_element("div").is_ok());
    }

    #[test]
    fn serializes_void_and_nested_elements() {
        let dom = MemoryDom::new();
        let root = dom.mount();
        let label = dom.create_element("p").unwrap();
        dom.set_class(&label, "note");
        dom.set_text(&label, "hi");
        dom.append_child(&root, &label).unwrap();
        let gap = dom.create_element("br").unwrap();
        dom.append_child(&root, &gap).unwrap();

        assert_eq!(dom.outer_html(root), "<div><p class=\"note\">hi</p><br/></div>");
    }
}
