//! Document - High-level document API
//!
//! Owns the tree plus the document-wide focus slot.

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
    /// Element holding input focus (NONE means the body)
    focused: NodeId,
}

impl Document {
    /// Create a new document with `html`, `head` and `body`
    pub fn new(url: &str) -> Self {
        let mut tree = DomTree::new();

        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");

        tree.link_last(tree.root(), html);
        tree.link_last(html, head);
        tree.link_last(html, body);

        Self {
            tree,
            url: url.to_string(),
            html_element: html,
            body_element: body,
            focused: NodeId::NONE,
        }
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            body_element: NodeId::NONE,
            focused: NodeId::NONE,
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <body> element, if the document has one
    pub fn body(&self) -> Option<NodeId> {
        Some(self.body_element).filter(|b| b.is_valid() && self.tree.is_connected(*b))
    }

    /// Get the first connected element with the given `id`
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .find(|(_, node)| node.as_element().and_then(|e| e.id()) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    /// Elements carrying the given `id`, in document order
    pub fn elements_with_id(&self, id: &str) -> Vec<NodeId> {
        self.tree
            .descendants(self.tree.root())
            .filter(|(_, node)| node.as_element().and_then(|e| e.id()) == Some(id))
            .map(|(node_id, _)| node_id)
            .collect()
    }

    /// Element that explicitly holds focus, if it is still connected
    pub fn focused_element(&self) -> Option<NodeId> {
        Some(self.focused).filter(|f| f.is_valid() && self.tree.is_connected(*f))
    }

    /// `document.activeElement`: the focused element, falling back to body
    pub fn active_element(&self) -> Option<NodeId> {
        self.focused_element().or_else(|| self.body())
    }

    /// Check whether `id` holds focus
    pub fn has_focus(&self, id: NodeId) -> bool {
        self.focused_element() == Some(id)
    }

    /// Move focus to a connected element. Returns false (and leaves focus
    /// where it was) for detached nodes and non-elements.
    pub fn focus(&mut self, id: NodeId) -> bool {
        let focusable = self.tree.get(id).is_some_and(|n| n.is_element())
            && self.tree.is_connected(id);
        if !focusable {
            tracing::trace!("Ignoring focus on {:?}", id);
            return false;
        }
        if Some(id) == self.body() {
            self.focused = NodeId::NONE;
        } else {
            self.focused = id;
        }
        tracing::trace!("Focused {:?}", id);
        true
    }

    /// Drop focus back to the body
    pub fn blur(&mut self) {
        self.focused = NodeId::NONE;
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
