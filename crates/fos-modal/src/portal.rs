//! Render-target mount
//!
//! A portal is a `div` appended as the last child of `<body>` that
//! overlay content renders into, outside the application's own tree.
//! Every portal gets its own container with `position: relative` and the
//! fixed [`PORTAL_Z_INDEX`], so sibling portals stack predictably.
//! Dropping the portal detaches the container.

use std::rc::Rc;

use fos_dom::{DocumentHandle, NodeId};

use crate::config::PORTAL_Z_INDEX;
use crate::error::{borrow_document, ModalError, ModalResult};

/// Mounted render target
#[derive(Debug)]
pub struct Portal {
    document: DocumentHandle,
    container: NodeId,
}

impl Portal {
    /// Create a container and attach it to the end of `<body>`.
    /// Fails with [`ModalError::DocumentBusy`] while the document is borrowed.
    pub fn acquire(document: &DocumentHandle) -> ModalResult<Self> {
        let mut doc = borrow_document(document)?;
        let body = doc.body().ok_or(ModalError::MissingBody)?;

        let tree = doc.tree_mut();
        let container = tree.create_element("div");
        tree.set_style_property(container, "position", "relative")?;
        tree.set_style_property(container, "z-index", &PORTAL_Z_INDEX.to_string())?;
        tree.append_child(body, container)?;

        tracing::debug!("Mounted portal container {:?}", container);
        Ok(Self {
            document: Rc::clone(document),
            container,
        })
    }

    /// Root node of the mounted subtree
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Detach the container now rather than at end of scope
    pub fn release(self) {}
}

impl Drop for Portal {
    fn drop(&mut self) {
        let Ok(mut doc) = self.document.try_borrow_mut() else {
            tracing::warn!("Document busy; portal container {:?} left attached", self.container);
            return;
        };
        let Some(parent) = doc.tree().parent(self.container) else {
            tracing::debug!("Portal container {:?} already detached", self.container);
            return;
        };
        match doc.tree_mut().remove_child(parent, self.container) {
            Ok(_) => tracing::debug!("Unmounted portal container {:?}", self.container),
            Err(e) => tracing::warn!("Failed to unmount portal: {}", e),
        }
    }
}
