//! UI chrome lock
//!
//! Document-wide state a modal takes over while open: the body scroll
//! lock and `aria-hidden` on the application root. Only one lock should
//! be live at a time; a second one records the first one's modified state
//! as its "prior" state and restores that on release.

use std::rc::Rc;

use fos_dom::DocumentHandle;

use crate::error::{borrow_document, ModalResult};

/// Held lock on the body scroll and root visibility. Released on drop.
#[derive(Debug)]
pub struct ChromeLock {
    document: DocumentHandle,
    root_id: String,
    /// Inline `overflow` on body before locking (`None`: not set)
    prior_overflow: Option<String>,
}

impl ChromeLock {
    /// Suppress body scrolling and hide `#root_id` from assistive technology.
    /// A missing body or root element turns that half into a no-op.
    pub fn acquire(document: &DocumentHandle, root_id: &str) -> ModalResult<Self> {
        let mut doc = borrow_document(document)?;
        let mut prior_overflow = None;

        if let Some(body) = doc.body() {
            prior_overflow = doc.tree().style_property(body, "overflow").map(String::from);
            if let Err(e) = doc.tree_mut().set_style_property(body, "overflow", "hidden") {
                tracing::warn!("Failed to lock body scroll: {}", e);
            }
        }

        match doc.get_element_by_id(root_id) {
            Some(root) => {
                if doc.tree().get_attribute(root, "aria-hidden") == Some("true") {
                    tracing::warn!("#{} already hidden; another modal may hold the chrome lock", root_id);
                }
                if let Err(e) = doc.tree_mut().set_attribute(root, "aria-hidden", "true") {
                    tracing::warn!("Failed to hide #{}: {}", root_id, e);
                }
            }
            None => tracing::debug!("No #{} element; background stays exposed", root_id),
        }

        tracing::debug!("Acquired chrome lock (prior overflow: {:?})", prior_overflow);
        Ok(Self {
            document: Rc::clone(document),
            root_id: root_id.to_string(),
            prior_overflow,
        })
    }

    /// Inline `overflow` value that will be restored
    pub fn prior_overflow(&self) -> Option<&str> {
        self.prior_overflow.as_deref()
    }

    /// Release now rather than at end of scope
    pub fn release(self) {}
}

impl Drop for ChromeLock {
    fn drop(&mut self) {
        let Ok(mut doc) = self.document.try_borrow_mut() else {
            tracing::warn!("Document busy; chrome lock not released");
            return;
        };

        if let Some(body) = doc.body() {
            let tree = doc.tree_mut();
            let restored = match &self.prior_overflow {
                Some(value) => tree.set_style_property(body, "overflow", value),
                None => tree.remove_style_property(body, "overflow").map(|_| ()),
            };
            if let Err(e) = restored {
                tracing::warn!("Failed to restore body scroll: {}", e);
            }
        }

        if let Some(root) = doc.get_element_by_id(&self.root_id) {
            if let Err(e) = doc.tree_mut().remove_attribute(root, "aria-hidden") {
                tracing::warn!("Failed to unhide #{}: {}", self.root_id, e);
            }
        }

        tracing::debug!("Released chrome lock");
    }
}
