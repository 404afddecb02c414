//! Window
//!
//! Shared document handle plus the listener registries that fire
//! regardless of which element holds focus.
//!
//! Dispatch snapshots the registry and holds no borrow while a listener
//! runs, so listeners may freely add or remove listeners and borrow the
//! document themselves.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Document, KeyboardEvent, NodeId};

/// Shared, single-threaded document handle
pub type DocumentHandle = Rc<RefCell<Document>>;

type KeydownListener = Rc<dyn Fn(&mut KeyboardEvent)>;
type ClickListener = Rc<dyn Fn()>;

/// Listener registration handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Browsing context: the document and its window-level listeners
pub struct Window {
    document: DocumentHandle,
    keydown: RefCell<Vec<(ListenerId, KeydownListener)>>,
    click: RefCell<Vec<(ListenerId, NodeId, ClickListener)>>,
    next_listener: Cell<u64>,
}

impl Window {
    pub fn new(document: Document) -> Self {
        Self {
            document: Rc::new(RefCell::new(document)),
            keydown: RefCell::new(Vec::new()),
            click: RefCell::new(Vec::new()),
            next_listener: Cell::new(1),
        }
    }

    /// Shared document handle
    pub fn document(&self) -> &DocumentHandle {
        &self.document
    }

    fn allocate_id(&self) -> ListenerId {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        ListenerId(id)
    }

    /// `window.addEventListener("keydown", ..)`
    pub fn add_keydown_listener(&self, listener: impl Fn(&mut KeyboardEvent) + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.keydown.borrow_mut().push((id, Rc::new(listener)));
        tracing::trace!("Added keydown listener {:?}", id);
        id
    }

    /// Remove a keydown listener. Returns false if it was not registered.
    pub fn remove_keydown_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.keydown.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        let removed = listeners.len() != before;
        if removed {
            tracing::trace!("Removed keydown listener {:?}", id);
        }
        removed
    }

    /// Number of registered keydown listeners
    pub fn keydown_listener_count(&self) -> usize {
        self.keydown.borrow().len()
    }

    /// Deliver a keydown event to every listener in registration order.
    /// Listeners removed by an earlier listener are skipped.
    pub fn dispatch_keydown(&self, event: &mut KeyboardEvent) {
        let snapshot: Vec<(ListenerId, KeydownListener)> = self
            .keydown
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();

        for (id, listener) in snapshot {
            let still_registered = self.keydown.borrow().iter().any(|(lid, _)| *lid == id);
            if still_registered {
                listener(event);
            }
        }
    }

    /// Build and dispatch a keydown event, returning it for inspection
    pub fn press_key(&self, key: &str) -> KeyboardEvent {
        let mut event = KeyboardEvent::keydown(key);
        self.dispatch_keydown(&mut event);
        event
    }

    /// Build and dispatch a shifted keydown event
    pub fn press_shift_key(&self, key: &str) -> KeyboardEvent {
        let mut event = KeyboardEvent::keydown(key).with_shift();
        self.dispatch_keydown(&mut event);
        event
    }

    /// Register a click listener on an element
    pub fn add_click_listener(&self, target: NodeId, listener: impl Fn() + 'static) -> ListenerId {
        let id = self.allocate_id();
        self.click.borrow_mut().push((id, target, Rc::new(listener)));
        id
    }

    /// Remove a click listener. Returns false if it was not registered.
    pub fn remove_click_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.click.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _, _)| *lid != id);
        listeners.len() != before
    }

    /// Number of registered click listeners
    pub fn click_listener_count(&self) -> usize {
        self.click.borrow().len()
    }

    /// Click an element: listeners on the target and its ancestors run,
    /// innermost first. Disabled form controls and detached nodes swallow
    /// the click. Returns whether any listener ran.
    pub fn click(&self, target: NodeId) -> bool {
        let path = {
            let doc = self.document.borrow();
            let tree = doc.tree();
            let disabled = tree.element(target).is_some_and(|e| {
                matches!(e.tag_name(), "button" | "input" | "select" | "textarea")
                    && e.has_attr("disabled")
            });
            if disabled || !tree.is_connected(target) {
                return false;
            }
            let mut path = vec![target];
            let mut current = target;
            while let Some(parent) = tree.parent(current) {
                path.push(parent);
                current = parent;
            }
            path
        };

        let mut fired = false;
        for node in path {
            let listeners: Vec<(ListenerId, ClickListener)> = self
                .click
                .borrow()
                .iter()
                .filter(|(_, t, _)| *t == node)
                .map(|(id, _, l)| (*id, Rc::clone(l)))
                .collect();
            for (id, listener) in listeners {
                let still_registered = self.click.borrow().iter().any(|(lid, _, _)| *lid == id);
                if still_registered {
                    listener();
                    fired = true;
                }
            }
        }
        fired
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::new(Document::default())
    }
}

impl std::fmt::Debug for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Window")
            .field("url", &self.document.try_borrow().map(|d| d.url().to_string()).ok())
            .field("keydown_listeners", &self.keydown_listener_count())
            .field("click_listeners", &self.click_listener_count())
            .finish()
    }
}
