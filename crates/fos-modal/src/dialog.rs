//! Modal dialog
//!
//! Mounting a [`ModalDialog`] renders the dialog chrome into a fresh
//! [`Portal`], takes the [`ChromeLock`], moves focus to the first tabbable
//! element and installs a window keydown listener:
//!
//! - `Escape` invokes `on_close`
//! - `Tab` / `Shift+Tab` cycle focus inside the dialog and never escape it
//! - every other key passes through untouched
//!
//! The dialog never removes itself. `on_close` tells the owner to drop it,
//! and dropping undoes everything in reverse: listeners, chrome lock,
//! focus, then the portal container.

use std::fmt;
use std::rc::Rc;

use fos_a11y::{FocusDirection, FocusTrap, FocusableSet};
use fos_dom::{DocumentHandle, DomResult, DomTree, Key, KeyboardEvent, ListenerId, NodeId, Window};

use crate::chrome::ChromeLock;
use crate::config::ModalConfig;
use crate::error::{borrow_document, ModalResult};
use crate::portal::Portal;

/// Close request callback
pub type CloseCallback = Rc<dyn Fn()>;

type ContentFn = Box<dyn FnOnce(&mut DomTree, NodeId) -> DomResult<()>>;

/// Inputs for mounting a dialog
pub struct ModalProps {
    /// Heading text, also the accessible name
    pub title: String,
    /// Paragraph text, also the accessible description
    pub description: String,
    content: Option<ContentFn>,
    on_close: CloseCallback,
}

impl ModalProps {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        on_close: impl Fn() + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            content: None,
            on_close: Rc::new(on_close),
        }
    }

    /// Caller-supplied body content, built under the dialog body after the
    /// description paragraph
    pub fn with_content(
        mut self,
        content: impl FnOnce(&mut DomTree, NodeId) -> DomResult<()> + 'static,
    ) -> Self {
        self.content = Some(Box::new(content));
        self
    }
}

impl fmt::Debug for ModalProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalProps")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("content", &self.content.is_some())
            .finish_non_exhaustive()
    }
}

/// Per-mount state, created on open and discarded on close
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogSession {
    prior_focus: Option<NodeId>,
    container: NodeId,
    is_open: bool,
}

impl DialogSession {
    /// Element that had focus just before the dialog opened
    pub fn prior_focus(&self) -> Option<NodeId> {
        self.prior_focus
    }

    /// Dialog root element
    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Elements of the rendered dialog chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DialogParts {
    dialog: NodeId,
    body: NodeId,
    title: NodeId,
    close_button: NodeId,
    description: NodeId,
}

/// A mounted modal dialog
pub struct ModalDialog {
    window: Rc<Window>,
    session: DialogSession,
    parts: DialogParts,
    keydown: Option<ListenerId>,
    close_click: Option<ListenerId>,
    lock: Option<ChromeLock>,
    // Declared last: the container is detached after everything above
    portal: Portal,
}

impl ModalDialog {
    /// Mount with the default configuration
    pub fn open(window: &Rc<Window>, props: ModalProps) -> ModalResult<Self> {
        Self::open_with_config(window, props, &ModalConfig::default())
    }

    /// Mount a dialog into a new portal at the end of `<body>`.
    ///
    /// Fails with [`ModalError::DocumentBusy`](crate::ModalError::DocumentBusy)
    /// when called while the document is borrowed; anything mounted up to
    /// that point is torn down again.
    pub fn open_with_config(
        window: &Rc<Window>,
        props: ModalProps,
        config: &ModalConfig,
    ) -> ModalResult<Self> {
        let document = window.document();
        let portal = Portal::acquire(document)?;

        let ModalProps {
            title,
            description,
            content,
            on_close,
        } = props;
        let parts = {
            let mut doc = borrow_document(document)?;
            render(doc.tree_mut(), portal.container(), &title, &description, content, config)?
        };

        let lock = ChromeLock::acquire(document, &config.root_id)?;
        let trap = FocusTrap::new(parts.dialog);
        let prior_focus = {
            let mut doc = borrow_document(document)?;
            let prior = doc.active_element();
            trap.focus_first(&mut doc);
            prior
        };

        let close_click = {
            let on_close = Rc::clone(&on_close);
            window.add_click_listener(parts.close_button, move || on_close())
        };

        let keydown = {
            let document = Rc::clone(document);
            window.add_keydown_listener(move |event| handle_keydown(&document, trap, &on_close, event))
        };

        tracing::debug!(
            "Opened dialog {:?} \"{}\" (prior focus {:?})",
            parts.dialog,
            title,
            prior_focus
        );
        Ok(Self {
            window: Rc::clone(window),
            session: DialogSession {
                prior_focus,
                container: parts.dialog,
                is_open: true,
            },
            parts,
            keydown: Some(keydown),
            close_click: Some(close_click),
            lock: Some(lock),
            portal,
        })
    }

    /// Unmount now rather than at end of scope
    pub fn close(self) {}

    pub fn session(&self) -> &DialogSession {
        &self.session
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open
    }

    /// Portal container the dialog is mounted in
    pub fn portal_container(&self) -> NodeId {
        self.portal.container()
    }

    /// `role="dialog"` element
    pub fn dialog_element(&self) -> NodeId {
        self.parts.dialog
    }

    /// Inner body wrapper holding the heading, button, paragraph and content
    pub fn body_element(&self) -> NodeId {
        self.parts.body
    }

    pub fn title_element(&self) -> NodeId {
        self.parts.title
    }

    pub fn description_element(&self) -> NodeId {
        self.parts.description
    }

    pub fn close_button(&self) -> NodeId {
        self.parts.close_button
    }

    /// Current tab order inside the dialog
    pub fn focusable(&self) -> FocusableSet {
        let doc = self.window.document().borrow();
        FocusTrap::new(self.parts.dialog).focusable(&doc)
    }
}

impl fmt::Debug for ModalDialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalDialog")
            .field("session", &self.session)
            .field("parts", &self.parts)
            .field("portal", &self.portal.container())
            .finish_non_exhaustive()
    }
}

impl Drop for ModalDialog {
    fn drop(&mut self) {
        if let Some(id) = self.keydown.take() {
            self.window.remove_keydown_listener(id);
        }
        if let Some(id) = self.close_click.take() {
            self.window.remove_click_listener(id);
        }

        drop(self.lock.take());

        if let Some(prior) = self.session.prior_focus {
            match self.window.document().try_borrow_mut() {
                Ok(mut doc) if doc.tree().is_connected(prior) => {
                    doc.focus(prior);
                }
                Ok(_) => tracing::debug!("Prior focus {:?} was removed; leaving focus", prior),
                Err(_) => tracing::warn!("Document busy; focus not restored"),
            }
        }

        self.session.is_open = false;
        tracing::debug!("Closed dialog {:?}", self.parts.dialog);
    }
}

/// Build the dialog chrome under `container`
fn render(
    tree: &mut DomTree,
    container: NodeId,
    title: &str,
    description: &str,
    content: Option<ContentFn>,
    config: &ModalConfig,
) -> DomResult<DialogParts> {
    let dialog = tree.create_element("div");
    tree.set_attribute(dialog, "role", "dialog")?;
    tree.set_attribute(dialog, "aria-labelledby", &config.title_id)?;
    tree.set_attribute(dialog, "aria-describedby", &config.description_id)?;
    tree.set_attribute(dialog, "aria-modal", "true")?;
    tree.set_attribute(dialog, "aria-hidden", "false")?;
    tree.append_child(container, dialog)?;

    let body = tree.create_element("div");
    tree.append_child(dialog, body)?;

    let heading = text_element(tree, "h2", title)?;
    tree.set_attribute(heading, "id", &config.title_id)?;
    tree.append_child(body, heading)?;

    let close_button = text_element(tree, "button", &config.close_text)?;
    tree.set_attribute(close_button, "type", "button")?;
    tree.set_attribute(close_button, "aria-label", &config.close_label)?;
    tree.append_child(body, close_button)?;

    let paragraph = text_element(tree, "p", description)?;
    tree.set_attribute(paragraph, "id", &config.description_id)?;
    tree.append_child(body, paragraph)?;

    if let Some(content) = content {
        content(tree, body)?;
    }

    Ok(DialogParts {
        dialog,
        body,
        title: heading,
        close_button,
        description: paragraph,
    })
}

fn text_element(tree: &mut DomTree, tag: &str, text: &str) -> DomResult<NodeId> {
    let element = tree.create_element(tag);
    let text = tree.create_text(text);
    tree.append_child(element, text)?;
    Ok(element)
}

fn handle_keydown(
    document: &DocumentHandle,
    trap: FocusTrap,
    on_close: &CloseCallback,
    event: &mut KeyboardEvent,
) {
    match event.key {
        Key::Escape => on_close(),
        Key::Tab => {
            event.prevent_default();
            let Ok(mut doc) = document.try_borrow_mut() else {
                tracing::warn!("Document busy; Tab not handled");
                return;
            };
            trap.cycle(&mut doc, FocusDirection::from_shift(event.shift));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn props() -> ModalProps {
        ModalProps::new("Delete file", "This cannot be undone.", || {})
    }

    #[test]
    fn test_render_structure() {
        let window = Rc::new(Window::default());
        let dialog = ModalDialog::open(&window, props()).unwrap();

        let doc = window.document().borrow();
        let tree = doc.tree();
        let d = dialog.dialog_element();
        assert_eq!(tree.parent(d), Some(dialog.portal_container()));
        assert_eq!(tree.get_attribute(d, "role"), Some("dialog"));
        assert_eq!(tree.get_attribute(d, "aria-labelledby"), Some("title"));
        assert_eq!(tree.get_attribute(d, "aria-describedby"), Some("description"));
        assert_eq!(tree.get_attribute(d, "aria-modal"), Some("true"));
        assert_eq!(tree.get_attribute(d, "aria-hidden"), Some("false"));

        let children: Vec<NodeId> = tree.children(dialog.body_element()).map(|(id, _)| id).collect();
        assert_eq!(
            children,
            vec![dialog.title_element(), dialog.close_button(), dialog.description_element()]
        );
        assert_eq!(tree.text_content(dialog.title_element()), "Delete file");
        assert_eq!(tree.get_attribute(dialog.close_button(), "aria-label"), Some("Close dialog"));
        assert_eq!(tree.get_attribute(dialog.close_button(), "type"), Some("button"));
        assert_eq!(tree.text_content(dialog.close_button()), "X");
        assert_eq!(doc.get_element_by_id("description"), Some(dialog.description_element()));
    }

    #[test]
    fn test_close_button_focused_when_no_content() {
        let window = Rc::new(Window::default());
        let dialog = ModalDialog::open(&window, props()).unwrap();
        assert!(window.document().borrow().has_focus(dialog.close_button()));
        assert_eq!(dialog.focusable().as_slice(), &[dialog.close_button()]);
    }

    #[test]
    fn test_escape_requests_close() {
        let closes = Rc::new(Cell::new(0));
        let window = Rc::new(Window::default());
        let counter = Rc::clone(&closes);
        let dialog = ModalDialog::open(
            &window,
            ModalProps::new("T", "D", move || counter.set(counter.get() + 1)),
        )
        .unwrap();

        let event = window.press_key("Escape");
        assert_eq!(closes.get(), 1);
        assert!(!event.is_default_prevented());
        assert!(dialog.is_open());

        window.press_key("a");
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_content_error_unmounts_portal() {
        let window = Rc::new(Window::default());
        let result = ModalDialog::open(
            &window,
            props().with_content(|tree, _| tree.append_child(NodeId::ROOT, NodeId::ROOT).map(|_| ())),
        );
        assert!(result.is_err());

        let doc = window.document().borrow();
        let body = doc.body().unwrap();
        assert_eq!(doc.tree().children(body).count(), 0);
        assert_eq!(window.keydown_listener_count(), 0);
    }

    #[test]
    fn test_session_state() {
        let window = Rc::new(Window::default());
        let dialog = ModalDialog::open(&window, props()).unwrap();
        let session = *dialog.session();
        assert!(session.is_open());
        assert_eq!(session.container(), dialog.dialog_element());
        assert_eq!(session.prior_focus(), window.document().borrow().body());
    }
}
