//! Modal lifecycle tests
//!
//! Mount and teardown against a small host page: `<body>` holding the
//! application root (`#root`) with an opener button inside it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fos_a11y::{audit_dialog, accessible_description, accessible_name};
use fos_dom::{Document, NodeId, Window};
use fos_modal::{ModalConfig, ModalDialog, ModalError, ModalProps};

struct Page {
    window: Rc<Window>,
    root: NodeId,
    opener: NodeId,
}

fn page() -> Page {
    let window = Rc::new(Window::default());
    let (root, opener) = {
        let mut doc = window.document().borrow_mut();
        let body = doc.body().unwrap();
        let tree = doc.tree_mut();
        let root = tree.create_element("div");
        tree.set_attribute(root, "id", "root").unwrap();
        tree.append_child(body, root).unwrap();
        let opener = tree.create_element("button");
        tree.append_child(root, opener).unwrap();
        doc.focus(opener);
        (root, opener)
    };
    Page { window, root, opener }
}

fn props() -> ModalProps {
    ModalProps::new("Settings", "Adjust your preferences.", || {})
}

// ============================================================================
// MOUNT
// ============================================================================

#[test]
fn test_portal_is_last_body_child() {
    let page = page();
    let dialog = ModalDialog::open(&page.window, props()).unwrap();

    let doc = page.window.document().borrow();
    let tree = doc.tree();
    let body = doc.body().unwrap();
    let container = dialog.portal_container();
    assert_eq!(tree.last_child(body), Some(container));
    assert_eq!(tree.style_property(container, "position"), Some("relative"));
    assert_eq!(tree.style_property(container, "z-index"), Some("1"));
    assert_eq!(tree.parent(page.root), Some(body));
}

#[test]
fn test_chrome_locked_while_open() {
    let page = page();
    let _dialog = ModalDialog::open(&page.window, props()).unwrap();

    let doc = page.window.document().borrow();
    let body = doc.body().unwrap();
    assert_eq!(doc.tree().style_property(body, "overflow"), Some("hidden"));
    assert_eq!(doc.tree().get_attribute(page.root, "aria-hidden"), Some("true"));
}

#[test]
fn test_exposes_name_and_description() {
    let page = page();
    let dialog = ModalDialog::open(&page.window, props()).unwrap();

    let doc = page.window.document().borrow();
    assert_eq!(accessible_name(&doc, dialog.dialog_element()), "Settings");
    assert_eq!(
        accessible_description(&doc, dialog.dialog_element()),
        "Adjust your preferences."
    );
    assert_eq!(accessible_name(&doc, dialog.close_button()), "Close dialog");
    assert!(audit_dialog(&doc, dialog.dialog_element()).is_empty());
}

#[test]
fn test_content_rendered_after_description() {
    let page = page();
    let dialog = ModalDialog::open(
        &page.window,
        props().with_content(|tree, parent| {
            let save = tree.create_element("button");
            let label = tree.create_text("Save");
            tree.append_child(save, label)?;
            tree.append_child(parent, save)?;
            Ok(())
        }),
    )
    .unwrap();

    let doc = page.window.document().borrow();
    let children: Vec<NodeId> = doc
        .tree()
        .children(dialog.body_element())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(children.len(), 4);
    assert_eq!(children[2], dialog.description_element());
    assert_eq!(doc.tree().text_content(children[3]), "Save");
}

#[test]
fn test_custom_config() {
    let page = page();
    let config = ModalConfig {
        root_id: "app".to_string(),
        close_label: "Dismiss".to_string(),
        ..ModalConfig::default()
    };
    let dialog = ModalDialog::open_with_config(&page.window, props(), &config).unwrap();

    let doc = page.window.document().borrow();
    assert_eq!(doc.tree().get_attribute(dialog.close_button(), "aria-label"), Some("Dismiss"));
    // #root is not the configured root, so it stays exposed
    assert_eq!(doc.tree().get_attribute(page.root, "aria-hidden"), None);
}

#[test]
fn test_missing_body_fails_without_side_effects() {
    let window = Rc::new(Window::new(Document::empty("about:blank")));
    let err = ModalDialog::open(&window, props()).unwrap_err();
    assert!(matches!(err, ModalError::MissingBody));
    assert_eq!(window.keydown_listener_count(), 0);
    assert_eq!(window.click_listener_count(), 0);
}

#[test]
fn test_open_while_document_borrowed() {
    let page = page();
    {
        let held = page.window.document().borrow();
        let err = ModalDialog::open(&page.window, props()).unwrap_err();
        assert!(matches!(err, ModalError::DocumentBusy));
        assert_eq!(held.tree().get_attribute(page.root, "aria-hidden"), None);
    }
    assert_eq!(page.window.keydown_listener_count(), 0);
    assert_eq!(page.window.click_listener_count(), 0);

    let doc = page.window.document().borrow();
    assert_eq!(doc.tree().children(doc.body().unwrap()).count(), 1);
    assert!(doc.has_focus(page.opener));
}

#[test]
fn test_missing_root_tolerated() {
    let window = Rc::new(Window::default());
    let dialog = ModalDialog::open(&window, props()).unwrap();
    assert!(window.document().borrow().has_focus(dialog.close_button()));
    dialog.close();
    let doc = window.document().borrow();
    assert_eq!(doc.tree().style_property(doc.body().unwrap(), "overflow"), None);
}

// ============================================================================
// TEARDOWN
// ============================================================================

#[test]
fn test_close_reverts_everything() {
    let page = page();
    let dialog = ModalDialog::open(&page.window, props()).unwrap();
    let container = dialog.portal_container();
    assert_eq!(page.window.keydown_listener_count(), 1);
    assert_eq!(page.window.click_listener_count(), 1);

    dialog.close();

    let doc = page.window.document().borrow();
    let body = doc.body().unwrap();
    assert!(!doc.tree().is_connected(container));
    assert_eq!(doc.tree().style_property(body, "overflow"), None);
    assert_eq!(doc.tree().get_attribute(page.root, "aria-hidden"), None);
    assert!(!doc.tree().element(page.root).unwrap().has_attr("aria-hidden"));
    assert_eq!(page.window.keydown_listener_count(), 0);
    assert_eq!(page.window.click_listener_count(), 0);
}

#[test]
fn test_prior_overflow_restored() {
    let page = page();
    {
        let mut doc = page.window.document().borrow_mut();
        let body = doc.body().unwrap();
        doc.tree_mut().set_style_property(body, "overflow", "auto").unwrap();
    }

    let dialog = ModalDialog::open(&page.window, props()).unwrap();
    drop(dialog);

    let doc = page.window.document().borrow();
    assert_eq!(doc.tree().style_property(doc.body().unwrap(), "overflow"), Some("auto"));
}

#[test]
fn test_focus_restored_to_opener() {
    let page = page();
    let dialog = ModalDialog::open(&page.window, props()).unwrap();
    assert_eq!(dialog.session().prior_focus(), Some(page.opener));
    assert!(!page.window.document().borrow().has_focus(page.opener));

    dialog.close();
    assert!(page.window.document().borrow().has_focus(page.opener));
}

#[test]
fn test_removed_opener_skipped() {
    let page = page();
    let dialog = ModalDialog::open(&page.window, props()).unwrap();
    let close_button = dialog.close_button();
    {
        let mut doc = page.window.document().borrow_mut();
        doc.tree_mut().remove_child(page.root, page.opener).unwrap();
    }

    dialog.close();

    let doc = page.window.document().borrow();
    assert!(!doc.has_focus(page.opener));
    assert!(!doc.tree().is_connected(close_button));
    assert_eq!(doc.active_element(), doc.body());
}

#[test]
fn test_close_button_requests_close() {
    let page = page();
    let closes = Rc::new(Cell::new(0));
    let counter = Rc::clone(&closes);
    let dialog = ModalDialog::open(
        &page.window,
        ModalProps::new("T", "D", move || counter.set(counter.get() + 1)),
    )
    .unwrap();

    assert!(page.window.click(dialog.close_button()));
    assert_eq!(closes.get(), 1);
    assert!(dialog.is_open());
}

#[test]
fn test_drop_from_inside_on_close() {
    let page = page();
    let slot: Rc<RefCell<Option<ModalDialog>>> = Rc::new(RefCell::new(None));
    let owner = Rc::clone(&slot);
    let dialog = ModalDialog::open(
        &page.window,
        ModalProps::new("T", "D", move || {
            owner.borrow_mut().take();
        }),
    )
    .unwrap();
    let close_button = dialog.close_button();
    *slot.borrow_mut() = Some(dialog);

    page.window.press_key("Escape");
    assert!(slot.borrow().is_none());
    assert_eq!(page.window.keydown_listener_count(), 0);
    assert!(page.window.document().borrow().has_focus(page.opener));

    // Listener is gone; a second press is ignored
    page.window.press_key("Escape");
    assert!(!page.window.click(close_button));
}

#[test]
fn test_reopen_after_close() {
    let page = page();
    for _ in 0..3 {
        let dialog = ModalDialog::open(&page.window, props()).unwrap();
        assert!(page.window.document().borrow().has_focus(dialog.close_button()));
        dialog.close();
    }
    let doc = page.window.document().borrow();
    assert_eq!(doc.tree().children(doc.body().unwrap()).count(), 1);
    assert!(doc.has_focus(page.opener));
    assert_eq!(page.window.keydown_listener_count(), 0);
}
