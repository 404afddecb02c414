//! Example: open a confirmation dialog, Tab through it and close it
//!
//! Run with `RUST_LOG=debug` to see the portal, lock and focus traces.

use std::cell::RefCell;
use std::rc::Rc;

use fos_a11y::{accessible_name, audit_dialog};
use fos_dom::Window;
use fos_modal::{ModalDialog, ModalProps};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let window = Rc::new(Window::default());
    let opener = {
        let mut doc = window.document().borrow_mut();
        let body = doc.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
        let tree = doc.tree_mut();
        let root = tree.create_element("div");
        tree.set_attribute(root, "id", "root")?;
        tree.append_child(body, root)?;
        let opener = tree.create_element("button");
        tree.append_child(root, opener)?;
        doc.focus(opener);
        opener
    };

    let slot: Rc<RefCell<Option<ModalDialog>>> = Rc::new(RefCell::new(None));
    let owner = Rc::clone(&slot);
    let props = ModalProps::new("Discard draft?", "Your changes will be lost.", move || {
        println!("close requested");
        owner.borrow_mut().take();
    })
    .with_content(|tree, parent| {
        for label in ["Keep editing", "Discard"] {
            let button = tree.create_element("button");
            let text = tree.create_text(label);
            tree.append_child(button, text)?;
            tree.append_child(parent, button)?;
        }
        Ok(())
    });

    let dialog = ModalDialog::open(&window, props)?;
    {
        let doc = window.document().borrow();
        println!("fOS Modal v{}", fos_modal::VERSION);
        println!("dialog name: {}", accessible_name(&doc, dialog.dialog_element()));
        println!("audit issues: {}", audit_dialog(&doc, dialog.dialog_element()).len());
    }
    *slot.borrow_mut() = Some(dialog);

    for _ in 0..4 {
        window.press_key("Tab");
        let doc = window.document().borrow();
        if let Some(focused) = doc.focused_element() {
            println!("Tab -> {:?} \"{}\"", focused, accessible_name(&doc, focused));
        }
    }

    window.press_key("Escape");
    let restored = window.document().borrow().has_focus(opener);
    println!("dialog open: {}, focus restored: {}", slot.borrow().is_some(), restored);

    Ok(())
}
