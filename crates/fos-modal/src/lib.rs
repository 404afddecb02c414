//! fOS Modal
//!
//! Accessible modal dialog for `fos-dom` documents.
//!
//! Features:
//! - Portal mounting at the end of `<body>`
//! - Focus trap with Tab / Shift+Tab wrap-around
//! - Escape-to-close request
//! - Background scroll lock and `aria-hidden` on the app root
//! - Focus restored to the opener on close

pub mod config;
pub mod error;
pub mod portal;
pub mod chrome;
pub mod dialog;

pub use config::{ModalConfig, PORTAL_Z_INDEX};
pub use error::{ModalError, ModalResult};
pub use portal::Portal;
pub use chrome::ChromeLock;
pub use dialog::{CloseCallback, DialogSession, ModalDialog, ModalProps};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
