//! Modal errors

use std::cell::RefMut;

use fos_dom::{Document, DocumentHandle, DomError};

/// Result type for modal operations
pub type ModalResult<T> = Result<T, ModalError>;

/// Errors raised while mounting a dialog. Teardown never fails.
#[derive(Debug, thiserror::Error)]
pub enum ModalError {
    /// The document has no `<body>` to mount into
    #[error("document has no body to mount the dialog into")]
    MissingBody,

    /// The document is already borrowed elsewhere
    #[error("document is borrowed; cannot mount while it is in use")]
    DocumentBusy,

    /// Underlying DOM operation failed
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

/// Mutably borrow the document, failing instead of panicking when it is in use
pub(crate) fn borrow_document(document: &DocumentHandle) -> ModalResult<RefMut<'_, Document>> {
    document.try_borrow_mut().map_err(|_| ModalError::DocumentBusy)
}
