//! fOS Accessibility
//!
//! Accessibility APIs over `fos-dom` documents.
//!
//! Features:
//! - ARIA roles, states, properties
//! - Accessible name and description
//! - Tab order and focus traps
//! - Modal dialog audit

pub mod aria;
pub mod focus;
pub mod name;
pub mod audit;

pub use aria::{AriaRole, AriaAttributes};
pub use focus::{
    FocusableSet, FocusDirection, FocusTrap, TabIndex,
    is_disabled, is_natively_focusable, is_tabbable,
};
pub use name::{accessible_name, accessible_description};
pub use audit::{audit_dialog, A11yIssue, IssueSeverity};
