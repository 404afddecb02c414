//! Modal dialog audit
//!
//! Checks the assistive-technology contract of a modal surface: role,
//! `aria-modal`, resolvable and unique label references, and named
//! controls.

use fos_dom::{Document, NodeId};

use crate::aria::AriaAttributes;
use crate::focus::FocusableSet;
use crate::name::{accessible_description, accessible_name};

/// Issue severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IssueSeverity {
    /// Should fix for better accessibility
    Warning,
    /// Must fix - fails WCAG AA
    Error,
}

/// Accessibility issue found on a dialog
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum A11yIssue {
    #[error("{element:?} is not exposed with a dialog role")]
    NotADialog { element: NodeId },

    #[error("{element:?} is missing aria-modal=\"true\"")]
    NotModal { element: NodeId },

    #[error("{element:?} is hidden from assistive technology")]
    HiddenDialog { element: NodeId },

    #[error("{element:?} has no accessible name")]
    MissingName { element: NodeId },

    #[error("{element:?} has no accessible description")]
    MissingDescription { element: NodeId },

    #[error("{attribute} on {element:?} references missing id \"{id}\"")]
    DanglingReference { element: NodeId, attribute: &'static str, id: String },

    #[error("id \"{id}\" is used by {count} elements")]
    DuplicateId { id: String, count: usize },

    #[error("focusable {element:?} has no accessible name")]
    UnlabelledControl { element: NodeId },
}

impl A11yIssue {
    /// Get severity of this issue
    pub fn severity(&self) -> IssueSeverity {
        match self {
            Self::MissingDescription { .. } => IssueSeverity::Warning,
            _ => IssueSeverity::Error,
        }
    }

    /// Get WCAG criteria this affects
    pub fn wcag_criteria(&self) -> &'static str {
        match self {
            Self::NotADialog { .. }
            | Self::NotModal { .. }
            | Self::HiddenDialog { .. }
            | Self::MissingName { .. }
            | Self::UnlabelledControl { .. } => "4.1.2 Name, Role, Value",
            Self::MissingDescription { .. } | Self::DanglingReference { .. } => {
                "1.3.1 Info and Relationships"
            }
            Self::DuplicateId { .. } => "4.1.1 Parsing",
        }
    }
}

/// Audit a modal dialog container. An empty result means no issues.
pub fn audit_dialog(doc: &Document, dialog: NodeId) -> Vec<A11yIssue> {
    let mut issues = Vec::new();
    let Some(element) = doc.tree().element(dialog) else {
        issues.push(A11yIssue::NotADialog { element: dialog });
        return issues;
    };
    let aria = AriaAttributes::from_element(element);

    if !aria.role.is_some_and(|r| r.is_dialog()) {
        issues.push(A11yIssue::NotADialog { element: dialog });
    }
    if !aria.is_modal() {
        issues.push(A11yIssue::NotModal { element: dialog });
    }
    if aria.is_hidden() {
        issues.push(A11yIssue::HiddenDialog { element: dialog });
    }

    for (attribute, ids) in [
        ("aria-labelledby", aria.labelled_by()),
        ("aria-describedby", aria.described_by()),
    ] {
        for id in ids {
            match doc.elements_with_id(id).len() {
                0 => issues.push(A11yIssue::DanglingReference {
                    element: dialog,
                    attribute,
                    id: id.clone(),
                }),
                1 => {}
                count => issues.push(A11yIssue::DuplicateId { id: id.clone(), count }),
            }
        }
    }

    if accessible_name(doc, dialog).is_empty() {
        issues.push(A11yIssue::MissingName { element: dialog });
    }
    if accessible_description(doc, dialog).is_empty() {
        issues.push(A11yIssue::MissingDescription { element: dialog });
    }

    for control in FocusableSet::compute(doc.tree(), dialog).iter() {
        let is_widget = doc
            .tree()
            .element(control)
            .and_then(|e| AriaAttributes::from_element(e).role)
            .is_some_and(|r| r.is_widget());
        if is_widget && accessible_name(doc, control).is_empty() {
            issues.push(A11yIssue::UnlabelledControl { element: control });
        }
    }

    issues
}
