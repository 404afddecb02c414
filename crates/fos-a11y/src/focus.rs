//! Focus Management
//!
//! Sequential (Tab) focus order and focus traps.
//!
//! Tab order follows the platform rules: elements with a positive
//! `tabindex` come first in ascending order (ties in document order),
//! then every `tabindex="0"` or implicitly focusable element in document
//! order. Negative `tabindex` and disabled form controls never take part.

use fos_dom::{Document, DomTree, ElementData, NodeId};

/// Tab index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabIndex {
    /// Focusable, but skipped by Tab (`tabindex` < 0)
    Skipped,
    /// Explicit positive index, visited first
    Positive(u32),
    /// `tabindex="0"` or natively focusable: visited in document order
    Document,
}

impl TabIndex {
    /// Parse a `tabindex` attribute value with the HTML integer rules:
    /// leading whitespace, an optional sign, then the leading run of digits
    /// (`"2abc"` is 2). `None` when there are no digits.
    pub fn parse(value: &str) -> Option<Self> {
        let n = parse_html_integer(value)?;
        Some(match n {
            n if n < 0 => Self::Skipped,
            0 => Self::Document,
            n => Self::Positive(u32::try_from(n).unwrap_or(u32::MAX)),
        })
    }

    /// Effective tab index of an element; `None` if it cannot take focus.
    /// An unparsable `tabindex` falls back to the element's default.
    pub fn of(element: &ElementData) -> Option<Self> {
        match element.get_attr("tabindex").and_then(Self::parse) {
            Some(index) => Some(index),
            None if is_natively_focusable(element) => Some(Self::Document),
            None => None,
        }
    }

    /// Whether Tab navigation visits this element
    pub fn is_sequential(&self) -> bool {
        !matches!(self, Self::Skipped)
    }

    fn order_key(&self) -> (u8, u32) {
        match self {
            Self::Positive(n) => (0, *n),
            Self::Document => (1, 0),
            Self::Skipped => (2, 0),
        }
    }
}

fn parse_html_integer(value: &str) -> Option<i64> {
    let rest = value.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Natively focusable elements: links and areas with `href`, buttons,
/// non-hidden inputs, selects and textareas
pub fn is_natively_focusable(element: &ElementData) -> bool {
    match element.tag_name() {
        "a" | "area" => element.has_attr("href"),
        "button" | "select" | "textarea" => true,
        "input" => !element
            .get_attr("type")
            .is_some_and(|t| t.eq_ignore_ascii_case("hidden")),
        _ => false,
    }
}

/// Form controls with the `disabled` attribute
pub fn is_disabled(element: &ElementData) -> bool {
    matches!(element.tag_name(), "button" | "input" | "select" | "textarea")
        && element.has_attr("disabled")
}

/// Whether Tab navigation can land on this element
pub fn is_tabbable(element: &ElementData) -> bool {
    !is_disabled(element) && TabIndex::of(element).is_some_and(|t| t.is_sequential())
}

/// Ordered set of tabbable elements inside a container.
///
/// Computed fresh from the tree each time; holding on to one across DOM
/// mutations gives stale answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusableSet {
    elements: Vec<NodeId>,
}

impl FocusableSet {
    /// Collect tabbable descendants of `container` (the container itself is
    /// never included) in tab order
    pub fn compute(tree: &DomTree, container: NodeId) -> Self {
        let mut ranked: Vec<((u8, u32), NodeId)> = tree
            .descendants(container)
            .filter_map(|(id, node)| {
                let element = node.as_element()?;
                if is_disabled(element) {
                    return None;
                }
                let index = TabIndex::of(element)?;
                index.is_sequential().then_some((index.order_key(), id))
            })
            .collect();

        // Stable sort keeps document order within equal indices
        ranked.sort_by_key(|(key, _)| *key);

        Self {
            elements: ranked.into_iter().map(|(_, id)| id).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn first(&self) -> Option<NodeId> {
        self.elements.first().copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.elements.last().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.elements.iter().copied()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.elements.contains(&id)
    }

    /// Index of an element in tab order
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.elements.iter().position(|&e| e == id)
    }

    /// Element after `current`, wrapping to the first when `current` is the
    /// last or is not in the set
    pub fn next_after(&self, current: Option<NodeId>) -> Option<NodeId> {
        match current.and_then(|c| self.position(c)) {
            Some(i) if i + 1 < self.elements.len() => Some(self.elements[i + 1]),
            _ => self.first(),
        }
    }

    /// Element before `current`, wrapping to the last when `current` is the
    /// first or is not in the set
    pub fn prev_before(&self, current: Option<NodeId>) -> Option<NodeId> {
        match current.and_then(|c| self.position(c)) {
            Some(i) if i > 0 => Some(self.elements[i - 1]),
            _ => self.last(),
        }
    }
}

/// Tab direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Forward,
    Backward,
}

impl FocusDirection {
    /// `Shift+Tab` moves backward
    pub fn from_shift(shift: bool) -> Self {
        if shift { Self::Backward } else { Self::Forward }
    }
}

/// Focus trap: keeps Tab navigation cycling inside one container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTrap {
    container: NodeId,
}

impl FocusTrap {
    pub fn new(container: NodeId) -> Self {
        Self { container }
    }

    /// Trapping container
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Current tab order inside the container
    pub fn focusable(&self, doc: &Document) -> FocusableSet {
        FocusableSet::compute(doc.tree(), self.container)
    }

    /// Focus the first element in tab order. Does nothing when the container
    /// has no tabbable descendants.
    pub fn focus_first(&self, doc: &mut Document) -> Option<NodeId> {
        let Some(target) = self.focusable(doc).first() else {
            tracing::debug!("No focusable elements in {:?}", self.container);
            return None;
        };
        doc.focus(target).then_some(target)
    }

    /// Move focus one step in `direction`, wrapping at either end. When focus
    /// is outside the set (or on an element that has since been removed),
    /// forward lands on the first element and backward on the last.
    pub fn cycle(&self, doc: &mut Document, direction: FocusDirection) -> Option<NodeId> {
        let set = self.focusable(doc);
        let current = doc.focused_element();
        let target = match direction {
            FocusDirection::Forward => set.next_after(current),
            FocusDirection::Backward => set.prev_before(current),
        }?;
        tracing::trace!("Focus trap {:?}: {:?} -> {:?}", direction, current, target);
        doc.focus(target).then_some(target)
    }
}
