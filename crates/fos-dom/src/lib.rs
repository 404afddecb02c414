//! fOS DOM - Document Object Model
//!
//! Arena-based DOM tree with the host pieces a modal surface talks to:
//! attributes, inline style, the active element and window-level input
//! listeners.

mod node;
mod tree;
mod document;
mod style;
mod error;
mod events;
mod window;

pub use node::{Node, NodeData, ElementData, TextData, Attribute};
pub use tree::{DomTree, Children, Descendants};
pub use document::Document;
pub use style::InlineStyle;
pub use error::{DomError, DomResult};
pub use events::{Key, KeyboardEvent};
pub use window::{Window, DocumentHandle, ListenerId};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Check if this ID refers to a node
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Arena index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
