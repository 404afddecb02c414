//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node not found in the arena
    #[error("node {0:?} not found")]
    NotFound(NodeId),

    /// Insertion would create a cycle or put children under a leaf
    #[error("hierarchy request error: cannot insert {child:?} under {parent:?}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// Node is not a child of the given parent
    #[error("node {child:?} is not a child of {parent:?}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// Operation requires an element node
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DomError::NotAChild { parent: NodeId(1), child: NodeId(7) };
        assert_eq!(err.to_string(), "node NodeId(7) is not a child of NodeId(1)");
        assert_eq!(DomError::NotFound(NodeId(3)).to_string(), "node NodeId(3) not found");
    }
}
