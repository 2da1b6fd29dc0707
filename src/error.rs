use thiserror::Error;

/// Errors raised while building or validating a node table.
///
/// These always indicate an authoring defect in the hand-written graph data,
/// never a runtime/user condition, so callers are expected to fail loudly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node id '{0}' is defined more than once")]
    DuplicateNode(String),

    #[error("Entry node '{0}' was not found in the table")]
    EntryNotFound(String),

    #[error("Node '{missing_node_id}' not found, but is referenced by node '{referenced_by}'")]
    UnknownNode {
        missing_node_id: String,
        referenced_by: String,
    },

    #[error("Node '{0}' has no successors and is not an outcome")]
    DeadEnd(String),

    #[error("Cycle detected through node '{0}'; the eligibility graph must be acyclic")]
    CycleDetected(String),

    #[error("Traversal from '{from}' exceeded {limit} steps without reaching an outcome")]
    UnboundedPath { from: String, limit: usize },
}

/// Errors raised while driving a traversal at runtime.
///
/// `AtStart` and `SessionComplete` are expected navigation boundaries that a
/// UI handles by disabling the action; the rest surface authoring defects
/// that slipped past validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    #[error("Current node '{0}' does not exist in the table")]
    UnknownNode(String),

    #[error("Cannot go back: already at the first step")]
    AtStart,

    #[error("The session has already reached an outcome")]
    SessionComplete,

    #[error("Node '{0}' is not a decision node; use advance() instead of answer()")]
    NotADecision(String),

    #[error("Node '{0}' is a decision node; use answer() instead of advance()")]
    NotLinear(String),

    #[error("Node '{0}' has no successor to advance to")]
    NoSuccessor(String),

    #[error("Node '{0}' is terminal; the traversal should already have completed")]
    SteppedIntoOutcome(String),
}
