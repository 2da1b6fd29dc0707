use crate::pathway::PathwayType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node inside a [`NodeTable`](super::NodeTable).
pub type NodeId = String;

/// An informational requirement attached to a node (name, legal citation,
/// condition text). Displayed to the user, never evaluated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub name: String,
    pub citation: String,
    pub condition: String,
}

/// A statutory bar to eligibility. Informational, like [`Requirement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalBar {
    pub name: String,
    pub citation: String,
    pub condition: String,
}

/// An exception that can lift a bar or requirement. Informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exception {
    pub name: String,
    pub citation: String,
    pub condition: String,
}

/// The final disposition an outcome node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disposition {
    /// Already a U.S. citizen (by birth, acquisition, or derivation).
    AlreadyCitizen,
    /// Eligible to apply for naturalization now.
    EligibleNow,
    /// Not eligible yet; a waiting period or prerequisite remains.
    NotYetEligible,
    /// The situation needs individual legal review before filing.
    NeedsLegalReview,
}

/// One step in the eligibility graph.
///
/// Each variant carries only the fields that node kind actually uses:
/// decision nodes branch on a yes/no answer, every other non-terminal kind
/// progresses linearly through `next`, and outcomes have no successors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// The single entry point of the graph.
    Entry { id: NodeId, next: Vec<NodeId> },

    /// A yes/no question put to the user.
    Decision {
        id: NodeId,
        question: String,
        on_yes: NodeId,
        on_no: NodeId,
    },

    /// A list of requirements the user should review before continuing.
    Requirement {
        id: NodeId,
        title: String,
        requirements: Vec<Requirement>,
        next: Vec<NodeId>,
    },

    /// Statutory bars that apply at this point of the pathway.
    Bar {
        id: NodeId,
        title: String,
        bars: Vec<LegalBar>,
        next: Vec<NodeId>,
    },

    /// Exceptions that may lift a previously shown bar or requirement.
    Exception {
        id: NodeId,
        title: String,
        exceptions: Vec<Exception>,
        next: Vec<NodeId>,
    },

    /// Marks the concrete pathway the traversal has committed to.
    Pathway {
        id: NodeId,
        title: String,
        pathway: PathwayType,
        next: Vec<NodeId>,
    },

    /// A sequence of procedural steps (forms, biometrics, interview, oath).
    Process {
        id: NodeId,
        title: String,
        steps: Vec<String>,
        next: Vec<NodeId>,
    },

    /// A waiting period before the user can continue down this pathway.
    Wait {
        id: NodeId,
        title: String,
        duration: Option<String>,
        next: Vec<NodeId>,
    },

    /// A terminal eligibility result.
    Outcome {
        id: NodeId,
        title: String,
        disposition: Disposition,
    },
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Entry { id, .. }
            | Node::Decision { id, .. }
            | Node::Requirement { id, .. }
            | Node::Bar { id, .. }
            | Node::Exception { id, .. }
            | Node::Pathway { id, .. }
            | Node::Process { id, .. }
            | Node::Wait { id, .. }
            | Node::Outcome { id, .. } => id,
        }
    }

    /// Whether the node is a terminal outcome.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Outcome { .. })
    }

    /// Whether the node branches on a yes/no answer.
    pub fn is_decision(&self) -> bool {
        matches!(self, Node::Decision { .. })
    }

    /// Every node id this node can transition to.
    pub fn successors(&self) -> Vec<&NodeId> {
        match self {
            Node::Decision { on_yes, on_no, .. } => vec![on_yes, on_no],
            Node::Entry { next, .. }
            | Node::Requirement { next, .. }
            | Node::Bar { next, .. }
            | Node::Exception { next, .. }
            | Node::Pathway { next, .. }
            | Node::Process { next, .. }
            | Node::Wait { next, .. } => next.iter().collect(),
            Node::Outcome { .. } => Vec::new(),
        }
    }

    pub(crate) fn kind_name(&self) -> &'static str {
        match self {
            Node::Entry { .. } => "entry",
            Node::Decision { .. } => "decision",
            Node::Requirement { .. } => "requirement",
            Node::Bar { .. } => "bar",
            Node::Exception { .. } => "exception",
            Node::Pathway { .. } => "pathway",
            Node::Process { .. } => "process",
            Node::Wait { .. } => "wait",
            Node::Outcome { .. } => "outcome",
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id(), self.kind_name())
    }
}
