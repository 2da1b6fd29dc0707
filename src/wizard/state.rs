use crate::graph::NodeId;
use serde::{Deserialize, Serialize};

/// The choice recorded for a single transition.
///
/// `Yes`/`No` come from decision nodes; `Continue` records the unconditional
/// step taken through a linear node. Keeping a record for every transition
/// preserves the invariant `answers.len() == history.len() - 1` regardless
/// of which node kinds a path visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice {
    Yes,
    No,
    Continue,
}

impl Choice {
    pub fn from_bool(value: bool) -> Self {
        if value { Choice::Yes } else { Choice::No }
    }

    /// The boolean answer, if this was a decision transition.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Choice::Yes => Some(true),
            Choice::No => Some(false),
            Choice::Continue => None,
        }
    }
}

/// One recorded transition: the node that was left and the choice made there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub node_id: NodeId,
    pub choice: Choice,
}

/// Per-session traversal position, owned exclusively by one wizard instance.
///
/// Invariants (upheld by the engine, asserted by the test suite):
/// `history` is never empty, `current == history.last()`, and
/// `answers.len() == history.len() - 1`.
///
/// All transitions are value-to-value: the engine never mutates a state in
/// place, which makes "back" plain truncation and lets a caller keep old
/// states around for free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalState {
    current: NodeId,
    history: Vec<NodeId>,
    answers: Vec<AnswerRecord>,
}

impl TraversalState {
    /// A fresh state positioned at `entry_id` with no recorded answers.
    pub fn at_entry(entry_id: impl Into<NodeId>) -> Self {
        let entry_id = entry_id.into();
        Self {
            current: entry_id.clone(),
            history: vec![entry_id],
            answers: Vec::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn history(&self) -> &[NodeId] {
        &self.history
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Number of transitions taken so far.
    pub fn steps_taken(&self) -> usize {
        self.answers.len()
    }

    /// Whether the state sits at the entry node with nothing to undo.
    pub fn at_start(&self) -> bool {
        self.history.len() == 1
    }

    /// Returns a new state advanced to `next`, recording `choice` for the
    /// node being left.
    pub(crate) fn stepped(&self, next: NodeId, choice: Choice) -> Self {
        let mut history = self.history.clone();
        let mut answers = self.answers.clone();
        answers.push(AnswerRecord {
            node_id: self.current.clone(),
            choice,
        });
        history.push(next.clone());
        Self {
            current: next,
            history,
            answers,
        }
    }

    /// Returns a new state with the last transition undone. The caller has
    /// already checked `!at_start()`.
    pub(crate) fn popped(&self) -> Self {
        let mut history = self.history.clone();
        let mut answers = self.answers.clone();
        history.pop();
        answers.pop();
        let current = history
            .last()
            .cloned()
            .unwrap_or_else(|| self.history[0].clone());
        Self {
            current,
            history,
            answers,
        }
    }
}
