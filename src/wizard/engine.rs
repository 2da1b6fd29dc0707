use super::state::{Choice, TraversalState};
use crate::error::TraversalError;
use crate::graph::{Disposition, Node, NodeId, NodeTable};

/// The result of applying one transition to a traversal state.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The traversal moved to another interactive node.
    Continue(TraversalState),
    /// The traversal resolved to a terminal outcome. The outcome node is
    /// not pushed onto the history; the final state is the one the user
    /// answered from, so "back from the results page" works unchanged.
    Complete(Terminal),
}

/// The terminal node a traversal resolved to, together with the state whose
/// answer produced it. Pathway classification happens on top of this (see
/// [`super::results`]); the engine itself only walks the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    pub outcome_id: NodeId,
    pub title: String,
    pub disposition: Disposition,
    pub final_state: TraversalState,
}

/// A fresh state positioned at the table's entry node. The canonical initial
/// state: calling this repeatedly always yields the same value.
pub fn reset(table: &NodeTable) -> TraversalState {
    TraversalState::at_entry(table.entry_id())
}

/// Applies a yes/no answer to the current decision node.
///
/// Branch targets are mandatory fields of a decision node, so "no branch
/// defined" is unrepresentable; a branch that names a node missing from the
/// table is an authoring defect surfaced as `UnknownNode`.
pub fn answer(
    table: &NodeTable,
    state: &TraversalState,
    value: bool,
) -> Result<Step, TraversalError> {
    let current = lookup(table, state.current())?;
    let next_id = match current {
        Node::Decision { on_yes, on_no, .. } => {
            if value {
                on_yes.clone()
            } else {
                on_no.clone()
            }
        }
        other => return Err(TraversalError::NotADecision(other.id().to_string())),
    };
    transition(table, state, next_id, Choice::from_bool(value))
}

/// Advances through a linear node (entry, requirement, bar, exception,
/// pathway, process, wait) by taking its first successor unconditionally.
pub fn advance(table: &NodeTable, state: &TraversalState) -> Result<Step, TraversalError> {
    let current = lookup(table, state.current())?;
    let next_id = match current {
        Node::Decision { id, .. } => return Err(TraversalError::NotLinear(id.clone())),
        Node::Outcome { id, .. } => {
            return Err(TraversalError::SteppedIntoOutcome(id.clone()));
        }
        other => other
            .successors()
            .first()
            .map(|id| (*id).clone())
            // validate() rejects dead ends, but the table may not have been
            // validated; surface the defect instead of panicking.
            .ok_or_else(|| TraversalError::NoSuccessor(other.id().to_string()))?,
    };
    transition(table, state, next_id, Choice::Continue)
}

/// Undoes the last transition. At the entry node this is a navigation
/// boundary: the UI disables "back" rather than treating it as a failure.
pub fn back(state: &TraversalState) -> Result<TraversalState, TraversalError> {
    if state.at_start() {
        return Err(TraversalError::AtStart);
    }
    Ok(state.popped())
}

fn transition(
    table: &NodeTable,
    state: &TraversalState,
    next_id: NodeId,
    choice: Choice,
) -> Result<Step, TraversalError> {
    let next = lookup(table, &next_id)?;
    match next {
        Node::Outcome {
            id,
            title,
            disposition,
        } => Ok(Step::Complete(Terminal {
            outcome_id: id.clone(),
            title: title.clone(),
            disposition: *disposition,
            final_state: state.stepped(next_id.clone(), choice),
        })),
        _ => Ok(Step::Continue(state.stepped(next_id, choice))),
    }
}

fn lookup<'a>(table: &'a NodeTable, id: &str) -> Result<&'a Node, TraversalError> {
    table
        .get(id, id)
        .map_err(|_| TraversalError::UnknownNode(id.to_string()))
}
