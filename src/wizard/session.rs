use super::engine::{self, Step, Terminal};
use super::results::{Classifier, PathwayResult};
use super::state::TraversalState;
use crate::error::TraversalError;
use crate::graph::{Node, NodeTable};
use crate::pathway::PathwayType;
use std::sync::Arc;

/// Where a session currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    /// Walking the graph; the contained state is the session's position.
    Traversing(TraversalState),
    /// A terminal outcome was reached and classified.
    Completed {
        terminal: Terminal,
        results: Vec<PathwayResult>,
    },
}

/// An owning wizard session: the {Traversing, Completed} state machine over
/// the pure engine operations.
///
/// The node table and classifier are shared immutable data; every session
/// owns only its own [`TraversalState`]. The only transition out of
/// `Completed` is [`reset`](WizardSession::reset).
#[derive(Debug, Clone)]
pub struct WizardSession {
    table: Arc<NodeTable>,
    classifier: Arc<Classifier>,
    phase: Phase,
    track: Option<PathwayType>,
}

impl WizardSession {
    /// Starts a session positioned at the table's entry node. Call
    /// [`advance_to_decision`](WizardSession::advance_to_decision) to step
    /// through the entry to the first question.
    pub fn start(table: Arc<NodeTable>, classifier: Arc<Classifier>) -> Self {
        let phase = Phase::Traversing(engine::reset(&table));
        Self {
            table,
            classifier,
            phase,
            track: None,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// The pathway the session has committed to so far, if a disambiguating
    /// branch has been taken.
    pub fn track(&self) -> Option<PathwayType> {
        self.track
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.phase, Phase::Completed { .. })
    }

    /// The node the session is waiting on, if still traversing.
    pub fn current_node(&self) -> Result<&Node, TraversalError> {
        match &self.phase {
            Phase::Traversing(state) => self
                .table
                .get(state.current(), state.current())
                .map_err(|_| TraversalError::UnknownNode(state.current().to_string())),
            Phase::Completed { .. } => Err(TraversalError::SessionComplete),
        }
    }

    /// Answers the current decision node.
    pub fn answer(&mut self, value: bool) -> Result<&Phase, TraversalError> {
        let state = self.traversing_state()?;
        let step = engine::answer(&self.table, state, value)?;
        self.apply(step);
        Ok(&self.phase)
    }

    /// Advances through the current linear node.
    pub fn advance(&mut self) -> Result<&Phase, TraversalError> {
        let state = self.traversing_state()?;
        let step = engine::advance(&self.table, state)?;
        self.apply(step);
        Ok(&self.phase)
    }

    /// Advances through consecutive linear nodes until the session reaches a
    /// decision node or completes. Convenience for UIs that render
    /// informational nodes inline rather than as separate steps.
    pub fn advance_to_decision(&mut self) -> Result<&Phase, TraversalError> {
        while !self.is_complete() && !self.current_node()?.is_decision() {
            self.advance()?;
        }
        Ok(&self.phase)
    }

    /// Undoes the last transition. Blocked at the first step.
    pub fn back(&mut self) -> Result<&Phase, TraversalError> {
        let state = self.traversing_state()?;
        let previous = engine::back(state)?;
        self.track = self.classifier.track_for(previous.answers());
        self.phase = Phase::Traversing(previous);
        Ok(&self.phase)
    }

    /// Discards all progress and returns to the canonical initial state
    /// (positioned at the entry, no answers). Valid in any phase.
    pub fn reset(&mut self) -> &Phase {
        self.track = None;
        self.phase = Phase::Traversing(engine::reset(&self.table));
        &self.phase
    }

    fn traversing_state(&self) -> Result<&TraversalState, TraversalError> {
        match &self.phase {
            Phase::Traversing(state) => Ok(state),
            Phase::Completed { .. } => Err(TraversalError::SessionComplete),
        }
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::Continue(state) => {
                // First matching rule wins and stays: once a disambiguating
                // branch is taken the track never silently changes.
                if self.track.is_none() {
                    self.track = self.classifier.track_for(state.answers());
                }
                self.phase = Phase::Traversing(state);
            }
            Step::Complete(terminal) => {
                if self.track.is_none() {
                    self.track = self.classifier.track_for(terminal.final_state.answers());
                }
                let results = self.classifier.classify(&terminal);
                self.phase = Phase::Completed { terminal, results };
            }
        }
    }
}
