//! Traversal engine tests: transition semantics, invariants, validation.
mod common;
use common::*;

use civica::graph::MAX_TRAVERSAL_DEPTH;
use civica::prelude::*;
use civica::wizard::engine;
use std::sync::Arc;

#[test]
fn test_answer_walks_yes_branch() {
    let table = create_small_table();
    let state = engine::reset(&table);
    let state = match engine::advance(&table, &state).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => panic!("entry should not complete"),
    };
    assert_eq!(state.current(), "q_first");

    match engine::answer(&table, &state, true).unwrap() {
        Step::Continue(state) => assert_eq!(state.current(), "q_second"),
        Step::Complete(_) => panic!("q_first yes-branch leads to another decision"),
    }
}

#[test]
fn test_answer_no_reaches_outcome_without_pushing_a_step() {
    let table = create_small_table();
    let state = engine::reset(&table);
    let state = match engine::advance(&table, &state).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => panic!("entry should not complete"),
    };

    match engine::answer(&table, &state, false).unwrap() {
        Step::Complete(terminal) => {
            assert_eq!(terminal.outcome_id, "outcome_bad");
            assert_eq!(terminal.disposition, Disposition::NotYetEligible);
            // The full trace, including the final answer, is recorded.
            assert_eq!(terminal.final_state.answers().len(), 2);
        }
        Step::Continue(_) => panic!("no-branch should terminate"),
    }
}

#[test]
fn test_back_undoes_answer_exactly() {
    let table = create_small_table();
    let state = engine::reset(&table);
    let state = match engine::advance(&table, &state).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => unreachable!(),
    };

    for value in [true, false] {
        if let Step::Continue(next) = engine::answer(&table, &state, value).unwrap() {
            let undone = engine::back(&next).unwrap();
            assert_eq!(undone, state, "back(answer(s, {value})) must equal s");
        }
    }
}

#[test]
fn test_back_at_start_is_an_error() {
    let table = create_small_table();
    let state = engine::reset(&table);
    assert!(state.at_start());
    assert_eq!(engine::back(&state), Err(TraversalError::AtStart));
}

#[test]
fn test_reset_is_canonical() {
    let table = create_small_table();
    let first = engine::reset(&table);
    // Walk somewhere, then reset again: identical initial value.
    let walked = match engine::advance(&table, &first).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => unreachable!(),
    };
    assert_ne!(walked, first);
    assert_eq!(engine::reset(&table), first);
    assert_eq!(first.history(), &["entry".to_string()]);
    assert!(first.answers().is_empty());
}

#[test]
fn test_state_invariants_hold_along_every_transition() {
    let table = create_small_table();
    let mut stack = vec![engine::reset(&table)];
    while let Some(state) = stack.pop() {
        assert_eq!(state.current(), state.history().last().unwrap().as_str());
        assert_eq!(state.answers().len(), state.history().len() - 1);

        let node = table.get(state.current(), "test").unwrap();
        if node.is_terminal() {
            continue;
        }
        if node.is_decision() {
            for value in [true, false] {
                if let Step::Continue(next) = engine::answer(&table, &state, value).unwrap() {
                    stack.push(next);
                }
            }
        } else if let Step::Continue(next) = engine::advance(&table, &state).unwrap() {
            stack.push(next);
        }
    }
}

#[test]
fn test_answer_on_linear_node_is_rejected() {
    let table = create_small_table();
    let state = engine::reset(&table);
    assert_eq!(
        engine::answer(&table, &state, true),
        Err(TraversalError::NotADecision("entry".to_string()))
    );
}

#[test]
fn test_advance_on_decision_node_is_rejected() {
    let table = create_small_table();
    let state = engine::reset(&table);
    let state = match engine::advance(&table, &state).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => unreachable!(),
    };
    assert_eq!(
        engine::advance(&table, &state),
        Err(TraversalError::NotLinear("q_first".to_string()))
    );
}

#[test]
fn test_dangling_branch_surfaces_unknown_node() {
    let table = create_dangling_table();
    let state = engine::reset(&table);
    let state = match engine::advance(&table, &state).unwrap() {
        Step::Continue(state) => state,
        Step::Complete(_) => unreachable!(),
    };
    assert_eq!(
        engine::answer(&table, &state, true),
        Err(TraversalError::UnknownNode("missing_node".to_string()))
    );
}

#[test]
fn test_validate_rejects_dangling_reference() {
    let err = create_dangling_table().validate().unwrap_err();
    match err {
        GraphError::UnknownNode {
            missing_node_id, ..
        } => assert_eq!(missing_node_id, "missing_node"),
        other => panic!("expected UnknownNode, got {other:?}"),
    }
}

#[test]
fn test_validate_rejects_cycle() {
    let err = create_cyclic_table().validate().unwrap_err();
    assert!(matches!(err, GraphError::CycleDetected(_)));
}

#[test]
fn test_duplicate_node_id_rejected_at_construction() {
    let nodes = vec![
        civica::graph::Node::Entry {
            id: "entry".to_string(),
            next: vec!["entry".to_string()],
        },
        civica::graph::Node::Entry {
            id: "entry".to_string(),
            next: vec!["entry".to_string()],
        },
    ];
    assert_eq!(
        NodeTable::new(nodes, "entry").unwrap_err(),
        GraphError::DuplicateNode("entry".to_string())
    );
}

#[test]
fn test_shipped_table_validates() {
    let table = civica::data::eligibility_table().expect("shipped table builds");
    table.validate().expect("shipped table is closed, acyclic and bounded");
}

/// Exhaustive depth-bounded walk of the shipped graph: every yes/no
/// combination must reach an outcome, and no path may exceed the depth
/// ceiling.
#[test]
fn test_shipped_table_terminates_for_all_answer_sequences() {
    let table = civica::data::eligibility_table().unwrap();
    let mut stack = vec![engine::reset(&table)];
    let mut outcomes = 0usize;

    while let Some(state) = stack.pop() {
        assert!(
            state.steps_taken() < MAX_TRAVERSAL_DEPTH,
            "path exceeded depth bound at {}",
            state.current()
        );
        let node = table.get(state.current(), "test").unwrap();
        let steps: Vec<Step> = if node.is_terminal() {
            outcomes += 1;
            continue;
        } else if node.is_decision() {
            vec![
                engine::answer(&table, &state, true).unwrap(),
                engine::answer(&table, &state, false).unwrap(),
            ]
        } else {
            vec![engine::advance(&table, &state).unwrap()]
        };
        for step in steps {
            match step {
                Step::Continue(next) => stack.push(next),
                Step::Complete(_) => outcomes += 1,
            }
        }
    }
    assert!(outcomes > 0, "at least one terminal path must exist");
}

#[test]
fn test_session_blocks_transitions_after_completion() {
    let table = Arc::new(create_small_table());
    let classifier = Arc::new(civica::data::classifier());
    let mut session = WizardSession::start(table, classifier);
    session.advance_to_decision().unwrap();
    session.answer(false).unwrap();
    assert!(session.is_complete());

    assert_eq!(session.answer(true), Err(TraversalError::SessionComplete));
    assert_eq!(session.advance(), Err(TraversalError::SessionComplete));
    assert_eq!(session.back(), Err(TraversalError::SessionComplete));

    // Reset is the only exit from Completed.
    session.reset();
    assert!(!session.is_complete());
}
