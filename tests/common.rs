//! Common test utilities for building node tables, question banks and
//! household records.
use civica::civics::{AnswerSource, QuestionSeed};
use civica::graph::{Disposition, Node, NodeTable};
use civica::prelude::*;
use std::collections::HashSet;

/// A minimal valid table:
///
/// ```text
/// entry -> q_first -(yes)-> q_second -(yes)-> outcome_good
///                \-(no)--> outcome_bad       \-(no)-> outcome_bad
/// ```
#[allow(dead_code)]
pub fn create_small_table() -> NodeTable {
    NodeTable::new(
        vec![
            Node::Entry {
                id: "entry".to_string(),
                next: vec!["q_first".to_string()],
            },
            Node::Decision {
                id: "q_first".to_string(),
                question: "First gate?".to_string(),
                on_yes: "q_second".to_string(),
                on_no: "outcome_bad".to_string(),
            },
            Node::Decision {
                id: "q_second".to_string(),
                question: "Second gate?".to_string(),
                on_yes: "outcome_good".to_string(),
                on_no: "outcome_bad".to_string(),
            },
            Node::Outcome {
                id: "outcome_good".to_string(),
                title: "Both gates passed".to_string(),
                disposition: Disposition::EligibleNow,
            },
            Node::Outcome {
                id: "outcome_bad".to_string(),
                title: "A gate failed".to_string(),
                disposition: Disposition::NotYetEligible,
            },
        ],
        "entry",
    )
    .expect("small table is valid")
}

/// A table whose decision branch points at a node that does not exist.
#[allow(dead_code)]
pub fn create_dangling_table() -> NodeTable {
    NodeTable::new(
        vec![
            Node::Entry {
                id: "entry".to_string(),
                next: vec!["q_first".to_string()],
            },
            Node::Decision {
                id: "q_first".to_string(),
                question: "First gate?".to_string(),
                on_yes: "missing_node".to_string(),
                on_no: "outcome_bad".to_string(),
            },
            Node::Outcome {
                id: "outcome_bad".to_string(),
                title: "A gate failed".to_string(),
                disposition: Disposition::NotYetEligible,
            },
        ],
        "entry",
    )
    .expect("construction succeeds; validation catches the dangling branch")
}

/// A two-node cycle that validation must reject.
#[allow(dead_code)]
pub fn create_cyclic_table() -> NodeTable {
    NodeTable::new(
        vec![
            Node::Entry {
                id: "entry".to_string(),
                next: vec!["a".to_string()],
            },
            Node::Decision {
                id: "a".to_string(),
                question: "Loop?".to_string(),
                on_yes: "b".to_string(),
                on_no: "done".to_string(),
            },
            Node::Decision {
                id: "b".to_string(),
                question: "Loop back?".to_string(),
                on_yes: "a".to_string(),
                on_no: "done".to_string(),
            },
            Node::Outcome {
                id: "done".to_string(),
                title: "Done".to_string(),
                disposition: Disposition::EligibleNow,
            },
        ],
        "entry",
    )
    .expect("construction succeeds; validation catches the cycle")
}

/// Officials fixture with every field populated.
#[allow(dead_code)]
pub fn create_officials() -> CurrentOfficialsConfig {
    CurrentOfficialsConfig {
        president: "Alex Example".to_string(),
        vice_president: "Jordan Sample".to_string(),
        speaker_of_the_house: "Casey Placeholder".to_string(),
        chief_justice: "John Roberts".to_string(),
        president_party: "Example Party".to_string(),
        state_governor: Some("Riley Stateman".to_string()),
        state_senators: vec!["Senator One".to_string(), "Senator Two".to_string()],
        state_representative: Some("Rep Example".to_string()),
        state_capital: Some("Sacramento".to_string()),
    }
}

/// A three-question seed bank for matcher and sampling tests.
#[allow(dead_code)]
pub fn create_seed_bank() -> Vec<QuestionSeed> {
    vec![
        QuestionSeed {
            id: 1,
            category: Category::PrinciplesOfDemocracy,
            question: "How many amendments does the Constitution have?",
            answers: AnswerSource::Fixed(&["twenty-seven", "27"]),
            explanation: None,
            senior: false,
        },
        QuestionSeed {
            id: 2,
            category: Category::Symbols,
            question: "What is the name of the national anthem?",
            answers: AnswerSource::Fixed(&["The Star-Spangled Banner"]),
            explanation: None,
            senior: true,
        },
        QuestionSeed {
            id: 3,
            category: Category::SystemOfGovernment,
            question: "Who is the President of the United States now?",
            answers: AnswerSource::Officials(civica::civics::OfficialsField::President),
            explanation: None,
            senior: true,
        },
    ]
}

/// Household baseline: single member, no income, no flags, in California.
#[allow(dead_code)]
pub fn create_household(size: u32, annual_income: f64, state: &str) -> HouseholdData {
    HouseholdData {
        size,
        annual_income,
        receives_public_benefits: false,
        homeless: false,
        extraordinary_expenses: false,
        benefit_types: HashSet::new(),
        military_status: MilitaryStatus::None,
        state: state.to_string(),
    }
}
