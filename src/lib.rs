//! # Civica - Citizenship Pathway Rules Engine
//!
//! **Civica** is a decision-tree traversal and rules-evaluation engine for
//! U.S. citizenship pathways. It packages four rule evaluators behind plain
//! in-memory function calls: an eligibility wizard over an immutable node
//! graph, a civics-test answer matcher with random question sampling, a
//! fee-waiver evaluator over household data, and a per-pathway document
//! checklist deriver.
//!
//! ## Core Workflow
//!
//! All rule data is compiled in. A caller builds the shared immutable
//! tables once, then drives any number of independent sessions against
//! them:
//!
//! 1. **Build the tables**: `data::eligibility_table()` plus
//!    `data::classifier()` for the wizard; `QuestionBank::standard` (with an
//!    injected [`CurrentOfficialsConfig`](config::CurrentOfficialsConfig))
//!    for the civics quiz.
//! 2. **Drive a session**: a [`WizardSession`](wizard::WizardSession) holds
//!    one user's traversal state; every `answer`/`advance`/`back` call
//!    yields a new state value or a terminal, classified result.
//! 3. **Evaluate rules directly**: fee waivers
//!    ([`determine_fee_waiver`](fees::determine_fee_waiver)) and document
//!    checklists ([`calculate_total_cost`](documents::calculate_total_cost))
//!    are plain pure functions.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use civica::prelude::*;
//! use std::sync::Arc;
//!
//! fn main() -> Result<()> {
//!     let table = Arc::new(civica::data::eligibility_table()?);
//!     table.validate()?;
//!     let classifier = Arc::new(civica::data::classifier());
//!
//!     let mut session = WizardSession::start(table, classifier);
//!     session.advance_to_decision()?;
//!
//!     // "Were you born in the United States?" -- no
//!     session.answer(false)?;
//!
//!     while !session.is_complete() {
//!         let is_decision = session.current_node()?.is_decision();
//!         if is_decision {
//!             // A real UI shows the question; here we answer yes to all.
//!             session.answer(true)?;
//!         } else {
//!             session.advance()?;
//!         }
//!     }
//!
//!     if let Phase::Completed { terminal, results } = session.phase() {
//!         println!("{}", terminal.title);
//!         for result in results {
//!             println!("-> {} (eligible: {})", result.title, result.eligible);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod civics;
pub mod config;
pub mod data;
pub mod documents;
pub mod error;
pub mod fees;
pub mod graph;
pub mod pathway;
pub mod prelude;
pub mod wizard;
