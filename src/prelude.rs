//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the civica crate so callers
//! can bring the core API in with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use civica::prelude::*;
//! use std::sync::Arc;
//!
//! # fn run_example() -> Result<()> {
//! let table = Arc::new(civica::data::eligibility_table()?);
//! let classifier = Arc::new(civica::data::classifier());
//! let session = WizardSession::start(table, classifier);
//! println!("starting at {:?}", session.phase());
//! # Ok(())
//! # }
//! ```

// Graph and traversal
pub use crate::graph::{Disposition, Node, NodeId, NodeTable};
pub use crate::wizard::{
    AnswerRecord, Choice, Classifier, PathwayResult, Phase, Step, Terminal, TrackProfile,
    TrackRule, TraversalState, WizardSession,
};

// Civics quiz
pub use crate::civics::{AnswerMatcher, Category, CivicsQuestion, QuestionBank};
pub use crate::config::CurrentOfficialsConfig;

// Fees and documents
pub use crate::documents::{DocPriority, Document};
pub use crate::fees::{
    FeeWaiverDetermination, HouseholdData, IncomeSource, MilitaryStatus, WaiverBasis,
    WaiverCategory, determine_fee_waiver, federal_poverty_guideline,
};
pub use crate::pathway::{PathwayCost, PathwayType};

// Error types
pub use crate::error::{GraphError, TraversalError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
