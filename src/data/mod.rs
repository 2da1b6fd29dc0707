//! Compiled-in rule tables: the eligibility graph, the civics question
//! bank, per-pathway checklists and fees. Read-only after construction and
//! safe to share between sessions.

pub mod checklists;
pub mod nodes;
pub mod questions;

pub use checklists::*;
pub use nodes::*;
pub use questions::*;
