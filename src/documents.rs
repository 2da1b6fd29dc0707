use crate::pathway::PathwayType;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// What a checklist item is: a form, supporting evidence, or a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocCategory {
    Form,
    Identity,
    Residence,
    Relationship,
    Military,
    Financial,
    Fee,
}

/// How strongly a document applies to the pathway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocPriority {
    Required,
    Recommended,
    Conditional,
    Optional,
}

/// One item on a pathway's document checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub category: DocCategory,
    pub priority: DocPriority,
    /// Out-of-pocket cost, when the item has one. Absent means free.
    pub cost: Option<f64>,
    pub notes: Option<String>,
}

/// Documents every applicant on this pathway must gather.
pub fn required_documents(pathway: PathwayType) -> Vec<Document> {
    documents_with_priority(pathway, DocPriority::Required)
}

/// Documents that apply only in particular circumstances (prior arrests,
/// name changes, extended trips abroad, and so on).
pub fn conditional_documents(pathway: PathwayType) -> Vec<Document> {
    documents_with_priority(pathway, DocPriority::Conditional)
}

/// The full checklist for a pathway, ordered required-first.
pub fn full_checklist(pathway: PathwayType) -> Vec<Document> {
    crate::data::checklist(pathway)
        .into_iter()
        .sorted_by_key(|doc| doc.priority)
        .collect()
}

/// Sums the `cost` fields of the checklist: required items only, or the
/// whole list when `include_optional` is set. Items without a cost
/// contribute zero, never an error.
pub fn calculate_total_cost(pathway: PathwayType, include_optional: bool) -> f64 {
    crate::data::checklist(pathway)
        .iter()
        .filter(|doc| doc.priority == DocPriority::Required || include_optional)
        .filter_map(|doc| doc.cost)
        .sum()
}

fn documents_with_priority(pathway: PathwayType, priority: DocPriority) -> Vec<Document> {
    crate::data::checklist(pathway)
        .into_iter()
        .filter(|doc| doc.priority == priority)
        .collect()
}
