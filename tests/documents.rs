//! Document checklist derivation and cost summation tests.
use civica::documents::{
    self, DocCategory, DocPriority, calculate_total_cost, conditional_documents,
    required_documents,
};
use civica::pathway::PathwayType;

#[test]
fn test_standard_required_cost_is_the_filing_fee() {
    // Only required items count: the $710 N-400 fee is in, the conditional
    // court-records and photo costs are out, and items without a cost
    // contribute zero.
    let total = calculate_total_cost(PathwayType::NaturalizationStandard, false);
    assert_eq!(total, 710.0);
}

#[test]
fn test_including_optional_items_raises_the_total() {
    let required_only = calculate_total_cost(PathwayType::NaturalizationStandard, false);
    let everything = calculate_total_cost(PathwayType::NaturalizationStandard, true);
    assert!(everything > required_only);
    // Conditional court records ($20) and photos ($15) join the fee.
    assert_eq!(everything, 710.0 + 20.0 + 15.0);
}

#[test]
fn test_military_track_has_no_filing_fee() {
    assert_eq!(
        calculate_total_cost(PathwayType::NaturalizationMilitary, false),
        0.0
    );
    let required = required_documents(PathwayType::NaturalizationMilitary);
    assert!(required.iter().all(|doc| doc.category != DocCategory::Fee));
    assert!(
        required
            .iter()
            .any(|doc| doc.name.contains("N-426")),
        "military track requires the service certification"
    );
}

#[test]
fn test_priority_filters_are_disjoint() {
    for pathway in PathwayType::ALL {
        let required = required_documents(pathway);
        let conditional = conditional_documents(pathway);
        assert!(required.iter().all(|d| d.priority == DocPriority::Required));
        assert!(
            conditional
                .iter()
                .all(|d| d.priority == DocPriority::Conditional)
        );
        assert!(
            !required.is_empty(),
            "every pathway has at least one required document"
        );
    }
}

#[test]
fn test_full_checklist_orders_required_first() {
    let checklist = documents::full_checklist(PathwayType::NaturalizationSpouse);
    let priorities: Vec<DocPriority> = checklist.iter().map(|d| d.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
    assert_eq!(checklist[0].priority, DocPriority::Required);
}

#[test]
fn test_spouse_track_adds_relationship_evidence() {
    let required = required_documents(PathwayType::NaturalizationSpouse);
    assert!(
        required
            .iter()
            .any(|doc| doc.category == DocCategory::Relationship)
    );
    // The standard track carries no relationship documents at all.
    let standard = documents::full_checklist(PathwayType::NaturalizationStandard);
    assert!(
        standard
            .iter()
            .all(|doc| doc.category != DocCategory::Relationship)
    );
}

#[test]
fn test_derivative_certificate_cost_includes_n600_fee() {
    let total = calculate_total_cost(PathwayType::DerivativeCertificate, false);
    assert!(total >= 1_385.0);
}

#[test]
fn test_pathway_cost_records_cover_every_pathway() {
    let costs = civica::data::pathway_costs();
    assert_eq!(costs.len(), PathwayType::ALL.len());
    let military = civica::data::cost_for(PathwayType::NaturalizationMilitary);
    assert_eq!(military.filing_fee, 0.0);
    let standard = civica::data::cost_for(PathwayType::NaturalizationStandard);
    assert_eq!(standard.filing_fee, 710.0);
}
