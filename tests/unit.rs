//! Unit tests for display formatting, conversions and error messages.
mod common;
use common::*;

use civica::fees::StateRegion;
use civica::prelude::*;

#[test]
fn test_node_display() {
    let table = create_small_table();
    let node = table.get("q_first", "test").unwrap();
    assert_eq!(format!("{}", node), "q_first (decision)");
    let outcome = table.get("outcome_good", "test").unwrap();
    assert_eq!(format!("{}", outcome), "outcome_good (outcome)");
}

#[test]
fn test_choice_conversions() {
    assert_eq!(Choice::from_bool(true), Choice::Yes);
    assert_eq!(Choice::from_bool(false), Choice::No);
    assert_eq!(Choice::Yes.as_bool(), Some(true));
    assert_eq!(Choice::No.as_bool(), Some(false));
    assert_eq!(Choice::Continue.as_bool(), None);
}

#[test]
fn test_error_display() {
    let err = GraphError::UnknownNode {
        missing_node_id: "node_b".to_string(),
        referenced_by: "node_a".to_string(),
    };
    assert!(err.to_string().contains("node_b"));
    assert!(err.to_string().contains("node_a"));

    let traversal_err = TraversalError::NotADecision("req_x".to_string());
    assert!(traversal_err.to_string().contains("req_x"));
    assert!(traversal_err.to_string().contains("advance()"));

    assert!(TraversalError::AtStart.to_string().contains("first step"));
}

#[test]
fn test_state_region_parsing() {
    assert_eq!(StateRegion::from_state_code("AK"), StateRegion::Alaska);
    assert_eq!(StateRegion::from_state_code(" hi "), StateRegion::Hawaii);
    assert_eq!(StateRegion::from_state_code("NY"), StateRegion::Contiguous);
    // Unknown codes fall back to the contiguous table.
    assert_eq!(StateRegion::from_state_code("ZZ"), StateRegion::Contiguous);
}

#[test]
fn test_pathway_metadata() {
    assert_eq!(
        PathwayType::NaturalizationStandard.filing_form(),
        Some("N-400")
    );
    assert_eq!(
        PathwayType::DerivativeCertificate.filing_form(),
        Some("N-600")
    );
    assert_eq!(PathwayType::AcquisitionAtBirth.filing_form(), None);
    assert!(PathwayType::NaturalizationMilitary.is_fee_exempt_for_military());
    assert!(!PathwayType::DerivativeCertificate.is_fee_exempt_for_military());
}

#[test]
fn test_officials_config_deserializes_with_defaults() {
    let json = r#"{
        "president": "Alex Example",
        "vice_president": "Jordan Sample",
        "speaker_of_the_house": "Casey Placeholder",
        "chief_justice": "John Roberts",
        "president_party": "Example Party"
    }"#;
    let config: CurrentOfficialsConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.president, "Alex Example");
    assert!(config.state_governor.is_none());
    assert!(config.state_senators.is_empty());
}

#[test]
fn test_household_deserializes() {
    let json = r#"{
        "size": 2,
        "annual_income": 28000.0,
        "receives_public_benefits": true,
        "homeless": false,
        "extraordinary_expenses": false,
        "benefit_types": ["snap"],
        "military_status": "none",
        "state": "CA"
    }"#;
    let household: HouseholdData = serde_json::from_str(json).unwrap();
    assert!(household.benefit_types.contains(&IncomeSource::Snap));
    assert!(household.receives_means_tested_benefit());
    assert_eq!(household.region(), StateRegion::Contiguous);
}
