//! Fee-waiver determination and poverty-guideline tests.
mod common;
use common::*;

use civica::fees::{StateRegion, federal_poverty_guideline_for_state};
use civica::prelude::*;

#[test]
fn test_guideline_tables() {
    // 2025 figures: contiguous base and the higher AK/HI tables.
    assert_eq!(federal_poverty_guideline(1, StateRegion::Contiguous), 15_650.0);
    assert_eq!(federal_poverty_guideline(4, StateRegion::Contiguous), 32_150.0);
    assert_eq!(federal_poverty_guideline(1, StateRegion::Alaska), 19_550.0);
    assert_eq!(federal_poverty_guideline(1, StateRegion::Hawaii), 17_990.0);
    assert!(
        federal_poverty_guideline(3, StateRegion::Alaska)
            > federal_poverty_guideline(3, StateRegion::Hawaii)
    );
    assert!(
        federal_poverty_guideline(3, StateRegion::Hawaii)
            > federal_poverty_guideline(3, StateRegion::Contiguous)
    );
}

#[test]
fn test_guideline_extends_past_tabulated_rows() {
    // Beyond eight members the table extends by the published increment.
    assert_eq!(
        federal_poverty_guideline(10, StateRegion::Contiguous),
        54_150.0 + 2.0 * 5_500.0
    );
    assert_eq!(
        federal_poverty_guideline(9, StateRegion::Alaska),
        67_710.0 + 6_880.0
    );
}

#[test]
fn test_guideline_clamps_zero_household() {
    assert_eq!(
        federal_poverty_guideline(0, StateRegion::Contiguous),
        federal_poverty_guideline(1, StateRegion::Contiguous)
    );
}

#[test]
fn test_state_codes_map_to_regions() {
    assert_eq!(
        federal_poverty_guideline_for_state(1, "ak"),
        federal_poverty_guideline(1, StateRegion::Alaska)
    );
    assert_eq!(
        federal_poverty_guideline_for_state(1, "HI"),
        federal_poverty_guideline(1, StateRegion::Hawaii)
    );
    assert_eq!(
        federal_poverty_guideline_for_state(1, "CA"),
        federal_poverty_guideline(1, StateRegion::Contiguous)
    );
}

#[test]
fn test_zero_income_household_gets_full_waiver() {
    let household = create_household(1, 0.0, "CA");
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(
        determination.category,
        WaiverCategory::FullWaiver(WaiverBasis::IncomeBelow150Percent)
    );
    assert_eq!(determination.form, Some("I-912"));
    assert!(determination.eligible());
}

#[test]
fn test_income_at_180_percent_gets_reduced_fee() {
    let guideline = federal_poverty_guideline(1, StateRegion::Contiguous);
    let household = create_household(1, guideline * 1.8, "CA");
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(determination.category, WaiverCategory::ReducedFee);
    assert_eq!(determination.form, Some("I-942"));
    assert!(determination.eligible());
}

#[test]
fn test_active_military_is_exempt_regardless_of_income() {
    let mut household = create_household(1, 500_000.0, "CA");
    household.military_status = MilitaryStatus::Active;
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(determination.category, WaiverCategory::MilitaryExempt);
    assert_eq!(determination.form, None);
    assert!(determination.eligible());
}

#[test]
fn test_snap_household_gets_benefits_waiver_at_any_income() {
    let mut household = create_household(3, 250_000.0, "NY");
    household.receives_public_benefits = true;
    household.benefit_types.insert(IncomeSource::Snap);
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(
        determination.category,
        WaiverCategory::FullWaiver(WaiverBasis::PublicBenefits)
    );
    assert_eq!(determination.form, Some("I-912"));
}

#[test]
fn test_non_means_tested_benefit_does_not_waive() {
    let guideline = federal_poverty_guideline(1, StateRegion::Contiguous);
    let mut household = create_household(1, guideline * 3.0, "CA");
    household.receives_public_benefits = true;
    household.benefit_types.insert(IncomeSource::Unemployment);
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(determination.category, WaiverCategory::NotEligible);
}

#[test]
fn test_high_income_family_not_eligible() {
    let guideline = federal_poverty_guideline(4, StateRegion::Contiguous);
    let household = create_household(4, guideline * 3.0, "CA");
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(determination.category, WaiverCategory::NotEligible);
    assert_eq!(determination.form, None);
    assert!(!determination.eligible());
}

#[test]
fn test_military_priority_beats_benefits() {
    // Rule order matters: an active-duty member on SNAP is exempt, not a
    // benefits waiver.
    let mut household = create_household(2, 0.0, "TX");
    household.military_status = MilitaryStatus::Active;
    household.receives_public_benefits = true;
    household.benefit_types.insert(IncomeSource::Snap);
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationMilitary);
    assert_eq!(determination.category, WaiverCategory::MilitaryExempt);
}

#[test]
fn test_homelessness_zeroes_effective_income() {
    let guideline = federal_poverty_guideline(1, StateRegion::Contiguous);
    let mut household = create_household(1, guideline * 5.0, "WA");
    household.homeless = true;
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(
        determination.category,
        WaiverCategory::FullWaiver(WaiverBasis::IncomeBelow150Percent)
    );
}

#[test]
fn test_extraordinary_expenses_shift_the_threshold() {
    let guideline = federal_poverty_guideline(1, StateRegion::Contiguous);
    // 190% of the guideline is over the reduced-fee line only until the 25%
    // hardship reduction brings it under 150%.
    let mut household = create_household(1, guideline * 1.9, "CA");
    household.extraordinary_expenses = true;
    let determination =
        determine_fee_waiver(&household, PathwayType::NaturalizationStandard);
    assert_eq!(
        determination.category,
        WaiverCategory::FullWaiver(WaiverBasis::IncomeBelow150Percent)
    );
}

#[test]
fn test_veteran_on_derivative_pathway_is_not_exempt() {
    // The N-600 is not covered by the military fee exemption.
    let mut household = create_household(1, 0.0, "CA");
    household.military_status = MilitaryStatus::Veteran;
    let determination =
        determine_fee_waiver(&household, PathwayType::DerivativeCertificate);
    assert_eq!(
        determination.category,
        WaiverCategory::FullWaiver(WaiverBasis::IncomeBelow150Percent)
    );
}
