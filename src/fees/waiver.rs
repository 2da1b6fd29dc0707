use super::household::HouseholdData;
use super::poverty::federal_poverty_guideline;
use crate::pathway::PathwayType;
use serde::{Deserialize, Serialize};

/// Full-waiver income threshold: 150% of the poverty guideline.
const FULL_WAIVER_MULTIPLIER: f64 = 1.5;
/// Reduced-fee ceiling: 200% of the poverty guideline.
const REDUCED_FEE_MULTIPLIER: f64 = 2.0;

/// Why a full waiver was granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiverBasis {
    /// Household receives a means-tested public benefit.
    PublicBenefits,
    /// Household income at or below 150% of the poverty guideline.
    IncomeBelow150Percent,
}

/// The waiver tier a household qualifies for. Callers branch on this enum;
/// the human-readable reason string is presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaiverCategory {
    /// Statutory military fee exemption; no waiver request needed at all.
    MilitaryExempt,
    /// Full fee waiver, requested on Form I-912.
    FullWaiver(WaiverBasis),
    /// Reduced filing fee, requested on Form I-942.
    ReducedFee,
    NotEligible,
}

/// The outcome of a fee-waiver evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeWaiverDetermination {
    pub category: WaiverCategory,
    /// The form to file, when one exists for this category.
    pub form: Option<&'static str>,
    pub reason: String,
    pub required_evidence: Vec<String>,
}

impl FeeWaiverDetermination {
    /// Whether the applicant pays less than the full fee.
    pub fn eligible(&self) -> bool {
        !matches!(self.category, WaiverCategory::NotEligible)
    }
}

/// Determines the fee-waiver tier for a household filing on `pathway`.
///
/// Rules are evaluated in a fixed order and the first match wins:
/// military exemption, means-tested benefits, income at or below 150% FPG,
/// income between 150% and 200% FPG, otherwise not eligible. Homelessness
/// and documented hardship adjust the income used by the two threshold
/// rules only.
pub fn determine_fee_waiver(
    household: &HouseholdData,
    pathway: PathwayType,
) -> FeeWaiverDetermination {
    if household.military_status.is_serving_or_served() && pathway.is_fee_exempt_for_military() {
        return FeeWaiverDetermination {
            category: WaiverCategory::MilitaryExempt,
            form: None,
            reason: "Applicants filing through military service are exempt from the filing fee \
                     regardless of income."
                .to_string(),
            required_evidence: vec![
                "Certification of military or naval service (Form N-426)".to_string(),
                "DD Form 214 or discharge orders, for veterans".to_string(),
            ],
        };
    }

    if household.receives_means_tested_benefit() {
        return FeeWaiverDetermination {
            category: WaiverCategory::FullWaiver(WaiverBasis::PublicBenefits),
            form: Some("I-912"),
            reason: "The household receives a means-tested public benefit.".to_string(),
            required_evidence: vec![
                "Benefit award or verification letter naming the applicant".to_string(),
                "Letter dated within the last 12 months".to_string(),
            ],
        };
    }

    let size = household.clamped_size();
    let guideline = federal_poverty_guideline(size, household.region());
    let income = household.effective_income();

    if income <= guideline * FULL_WAIVER_MULTIPLIER {
        return FeeWaiverDetermination {
            category: WaiverCategory::FullWaiver(WaiverBasis::IncomeBelow150Percent),
            form: Some("I-912"),
            reason: format!(
                "Household income (${income:.0} for {size} member(s)) is at or below 150% of \
                 the Federal Poverty Guideline (${guideline:.0})."
            ),
            required_evidence: income_evidence(household),
        };
    }

    if income <= guideline * REDUCED_FEE_MULTIPLIER {
        return FeeWaiverDetermination {
            category: WaiverCategory::ReducedFee,
            form: Some("I-942"),
            reason: format!(
                "Household income (${income:.0} for {size} member(s)) is between 150% and 200% \
                 of the Federal Poverty Guideline (${guideline:.0})."
            ),
            required_evidence: income_evidence(household),
        };
    }

    FeeWaiverDetermination {
        category: WaiverCategory::NotEligible,
        form: None,
        reason: format!(
            "Household income (${income:.0}) exceeds 200% of the Federal Poverty Guideline \
             (${guideline:.0}) for a household of {size}."
        ),
        required_evidence: Vec::new(),
    }
}

fn income_evidence(household: &HouseholdData) -> Vec<String> {
    let mut evidence = vec![
        "Most recent federal tax return or IRS transcript".to_string(),
        "Recent pay stubs or an employment letter".to_string(),
    ];
    if household.homeless {
        evidence.push("Statement describing the housing situation".to_string());
    }
    if household.extraordinary_expenses {
        evidence.push("Documentation of the extraordinary expenses claimed".to_string());
    }
    evidence
}
