use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Military service status of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilitaryStatus {
    Active,
    Veteran,
    None,
}

impl MilitaryStatus {
    pub fn is_serving_or_served(&self) -> bool {
        matches!(self, MilitaryStatus::Active | MilitaryStatus::Veteran)
    }
}

/// A public benefit or income program a household may receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeSource {
    Snap,
    Ssi,
    Medicaid,
    Tanf,
    HousingAssistance,
    Unemployment,
    SocialSecurityRetirement,
}

impl IncomeSource {
    /// Only means-tested benefits qualify a household for a full fee waiver
    /// on their own; insurance-style programs do not.
    pub fn is_means_tested(&self) -> bool {
        match self {
            IncomeSource::Snap
            | IncomeSource::Ssi
            | IncomeSource::Medicaid
            | IncomeSource::Tanf
            | IncomeSource::HousingAssistance => true,
            IncomeSource::Unemployment | IncomeSource::SocialSecurityRetirement => false,
        }
    }
}

/// Which poverty-guideline table a state falls under. HHS publishes separate,
/// higher tables for Alaska and Hawaii.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateRegion {
    Contiguous,
    Alaska,
    Hawaii,
}

impl StateRegion {
    /// Region for a two-letter postal code. Anything unrecognized falls back
    /// to the contiguous table, which is the conservative (lowest) one.
    pub fn from_state_code(code: &str) -> Self {
        match code.trim().to_ascii_uppercase().as_str() {
            "AK" => StateRegion::Alaska,
            "HI" => StateRegion::Hawaii,
            _ => StateRegion::Contiguous,
        }
    }
}

/// The household attributes the fee-waiver evaluation consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdData {
    /// Number of household members; values below 1 are clamped to 1.
    pub size: u32,
    pub annual_income: f64,
    pub receives_public_benefits: bool,
    pub homeless: bool,
    /// Documented extraordinary expenses (medical debt, disaster loss, care
    /// of a disabled family member).
    pub extraordinary_expenses: bool,
    pub benefit_types: HashSet<IncomeSource>,
    pub military_status: MilitaryStatus,
    /// Two-letter state code.
    pub state: String,
}

impl HouseholdData {
    pub fn region(&self) -> StateRegion {
        StateRegion::from_state_code(&self.state)
    }

    /// Household size with the lower bound applied.
    pub fn clamped_size(&self) -> u32 {
        self.size.max(1)
    }

    /// Whether any reported benefit is means-tested.
    pub fn receives_means_tested_benefit(&self) -> bool {
        self.receives_public_benefits
            && self.benefit_types.iter().any(IncomeSource::is_means_tested)
    }

    /// Income used for the guideline comparisons. Homelessness zeroes it;
    /// documented extraordinary expenses reduce it by a quarter. Hardship
    /// adjustments never affect the military or public-benefits rules.
    pub fn effective_income(&self) -> f64 {
        if self.homeless {
            return 0.0;
        }
        if self.extraordinary_expenses {
            self.annual_income * 0.75
        } else {
            self.annual_income
        }
    }
}
