use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of citizenship pathways the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathwayType {
    /// Naturalization after five years of permanent residence (INA 316).
    NaturalizationStandard,
    /// Naturalization after three years married to a citizen (INA 319).
    NaturalizationSpouse,
    /// Naturalization through qualifying military service (INA 328/329).
    NaturalizationMilitary,
    /// Certificate of citizenship for derivation through a parent (INA 320).
    DerivativeCertificate,
    /// Citizenship acquired at birth abroad to a citizen parent (INA 301/309).
    AcquisitionAtBirth,
}

impl PathwayType {
    pub const ALL: [PathwayType; 5] = [
        PathwayType::NaturalizationStandard,
        PathwayType::NaturalizationSpouse,
        PathwayType::NaturalizationMilitary,
        PathwayType::DerivativeCertificate,
        PathwayType::AcquisitionAtBirth,
    ];

    /// Human-readable pathway title.
    pub fn title(&self) -> &'static str {
        match self {
            PathwayType::NaturalizationStandard => "Naturalization (5-year permanent residence)",
            PathwayType::NaturalizationSpouse => "Naturalization (spouse of a U.S. citizen)",
            PathwayType::NaturalizationMilitary => "Naturalization (military service)",
            PathwayType::DerivativeCertificate => "Certificate of Citizenship (derivation)",
            PathwayType::AcquisitionAtBirth => "Citizenship acquired at birth abroad",
        }
    }

    /// The USCIS form this pathway is filed on, if any.
    pub fn filing_form(&self) -> Option<&'static str> {
        match self {
            PathwayType::NaturalizationStandard
            | PathwayType::NaturalizationSpouse
            | PathwayType::NaturalizationMilitary => Some("N-400"),
            PathwayType::DerivativeCertificate => Some("N-600"),
            // Acquisition at birth needs no application; proof is via
            // passport or, optionally, an N-600.
            PathwayType::AcquisitionAtBirth => None,
        }
    }

    /// Whether the filing fee is statutorily exempt for this pathway.
    /// Military applicants file the N-400 with no fee.
    pub fn is_fee_exempt_for_military(&self) -> bool {
        matches!(
            self,
            PathwayType::NaturalizationStandard
                | PathwayType::NaturalizationSpouse
                | PathwayType::NaturalizationMilitary
        )
    }
}

impl fmt::Display for PathwayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Government fees for filing a pathway, separate from the per-document
/// costs on the checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwayCost {
    pub pathway: PathwayType,
    /// Fee for the filing form itself; zero where statutorily exempt.
    pub filing_fee: f64,
    pub notes: &'static str,
}
