use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine sections of the civics test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    PrinciplesOfDemocracy,
    SystemOfGovernment,
    RightsAndResponsibilities,
    ColonialPeriodAndIndependence,
    NineteenthCentury,
    RecentHistory,
    Geography,
    Symbols,
    Holidays,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::PrinciplesOfDemocracy,
        Category::SystemOfGovernment,
        Category::RightsAndResponsibilities,
        Category::ColonialPeriodAndIndependence,
        Category::NineteenthCentury,
        Category::RecentHistory,
        Category::Geography,
        Category::Symbols,
        Category::Holidays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::PrinciplesOfDemocracy => "Principles of American Democracy",
            Category::SystemOfGovernment => "System of Government",
            Category::RightsAndResponsibilities => "Rights and Responsibilities",
            Category::ColonialPeriodAndIndependence => "Colonial Period and Independence",
            Category::NineteenthCentury => "American History: 1800s",
            Category::RecentHistory => "Recent American History",
            Category::Geography => "Geography",
            Category::Symbols => "Symbols",
            Category::Holidays => "Holidays",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which field of [`CurrentOfficialsConfig`](crate::config::CurrentOfficialsConfig)
/// supplies the accepted answers for an officials-dependent question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfficialsField {
    President,
    VicePresident,
    SpeakerOfTheHouse,
    ChiefJustice,
    PresidentParty,
    StateGovernor,
    StateSenators,
    StateRepresentative,
    StateCapital,
}

/// One question of the civics test.
///
/// `answers` is the full set of acceptable literal answers and is never
/// empty. `senior` marks membership in the reduced pool offered to
/// applicants who are 65 or older and have been permanent residents for 20
/// years (the "65/20" consideration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CivicsQuestion {
    pub id: u32,
    pub category: Category,
    pub question: String,
    pub answers: Vec<String>,
    pub explanation: Option<String>,
    pub senior: bool,
}
