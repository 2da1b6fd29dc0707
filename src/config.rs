use crate::civics::OfficialsField;
use serde::{Deserialize, Serialize};

/// The current federal and (optionally) state officeholders.
///
/// A handful of civics questions have answers that change with elections and
/// appointments. Rather than baking those names into the question table,
/// they are an explicit input supplied by the deployment at startup —
/// typically deserialized from a small JSON file — and resolved once when
/// the [`QuestionBank`](crate::civics::QuestionBank) is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentOfficialsConfig {
    pub president: String,
    pub vice_president: String,
    pub speaker_of_the_house: String,
    pub chief_justice: String,
    /// Political party of the sitting president.
    pub president_party: String,
    /// State-level data is optional; deployments serving a single state fill
    /// these in, nationwide deployments may leave them empty.
    #[serde(default)]
    pub state_governor: Option<String>,
    #[serde(default)]
    pub state_senators: Vec<String>,
    #[serde(default)]
    pub state_representative: Option<String>,
    #[serde(default)]
    pub state_capital: Option<String>,
}

impl CurrentOfficialsConfig {
    /// The accepted answers the given question field resolves to. Empty when
    /// the deployment did not supply that data.
    pub fn answers_for(&self, field: OfficialsField) -> Vec<String> {
        match field {
            OfficialsField::President => vec![self.president.clone()],
            OfficialsField::VicePresident => vec![self.vice_president.clone()],
            OfficialsField::SpeakerOfTheHouse => vec![self.speaker_of_the_house.clone()],
            OfficialsField::ChiefJustice => vec![self.chief_justice.clone()],
            OfficialsField::PresidentParty => vec![self.president_party.clone()],
            OfficialsField::StateGovernor => self.state_governor.clone().into_iter().collect(),
            OfficialsField::StateSenators => self.state_senators.clone(),
            OfficialsField::StateRepresentative => {
                self.state_representative.clone().into_iter().collect()
            }
            OfficialsField::StateCapital => self.state_capital.clone().into_iter().collect(),
        }
    }
}
