use super::engine::Terminal;
use super::state::AnswerRecord;
use crate::graph::{Disposition, NodeId};
use crate::pathway::PathwayType;
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One classified eligibility result presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathwayResult {
    pub pathway: PathwayType,
    pub title: String,
    pub eligible: bool,
    pub requirements: Vec<String>,
    pub next_steps: Vec<String>,
    pub time_to_eligibility: Option<String>,
}

/// Maps a disambiguating (node, answer) pair to the pathway it commits the
/// traversal to. Rules are checked in declaration order; the first rule
/// whose pair appears in the answer trace names the primary pathway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRule {
    pub pathway: PathwayType,
    pub node_id: NodeId,
    pub answer: bool,
}

/// Static presentation content for one pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackProfile {
    pub requirements: Vec<String>,
    pub next_steps: Vec<String>,
    /// The statutory period for this pathway, shown when the user is not
    /// yet eligible.
    pub time_to_eligibility: Option<String>,
}

/// Classifies a finished traversal into concrete pathway results.
///
/// Several distinct eligibility routes converge on the same terminal node
/// (a spouse-track and a standard-track walk can both end at the shared
/// "eligible" outcome), so the terminal node alone cannot name the pathway.
/// The classifier replays the answer trace against a priority-ordered rule
/// list instead. [`WizardSession`](super::session::WizardSession) threads
/// the same first-match rule through the live state, so the tag shown during
/// traversal and the classification at the end always agree.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<TrackRule>,
    profiles: AHashMap<PathwayType, TrackProfile>,
    /// Fallback pathway per outcome node, for traces no rule matches
    /// (unambiguous branches such as derivation or acquisition at birth).
    outcome_defaults: AHashMap<NodeId, PathwayType>,
}

impl Classifier {
    pub fn new(
        rules: Vec<TrackRule>,
        profiles: AHashMap<PathwayType, TrackProfile>,
        outcome_defaults: AHashMap<NodeId, PathwayType>,
    ) -> Self {
        Self {
            rules,
            profiles,
            outcome_defaults,
        }
    }

    /// The first rule (in priority order) whose (node, answer) pair appears
    /// anywhere in the trace. This is what commits a session to a track.
    pub fn track_for(&self, answers: &[AnswerRecord]) -> Option<PathwayType> {
        self.rules
            .iter()
            .find(|rule| Self::matches(rule, answers))
            .map(|rule| rule.pathway)
    }

    /// Classifies a terminal into the ordered list of pathway results.
    ///
    /// The primary result comes first: the highest-priority rule matched by
    /// the trace, or the outcome's default pathway when no rule matches.
    /// Further matched rules follow as secondary results, so a user who is,
    /// say, both married to a citizen and past five years of residence sees
    /// both routes.
    pub fn classify(&self, terminal: &Terminal) -> Vec<PathwayResult> {
        let answers = terminal.final_state.answers();

        let matched: Vec<PathwayType> = self
            .rules
            .iter()
            .filter(|rule| Self::matches(rule, answers))
            .map(|rule| rule.pathway)
            .unique()
            .collect();

        let pathways = if matched.is_empty() {
            let fallback = self
                .outcome_defaults
                .get(&terminal.outcome_id)
                .copied()
                .unwrap_or(PathwayType::NaturalizationStandard);
            vec![fallback]
        } else {
            matched
        };

        pathways
            .into_iter()
            .map(|pathway| self.result_for(pathway, terminal.disposition))
            .collect()
    }

    fn result_for(&self, pathway: PathwayType, disposition: Disposition) -> PathwayResult {
        let eligible = matches!(
            disposition,
            Disposition::EligibleNow | Disposition::AlreadyCitizen
        );
        let profile = self.profiles.get(&pathway);
        PathwayResult {
            pathway,
            title: pathway.title().to_string(),
            eligible,
            requirements: profile.map(|p| p.requirements.clone()).unwrap_or_default(),
            next_steps: profile.map(|p| p.next_steps.clone()).unwrap_or_default(),
            time_to_eligibility: match disposition {
                Disposition::NotYetEligible => {
                    profile.and_then(|p| p.time_to_eligibility.clone())
                }
                _ => None,
            },
        }
    }

    fn matches(rule: &TrackRule, answers: &[AnswerRecord]) -> bool {
        answers.iter().any(|record| {
            record.node_id == rule.node_id && record.choice.as_bool() == Some(rule.answer)
        })
    }
}
