//! The compiled-in eligibility graph and its classification tables.
//!
//! Hand-authored data: every change here should be followed by a run of the
//! graph validation tests, which walk all answer combinations.

use crate::graph::{
    Disposition, Exception, LegalBar, Node, NodeId, NodeTable, Requirement,
};
use crate::error::GraphError;
use crate::pathway::PathwayType;
use crate::wizard::{Classifier, TrackProfile, TrackRule};
use ahash::AHashMap;

pub const ENTRY_ID: &str = "entry";

/// Builds the citizenship-eligibility node table.
///
/// The table is rebuilt on each call; it is small, and callers that share it
/// across sessions wrap it in an `Arc` once.
pub fn eligibility_table() -> Result<NodeTable, GraphError> {
    NodeTable::new(eligibility_nodes(), ENTRY_ID)
}

/// The classifier matching the shipped graph: track rules in priority order
/// (military before spouse before standard), per-pathway presentation
/// profiles, and fallback pathways for the unambiguous outcomes.
pub fn classifier() -> Classifier {
    Classifier::new(track_rules(), track_profiles(), outcome_defaults())
}

fn eligibility_nodes() -> Vec<Node> {
    vec![
        Node::Entry {
            id: id(ENTRY_ID),
            next: vec![id("q_born_in_us")],
        },
        Node::Decision {
            id: id("q_born_in_us"),
            question: "Were you born in the United States or one of its territories?".into(),
            on_yes: id("outcome_citizen_at_birth"),
            on_no: id("q_citizen_parent"),
        },
        Node::Decision {
            id: id("q_citizen_parent"),
            question: "Was at least one of your parents a U.S. citizen when you were born?".into(),
            on_yes: id("q_parent_presence"),
            on_no: id("q_lpr"),
        },
        Node::Decision {
            id: id("q_parent_presence"),
            question: "Had that parent lived in the United States long enough before your birth \
                       to meet the physical-presence rule?"
                .into(),
            on_yes: id("outcome_acquired_abroad"),
            on_no: id("q_minor_derivation"),
        },
        Node::Decision {
            id: id("q_minor_derivation"),
            question: "Are you under 18, a permanent resident, and living in the legal and \
                       physical custody of that citizen parent?"
                .into(),
            on_yes: id("outcome_derivative"),
            on_no: id("q_lpr"),
        },
        Node::Decision {
            id: id("q_lpr"),
            question: "Are you a lawful permanent resident (green-card holder)?".into(),
            on_yes: id("q_age"),
            on_no: id("process_permanent_residence"),
        },
        Node::Process {
            id: id("process_permanent_residence"),
            title: "Obtain permanent residence first".into(),
            steps: vec![
                "Identify a basis for permanent residence (family, employment, asylum, \
                 diversity visa)"
                    .into(),
                "File the appropriate immigrant petition".into(),
                "Adjust status or consular-process to receive a green card".into(),
            ],
            next: vec![id("outcome_not_yet")],
        },
        Node::Decision {
            id: id("q_age"),
            question: "Are you at least 18 years old?".into(),
            on_yes: id("q_military"),
            on_no: id("wait_under_18"),
        },
        Node::Wait {
            id: id("wait_under_18"),
            title: "Naturalization requires being 18 or older".into(),
            duration: Some("Until your 18th birthday".into()),
            next: vec![id("outcome_not_yet")],
        },
        Node::Decision {
            id: id("q_military"),
            question: "Have you served honorably in the U.S. armed forces?".into(),
            on_yes: id("req_military"),
            on_no: id("q_spouse"),
        },
        Node::Requirement {
            id: id("req_military"),
            title: "Military naturalization".into(),
            requirements: vec![
                Requirement {
                    name: "Honorable service".into(),
                    citation: "INA 328-329".into(),
                    condition: "Service characterized as honorable, certified on Form N-426".into(),
                },
                Requirement {
                    name: "Good moral character".into(),
                    citation: "INA 101(f)".into(),
                    condition: "Good moral character for the statutory period".into(),
                },
            ],
            next: vec![id("q_military_wartime")],
        },
        Node::Decision {
            id: id("q_military_wartime"),
            question: "Did any of your service fall within a designated period of hostilities?"
                .into(),
            on_yes: id("pathway_military"),
            on_no: id("q_military_year"),
        },
        Node::Decision {
            id: id("q_military_year"),
            question: "Have you completed at least one year of honorable service?".into(),
            on_yes: id("pathway_military"),
            on_no: id("q_spouse"),
        },
        Node::Pathway {
            id: id("pathway_military"),
            title: "Naturalization through military service".into(),
            pathway: PathwayType::NaturalizationMilitary,
            next: vec![id("bar_gmc")],
        },
        Node::Decision {
            id: id("q_spouse"),
            question: "Are you married to and living with a U.S. citizen?".into(),
            on_yes: id("q_spouse_years"),
            on_no: id("q_residency"),
        },
        Node::Decision {
            id: id("q_spouse_years"),
            question: "Have you been a permanent resident for at least 3 years while married to \
                       that citizen?"
                .into(),
            on_yes: id("pathway_spouse"),
            on_no: id("wait_spouse"),
        },
        Node::Wait {
            id: id("wait_spouse"),
            title: "The spouse track requires 3 years as a permanent resident while married".into(),
            duration: Some("Until 3 years of permanent residence while married".into()),
            next: vec![id("outcome_not_yet")],
        },
        Node::Pathway {
            id: id("pathway_spouse"),
            title: "Naturalization as the spouse of a U.S. citizen".into(),
            pathway: PathwayType::NaturalizationSpouse,
            next: vec![id("req_presence")],
        },
        Node::Decision {
            id: id("q_residency"),
            question: "Have you been a permanent resident for at least 5 years?".into(),
            on_yes: id("pathway_standard"),
            on_no: id("wait_residency"),
        },
        Node::Wait {
            id: id("wait_residency"),
            title: "The standard track requires 5 years as a permanent resident".into(),
            duration: Some("Until 5 years of permanent residence".into()),
            next: vec![id("outcome_not_yet")],
        },
        Node::Pathway {
            id: id("pathway_standard"),
            title: "Naturalization after five years of permanent residence".into(),
            pathway: PathwayType::NaturalizationStandard,
            next: vec![id("req_presence")],
        },
        Node::Requirement {
            id: id("req_presence"),
            title: "Continuous residence and physical presence".into(),
            requirements: vec![
                Requirement {
                    name: "Continuous residence".into(),
                    citation: "INA 316(a)".into(),
                    condition: "Residence in the United States throughout the statutory period"
                        .into(),
                },
                Requirement {
                    name: "Physical presence".into(),
                    citation: "INA 316(a)".into(),
                    condition: "Physically present at least half of the statutory period".into(),
                },
                Requirement {
                    name: "State residence".into(),
                    citation: "INA 316(a)".into(),
                    condition: "Three months residing in the state or USCIS district of filing"
                        .into(),
                },
            ],
            next: vec![id("q_trips")],
        },
        Node::Decision {
            id: id("q_trips"),
            question: "Have you taken any single trip outside the United States lasting six \
                       months or longer during the statutory period?"
                .into(),
            on_yes: id("exc_trips"),
            on_no: id("bar_gmc"),
        },
        Node::Exception {
            id: id("exc_trips"),
            title: "Breaks in continuous residence".into(),
            exceptions: vec![
                Exception {
                    name: "Rebutting the presumption".into(),
                    citation: "8 CFR 316.5(c)".into(),
                    condition: "Trips of 6-12 months may be excused with evidence of continued \
                                ties (employment, home, family remaining in the U.S.)"
                        .into(),
                },
                Exception {
                    name: "Preserving residence".into(),
                    citation: "INA 316(b), Form N-470".into(),
                    condition: "Qualifying employment abroad can preserve residence if applied \
                                for before one year outside"
                        .into(),
                },
            ],
            next: vec![id("bar_gmc")],
        },
        Node::Bar {
            id: id("bar_gmc"),
            title: "Bars to good moral character".into(),
            bars: vec![
                LegalBar {
                    name: "Permanent bars".into(),
                    citation: "INA 101(f)(8)".into(),
                    condition: "Murder conviction, or an aggravated felony conviction on or \
                                after November 29, 1990"
                        .into(),
                },
                LegalBar {
                    name: "Conditional bars".into(),
                    citation: "INA 101(f)".into(),
                    condition: "Controlled-substance violations, two or more gambling offenses, \
                                false testimony for an immigration benefit, 180+ days of \
                                incarceration during the statutory period"
                        .into(),
                },
            ],
            next: vec![id("q_gmc")],
        },
        Node::Decision {
            id: id("q_gmc"),
            question: "Have you ever been arrested for, charged with, or convicted of any of \
                       the offenses above?"
                .into(),
            on_yes: id("outcome_legal_review"),
            on_no: id("process_filing"),
        },
        Node::Process {
            id: id("process_filing"),
            title: "File Form N-400".into(),
            steps: vec![
                "Prepare and file Form N-400 with supporting documents".into(),
                "Attend the biometric services appointment".into(),
                "Attend the interview; take the English and civics tests".into(),
                "Take the Oath of Allegiance at the naturalization ceremony".into(),
            ],
            next: vec![id("outcome_eligible")],
        },
        Node::Outcome {
            id: id("outcome_eligible"),
            title: "You appear eligible to apply for naturalization".into(),
            disposition: Disposition::EligibleNow,
        },
        Node::Outcome {
            id: id("outcome_citizen_at_birth"),
            title: "You are a U.S. citizen by birth".into(),
            disposition: Disposition::AlreadyCitizen,
        },
        Node::Outcome {
            id: id("outcome_acquired_abroad"),
            title: "You likely acquired U.S. citizenship at birth abroad".into(),
            disposition: Disposition::AlreadyCitizen,
        },
        Node::Outcome {
            id: id("outcome_derivative"),
            title: "You likely derived citizenship through your parent".into(),
            disposition: Disposition::AlreadyCitizen,
        },
        Node::Outcome {
            id: id("outcome_not_yet"),
            title: "You are not eligible to naturalize yet".into(),
            disposition: Disposition::NotYetEligible,
        },
        Node::Outcome {
            id: id("outcome_legal_review"),
            title: "Speak with an immigration attorney before filing".into(),
            disposition: Disposition::NeedsLegalReview,
        },
    ]
}

/// Track rules in priority order. Affirmative commitments first (military
/// over spouse over standard), then the not-yet branches so a waiting user
/// still sees the track they were on.
fn track_rules() -> Vec<TrackRule> {
    vec![
        rule(PathwayType::NaturalizationMilitary, "q_military_wartime", true),
        rule(PathwayType::NaturalizationMilitary, "q_military_year", true),
        rule(PathwayType::NaturalizationSpouse, "q_spouse_years", true),
        rule(PathwayType::NaturalizationStandard, "q_residency", true),
        rule(PathwayType::NaturalizationSpouse, "q_spouse_years", false),
        rule(PathwayType::NaturalizationStandard, "q_residency", false),
    ]
}

fn track_profiles() -> AHashMap<PathwayType, TrackProfile> {
    let mut profiles = AHashMap::new();
    profiles.insert(
        PathwayType::NaturalizationStandard,
        TrackProfile {
            requirements: vec![
                "5 years as a lawful permanent resident".into(),
                "Physical presence for at least 30 months of those 5 years".into(),
                "Continuous residence throughout the statutory period".into(),
                "Good moral character".into(),
                "English and civics knowledge".into(),
            ],
            next_steps: vec![
                "Gather the standard-track document checklist".into(),
                "File Form N-400 (filing fee $710, waivers available)".into(),
                "Prepare for the English and civics tests".into(),
            ],
            time_to_eligibility: Some("After 5 years of permanent residence".into()),
        },
    );
    profiles.insert(
        PathwayType::NaturalizationSpouse,
        TrackProfile {
            requirements: vec![
                "3 years as a lawful permanent resident".into(),
                "Married to and living with the same U.S. citizen for those 3 years".into(),
                "Physical presence for at least 18 months of those 3 years".into(),
                "Good moral character".into(),
                "English and civics knowledge".into(),
            ],
            next_steps: vec![
                "Gather proof of the marital relationship and shared residence".into(),
                "File Form N-400 (filing fee $710, waivers available)".into(),
                "Prepare for the English and civics tests".into(),
            ],
            time_to_eligibility: Some(
                "After 3 years of permanent residence while married to a U.S. citizen".into(),
            ),
        },
    );
    profiles.insert(
        PathwayType::NaturalizationMilitary,
        TrackProfile {
            requirements: vec![
                "Honorable service certified on Form N-426".into(),
                "One year of service, or any service during designated hostilities".into(),
                "Good moral character".into(),
                "English and civics knowledge".into(),
            ],
            next_steps: vec![
                "Request certification of honorable service (Form N-426)".into(),
                "File Form N-400; no filing fee for military applicants".into(),
                "Coordinate with your installation's legal office".into(),
            ],
            time_to_eligibility: Some("After one year of honorable service (peacetime)".into()),
        },
    );
    profiles.insert(
        PathwayType::DerivativeCertificate,
        TrackProfile {
            requirements: vec![
                "A U.S. citizen parent (by birth or naturalization)".into(),
                "Under 18 and a lawful permanent resident at the time of derivation".into(),
                "Residing in the citizen parent's legal and physical custody".into(),
            ],
            next_steps: vec![
                "Apply for a U.S. passport as proof of citizenship, or".into(),
                "File Form N-600 for a Certificate of Citizenship".into(),
            ],
            time_to_eligibility: None,
        },
    );
    profiles.insert(
        PathwayType::AcquisitionAtBirth,
        TrackProfile {
            requirements: vec![
                "A U.S. citizen parent at the time of your birth".into(),
                "That parent met the physical-presence rule before your birth".into(),
            ],
            next_steps: vec![
                "Apply for a U.S. passport with evidence of your parent's citizenship and \
                 presence"
                    .into(),
                "Optionally file Form N-600 for a Certificate of Citizenship".into(),
            ],
            time_to_eligibility: None,
        },
    );
    profiles
}

fn outcome_defaults() -> AHashMap<NodeId, PathwayType> {
    let mut defaults = AHashMap::new();
    defaults.insert(id("outcome_citizen_at_birth"), PathwayType::AcquisitionAtBirth);
    defaults.insert(id("outcome_acquired_abroad"), PathwayType::AcquisitionAtBirth);
    defaults.insert(id("outcome_derivative"), PathwayType::DerivativeCertificate);
    defaults.insert(id("outcome_not_yet"), PathwayType::NaturalizationStandard);
    defaults.insert(id("outcome_legal_review"), PathwayType::NaturalizationStandard);
    defaults
}

fn rule(pathway: PathwayType, node_id: &str, answer: bool) -> TrackRule {
    TrackRule {
        pathway,
        node_id: id(node_id),
        answer,
    }
}

fn id(value: &str) -> NodeId {
    value.to_string()
}
