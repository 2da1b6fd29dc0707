//! Per-pathway document checklists and filing-fee records.
//!
//! Fee figures follow the 2024 USCIS fee rule: $710 for an online N-400,
//! $0 for military applicants, $1,385 for a paper N-600.

use crate::documents::{DocCategory, DocPriority, Document};
use crate::pathway::{PathwayCost, PathwayType};

/// Filing-fee records for every pathway.
pub fn pathway_costs() -> Vec<PathwayCost> {
    vec![
        PathwayCost {
            pathway: PathwayType::NaturalizationStandard,
            filing_fee: 710.0,
            notes: "N-400 filed online; $760 on paper. Fee waivers and reductions available.",
        },
        PathwayCost {
            pathway: PathwayType::NaturalizationSpouse,
            filing_fee: 710.0,
            notes: "Same N-400 fee schedule as the standard track.",
        },
        PathwayCost {
            pathway: PathwayType::NaturalizationMilitary,
            filing_fee: 0.0,
            notes: "No fee for applicants filing under the military provisions.",
        },
        PathwayCost {
            pathway: PathwayType::DerivativeCertificate,
            filing_fee: 1_385.0,
            notes: "N-600 on paper; $1,335 online. Not required if a passport suffices as proof.",
        },
        PathwayCost {
            pathway: PathwayType::AcquisitionAtBirth,
            filing_fee: 0.0,
            notes: "No application required; a passport application proves the claim.",
        },
    ]
}

/// The filing-fee record for one pathway.
pub fn cost_for(pathway: PathwayType) -> PathwayCost {
    pathway_costs()
        .into_iter()
        .find(|cost| cost.pathway == pathway)
        // pathway_costs() covers PathwayType::ALL; the enum is closed.
        .unwrap_or(PathwayCost {
            pathway,
            filing_fee: 0.0,
            notes: "",
        })
}

/// The document checklist for one pathway.
pub fn checklist(pathway: PathwayType) -> Vec<Document> {
    match pathway {
        PathwayType::NaturalizationStandard => {
            let mut docs = naturalization_common(710.0);
            docs.push(doc(
                "Tax returns or IRS transcripts for the last 5 years",
                DocCategory::Financial,
                DocPriority::Recommended,
                None,
                Some("Transcripts are free from the IRS"),
            ));
            docs
        }
        PathwayType::NaturalizationSpouse => {
            let mut docs = naturalization_common(710.0);
            docs.extend([
                doc(
                    "Spouse's proof of U.S. citizenship",
                    DocCategory::Relationship,
                    DocPriority::Required,
                    None,
                    Some("Birth certificate, naturalization certificate, or U.S. passport"),
                ),
                doc(
                    "Marriage certificate",
                    DocCategory::Relationship,
                    DocPriority::Required,
                    Some(20.0),
                    Some("Certified copy from the issuing office"),
                ),
                doc(
                    "Evidence of shared residence for 3 years",
                    DocCategory::Relationship,
                    DocPriority::Required,
                    None,
                    Some("Joint leases, bank statements, or tax filings"),
                ),
                doc(
                    "Proof of termination of prior marriages",
                    DocCategory::Relationship,
                    DocPriority::Conditional,
                    Some(20.0),
                    Some("Divorce decrees or death certificates, if either spouse was married before"),
                ),
            ]);
            docs
        }
        PathwayType::NaturalizationMilitary => {
            // Military filings are fee-exempt, so no fee line item.
            let mut docs = vec![
                doc(
                    "Form N-400, Application for Naturalization",
                    DocCategory::Form,
                    DocPriority::Required,
                    None,
                    Some("No filing fee under the military provisions"),
                ),
                doc(
                    "Form N-426, certified by your component",
                    DocCategory::Military,
                    DocPriority::Required,
                    None,
                    Some("Certification of honorable service; must be signed within 6 months"),
                ),
                doc(
                    "DD Form 214 or discharge orders",
                    DocCategory::Military,
                    DocPriority::Conditional,
                    None,
                    Some("For veterans no longer serving"),
                ),
            ];
            docs.extend(identity_common());
            docs
        }
        PathwayType::DerivativeCertificate => vec![
            doc(
                "Form N-600, Application for Certificate of Citizenship",
                DocCategory::Form,
                DocPriority::Required,
                Some(1_385.0),
                Some("Paper filing fee; $1,335 online"),
            ),
            doc(
                "Parent's proof of U.S. citizenship",
                DocCategory::Relationship,
                DocPriority::Required,
                None,
                None,
            ),
            doc(
                "Your birth certificate showing the parental relationship",
                DocCategory::Identity,
                DocPriority::Required,
                Some(25.0),
                Some("Certified copy with translation if not in English"),
            ),
            doc(
                "Evidence of legal and physical custody",
                DocCategory::Relationship,
                DocPriority::Required,
                None,
                Some("School or medical records, custody orders"),
            ),
            doc(
                "Permanent resident card (copy)",
                DocCategory::Identity,
                DocPriority::Required,
                None,
                None,
            ),
            doc(
                "Parent's marriage or divorce records",
                DocCategory::Relationship,
                DocPriority::Conditional,
                Some(20.0),
                Some("Where the citizenship claim runs through a step- or divorced parent"),
            ),
        ],
        PathwayType::AcquisitionAtBirth => vec![
            doc(
                "U.S. passport application (Form DS-11)",
                DocCategory::Form,
                DocPriority::Required,
                Some(165.0),
                Some("Passport book fee including execution"),
            ),
            doc(
                "Parent's proof of U.S. citizenship at your birth",
                DocCategory::Relationship,
                DocPriority::Required,
                None,
                None,
            ),
            doc(
                "Evidence of parent's physical presence before your birth",
                DocCategory::Relationship,
                DocPriority::Required,
                None,
                Some("School transcripts, employment records, tax filings"),
            ),
            doc(
                "Your foreign birth certificate with translation",
                DocCategory::Identity,
                DocPriority::Required,
                Some(25.0),
                None,
            ),
            doc(
                "Form N-600 for a Certificate of Citizenship",
                DocCategory::Form,
                DocPriority::Optional,
                Some(1_385.0),
                Some("Optional belt-and-suspenders proof alongside the passport"),
            ),
        ],
    }
}

/// Items shared by the civilian naturalization tracks.
fn naturalization_common(filing_fee: f64) -> Vec<Document> {
    let mut docs = vec![
        doc(
            "Form N-400, Application for Naturalization",
            DocCategory::Form,
            DocPriority::Required,
            None,
            None,
        ),
        doc(
            "N-400 filing fee",
            DocCategory::Fee,
            DocPriority::Required,
            Some(filing_fee),
            Some("Online filing; $760 on paper"),
        ),
    ];
    docs.extend(identity_common());
    docs.extend([
        doc(
            "Evidence of continuous residence",
            DocCategory::Residence,
            DocPriority::Recommended,
            None,
            Some("Leases, utility bills, employment history"),
        ),
        doc(
            "Court and police records for any arrest",
            DocCategory::Residence,
            DocPriority::Conditional,
            Some(20.0),
            Some("Certified dispositions for every arrest or charge, even if dismissed"),
        ),
        doc(
            "Trip log for travel outside the United States",
            DocCategory::Residence,
            DocPriority::Conditional,
            None,
            Some("Needed when any trip approached six months"),
        ),
    ]);
    docs
}

fn identity_common() -> Vec<Document> {
    vec![
        doc(
            "Permanent resident card (copy, front and back)",
            DocCategory::Identity,
            DocPriority::Required,
            None,
            None,
        ),
        doc(
            "State-issued photo identification",
            DocCategory::Identity,
            DocPriority::Required,
            None,
            None,
        ),
        doc(
            "Passport-style photographs",
            DocCategory::Identity,
            DocPriority::Conditional,
            Some(15.0),
            Some("Only for applicants residing outside the United States"),
        ),
    ]
}

fn doc(
    name: &str,
    category: DocCategory,
    priority: DocPriority,
    cost: Option<f64>,
    notes: Option<&str>,
) -> Document {
    Document {
        name: name.to_string(),
        category,
        priority,
        cost,
        notes: notes.map(str::to_string),
    }
}
