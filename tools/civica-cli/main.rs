use civica::civics::QuestionBank;
use civica::documents;
use civica::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// A CLI-friendly mirror of the pathway enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PathwayCli {
    Standard,
    Spouse,
    Military,
    Derivative,
    AtBirth,
}

impl From<PathwayCli> for PathwayType {
    fn from(value: PathwayCli) -> Self {
        match value {
            PathwayCli::Standard => PathwayType::NaturalizationStandard,
            PathwayCli::Spouse => PathwayType::NaturalizationSpouse,
            PathwayCli::Military => PathwayType::NaturalizationMilitary,
            PathwayCli::Derivative => PathwayType::DerivativeCertificate,
            PathwayCli::AtBirth => PathwayType::AcquisitionAtBirth,
        }
    }
}

/// Citizenship-pathway rules engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the eligibility wizard interactively
    Wizard,
    /// Take a civics practice quiz
    Quiz {
        /// Number of questions to ask
        #[arg(short, long, default_value_t = 10)]
        count: usize,
        /// Draw only from the 65/20 senior pool
        #[arg(long)]
        senior: bool,
        /// Path to a JSON file with the current officials
        #[arg(long)]
        officials: Option<String>,
    },
    /// Evaluate fee-waiver eligibility for a household
    Fees {
        /// Path to a JSON file describing the household
        household: String,
        /// Pathway being filed
        #[arg(value_enum, default_value = "standard")]
        pathway: PathwayCli,
    },
    /// Print the document checklist for a pathway
    Documents {
        #[arg(value_enum)]
        pathway: PathwayCli,
        /// Include conditional and optional items in the total
        #[arg(long)]
        all: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Wizard => run_wizard(),
        Command::Quiz {
            count,
            senior,
            officials,
        } => run_quiz(count, senior, officials.as_deref()),
        Command::Fees { household, pathway } => run_fees(&household, pathway.into()),
        Command::Documents { pathway, all } => run_documents(pathway.into(), all),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_wizard() -> Result<()> {
    let table = Arc::new(civica::data::eligibility_table()?);
    table.validate()?;
    let classifier = Arc::new(civica::data::classifier());
    let mut session = WizardSession::start(table, classifier);
    session.advance_to_decision()?;

    let stdin = io::stdin();
    loop {
        if session.is_complete() {
            if let Phase::Completed { terminal, results } = session.phase() {
                println!("\n=== {} ===", terminal.title);
                for result in results {
                    println!("\nPathway: {}", result.title);
                    println!("Eligible now: {}", if result.eligible { "yes" } else { "no" });
                    if let Some(when) = &result.time_to_eligibility {
                        println!("Earliest eligibility: {}", when);
                    }
                    for step in &result.next_steps {
                        println!("  - {}", step);
                    }
                }
            }
            return Ok(());
        }

        // Clone the node so the session can be driven while it renders.
        let node = session.current_node()?.clone();
        match node {
            Node::Decision { question, .. } => {
                print!("{} [y/n/back]: ", question);
                io::stdout().flush()?;
                let mut line = String::new();
                stdin.lock().read_line(&mut line)?;
                match line.trim().to_lowercase().as_str() {
                    "y" | "yes" => {
                        session.answer(true)?;
                    }
                    "n" | "no" => {
                        session.answer(false)?;
                    }
                    "back" => {
                        if let Err(TraversalError::AtStart) = session.back() {
                            println!("(already at the first step)");
                        }
                    }
                    other => println!("Unrecognized input '{}'", other),
                }
            }
            Node::Requirement { title, requirements, .. } => {
                println!("\n{}", title);
                for req in &requirements {
                    println!("  - {} ({}): {}", req.name, req.citation, req.condition);
                }
                session.advance()?;
            }
            Node::Bar { title, bars, .. } => {
                println!("\n{}", title);
                for bar in &bars {
                    println!("  - {} ({}): {}", bar.name, bar.citation, bar.condition);
                }
                session.advance()?;
            }
            Node::Exception { title, exceptions, .. } => {
                println!("\n{}", title);
                for exc in &exceptions {
                    println!("  - {} ({}): {}", exc.name, exc.citation, exc.condition);
                }
                session.advance()?;
            }
            Node::Process { title, steps, .. } => {
                println!("\n{}", title);
                for (i, step) in steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
                session.advance()?;
            }
            Node::Wait { title, duration, .. } => {
                println!("\n{}", title);
                if let Some(duration) = duration {
                    println!("  ({})", duration);
                }
                session.advance()?;
            }
            _ => {
                session.advance()?;
            }
        }
    }
}

fn run_quiz(count: usize, senior: bool, officials_path: Option<&str>) -> Result<()> {
    let officials = match officials_path {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => default_officials(),
    };
    let bank = QuestionBank::standard(&officials);
    let questions = bank.random_questions(count, senior);

    let stdin = io::stdin();
    let mut correct = 0usize;
    for (i, question) in questions.iter().enumerate() {
        println!("\n[{}/{}] {}", i + 1, questions.len(), question.question);
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;

        if AnswerMatcher::check_answer(question, line.trim()) {
            println!("Correct!");
            correct += 1;
        } else {
            println!("Accepted answers: {}", question.answers.join("; "));
        }
        if let Some(explanation) = &question.explanation {
            println!("  ({})", explanation);
        }
    }
    println!("\nScore: {}/{}", correct, questions.len());
    Ok(())
}

fn run_fees(household_path: &str, pathway: PathwayType) -> Result<()> {
    let household: HouseholdData = serde_json::from_str(&fs::read_to_string(household_path)?)?;
    let determination = determine_fee_waiver(&household, pathway);

    println!("Pathway: {}", pathway);
    println!("Category: {:?}", determination.category);
    println!("Eligible for relief: {}", determination.eligible());
    if let Some(form) = determination.form {
        println!("File: Form {}", form);
    }
    println!("Reason: {}", determination.reason);
    if !determination.required_evidence.is_empty() {
        println!("Evidence:");
        for item in &determination.required_evidence {
            println!("  - {}", item);
        }
    }
    Ok(())
}

fn run_documents(pathway: PathwayType, all: bool) -> Result<()> {
    println!("Checklist for {}:\n", pathway);
    for doc in documents::full_checklist(pathway) {
        let cost = doc
            .cost
            .map(|c| format!(" (${:.0})", c))
            .unwrap_or_default();
        println!("  [{:?}] {}{}", doc.priority, doc.name, cost);
        if let Some(notes) = &doc.notes {
            println!("      {}", notes);
        }
    }
    println!(
        "\nEstimated total: ${:.0}",
        documents::calculate_total_cost(pathway, all)
    );
    Ok(())
}

/// Placeholder officials for quiz runs without a config file. Deployments
/// should pass --officials with current data.
fn default_officials() -> CurrentOfficialsConfig {
    CurrentOfficialsConfig {
        president: "Visit uscis.gov/citizenship for the current answer".to_string(),
        vice_president: "Visit uscis.gov/citizenship for the current answer".to_string(),
        speaker_of_the_house: "Visit uscis.gov/citizenship for the current answer".to_string(),
        chief_justice: "John Roberts".to_string(),
        president_party: "Visit uscis.gov/citizenship for the current answer".to_string(),
        state_governor: None,
        state_senators: Vec::new(),
        state_representative: None,
        state_capital: None,
    }
}
