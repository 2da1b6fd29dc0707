use super::matcher::AnswerMatcher;
use super::question::{Category, CivicsQuestion, OfficialsField};
use crate::config::CurrentOfficialsConfig;
use ahash::AHashMap;
use rand::Rng;
use rand::seq::{SliceRandom, index};

/// Where a seed question's accepted answers come from: a fixed literal list,
/// or a field of the injected officials configuration.
#[derive(Debug, Clone)]
pub enum AnswerSource {
    Fixed(&'static [&'static str]),
    Officials(OfficialsField),
}

/// A compiled-in question before officials resolution.
#[derive(Debug, Clone)]
pub struct QuestionSeed {
    pub id: u32,
    pub category: Category,
    pub question: &'static str,
    pub answers: AnswerSource,
    pub explanation: Option<&'static str>,
    pub senior: bool,
}

/// The immutable civics question bank.
///
/// Officials-dependent answers (current president, governor, and so on) are
/// resolved once at construction from the injected configuration; the bank
/// itself never changes afterwards and can be shared freely.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<CivicsQuestion>,
    by_id: AHashMap<u32, usize>,
}

impl QuestionBank {
    /// Builds the standard bank from the compiled-in question table.
    pub fn standard(officials: &CurrentOfficialsConfig) -> Self {
        Self::from_seeds(crate::data::question_seeds(), officials)
    }

    /// Builds a bank from explicit seeds. Used by the standard constructor
    /// and by tests that want a small bank.
    pub fn from_seeds(seeds: Vec<QuestionSeed>, officials: &CurrentOfficialsConfig) -> Self {
        let questions: Vec<CivicsQuestion> = seeds
            .into_iter()
            .map(|seed| CivicsQuestion {
                id: seed.id,
                category: seed.category,
                question: seed.question.to_string(),
                answers: resolve_answers(&seed.answers, officials),
                explanation: seed.explanation.map(str::to_string),
                senior: seed.senior,
            })
            .collect();
        let by_id = questions
            .iter()
            .enumerate()
            .map(|(idx, q)| (q.id, idx))
            .collect();
        Self { questions, by_id }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&CivicsQuestion> {
        self.by_id.get(&id).map(|idx| &self.questions[*idx])
    }

    pub fn all(&self) -> &[CivicsQuestion] {
        &self.questions
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CivicsQuestion> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    /// The reduced pool offered under the 65/20 consideration.
    pub fn senior_pool(&self) -> impl Iterator<Item = &CivicsQuestion> {
        self.questions.iter().filter(|q| q.senior)
    }

    /// Whether `user_answer` is correct for question `id`.
    pub fn check_answer(&self, id: u32, user_answer: &str) -> Option<bool> {
        self.get(id)
            .map(|q| AnswerMatcher::check_answer(q, user_answer))
    }

    /// Uniform random sample without replacement from the (optionally
    /// senior-filtered) pool. Never returns duplicate ids; a `count` larger
    /// than the pool clamps to the whole pool, shuffled.
    pub fn random_questions(&self, count: usize, senior_only: bool) -> Vec<&CivicsQuestion> {
        self.random_questions_with(&mut rand::rng(), count, senior_only)
    }

    /// Deterministic variant of [`random_questions`] for callers that seed
    /// their own generator.
    ///
    /// [`random_questions`]: QuestionBank::random_questions
    pub fn random_questions_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        senior_only: bool,
    ) -> Vec<&CivicsQuestion> {
        let pool: Vec<&CivicsQuestion> = if senior_only {
            self.senior_pool().collect()
        } else {
            self.questions.iter().collect()
        };

        if count >= pool.len() {
            let mut all = pool;
            all.shuffle(rng);
            return all;
        }

        index::sample(rng, pool.len(), count)
            .iter()
            .map(|idx| pool[idx])
            .collect()
    }
}

fn resolve_answers(source: &AnswerSource, officials: &CurrentOfficialsConfig) -> Vec<String> {
    match source {
        AnswerSource::Fixed(answers) => answers.iter().map(|s| s.to_string()).collect(),
        AnswerSource::Officials(field) => {
            let resolved = officials.answers_for(*field);
            if resolved.is_empty() {
                // State-level data the deployment chose not to supply; the
                // official answer sheets use the same wording.
                vec!["Answers will vary".to_string()]
            } else {
                resolved
            }
        }
    }
}
