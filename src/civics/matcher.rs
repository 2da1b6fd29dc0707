use super::question::CivicsQuestion;

/// Free-text answer matching for civics questions.
///
/// Matching is deliberately lenient: after normalization, a user answer
/// counts as correct when it contains an accepted answer or an accepted
/// answer contains it. This lets "28" match "28, twenty-eight" and
/// "washington" match "(George) Washington", at the cost of permitting some
/// over-matching on very short answers. That trade-off is intentional and
/// should not be quietly tightened; graders wanting stricter behavior can
/// post-process.
pub struct AnswerMatcher;

impl AnswerMatcher {
    /// Whether `user_answer` counts as correct for `question`.
    ///
    /// An answer that normalizes to the empty string never matches; empty
    /// input is a form-validation condition, not a wrong answer.
    pub fn check_answer(question: &CivicsQuestion, user_answer: &str) -> bool {
        let given = Self::normalize(user_answer);
        if given.is_empty() {
            return false;
        }
        question.answers.iter().any(|accepted| {
            let accepted = Self::normalize(accepted);
            accepted.contains(&given) || given.contains(&accepted)
        })
    }

    /// Lowercases and trims. Both sides of every comparison go through this.
    fn normalize(answer: &str) -> String {
        answer.trim().to_lowercase()
    }
}
