use crate::dto::application_dto::SubmittedAnswer;
use crate::models::test::Question;

/// Minimum percentage (inclusive) for a screening test to count as passed.
pub const PASS_THRESHOLD: f64 = 50.0;

pub struct ScoringService;

impl ScoringService {
    /// Percentage of correctly answered questions, in [0, 100].
    ///
    /// Answers are matched to questions by id; a question without a
    /// submitted answer counts as incorrect. An empty question set scores
    /// 0 rather than dividing by zero.
    pub fn score(questions: &[Question], answers: &[SubmittedAnswer]) -> f64 {
        if questions.is_empty() {
            return 0.0;
        }

        let correct = questions
            .iter()
            .filter(|q| {
                answers
                    .iter()
                    .find(|a| a.question_id == q.id)
                    .map(|a| a.answer_number == q.correct_answer)
                    .unwrap_or(false)
            })
            .count();

        (correct as f64 / questions.len() as f64) * 100.0
    }

    pub fn passes(score: f64) -> bool {
        score >= PASS_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, correct_answer: i32) -> Question {
        Question {
            id,
            test_id: 1,
            question_text: format!("question {}", id),
            option1: "a".into(),
            option2: "b".into(),
            option3: "c".into(),
            option4: "d".into(),
            correct_answer,
        }
    }

    fn answer(question_id: i64, answer_number: i32) -> SubmittedAnswer {
        SubmittedAnswer {
            question_id,
            answer_number,
        }
    }

    #[test]
    fn empty_question_set_scores_zero() {
        assert_eq!(ScoringService::score(&[], &[]), 0.0);
        assert_eq!(ScoringService::score(&[], &[answer(1, 1)]), 0.0);
    }

    #[test]
    fn score_stays_in_percentage_range() {
        let questions: Vec<Question> = (1..=7).map(|id| question(id, 2)).collect();
        let all_wrong: Vec<SubmittedAnswer> = (1..=7).map(|id| answer(id, 3)).collect();
        let all_right: Vec<SubmittedAnswer> = (1..=7).map(|id| answer(id, 2)).collect();

        assert_eq!(ScoringService::score(&questions, &all_wrong), 0.0);
        assert_eq!(ScoringService::score(&questions, &all_right), 100.0);
    }

    #[test]
    fn missing_answer_counts_as_incorrect() {
        let questions = vec![question(1, 1), question(2, 1)];
        let answers = vec![answer(1, 1)];
        assert_eq!(ScoringService::score(&questions, &answers), 50.0);
    }

    #[test]
    fn answer_matching_is_by_question_id_not_position() {
        let questions = vec![question(10, 4), question(20, 1)];
        let answers = vec![answer(20, 1), answer(10, 4)];
        assert_eq!(ScoringService::score(&questions, &answers), 100.0);
    }

    #[test]
    fn adding_a_correct_answer_never_decreases_the_score() {
        let questions: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let mut answers = vec![answer(1, 1)];
        let mut previous = ScoringService::score(&questions, &answers);

        for id in 2..=4 {
            answers.push(answer(id, 1));
            let next = ScoringService::score(&questions, &answers);
            assert!(next >= previous);
            previous = next;
        }
    }

    #[test]
    fn threshold_is_inclusive_at_fifty() {
        assert!(ScoringService::passes(50.0));
        assert!(ScoringService::passes(100.0));
        assert!(!ScoringService::passes(49.999));
        assert!(!ScoringService::passes(25.0));
    }

    #[test]
    fn two_of_four_scores_fifty_and_passes() {
        let questions: Vec<Question> = (1..=4).map(|id| question(id, 2)).collect();
        let answers = vec![answer(1, 2), answer(2, 2), answer(3, 1), answer(4, 3)];
        let score = ScoringService::score(&questions, &answers);
        assert_eq!(score, 50.0);
        assert!(ScoringService::passes(score));
    }

    #[test]
    fn one_of_four_scores_twenty_five_and_fails() {
        let questions: Vec<Question> = (1..=4).map(|id| question(id, 2)).collect();
        let answers = vec![answer(1, 2), answer(2, 1), answer(3, 1), answer(4, 3)];
        let score = ScoringService::score(&questions, &answers);
        assert_eq!(score, 25.0);
        assert!(!ScoringService::passes(score));
    }
}
