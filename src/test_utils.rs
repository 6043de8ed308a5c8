#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Question, UserAnswer};

    /// Question `i` of a synthetic set. The correct option rotates over the
    /// first three positions, so the fourth option is always wrong.
    pub fn numbered_question(i: usize) -> Question {
        let options: Vec<String> = ["A", "B", "C", "D"]
            .iter()
            .map(|letter| format!("Q{} option {}", i, letter))
            .collect();
        let correct = options[i % 3].clone();
        Question::new(format!("Question {}?", i), options, correct)
            .expect("fixture question should be valid")
    }

    pub fn numbered_questions(n: usize) -> Vec<Question> {
        (0..n).map(numbered_question).collect()
    }

    pub fn incorrect_answer(question: &str, selected: &str, correct: &str) -> UserAnswer {
        UserAnswer {
            question: question.to_string(),
            selected_answer: selected.to_string(),
            is_correct: false,
            correct_answer: correct.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_numbered_question() {
        let question = numbered_question(4);
        assert_eq!(question.question(), "Question 4?");
        assert_eq!(question.correct_answer(), "Q4 option B");
        assert_ne!(question.options()[3], question.correct_answer());
    }

    #[test]
    fn test_fixtures_numbered_questions_are_distinct() {
        let questions = numbered_questions(5);
        assert_eq!(questions.len(), 5);
        assert_ne!(questions[0], questions[1]);
    }
}
