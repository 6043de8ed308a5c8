use crate::{
    errors::{AppError, AppResult},
    models::domain::{Question, UserAnswer},
};

/// Whether the question on screen already holds the player's answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Answered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Presenting {
        index: usize,
        question_state: QuestionState,
    },
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    Recorded(UserAnswer),
    /// The current question was already answered; nothing changed.
    Locked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Presenting(usize),
    Completed(Vec<UserAnswer>),
}

/// Walks a fixed question set front to back, one answer per question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    state: SessionState,
    answers: Vec<UserAnswer>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> AppResult<Self> {
        if questions.is_empty() {
            return Err(AppError::ValidationError(
                "A quiz session needs at least one question".to_string(),
            ));
        }

        Ok(Self {
            questions,
            state: SessionState::Presenting {
                index: 0,
                question_state: QuestionState::Unanswered,
            },
            answers: Vec::new(),
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::Presenting { index, .. } => Some(index),
            SessionState::Completed => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    /// The answer recorded for the question on screen, if any.
    pub fn current_answer(&self) -> Option<&UserAnswer> {
        match self.state {
            SessionState::Presenting {
                question_state: QuestionState::Answered,
                ..
            } => self.answers.last(),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.questions.len() - 1)
    }

    pub fn select(&mut self, option: &str) -> AppResult<SelectOutcome> {
        let index = match self.state {
            SessionState::Completed => {
                return Err(AppError::InvalidTransition(
                    "The quiz is already completed".to_string(),
                ))
            }
            SessionState::Presenting {
                question_state: QuestionState::Answered,
                ..
            } => return Ok(SelectOutcome::Locked),
            SessionState::Presenting { index, .. } => index,
        };

        let question = &self.questions[index];
        if !question.is_option(option) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option for question {}",
                option,
                index + 1
            )));
        }

        let answer = UserAnswer::grade(question, option);
        self.answers.push(answer.clone());
        self.state = SessionState::Presenting {
            index,
            question_state: QuestionState::Answered,
        };

        Ok(SelectOutcome::Recorded(answer))
    }

    pub fn advance(&mut self) -> AppResult<AdvanceOutcome> {
        match self.state {
            SessionState::Completed => Err(AppError::InvalidTransition(
                "The quiz is already completed".to_string(),
            )),
            SessionState::Presenting {
                question_state: QuestionState::Unanswered,
                ..
            } => Err(AppError::InvalidTransition(
                "Select an answer before moving on".to_string(),
            )),
            SessionState::Presenting { index, .. } if index + 1 < self.questions.len() => {
                self.state = SessionState::Presenting {
                    index: index + 1,
                    question_state: QuestionState::Unanswered,
                };
                Ok(AdvanceOutcome::Presenting(index + 1))
            }
            SessionState::Presenting { .. } => {
                self.state = SessionState::Completed;
                Ok(AdvanceOutcome::Completed(self.answers.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{numbered_question, numbered_questions};

    #[test]
    fn new_session_presents_first_question_unanswered() {
        let session = QuizSession::new(numbered_questions(3)).unwrap();

        assert_eq!(
            session.state(),
            SessionState::Presenting {
                index: 0,
                question_state: QuestionState::Unanswered
            }
        );
        assert_eq!(session.current_question(), Some(&numbered_question(0)));
        assert!(session.current_answer().is_none());
        assert!(session.answers().is_empty());
    }

    #[test]
    fn empty_question_set_is_rejected() {
        assert!(matches!(
            QuizSession::new(Vec::new()),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn answers_follow_question_order_and_grading() {
        for n in 1..=6 {
            let questions = numbered_questions(n);
            let mut session = QuizSession::new(questions.clone()).unwrap();
            let mut emitted = None;

            for (i, question) in questions.iter().enumerate() {
                // Even questions answered correctly, odd ones with the last option.
                let choice = if i % 2 == 0 {
                    question.correct_answer().to_string()
                } else {
                    question.options()[3].clone()
                };
                session.select(&choice).unwrap();
                if let AdvanceOutcome::Completed(answers) = session.advance().unwrap() {
                    emitted = Some(answers);
                }
            }

            let answers = emitted.expect("session should complete after n cycles");
            assert_eq!(answers.len(), n);
            for (answer, question) in answers.iter().zip(&questions) {
                assert_eq!(answer.question, question.question());
                assert_eq!(
                    answer.is_correct,
                    answer.selected_answer == question.correct_answer()
                );
            }
            assert_eq!(session.state(), SessionState::Completed);
        }
    }

    #[test]
    fn second_select_on_answered_question_is_locked() {
        let mut session = QuizSession::new(numbered_questions(2)).unwrap();
        let question = numbered_question(0);

        let first = session.select(question.correct_answer()).unwrap();
        let second = session.select(&question.options()[3]).unwrap();

        assert!(matches!(first, SelectOutcome::Recorded(ref a) if a.is_correct));
        assert_eq!(second, SelectOutcome::Locked);
        assert_eq!(session.answers().len(), 1);
        assert_eq!(
            session.current_answer().map(|a| a.selected_answer.as_str()),
            Some(question.correct_answer())
        );
    }

    #[test]
    fn advance_without_answer_is_rejected_without_side_effects() {
        let mut session = QuizSession::new(numbered_questions(2)).unwrap();

        let result = session.advance();

        assert!(matches!(result, Err(AppError::InvalidTransition(_))));
        assert_eq!(session.current_index(), Some(0));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn select_rejects_unknown_option() {
        let mut session = QuizSession::new(numbered_questions(1)).unwrap();

        let result = session.select("not an option");

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(session.current_answer().is_none());
    }

    #[test]
    fn completed_session_rejects_further_transitions() {
        let mut session = QuizSession::new(numbered_questions(1)).unwrap();
        session.select(numbered_question(0).correct_answer()).unwrap();
        assert!(session.is_last_question());
        assert!(matches!(
            session.advance().unwrap(),
            AdvanceOutcome::Completed(ref answers) if answers.len() == 1
        ));

        assert!(session.select("anything").is_err());
        assert!(session.advance().is_err());
        assert!(session.current_question().is_none());
    }
}
