pub mod quiz_prompt;

/// Questions requested per quiz unless `QUIZ_QUESTION_COUNT` overrides it.
pub const NUMBER_OF_QUESTIONS: usize = 5;

/// Options every generated question must carry.
pub const OPTIONS_PER_QUESTION: usize = 4;

pub const CONGRATULATIONS_MESSAGE: &str =
    "Amazing job! You answered all questions correctly. Keep up the great work!";

pub const SUGGESTIONS_FALLBACK_MESSAGE: &str =
    "Could not load improvement suggestions at this time.";
