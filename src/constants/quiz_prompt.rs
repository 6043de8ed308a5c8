use crate::{
    constants::OPTIONS_PER_QUESTION,
    models::domain::{Difficulty, UserAnswer},
};

pub const QUIZ_SCHEMA_NAME: &str = "generated_quiz";

pub fn quiz_generation_prompt(topic: &str, difficulty: Difficulty, question_count: usize) -> String {
    format!(
        "Generate a {difficulty} level quiz with exactly {question_count} multiple-choice questions on the topic \"{topic}\". \
Each question must have exactly {OPTIONS_PER_QUESTION} options. \
Ensure one of the options is the correct answer and that correctAnswer repeats that option's text exactly. \
Do not repeat questions.\n\n\
Return a single JSON object with a \"questions\" array. Each entry has:\n\
- question: the quiz question text\n\
- options: an array of {OPTIONS_PER_QUESTION} possible answers\n\
- correctAnswer: the correct answer, which must be one of the strings from the options array"
    )
}

pub fn improvement_prompt(topic: &str, incorrect_answers: &[UserAnswer]) -> String {
    let summary = incorrect_answers
        .iter()
        .map(|answer| {
            format!(
                "- Question: \"{}\" (Your answer: \"{}\", Correct: \"{}\")",
                answer.question, answer.selected_answer, answer.correct_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "A user took a quiz on the topic \"{topic}\". They answered the following questions incorrectly:\n\
{summary}\n\n\
Based on these incorrect answers, analyze the user's weak points. \
Provide a concise, encouraging, and helpful summary of the specific sub-topics or concepts they should review. \
Present the feedback as a bulleted list. Do not just repeat the questions."
    )
}
