pub mod application_state;
pub mod quiz;
pub mod user_answer;

pub use application_state::{ApplicationState, Phase};
pub use quiz::{Difficulty, Question};
pub use user_answer::UserAnswer;
