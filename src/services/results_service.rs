use async_graphql::Enum;
use serde::Serialize;

use crate::models::domain::UserAnswer;

const HIGH_TIER_MIN: u32 = 70;
const MID_TIER_MIN: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Enum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= HIGH_TIER_MIN {
            ScoreTier::High
        } else if percentage >= MID_TIER_MIN {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::High => "green",
            ScoreTier::Mid => "yellow",
            ScoreTier::Low => "red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScore {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ScoreTier,
}

pub struct ResultsService;

impl ResultsService {
    /// Scores answers against the size of the question set.
    pub fn score(answers: &[UserAnswer], total: usize) -> QuizScore {
        let score = answers.iter().filter(|a| a.is_correct).count();
        let percentage = if total == 0 {
            0
        } else {
            ((score as f64 / total as f64) * 100.0).round() as u32
        };

        QuizScore {
            score,
            total,
            percentage,
            tier: ScoreTier::from_percentage(percentage),
        }
    }

    /// Rewrites Markdown bullets ("* " / "- ") at line starts as "• ".
    pub fn format_suggestions(text: &str) -> String {
        text.lines()
            .map(|line| {
                let indent = line.len() - line.trim_start().len();
                let (lead, rest) = line.split_at(indent);
                match rest.strip_prefix("* ").or_else(|| rest.strip_prefix("- ")) {
                    Some(item) => format!("{}• {}", lead, item),
                    None => line.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
