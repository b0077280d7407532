use crate::preferences::Preferences;
use serde::{Deserialize, Serialize};

/// System message sent with every completion request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful cooking assistant that generates detailed recipes.";

/// Reaction to the previous recipe. Only the immediately preceding
/// interaction is referenced; intents are never accumulated across rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackIntent {
    LikedButDifferent,
    Disliked,
}

impl FeedbackIntent {
    /// The fixed clause inserted into the regeneration prompt.
    pub fn clause(&self) -> &'static str {
        match self {
            Self::LikedButDifferent => "liked the previous recipe but wants something different",
            Self::Disliked => "disliked the previous recipe",
        }
    }
}

fn or_any(value: &str) -> &str {
    if value.is_empty() { "any" } else { value }
}

/// Builds the user prompt from the current preferences. Empty fields read as
/// "any". Deterministic and side-effect-free.
pub fn build_prompt(preferences: &Preferences, feedback: Option<FeedbackIntent>) -> String {
    let dietary = or_any(&preferences.dietary);
    let cuisine = or_any(&preferences.cuisine);
    let time = or_any(&preferences.time);
    let difficulty = or_any(&preferences.difficulty);

    match feedback {
        Some(intent) => format!(
            "Generate a different recipe than the previous one. The user {}. \
             Make it {} diet, {} cuisine, takes {} minutes, and {} difficulty.",
            intent.clause(),
            dietary,
            cuisine,
            time,
            difficulty
        ),
        None => format!(
            "Generate a recipe that is {} diet, {} cuisine, takes {} minutes, and {} difficulty.",
            dietary, cuisine, time, difficulty
        ),
    }
}
