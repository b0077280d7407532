use serde::{Deserialize, Serialize};

/// Option sets offered by the preferences UI. The empty string means "any".
pub const DIETARY_OPTIONS: &[&str] = &["", "vegetarian", "vegan", "omnivore", "gluten-free"];
pub const CUISINE_OPTIONS: &[&str] = &["", "italian", "asian", "mexican", "mediterranean"];
pub const TIME_OPTIONS: &[&str] = &["", "15", "30", "60"];
pub const DIFFICULTY_OPTIONS: &[&str] = &["", "easy", "medium", "hard"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceField {
    Dietary,
    Cuisine,
    Time,
    Difficulty,
}

impl PreferenceField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dietary => "dietary",
            Self::Cuisine => "cuisine",
            Self::Time => "time",
            Self::Difficulty => "difficulty",
        }
    }

    pub fn allowed_values(&self) -> &'static [&'static str] {
        match self {
            Self::Dietary => DIETARY_OPTIONS,
            Self::Cuisine => CUISINE_OPTIONS,
            Self::Time => TIME_OPTIONS,
            Self::Difficulty => DIFFICULTY_OPTIONS,
        }
    }

    /// Boundary-level check against the field's option set. The store itself
    /// accepts any value (see `Preferences::set_field`).
    pub fn is_allowed(&self, value: &str) -> bool {
        self.allowed_values().contains(&value)
    }
}

/// The four-field user selection driving prompt construction.
///
/// Every field starts empty, meaning "any". There are no cross-field
/// invariants and nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dietary: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub difficulty: String,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a single field, leaving the others unchanged. No validation
    /// happens here; enforcing the option sets is the UI boundary's job.
    pub fn set_field(&mut self, field: PreferenceField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PreferenceField::Dietary => self.dietary = value,
            PreferenceField::Cuisine => self.cuisine = value,
            PreferenceField::Time => self.time = value,
            PreferenceField::Difficulty => self.difficulty = value,
        }
    }

    pub fn get(&self, field: PreferenceField) -> &str {
        match field {
            PreferenceField::Dietary => &self.dietary,
            PreferenceField::Cuisine => &self.cuisine,
            PreferenceField::Time => &self.time,
            PreferenceField::Difficulty => &self.difficulty,
        }
    }
}
