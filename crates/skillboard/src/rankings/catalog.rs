use serde::{Deserialize, Serialize};
use std::fmt;

/// Categories offered by the marketplace skill directory.
pub const SKILL_CATEGORIES: [&str; 16] = [
    "Programming",
    "Design",
    "Marketing",
    "Writing",
    "Music",
    "Art",
    "Sports",
    "Leadership",
    "Research",
    "Public Speaking",
    "Photography",
    "Video Editing",
    "Data Analysis",
    "Web Development",
    "Mobile Development",
    "Other",
];

const ALL_CATEGORIES: &str = "all";

/// Category scope for a leaderboard view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    All,
    Named(String),
}

impl CategorySelection {
    /// `"all"` selects every category; anything else must match a skill
    /// category exactly.
    pub fn parse(raw: &str) -> Result<Self, CategoryError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::Blank);
        }
        if trimmed == ALL_CATEGORIES {
            return Ok(Self::All);
        }
        Ok(Self::Named(trimmed.to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Categories",
            Self::Named(category) => category,
        }
    }

    pub fn is_cataloged(&self) -> bool {
        match self {
            Self::All => true,
            Self::Named(category) => SKILL_CATEGORIES.contains(&category.as_str()),
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_CATEGORIES),
            Self::Named(category) => f.write_str(category),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("category selection must be 'all' or a category name")]
    Blank,
}
