//! Skill scoring, leaderboard ranking and category-scoped re-ranking.
//!
//! Every pass derives fresh [`RankedEntry`] values from an immutable
//! [`RosterSnapshot`]; nothing is cached between passes.

pub mod catalog;
pub mod domain;
mod filter;
mod leaderboard;
pub mod report;
pub mod roster;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CategoryError, CategorySelection, SKILL_CATEGORIES};
pub use domain::{
    Achievement, AchievementKind, LevelParseError, Skill, SkillId, SkillLevel, User, UserId,
    UserRole, WorkSample, WorkSampleKind,
};
pub use filter::filter_by_category;
pub use leaderboard::{build_leaderboard, RankedEntry, SkillsByUser};
pub use roster::{RosterError, RosterSnapshot};
pub use scoring::{compute_score, score_breakdown, ScoreBreakdown, ScoreComponent, ScoreFactor};
