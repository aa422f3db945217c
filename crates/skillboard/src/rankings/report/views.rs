use super::super::catalog::CategorySelection;
use super::super::domain::{SkillLevel, UserId};
use super::super::leaderboard::RankedEntry;
use serde::Serialize;

const PODIUM_SIZE: usize = 3;
const SPECIALIZATION_PREVIEW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    Champion,
    RunnerUp,
    ThirdPlace,
    Contender,
}

impl RankTier {
    pub const fn for_rank(rank: usize) -> Self {
        match rank {
            1 => Self::Champion,
            2 => Self::RunnerUp,
            3 => Self::ThirdPlace,
            _ => Self::Contender,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Champion => "Champion",
            Self::RunnerUp => "Runner-up",
            Self::ThirdPlace => "Third place",
            Self::Contender => "Contender",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntryView {
    pub rank: usize,
    pub tier: RankTier,
    pub tier_label: &'static str,
    pub user_id: UserId,
    pub name: String,
    pub college: String,
    pub department: String,
    pub specializations: Vec<String>,
    pub total_score: u64,
    pub achievements: usize,
    pub projects: usize,
    pub level: SkillLevel,
    pub level_label: &'static str,
}

impl RankedEntryView {
    pub fn from_entry(entry: &RankedEntry) -> Self {
        let tier = RankTier::for_rank(entry.rank);
        Self {
            rank: entry.rank,
            tier,
            tier_label: tier.label(),
            user_id: entry.user.id.clone(),
            name: entry.user.name.clone(),
            college: entry.user.college.clone(),
            department: entry.user.department.clone(),
            specializations: entry
                .user
                .specializations
                .iter()
                .take(SPECIALIZATION_PREVIEW)
                .cloned()
                .collect(),
            total_score: entry.total_score,
            achievements: entry.achievements,
            projects: entry.projects,
            level: entry.level,
            level_label: entry.level.label(),
        }
    }
}

/// Display-ready leaderboard for one category selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub category: String,
    pub category_label: String,
    pub population: usize,
    pub podium: Vec<RankedEntryView>,
    pub entries: Vec<RankedEntryView>,
}

impl LeaderboardView {
    pub fn new(selection: &CategorySelection, leaderboard: &[RankedEntry]) -> Self {
        let entries: Vec<RankedEntryView> =
            leaderboard.iter().map(RankedEntryView::from_entry).collect();
        let podium = entries.iter().take(PODIUM_SIZE).cloned().collect();

        Self {
            category: selection.to_string(),
            category_label: selection.label().to_string(),
            population: entries.len(),
            podium,
            entries,
        }
    }

    /// Keeps the first `limit` rows; the podium and population are unchanged.
    pub fn truncate(mut self, limit: usize) -> Self {
        self.entries.truncate(limit);
        self
    }
}
