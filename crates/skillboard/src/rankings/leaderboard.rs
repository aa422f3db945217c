use super::domain::{Skill, SkillLevel, User, UserId};
use super::scoring::compute_score;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Skills grouped by owner, in roster order.
pub type SkillsByUser = HashMap<UserId, Vec<Skill>>;

/// Leaderboard row derived fresh on every ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub user: User,
    pub skills: Vec<Skill>,
    pub total_score: u64,
    /// 1-based position within the currently ranked population.
    pub rank: usize,
    pub achievements: usize,
    pub projects: usize,
    pub level: SkillLevel,
}

impl RankedEntry {
    fn from_skills(user: &User, skills: &[Skill]) -> Self {
        let achievements = skills.iter().map(|skill| skill.achievements.len()).sum();
        let projects = skills.iter().map(|skill| skill.work_samples.len()).sum();
        let level = skills
            .iter()
            .map(|skill| skill.level)
            .max()
            .unwrap_or_default();

        Self {
            user: user.clone(),
            skills: skills.to_vec(),
            total_score: compute_score(skills),
            rank: 0,
            achievements,
            projects,
            level,
        }
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.skills.iter().any(|skill| skill.category == category)
    }
}

/// Scores every user and orders them by total score, highest first.
///
/// Equal scores keep their input order: `sort_by` is stable and no secondary
/// key is applied. Users missing from `skills_by_user` own no skills and
/// score 0 at Beginner level.
pub fn build_leaderboard(users: &[User], skills_by_user: &SkillsByUser) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = users
        .iter()
        .map(|user| {
            let skills = skills_by_user
                .get(&user.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            RankedEntry::from_skills(user, skills)
        })
        .collect();

    entries.sort_by(|left, right| right.total_score.cmp(&left.total_score));
    assign_dense_ranks(&mut entries);

    debug!(
        population = entries.len(),
        top_score = entries.first().map(|entry| entry.total_score),
        "leaderboard built"
    );

    entries
}

/// Rewrites ranks as `position + 1` over the slice as currently ordered.
pub(crate) fn assign_dense_ranks(entries: &mut [RankedEntry]) {
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index + 1;
    }
}
