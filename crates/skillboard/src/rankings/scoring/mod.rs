mod rules;

pub use rules::{ACHIEVEMENT_POINTS, TAG_POINTS, WORK_SAMPLE_POINTS};

use super::domain::{Skill, SkillId};
use serde::{Deserialize, Serialize};

/// Sums the per-skill contributions of every skill a user owns.
///
/// Order independent and total: an empty slice scores 0.
pub fn compute_score(skills: &[Skill]) -> u64 {
    skills
        .iter()
        .map(rules::skill_points)
        .fold(0, u64::saturating_add)
}

/// Same total as [`compute_score`], itemised per skill and factor.
pub fn score_breakdown(skills: &[Skill]) -> ScoreBreakdown {
    let components: Vec<ScoreComponent> =
        skills.iter().flat_map(rules::skill_components).collect();
    let total_score = components
        .iter()
        .map(|component| component.points)
        .fold(0, u64::saturating_add);

    ScoreBreakdown {
        total_score,
        components,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Level,
    Achievements,
    WorkSamples,
    TagDiversity,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Level => "Level",
            Self::Achievements => "Achievements",
            Self::WorkSamples => "Work samples",
            Self::TagDiversity => "Tag diversity",
        }
    }
}

/// Discrete contribution to a score, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub skill_id: SkillId,
    pub skill_title: String,
    pub factor: ScoreFactor,
    pub points: u64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: u64,
    pub components: Vec<ScoreComponent>,
}
