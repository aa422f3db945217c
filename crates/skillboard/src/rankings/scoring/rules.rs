use super::super::domain::{Skill, SkillLevel};
use super::{ScoreComponent, ScoreFactor};

pub const ACHIEVEMENT_POINTS: u64 = 20;
pub const WORK_SAMPLE_POINTS: u64 = 15;
pub const TAG_POINTS: u64 = 5;

impl SkillLevel {
    pub const fn weight(self) -> u64 {
        match self {
            Self::Beginner => 10,
            Self::Intermediate => 25,
            Self::Advanced => 50,
            Self::Expert => 100,
        }
    }
}

/// Saturates instead of wrapping so oversized inputs pin at `u64::MAX`.
pub(crate) fn count_points(count: usize, per_item: u64) -> u64 {
    u64::try_from(count)
        .unwrap_or(u64::MAX)
        .saturating_mul(per_item)
}

pub(crate) fn skill_points(skill: &Skill) -> u64 {
    [
        skill.level.weight(),
        count_points(skill.achievements.len(), ACHIEVEMENT_POINTS),
        count_points(skill.work_samples.len(), WORK_SAMPLE_POINTS),
        count_points(skill.tags.len(), TAG_POINTS),
    ]
    .into_iter()
    .fold(0, u64::saturating_add)
}

pub(crate) fn skill_components(skill: &Skill) -> [ScoreComponent; 4] {
    let component = |factor: ScoreFactor, points: u64, notes: String| ScoreComponent {
        skill_id: skill.id.clone(),
        skill_title: skill.title.clone(),
        factor,
        points,
        notes,
    };

    let achievements = skill.achievements.len();
    let work_samples = skill.work_samples.len();
    let tags = skill.tags.len();

    [
        component(
            ScoreFactor::Level,
            skill.level.weight(),
            format!("{} level", skill.level.label()),
        ),
        component(
            ScoreFactor::Achievements,
            count_points(achievements, ACHIEVEMENT_POINTS),
            format!("{achievements} achievement(s) x {ACHIEVEMENT_POINTS}"),
        ),
        component(
            ScoreFactor::WorkSamples,
            count_points(work_samples, WORK_SAMPLE_POINTS),
            format!("{work_samples} work sample(s) x {WORK_SAMPLE_POINTS}"),
        ),
        component(
            ScoreFactor::TagDiversity,
            count_points(tags, TAG_POINTS),
            format!("{tags} tag(s) x {TAG_POINTS}"),
        ),
    ]
}
