use chrono::NaiveDate;

use crate::rankings::domain::{
    Achievement, AchievementKind, Skill, SkillId, SkillLevel, User, UserId, UserRole, WorkSample,
    WorkSampleKind,
};
use crate::rankings::leaderboard::SkillsByUser;

pub(super) fn user(id: &str, name: &str) -> User {
    User {
        id: UserId::from(id),
        name: name.to_string(),
        email: format!("{id}@college.edu"),
        role: UserRole::Student,
        bio: String::new(),
        college: "Tech University".to_string(),
        department: "Computer Science".to_string(),
        year: Some(2),
        position: None,
        specializations: vec!["Rust".to_string()],
        avatar: None,
    }
}

pub(super) fn achievement(id: &str) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: format!("Achievement {id}"),
        description: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date"),
        kind: AchievementKind::Award,
    }
}

pub(super) fn work_sample(id: &str) -> WorkSample {
    WorkSample {
        id: id.to_string(),
        title: format!("Sample {id}"),
        description: String::new(),
        url: None,
        image_url: None,
        kind: WorkSampleKind::Project,
    }
}

pub(super) fn skill(
    id: &str,
    owner: &str,
    category: &str,
    level: SkillLevel,
    achievements: usize,
    work_samples: usize,
    tags: usize,
) -> Skill {
    Skill {
        id: SkillId(id.to_string()),
        user_id: UserId::from(owner),
        title: format!("{category} skill {id}"),
        category: category.to_string(),
        description: String::new(),
        level,
        tags: (0..tags).map(|index| format!("tag-{index}")).collect(),
        achievements: (0..achievements)
            .map(|index| achievement(&format!("{id}-a{index}")))
            .collect(),
        work_samples: (0..work_samples)
            .map(|index| work_sample(&format!("{id}-w{index}")))
            .collect(),
    }
}

pub(super) fn group(skills: Vec<Skill>) -> SkillsByUser {
    let mut grouped = SkillsByUser::new();
    for skill in skills {
        grouped.entry(skill.user_id.clone()).or_default().push(skill);
    }
    grouped
}

/// User A: one Expert Programming skill worth 185.
pub(super) fn user_a_skill() -> Skill {
    skill("sa", "a", "Programming", SkillLevel::Expert, 2, 2, 3)
}

/// One Advanced skill worth 75.
pub(super) fn advanced_75(id: &str, owner: &str, category: &str) -> Skill {
    skill(id, owner, category, SkillLevel::Advanced, 1, 0, 1)
}
