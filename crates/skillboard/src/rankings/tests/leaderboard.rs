use super::common::*;
use crate::rankings::domain::{SkillLevel, UserId};
use crate::rankings::leaderboard::{build_leaderboard, SkillsByUser};

#[test]
fn higher_score_ranks_first() {
    let users = vec![user("b", "Bea"), user("a", "Ari")];
    let skills = group(vec![user_a_skill(), advanced_75("sb", "b", "Research")]);

    let leaderboard = build_leaderboard(&users, &skills);

    assert_eq!(leaderboard.len(), 2);
    assert_eq!(leaderboard[0].user.id, UserId::from("a"));
    assert_eq!(leaderboard[0].total_score, 185);
    assert_eq!(leaderboard[0].rank, 1);
    assert_eq!(leaderboard[1].user.id, UserId::from("b"));
    assert_eq!(leaderboard[1].total_score, 75);
    assert_eq!(leaderboard[1].rank, 2);
}

#[test]
fn equal_scores_keep_input_order_with_distinct_ranks() {
    let users = vec![user("c", "Cy"), user("d", "Di")];
    let skills = group(vec![
        advanced_75("sc", "c", "Design"),
        advanced_75("sd", "d", "Design"),
    ]);

    let leaderboard = build_leaderboard(&users, &skills);
    let order: Vec<(&str, usize)> = leaderboard
        .iter()
        .map(|entry| (entry.user.id.0.as_str(), entry.rank))
        .collect();
    assert_eq!(order, vec![("c", 1), ("d", 2)]);

    let reversed = build_leaderboard(&[user("d", "Di"), user("c", "Cy")], &skills);
    assert_eq!(reversed[0].user.id, UserId::from("d"));
}

#[test]
fn aggregates_counts_and_highest_level() {
    let users = vec![user("u", "Uma")];
    let skills = group(vec![
        skill("s1", "u", "Design", SkillLevel::Intermediate, 1, 2, 0),
        skill("s2", "u", "Art", SkillLevel::Advanced, 3, 0, 0),
        skill("s3", "u", "Music", SkillLevel::Beginner, 0, 4, 0),
    ]);

    let entry = &build_leaderboard(&users, &skills)[0];

    assert_eq!(entry.achievements, 4);
    assert_eq!(entry.projects, 6);
    assert_eq!(entry.level, SkillLevel::Advanced);
    assert_eq!(entry.skills.len(), 3);
}

#[test]
fn users_without_skills_score_zero_at_beginner() {
    let users = vec![user("z", "Zed"), user("a", "Ari")];
    let skills = group(vec![user_a_skill()]);

    let leaderboard = build_leaderboard(&users, &skills);
    let idle = &leaderboard[1];

    assert_eq!(idle.user.id, UserId::from("z"));
    assert_eq!(idle.total_score, 0);
    assert_eq!(idle.level, SkillLevel::Beginner);
    assert_eq!(idle.achievements, 0);
    assert_eq!(idle.projects, 0);
    assert!(idle.skills.is_empty());
}

#[test]
fn empty_roster_builds_empty_leaderboard() {
    assert!(build_leaderboard(&[], &SkillsByUser::new()).is_empty());
}

#[test]
fn repeated_builds_serialize_identically() {
    let users: Vec<_> = (0..12).map(|index| user(&format!("u{index}"), "Student")).collect();
    let skills = group(
        (0..12)
            .map(|index| {
                let level = SkillLevel::ordered()[index % 4];
                skill(
                    &format!("s{index}"),
                    &format!("u{index}"),
                    "Programming",
                    level,
                    index % 3,
                    index % 2,
                    index % 5,
                )
            })
            .collect(),
    );

    let first = serde_json::to_string(&build_leaderboard(&users, &skills)).expect("serializes");
    let second = serde_json::to_string(&build_leaderboard(&users, &skills)).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn ranks_are_contiguous_from_one() {
    for size in 0..9 {
        let users: Vec<_> = (0..size).map(|index| user(&format!("u{index}"), "S")).collect();
        let skills = group(
            (0..size)
                .map(|index| {
                    skill(
                        &format!("s{index}"),
                        &format!("u{index}"),
                        "Art",
                        SkillLevel::Beginner,
                        index % 2,
                        0,
                        0,
                    )
                })
                .collect(),
        );

        let ranks: Vec<usize> = build_leaderboard(&users, &skills)
            .iter()
            .map(|entry| entry.rank)
            .collect();
        assert_eq!(ranks, (1..=size).collect::<Vec<_>>());
    }
}

#[test]
fn extra_achievement_never_worsens_rank() {
    let users = vec![user("a", "Ari"), user("b", "Bea"), user("c", "Cy")];
    let base = vec![
        skill("sa", "a", "Art", SkillLevel::Advanced, 0, 0, 0),
        skill("sb", "b", "Art", SkillLevel::Advanced, 0, 0, 3),
        skill("sc", "c", "Art", SkillLevel::Advanced, 0, 0, 4),
    ];

    for target in ["a", "b", "c"] {
        let before = build_leaderboard(&users, &group(base.clone()));
        let mut boosted = base.clone();
        if let Some(skill) = boosted.iter_mut().find(|skill| skill.user_id.0 == target) {
            skill.achievements.push(achievement("bonus"));
        }
        let after = build_leaderboard(&users, &group(boosted));

        let find = |board: &[crate::rankings::RankedEntry]| {
            board
                .iter()
                .find(|entry| entry.user.id.0 == target)
                .map(|entry| (entry.rank, entry.total_score))
                .expect("user ranked")
        };
        let (rank_before, score_before) = find(&before);
        let (rank_after, score_after) = find(&after);

        assert_eq!(score_after, score_before + 20);
        assert!(rank_after <= rank_before, "{target} dropped rank");
    }
}
