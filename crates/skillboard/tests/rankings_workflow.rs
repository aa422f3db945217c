use skillboard::rankings::report::{write_csv, LeaderboardView, RankTier};
use skillboard::rankings::{
    build_leaderboard, filter_by_category, score_breakdown, CategorySelection, RosterSnapshot,
    SkillLevel, UserId,
};
use std::io::Cursor;

fn names(leaderboard: &[skillboard::rankings::RankedEntry]) -> Vec<(&str, usize, u64)> {
    leaderboard
        .iter()
        .map(|entry| (entry.user.name.as_str(), entry.rank, entry.total_score))
        .collect()
}

#[test]
fn sample_roster_ranks_students_by_total_score() {
    let roster = RosterSnapshot::sample();
    let leaderboard = roster.student_leaderboard();

    assert_eq!(
        names(&leaderboard),
        vec![
            ("Alice Johnson", 1, 185),
            ("Carol Davis", 2, 185),
            ("Bob Smith", 3, 100),
            ("David Wilson", 4, 100),
            ("Emma Brown", 5, 75),
        ]
    );
    assert_eq!(leaderboard[0].level, SkillLevel::Expert);
    assert_eq!(leaderboard[4].level, SkillLevel::Intermediate);
}

#[test]
fn programming_view_reranks_matching_students() {
    let leaderboard = RosterSnapshot::sample().student_leaderboard();
    let selection = CategorySelection::parse("Programming").expect("valid category");

    let programming = filter_by_category(&leaderboard, &selection);

    assert_eq!(
        names(&programming),
        vec![
            ("Alice Johnson", 1, 185),
            ("David Wilson", 2, 100),
            ("Emma Brown", 3, 75),
        ]
    );
}

#[test]
fn switching_categories_rederives_from_the_full_leaderboard() {
    let leaderboard = RosterSnapshot::sample().student_leaderboard();

    let design = filter_by_category(
        &leaderboard,
        &CategorySelection::parse("Design").expect("valid"),
    );
    let data = filter_by_category(
        &leaderboard,
        &CategorySelection::parse("Data Analysis").expect("valid"),
    );
    let all = filter_by_category(&leaderboard, &CategorySelection::parse("all").expect("valid"));

    assert_eq!(names(&design), vec![("Carol Davis", 1, 185)]);
    assert_eq!(names(&data), vec![("Bob Smith", 1, 100)]);
    assert_eq!(all, leaderboard);
}

#[test]
fn json_roster_round_trips_through_the_pipeline() {
    let roster = RosterSnapshot::sample();
    let raw = serde_json::to_vec(&roster).expect("roster serializes");
    let reloaded = RosterSnapshot::from_reader(Cursor::new(raw)).expect("roster reloads");

    assert_eq!(reloaded, roster);
    assert_eq!(
        build_leaderboard(reloaded.users(), &reloaded.skills_by_user()),
        roster.student_leaderboard()
    );
}

#[test]
fn breakdown_explains_each_leaderboard_score() {
    let roster = RosterSnapshot::sample();
    for entry in roster.student_leaderboard() {
        let breakdown = score_breakdown(&roster.skills_for(&entry.user.id));
        assert_eq!(breakdown.total_score, entry.total_score);
    }
    assert!(roster.user(&UserId::from("404")).is_none());
}

#[test]
fn view_and_export_reflect_filtered_ranks() {
    let leaderboard = RosterSnapshot::sample().student_leaderboard();
    let selection = CategorySelection::parse("Programming").expect("valid");
    let programming = filter_by_category(&leaderboard, &selection);

    let view = LeaderboardView::new(&selection, &programming);
    assert_eq!(view.category_label, "Programming");
    assert_eq!(view.population, 3);
    assert_eq!(view.podium[1].name, "David Wilson");
    assert_eq!(view.podium[1].tier, RankTier::RunnerUp);

    let mut buffer = Vec::new();
    write_csv(&programming, &mut buffer).expect("csv written");
    let csv = String::from_utf8(buffer).expect("utf8");
    assert!(csv.contains("2,4,David Wilson,Tech University,Computer Science,100,1,1,Advanced"));
}
