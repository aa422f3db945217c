use super::catalog::CategorySelection;
use super::leaderboard::{assign_dense_ranks, RankedEntry};
use tracing::debug;

/// Restricts a leaderboard to users holding at least one skill in the
/// selected category and re-ranks the survivors from 1.
///
/// Scores still reflect every skill the user owns. `All` returns the input
/// unchanged, ranks included.
pub fn filter_by_category(
    leaderboard: &[RankedEntry],
    selection: &CategorySelection,
) -> Vec<RankedEntry> {
    let category = match selection {
        CategorySelection::All => return leaderboard.to_vec(),
        CategorySelection::Named(category) => category.as_str(),
    };

    let mut retained: Vec<RankedEntry> = leaderboard
        .iter()
        .filter(|entry| entry.has_category(category))
        .cloned()
        .collect();
    assign_dense_ranks(&mut retained);

    debug!(
        category,
        retained = retained.len(),
        population = leaderboard.len(),
        "leaderboard filtered by category"
    );

    retained
}
