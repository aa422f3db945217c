use super::super::leaderboard::RankedEntry;
use super::views::LeaderboardView;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    user_id: &'a str,
    name: &'a str,
    college: &'a str,
    department: &'a str,
    total_score: u64,
    achievements: usize,
    projects: usize,
    level: &'static str,
}

/// Writes one CSV row per ranked entry, header first.
pub fn write_csv<W: Write>(leaderboard: &[RankedEntry], writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for entry in leaderboard {
        csv_writer.serialize(CsvRow {
            rank: entry.rank,
            user_id: &entry.user.id.0,
            name: &entry.user.name,
            college: &entry.user.college,
            department: &entry.user.department,
            total_score: entry.total_score,
            achievements: entry.achievements,
            projects: entry.projects,
            level: entry.level.label(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(view: &LeaderboardView, writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, view)?;
    Ok(())
}
