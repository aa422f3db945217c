mod export;
pub mod views;

pub use export::{write_csv, write_json, ExportError};
pub use views::{LeaderboardView, RankTier, RankedEntryView};
