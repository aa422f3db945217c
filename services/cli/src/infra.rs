use skillboard::config::AppConfig;
use skillboard::rankings::{CategorySelection, RosterError, RosterSnapshot};
use std::path::Path;
use tracing::{info, warn};

/// Flag path first, then `APP_ROSTER_PATH`, then the bundled sample.
pub(crate) fn load_roster(
    flag: Option<&Path>,
    config: &AppConfig,
) -> Result<RosterSnapshot, RosterError> {
    match flag.or(config.roster.path.as_deref()) {
        Some(path) => RosterSnapshot::from_path(path),
        None => {
            info!("no roster configured, using sample roster");
            Ok(RosterSnapshot::sample())
        }
    }
}

pub(crate) fn parse_category(
    raw: &str,
) -> Result<CategorySelection, skillboard::rankings::CategoryError> {
    let selection = CategorySelection::parse(raw)?;
    if !selection.is_cataloged() {
        warn!(category = %selection, "category is not in the skill catalog");
    }
    Ok(selection)
}
