use clap::ValueEnum;
use skillboard::error::AppError;
use skillboard::rankings::report::{write_csv, write_json, LeaderboardView, RankedEntryView};
use skillboard::rankings::{
    filter_by_category, score_breakdown, CategorySelection, RosterSnapshot, UserId,
    SKILL_CATEGORIES,
};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub(crate) fn render_rankings<W: Write>(
    roster: &RosterSnapshot,
    selection: &CategorySelection,
    format: OutputFormat,
    limit: Option<usize>,
    mut out: W,
) -> Result<(), AppError> {
    let leaderboard = roster.student_leaderboard();
    let mut ranked = filter_by_category(&leaderboard, selection);

    if format == OutputFormat::Csv {
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        write_csv(&ranked, out)?;
        return Ok(());
    }

    let mut view = LeaderboardView::new(selection, &ranked);
    if let Some(limit) = limit {
        view = view.truncate(limit);
    }

    if format == OutputFormat::Json {
        write_json(&view, &mut out)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Student Rankings: {}", view.category_label)?;
    if view.population == 0 {
        writeln!(out, "No students have skills in this category yet.")?;
        return Ok(());
    }

    writeln!(out, "\nTop performers")?;
    for row in &view.podium {
        writeln!(
            out,
            "  {} - {} ({} pts, {} level)",
            row.tier_label, row.name, row.total_score, row.level_label
        )?;
    }

    writeln!(out, "\nComplete rankings ({} students)", view.population)?;
    for row in &view.entries {
        write_row(&mut out, row)?;
    }

    Ok(())
}

fn write_row<W: Write>(out: &mut W, row: &RankedEntryView) -> std::io::Result<()> {
    writeln!(
        out,
        "  #{:<3} {:<20} {:>5} pts | {} achievements | {} projects | {}",
        row.rank, row.name, row.total_score, row.achievements, row.projects, row.level_label
    )?;
    writeln!(out, "        {} - {}", row.department, row.college)?;
    if !row.specializations.is_empty() {
        writeln!(out, "        {}", row.specializations.join(", "))?;
    }
    Ok(())
}

pub(crate) fn render_breakdown<W: Write>(
    roster: &RosterSnapshot,
    user_id: &str,
    mut out: W,
) -> Result<(), AppError> {
    let id = UserId::from(user_id);
    let user = roster
        .user(&id)
        .ok_or_else(|| AppError::UnknownUser(user_id.to_string()))?;
    let breakdown = score_breakdown(&roster.skills_for(&id));

    writeln!(out, "Score breakdown for {} ({})", user.name, user.role.label())?;
    if breakdown.components.is_empty() {
        writeln!(out, "  No skills recorded.")?;
    }

    let mut current_skill = None;
    for component in &breakdown.components {
        if current_skill != Some(&component.skill_id) {
            writeln!(out, "  {}", component.skill_title)?;
            current_skill = Some(&component.skill_id);
        }
        writeln!(
            out,
            "    {:<14} {:>4}  {}",
            component.factor.label(),
            component.points,
            component.notes
        )?;
    }
    writeln!(out, "  Total: {} pts", breakdown.total_score)?;

    Ok(())
}

pub(crate) fn render_categories<W: Write>(
    roster: &RosterSnapshot,
    mut out: W,
) -> Result<(), AppError> {
    let leaderboard = roster.student_leaderboard();

    writeln!(out, "Skill categories")?;
    for category in SKILL_CATEGORIES {
        let ranked = leaderboard
            .iter()
            .filter(|entry| entry.has_category(category))
            .count();
        writeln!(out, "  {:<20} {} ranked", category, ranked)?;
    }

    Ok(())
}
