use std::io::IsTerminal;

use chrono::Utc;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::leaderboard::rank::ScoreDirection;
use crate::leaderboard::{LeaderboardEntry, LeaderboardResponse};
use crate::scoring::top_recommendations;
use crate::source::types::Boundary;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Composite scores are stored lower-is-better; humans read them the other
/// way around, so tables show the explicit inversion.
fn display_score(composite: f64, direction: ScoreDirection) -> f64 {
    match direction {
        ScoreDirection::LowerIsBetter => 100.0 - composite,
        ScoreDirection::HigherIsBetter => composite,
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format a warning banner for degraded (sample-data) responses
pub fn format_warning(warning: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}", format!("! {}", warning).yellow())
    } else {
        format!("! {}", warning)
    }
}

/// Format the board as a ranked table with columns:
/// Rank, Pseudonym, Score, Grade, Campus
/// Rank column: 3 chars (fits "50."), right-aligned
/// Score column: right-aligned, 5 chars wide (fits "100.0")
pub fn format_leaderboard_table(
    response: &LeaderboardResponse,
    direction: ScoreDirection,
    use_colors: bool,
) -> String {
    if response.leaderboard.is_empty() {
        return "No leaderboard entries yet.".to_string();
    }

    let term_width = get_terminal_width();

    let rank_width = 3;
    let score_width = 5;
    let grade_width = 2;
    let separator = "  ";

    response
        .leaderboard
        .iter()
        .map(|entry| {
            let rank_str = format!("{:>2}.", entry.rank);
            let score = display_score(entry.composite_score, direction);
            let score_padded = format!("{:>width$.1}", score, width = score_width);
            let grade_padded = format!("{:<width$}", entry.grade, width = grade_width);

            // Leave the remaining width for pseudonym + campus
            let fixed_width = rank_width
                + 1
                + score_width
                + grade_width
                + separator.len() * 4
                + entry.campus_affiliation.chars().count();
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&entry.pseudonym, width - fixed_width)
                }
                Some(_) => truncate_name(&entry.pseudonym, 16),
                None => entry.pseudonym.clone(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    grade_padded.green(),
                    separator,
                    name,
                    separator,
                    entry.campus_affiliation.cyan()
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    rank_str,
                    score_padded,
                    separator,
                    grade_padded,
                    separator,
                    name,
                    separator,
                    entry.campus_affiliation
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary line under the table: participants, average display score, and
/// how many entries carry an A-range grade.
pub fn format_summary(response: &LeaderboardResponse, direction: ScoreDirection) -> String {
    let shown = &response.leaderboard;
    let total = response.total_users.unwrap_or(shown.len());

    let average = if shown.is_empty() {
        0.0
    } else {
        shown
            .iter()
            .map(|e| display_score(e.composite_score, direction))
            .sum::<f64>()
            / shown.len() as f64
    };

    let a_grades = shown.iter().filter(|e| e.grade.starts_with('A')).count();

    format!(
        "Participants: {}  |  Average score: {:.1}  |  A-grade entries: {}",
        total, average, a_grades
    )
}

/// Format one entry with its boundary breakdown and top recommendations
/// (for the `breakdown` subcommand)
pub fn format_entry_detail(
    entry: &LeaderboardEntry,
    direction: ScoreDirection,
    use_colors: bool,
) -> String {
    let mut lines = Vec::new();

    let score = display_score(entry.composite_score, direction);
    let header = format!(
        "#{} {} - {:.1}/100 (Grade {})",
        entry.rank, entry.pseudonym, score, entry.grade
    );
    if use_colors {
        lines.push(format!("{}", header.bold()));
    } else {
        lines.push(header);
    }
    lines.push(format!("  Campus: {}", entry.campus_affiliation));
    lines.push(format!("  Submitted: {}", format_age(Utc::now() - entry.timestamp)));

    if let Some(scores) = &entry.boundary_scores {
        lines.push("  Planetary boundaries:".to_string());
        for boundary in Boundary::ALL {
            if let Some(value) = scores.get(boundary) {
                let shown = display_score(value.round(), direction);
                lines.push(format!("    {:<26} {:>5.0}/100", boundary.label(), shown));
            }
        }
    }

    let top = top_recommendations(&entry.recommendations);
    if !top.is_empty() {
        lines.push("  Top actions:".to_string());
        for (i, rec) in top.iter().enumerate() {
            lines.push(format!("    {}. {} ({})", i + 1, rec.action, rec.impact));
        }
    }

    lines.join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
fn format_age(duration: chrono::Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w ago", weeks)
    } else if days >= 1 {
        format!("{}d ago", days)
    } else if hours >= 1 {
        format!("{}h ago", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m ago", minutes)
        } else {
            "just now".to_string()
        }
    }
}
