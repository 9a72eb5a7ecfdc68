//! Console rendering of search results and analyses

use crate::finder::{RepositoryAnalysis, RepositoryRecord};

const NAME_WIDTH: usize = 40;
const LICENSE_WIDTH: usize = 15;
const DESCRIPTION_WIDTH: usize = 100;

const HEADERS: [&str; 9] = [
    "Repository",
    "Stars",
    "Forks",
    "Age(Y)",
    "Contributors",
    "Commits",
    "Language",
    "Issues",
    "License",
];

// Numeric columns are right-aligned.
const NUMERIC: [bool; 9] = [false, true, true, true, true, true, false, true, false];

/// Cuts `text` to `max` characters, marking the cut with `...`.
#[must_use]
pub fn ellipsize(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

/// Renders records as a grid table.
#[must_use]
pub fn render_table(records: &[RepositoryRecord]) -> String {
    let rows: Vec<[String; 9]> = records
        .iter()
        .map(|r| {
            [
                ellipsize(&r.full_name, NAME_WIDTH),
                r.stars.to_string(),
                r.forks.to_string(),
                format!("{:.1}", r.age_years),
                r.contributors.to_string(),
                r.commits.to_string(),
                r.language.clone().unwrap_or_else(|| "Unknown".to_string()),
                r.open_issues.to_string(),
                ellipsize(&r.license, LICENSE_WIDTH),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for width in &widths {
            line.extend(std::iter::repeat_n(fill, width + 2));
            line.push('+');
        }
        line
    };
    let render_row = |cells: &[String], align: &[bool]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .zip(align)
            .map(|((cell, &width), &right)| {
                if right {
                    format!(" {cell:>width$} |")
                } else {
                    format!(" {cell:<width$} |")
                }
            })
            .collect();
        format!("|{}", padded.concat())
    };

    let header_cells = HEADERS.map(str::to_string);
    let mut out = vec![rule('-'), render_row(&header_cells[..], &[false; 9][..]), rule('=')];
    for row in &rows {
        out.push(render_row(&row[..], &NUMERIC[..]));
        out.push(rule('-'));
    }
    if rows.is_empty() {
        out.pop();
        out.push(rule('-'));
    }
    out.join("\n")
}

/// Renders the detailed view of the first `limit` records.
#[must_use]
pub fn render_details(records: &[RepositoryRecord], limit: usize) -> String {
    let banner = "=".repeat(80);
    let mut lines = vec![
        banner.clone(),
        format!("TOP {limit} REPOSITORIES - DETAILED VIEW"),
        banner,
    ];

    for (i, r) in records.iter().take(limit).enumerate() {
        let description = r.description.as_deref().unwrap_or("No description");
        let topics = if r.topics.is_empty() {
            "None".to_string()
        } else {
            r.topics.join(", ")
        };
        lines.extend([
            String::new(),
            format!("{}. {}", i + 1, r.full_name),
            format!("   URL: {}", r.url),
            format!(
                "   Description: {}",
                ellipsize(description, DESCRIPTION_WIDTH)
            ),
            format!(
                "   Created: {} | Last Updated: {}",
                r.created_at.format("%Y-%m-%d"),
                r.last_updated.format("%Y-%m-%d")
            ),
            format!(
                "   Stats: stars {} | forks {} | contributors {} | commits {}",
                r.stars, r.forks, r.contributors, r.commits
            ),
            format!(
                "   Last Commit: {} by {}",
                r.last_commit.date, r.last_commit.author
            ),
            format!("   Commit Message: {}", r.last_commit.message),
            format!("   Default Branch: {}", r.default_branch),
            format!("   Topics: {topics}"),
        ]);
        if let Some(score) = r.version_score {
            lines.push(format!("   Version Score: {score}"));
        }
        if !r.degraded_fields.is_empty() {
            lines.push(format!("   Unavailable: {}", r.degraded_fields.join(", ")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders an analysis as `key: value` lines.
#[must_use]
pub fn render_analysis(analysis: &RepositoryAnalysis) -> String {
    let list = |items: &[String]| format!("[{}]", items.join(", "));
    [
        format!("name: {}", analysis.name),
        format!("url: {}", analysis.url),
        format!("build_tools: {}", list(&analysis.build_tools)),
        format!("frameworks: {}", list(&analysis.frameworks)),
        format!(
            "language: {}",
            analysis.language.as_deref().unwrap_or("None")
        ),
        format!("topics: {}", list(&analysis.topics)),
    ]
    .join("\n")
}
