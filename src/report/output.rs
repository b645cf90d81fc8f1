use crate::error::Result;
use crate::model::Report;
use console::style;

/// Render the report as a stable, pretty-printed JSON document.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report as a three-section plain-text summary.
pub fn render_text(report: &Report) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(style("Top Authors").bold().to_string());
    lines.push("─".repeat(50));
    if report.top_authors.is_empty() {
        lines.push("No commits found.".to_string());
    } else {
        for (rank, author) in report.top_authors.iter().enumerate() {
            lines.push(format!(
                "{:>2}. {} ({} commits)",
                rank + 1,
                author.name,
                author.commits
            ));
        }
    }

    lines.push(String::new());
    lines.push(style("Keyword Matches").bold().to_string());
    lines.push("─".repeat(50));
    if report.found_keywords.is_empty() {
        lines.push("No commits matched the configured keywords.".to_string());
    } else {
        for hit in &report.found_keywords {
            lines.push(format!("[{}] {}", short_id(&hit.hash), hit.message));
        }
    }

    lines.push(String::new());
    lines.push(style("All Authors").bold().to_string());
    lines.push("─".repeat(50));
    if report.all_authors.is_empty() {
        lines.push("No authors found.".to_string());
    } else {
        for author in &report.all_authors {
            lines.push(format!("  - {author}"));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// First seven characters of a commit id, clamped for shorter ids.
pub fn short_id(id: &str) -> String {
    id.chars().take(7).collect()
}
