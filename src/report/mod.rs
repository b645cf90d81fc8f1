pub mod exec;
pub mod output;

pub use exec::exec;
pub use output::{render_json, render_text};

use crate::aggregate::{all_authors_sorted, search_subjects, top_authors};
use crate::model::{Commit, KeywordHit, Report};

/// Number of authors shown in the report's ranking section.
pub const TOP_AUTHOR_LIMIT: usize = 3;

/// Assemble the full report from the three aggregation queries.
pub fn build_report(commits: &[Commit], keywords: &[String]) -> Report {
    let found_keywords = search_subjects(commits, keywords)
        .into_iter()
        .map(|commit| KeywordHit {
            hash: commit.id.clone(),
            message: commit.subject.clone(),
        })
        .collect();

    Report {
        top_authors: top_authors(commits, TOP_AUTHOR_LIMIT),
        found_keywords,
        all_authors: all_authors_sorted(commits),
    }
}
