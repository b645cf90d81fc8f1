use crate::model::{AuthorCount, Commit};
use std::collections::{BTreeSet, HashMap};

/// Rank authors by commit count, descending.
///
/// Ties are broken by author name ascending so the ranking is deterministic
/// regardless of grouping order.
pub fn top_authors(commits: &[Commit], limit: usize) -> Vec<AuthorCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for commit in commits {
        *counts.entry(commit.author.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<AuthorCount> = counts
        .into_iter()
        .map(|(name, commits)| AuthorCount {
            name: name.to_string(),
            commits,
        })
        .collect();
    ranked.sort_by(|a, b| b.commits.cmp(&a.commits).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(limit);
    ranked
}

/// Commits whose subject contains at least one keyword, case-insensitively.
///
/// An empty keyword set matches nothing. Input order is preserved.
pub fn search_subjects<'a>(commits: &'a [Commit], keywords: &[String]) -> Vec<&'a Commit> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let folded: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    commits
        .iter()
        .filter(|commit| {
            let subject = commit.subject.to_lowercase();
            folded.iter().any(|keyword| subject.contains(keyword))
        })
        .collect()
}

/// Distinct author names in ascending codepoint order, each exactly once.
pub fn all_authors_sorted(commits: &[Commit]) -> Vec<String> {
    commits
        .iter()
        .map(|commit| commit.author.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
