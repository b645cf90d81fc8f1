use serde::{Deserialize, Serialize};

/// One commit parsed from a `<id>|<author>|<subject>` history line.
///
/// Constructed only by the log parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: String,
    pub author: String,
    pub subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub name: String,
    pub commits: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub hash: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub top_authors: Vec<AuthorCount>,
    pub found_keywords: Vec<KeywordHit>,
    pub all_authors: Vec<String>,
}
