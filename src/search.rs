use crate::aggregate::search_subjects;
use crate::cli::CommonArgs;
use crate::config::{config_path, Config};
use crate::git::GitRepo;
use crate::model::KeywordHit;
use crate::parse::parse_log;
use crate::report::output::short_id;
use anyhow::Context;

pub fn exec(common: CommonArgs, keywords: Vec<String>, json: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;

    // Positional keywords win over the configured set.
    let keywords = if keywords.is_empty() {
        Config::load_or_default(config_path(common.config.as_deref(), repo.path()))
            .context("Failed to load configuration")?
            .keywords()
    } else {
        keywords
    };

    let history = repo.read_log().context("Failed to read git history")?;
    let commits = parse_log(&history);
    let hits: Vec<KeywordHit> = search_subjects(&commits, &keywords)
        .into_iter()
        .map(|commit| KeywordHit {
            hash: commit.id.clone(),
            message: commit.subject.clone(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else if hits.is_empty() {
        println!("No commits matched the given keywords.");
    } else {
        for hit in &hits {
            println!("[{}] {}", short_id(&hit.hash), hit.message);
        }
    }

    Ok(())
}
