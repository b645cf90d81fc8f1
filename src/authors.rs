use crate::aggregate::all_authors_sorted;
use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::parse::parse_log;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs, json: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let history = repo.read_log().context("Failed to read git history")?;
    let commits = parse_log(&history);
    let authors = all_authors_sorted(&commits);

    if json {
        println!("{}", serde_json::to_string_pretty(&authors)?);
    } else if authors.is_empty() {
        println!("No authors found.");
    } else {
        println!("{}", style("All Authors").bold());
        println!("{}", "─".repeat(50));
        for author in &authors {
            println!("  - {author}");
        }
    }

    Ok(())
}
