use crate::aggregate::top_authors;
use crate::cli::CommonArgs;
use crate::git::GitRepo;
use crate::model::AuthorCount;
use crate::parse::parse_log;
use anyhow::Context;
use console::style;

pub fn exec(common: CommonArgs, limit: usize, json: bool) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let history = repo.read_log().context("Failed to read git history")?;
    let commits = parse_log(&history);
    let ranked = top_authors(&commits, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        output_table(&ranked);
    }

    Ok(())
}

fn output_table(ranked: &[AuthorCount]) {
    if ranked.is_empty() {
        println!("No commits found.");
        return;
    }

    println!(
        "{:<40} {:>8}",
        style("Author").bold(),
        style("Commits").bold()
    );
    println!("{}", "─".repeat(49));
    for entry in ranked {
        println!("{:<40} {:>8}", entry.name, entry.commits);
    }
}
