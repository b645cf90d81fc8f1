use super::{build_report, render_json, render_text};
use crate::cli::CommonArgs;
use crate::config::{config_path, Config, OutputFormat};
use crate::git::GitRepo;
use crate::parse::parse_log;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn exec(
    common: CommonArgs,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let config = Config::load_or_default(config_path(common.config.as_deref(), repo.path()))
        .context("Failed to load configuration")?;

    let history = repo.read_log().context("Failed to read git history")?;
    let commits = parse_log(&history);
    let report = build_report(&commits, &config.keywords());

    match format.unwrap_or_else(|| config.format()) {
        OutputFormat::Plaintext => {
            print!("{}", render_text(&report));
        }
        OutputFormat::Json => {
            let document = render_json(&report)?;
            let path = output.unwrap_or_else(|| config.output.file.clone());
            persist(&document, &path)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("{document}");
        }
    }

    Ok(())
}

/// Write the fully rendered document, creating missing parent directories.
fn persist(document: &str, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, document)
}
