use crate::error::{GsumError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle to the repository the history is read from.
pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = path
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or(std::env::current_dir()?);

        if !path.is_dir() {
            return Err(GsumError::Git(format!(
                "not a directory: {}",
                path.display()
            )));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `git log` and return its raw `<id>|<author>|<subject>` output.
    ///
    /// Fails when the command cannot be spawned, exits non-zero, or the
    /// repository has no commits at all.
    pub fn read_log(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["log", "--pretty=format:%h|%an|%s", "--encoding=UTF-8"])
            .env("LANG", "C.UTF-8")
            .current_dir(&self.path)
            .output()
            .map_err(|e| GsumError::Git(format!("failed to run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GsumError::Git(format!(
                "git log exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        if text.trim().is_empty() {
            return Err(GsumError::EmptyHistory);
        }
        Ok(text)
    }
}
