//! Publishing to the static site
//!
//! A published scan is written to `<site>/scans/<date>[-<name>].html`, after
//! which the scans manifest is rebuilt from the directory contents. Pushing
//! runs `git add`, `git commit` and `git push`; a failure there is reported to
//! the caller and never touches files already written.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use momentum_scan::manifest::{scan_id, update_manifest, validate_scan_name, ScanRecord};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sub-directory of the site root holding scan pages and the manifest
pub const SCANS_DIR: &str = "scans";

/// Where one published scan lands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub site_dir: PathBuf,
    pub date: NaiveDate,
    pub name: Option<String>,
}

impl PublishTarget {
    /// Fails when `name` would place the page outside the scans directory
    pub fn new(
        site_dir: impl Into<PathBuf>,
        date: NaiveDate,
        name: Option<String>,
    ) -> Result<Self> {
        if let Some(name) = &name {
            validate_scan_name(name)?;
        }
        Ok(Self {
            site_dir: site_dir.into(),
            date,
            name: name.filter(|n| !n.is_empty()),
        })
    }

    pub fn scans_dir(&self) -> PathBuf {
        self.site_dir.join(SCANS_DIR)
    }

    pub fn scan_id(&self) -> String {
        scan_id(self.date, self.name.as_deref())
    }

    pub fn html_path(&self) -> PathBuf {
        self.scans_dir().join(format!("{}.html", self.scan_id()))
    }

    pub fn png_path(&self) -> PathBuf {
        self.html_path().with_extension("png")
    }

    /// Write the page, creating the scans directory if needed
    pub fn write_html(&self, html: &str) -> Result<PathBuf> {
        let scans_dir = self.scans_dir();
        fs::create_dir_all(&scans_dir)
            .with_context(|| format!("Failed to create scans directory: {:?}", scans_dir))?;

        let path = self.html_path();
        fs::write(&path, html).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(path)
    }

    /// Rebuild the manifest from every page now in the scans directory
    pub fn refresh_manifest(&self) -> Result<Vec<ScanRecord>> {
        let scans_dir = self.scans_dir();
        update_manifest(&scans_dir)
            .with_context(|| format!("Failed to update manifest in {:?}", scans_dir))
    }
}

/// Failure of one version-control step
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("failed to run `git {step}`: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("`git {step}` exited with {status}")]
    Failed {
        step: &'static str,
        status: std::process::ExitStatus,
    },
}

/// Commit message for a scan published on `date`, e.g. "Jan 05 scan"
pub fn commit_message(date: NaiveDate) -> String {
    format!("{} scan", date.format("%b %d"))
}

/// Stage everything under `repo_dir`, commit, and push
pub fn git_push(repo_dir: &Path, date: NaiveDate) -> std::result::Result<(), GitError> {
    let message = commit_message(date);
    run_git(repo_dir, "add", &["add", "."])?;
    run_git(repo_dir, "commit", &["commit", "-m", &message])?;
    run_git(repo_dir, "push", &["push"])?;
    Ok(())
}

fn run_git(repo_dir: &Path, step: &'static str, args: &[&str]) -> std::result::Result<(), GitError> {
    log::debug!("Running git {:?} in {:?}", args, repo_dir);
    let status = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .status()
        .map_err(|source| GitError::Spawn { step, source })?;

    if status.success() {
        Ok(())
    } else {
        Err(GitError::Failed { step, status })
    }
}
