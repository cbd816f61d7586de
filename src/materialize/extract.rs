//! Subtree extraction and post-clone cleanup.
//!
//! [`extract_subtree`] turns a directory into a copy of one of its own
//! subdirectories. It works purely on the filesystem, so it can be tested
//! without cloning anything.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};

use crate::error::{Result, ScaffoldError};

/// Base name of the staging directory used while promoting a subtree.
pub const STAGING_DIR: &str = "_temp_template";

/// Directories removed from every materialized project.
pub const CLEANUP_DIRS: &[&str] = &[".git", "node_modules"];

/// Lockfiles removed from every materialized project.
///
/// The selected package manager writes a fresh one during install.
pub const CLEANUP_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "bun.lock",
];

/// Replace the contents of `root` with the contents of `root/keep`.
///
/// The subtree is copied into a staging directory inside `root`, every
/// other entry of `root` is deleted, and the staged entries are moved up.
/// On return `root` holds exactly the files that were under `keep`.
pub fn extract_subtree(root: &Path, keep: &str) -> Result<()> {
    promote(root, keep).map_err(|e| ScaffoldError::Extraction {
        message: format!("{:#}", e),
    })
}

fn promote(root: &Path, keep: &str) -> anyhow::Result<()> {
    let source = root.join(keep);
    if !source.is_dir() {
        bail!("template path '{}' not found in repository", keep);
    }

    let staging = unique_staging_dir(root, &source);
    tracing::debug!("Staging {} in {}", source.display(), staging.display());
    fs::create_dir(&staging)
        .with_context(|| format!("failed to create {}", staging.display()))?;
    copy_dir_all(&source, &staging)?;

    for entry in fs::read_dir(root).with_context(|| format!("failed to read {}", root.display()))? {
        let path = entry?.path();
        if path == staging {
            continue;
        }
        remove_entry(&path).with_context(|| format!("failed to remove {}", path.display()))?;
    }

    for entry in
        fs::read_dir(&staging).with_context(|| format!("failed to read {}", staging.display()))?
    {
        let entry = entry?;
        let dest = root.join(entry.file_name());
        fs::rename(entry.path(), &dest)
            .with_context(|| format!("failed to move {} into place", dest.display()))?;
    }

    fs::remove_dir_all(&staging)
        .with_context(|| format!("failed to remove {}", staging.display()))?;

    Ok(())
}

/// A staging path directly under `root` whose name is used neither in
/// `root` nor at the top of `source`.
fn unique_staging_dir(root: &Path, source: &Path) -> PathBuf {
    let taken = |name: &str| {
        root.join(name).symlink_metadata().is_ok() || source.join(name).symlink_metadata().is_ok()
    };

    let mut name = STAGING_DIR.to_string();
    let mut n = 1;
    while taken(&name) {
        name = format!("{}_{}", STAGING_DIR, n);
        n += 1;
    }
    root.join(name)
}

/// Recursively copy the contents of `from` into the existing directory `to`.
fn copy_dir_all(from: &Path, to: &Path) -> anyhow::Result<()> {
    for entry in fs::read_dir(from).with_context(|| format!("failed to read {}", from.display()))? {
        let entry = entry?;
        let src = entry.path();
        let dest = to.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            fs::create_dir(&dest)
                .with_context(|| format!("failed to create {}", dest.display()))?;
            copy_dir_all(&src, &dest)?;
        } else if file_type.is_symlink() {
            copy_symlink(&src, &dest)?;
        } else {
            fs::copy(&src, &dest).with_context(|| {
                format!("failed to copy {} -> {}", src.display(), dest.display())
            })?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dest: &Path) -> anyhow::Result<()> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(&target, dest)
        .with_context(|| format!("failed to link {}", dest.display()))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dest: &Path) -> anyhow::Result<()> {
    fs::copy(src, dest)
        .map(|_| ())
        .with_context(|| format!("failed to copy {} -> {}", src.display(), dest.display()))
}

fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = path.symlink_metadata()?;
    if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    }
}

/// Remove VCS metadata, dependency caches and lockfiles from `root`.
///
/// Each removal is best-effort; entries that don't exist or can't be
/// removed are skipped. Returns the entries that were removed.
pub fn cleanup(root: &Path) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for name in CLEANUP_DIRS.iter().chain(CLEANUP_FILES) {
        let path = root.join(name);
        match remove_entry(&path) {
            Ok(()) => {
                tracing::debug!("Removed {}", path.display());
                removed.push(path);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::debug!("Could not remove {}: {}", path.display(), e),
        }
    }

    removed
}
