//! Repository materialization.
//!
//! Turns a template repository URL into a project directory on disk:
//! shallow clone, optional subtree extraction, then cleanup of VCS
//! metadata and lockfiles.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use create_smithery::materialize::Materializer;
//! use create_smithery::shell::SystemRunner;
//!
//! let result = Materializer::new(&SystemRunner).materialize(
//!     "https://github.com/smithery-ai/sdk.git",
//!     Path::new("my-app"),
//!     Some("examples/basic-server"),
//! );
//! assert!(result.success);
//! ```

pub mod extract;

use std::path::Path;

pub use extract::{cleanup, extract_subtree, CLEANUP_DIRS, CLEANUP_FILES, STAGING_DIR};

use crate::error::ScaffoldError;
use crate::operation::OperationResult;
use crate::registry::REPOSITORY_ROOT;
use crate::shell::{CommandRunner, Invocation};

/// Builds the `git` invocation for a shallow clone of `url` into `destination`.
pub fn clone_invocation(url: &str, destination: &Path) -> Invocation {
    Invocation::new("git")
        .args(["clone", "--depth", "1", url])
        .args([destination.as_os_str()])
}

/// Clones template repositories into project directories.
pub struct Materializer<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> Materializer<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    /// Clone `url` into `destination`, keep only `subdirectory` (if given),
    /// and strip VCS metadata and lockfiles.
    ///
    /// Never returns an error directly; failures are reported through the
    /// returned [`OperationResult`].
    pub fn materialize(
        &self,
        url: &str,
        destination: &Path,
        subdirectory: Option<&str>,
    ) -> OperationResult {
        let invocation = clone_invocation(url, destination);

        let clone_error = match self.runner.run(&invocation) {
            Ok(result) if result.success => None,
            Ok(result) => Some(result.failure_detail()),
            Err(e) => Some(e.to_string()),
        };
        if let Some(message) = clone_error {
            tracing::warn!("Clone of {} failed: {}", url, message);
            return OperationResult::failure(
                format!("Failed to clone repository from {}", url),
                ScaffoldError::Clone {
                    url: url.to_string(),
                    message,
                },
            );
        }

        if let Some(keep) = subdirectory.filter(|s| !s.is_empty() && *s != REPOSITORY_ROOT) {
            tracing::debug!("Extracting {} from {}", keep, destination.display());
            if let Err(e) = extract_subtree(destination, keep) {
                tracing::warn!("{}", e);
                return OperationResult::failure(
                    format!("Failed to extract {} from {}", keep, url),
                    e,
                );
            }
        }

        let removed = cleanup(destination);
        tracing::debug!("Cleanup removed {} entries", removed.len());

        OperationResult::success(format!(
            "Successfully cloned repository to {}",
            destination.display()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::fake::FakeRunner;
    use std::fs;
    use tempfile::TempDir;

    const SDK_TREE: &[(&str, &str)] = &[
        (".git/HEAD", "ref: refs/heads/main"),
        ("README.md", "# sdk"),
        ("package-lock.json", "{}"),
        ("examples/basic-server/package.json", "{}"),
        ("examples/basic-server/package-lock.json", "{}"),
        ("examples/basic-server/src/index.ts", ""),
        ("examples/local-filesystem/package.json", "{}"),
    ];

    fn listing(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn clone_invocation_is_shallow() {
        let inv = clone_invocation("https://example.com/repo.git", Path::new("my-app"));
        assert_eq!(inv.program, "git");
        assert_eq!(
            inv.args,
            ["clone", "--depth", "1", "https://example.com/repo.git", "my-app"]
        );
    }

    #[cfg(unix)]
    #[test]
    fn clone_invocation_passes_destination_bytes_through() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dest = Path::new(OsStr::from_bytes(b"caf\xe9-app"));
        let inv = clone_invocation("https://example.com/repo.git", dest);
        assert_eq!(inv.args.last().unwrap().as_os_str(), dest.as_os_str());
    }

    #[test]
    fn materialize_with_subdirectory_keeps_only_template() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("my-app");
        let runner = FakeRunner::new().clone_writes(SDK_TREE);

        let result = Materializer::new(&runner).materialize(
            "https://example.com/sdk.git",
            &dest,
            Some("examples/basic-server"),
        );

        assert!(result.success, "{}", result.error_detail());
        assert!(result.message.starts_with("Successfully cloned repository to"));
        assert_eq!(listing(&dest), vec!["package.json", "src"]);
        assert_eq!(runner.calls_to("git"), 1);
    }

    #[test]
    fn materialize_root_keeps_tree_but_cleans() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("my-app");
        let runner = FakeRunner::new().clone_writes(SDK_TREE);

        let result =
            Materializer::new(&runner).materialize("https://example.com/sdk.git", &dest, Some("."));

        assert!(result.success);
        assert_eq!(listing(&dest), vec!["README.md", "examples"]);
        // Cleanup only touches the top level.
        assert!(dest.join("examples/basic-server/package-lock.json").exists());
    }

    #[test]
    fn materialize_without_subdirectory_keeps_tree() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("my-app");
        let runner = FakeRunner::new().clone_writes(SDK_TREE);

        let result =
            Materializer::new(&runner).materialize("https://example.com/sdk.git", &dest, None);

        assert!(result.success);
        assert_eq!(listing(&dest), vec!["README.md", "examples"]);
    }

    #[test]
    fn clone_failure_carries_stderr() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("my-app");
        let runner = FakeRunner::new().fail("git", 128, "fatal: repository not found");

        let result = Materializer::new(&runner).materialize(
            "https://example.com/missing.git",
            &dest,
            Some("examples/basic-server"),
        );

        assert!(!result.success);
        assert!(matches!(result.error, Some(ScaffoldError::Clone { .. })));
        assert!(result.error_detail().contains("fatal: repository not found"));
        assert!(!dest.exists());
    }

    #[test]
    fn missing_git_is_clone_failure() {
        let temp = TempDir::new().unwrap();
        let runner = FakeRunner::new().missing("git");

        let result = Materializer::new(&runner).materialize(
            "https://example.com/sdk.git",
            &temp.path().join("my-app"),
            None,
        );

        assert!(!result.success);
        assert!(matches!(result.error, Some(ScaffoldError::Clone { .. })));
    }

    #[test]
    fn missing_subdirectory_is_extraction_failure() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("my-app");
        let runner = FakeRunner::new().clone_writes(SDK_TREE);

        let result = Materializer::new(&runner).materialize(
            "https://example.com/sdk.git",
            &dest,
            Some("examples/does-not-exist"),
        );

        assert!(!result.success);
        assert!(matches!(result.error, Some(ScaffoldError::Extraction { .. })));
    }
}
