//! Integration tests for subtree extraction and cleanup.

use create_smithery::materialize::{cleanup, extract_subtree, STAGING_DIR};
use create_smithery::ScaffoldError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, rel).unwrap();
}

fn files_under(root: &Path) -> Vec<String> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                out.push(
                    path.strip_prefix(root)
                        .unwrap()
                        .to_string_lossy()
                        .into_owned(),
                );
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

#[test]
fn extracted_tree_matches_subtree_after_cleanup() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    for rel in [
        ".git/HEAD",
        "yarn.lock",
        "README.md",
        "examples/local-filesystem/package.json",
        "examples/local-filesystem/bun.lockb",
        "examples/local-filesystem/node_modules/x/index.js",
        "examples/local-filesystem/src/server/index.ts",
        "examples/basic-server/package.json",
    ] {
        write(root, rel);
    }

    extract_subtree(root, "examples/local-filesystem").unwrap();
    cleanup(root);

    assert_eq!(
        files_under(root),
        vec!["package.json", "src/server/index.ts"]
    );
    // Contents moved with their files.
    assert_eq!(
        fs::read_to_string(root.join("package.json")).unwrap(),
        "examples/local-filesystem/package.json"
    );
    assert!(!root.join(STAGING_DIR).exists());
}

#[test]
fn missing_subtree_is_extraction_error() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "README.md");

    let err = extract_subtree(temp.path(), "examples/basic-server").unwrap_err();

    assert!(matches!(err, ScaffoldError::Extraction { .. }));
}
