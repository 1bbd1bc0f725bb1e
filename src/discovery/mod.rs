//! Test page discovery
//!
//! Scans the configured test directory for QUnit test pages and rewrites
//! their filesystem paths to web-accessible asset paths. The scan is
//! read-only and re-runs on every call; nothing is cached.

use std::fs;
use std::path::Path;

use crate::common::{paths, Result};

/// Whether a directory entry name looks like a test page
///
/// Case-sensitive suffix match, by design: pages are authored as
/// lowercase `.html` files.
pub fn is_test_page(name: &str) -> bool {
    name.ends_with(".html")
}

/// Find test pages under `test_root` and return their asset paths
///
/// A missing or non-directory `test_root` yields an empty list rather
/// than an error. Only direct entries are considered; subdirectories are
/// not descended into. Results are sorted for stable listings.
pub fn find_test_pages(test_root: &Path, public_root: &Path) -> Result<Vec<String>> {
    if !test_root.is_dir() {
        tracing::debug!("No test directory at {}", test_root.display());
        return Ok(Vec::new());
    }

    tracing::debug!("Looking for test pages in {}", test_root.display());

    let mut pages = Vec::new();
    for entry in fs::read_dir(test_root)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !is_test_page(name) {
            continue;
        }

        let page = paths::to_asset_path(&entry.path(), public_root)?;
        tracing::debug!("Added test page: {}", page);
        pages.push(page);
    }

    pages.sort();
    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    /// Lay out `public/test/javascript` under a temp root
    fn test_layout() -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let root = TempDir::new().unwrap();
        let public_root = root.path().join("public");
        let test_root = public_root.join("test").join("javascript");
        fs::create_dir_all(&test_root).unwrap();
        (root, public_root, test_root)
    }

    #[test]
    fn test_missing_root_is_empty() {
        let root = TempDir::new().unwrap();
        let pages = find_test_pages(&root.path().join("nope"), root.path()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_file_root_is_empty() {
        let root = TempDir::new().unwrap();
        let file = root.path().join("not-a-dir");
        File::create(&file).unwrap();
        let pages = find_test_pages(&file, root.path()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn test_filters_and_rewrites() {
        let (_root, public_root, test_root) = test_layout();
        File::create(test_root.join("foo.html")).unwrap();
        File::create(test_root.join("bar.html")).unwrap();
        File::create(test_root.join("readme.txt")).unwrap();
        File::create(test_root.join("page.HTML")).unwrap();

        let pages = find_test_pages(&test_root, &public_root).unwrap();
        assert_eq!(
            pages,
            vec![
                "/assets/test/javascript/bar.html",
                "/assets/test/javascript/foo.html",
            ]
        );
    }

    #[test]
    fn test_subdirectories_are_not_descended() {
        let (_root, public_root, test_root) = test_layout();
        File::create(test_root.join("top.html")).unwrap();
        let nested = test_root.join("nested");
        fs::create_dir(&nested).unwrap();
        File::create(nested.join("deep.html")).unwrap();

        let pages = find_test_pages(&test_root, &public_root).unwrap();
        assert_eq!(pages, vec!["/assets/test/javascript/top.html"]);
    }

    #[test]
    fn test_output_is_sorted() {
        let (_root, public_root, test_root) = test_layout();
        for name in ["zeta.html", "alpha.html", "mid.html"] {
            File::create(test_root.join(name)).unwrap();
        }

        let pages = find_test_pages(&test_root, &public_root).unwrap();
        let mut sorted = pages.clone();
        sorted.sort();
        assert_eq!(pages, sorted);
    }
}
