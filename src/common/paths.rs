//! Path utilities
//!
//! Rewrites discovered files onto the public asset mount and guards
//! client-supplied suite names before they become file names.

use std::path::Path;

use super::{Error, Result};

/// URL prefix the public directory is mounted under
pub const ASSET_MOUNT: &str = "/assets";

/// Rewrite a filesystem path to its web-relative asset path
///
/// The path is made relative to `public_root` and prefixed with the
/// asset mount, using forward slashes on every platform. The file must
/// live under the public root.
pub fn to_asset_path(file: &Path, public_root: &Path) -> Result<String> {
    let rel = file
        .strip_prefix(public_root)
        .map_err(|_| Error::OutsidePublicRoot {
            path: file.display().to_string(),
            root: public_root.display().to_string(),
        })?;

    let mut asset = String::from(ASSET_MOUNT);
    for component in rel.components() {
        asset.push('/');
        asset.push_str(&component.as_os_str().to_string_lossy());
    }

    Ok(asset)
}

/// Validate a client-supplied suite name before it is used as a file name
///
/// Rejects empty names and anything that could escape the report
/// directory: path separators, NUL bytes and bare dot segments. Dotted
/// suite names such as `suite.Foo` pass.
pub fn validate_suite_name(name: &str) -> Result<()> {
    let escapes = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if escapes {
        return Err(Error::InvalidSuiteName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_asset_path_rewrite() {
        let file = PathBuf::from("/app/public/test/javascript/foo.html");
        let public_root = PathBuf::from("/app/public");
        assert_eq!(
            to_asset_path(&file, &public_root).unwrap(),
            "/assets/test/javascript/foo.html"
        );
    }

    #[test]
    fn test_asset_path_outside_public_root() {
        let file = PathBuf::from("/elsewhere/foo.html");
        let public_root = PathBuf::from("/app/public");
        let err = to_asset_path(&file, &public_root);
        assert!(matches!(err, Err(Error::OutsidePublicRoot { .. })));
    }

    #[test]
    fn test_suite_names_accepted() {
        assert!(validate_suite_name("suite.Foo").is_ok());
        assert!(validate_suite_name("LoginTests").is_ok());
        assert!(validate_suite_name("a.b.c").is_ok());
    }

    #[test]
    fn test_suite_names_rejected() {
        for name in ["", ".", "..", "../escape", "a/b", "a\\b", "nul\0byte"] {
            assert!(
                validate_suite_name(name).is_err(),
                "expected rejection: {name:?}"
            );
        }
    }
}
