//! Configuration file handling

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{Error, Result};

/// Environment mode the harness runs in
///
/// Result recording is only unlocked in `Dev` and `Test`; in `Prod`
/// the result endpoint pretends not to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Dev,
    Test,
    Prod,
}

impl Mode {
    /// Whether this mode unlocks result recording
    pub fn is_dev_or_test(self) -> bool {
        matches!(self, Mode::Dev | Mode::Test)
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Mode::Dev),
            "test" => Ok(Mode::Test),
            "prod" => Ok(Mode::Prod),
            other => Err(format!("unknown mode '{other}' (expected dev, test or prod)")),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Environment mode
    #[serde(default)]
    pub mode: Mode,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Directory layout settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

/// Directory layout settings
#[derive(Debug, Deserialize)]
pub struct PathsConfig {
    /// Application root directory
    #[serde(default = "default_app_root")]
    pub app_root: PathBuf,

    /// Public asset directory, relative to the application root
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Test page directory, relative to the application root
    ///
    /// Must live under the public directory, otherwise discovered pages
    /// cannot be rewritten to asset paths.
    #[serde(default = "default_test_dir")]
    pub test_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            app_root: default_app_root(),
            public_dir: default_public_dir(),
            test_dir: default_test_dir(),
        }
    }
}

fn default_app_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_test_dir() -> PathBuf {
    ["public", "test", "javascript"].iter().collect()
}

impl Config {
    /// File name looked up under the application root when no explicit
    /// config path is given
    pub const FILE_NAME: &'static str = "qunit-harness.toml";

    /// Load configuration
    ///
    /// An explicit `path` must exist and parse. Without one, the default
    /// file under `app_root` is used if present, falling back to built-in
    /// defaults. An `app_root` given here overrides the file's value.
    pub fn load(app_root: Option<&Path>, path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = app_root.unwrap_or(Path::new(".")).join(Self::FILE_NAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Some(root) = app_root {
            config.paths.app_root = root.to_path_buf();
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse(e.to_string()))
    }

    /// Directory scanned for test pages
    pub fn test_root(&self) -> PathBuf {
        self.paths.app_root.join(&self.paths.test_dir)
    }

    /// Public asset root used to compute web-relative paths
    pub fn public_root(&self) -> PathBuf {
        self.paths.app_root.join(&self.paths.public_dir)
    }

    /// Directory test reports are written to
    pub fn report_dir(&self) -> PathBuf {
        self.paths.app_root.join("target").join("test-reports")
    }
}
