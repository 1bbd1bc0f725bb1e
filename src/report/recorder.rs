//! Result recorder
//!
//! Accepts the raw JSON payload posted by the browser, renders it to
//! JUnit XML and persists it under the report directory. Whether the
//! recorder accepts writes at all is decided once at construction from
//! the environment mode.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::common::config::Config;
use crate::common::{paths, Error, Result};

use super::model::TestRun;
use super::render;

/// Records posted test results as JUnit XML report files
///
/// Immutable after construction: the enablement flag and report
/// directory are fixed for the process lifetime.
pub struct ReportRecorder {
    enabled: bool,
    report_dir: PathBuf,
}

impl ReportRecorder {
    /// Create a recorder writing to `report_dir`
    pub fn new(enabled: bool, report_dir: impl Into<PathBuf>) -> Self {
        Self {
            enabled,
            report_dir: report_dir.into(),
        }
    }

    /// Create a recorder from the harness configuration
    ///
    /// Recording is enabled only in dev/test mode.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.mode.is_dev_or_test(), config.report_dir())
    }

    /// Whether result recording is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Directory reports are written to
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// Record one test run from its raw JSON payload
    ///
    /// Returns the path of the written report. An existing report for
    /// the same suite is deleted before the new one is written; the two
    /// steps are not atomic, and concurrent records for the same suite
    /// may interleave. Returns [`Error::RecorderDisabled`] without
    /// touching the payload when the gate is closed.
    pub fn record(&self, payload: &[u8]) -> Result<PathBuf> {
        if !self.enabled {
            return Err(Error::RecorderDisabled);
        }

        let run: TestRun = serde_json::from_slice(payload)?;
        paths::validate_suite_name(&run.fully_qualified_name)?;

        let xml = render::render_report(&run)?;
        self.persist(&run.fully_qualified_name, xml.as_bytes())
    }

    fn persist(&self, suite_name: &str, xml: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.report_dir)?;

        let path = self.report_dir.join(format!("{suite_name}.xml"));
        if path.exists() {
            fs::remove_file(&path)?;
        }

        let mut file = File::create(&path)?;
        file.write_all(xml)?;
        file.flush()?;

        Ok(path)
    }
}
