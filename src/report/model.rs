//! Test result payload model
//!
//! Defines the data structures for deserializing the JSON payload the
//! browser-side runner posts after a test run.

use serde::Deserialize;

/// One complete test run posted by the browser
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestRun {
    /// Suite identifier, used verbatim as the report's base file name
    pub fully_qualified_name: String,

    /// Individual case outcomes, in execution order
    #[serde(default)]
    pub test_cases: Vec<TestCaseResult>,
}

/// Outcome of a single test case
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseResult {
    /// Case name as reported by the runner
    pub name: String,

    /// Pass/fail outcome
    pub status: CaseStatus,

    /// Wall-clock duration in milliseconds
    pub duration_ms: f64,

    /// Failure or error message, present for non-passing cases
    #[serde(default)]
    pub failure_message: Option<String>,
}

/// Case outcome reported by the runner
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Passed,
    Failed,
    Error,
    Skipped,
}
