//! Result recording pipeline
//!
//! Parse (JSON payload), render (JUnit XML) and persist are separate
//! steps; parse and render are pure and testable without any I/O.

pub mod model;
pub mod recorder;
pub mod render;

pub use model::{CaseStatus, TestCaseResult, TestRun};
pub use recorder::ReportRecorder;
pub use render::render_report;
