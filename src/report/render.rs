//! JUnit XML rendering
//!
//! A pure transform from a deserialized test run to the report XML.

use std::time::Duration;

use quick_junit::{NonSuccessKind, Report, TestCase, TestCaseStatus, TestSuite};

use crate::common::{Error, Result};

use super::model::{CaseStatus, TestRun};

/// Render a test run as a JUnit XML document
///
/// The suite carries the run's fully-qualified name; case and failure
/// counts are derived from the individual outcomes. Failure and error
/// messages appear both as the element's `message` attribute and as its
/// body text.
pub fn render_report(run: &TestRun) -> Result<String> {
    let mut suite = TestSuite::new(run.fully_qualified_name.as_str());

    for case in &run.test_cases {
        let mut status = match case.status {
            CaseStatus::Passed => TestCaseStatus::success(),
            CaseStatus::Failed => TestCaseStatus::non_success(NonSuccessKind::Failure),
            CaseStatus::Error => TestCaseStatus::non_success(NonSuccessKind::Error),
            CaseStatus::Skipped => TestCaseStatus::skipped(),
        };
        if let Some(message) = &case.failure_message {
            status.set_message(message.as_str());
            status.set_description(message.as_str());
        }

        let mut test_case = TestCase::new(case.name.as_str(), status);
        test_case.set_time(Duration::from_secs_f64(case.duration_ms.max(0.0) / 1000.0));
        suite.add_test_case(test_case);
    }

    let mut report = Report::new(run.fully_qualified_name.as_str());
    report.add_test_suite(suite);

    report
        .to_string()
        .map_err(|e| Error::XmlRender(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::TestCaseResult;

    fn case(name: &str, status: CaseStatus, duration_ms: f64, message: Option<&str>) -> TestCaseResult {
        TestCaseResult {
            name: name.to_string(),
            status,
            duration_ms,
            failure_message: message.map(String::from),
        }
    }

    #[test]
    fn test_render_mixed_run() {
        let run = TestRun {
            fully_qualified_name: "suite.Foo".to_string(),
            test_cases: vec![
                case("testBar", CaseStatus::Passed, 12.0, None),
                case("testBaz", CaseStatus::Failed, 5.0, Some("expected 1 got 2")),
            ],
        };

        let xml = render_report(&run).unwrap();

        assert_eq!(xml.matches("<testcase").count(), 2);
        assert!(xml.contains(r#"name="suite.Foo""#));
        assert!(xml.contains(r#"tests="2""#));
        assert!(xml.contains(r#"failures="1""#));
        assert!(xml.contains(r#"name="testBar""#));
        assert!(xml.contains(r#"time="0.012""#));
        assert!(xml.contains(r#"name="testBaz""#));
        assert!(xml.contains(r#"time="0.005""#));
        assert!(xml.contains(r#"message="expected 1 got 2""#));
        // Message body is preserved verbatim inside the failure element
        assert!(xml.contains(">expected 1 got 2</failure>"));
    }

    #[test]
    fn test_render_error_and_skip() {
        let run = TestRun {
            fully_qualified_name: "suite.Edge".to_string(),
            test_cases: vec![
                case("testBoom", CaseStatus::Error, 3.0, Some("TypeError: undefined")),
                case("testLater", CaseStatus::Skipped, 0.0, None),
            ],
        };

        let xml = render_report(&run).unwrap();

        assert!(xml.contains(r#"errors="1""#));
        assert!(xml.contains("<error"));
        assert!(xml.contains("<skipped"));
        assert!(xml.contains(r#"message="TypeError: undefined""#));
    }

    #[test]
    fn test_render_empty_run() {
        let run = TestRun {
            fully_qualified_name: "suite.Empty".to_string(),
            test_cases: Vec::new(),
        };

        let xml = render_report(&run).unwrap();
        assert!(xml.contains(r#"tests="0""#));
    }

    #[test]
    fn test_message_is_escaped() {
        let run = TestRun {
            fully_qualified_name: "suite.Esc".to_string(),
            test_cases: vec![case(
                "testMarkup",
                CaseStatus::Failed,
                1.0,
                Some("expected <b> got <i>"),
            )],
        };

        let xml = render_report(&run).unwrap();
        assert!(xml.contains("expected &lt;b&gt; got &lt;i&gt;"));
    }

    #[test]
    fn test_negative_duration_is_clamped() {
        let run = TestRun {
            fully_qualified_name: "suite.Clock".to_string(),
            test_cases: vec![case("testSkew", CaseStatus::Passed, -4.0, None)],
        };

        let xml = render_report(&run).unwrap();
        assert!(xml.contains(r#"time="0.000""#));
    }
}
