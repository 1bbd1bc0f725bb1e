//! Request handlers
//!
//! Maps the discovery and recorder pipeline onto HTTP responses. The
//! result endpoint answers 404 while recording is disabled so the
//! feature stays invisible outside dev/test.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use crate::common::Error;
use crate::discovery;

use super::AppState;

/// Health probe
pub async fn health() -> &'static str {
    "OK"
}

/// Render the test listing page
///
/// Discovery failures degrade to an empty listing; the scan path never
/// surfaces an error to the browser.
pub async fn list_tests(State(state): State<AppState>) -> Html<String> {
    let pages =
        match discovery::find_test_pages(&state.config.test_root(), &state.config.public_root()) {
            Ok(pages) => pages,
            Err(e) => {
                tracing::warn!("Test discovery failed: {}", e);
                Vec::new()
            }
        };

    Html(render_listing(&pages))
}

/// Query parameters for the run endpoint
#[derive(Deserialize)]
pub struct RunParams {
    /// Asset path of the test page to run
    pub page: String,
}

/// Redirect the browser to a test page
///
/// Execution happens entirely client-side; the harness only points the
/// browser at the page.
pub async fn run_test(Query(params): Query<RunParams>) -> Redirect {
    tracing::debug!("Running test page: {}", params.page);
    Redirect::to(&params.page)
}

/// Accept a posted test result and write its report file
pub async fn record_result(State(state): State<AppState>, body: Bytes) -> Response {
    match state.recorder.record(&body) {
        Ok(path) => {
            tracing::info!("Wrote test report: {}", path.display());
            StatusCode::CREATED.into_response()
        }
        // Indistinguishable from an unknown route while the gate is closed
        Err(Error::RecorderDisabled) => StatusCode::NOT_FOUND.into_response(),
        Err(e @ Error::InvalidSuiteName(_)) => {
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to record test result: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

fn render_listing(pages: &[String]) -> String {
    let mut items = String::new();
    if pages.is_empty() {
        items.push_str("    <p>No test pages found.</p>\n");
    } else {
        items.push_str("    <ul>\n");
        for page in pages {
            let href = escape_html(page);
            items.push_str(&format!(
                "      <li><a href=\"/tests/run?page={href}\">{href}</a></li>\n"
            ));
        }
        items.push_str("    </ul>\n");
    }

    format!(
        "<!DOCTYPE html>\n<html>\n  <head>\n    <title>Unit tests</title>\n  </head>\n  \
         <body>\n    <h1>Unit tests</h1>\n{items}  </body>\n</html>\n"
    )
}

/// Minimal escaping for paths interpolated into the listing markup
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
