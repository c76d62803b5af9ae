use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Local;
use serde::Deserialize;
use tracing::info;

use super::audit::AuditSink;
use super::pages::{render_home, render_result};
use super::service::CheckService;

/// Router builder exposing the home page and the check endpoint.
pub fn check_router<S>(service: Arc<CheckService<S>>) -> Router
where
    S: AuditSink + 'static,
{
    Router::new()
        .route("/", get(home_handler::<S>))
        .route("/check", get(check_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckParams {
    pub(crate) u: Option<String>,
}

pub(crate) async fn home_handler<S>(State(service): State<Arc<CheckService<S>>>) -> Html<String>
where
    S: AuditSink + 'static,
{
    Html(render_home(service.total_checks()))
}

pub(crate) async fn check_handler<S>(
    State(service): State<Arc<CheckService<S>>>,
    Query(params): Query<CheckParams>,
) -> Response
where
    S: AuditSink + 'static,
{
    // An empty submission from the form arrives as `u=`, treated the same
    // as an absent parameter: no counter increment, no audit line.
    let url = match params.u {
        Some(url) if !url.is_empty() => url,
        _ => return (StatusCode::BAD_REQUEST, "no link provided").into_response(),
    };

    match service.check(&url, Local::now().naive_local()) {
        Ok(outcome) => {
            info!(
                %url,
                score = outcome.result.score,
                label = outcome.result.verdict.label(),
                total_checks = outcome.total_checks,
                "check completed"
            );
            Html(render_result(&url, &outcome.result)).into_response()
        }
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}
