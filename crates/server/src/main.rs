// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use compass::AssessmentState;
use compass_api::{
    ApiError, ApiResult, CompleteAssessmentResponse, CurrentScenarioResponse,
    DetailedFeedbackResponse, ListDomainsResponse, NavigateResponse, ProgressResponse,
    ResetResponse, ResultResponse, SelectDomainRequest, SelectDomainResponse,
    SubmitResponseRequest, SubmitResponseResponse, advance_scenario, assessment_progress,
    assessment_result, complete_assessment, current_scenario, detailed_feedback, list_domains,
    new_session_token, previous_scenario, reset_assessment, select_domain, submit_response,
};
use compass_catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::info;

/// Compass Server - HTTP server for the Compass competency assessment
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Each session token owns one independent assessment state; the catalog
/// is shared read-only data.
#[derive(Clone)]
struct AppState {
    /// All live assessment sessions, keyed by session token.
    sessions: Arc<Mutex<HashMap<String, AssessmentState>>>,
    /// The static scenario catalog.
    catalog: Arc<Catalog>,
}

impl AppState {
    fn new(catalog: Catalog) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            catalog: Arc::new(catalog),
        }
    }
}

/// API response for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateSessionResponse {
    /// The token identifying the new session.
    session_token: String,
}

/// API response for session deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DeleteSessionResponse {
    /// Success indicator.
    success: bool,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn session_not_found(token: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: format!("Session '{token}' not found"),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DomainRuleViolation { .. } | ApiError::ResponsePolicyViolation { .. } => {
                Self {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: err.to_string(),
                }
            }
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::NoActiveAssessment => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
        }
    }
}

/// Handler to create a new assessment session.
async fn create_session(
    AxumState(app_state): AxumState<AppState>,
) -> Json<CreateSessionResponse> {
    let session_token: String = new_session_token();
    app_state
        .sessions
        .lock()
        .await
        .insert(session_token.clone(), AssessmentState::new());

    info!(session_token = %session_token, "Created session");

    Json(CreateSessionResponse { session_token })
}

/// Handler to drop an assessment session.
async fn delete_session(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<DeleteSessionResponse>, HttpError> {
    let removed: Option<AssessmentState> = app_state.sessions.lock().await.remove(&token);
    if removed.is_none() {
        return Err(HttpError::session_not_found(&token));
    }

    info!(session_token = %token, "Deleted session");

    Ok(Json(DeleteSessionResponse { success: true }))
}

/// Handler to list the selectable domains.
async fn get_domains(AxumState(app_state): AxumState<AppState>) -> Json<ListDomainsResponse> {
    info!("Handling list_domains request");
    Json(list_domains(&app_state.catalog))
}

/// Handler for the current scenario view.
async fn get_current_scenario(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<CurrentScenarioResponse>, HttpError> {
    let state: AssessmentState = fetch_session(&app_state, &token).await?;
    Ok(Json(current_scenario(&state)))
}

/// Handler for the progress view.
async fn get_progress(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ProgressResponse>, HttpError> {
    let state: AssessmentState = fetch_session(&app_state, &token).await?;
    Ok(Json(assessment_progress(&state)))
}

/// Handler for the assessment result view.
async fn get_result(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResultResponse>, HttpError> {
    let state: AssessmentState = fetch_session(&app_state, &token).await?;
    let response: ResultResponse = assessment_result(&state)?;
    Ok(Json(response))
}

/// Handler for the detailed feedback view.
async fn get_feedback(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<DetailedFeedbackResponse>, HttpError> {
    let state: AssessmentState = fetch_session(&app_state, &token).await?;
    let response: DetailedFeedbackResponse = detailed_feedback(&state)?;
    Ok(Json(response))
}

/// Handler to select a domain and start an assessment.
async fn post_domain(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(request): Json<SelectDomainRequest>,
) -> Result<Json<SelectDomainResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<SelectDomainResponse> =
        select_domain(&app_state.catalog, state, &request)?;

    info!(
        session_token = %token,
        action = %result.event.action.name,
        "Applied transition"
    );
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Handler to record a response for one scenario.
async fn post_response(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
    Json(request): Json<SubmitResponseRequest>,
) -> Result<Json<SubmitResponseResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<SubmitResponseResponse> = submit_response(
        &app_state.catalog,
        state,
        request,
        OffsetDateTime::now_utc(),
    )?;

    info!(
        session_token = %token,
        action = %result.event.action.name,
        "Applied transition"
    );
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Handler to advance to the next scenario.
async fn post_next(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<NavigateResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<NavigateResponse> = advance_scenario(&app_state.catalog, state)?;
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Handler to move back to the previous scenario.
async fn post_previous(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<NavigateResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<NavigateResponse> = previous_scenario(&app_state.catalog, state)?;
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Handler to complete the assessment and score it.
async fn post_complete(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<CompleteAssessmentResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<CompleteAssessmentResponse> =
        complete_assessment(&app_state.catalog, state)?;

    info!(
        session_token = %token,
        action = %result.event.action.name,
        "Applied transition"
    );
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Handler to reset a session to its initial state.
async fn post_reset(
    AxumState(app_state): AxumState<AppState>,
    Path(token): Path<String>,
) -> Result<Json<ResetResponse>, HttpError> {
    let mut sessions = app_state.sessions.lock().await;
    let state: &AssessmentState = sessions
        .get(&token)
        .ok_or_else(|| HttpError::session_not_found(&token))?;

    let result: ApiResult<ResetResponse> = reset_assessment(&app_state.catalog, state);
    sessions.insert(token, result.new_state);

    Ok(Json(result.response))
}

/// Fetches a snapshot of one session's state for a read-only handler.
async fn fetch_session(app_state: &AppState, token: &str) -> Result<AssessmentState, HttpError> {
    app_state
        .sessions
        .lock()
        .await
        .get(token)
        .cloned()
        .ok_or_else(|| HttpError::session_not_found(token))
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/domains", get(get_domains))
        .route("/sessions/{token}", delete(delete_session))
        .route("/sessions/{token}/scenario", get(get_current_scenario))
        .route("/sessions/{token}/progress", get(get_progress))
        .route("/sessions/{token}/result", get(get_result))
        .route("/sessions/{token}/feedback", get(get_feedback))
        .route("/sessions/{token}/domain", post(post_domain))
        .route("/sessions/{token}/response", post(post_response))
        .route("/sessions/{token}/next", post(post_next))
        .route("/sessions/{token}/previous", post(post_previous))
        .route("/sessions/{token}/complete", post(post_complete))
        .route("/sessions/{token}/reset", post(post_reset))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Compass Server");

    let app_state: AppState = AppState::new(Catalog::builtin());

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
