//! # API Router Configuration
//!
//! Configures API routes for the Quorum application.

use axum::{
    extract::{Query, State as AxumState},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json,
    Router,
};
use error::Result;

use crate::AppState;

/// Creates the API router with all routes
///
/// # Arguments
///
/// * `state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/team/add", post(add_team))
        .route("/team/get", get(get_team))
        .route("/users/setIsActive", post(set_is_active))
        .route("/users/getReview", get(get_review))
        .route("/users/deactivateMany", post(deactivate_many))
        .route("/pullRequest/create", post(create_pull_request))
        .route("/pullRequest/merge", post(merge_pull_request))
        .route("/pullRequest/reassign", post(reassign_reviewer))
        .route(
            "/statistics/pull_request_reviewers_amount",
            get(reviewers_amount),
        )
        .layer(middleware::from_fn(
            crate::middleware::request_log::request_log_middleware,
        ))
        .with_state(state)
}

/// Wrapper handler for team creation that uses State extractor
async fn add_team(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::teams::AddTeamRequest>,
) -> Result<(StatusCode, Json<crate::dto::teams::TeamResponse>)> {
    crate::handlers::team::add_team_handler(&state, req).await
}

/// Wrapper handler for team lookup that uses State extractor
async fn get_team(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<crate::dto::teams::GetTeamQuery>,
) -> Result<Json<crate::dto::teams::TeamResponse>> {
    crate::handlers::team::get_team_handler(&state, query).await
}

/// Wrapper handler for the activation toggle
async fn set_is_active(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::users::SetIsActiveRequest>,
) -> Result<Json<crate::dto::users::UserResponse>> {
    crate::handlers::users::set_is_active_handler(&state, req).await
}

/// Wrapper handler for a user's review listing
async fn get_review(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<crate::dto::users::GetReviewQuery>,
) -> Result<Json<crate::dto::users::UserReviewsResponse>> {
    crate::handlers::users::get_review_handler(&state, query).await
}

/// Wrapper handler for bulk deactivation
async fn deactivate_many(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::users::DeactivateManyRequest>,
) -> Result<Json<crate::dto::users::DeactivateManyResponse>> {
    crate::handlers::users::deactivate_many_handler(&state, req).await
}

/// Wrapper handler for pull request creation
async fn create_pull_request(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::pull_requests::CreatePullRequestRequest>,
) -> Result<Json<crate::dto::pull_requests::PullRequestEnvelope>> {
    crate::handlers::pull_request::create_pull_request_handler(&state, req).await
}

/// Wrapper handler for pull request merge
async fn merge_pull_request(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::pull_requests::MergePullRequestRequest>,
) -> Result<Json<crate::dto::pull_requests::PullRequestEnvelope>> {
    crate::handlers::pull_request::merge_pull_request_handler(&state, req).await
}

/// Wrapper handler for reviewer reassignment
async fn reassign_reviewer(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<crate::dto::pull_requests::ReassignReviewerRequest>,
) -> Result<Json<crate::dto::pull_requests::ReassignResponse>> {
    crate::handlers::pull_request::reassign_reviewer_handler(&state, req).await
}

/// Wrapper handler for reviewer counts
async fn reviewers_amount(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<crate::dto::statistics::ReviewersAmountQuery>,
) -> Result<Json<crate::dto::statistics::ReviewersAmountResponse>> {
    crate::handlers::statistics::reviewers_amount_handler(&state, query).await
}

/// Creates the health check router
pub fn create_health_router() -> Router { Router::new().route("/health", axum::routing::get(|| async { "OK" })) }

/// Creates the main application router
///
/// # Arguments
///
/// * `state` - Application state containing the database pool
///
/// # Returns
///
/// Main router with health checks and API routes
pub fn create_app_router(state: AppState) -> Router {
    Router::new()
        .merge(create_health_router())
        .merge(create_router(state))
}
