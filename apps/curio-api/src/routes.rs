use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use curio_service::{
	CheckoutResponse, ItemsRequest, ItemsResponse, Listing3dResponse, LookupRequest, ServiceError,
};

use crate::state::AppState;

/// Catalog endpoints, plus static assets and CORS when the config asks for them.
pub fn router(state: AppState) -> Router {
	let cfg = &state.service.cfg;
	let static_dir = cfg.assets.static_dir.clone();
	let cors = cfg.service.cors_allow_any_origin;
	let mut router = Router::new()
		.route("/health", get(health))
		.route("/items", post(items))
		.route("/listing/3d", post(listing_3d))
		.route("/listing/3d/", post(listing_3d))
		.route("/checkout", post(checkout))
		.with_state(state);

	if let Some(dir) = static_dir {
		router = router
			.nest_service("/images", ServeDir::new(dir.join("images")))
			.nest_service("/models", ServeDir::new(dir.join("models")));
	}
	if cors {
		router = router.layer(CorsLayer::permissive());
	}

	router
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn items(
	State(state): State<AppState>,
	payload: Result<Json<ItemsRequest>, JsonRejection>,
) -> Result<Json<ItemsResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.items(payload);
	Ok(Json(response))
}

async fn listing_3d(
	State(state): State<AppState>,
	payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<Listing3dResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.listing_3d(payload)?;
	Ok(Json(response))
}

async fn checkout(
	State(state): State<AppState>,
	payload: Result<Json<LookupRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
	let Json(payload) = payload?;
	let response = state.service.checkout(payload)?;
	Ok(Json(response))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
	error_code: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
}

impl ApiError {
	fn new(status: StatusCode, error_code: impl Into<String>, message: impl Into<String>) -> Self {
		Self { status, error_code: error_code.into(), message: message.into() }
	}
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::NotFound { .. } => {
				ApiError::new(StatusCode::NOT_FOUND, "not_found", "Item not found")
			},
			ServiceError::Storage(inner) => {
				tracing::error!(error = %inner, "Catalog storage error.");

				ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "storage", inner.to_string())
			},
		}
	}
}

impl From<JsonRejection> for ApiError {
	fn from(rejection: JsonRejection) -> Self {
		tracing::debug!(error = %rejection.body_text(), "Malformed request rejected.");

		ApiError::new(StatusCode::BAD_REQUEST, "malformed_request", rejection.body_text())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.message, error_code: self.error_code };
		(self.status, Json(body)).into_response()
	}
}
