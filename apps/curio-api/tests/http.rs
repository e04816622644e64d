use std::sync::Arc;

use axum::{
	Router,
	body::{self, Body},
	http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::util::ServiceExt;

use curio_api::{routes, state::AppState};
use curio_service::CatalogService;
use curio_storage::{CatalogStore, seed};
use curio_testkit::{catalog, item, test_config};

fn app_with(items: Vec<curio_domain::Item>) -> Router {
	let store = CatalogStore::new(items).expect("Failed to build store.");
	let service = CatalogService::new(test_config(), Arc::new(store));

	routes::router(AppState::from_service(service))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
	let response = app
		.oneshot(
			Request::builder()
				.method("POST")
				.uri(uri)
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(body.to_string()))
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call router.");
	let status = response.status();
	let bytes =
		body::to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body.");
	let value = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response body must be JSON.")
	};

	(status, value)
}

#[tokio::test]
async fn items_filters_and_paginates() {
	let app = app_with(vec![item("1", 10.0, "A"), item("2", 60.0, "A"), item("3", 20.0, "B")]);
	let (status, body) =
		post_json(app, "/items", json!({ "sort": [0, 50, "", "A"], "index": 0, "count": 10 }))
			.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["index"], json!(1));
	assert_eq!(body["hasMore"], json!(false));
	assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
	assert_eq!(body["items"][0]["id"], json!("1"));
	assert_eq!(body["items"][0]["modelPath"], json!("/models/1.glb"));
}

#[tokio::test]
async fn items_reports_has_more_mid_sequence() {
	let (status, body) = post_json(
		app_with(catalog(10)),
		"/items",
		json!({ "sort": [0, 100, null, null], "index": 3, "count": 3 }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["index"], json!(6));
	assert_eq!(body["hasMore"], json!(true));
}

#[tokio::test]
async fn impossible_filters_are_empty_pages_not_errors() {
	let (status, body) = post_json(
		app_with(catalog(10)),
		"/items",
		json!({ "sort": [90, 10, "", "nope"], "index": 0, "count": -1 }),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body, json!({ "items": [], "index": 0, "hasMore": false }));
}

#[tokio::test]
async fn missing_fields_are_malformed() {
	for payload in [
		json!({ "index": 0, "count": 3 }),
		json!({ "sort": [0, 100, ""], "index": 0, "count": 3 }),
		json!({ "sort": [0, 100, "", ""], "count": 3 }),
	] {
		let (status, body) = post_json(app_with(catalog(3)), "/items", payload).await;

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert_eq!(body["error_code"], json!("malformed_request"));
		assert!(body["error"].is_string());
	}

	let (status, _) = post_json(app_with(catalog(3)), "/checkout", json!({})).await;

	assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn listing_returns_model_url_or_404() {
	let app = app_with(seed::sample_items());
	let (status, body) = post_json(app.clone(), "/listing/3d", json!({ "id": 1 })).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["title"], json!("Apple Pencil"));
	assert_eq!(body["modelURL"], json!("http://assets.test/models/apple_pencil.glb"));

	let (status, body) = post_json(app.clone(), "/listing/3d/", json!({ "id": "2" })).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["seller"], json!("Kevin the Cube"));

	for _ in 0..2 {
		let (status, body) = post_json(app.clone(), "/listing/3d", json!({ "id": "42" })).await;

		assert_eq!(status, StatusCode::NOT_FOUND);
		assert_eq!(body["error"], json!("Item not found"));
	}
}

#[tokio::test]
async fn checkout_projects_purchase_fields() {
	let app = app_with(seed::sample_items());
	let (status, body) = post_json(app.clone(), "/checkout", json!({ "id": "3" })).await;
	let keys: Vec<&str> = body
		.as_object()
		.map(|object| object.keys().map(String::as_str).collect())
		.unwrap_or_default();

	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["price"], json!(30.0));
	assert!(!keys.contains(&"modelPath"));
	assert!(keys.contains(&"seller"));

	let (status, _) = post_json(app, "/checkout", json!({ "id": "missing" })).await;

	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_cors() {
	let response = app_with(catalog(1))
		.oneshot(
			Request::builder()
				.uri("/health")
				.header(header::ORIGIN, "http://shop.test")
				.body(Body::empty())
				.expect("Failed to build request."),
		)
		.await
		.expect("Failed to call router.");

	assert_eq!(response.status(), StatusCode::OK);
	assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
