use serde::{Deserialize, Serialize};

/// One catalog record. Owned by the catalog store and never mutated by the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
	pub id: String,
	pub title: String,
	pub description: String,
	pub price: f64,
	#[serde(default)]
	pub seller: String,
	pub category: String,
	pub image: String,
	/// Render-only 3D asset locator, resolved to a public URL by the detail endpoint.
	#[serde(default)]
	pub model_path: String,
}
