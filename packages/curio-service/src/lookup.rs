use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Item id as sent by clients: either a JSON string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemRef {
	Text(String),
	Number(Number),
}
impl ItemRef {
	/// Store key. Numbers compare by their decimal text.
	pub fn key(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Number(number) => number.to_string(),
		}
	}
}
impl From<&str> for ItemRef {
	fn from(id: &str) -> Self {
		Self::Text(id.to_string())
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
	pub id: ItemRef,
}
impl LookupRequest {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: ItemRef::Text(id.into()) }
	}
}
