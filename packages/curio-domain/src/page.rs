use serde::{Deserialize, Serialize};

use crate::Item;

/// Offset into one filtered sequence. Only meaningful together with the [`crate::FilterSpec`]
/// that produced it.
pub type Cursor = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
	pub items: Vec<Item>,
	#[serde(rename = "index")]
	pub next_cursor: Cursor,
	pub has_more: bool,
}
impl Page {
	pub fn empty(cursor: Cursor) -> Self {
		Self { items: Vec::new(), next_cursor: cursor, has_more: false }
	}
}
