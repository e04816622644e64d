use serde::{Deserialize, Serialize};

use curio_domain::Item;

use crate::{CatalogService, LookupRequest, ServiceResult};

/// Purchase-relevant projection of an item. Render payloads are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
	pub id: String,
	pub title: String,
	pub description: String,
	pub price: f64,
	pub category: String,
	pub image: String,
	pub seller: String,
}
impl From<Item> for CheckoutResponse {
	fn from(item: Item) -> Self {
		Self {
			id: item.id,
			title: item.title,
			description: item.description,
			price: item.price,
			category: item.category,
			image: item.image,
			seller: item.seller,
		}
	}
}

impl CatalogService {
	pub fn checkout(&self, req: LookupRequest) -> ServiceResult<CheckoutResponse> {
		tracing::info!(id = %req.id.key(), "Checkout requested.");

		let item = self.find_item(&req.id).inspect_err(|err| {
			tracing::info!(error = %err, "Checkout lookup missed.");
		})?;

		Ok(item.into())
	}
}
