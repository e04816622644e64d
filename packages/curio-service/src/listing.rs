use serde::{Deserialize, Serialize};

use curio_domain::Item;

use crate::{CatalogService, LookupRequest, ServiceResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing3dResponse {
	#[serde(flatten)]
	pub item: Item,
	#[serde(rename = "modelURL")]
	pub model_url: String,
}

impl CatalogService {
	pub fn listing_3d(&self, req: LookupRequest) -> ServiceResult<Listing3dResponse> {
		tracing::info!(id = %req.id.key(), "3D listing requested.");

		let item = self.find_item(&req.id).inspect_err(|err| {
			tracing::info!(error = %err, "3D listing lookup missed.");
		})?;
		let model_url = self.assets.resolve(&item.model_path);

		Ok(Listing3dResponse { item, model_url })
	}
}
