pub mod assets;
pub mod checkout;
pub mod items;
pub mod listing;
pub mod lookup;

mod error;

use std::sync::Arc;

pub use assets::{AssetResolver, PublicUrlResolver};
pub use checkout::CheckoutResponse;
pub use error::{ServiceError, ServiceResult};
pub use items::{ItemsRequest, ItemsResponse};
pub use listing::Listing3dResponse;
pub use lookup::{ItemRef, LookupRequest};

use curio_config::Config;
use curio_domain::{Item, QueryOptions};
use curio_storage::{CatalogStore, seed};

/// Stateless request handling over a shared catalog store. Every call reads one snapshot.
pub struct CatalogService {
	pub cfg: Config,
	pub store: Arc<CatalogStore>,
	pub assets: Arc<dyn AssetResolver>,
}
impl CatalogService {
	pub fn new(cfg: Config, store: Arc<CatalogStore>) -> Self {
		let assets = Arc::new(PublicUrlResolver::new(&cfg.assets.public_base_url));

		Self { cfg, store, assets }
	}

	/// Builds the store from `catalog.seed_path`, or the sample catalog when unset.
	pub fn from_config(cfg: Config) -> ServiceResult<Self> {
		let items = match cfg.catalog.seed_path.as_deref() {
			Some(path) => seed::load_seed(path)?,
			None => seed::sample_items(),
		};
		let store = CatalogStore::new(items)?;

		tracing::info!(items = store.len(), "Catalog store ready.");

		Ok(Self::new(cfg, Arc::new(store)))
	}

	pub fn with_assets(mut self, assets: Arc<dyn AssetResolver>) -> Self {
		self.assets = assets;

		self
	}

	pub(crate) fn query_options(&self) -> QueryOptions {
		QueryOptions { sort_by_price: self.cfg.catalog.sort_by_price }
	}

	pub(crate) fn find_item(&self, id: &ItemRef) -> ServiceResult<Item> {
		let key = id.key();

		if key.trim().is_empty() {
			return Err(ServiceError::NotFound { id: key });
		}

		self.store.find(&key).ok_or(ServiceError::NotFound { id: key })
	}
}
