use std::sync::Arc;

use curio_service::CatalogService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<CatalogService>,
}
impl AppState {
	pub fn new(config: curio_config::Config) -> color_eyre::Result<Self> {
		let service = CatalogService::from_config(config)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: CatalogService) -> Self {
		Self { service: Arc::new(service) }
	}
}
