use std::time::Duration as StdDuration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use curio_domain::Page;
use curio_service::{CheckoutResponse, ItemsRequest, Listing3dResponse, LookupRequest};

use crate::{BoxFuture, CatalogTransport, ClientError, Result};

/// HTTP client for the catalog API.
#[derive(Clone)]
pub struct CatalogClient {
	client: Client,
	api_base: String,
}
impl CatalogClient {
	pub fn new(api_base: &str, timeout: StdDuration) -> Result<Self> {
		if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
			return Err(ClientError::InvalidConfig {
				message: format!("API base must be an http(s) URL, got {api_base}."),
			});
		}

		let client = Client::builder().timeout(timeout).build()?;

		Ok(Self { client, api_base: api_base.trim_end_matches('/').to_string() })
	}

	pub fn from_config(cfg: &curio_config::Client) -> Result<Self> {
		Self::new(&cfg.api_base, StdDuration::from_millis(cfg.timeout_ms))
	}

	pub async fn items(&self, req: &ItemsRequest) -> Result<Page> {
		let res = self.post_json("/items", req).await?;

		decode(res).await
	}

	pub async fn listing_3d(&self, id: &str) -> Result<Listing3dResponse> {
		self.lookup("/listing/3d", id).await
	}

	pub async fn checkout(&self, id: &str) -> Result<CheckoutResponse> {
		self.lookup("/checkout", id).await
	}

	async fn lookup<R>(&self, path: &str, id: &str) -> Result<R>
	where
		R: DeserializeOwned,
	{
		let res = self.post_json(path, &LookupRequest::new(id)).await?;

		if res.status() == StatusCode::NOT_FOUND {
			return Err(ClientError::NotFound { id: id.to_string() });
		}

		decode(res).await
	}

	async fn post_json<B>(&self, path: &str, body: &B) -> Result<Response>
	where
		B: Serialize + ?Sized,
	{
		let url = format!("{}{path}", self.api_base);

		Ok(self.client.post(url).json(body).send().await?)
	}
}
impl CatalogTransport for CatalogClient {
	fn fetch_page<'a>(&'a self, req: &'a ItemsRequest) -> BoxFuture<'a, Result<Page>> {
		Box::pin(self.items(req))
	}
}

async fn decode<R>(res: Response) -> Result<R>
where
	R: DeserializeOwned,
{
	let status = res.status();

	if !status.is_success() {
		return Err(ClientError::Status { status: status.as_u16() });
	}

	Ok(res.json().await?)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_non_http_api_base() {
		let err = CatalogClient::new("localhost:3000", StdDuration::from_secs(1))
			.err()
			.expect("Expected config error.");

		assert!(matches!(err, ClientError::InvalidConfig { .. }));
	}
}
