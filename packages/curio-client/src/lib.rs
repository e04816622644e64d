pub mod feed;
pub mod http;
pub mod state;

mod error;

use std::{future::Future, pin::Pin, sync::Arc};

pub use error::{ClientError, Result};
pub use feed::Feed;
pub use http::CatalogClient;
pub use state::{Epoch, FeedState, FeedView, Outcome, Ticket};

use curio_domain::Page;
use curio_service::ItemsRequest;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Where a [`Feed`] sends its page requests.
pub trait CatalogTransport
where
	Self: Send + Sync,
{
	fn fetch_page<'a>(&'a self, req: &'a ItemsRequest) -> BoxFuture<'a, Result<Page>>;
}

impl<T> CatalogTransport for Arc<T>
where
	T: CatalogTransport + ?Sized,
{
	fn fetch_page<'a>(&'a self, req: &'a ItemsRequest) -> BoxFuture<'a, Result<Page>> {
		(**self).fetch_page(req)
	}
}
