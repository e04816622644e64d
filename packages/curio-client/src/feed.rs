use std::sync::{Mutex, MutexGuard};

use curio_domain::FilterSpec;

use crate::{CatalogTransport, FeedState, FeedView, Outcome, Ticket};

/// Async driver around [`FeedState`].
///
/// The state lock is only taken between suspension points: a ticket is issued under the lock,
/// the fetch runs without it, and the result is resolved under the lock again. Concurrent
/// callers therefore interleave only at the network call.
pub struct Feed<T> {
	transport: T,
	state: Mutex<FeedState>,
}
impl<T> Feed<T>
where
	T: CatalogTransport,
{
	pub fn new(transport: T, filter: FilterSpec, page_size: usize) -> Self {
		Self { transport, state: Mutex::new(FeedState::new(filter, page_size)) }
	}

	/// Initial load. `None` if the feed was already mounted.
	pub async fn mount(&self) -> Option<Outcome> {
		let ticket = self.lock().mount()?;

		Some(self.run(ticket).await)
	}

	pub async fn change_filter(&self, filter: FilterSpec) -> Outcome {
		let ticket = self.lock().change_filter(filter);

		self.run(ticket).await
	}

	/// `None` when the trigger was suppressed (loading, exhausted, or not mounted).
	pub async fn near_end(&self) -> Option<Outcome> {
		let ticket = self.lock().near_end()?;

		Some(self.run(ticket).await)
	}

	pub async fn retry(&self) -> Option<Outcome> {
		let ticket = self.lock().retry()?;

		Some(self.run(ticket).await)
	}

	pub fn view(&self) -> FeedView {
		self.lock().view()
	}

	pub fn transport(&self) -> &T {
		&self.transport
	}

	async fn run(&self, ticket: Ticket) -> Outcome {
		let req = ticket.request();
		let result = self.transport.fetch_page(&req).await;

		self.lock().resolve(&ticket, result)
	}

	fn lock(&self) -> MutexGuard<'_, FeedState> {
		self.state.lock().unwrap_or_else(|err| err.into_inner())
	}
}
