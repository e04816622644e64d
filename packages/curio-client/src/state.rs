//! Client-side view of an infinitely scrolling catalog list.
//!
//! [`FeedState`] is a synchronous state machine. Callers feed it events (mount, filter change,
//! near-end-of-list, retry) and get back a [`Ticket`] describing the fetch to perform; when the
//! fetch completes, the ticket and its result go back through [`FeedState::resolve`].
//!
//! Invariants:
//! - A filter change always starts a new [`Epoch`] and discards the current list.
//! - At most one ticket is in flight. Near-end events are ignored while loading.
//! - Only the in-flight ticket of the current epoch can change the list. Anything else resolves
//!   as [`Outcome::Stale`] and leaves the state untouched.

use std::{collections::HashSet, fmt::Display};

use uuid::Uuid;

use curio_domain::{Cursor, FilterSpec, Item, Page};
use curio_service::ItemsRequest;

/// Generation of the active filter. Incremented on every filter change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Epoch(u64);
impl Epoch {
	pub fn get(self) -> u64 {
		self.0
	}

	fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

/// One issued page fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
	pub epoch: Epoch,
	pub seq: u64,
	pub request_id: Uuid,
	pub filter: FilterSpec,
	pub cursor: Cursor,
	pub page_size: usize,
	/// Replace the list instead of appending to it.
	pub reset: bool,
}
impl Ticket {
	pub fn request(&self) -> ItemsRequest {
		ItemsRequest {
			sort: self.filter.clone(),
			index: i64::try_from(self.cursor).unwrap_or(i64::MAX),
			count: i64::try_from(self.page_size).unwrap_or(i64::MAX),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The page was merged. `added` counts items that were not already displayed.
	Applied { added: usize },
	/// The fetch failed; the list is unchanged and the ticket can be retried.
	Failed,
	/// The ticket no longer matches the in-flight fetch of the current epoch and was dropped.
	Stale,
}

/// Render-ready copy of the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedView {
	pub items: Vec<Item>,
	pub cursor: Cursor,
	pub has_more: bool,
	pub is_loading: bool,
	pub fail: bool,
	pub epoch: Epoch,
}
impl FeedView {
	/// The list is non-empty and the server has nothing further for this filter.
	pub fn exhausted(&self) -> bool {
		!self.has_more && !self.items.is_empty()
	}
}

#[derive(Debug)]
pub struct FeedState {
	filter: FilterSpec,
	page_size: usize,
	epoch: Epoch,
	next_seq: u64,
	mounted: bool,
	items: Vec<Item>,
	seen: HashSet<String>,
	cursor: Cursor,
	has_more: bool,
	in_flight: Option<Ticket>,
	failed: Option<Ticket>,
}
impl FeedState {
	pub fn new(filter: FilterSpec, page_size: usize) -> Self {
		Self {
			filter,
			page_size: page_size.max(1),
			epoch: Epoch::default(),
			next_seq: 0,
			mounted: false,
			items: Vec::new(),
			seen: HashSet::new(),
			cursor: 0,
			has_more: true,
			in_flight: None,
			failed: None,
		}
	}

	/// First load with the initial filter. Later calls return `None`.
	pub fn mount(&mut self) -> Option<Ticket> {
		if self.mounted {
			return None;
		}

		let filter = self.filter.clone();

		Some(self.change_filter(filter))
	}

	/// Starts a new epoch regardless of what is in flight.
	pub fn change_filter(&mut self, filter: FilterSpec) -> Ticket {
		if let Some(abandoned) = self.in_flight.take() {
			tracing::debug!(
				request_id = %abandoned.request_id,
				epoch = abandoned.epoch.get(),
				"Fetch superseded by filter change."
			);
		}

		self.mounted = true;
		self.epoch = self.epoch.next();
		self.filter = filter;
		self.items.clear();
		self.seen.clear();
		self.cursor = 0;
		self.has_more = true;
		self.failed = None;

		self.issue(0, true)
	}

	/// Near-end-of-list trigger. Only extends the current epoch when idle and more items exist.
	pub fn near_end(&mut self) -> Option<Ticket> {
		if !self.mounted || !self.has_more || self.in_flight.is_some() {
			return None;
		}

		let reset = self.failed.as_ref().map(|ticket| ticket.reset).unwrap_or(false);

		self.failed = None;

		Some(self.issue(self.cursor, reset))
	}

	/// Re-issues the last failed fetch of this epoch with the same cursor and filter.
	pub fn retry(&mut self) -> Option<Ticket> {
		if self.in_flight.is_some() {
			return None;
		}

		let failed = self.failed.take()?;

		Some(self.issue(failed.cursor, failed.reset))
	}

	pub fn resolve<E>(&mut self, ticket: &Ticket, result: Result<Page, E>) -> Outcome
	where
		E: Display,
	{
		match result {
			Ok(page) => self.apply(ticket, page),
			Err(err) => {
				let outcome = self.fail(ticket);

				if outcome == Outcome::Failed {
					tracing::warn!(
						request_id = %ticket.request_id,
						error = %err,
						"Catalog fetch failed."
					);
				}

				outcome
			},
		}
	}

	pub fn apply(&mut self, ticket: &Ticket, page: Page) -> Outcome {
		if !self.is_current(ticket) {
			return Outcome::Stale;
		}

		self.in_flight = None;

		if ticket.reset {
			self.items.clear();
			self.seen.clear();
		}

		let before = self.items.len();

		for item in page.items {
			if self.seen.insert(item.id.clone()) {
				self.items.push(item);
			}
		}

		let added = self.items.len() - before;

		self.cursor = page.next_cursor;
		self.has_more = page.has_more;

		tracing::debug!(
			request_id = %ticket.request_id,
			epoch = ticket.epoch.get(),
			added,
			cursor = self.cursor,
			has_more = self.has_more,
			"Catalog page merged."
		);

		Outcome::Applied { added }
	}

	pub fn fail(&mut self, ticket: &Ticket) -> Outcome {
		if !self.is_current(ticket) {
			return Outcome::Stale;
		}

		self.in_flight = None;
		self.failed = Some(ticket.clone());

		Outcome::Failed
	}

	pub fn view(&self) -> FeedView {
		FeedView {
			items: self.items.clone(),
			cursor: self.cursor,
			has_more: self.has_more,
			is_loading: self.is_loading(),
			fail: self.failed.is_some(),
			epoch: self.epoch,
		}
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn cursor(&self) -> Cursor {
		self.cursor
	}

	pub fn has_more(&self) -> bool {
		self.has_more
	}

	pub fn is_loading(&self) -> bool {
		self.in_flight.is_some()
	}

	pub fn fail_flag(&self) -> bool {
		self.failed.is_some()
	}

	pub fn epoch(&self) -> Epoch {
		self.epoch
	}

	pub fn filter(&self) -> &FilterSpec {
		&self.filter
	}

	fn is_current(&self, ticket: &Ticket) -> bool {
		let current = ticket.epoch == self.epoch
			&& self.in_flight.as_ref().map(|in_flight| in_flight.seq) == Some(ticket.seq);

		if !current {
			tracing::debug!(
				request_id = %ticket.request_id,
				ticket_epoch = ticket.epoch.get(),
				active_epoch = self.epoch.get(),
				"Dropping stale catalog response."
			);
		}

		current
	}

	fn issue(&mut self, cursor: Cursor, reset: bool) -> Ticket {
		let ticket = Ticket {
			epoch: self.epoch,
			seq: self.next_seq,
			request_id: Uuid::new_v4(),
			filter: self.filter.clone(),
			cursor,
			page_size: self.page_size,
			reset,
		};

		self.next_seq += 1;
		self.in_flight = Some(ticket.clone());

		tracing::debug!(
			request_id = %ticket.request_id,
			epoch = ticket.epoch.get(),
			cursor,
			reset,
			"Catalog fetch issued."
		);

		ticket
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn item(id: &str) -> Item {
		Item {
			id: id.to_string(),
			title: format!("Item {id}"),
			description: String::new(),
			price: 1.0,
			seller: String::new(),
			category: "A".to_string(),
			image: String::new(),
			model_path: String::new(),
		}
	}

	fn page(ids: &[&str], next_cursor: Cursor, has_more: bool) -> Page {
		Page { items: ids.iter().map(|id| item(id)).collect(), next_cursor, has_more }
	}

	fn ids(state: &FeedState) -> Vec<&str> {
		state.items().iter().map(|item| item.id.as_str()).collect()
	}

	fn mounted() -> FeedState {
		let mut state = FeedState::new(FilterSpec::default(), 2);
		let ticket = state.mount().expect("First mount must issue a fetch.");

		assert_eq!(state.apply(&ticket, page(&["a", "b"], 2, true)), Outcome::Applied { added: 2 });

		state
	}

	#[test]
	fn mount_issues_one_reset_fetch() {
		let mut state = FeedState::new(FilterSpec::default(), 3);
		let ticket = state.mount().expect("First mount must issue a fetch.");

		assert!(ticket.reset);
		assert_eq!(ticket.cursor, 0);
		assert_eq!(ticket.request().count, 3);
		assert!(state.is_loading());
		assert!(state.mount().is_none());
	}

	#[test]
	fn near_end_before_mount_is_ignored() {
		let mut state = FeedState::new(FilterSpec::default(), 3);

		assert!(state.near_end().is_none());
	}

	#[test]
	fn near_end_is_suppressed_while_loading() {
		let mut state = mounted();
		let first = state.near_end().expect("Idle feed with more items must fetch.");

		assert!(!first.reset);
		assert_eq!(first.cursor, 2);
		assert!(state.near_end().is_none());
		assert_eq!(state.apply(&first, page(&["c"], 3, false)), Outcome::Applied { added: 1 });
		assert_eq!(ids(&state), vec!["a", "b", "c"]);
		assert!(state.near_end().is_none());
		assert!(state.view().exhausted());
	}

	#[test]
	fn stale_epoch_response_is_dropped() {
		let mut state = mounted();
		let old = state.near_end().expect("Idle feed with more items must fetch.");
		let new = state.change_filter(FilterSpec::new(0.0, 10.0));

		assert!(new.epoch > old.epoch);
		assert!(state.items().is_empty());
		assert_eq!(state.apply(&old, page(&["x", "y"], 4, true)), Outcome::Stale);
		assert!(state.items().is_empty());
		assert_eq!(state.cursor(), 0);
		assert!(state.is_loading());
		assert_eq!(state.apply(&new, page(&["n"], 1, false)), Outcome::Applied { added: 1 });
		assert_eq!(ids(&state), vec!["n"]);
	}

	#[test]
	fn stale_failure_does_not_set_fail_flag() {
		let mut state = mounted();
		let old = state.near_end().expect("Idle feed with more items must fetch.");

		state.change_filter(FilterSpec::default());

		assert_eq!(state.resolve(&old, Err::<Page, _>("boom")), Outcome::Stale);
		assert!(!state.fail_flag());
		assert!(state.is_loading());
	}

	#[test]
	fn duplicate_resolution_is_stale() {
		let mut state = FeedState::new(FilterSpec::default(), 2);
		let ticket = state.mount().expect("First mount must issue a fetch.");

		assert_eq!(state.apply(&ticket, page(&["a"], 1, true)), Outcome::Applied { added: 1 });
		assert_eq!(state.apply(&ticket, page(&["a"], 1, true)), Outcome::Stale);
		assert_eq!(state.cursor(), 1);
	}

	#[test]
	fn failure_keeps_state_and_retry_reissues_same_cursor() {
		let mut state = mounted();
		let ticket = state.near_end().expect("Idle feed with more items must fetch.");

		assert_eq!(state.resolve(&ticket, Err::<Page, _>("offline")), Outcome::Failed);
		assert!(state.fail_flag());
		assert!(!state.is_loading());
		assert_eq!(ids(&state), vec!["a", "b"]);
		assert_eq!(state.cursor(), 2);
		assert!(state.has_more());

		let retry = state.retry().expect("Failed fetch must be retryable.");

		assert_eq!(retry.epoch, ticket.epoch);
		assert_eq!(retry.cursor, ticket.cursor);
		assert_eq!(retry.filter, ticket.filter);
		assert_ne!(retry.seq, ticket.seq);
		assert!(state.retry().is_none());
		assert_eq!(state.apply(&ticket, page(&["z"], 3, false)), Outcome::Stale);
		assert_eq!(state.apply(&retry, page(&["c"], 3, false)), Outcome::Applied { added: 1 });
		assert!(!state.fail_flag());
	}

	#[test]
	fn failed_reset_retry_still_replaces() {
		let mut state = FeedState::new(FilterSpec::default(), 2);
		let ticket = state.mount().expect("First mount must issue a fetch.");

		state.fail(&ticket);

		let retry = state.retry().expect("Failed fetch must be retryable.");

		assert!(retry.reset);
	}

	#[test]
	fn filter_change_clears_fail_flag() {
		let mut state = mounted();
		let ticket = state.near_end().expect("Idle feed with more items must fetch.");

		state.fail(&ticket);
		state.change_filter(FilterSpec::default());

		assert!(!state.fail_flag());
		assert!(state.retry().is_none());
	}

	#[test]
	fn merge_skips_ids_already_displayed() {
		let mut state = mounted();
		let ticket = state.near_end().expect("Idle feed with more items must fetch.");

		assert_eq!(state.apply(&ticket, page(&["b", "c"], 4, false)), Outcome::Applied { added: 1 });
		assert_eq!(ids(&state), vec!["a", "b", "c"]);
		assert_eq!(state.cursor(), 4);
	}

	#[test]
	fn epochs_increase_per_filter_change() {
		let mut state = FeedState::new(FilterSpec::default(), 2);
		let first = state.change_filter(FilterSpec::new(0.0, 1.0));
		let second = state.change_filter(FilterSpec::new(0.0, 2.0));

		assert_eq!(first.epoch.get() + 1, second.epoch.get());
		assert_eq!(state.epoch(), second.epoch);
		assert_eq!(state.filter(), &FilterSpec::new(0.0, 2.0));
	}
}
