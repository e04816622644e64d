use std::{collections::HashSet, sync::Arc};

use arc_swap::ArcSwap;

use curio_domain::Item;

use crate::{Error, Result};

/// Immutable view of the catalog. A query holds one for its whole duration.
pub type Snapshot = Arc<Vec<Item>>;

/// Authoritative ordered item sequence.
///
/// Readers take a [`Snapshot`] without locking; [`CatalogStore::replace`] swaps in a whole new
/// sequence atomically.
pub struct CatalogStore {
	snap: ArcSwap<Vec<Item>>,
}
impl CatalogStore {
	pub fn new(items: Vec<Item>) -> Result<Self> {
		validate(&items)?;

		Ok(Self { snap: ArcSwap::from_pointee(items) })
	}

	pub fn snapshot(&self) -> Snapshot {
		self.snap.load_full()
	}

	pub fn find(&self, id: &str) -> Option<Item> {
		self.snap.load().iter().find(|item| item.id == id).cloned()
	}

	pub fn len(&self) -> usize {
		self.snap.load().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Validates `items` and publishes them. On error the current catalog stays in place.
	pub fn replace(&self, items: Vec<Item>) -> Result<()> {
		validate(&items)?;

		let count = items.len();

		self.snap.store(Arc::new(items));

		tracing::info!(count, "Catalog snapshot replaced.");

		Ok(())
	}
}

fn validate(items: &[Item]) -> Result<()> {
	let mut seen = HashSet::with_capacity(items.len());

	for (position, item) in items.iter().enumerate() {
		if item.id.trim().is_empty() {
			return Err(Error::EmptyId(position));
		}
		if !item.price.is_finite() || item.price < 0.0 {
			return Err(Error::InvalidPrice { id: item.id.clone(), price: item.price });
		}
		if !seen.insert(item.id.as_str()) {
			return Err(Error::DuplicateId(item.id.clone()));
		}
	}

	Ok(())
}
