use serde::{Deserialize, Serialize};

use curio_domain::{FilterSpec, Page, query};

use crate::CatalogService;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemsRequest {
	pub sort: FilterSpec,
	pub index: i64,
	pub count: i64,
}

pub type ItemsResponse = Page;

impl CatalogService {
	/// Never fails: impossible filters, negative cursors and non-positive counts all come back as
	/// a final empty page.
	pub fn items(&self, req: ItemsRequest) -> ItemsResponse {
		let Ok(cursor) = usize::try_from(req.index) else {
			tracing::debug!(index = req.index, "Negative cursor requested.");

			return Page::empty(0);
		};

		let requested = match u64::try_from(req.count) {
			Ok(count) if count > 0 => count,
			_ => {
				tracing::debug!(count = req.count, "Non-positive page size requested.");

				return Page::empty(cursor);
			},
		};
		let max_page_size = u64::from(self.cfg.catalog.max_page_size);
		let page_size = usize::try_from(requested.min(max_page_size)).unwrap_or(usize::MAX);
		let snapshot = self.store.snapshot();
		let page = query(&snapshot, &req.sort, cursor, page_size, self.query_options());

		tracing::debug!(
			cursor,
			page_size,
			returned = page.items.len(),
			has_more = page.has_more,
			"Catalog page served."
		);

		page
	}
}
