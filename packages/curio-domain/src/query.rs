use crate::{Cursor, FilterSpec, Item, Page};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
	/// Stable ascending-price sort of the filtered sequence, applied before slicing.
	pub sort_by_price: bool,
}

/// Filters `snapshot` and returns the page `[cursor, cursor + page_size)` of the result.
///
/// A zero `page_size` or a cursor past the end yields an empty page with `has_more = false`.
/// `next_cursor` always advances by the number of items returned, so walking cursors from zero
/// partitions the filtered sequence.
pub fn query(
	snapshot: &[Item],
	filter: &FilterSpec,
	cursor: Cursor,
	page_size: usize,
	options: QueryOptions,
) -> Page {
	if page_size == 0 {
		return Page::empty(cursor);
	}

	let matcher = filter.matcher();
	let filtered = snapshot.iter().filter(|item| matcher.matches(item));

	if !options.sort_by_price {
		// Native order: stream the window and peek one past it for `has_more`.
		let mut window = filtered.skip(cursor).take(page_size.saturating_add(1));
		let items: Vec<Item> = window.by_ref().take(page_size).cloned().collect();
		let has_more = window.next().is_some();

		return Page { next_cursor: cursor + items.len(), items, has_more };
	}

	let mut sorted: Vec<&Item> = filtered.collect();

	sorted.sort_by(|a, b| a.price.total_cmp(&b.price));

	let total = sorted.len();
	let start = cursor.min(total);
	let end = start.saturating_add(page_size).min(total);
	let items: Vec<Item> = sorted[start..end].iter().map(|item| (*item).clone()).collect();
	let next_cursor = cursor + items.len();

	Page { items, next_cursor, has_more: next_cursor < total }
}

pub fn count_matches(snapshot: &[Item], filter: &FilterSpec) -> usize {
	let matcher = filter.matcher();

	snapshot.iter().filter(|item| matcher.matches(item)).count()
}
