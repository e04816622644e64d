use serde::{Deserialize, Serialize};

use crate::Item;

/// Price bounds, search text, and category that select a subsequence of the catalog.
///
/// On the wire this is the positional array `[minPrice, maxPrice, searchText, category]`.
/// `null` text fields are read as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "FilterTuple", into = "FilterTuple")]
pub struct FilterSpec {
	pub min_price: f64,
	pub max_price: f64,
	pub search_text: String,
	pub category: Option<String>,
}
impl FilterSpec {
	pub fn new(min_price: f64, max_price: f64) -> Self {
		Self { min_price, max_price, search_text: String::new(), category: None }
	}

	pub fn with_search(mut self, search_text: impl Into<String>) -> Self {
		self.search_text = search_text.into();

		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = normalize_category(Some(category.into()));

		self
	}

	pub fn matcher(&self) -> FilterMatcher<'_> {
		FilterMatcher {
			spec: self,
			category: self.category.as_deref().filter(|c| !c.is_empty()).map(str::to_lowercase),
			needle: (!self.search_text.is_empty()).then(|| self.search_text.to_lowercase()),
		}
	}

	pub fn matches(&self, item: &Item) -> bool {
		self.matcher().matches(item)
	}
}
impl Default for FilterSpec {
	fn default() -> Self {
		Self::new(0.0, f64::MAX)
	}
}

/// A [`FilterSpec`] with its text constraints lowercased once, for evaluating many items.
#[derive(Debug)]
pub struct FilterMatcher<'a> {
	spec: &'a FilterSpec,
	category: Option<String>,
	needle: Option<String>,
}
impl FilterMatcher<'_> {
	/// Price, then category, then search. All three must hold.
	pub fn matches(&self, item: &Item) -> bool {
		if !(self.spec.min_price <= item.price && item.price <= self.spec.max_price) {
			return false;
		}
		if let Some(category) = self.category.as_deref()
			&& item.category.to_lowercase() != category
		{
			return false;
		}
		if let Some(needle) = self.needle.as_deref() {
			return item.title.to_lowercase().contains(needle)
				|| item.description.to_lowercase().contains(needle);
		}

		true
	}
}

#[derive(Serialize, Deserialize)]
struct FilterTuple(f64, f64, Option<String>, Option<String>);
impl From<FilterTuple> for FilterSpec {
	fn from(FilterTuple(min_price, max_price, search_text, category): FilterTuple) -> Self {
		Self {
			min_price,
			max_price,
			search_text: search_text.unwrap_or_default(),
			category: normalize_category(category),
		}
	}
}
impl From<FilterSpec> for FilterTuple {
	fn from(spec: FilterSpec) -> Self {
		Self(spec.min_price, spec.max_price, Some(spec.search_text), spec.category)
	}
}

fn normalize_category(category: Option<String>) -> Option<String> {
	category.filter(|value| !value.is_empty())
}
