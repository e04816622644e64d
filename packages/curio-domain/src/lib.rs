pub mod filter;
pub mod item;
pub mod page;
pub mod query;

pub use filter::{FilterMatcher, FilterSpec};
pub use item::Item;
pub use page::{Cursor, Page};
pub use query::{QueryOptions, count_matches, query};
