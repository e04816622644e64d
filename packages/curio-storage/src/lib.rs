pub mod seed;
pub mod store;

mod error;

pub use error::Error;
pub use store::{CatalogStore, Snapshot};

pub type Result<T, E = Error> = std::result::Result<T, E>;
