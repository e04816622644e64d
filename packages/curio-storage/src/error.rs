#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalog seed at {path:?}.")]
	ReadSeed { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse catalog seed at {path:?}.")]
	ParseSeed { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Duplicate item id: {0}")]
	DuplicateId(String),
	#[error("Item at position {0} has an empty id.")]
	EmptyId(usize),
	#[error("Item {id} has invalid price {price}.")]
	InvalidPrice { id: String, price: f64 },
}
