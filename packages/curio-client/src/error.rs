pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error(transparent)]
	Http(#[from] reqwest::Error),
	#[error("Server responded with status {status}.")]
	Status { status: u16 },
	#[error("Item not found: {id}")]
	NotFound { id: String },
	#[error("{message}")]
	InvalidConfig { message: String },
}
