pub type ServiceResult<T, E = ServiceError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Item not found: {id}")]
	NotFound { id: String },
	#[error(transparent)]
	Storage(#[from] curio_storage::Error),
}
