mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use curio_config::{Assets, Catalog, Client, Config, Service};
use curio_domain::Item;

const CATEGORIES: [&str; 3] = ["A", "B", "c"];

pub fn item(id: &str, price: f64, category: &str) -> Item {
	Item {
		id: id.to_string(),
		title: format!("Item {id}"),
		description: format!("Synthetic catalog entry {id}."),
		price,
		seller: "Test Seller".to_string(),
		category: category.to_string(),
		image: format!("/images/{id}.png"),
		model_path: format!("/models/{id}.glb"),
	}
}

/// `count` items with ids `0..count`, prices cycling through 0-99 and categories A, B, c.
pub fn catalog(count: usize) -> Vec<Item> {
	(0..count)
		.map(|index| {
			let price = ((index * 37) % 100) as f64;

			item(&index.to_string(), price, CATEGORIES[index % CATEGORIES.len()])
		})
		.collect()
}

pub fn test_config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
			cors_allow_any_origin: true,
		},
		catalog: Catalog { seed_path: None, sort_by_price: false, max_page_size: 100 },
		assets: Assets { public_base_url: "http://assets.test".to_string(), static_dir: None },
		client: Some(Client {
			api_base: "http://127.0.0.1:1".to_string(),
			page_size: 3,
			timeout_ms: 1_000,
		}),
	}
}

pub struct TempFile {
	path: PathBuf,
}
impl TempFile {
	pub fn write(prefix: &str, extension: &str, payload: &str) -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(|err| Error::Message(format!("System time must be valid: {err}.")))?
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let path = env::temp_dir().join(format!("{prefix}_{nanos}_{pid}_{ordinal}.{extension}"));

		fs::write(&path, payload)?;

		Ok(Self { path })
	}

	pub fn json(prefix: &str, items: &[Item]) -> Result<Self> {
		Self::write(prefix, "json", &serde_json::to_string(items)?)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}
impl Drop for TempFile {
	fn drop(&mut self) {
		if let Err(err) = fs::remove_file(&self.path) {
			eprintln!("Temp file cleanup failed: {err}.");
		}
	}
}
