use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub catalog: Catalog,
	pub assets: Assets,
	/// Required by `curio-browse` only.
	pub client: Option<Client>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
	#[serde(default = "default_true")]
	pub cors_allow_any_origin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
	/// JSON array of items. The built-in sample catalog is served when absent.
	pub seed_path: Option<PathBuf>,
	#[serde(default)]
	pub sort_by_price: bool,
	#[serde(default = "default_max_page_size")]
	pub max_page_size: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Assets {
	pub public_base_url: String,
	/// Directory holding `images/` and `models/`. Static serving is off when absent.
	pub static_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Client {
	pub api_base: String,
	#[serde(default = "default_page_size")]
	pub page_size: u32,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
}

fn default_true() -> bool {
	true
}

fn default_max_page_size() -> u32 {
	100
}

fn default_page_size() -> u32 {
	3
}

fn default_timeout_ms() -> u64 {
	10_000
}
