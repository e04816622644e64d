mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Assets, Catalog, Client, Config, Service};

use std::{fs, net::SocketAddr, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.parse::<SocketAddr>().is_err() {
		return Err(Error::Validation {
			message: "service.http_bind must be a valid socket address.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.catalog.max_page_size == 0 {
		return Err(Error::Validation {
			message: "catalog.max_page_size must be greater than zero.".to_string(),
		});
	}
	if !is_http_url(&cfg.assets.public_base_url) {
		return Err(Error::Validation {
			message: "assets.public_base_url must start with http:// or https://.".to_string(),
		});
	}

	if let Some(client) = cfg.client.as_ref() {
		if !is_http_url(&client.api_base) {
			return Err(Error::Validation {
				message: "client.api_base must start with http:// or https://.".to_string(),
			});
		}
		if client.page_size == 0 {
			return Err(Error::Validation {
				message: "client.page_size must be greater than zero.".to_string(),
			});
		}
		if client.page_size > cfg.catalog.max_page_size {
			return Err(Error::Validation {
				message: "client.page_size must not exceed catalog.max_page_size.".to_string(),
			});
		}
		if client.timeout_ms == 0 {
			return Err(Error::Validation {
				message: "client.timeout_ms must be greater than zero.".to_string(),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.catalog.seed_path.as_deref().map(|path| path.as_os_str().is_empty()).unwrap_or(false) {
		cfg.catalog.seed_path = None;
	}
	if cfg.assets.static_dir.as_deref().map(|dir| dir.as_os_str().is_empty()).unwrap_or(false) {
		cfg.assets.static_dir = None;
	}

	cfg.assets.public_base_url = cfg.assets.public_base_url.trim_end_matches('/').to_string();

	if let Some(client) = cfg.client.as_mut() {
		client.api_base = client.api_base.trim_end_matches('/').to_string();
	}
}

fn is_http_url(raw: &str) -> bool {
	raw.starts_with("http://") || raw.starts_with("https://")
}
