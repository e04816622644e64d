use std::{fs, path::Path};

use curio_domain::Item;

use crate::{Error, Result};

/// Reads a JSON array of items. Order in the file is the catalog's native order.
pub fn load_seed(path: &Path) -> Result<Vec<Item>> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadSeed { path: path.to_path_buf(), source: err })?;
	let items: Vec<Item> = serde_json::from_str(&raw)
		.map_err(|err| Error::ParseSeed { path: path.to_path_buf(), source: err })?;

	tracing::debug!(path = %path.display(), count = items.len(), "Catalog seed loaded.");

	Ok(items)
}

/// Built-in demo catalog used when no seed file is configured.
pub fn sample_items() -> Vec<Item> {
	vec![
		Item {
			id: "1".to_string(),
			title: "Apple Pencil".to_string(),
			description: "Someone's parents are going to be mad...".to_string(),
			price: 60.0,
			seller: "John Doe".to_string(),
			category: "A".to_string(),
			image: "/images/apple_pencil.png".to_string(),
			model_path: "/models/apple_pencil.glb".to_string(),
		},
		Item {
			id: "2".to_string(),
			title: "Cube".to_string(),
			description: "Kevin the Cube".to_string(),
			price: 20.0,
			seller: "Kevin the Cube".to_string(),
			category: "B".to_string(),
			image: "/images/cube.png".to_string(),
			model_path: "/models/model.glb".to_string(),
		},
		Item {
			id: "3".to_string(),
			title: "AirPod Max".to_string(),
			description: "Do people actually buy these?".to_string(),
			price: 30.0,
			seller: "TJ Louie".to_string(),
			category: "A".to_string(),
			image: "/images/airpod_max.png".to_string(),
			model_path: "/models/model.glb".to_string(),
		},
	]
}
