use std::path::PathBuf;

use clap::Parser;
use color_eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

use curio_client::{CatalogClient, Feed, FeedView, Outcome};
use curio_domain::{FilterSpec, Item};

#[derive(Debug, Parser)]
#[command(
	version = curio_cli::VERSION,
	rename_all = "kebab",
	styles = curio_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	#[arg(long, default_value_t = 0.0)]
	pub min_price: f64,
	#[arg(long, default_value_t = 100.0)]
	pub max_price: f64,
	#[arg(long, default_value = "")]
	pub search: String,
	#[arg(long, default_value = "")]
	pub category: String,
	/// Stop after this many pages even if the server has more.
	#[arg(long, default_value_t = 10)]
	pub pages: usize,
	/// Retries per page after a transport failure.
	#[arg(long, default_value_t = 2)]
	pub retries: usize,
	/// Print the 3D listing for this item id instead of browsing.
	#[arg(long, value_name = "ID")]
	pub detail: Option<String>,
}
impl Args {
	fn filter(&self) -> FilterSpec {
		FilterSpec::new(self.min_price, self.max_price)
			.with_search(self.search.clone())
			.with_category(self.category.clone())
	}
}

pub async fn run(args: Args) -> Result<()> {
	let config = curio_config::load(&args.config)?;
	let filter = EnvFilter::try_new(&config.service.log_level)
		.unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let client_cfg = config
		.client
		.as_ref()
		.ok_or_else(|| eyre::eyre!("client section is required for curio-browse."))?;
	let client = CatalogClient::from_config(client_cfg)?;

	if let Some(id) = args.detail.as_deref() {
		let listing = client.listing_3d(id).await?;

		println!("{}", serde_json::to_string_pretty(&listing)?);

		return Ok(());
	}

	let page_size = usize::try_from(client_cfg.page_size)?;
	let feed = Feed::new(client, args.filter(), page_size);
	let mut shown = 0;
	let mut outcome = feed.mount().await;

	for _ in 0..args.pages {
		let Some(result) = outcome else {
			break;
		};
		let result = retry_failed(&feed, result, args.retries).await;

		if result == Outcome::Failed {
			return Err(eyre::eyre!("Catalog fetch kept failing after {} retries.", args.retries));
		}

		let view = feed.view();

		print_new(&view, shown);
		shown = view.items.len();

		outcome = feed.near_end().await;
	}

	let view = feed.view();

	if view.exhausted() {
		println!("-- end of catalog ({} items) --", view.items.len());
	} else if view.items.is_empty() {
		println!("-- no items match --");
	}

	Ok(())
}

async fn retry_failed(feed: &Feed<CatalogClient>, mut outcome: Outcome, retries: usize) -> Outcome {
	for attempt in 1..=retries {
		if outcome != Outcome::Failed {
			break;
		}

		tracing::warn!(attempt, "Retrying catalog fetch.");

		match feed.retry().await {
			Some(next) => outcome = next,
			None => break,
		}
	}

	outcome
}

fn print_new(view: &FeedView, already_shown: usize) {
	for item in view.items.iter().skip(already_shown) {
		println!("{}", format_item(item));
	}
}

fn format_item(item: &Item) -> String {
	format!("{:>6}  {:<24}  {:>8.2}  {}", item.id, item.title, item.price, item.category)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_filter_flags() {
		let args = Args::parse_from([
			"curio-browse",
			"-c",
			"curio.toml",
			"--max-price",
			"50",
			"--category",
			"a",
			"--search",
			"pen",
		]);
		let filter = args.filter();

		assert_eq!(filter.max_price, 50.0);
		assert_eq!(filter.category.as_deref(), Some("a"));
		assert_eq!(filter.search_text, "pen");
	}

	#[test]
	fn empty_category_flag_means_no_constraint() {
		let args = Args::parse_from(["curio-browse", "-c", "curio.toml"]);

		assert_eq!(args.filter().category, None);
	}
}
