/// Maps an item's asset path to the URL a browser can fetch it from.
pub trait AssetResolver
where
	Self: Send + Sync,
{
	fn resolve(&self, path: &str) -> String;
}

pub struct PublicUrlResolver {
	base: String,
}
impl PublicUrlResolver {
	pub fn new(base: &str) -> Self {
		Self { base: base.trim_end_matches('/').to_string() }
	}
}
impl AssetResolver for PublicUrlResolver {
	fn resolve(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_string();
		}

		match path.strip_prefix('/') {
			Some(rest) => format!("{}/{rest}", self.base),
			None => format!("{}/{path}", self.base),
		}
	}
}
