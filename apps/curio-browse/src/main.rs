use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = curio_browse::Args::parse();
	curio_browse::run(args).await
}
