use std::{io, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod context;
mod inspect;
mod report;

use context::{Context, OutputFormat};
use inspect::Inspector;

#[derive(Parser, Debug)]
#[command(
	name = "geotag",
	about = "Print the camera and GPS details embedded in an image's EXIF data",
	version
)]
struct Cli {
	/// Image to inspect. Prompted for on the console when omitted
	#[arg(value_name = "PATH")]
	path: Option<PathBuf>,

	/// Output format
	#[arg(long, value_enum, default_value = "human", env = "GEOTAG_FORMAT")]
	format: OutputFormat,

	/// Also print every tag found in the image
	#[arg(long, env = "GEOTAG_ALL")]
	all: bool,
}

fn main() -> Result<ExitCode> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();
	let ctx = Context::new(cli.format).with_show_all(cli.all);

	let status = Inspector::new(&ctx, io::stdin().lock(), io::stdout().lock()).run(cli.path)?;

	Ok(status.into())
}
