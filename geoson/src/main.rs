mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Command line of the geoson binary
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about, // workspace description
	long_about = None,
	propagate_version = true, // subcommands report the crate version
	disable_help_subcommand = true, // `--help` is enough
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // -v/-q, errors only by default
}

// One variant per tool in `tools`
#[derive(Subcommand, Debug)]
enum Commands {
	#[command(alias = "converter")]
	/// Read a GeoJSON file and write it back in local ENU coordinates
	Convert(tools::convert::Subcommand),

	/// Show information about a GeoJSON file
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	// anyhow prints the whole error chain on failure
	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Convert(arguments) => tools::convert::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}
