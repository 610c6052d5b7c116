use anyhow::Result;
use geoson::geometry::{WriteOptions, read_geojson_file, write_geojson_file};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file with a FeatureCollection, a Feature or a bare geometry
	#[arg()]
	input_file: PathBuf,

	/// GeoJSON file to write, an existing file is replaced
	#[arg()]
	output_file: PathBuf,

	/// number of spaces per indentation level
	#[arg(long, value_name = "int", default_value_t = 2, display_order = 1)]
	indent: usize,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("convert from {:?} to {:?}", arguments.input_file, arguments.output_file);

	let collection = read_geojson_file(&arguments.input_file)?;
	log::debug!("read {} features in {}", collection.features.len(), collection.crs);

	if !collection.global_properties.is_empty() {
		log::warn!(
			"{} global properties are not written to the output",
			collection.global_properties.len()
		);
	}

	let options = WriteOptions {
		indent: arguments.indent,
	};
	write_geojson_file(&collection, &arguments.output_file, &options)?;

	eprintln!("finished converting {} features", collection.features.len());

	Ok(())
}
