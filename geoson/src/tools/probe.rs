use anyhow::Result;
use geoson::geometry::read_geojson_file;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file you want to probe
	#[arg(required = true)]
	filename: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("probe {:?}", arguments.filename);

	let collection = read_geojson_file(&arguments.filename)?;

	print!("{collection}");

	println!("GEOMETRIES:");
	for (type_name, count) in collection.count_by_type() {
		println!("  {type_name}: {count}");
	}

	if !collection.global_properties.is_empty() {
		println!("GLOBAL PROPERTIES:");
		for (key, value) in &collection.global_properties {
			println!("  {key}: {value}");
		}
	}

	Ok(())
}
