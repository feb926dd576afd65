//! Command-line interface definition

use clap::{value_parser, Arg, ArgAction, Command as ClapCommand};

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
}

fn output_args(cmd: ClapCommand) -> ClapCommand {
    cmd.arg(
        Arg::new("output")
            .short('o')
            .long("output")
            .help("Output file (defaults to stdout)")
            .value_name("FILE"),
    )
    .arg(
        Arg::new("format")
            .long("format")
            .help("Output table format (csv, json)")
            .value_name("FORMAT")
            .default_value("csv"),
    )
}

fn float_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("VALUE")
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
}

/// Build the clap command tree
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("antarctic-kit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Antarctic geospatial utilities: EPSG:3031 conversions, regions, grids and profiles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(output_args(
            ClapCommand::new("to-latlon")
                .about("Add lat/lon columns to a CSV table of EPSG:3031 x/y points")
                .arg(input_arg("Input CSV with x and y columns"))
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Print the lon/lat extent instead of the table")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(output_args(
            ClapCommand::new("to-epsg3031")
                .about("Add EPSG:3031 x/y columns to a CSV table of lat/lon points")
                .arg(input_arg("Input CSV with lat and lon columns"))
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Print the projected region instead of the table")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(
            ClapCommand::new("region")
                .about("Describe a region given by name or as xmin,xmax,ymin,ymax")
                .arg(
                    Arg::new("region")
                        .help("Region name (e.g. ross_ice_shelf) or bounds")
                        .required_unless_present("list")
                        .allow_hyphen_values(true)
                        .index(1),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .help("List the named regions")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("dms")
                        .long("dms")
                        .help("Show the lat/lon extent as degrees:minutes:seconds")
                        .action(ArgAction::SetTrue),
                )
                .arg(float_arg("zoom", "Shrink the region by this many meters in x").default_value("0"))
                .arg(float_arg("n-shift", "Shift the region north by this many meters").default_value("0"))
                .arg(float_arg("w-shift", "Add this many meters to both x bounds").default_value("0"))
                .arg(float_arg("buffer", "Buffer distance for the buffered region").default_value("0")),
        )
        .subcommand(output_args(
            ClapCommand::new("inside")
                .about("Keep the points of a CSV table that fall inside a region")
                .arg(input_arg("Input CSV with x and y columns"))
                .arg(
                    Arg::new("region")
                        .long("region")
                        .help("Region name or xmin,xmax,ymin,ymax")
                        .value_name("REGION")
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new("reverse")
                        .long("reverse")
                        .help("Keep the points outside the region instead")
                        .action(ArgAction::SetTrue),
                ),
        ))
        .subcommand(
            ClapCommand::new("grid-info")
                .about("Print spacing, region, value range and registration of an XYZ grid")
                .arg(input_arg("Input XYZ grid file"))
                .arg(
                    Arg::new("registration")
                        .long("registration")
                        .help("Grid registration (g, p)")
                        .value_name("REG")
                        .default_value("g"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(output_args(
            ClapCommand::new("profile")
                .about("Sample XYZ grids along a profile")
                .arg(
                    Arg::new("start")
                        .long("start")
                        .help("Profile start as x,y in EPSG:3031")
                        .value_name("X,Y")
                        .allow_hyphen_values(true)
                        .requires("stop")
                        .conflicts_with("polyline"),
                )
                .arg(
                    Arg::new("stop")
                        .long("stop")
                        .help("Profile end as x,y in EPSG:3031")
                        .value_name("X,Y")
                        .allow_hyphen_values(true)
                        .requires("start"),
                )
                .arg(
                    Arg::new("num")
                        .long("num")
                        .help("Number of samples along a straight profile")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("polyline")
                        .long("polyline")
                        .help("CSV of x,y vertices defining the profile path")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("num-points")
                        .long("num-points")
                        .help("Resample the polyline to this many evenly spaced points")
                        .value_name("N")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("grid")
                        .long("grid")
                        .help("Layer to sample as name=path.xyz, top to bottom (repeatable)")
                        .value_name("NAME=FILE")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("fill-gaps")
                        .long("fill-gaps")
                        .help("Fill NaN layer samples with the layer above")
                        .action(ArgAction::SetTrue),
                )
                .arg(float_arg("min-dist", "Drop samples closer than this to the start"))
                .arg(float_arg("max-dist", "Drop samples further than this from the start")),
        ))
        .subcommand(
            ClapCommand::new("fetch")
                .about("Download a dataset into the local cache and print its path")
                .arg(
                    Arg::new("dataset")
                        .help("Dataset name")
                        .required_unless_present("list")
                        .index(1),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .help("List the registry datasets and their cache state")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("registry")
                        .long("registry")
                        .help("Dataset registry TOML file replacing the built-in one")
                        .value_name("FILE"),
                )
                .arg(
                    Arg::new("cache-dir")
                        .long("cache-dir")
                        .help("Cache directory (defaults to $ANTARCTIC_KIT_CACHE or the user cache)")
                        .value_name("DIR"),
                ),
        )
}
