//! CLI command implementations
//!
//! This module contains implementations of the subcommands
//! supported by the CLI application using the Command pattern.

pub mod cli;
pub mod command_traits;
pub mod convert_command;
pub mod region_command;
pub mod inside_command;
pub mod grid_info_command;
pub mod profile_command;
pub mod fetch_command;

pub use cli::build_cli;
pub use command_traits::{Command, CommandFactory};
pub use convert_command::{ConvertCommand, ConversionDirection};
pub use region_command::RegionCommand;
pub use inside_command::InsideCommand;
pub use grid_info_command::GridInfoCommand;
pub use profile_command::ProfileCommand;
pub use fetch_command::FetchCommand;

use std::fs::File;
use std::io::Write;
use clap::ArgMatches;
use log::info;

use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};
use crate::regions;
use crate::table::PointTable;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the subcommand and creates the appropriate
/// command instance for execution.
pub struct AntarcticKitCommandFactory;

impl AntarcticKitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        AntarcticKitCommandFactory
    }
}

impl Default for AntarcticKitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for AntarcticKitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("to-latlon", sub)) => Ok(Box::new(ConvertCommand::new(sub, ConversionDirection::ToLatLon, logger)?)),
            Some(("to-epsg3031", sub)) => Ok(Box::new(ConvertCommand::new(sub, ConversionDirection::ToEpsg3031, logger)?)),
            Some(("region", sub)) => Ok(Box::new(RegionCommand::new(sub, logger)?)),
            Some(("inside", sub)) => Ok(Box::new(InsideCommand::new(sub, logger)?)),
            Some(("grid-info", sub)) => Ok(Box::new(GridInfoCommand::new(sub, logger)?)),
            Some(("profile", sub)) => Ok(Box::new(ProfileCommand::new(sub, logger)?)),
            Some(("fetch", sub)) => Ok(Box::new(FetchCommand::new(sub, logger)?)),
            Some((name, _)) => Err(GeoError::GenericError(format!("Unknown command: {}", name))),
            None => Err(GeoError::GenericError("No command given".to_string())),
        }
    }
}

/// Resolve a region given by name or as "xmin,xmax,ymin,ymax"
pub(crate) fn resolve_region(spec: &str) -> GeoResult<Region> {
    match regions::by_name(spec) {
        Some(region) => Ok(region),
        None if spec.contains(',') => Region::from_string(spec),
        None => Err(GeoError::InvalidRegion(format!("unknown region name: {}", spec))),
    }
}

/// Output destination and format shared by table-producing commands
pub(crate) struct TableOutput {
    path: Option<String>,
    format: String,
}

impl TableOutput {
    pub(crate) fn from_args(args: &ArgMatches) -> GeoResult<Self> {
        let format = args.get_one::<String>("format")
            .cloned()
            .unwrap_or_else(|| "csv".to_string())
            .to_lowercase();
        if format != "csv" && format != "json" {
            return Err(GeoError::GenericError(format!("Unsupported table format: {}", format)));
        }

        Ok(TableOutput {
            path: args.get_one::<String>("output").cloned(),
            format,
        })
    }

    /// Write the table to the output file, or to `out` when none was given
    pub(crate) fn write(&self, table: &PointTable, out: &mut dyn Write) -> GeoResult<()> {
        match &self.path {
            Some(path) => {
                table.write_format(File::create(path)?, &self.format)?;
                info!("Wrote {} rows to {}", table.len(), path);
                Ok(())
            },
            None => table.write_format(out, &self.format),
        }
    }
}

/// Required positional input path
pub(crate) fn input_path(args: &ArgMatches) -> GeoResult<String> {
    args.get_one::<String>("input")
        .cloned()
        .ok_or_else(|| GeoError::GenericError("Missing input file".to_string()))
}
