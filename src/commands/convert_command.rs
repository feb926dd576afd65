//! Coordinate conversion commands
//!
//! This module implements the commands that add EPSG:3031 or lat/lon columns
//! to a CSV table of points.

use std::io::Write;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_path, TableOutput};
use crate::convert;
use crate::errors::GeoResult;
use crate::table::PointTable;
use crate::utils::logger::Logger;

/// Which way the conversion goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionDirection {
    /// EPSG:3031 x/y to lat/lon
    ToLatLon,
    /// lat/lon to EPSG:3031 x/y
    ToEpsg3031,
}

/// Command for converting a point table between coordinate systems
pub struct ConvertCommand<'a> {
    /// Path to the input CSV
    input_file: String,
    direction: ConversionDirection,
    /// Print the spanning region instead of the table
    region_only: bool,
    output: TableOutput,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ConvertCommand<'a> {
    /// Create a new convert command
    ///
    /// # Arguments
    /// * `args` - Subcommand argument matches from clap
    /// * `direction` - Conversion direction
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, direction: ConversionDirection, logger: &'a Logger) -> GeoResult<Self> {
        Ok(ConvertCommand {
            input_file: input_path(args)?,
            direction,
            region_only: args.get_flag("region"),
            output: TableOutput::from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for ConvertCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        info!("Converting {} ({:?})", self.input_file, self.direction);
        let table = PointTable::read_csv(&self.input_file)?;

        match (self.direction, self.region_only) {
            (ConversionDirection::ToLatLon, true) => {
                let [lon_min, lon_max, lat_min, lat_max] = convert::epsg3031_to_latlon_region(&table)?;
                writeln!(out, "{},{},{},{}", lon_min, lon_max, lat_min, lat_max)?;
            },
            (ConversionDirection::ToEpsg3031, true) => {
                let region = convert::latlon_to_epsg3031_region(&table)?;
                let [xmin, xmax, ymin, ymax] = region.to_array();
                writeln!(out, "{},{},{},{}", xmin, xmax, ymin, ymax)?;
            },
            (ConversionDirection::ToLatLon, false) => {
                self.output.write(&convert::epsg3031_to_latlon(&table)?, out)?;
            },
            (ConversionDirection::ToEpsg3031, false) => {
                self.output.write(&convert::latlon_to_epsg3031(&table)?, out)?;
            },
        }

        self.logger.log(&format!("Converted {} points from {}", table.len(), self.input_file))?;
        Ok(())
    }
}
