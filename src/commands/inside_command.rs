//! Point-in-region filter command

use std::io::Write;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_path, resolve_region, TableOutput};
use crate::convert;
use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};
use crate::table::PointTable;
use crate::utils::logger::Logger;

/// Command for keeping the points inside (or outside) a region
pub struct InsideCommand<'a> {
    input_file: String,
    region: Region,
    reverse: bool,
    output: TableOutput,
    logger: &'a Logger,
}

impl<'a> InsideCommand<'a> {
    /// Create a new filter command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let spec = args.get_one::<String>("region")
            .ok_or_else(|| GeoError::GenericError("Missing --region".to_string()))?;

        Ok(InsideCommand {
            input_file: input_path(args)?,
            region: resolve_region(spec)?,
            reverse: args.get_flag("reverse"),
            output: TableOutput::from_args(args)?,
            logger,
        })
    }
}

impl<'a> Command for InsideCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        let table = PointTable::read_csv(&self.input_file)?;
        let kept = convert::points_inside_region(&table, &self.region, self.reverse)?;

        info!("Kept {} of {} points", kept.len(), table.len());
        self.output.write(&kept, out)?;
        self.logger.log(&format!("Filtered {} by region {}: kept {} of {} points",
                                 self.input_file, self.region, kept.len(), table.len()))?;
        Ok(())
    }
}
