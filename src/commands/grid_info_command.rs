//! Grid metadata command

use std::io::Write;
use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::input_path;
use crate::errors::GeoResult;
use crate::grid::{get_grid_info, Grid, Registration};
use crate::utils::logger::Logger;

/// Command for printing the metadata of an XYZ grid
pub struct GridInfoCommand<'a> {
    input_file: String,
    registration: Registration,
    json: bool,
    logger: &'a Logger,
}

impl<'a> GridInfoCommand<'a> {
    /// Create a new grid-info command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let registration = match args.get_one::<String>("registration") {
            Some(code) => Registration::from_string(code)?,
            None => Registration::Gridline,
        };

        Ok(GridInfoCommand {
            input_file: input_path(args)?,
            registration,
            json: args.get_flag("json"),
            logger,
        })
    }
}

impl<'a> Command for GridInfoCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        let grid = Grid::read_xyz(&self.input_file, self.registration)?;
        let info = get_grid_info(&grid);

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &info)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", info)?;
        }

        self.logger.log_grid_info(grid.name(), &info)?;
        Ok(())
    }
}
