//! Profile sampling command
//!
//! Builds a profile from a start/stop pair or a polyline CSV, samples the
//! given XYZ grids along it and writes the resulting table.

use std::io::Write;
use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::TableOutput;
use crate::coordinate::Point;
use crate::errors::{GeoError, GeoResult};
use crate::grid::{Grid, Registration};
use crate::profile::{self, ProfileMethod, DEFAULT_NUM_POINTS};
use crate::table::PointTable;
use crate::utils::logger::Logger;

/// Command for sampling grid layers along a profile
pub struct ProfileCommand<'a> {
    method: ProfileMethod,
    /// Layers as (column name, XYZ path), top to bottom
    layers: Vec<(String, String)>,
    fill_gaps: bool,
    min_dist: Option<f64>,
    max_dist: Option<f64>,
    output: TableOutput,
    logger: &'a Logger,
}

impl<'a> ProfileCommand<'a> {
    /// Create a new profile command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let method = match (args.get_one::<String>("polyline"), args.get_one::<String>("start")) {
            (Some(path), _) => {
                let vertices = profile::vertices_from_table(&PointTable::read_csv(path)?)?;
                debug!("Read {} polyline vertices from {}", vertices.len(), path);
                ProfileMethod::Polyline {
                    vertices,
                    num_points: args.get_one::<usize>("num-points").copied(),
                }
            },
            (None, Some(start)) => {
                let stop = args.get_one::<String>("stop")
                    .ok_or_else(|| GeoError::GenericError("--start needs --stop".to_string()))?;
                ProfileMethod::Points {
                    start: Point::from_string(start).map_err(GeoError::ParseError)?,
                    stop: Point::from_string(stop).map_err(GeoError::ParseError)?,
                    num: args.get_one::<usize>("num").copied().unwrap_or(DEFAULT_NUM_POINTS),
                }
            },
            (None, None) => {
                return Err(GeoError::GenericError("Give either --start/--stop or --polyline".to_string()));
            },
        };

        let layers = args.get_many::<String>("grid")
            .map(|values| values.map(|v| parse_layer(v)).collect::<GeoResult<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();

        Ok(ProfileCommand {
            method,
            layers,
            fill_gaps: args.get_flag("fill-gaps"),
            min_dist: args.get_one::<f64>("min-dist").copied(),
            max_dist: args.get_one::<f64>("max-dist").copied(),
            output: TableOutput::from_args(args)?,
            logger,
        })
    }
}

/// Split a `name=path` layer argument
fn parse_layer(arg: &str) -> GeoResult<(String, String)> {
    match arg.split_once('=') {
        Some((name, path)) if !name.trim().is_empty() && !path.trim().is_empty() => {
            Ok((name.trim().to_string(), path.trim().to_string()))
        },
        _ => Err(GeoError::ParseError(format!("expected NAME=FILE, got '{}'", arg))),
    }
}

impl<'a> Command for ProfileCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        let points = profile::create_profile(&self.method)?;

        let mut grids = Vec::with_capacity(self.layers.len());
        for (name, path) in &self.layers {
            let mut grid = Grid::read_xyz(path, Registration::Gridline)?;
            grid.set_name(name);
            grids.push(grid);
        }

        let sampled = profile::sample_layers(&points, &grids, self.fill_gaps)?;
        let clipped = profile::clip_distance(&sampled, self.min_dist, self.max_dist)?;

        info!("Profile has {} samples and {} layers", clipped.len(), grids.len());
        self.output.write(&clipped, out)?;
        self.logger.log(&format!("Sampled {} layers along a {}-point profile", grids.len(), clipped.len()))?;
        Ok(())
    }
}
