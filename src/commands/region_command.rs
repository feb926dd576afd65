//! Region description command

use std::io::Write;
use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::resolve_region;
use crate::convert;
use crate::coordinate::Region;
use crate::errors::{GeoError, GeoResult};
use crate::regions;
use crate::utils::logger::Logger;

/// Command for printing a region's bounds, bounding box and lat/lon extent
pub struct RegionCommand<'a> {
    /// Region to describe, None when listing names
    region: Option<Region>,
    dms: bool,
    zoom: f64,
    n_shift: f64,
    w_shift: f64,
    buffer: f64,
    logger: &'a Logger,
}

impl<'a> RegionCommand<'a> {
    /// Create a new region command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let region = if args.get_flag("list") {
            None
        } else {
            let spec = args.get_one::<String>("region")
                .ok_or_else(|| GeoError::GenericError("Missing region".to_string()))?;
            Some(resolve_region(spec)?)
        };

        let number = |name: &str| args.get_one::<f64>(name).copied().unwrap_or(0.0);

        Ok(RegionCommand {
            region,
            dms: args.get_flag("dms"),
            zoom: number("zoom"),
            n_shift: number("n-shift"),
            w_shift: number("w-shift"),
            buffer: number("buffer"),
            logger,
        })
    }
}

impl<'a> Command for RegionCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        let Some(region) = self.region else {
            for name in regions::names() {
                writeln!(out, "{}", name)?;
            }
            return Ok(());
        };

        let (region, buffered) = region.alter(self.zoom, self.n_shift, self.w_shift, self.buffer)?;
        info!("Describing region {}", region);

        let [xmin, ymin, xmax, ymax] = convert::region_to_bounding_box(&region);
        writeln!(out, "Region: {}", region)?;
        if buffered != region {
            writeln!(out, "Buffered region: {}", buffered)?;
        }
        writeln!(out, "Bounding box: {},{},{},{}", xmin, ymin, xmax, ymax)?;
        writeln!(out, "Width: {}", region.width())?;
        writeln!(out, "Height: {}", region.height())?;

        if self.dms {
            let ll = convert::region_xy_to_ll_dms(&region)?;
            writeln!(out, "Lon/lat extent: {}", ll.join("/"))?;
        } else {
            let ll = convert::region_xy_to_ll(&region)?;
            writeln!(out, "Lon/lat extent: {}/{}/{}/{}", ll[0], ll[1], ll[2], ll[3])?;
        }

        self.logger.log(&format!("Described region {}", region))?;
        Ok(())
    }
}
