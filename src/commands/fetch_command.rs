//! Dataset download command

use std::io::Write;
use std::path::PathBuf;
use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::fetch::{builtin_registry, default_cache_dir, DatasetRegistry, Fetcher};
use crate::utils::logger::Logger;

/// Command for downloading a dataset or listing the registry
pub struct FetchCommand<'a> {
    /// Dataset to fetch, None when listing
    dataset: Option<String>,
    fetcher: Fetcher,
    logger: &'a Logger,
}

impl<'a> FetchCommand<'a> {
    /// Create a new fetch command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let registry = match args.get_one::<String>("registry") {
            Some(path) => DatasetRegistry::from_file(path)?,
            None => builtin_registry().clone(),
        };
        let cache_dir = match args.get_one::<String>("cache-dir") {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_dir()?,
        };

        let dataset = if args.get_flag("list") {
            None
        } else {
            Some(args.get_one::<String>("dataset")
                .cloned()
                .ok_or_else(|| GeoError::GenericError("Missing dataset name".to_string()))?)
        };

        Ok(FetchCommand {
            dataset,
            fetcher: Fetcher::new_in(cache_dir, registry),
            logger,
        })
    }
}

impl<'a> Command for FetchCommand<'a> {
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()> {
        let Some(name) = &self.dataset else {
            for entry in self.fetcher.registry().entries() {
                let state = if self.fetcher.is_cached(&entry.name)? { "cached" } else { "remote" };
                writeln!(out, "{:<24} {:<7} {}", entry.name, state, entry.description)?;
            }
            return Ok(());
        };

        let path = self.fetcher.fetch(name)?;
        writeln!(out, "{}", path.display())?;
        self.logger.log(&format!("Fetched {} to {}", name, path.display()))?;
        Ok(())
    }
}
