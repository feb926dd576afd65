//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use std::io::Write;

use crate::utils::logger::Logger;
use crate::errors::GeoResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation and
/// write their result to the given writer.
pub trait Command {
    /// Execute the command
    ///
    /// # Arguments
    /// * `out` - Destination for the command's primary output
    ///
    /// # Returns
    /// Result indicating success or an error
    fn execute(&self, out: &mut dyn Write) -> GeoResult<()>;
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>>;
}
