//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod arguments;
pub mod generate_command;
pub mod describe_crs_command;
pub mod bounds_command;
pub mod interactive_command;

pub use command_traits::{Command, CommandFactory};
pub use generate_command::GenerateCommand;
pub use describe_crs_command::DescribeCrsCommand;
pub use bounds_command::BoundsCommand;
pub use interactive_command::{InteractiveCommand, ParameterWizard};

use clap::ArgMatches;
use crate::grid::errors::GridResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GridkitCommandFactory;

impl GridkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GridkitCommandFactory
    }
}

impl Default for GridkitCommandFactory {
    fn default() -> Self {
        GridkitCommandFactory::new()
    }
}

impl CommandFactory for GridkitCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> GridResult<Box<dyn Command>> {
        if args.get_one::<String>("describe-crs").is_some() {
            Ok(Box::new(DescribeCrsCommand::new(args)?))
        } else if args.get_flag("interactive") {
            Ok(Box::new(InteractiveCommand::new(args)?))
        } else if args.get_flag("bounds") {
            Ok(Box::new(BoundsCommand::new(args)?))
        } else {
            // Default to generating a grid
            Ok(Box::new(GenerateCommand::new(args)?))
        }
    }
}
