//! Interactive parameter wizard
//!
//! Walks the user through the five grid parameters, offering the current
//! value of each as the default, then runs the generator. When a run fails
//! the error is shown and the user may re-enter the parameters.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use clap::ArgMatches;
use log::info;

use crate::commands::arguments;
use crate::commands::command_traits::Command;
use crate::commands::generate_command::{summarize, GenerateCommand};
use crate::config::GridParameters;
use crate::grid::errors::{GridError, GridResult};

/// Prompts for grid parameters on a line-oriented input
pub struct ParameterWizard<R, W> {
    input: R,
    output: W,
    defaults: GridParameters,
}

impl<R: BufRead, W: Write> ParameterWizard<R, W> {
    pub fn new(input: R, output: W, defaults: GridParameters) -> Self {
        ParameterWizard {
            input,
            output,
            defaults,
        }
    }

    /// Ask for every parameter
    ///
    /// # Returns
    /// The chosen parameters, or `None` if the user declined to run
    pub fn collect(&mut self) -> GridResult<Option<GridParameters>> {
        self.explain_parameters()?;

        let defaults = self.defaults.clone();

        let source_path = self.ask_value(
            "Would you like to specify a different input path than the default value?",
            "Enter the path to your input .geojson:",
            &defaults.source_path.display().to_string())?;
        let destination_path = self.ask_value(
            "Would you like to specify a different output path than the default value?",
            "Enter the path to your output .csv or .txt:",
            &defaults.destination_path.display().to_string())?;
        let source_crs = self.ask_value(
            "Would you like to specify a different input coordinate system than the default value?",
            "Enter the identifier of your input coordinate system (e.g. EPSG:4326):",
            &defaults.source_crs)?;
        let target_crs = self.ask_value(
            "Would you like to specify a different output coordinate system than the default value?",
            "Enter the identifier of your output coordinate system (e.g. EPSG:26915):",
            &defaults.target_crs)?;
        let spacing = self.ask_spacing(defaults.spacing)?;

        let params = GridParameters {
            source_path: PathBuf::from(source_path),
            destination_path: PathBuf::from(destination_path),
            source_crs,
            target_crs,
            spacing,
        };

        writeln!(self.output, "\nYou have selected the following parameters:")?;
        writeln!(self.output, "  input        = {}", params.source_path.display())?;
        writeln!(self.output, "  output       = {}", params.destination_path.display())?;
        writeln!(self.output, "  source CRS   = {}", params.source_crs)?;
        writeln!(self.output, "  target CRS   = {}", params.target_crs)?;
        writeln!(self.output, "  grid spacing = {}", params.spacing)?;

        if self.confirm("Run the grid generator with these values?")? {
            Ok(Some(params))
        } else {
            Ok(None)
        }
    }

    /// Collect parameters and run them, offering re-entry after a failure
    ///
    /// The parameters of a failed attempt become the defaults of the next one.
    pub fn run_with<T, F>(&mut self, mut run: F) -> GridResult<Option<T>>
    where
        F: FnMut(&GridParameters) -> GridResult<T>,
    {
        loop {
            let Some(params) = self.collect()? else {
                writeln!(self.output, "Grid generation cancelled")?;
                return Ok(None);
            };

            match run(&params) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => {
                    writeln!(self.output, "Grid generation failed: {}", e)?;
                    if !self.confirm("Would you like to re-enter the parameters?")? {
                        return Err(e);
                    }
                    self.defaults = params;
                },
            }
        }
    }

    /// Ask a yes/no question; anything but "y"/"yes" counts as no
    pub fn confirm(&mut self, question: &str) -> GridResult<bool> {
        let answer = self.prompt(&format!("{} (Y/N)", question))?;
        Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn explain_parameters(&mut self) -> GridResult<()> {
        let d = &self.defaults;
        writeln!(self.output, "Welcome to the GridKit grid generator.")?;
        writeln!(self.output, "The input is a GeoJSON file outlining the area to cover; only its bounding box is used.")?;
        writeln!(self.output, "\nThe grid generator takes five parameters:")?;
        writeln!(self.output, "  input        GeoJSON file to cover (default: {})", d.source_path.display())?;
        writeln!(self.output, "  output       text file receiving easting,northing rows (default: {})",
                 d.destination_path.display())?;
        writeln!(self.output, "  source CRS   any EPSG identifier of the input coordinates (default: {})", d.source_crs)?;
        writeln!(self.output, "  target CRS   any EPSG identifier the grid is laid out in (default: {})", d.target_crs)?;
        writeln!(self.output, "  grid spacing positive integer in target CRS units (default: {})\n", d.spacing)?;
        Ok(())
    }

    fn ask_value(&mut self, question: &str, request: &str, default: &str) -> GridResult<String> {
        if !self.confirm(question)? {
            return Ok(default.to_string());
        }

        loop {
            let value = self.prompt(request)?;
            if !value.is_empty() {
                return Ok(value);
            }
            writeln!(self.output, "A value is required.")?;
        }
    }

    fn ask_spacing(&mut self, default: i64) -> GridResult<i64> {
        if !self.confirm("Would you like to specify a different grid spacing than the default value?")? {
            return Ok(default);
        }

        loop {
            let value = self.prompt("Enter your desired grid spacing as a whole number:")?;
            match value.parse::<i64>() {
                Ok(spacing) if spacing > 0 => return Ok(spacing),
                _ => writeln!(self.output, "'{}' is not a positive whole number.", value)?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> GridResult<String> {
        write!(self.output, "{} ", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GridError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof, "input closed while waiting for an answer")));
        }

        Ok(line.trim().to_string())
    }
}

/// Command running the wizard on the terminal
pub struct InteractiveCommand {
    /// Starting values, from the config file and command line
    defaults: GridParameters,
    show_progress: bool,
}

impl InteractiveCommand {
    pub fn new(args: &ArgMatches) -> GridResult<Self> {
        Ok(InteractiveCommand {
            defaults: arguments::resolve_parameters(args)?,
            show_progress: arguments::show_progress(args),
        })
    }
}

impl Command for InteractiveCommand {
    fn execute(&self) -> GridResult<()> {
        info!("Starting interactive session");

        let stdin = io::stdin();
        let mut wizard = ParameterWizard::new(stdin.lock(), io::stdout(), self.defaults.clone());

        let show_progress = self.show_progress;
        let run = wizard.run_with(|params| {
            GenerateCommand::from_parameters(params.clone(), None, show_progress).run()
        })?;

        if let Some(run) = run {
            print!("{}", summarize(&run));
        }
        Ok(())
    }
}
