//! Validate command - check components for unused identifiers

use clap::{Args, ValueEnum};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use webes_scanner::output::{to_json, to_markdown, to_text};
use webes_scanner::config::load_config;
use webes_scanner::Validator;

#[derive(Args)]
pub struct ValidateArgs {
    /// Project root containing the components directory
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Components directory relative to the root, overriding webes.config.json
    #[arg(long)]
    pub components_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum number of warnings before failing
    #[arg(long)]
    pub max_warnings: Option<usize>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// Run the validation and print or write the report.
///
/// Returns `Ok(false)` when the run should exit with a failure status:
/// an error-severity finding, or more warnings than `--max-warnings`.
pub fn execute(args: &ValidateArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let mut validator = Validator::new();
    if let Some(dir) = &args.components_dir {
        let mut config = load_config(&args.root);
        config.components_dir.clone_from(dir);
        validator = validator.with_config(config);
    }
    let report = validator.validate_project(&args.root)?;

    let color = !args.no_color && args.output.is_none() && io::stdout().is_terminal();
    let rendered = match args.format {
        OutputFormat::Text => to_text(&report, color),
        OutputFormat::Json => to_json(&report)?,
        OutputFormat::Markdown => to_markdown(&report),
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("Wrote {:?} report to: {}", args.format, path.display());
        }
        None if rendered.ends_with('\n') => print!("{rendered}"),
        None => println!("{rendered}"),
    }

    let mut passed = report.error_count() == 0;

    if let Some(max) = args.max_warnings {
        let warnings = report.warning_count();
        if warnings > max {
            eprintln!("Too many warnings ({warnings} > max {max})");
            passed = false;
        }
    }

    Ok(passed)
}
