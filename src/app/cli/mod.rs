//! CLI Adapter.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};

use crate::app::api;
use crate::domain::{AppError, LauncherConfig};

#[derive(Parser, Debug)]
#[command(name = "fixonce-launcher")]
#[command(version)]
#[command(
    about = "Locate the FixOnce project root from the app bundle and exec its Python launcher",
    long_about = None
)]
struct Cli {
    /// Resolve and print the launch plan without changing directory or exec'ing
    #[arg(long)]
    dry_run: bool,
    /// Output format for --dry-run
    #[arg(long, value_enum, default_value_t = PlanFormat::Text, requires = "dry_run")]
    format: PlanFormat,
    /// Trace each launch step on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlanFormat {
    Text,
    Json,
}

/// Switches the launcher understands that take no value.
const KNOWN_SWITCHES: [&str; 7] =
    ["--dry-run", "-v", "--verbose", "-h", "--help", "-V", "--version"];

/// Keep the program name and the launcher's own flags; drop everything else.
///
/// LaunchServices and the Cocoa runtime pass arguments of their own
/// (`-psn_0_1234`, `-NSDocumentRevisionsDebugMode YES`, opened file paths),
/// none of which may stop the launch.
fn launch_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            continue;
        };
        if KNOWN_SWITCHES.contains(&text) || text.starts_with("--format=") {
            kept.push(arg);
        } else if text == "--format" {
            kept.push(arg);
            kept.extend(args.next());
        }
    }
    kept
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse_from(launch_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let config = LauncherConfig::from_env();
    let result = if cli.dry_run {
        print_plan(config.clone(), cli.verbose, cli.format)
    } else {
        api::launch(config.clone(), cli.verbose).map(|_| ())
    };

    if let Err(err) = result {
        api::report(&config, &err);
        std::process::exit(1);
    }
}

fn print_plan(config: LauncherConfig, verbose: bool, format: PlanFormat) -> Result<(), AppError> {
    let plan = api::plan(config, verbose)?;
    match format {
        PlanFormat::Text => println!("{}", plan),
        PlanFormat::Json => println!("{}", plan.to_json()?),
    }
    Ok(())
}
