//! Command-line interface implementation for pl2dist.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for pl2dist.
///
/// The script path is the only argument; everything else is configured
/// through environment variables.
#[derive(Parser, Debug)]
#[command(author, version, about = "pl2dist: turn a script into a packaged distribution directory", long_about = None)]
pub struct Args {
    /// Path to the script to scaffold (it does not have to exist yet)
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if the script argument is missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
