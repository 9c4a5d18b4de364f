//! Packaging-time helper: emit console-script entry-point mappings.
//!
//! Runs once at package build time, independently of the conversion driver.
//! Prints one `name = dotted.module.path:main` line per script found in the
//! fixed script directories; the installer consumes the output to register
//! command aliases.
use clap::Parser;
use std::path::PathBuf;

use r0dl1::registrar;

#[derive(Parser)]
#[command(name = "r0dl1-entry-points", version, about = "Entry-point registrar")]
struct Args {
    /// Package root containing the script directories
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    for entry in registrar::console_scripts(&args.root)? {
        println!("{entry}");
    }
    Ok(())
}
