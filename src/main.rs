#![deny(missing_docs)]
#![warn(clippy::unwrap_used)]
//! `mandlebrot` renders a black and white image of the Mandlebrot set as a binary
//! 'P4' Portable BitMap (PBM). The image is square, with the width and height in
//! pixels given on the command line, and is written to STDOUT unless an output
//! file is named with the `-o` option.
//!
//! Execute `mandlebrot` or `mandlebrot --help` or `mandlebrot -h` at the command
//! line for a description of the command line options.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::exit;

use clap::{Arg, ArgMatches, Command};
use colored::*;
use log::{debug, error, info};
use simplog::SimpleLogger;

use mandlebrot::errors::*;
use mandlebrot::render::render;

/// `Options` struct gathers information from the parsing of the command line options
/// to be used to configure execution
struct Options {
    size: usize,
    output: Option<PathBuf>,
}

fn main() {
    match run() {
        Err(ref e) => {
            error!("{}: {}", "error".red(), e);

            for e in e.iter().skip(1) {
                error!("caused by: {}", e);
            }

            // The backtrace is generated if env var `RUST_BACKTRACE` is set to `1` or `full`
            if let Some(backtrace) = e.backtrace() {
                error!("backtrace: {:?}", backtrace);
            }

            exit(1);
        }
        Ok(_) => exit(0),
    }
}

/*
    Parse the command line options, render the image to the chosen sink and
    return an error if anything goes wrong along the way
*/
fn run() -> Result<()> {
    let options = parse_args(get_matches())?;

    match &options.output {
        Some(filename) => {
            let file = File::create(filename).chain_err(|| {
                format!("Could not create the output file '{}'", filename.display())
            })?;
            render(BufWriter::new(file), options.size)?;
            info!("Image written to '{}'", filename.display());
        }
        None => {
            // hold the lock for the whole render so image bytes are not interleaved
            let stdout = io::stdout();
            render(BufWriter::new(stdout.lock()), options.size)?;
        }
    }

    Ok(())
}

/*
    Parse the command line arguments using clap
*/
fn get_matches() -> ArgMatches {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .num_args(1)
                .value_name("OUTPUT_FILE")
                .help("Write the image to the named file instead of STDOUT"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(1)
                .value_name("VERBOSITY_LEVEL")
                .help("Set verbosity level for output (trace, debug, info, warn, error (default))"),
        )
        .arg(
            Arg::new("size")
                .num_args(1)
                .required(true)
                .value_name("SIZE")
                .help("The width and height of the square image, in pixels"),
        )
        .get_matches()
}

/*
    Parse the command line arguments
*/
fn parse_args(matches: ArgMatches) -> Result<Options> {
    let verbosity = matches.get_one::<String>("verbosity").map(|s| s.as_str());
    SimpleLogger::init_prefix(verbosity, false);

    debug!(
        "'{}' version {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    let size = matches
        .get_one::<String>("size")
        .ok_or("No image size was specified")?
        .parse::<usize>()
        .chain_err(|| "Could not parse the 'SIZE' command line parameter as a number of pixels")?;

    if size == 0 {
        bail!("Image size must be a positive number of pixels");
    }

    let output = matches.get_one::<String>("output").map(PathBuf::from);

    Ok(Options { size, output })
}
