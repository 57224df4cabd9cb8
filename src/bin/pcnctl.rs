//! pcnctl - batch command driver for PCN cube-list expressions
//!
//! Reads a command file and runs it against a slot map of expressions
//! bound to `.pcn` files under an input and an output directory.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use urp_bdd::driver::Driver;

#[derive(Parser, Debug)]
#[command(name = "pcnctl")]
#[command(about = "Batch driver for PCN cube-list expressions", long_about = None)]
struct Args {
    /// Command file to execute
    #[arg(value_name = "COMMANDS")]
    command_file: PathBuf,

    /// Directory .pcn files are read from
    #[arg(short = 'i', long = "input-dir", default_value = ".")]
    input_dir: PathBuf,

    /// Directory .pcn files are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    output_dir: PathBuf,

    /// Print each command as it runs, to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.command_file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error reading '{}': {e}", args.command_file.display());
            process::exit(1);
        }
    };

    let mut driver = Driver::new(args.input_dir, args.output_dir);
    for (index, line) in text.lines().enumerate() {
        if args.verbose {
            eprintln!("[{}] {line}", index + 1);
        }
        if let Err(e) = driver.process_line(index + 1, line) {
            eprintln!("error: {e}");
            process::exit(1);
        }
        if driver.is_done() {
            break;
        }
    }
}
