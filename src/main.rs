use clap::Parser;
use lp2csv::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(summary) if summary.has_failures() => {
            // Failures have already been reported in the summary
            process::exit(1);
        }
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
