use anyhow::Context;
use clap::Parser;
use schedule_obs::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let result = commands::setup_logging(&args)
        .context("Failed to initialize logging")
        .and_then(|_| {
            commands::run(&args).with_context(|| {
                format!(
                    "Failed to extract observations from {}",
                    args.input.display()
                )
            })
        });

    match result {
        Ok(_summary) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
