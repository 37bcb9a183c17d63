// src/main.rs
use clap::Parser as _;
use convert_eol::{Args, logging, run, usage_example};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if !err.use_stderr() => {
            // --help and --version
            return match err.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(io_err) => {
                    eprintln!("Failed to print help: {io_err}");
                    ExitCode::FAILURE
                }
            };
        }
        Err(err) => {
            println!("{err}");
            println!("Example:");
            println!("\t{}", usage_example());
            return ExitCode::from(2);
        }
    };

    logging::init(args.verbose, args.quiet);

    match run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Run aborted: {err:#}");
            println!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
