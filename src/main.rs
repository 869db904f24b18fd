use std::process::ExitCode;

use clap::Parser;
use schemaform::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();

    match schemaform::cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
