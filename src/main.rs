//! Binary entry point for fizzbuzz-rs.

use clap::Parser;
use fizzbuzz_rs::cli::output::{OutputFormat, report_error};
use fizzbuzz_rs::cli::{Cli, execute};
use fizzbuzz_rs::logging::init_logging;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = cli.output_format().unwrap_or(OutputFormat::Text);

    let mut stdout = BufWriter::new(io::stdout().lock());
    match execute(&cli, &mut stdout) {
        Ok(_) => ExitCode::SUCCESS,
        // Downstream closed early (e.g. piped to `head`)
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            drop(stdout);
            report_error(&e, format, &mut io::stdout(), &mut io::stderr());
            ExitCode::FAILURE
        }
    }
}
