use clap::Parser;
use std::process::ExitCode;

use wordsearch_cli::{logging, Cli};

/// Entry point of the `wordsearch` command.
///
/// Errors from [`wordsearch_cli::run`] are printed on stderr and turned
/// into a non-zero exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logger(cli.verbose || logging::debug_from_env());

    match wordsearch_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", wordsearch_cli::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
