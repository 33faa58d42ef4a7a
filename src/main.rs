//! Pake defaults - prints the default option tables of the packaging CLI.

use pake_cli_options::cli;
use std::process;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
