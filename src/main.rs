use arctest::cli;
use std::process::ExitCode;

mod samples;

fn main() -> ExitCode {
    // Run the bundled suite through the CLI
    match cli::run(samples::classes()) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
