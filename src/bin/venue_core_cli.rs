use std::process::ExitCode;

fn main() -> ExitCode {
    venue_core::init();
    match venue_core::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {}", err);
            ExitCode::FAILURE
        }
    }
}
