use std::process::ExitCode;

fn main() -> ExitCode {
    broadcast::cli::run(std::env::args_os())
}
