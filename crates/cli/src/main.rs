use std::process::ExitCode;

fn main() -> ExitCode {
    c3pl_cli::run()
}
