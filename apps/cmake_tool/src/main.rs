use std::process::ExitCode;

fn main() -> ExitCode {
    match cmtool_cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cmtool_logger::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
