pub mod archive;
pub mod attach;
pub mod build;
pub mod clean;
pub mod create;
pub mod delete;
pub mod detach;
pub mod help;
pub mod list;
pub mod reset;
pub mod run;

pub use archive::ArchiveHandler;
pub use attach::AttachHandler;
pub use build::BuildHandler;
pub use clean::CleanHandler;
pub use create::CreateHandler;
pub use delete::DeleteHandler;
pub use detach::DetachHandler;
pub use help::HelpHandler;
pub use list::ListHandler;
pub use reset::ResetHandler;
pub use run::RunHandler;

use cmtool_core::report_error;
use owo_colors::OwoColorize;

/// Per-package failures are reported and the command goes on; only fatal
/// errors reach the caller.
pub(crate) fn settle<T>(verb: &str, result: cmtool_error::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_fatal() => Err(err.into()),
        Err(err) => {
            report_error(verb, &err);
            Ok(None)
        }
    }
}

pub(crate) fn print_header(verb: &str, target: &str) {
    println!(
        "{} {} {}",
        "cmake_tool".bright_cyan().bold(),
        verb.bright_white(),
        target.bright_white()
    );
}
