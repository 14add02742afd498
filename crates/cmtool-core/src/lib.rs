pub mod archive;
pub mod attach;
pub mod build;
mod bulk;
pub mod clean;
pub mod context;
pub mod create;
pub mod delete;
pub mod detach;
mod dispatch;
pub mod list;
pub mod prompt;
pub mod report;
pub mod reset;
pub mod run;

#[cfg(test)]
mod testing;

pub use archive::{ArchiveManager, resolve_destination};
pub use attach::AttachManager;
pub use build::BuildManager;
pub use clean::CleanManager;
pub use context::{Context, Options};
pub use create::CreateManager;
pub use delete::DeleteManager;
pub use detach::DetachManager;
pub use list::{ListFormat, ListManager, render};
pub use prompt::{Confirm, LinePrompt, parse_answer};
pub use report::report_error;
pub use reset::ResetManager;
pub use run::RunManager;
