use cmtool_error::ToolError;
use owo_colors::OwoColorize;

/// Print a user-facing diagnostic for a failed `verb`.
pub fn report_error(verb: &str, err: &ToolError) {
    match err {
        ToolError::AmbiguousMatch(_, candidates) => {
            cmtool_logger::warn(&format!("{err}:"));
            for path in candidates {
                println!("    {}", path.bright_white());
            }
            if verb == "run" {
                cmtool_logger::info(&format!("please execute {verb} with full package path."));
            } else {
                cmtool_logger::info(&format!(
                    "please execute {verb} with full package path, or add option \"-f\" to {verb} all."
                ));
            }
        }
        ToolError::PackageNotFound(_) => {
            cmtool_logger::warn(&err.to_string());
        }
        _ => {
            cmtool_logger::error(&format!("{verb} failed: {err}"));
        }
    }
}
