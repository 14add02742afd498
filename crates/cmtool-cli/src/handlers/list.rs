use anyhow::Result;
use cmtool_core::{Context, ListFormat, ListManager};

use super::settle;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list(ctx: &Context<'_>, basename: bool, path: bool, json: bool) -> Result<()> {
        let format = Self::format_for(basename, path, json);
        if let Some(output) = settle("list", ListManager::new(ctx).list(format))? {
            print!("{output}");
        }
        Ok(())
    }

    const fn format_for(basename: bool, path: bool, json: bool) -> ListFormat {
        if json {
            ListFormat::Json
        } else if basename {
            ListFormat::Basename
        } else if path {
            ListFormat::Path
        } else {
            ListFormat::Table
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_selection() {
        assert_eq!(ListHandler::format_for(false, false, false), ListFormat::Table);
        assert_eq!(ListHandler::format_for(true, false, false), ListFormat::Basename);
        assert_eq!(ListHandler::format_for(false, true, false), ListFormat::Path);
        assert_eq!(ListHandler::format_for(false, false, true), ListFormat::Json);
    }
}
