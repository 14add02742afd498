use cmtool_error::{Result, ToolError};
use cmtool_project::PackageHandle;

use crate::context::Context;
use crate::dispatch::Dispatch;

pub struct RunManager<'c, 'a> {
    ctx: &'c Context<'a>,
}

impl<'c, 'a> RunManager<'c, 'a> {
    pub const fn new(ctx: &'c Context<'a>) -> Self {
        Self { ctx }
    }

    /// Run `<package>/bin/<program>`. A nonzero exit status is only reported.
    pub fn run(&self, token: &str, program: &str, args: &[String]) -> Result<Option<i32>> {
        if program.trim().is_empty() {
            return Err(ToolError::InvalidOperation(
                "No program was specified to run!".to_string(),
            ));
        }

        let mut status = None;
        Dispatch::new(self.ctx, "run")
            .single_target()
            .run(token, |path| {
                let package = PackageHandle::open(path);
                if !package.exists() {
                    return Err(ToolError::PackageNotFound(path.to_string()));
                }

                let code = self.ctx.actions.run_program(&package.path, program, args)?;
                match code {
                    Some(0) => {}
                    Some(code) => cmtool_logger::warn(&format!("{program} exited with status {code}")),
                    None => cmtool_logger::warn(&format!("{program} was terminated by a signal")),
                }
                status = code;
                Ok(())
            })?;
        Ok(status)
    }
}
