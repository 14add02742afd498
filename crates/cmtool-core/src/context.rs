use cmtool_error::Result;
use cmtool_registry::RegistryStore;
use cmtool_runtime::ExternalActions;

use crate::prompt::Confirm;

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Apply an operation to every basename match instead of refusing.
    pub force: bool,
    /// Suppress success lines.
    pub quiet: bool,
    /// Echo debug lines to the terminal.
    pub debug: bool,
}

/// Everything one lifecycle call needs. Built per invocation and borrowed by
/// the managers; nothing here outlives the command.
pub struct Context<'a> {
    pub store: RegistryStore,
    pub actions: &'a dyn ExternalActions,
    pub prompt: &'a dyn Confirm,
    pub options: Options,
}

impl<'a> Context<'a> {
    pub fn new(
        store: RegistryStore,
        actions: &'a dyn ExternalActions,
        prompt: &'a dyn Confirm,
    ) -> Self {
        Self {
            store,
            actions,
            prompt,
            options: Options::default(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    pub(crate) fn success(&self, message: &str) {
        if !self.options.quiet {
            cmtool_logger::success(message);
        }
    }

    pub(crate) fn info(&self, message: &str) {
        if !self.options.quiet {
            cmtool_logger::info(message);
        }
    }

    pub(crate) fn debug(&self, message: &str) {
        cmtool_logger::debug(message, self.options.debug);
    }

    /// Run one lifecycle call between the `-->> run` and `<<-- end` log lines.
    pub(crate) fn traced<T, F>(&self, verb: &str, target: &str, call: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        self.debug(&format!("-->> run cmake_tool {verb}: {target}"));
        let outcome = call();
        self.debug(&format!("<<-- end cmake_tool {verb}: {target}"));
        outcome
    }
}
