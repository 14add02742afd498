use cmtool_error::{Result, ToolError};
use cmtool_registry::{MatchResult, PathResolver};

use crate::context::Context;
use crate::report::report_error;

/// What to do with a token after looking it up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Step {
    /// Run the action on each path, in registry order.
    Act(Vec<String>),
    Report(ToolError),
}

/// Shared resolve-then-act flow for every token-driven operation:
/// a full-path match or a single basename match acts on that entry, several
/// basename matches need `--force`.
pub(crate) struct Dispatch<'c, 'a> {
    ctx: &'c Context<'a>,
    verb: &'static str,
    forceable: bool,
}

impl<'c, 'a> Dispatch<'c, 'a> {
    pub(crate) const fn new(ctx: &'c Context<'a>, verb: &'static str) -> Self {
        Self {
            ctx,
            verb,
            forceable: true,
        }
    }

    /// Several matches are always reported, even with `--force`.
    pub(crate) const fn single_target(mut self) -> Self {
        self.forceable = false;
        self
    }

    pub(crate) fn plan(&self, token: &str, entries: &[String]) -> Step {
        let home = self.ctx.store.home();

        match PathResolver::resolve(token, entries, home) {
            MatchResult::FullPathMatch(path) => Step::Act(vec![path]),
            MatchResult::BasenameMatches(paths) if paths.is_empty() => {
                Step::Report(ToolError::PackageNotFound(token.to_string()))
            }
            MatchResult::BasenameMatches(paths) if paths.len() == 1 => {
                self.ctx.debug(&format!("'{token}' names one package {paths:?}"));
                Step::Act(paths)
            }
            MatchResult::BasenameMatches(paths) => {
                if self.forceable && self.ctx.options.force {
                    Step::Act(paths)
                } else {
                    Step::Report(ToolError::AmbiguousMatch(token.to_string(), paths))
                }
            }
        }
    }

    /// Resolve `token` against the current registry and call `act` for each
    /// target. With several forced targets a failure is reported and the
    /// remaining targets still run.
    pub(crate) fn run<F>(&self, token: &str, mut act: F) -> Result<()>
    where
        F: FnMut(&str) -> Result<()>,
    {
        if token.trim().is_empty() {
            return Err(ToolError::InvalidOperation(
                "No name was specified for this project!".to_string(),
            ));
        }

        self.ctx.traced(self.verb, token, || {
            let entries = self.ctx.store.load()?;

            match self.plan(token, &entries) {
                Step::Act(paths) if paths.len() == 1 => paths.first().map_or(Ok(()), |p| act(p)),
                Step::Act(paths) => {
                    for path in &paths {
                        if let Err(err) = act(path) {
                            report_error(self.verb, &err);
                        }
                    }
                    Ok(())
                }
                Step::Report(err) => Err(err),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Options;
    use crate::testing::Fixture;

    #[test]
    fn test_full_path_acts_directly() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options::default());

        let step = Dispatch::new(&ctx, "build").plan(&a, &fx.store.load().unwrap());
        assert_eq!(step, Step::Act(vec![a]));
    }

    #[test]
    fn test_single_basename_acts_on_entry() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let bar = fx.package("b/bar");
        fx.register(&[&a, &bar]);
        let ctx = fx.context(Options::default());

        let step = Dispatch::new(&ctx, "build").plan("foo", &fx.store.load().unwrap());
        assert_eq!(step, Step::Act(vec![a]));
    }

    #[test]
    fn test_single_basename_with_unnormalized_entry() {
        let fx = Fixture::new();
        fx.package("a/foo");
        let spelled = fx.root().join("a").join(".").join("foo");
        let spelled = spelled.to_string_lossy().into_owned();
        fx.register(&[&spelled]);
        let ctx = fx.context(Options::default());

        let step = Dispatch::new(&ctx, "build").plan("foo", &fx.store.load().unwrap());
        assert_eq!(step, Step::Act(vec![spelled]));
    }

    #[test]
    fn test_ambiguous_without_force_reports_all() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options::default());

        let step = Dispatch::new(&ctx, "build").plan("foo", &fx.store.load().unwrap());
        assert_eq!(
            step,
            Step::Report(ToolError::AmbiguousMatch("foo".to_string(), vec![a, b]))
        );
    }

    #[test]
    fn test_ambiguous_with_force_acts_on_all() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options {
            force: true,
            ..Options::default()
        });

        let mut seen = Vec::new();
        Dispatch::new(&ctx, "build")
            .run("foo", |path| {
                seen.push(path.to_string());
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec![a, b]);
    }

    #[test]
    fn test_single_target_ignores_force() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options {
            force: true,
            ..Options::default()
        });

        let step = Dispatch::new(&ctx, "run")
            .single_target()
            .plan("foo", &fx.store.load().unwrap());
        assert!(matches!(step, Step::Report(ToolError::AmbiguousMatch(_, _))));
    }

    #[test]
    fn test_forced_failures_do_not_stop_the_batch() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        let b = fx.package("b/foo");
        fx.register(&[&a, &b]);
        let ctx = fx.context(Options {
            force: true,
            ..Options::default()
        });

        let mut calls = 0;
        let result = Dispatch::new(&ctx, "build").run("foo", |path| {
            calls += 1;
            Err(ToolError::ExternalActionFailed(format!("make in {path}"), Some(2)))
        });
        assert!(result.is_ok());
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_unknown_token_is_not_found() {
        let fx = Fixture::new();
        let a = fx.package("a/foo");
        fx.register(&[&a]);
        let ctx = fx.context(Options::default());

        let result = Dispatch::new(&ctx, "build").run("bar", |_| Ok(()));
        assert!(matches!(result, Err(ToolError::PackageNotFound(t)) if t == "bar"));
    }

    #[test]
    fn test_empty_token_is_invalid() {
        let fx = Fixture::new();
        let ctx = fx.context(Options::default());
        let result = Dispatch::new(&ctx, "build").run("   ", |_| Ok(()));
        assert!(matches!(result, Err(ToolError::InvalidOperation(_))));
    }

    #[test]
    fn test_unavailable_registry_aborts() {
        let fx = Fixture::new();
        let ctx = fx.context_with_store(
            cmtool_registry::RegistryStore::new(fx.root().join("missing").join("create.info")),
            Options::default(),
        );
        let result = Dispatch::new(&ctx, "build").run("foo", |_| Ok(()));
        assert!(matches!(result, Err(ToolError::RegistryUnavailable(_))));
    }
}
