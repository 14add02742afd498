use cmtool_error::Result;

use crate::context::Context;

/// Snapshot for an `--all` operation: stale entries are pruned first.
pub(crate) fn registered_packages(ctx: &Context<'_>) -> Result<Vec<String>> {
    let dropped = ctx.store.prune()?;
    for path in &dropped {
        ctx.debug(&format!("Dropped missing package {path}"));
    }
    ctx.store.load()
}

/// Show the batch and ask once. An empty batch is never confirmed.
pub(crate) fn confirm_batch(ctx: &Context<'_>, paths: &[String], question: &str) -> bool {
    println!("There are {} packages: ", paths.len());
    for path in paths {
        println!("    {path}");
    }

    if paths.is_empty() {
        return false;
    }
    ctx.prompt.confirm(question)
}
