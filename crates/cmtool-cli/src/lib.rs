pub mod commands;
pub mod handlers;
pub mod prompt;

use anyhow::{Context as _, Result};
use clap::Parser;

use cmtool_constants::LOG_FILE_NAME;
use cmtool_core::{Context, Options};
use cmtool_project::InstallLayout;
use cmtool_registry::RegistryStore;
use cmtool_runtime::ShellActions;

use crate::commands::{Cli, Commands};
use crate::handlers::{
    ArchiveHandler, AttachHandler, BuildHandler, CleanHandler, CreateHandler, DeleteHandler,
    DetachHandler, HelpHandler, ListHandler, ResetHandler, RunHandler,
};
use crate::prompt::TerminalPrompt;

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    cmtool_logger::init_logger(false);

    if cli.log {
        let home = dirs::home_dir().context("could not determine the home directory")?;
        let log_path = home.join(LOG_FILE_NAME);
        cmtool_logger::enable_file_log(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
    }

    let result = execute(&cli);
    cmtool_logger::disable_file_log();
    result
}

fn execute(cli: &Cli) -> Result<()> {
    if let Commands::Help { command } = &cli.command {
        return HelpHandler::handle_help(command.as_deref());
    }

    let layout = InstallLayout::discover()?;
    cmtool_logger::debug(
        &format!("Using install root {}", layout.root().display()),
        cli.debug,
    );

    let store = RegistryStore::new(layout.registry_path());
    let actions = ShellActions::new();
    let prompt = TerminalPrompt::detect();
    let ctx = Context::new(store, &actions, &prompt).with_options(Options {
        force: cli.command.force(),
        quiet: false,
        debug: cli.debug,
    });

    match &cli.command {
        Commands::Create { packages, kind } => {
            CreateHandler::handle_create(&ctx, &layout, packages, kind)
        }
        Commands::Build { packages, all, .. } => BuildHandler::handle_build(&ctx, packages, *all),
        Commands::Clean { packages, all, .. } => CleanHandler::handle_clean(&ctx, packages, *all),
        Commands::Delete { packages, all, .. } => {
            DeleteHandler::handle_delete(&ctx, packages, *all)
        }
        Commands::List {
            basename,
            path,
            json,
        } => ListHandler::handle_list(&ctx, *basename, *path, *json),
        Commands::Reset => ResetHandler::handle_reset(&ctx),
        Commands::Run {
            package,
            program,
            args,
        } => RunHandler::handle_run(&ctx, package, program, args),
        Commands::Attach {
            packages,
            read_file,
        } => AttachHandler::handle_attach(&ctx, packages, read_file.as_deref()),
        Commands::Detach { packages, all, .. } => {
            DetachHandler::handle_detach(&ctx, packages, *all)
        }
        Commands::Tar {
            packages,
            output,
            all,
            ..
        } => ArchiveHandler::handle_tar(&ctx, packages, output, *all),
        Commands::Untar { archives, output } => {
            ArchiveHandler::handle_untar(&ctx, archives, output)
        }
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}
