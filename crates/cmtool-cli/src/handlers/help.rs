use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use cmtool_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, LOG_FILE_NAME, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_custom_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        let name = COMMANDS
            .iter()
            .find(|(name, _, aliases)| *name == command || aliases.contains(&command))
            .map_or(command, |(name, _, _)| *name);

        if let Some(subcommand) = cmd.find_subcommand_mut(name) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_custom_help();
        }

        println!();
        Ok(())
    }

    fn alias_suffix(aliases: &[&str]) -> String {
        if aliases.is_empty() {
            String::new()
        } else {
            format!(" [{}]", aliases.join(", "))
        }
    }

    fn show_custom_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "<OPTIONS>".bright_black().bold(),
            "[PACKAGES]".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let max_cmd_width = COMMANDS
            .iter()
            .map(|(cmd, _, aliases)| cmd.len() + Self::alias_suffix(aliases).len())
            .max()
            .unwrap_or(0);

        for (cmd, desc, aliases) in COMMANDS {
            let alias_str = Self::alias_suffix(aliases);
            let plain_cmd = format!("{cmd}{alias_str}");
            let colored_cmd = format!(
                "{}{}",
                cmd.bright_cyan().bold(),
                alias_str.bright_black().bold()
            );
            println!(
                "  {:width$}  # {}",
                colored_cmd,
                desc.bright_black().bold(),
                width = max_cmd_width + (colored_cmd.len() - plain_cmd.len())
            );
        }
        println!();

        println!("{}", "Options:".bright_magenta().bold());
        let options = [
            ("-f, --force", "Apply to every project sharing a name".to_string()),
            ("-a, --all", "Apply to every registered project".to_string()),
            ("-l, --log", format!("Also write output to ~/{LOG_FILE_NAME}")),
            ("-V, --version", "Print version".to_string()),
        ];
        let max_opt_width = options.iter().map(|(opt, _)| opt.len()).max().unwrap_or(0);
        for (opt, desc) in &options {
            let colored_opt = opt.bright_cyan().bold().to_string();
            println!(
                "  {:width$}  # {}",
                colored_opt,
                desc.bright_black().bold(),
                width = max_opt_width + (colored_opt.len() - opt.len())
            );
        }
        println!();

        Self::show_examples();
    }

    fn show_examples() {
        println!("{}", "Examples:".bright_magenta().bold());

        let max_example_width = EXAMPLES.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);

        for (cmd, desc) in EXAMPLES {
            let mut parts = cmd.split_whitespace();
            let mut formatted_parts = Vec::new();
            if let Some(bin) = parts.next() {
                formatted_parts.push(bin.bright_cyan().bold().to_string());
            }
            for part in parts {
                if part.starts_with('-') {
                    formatted_parts.push(part.bright_black().bold().to_string());
                } else {
                    formatted_parts.push(part.bright_white().to_string());
                }
            }
            let formatted_cmd = formatted_parts.join(" ");
            let visual_width_diff = formatted_cmd.len() - cmd.len();

            println!(
                "  {:width$}  # {}",
                formatted_cmd,
                desc.bright_black().bold(),
                width = max_example_width + visual_width_diff
            );
        }

        println!();
        println!(
            "{}",
            "For more information about a specific command, use:".bright_magenta()
        );
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "help".bright_white(),
            "<command>".bright_black().bold()
        );
        println!();
    }
}
