use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cmake_tool")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Create, build and keep track of CMake packages", long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Also write log output to ~/cmake_tool.log
    #[arg(short = 'l', long = "log", global = true)]
    pub log: bool,
    /// Enable debug mode for verbose output
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Creates cmake projects from the installed templates
    #[command(alias = "new")]
    Create {
        /// Directories of the new projects
        #[arg(required = true)]
        packages: Vec<String>,
        /// Project language, CPP or C
        #[arg(short = 't', long = "type", default_value = "CPP")]
        kind: String,
    },
    /// Builds and installs cmake projects
    #[command(alias = "b")]
    Build {
        /// Project names or paths
        #[arg(required_unless_present = "all")]
        packages: Vec<String>,
        /// Build every project matching a name
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Build every registered project
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Cleans install files and the build cache of cmake projects
    Clean {
        /// Project names or paths
        #[arg(required_unless_present = "all")]
        packages: Vec<String>,
        /// Clean every project matching a name
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Clean every registered project
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Deletes cmake projects including their sources
    #[command(alias = "rm")]
    Delete {
        /// Project names or paths
        #[arg(required_unless_present = "all")]
        packages: Vec<String>,
        /// Delete every project matching a name
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Delete every registered project
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Lists registered cmake projects
    #[command(alias = "ls")]
    List {
        /// Print project names only
        #[arg(short = 'b', long = "basename", conflicts_with_all = ["path", "json"])]
        basename: bool,
        /// Print project paths only
        #[arg(short = 'p', long = "path", conflicts_with = "json")]
        path: bool,
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
    /// Drops registered projects whose directory no longer exists
    Reset,
    /// Runs a program installed by a cmake project
    #[command(alias = "r")]
    Run {
        /// Project name or path
        package: String,
        /// Program in the project's bin directory
        program: String,
        /// Arguments passed to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Attaches existing cmake projects to cmake_tool
    Attach {
        /// Project directories
        #[arg(required_unless_present = "read_file")]
        packages: Vec<String>,
        /// Read project directories from a file, one per line
        #[arg(short = 'r', long = "read-file", alias = "read_file")]
        read_file: Option<String>,
    },
    /// Detaches cmake projects from cmake_tool
    Detach {
        /// Project names or paths
        #[arg(required_unless_present = "all")]
        packages: Vec<String>,
        /// Detach every project matching a name
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Detach every registered project
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Packs cmake projects into a compressed archive
    Tar {
        /// Project names or paths
        #[arg(required_unless_present = "all")]
        packages: Vec<String>,
        /// Archive path (containing ".tar.") or output directory
        #[arg(short = 'o', long = "output", default_value = "./")]
        output: String,
        /// Archive every project matching a name
        #[arg(short = 'f', long = "force")]
        force: bool,
        /// Archive every registered project
        #[arg(short = 'a', long = "all")]
        all: bool,
    },
    /// Unpacks archives and attaches the projects inside
    Untar {
        /// Archives to unpack
        #[arg(required = true)]
        archives: Vec<String>,
        /// Directory to unpack into
        #[arg(short = 'o', long = "output", default_value = ".")]
        output: String,
    },
    /// Shows help information for cmake_tool or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}

impl Commands {
    #[must_use]
    pub const fn force(&self) -> bool {
        match self {
            Self::Build { force, .. }
            | Self::Clean { force, .. }
            | Self::Delete { force, .. }
            | Self::Detach { force, .. }
            | Self::Tar { force, .. } => *force,
            _ => false,
        }
    }
}
