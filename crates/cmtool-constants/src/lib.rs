pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Create, build and keep track of CMake packages";
pub const BIN_NAME: &str = "cmake_tool";
pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    ("create", "Create cmake projects from the installed templates", &["new"]),
    ("build", "Build and install cmake projects", &["b"]),
    (
        "clean",
        "Clean cmake projects (install files and build cache only)",
        &[],
    ),
    (
        "delete",
        "Delete cmake projects including 'src/'. Be careful!",
        &["rm"],
    ),
    ("list", "List registered cmake projects", &["ls"]),
    ("reset", "Drop registered projects that no longer exist", &[]),
    ("run", "Run a program installed by a cmake project", &["r"]),
    ("attach", "Attach existing cmake projects to cmake_tool", &[]),
    ("detach", "Detach cmake projects from cmake_tool", &[]),
    ("tar", "Pack project outputs into a compressed archive", &[]),
    ("untar", "Unpack an archive and attach its projects", &[]),
    (
        "help",
        "Shows help information for cmake_tool or a specific command",
        &[],
    ),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("cmake_tool create demo", "Create a C++ project"),
    ("cmake_tool create demo --type C", "Create a C project"),
    ("cmake_tool build demo", "Build a project by name"),
    ("cmake_tool build --all", "Build every registered project"),
    ("cmake_tool clean demo --force", "Clean all projects named demo"),
    ("cmake_tool list --path", "List project paths"),
    ("cmake_tool run demo demo --verbose", "Run an installed program"),
    ("cmake_tool tar demo -o out/", "Archive a project"),
];

pub const ENV_TOOL_DIR: &str = "CMAKE_TOOL_DIR";
pub const ENV_TOOL_PATH: &str = "CMAKE_TOOL_PATH";
pub const SHARE_DIR: &str = "share";
pub const TEMPLATE_DIR: &str = "share/cmake_tool";
pub const REGISTRY_FILE_NAME: &str = "create.info";
pub const REGISTRY_BACKUP_SUFFIX: &str = ".bak";
pub const LOG_FILE_NAME: &str = "cmake_tool.log";

pub const CPP_CMAKE_TEMPLATE: &str = "c++_application.cmake.in";
pub const CPP_MAIN_TEMPLATE: &str = "c++_main.cpp.in";
pub const C_CMAKE_TEMPLATE: &str = "c_application.cmake.in";
pub const C_MAIN_TEMPLATE: &str = "c_main.c.in";
pub const PROJECT_NAME_PLACEHOLDER: &str = "%%PROJECT_NAME%%";

pub const BUILD_DIR: &str = "build";
pub const BIN_DIR: &str = "bin";
pub const INSTALL_MANIFEST: &str = "install_manifest.txt";

pub const DEFAULT_ARCHIVE_NAME: &str = "cmake_tool_packages.tar.gz";
pub const ARCHIVE_EXTENSION: &str = ".tar.gz";
pub const ARCHIVE_MARKER: &str = ".tar.";
pub const ARCHIVE_EXCLUDES: &[&str] = &["*/build", "*/include", "*/src", "*/CMakeLists.txt"];
