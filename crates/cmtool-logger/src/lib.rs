use crossterm::{ExecutableCommand, cursor, terminal};
use owo_colors::OwoColorize;
use std::fs::{File, OpenOptions};
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use std::time::Instant;

pub struct Logger {
    start_time: Instant,
    quiet: bool,
    log_file: Mutex<Option<File>>,
}

#[derive(Clone, Copy)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Shell,
}

impl LogLevel {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
            Self::Shell => "SHELL",
        }
    }
}

impl Logger {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            log_file: Mutex::new(None),
        }
    }

    /// Mirrors every message, uncoloured, into `path` (appending).
    pub fn attach_file(&self, path: &Path) -> io::Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        if let Ok(mut slot) = self.log_file.lock() {
            *slot = Some(file);
        }
        Ok(())
    }

    pub fn detach_file(&self) {
        if let Ok(mut slot) = self.log_file.lock() {
            *slot = None;
        }
    }

    fn write_file(&self, level: LogLevel, message: &str) {
        if let Ok(mut slot) = self.log_file.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = writeln!(file, "[{}] {message}", level.tag());
            }
        }
    }

    fn clear_current_line(&self) {
        if self.quiet || !io::stdout().is_terminal() {
            return;
        }

        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::MoveToColumn(0));
        let _ = stdout.execute(terminal::Clear(terminal::ClearType::CurrentLine));
        let _ = stdout.flush();
    }

    fn finish_line(&self, message: &str) {
        if self.quiet {
            return;
        }

        self.clear_current_line();
        println!("{message}");
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.write_file(level, message);

        if self.quiet && !matches!(level, LogLevel::Error) {
            return;
        }

        self.clear_current_line();

        let (prefix, colored_message) = match level {
            LogLevel::Info => (
                "cmake_tool".bright_cyan().bold().to_string(),
                message.white().to_string(),
            ),
            LogLevel::Success => (
                "✓".bright_green().bold().to_string(),
                message.bright_green().to_string(),
            ),
            LogLevel::Warning => (
                "⚠".bright_yellow().bold().to_string(),
                message.bright_yellow().to_string(),
            ),
            LogLevel::Error => (
                "✗".bright_red().bold().to_string(),
                message.bright_red().to_string(),
            ),
            LogLevel::Debug => (
                "•".bright_black().bold().to_string(),
                message.bright_black().to_string(),
            ),
            LogLevel::Shell => (
                "$".bright_blue().bold().to_string(),
                message.bright_black().to_string(),
            ),
        };

        if matches!(level, LogLevel::Error | LogLevel::Warning) {
            eprintln!("{prefix} {colored_message}");
        } else {
            println!("{prefix} {colored_message}");
        }
    }

    /// Closing summary line with the time since start-up.
    pub fn finish(&self, message: &str) {
        self.write_file(LogLevel::Success, message);

        let elapsed = self.start_time.elapsed();
        let time_str = if elapsed.as_millis() < 1000 {
            format!("{}ms", elapsed.as_millis())
        } else {
            format!("{:.2}s", elapsed.as_secs_f64())
        };

        let final_message = format!(
            "{} {} {}",
            "✓".bright_green().bold(),
            message.bright_green(),
            format!("[{time_str}]").bright_black()
        );

        self.finish_line(&final_message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    /// Debug lines always reach the log file; the terminal only sees them
    /// when `debug_enabled` is set.
    pub fn debug(&self, message: &str, debug_enabled: bool) {
        if debug_enabled {
            self.log(LogLevel::Debug, message);
        } else {
            self.write_file(LogLevel::Debug, message);
        }
    }

    pub fn shell(&self, command: &str) {
        self.log(LogLevel::Shell, command);
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn enable_file_log(path: &Path) -> io::Result<()> {
    get_logger().attach_file(path)
}

pub fn disable_file_log() {
    get_logger().detach_file();
}

pub fn info(message: &str) {
    get_logger().info(message);
}

pub fn success(message: &str) {
    get_logger().success(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    get_logger().debug(message, debug_enabled);
}

pub fn shell(command: &str) {
    get_logger().shell(command);
}

pub fn finish(message: &str) {
    get_logger().finish(message);
}
