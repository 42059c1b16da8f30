use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    fn format_line(&self, timestamp: &str, file: &str, line: u32, message: &str) -> String {
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    /// Rendered line, or `None` when a verbose-only message is filtered out.
    fn render(&self, verbose_only: bool, file: &str, line: u32, message: &str) -> Option<String> {
        if verbose_only && !self.verbose {
            return None;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Some(self.format_line(&timestamp, file, line, message))
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

// Messages sent before `init_logger` are dropped so that library users and
// tests stay quiet unless a host opts in.
fn emit(logger: Option<&Logger>, verbose_only: bool, file: &str, line: u32, message: &str) -> Option<String> {
    let text = logger?.render(verbose_only, file, line, message)?;
    println!("{}", text);
    Some(text)
}

pub fn log(file: &str, line: u32, message: &str) {
    emit(LOGGER.get(), false, file, line, message);
}

pub fn trace(file: &str, line: u32, message: &str) {
    emit(LOGGER.get(), true, file, line, message);
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::logger::trace(file!(), line!(), &format!($($arg)*))
    };
}
