use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, message: &str) {
        // Ticks land well under a second apart, so keep milliseconds.
        let timestamp = Local::now().format("%H:%M:%S%.3f");
        match &self.prefix {
            Some(prefix) => println!("[{timestamp}] [{prefix}] {message}"),
            None => println!("[{timestamp}] {message}"),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Hosts that never call [`init_logger`] get a silent library.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
