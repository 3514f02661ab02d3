use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    debug: bool,
}

impl Logger {
    pub fn init(debug: bool) {
        let _ = LOGGER.get_or_init(|| Logger { debug });
    }

    /// Falls back to a silent logger when `init` was never called, so library
    /// callers and unit tests don't have to set one up.
    fn get() -> &'static Logger {
        LOGGER.get_or_init(|| Logger { debug: false })
    }

    pub fn debug(message: &str) {
        if Self::get().debug {
            eprintln!("{message}");
        }
    }

    pub fn debug_fmt(args: std::fmt::Arguments) {
        if Self::get().debug {
            eprintln!("{args}");
        }
    }

    pub fn warn(message: &str) {
        eprintln!("Warning: {message}");
    }
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::core::logger::Logger::debug_fmt(format_args!($($arg)*))
    };
}
