use bru_lib::BruError;

/// Exit codes for the bru2postman CLI.
/// Argument errors are reported by clap itself with code 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General/unspecified error
    GeneralError = 1,
    /// Invalid conversion options
    ConfigError = 3,
    /// Input directory missing or unreadable, output not writable
    FileError = 4,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&BruError> for ExitCode {
    fn from(error: &BruError) -> Self {
        match error {
            BruError::DirectoryNotFound(_)
            | BruError::NotADirectory(_)
            | BruError::FileRead { .. }
            | BruError::FileWrite { .. } => ExitCode::FileError,
            BruError::Json(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        if let Some(bru_error) = error.downcast_ref::<BruError>() {
            return ExitCode::from(bru_error);
        }

        let error_display = error.to_string();
        if error_display.contains("Invalid replacement") {
            ExitCode::ConfigError
        } else if error_display.contains("No such file") {
            ExitCode::FileError
        } else {
            ExitCode::GeneralError
        }
    }
}
