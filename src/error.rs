use std::{fmt, io};

#[derive(Debug)]
pub enum AppError {
    EnvError(std::env::VarError),
    InvalidConfig(String),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EnvError(e) => write!(f, "environment error: {e}"),
            AppError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::EnvError(e) => Some(e),
            AppError::InvalidConfig(_) => None,
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::EnvError(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::VarError;

    #[test]
    fn test_display_names_the_failure() {
        let err = AppError::InvalidConfig("RUNTIME must be lambda or local".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: RUNTIME must be lambda or local"
        );
    }

    #[test]
    fn test_from_var_error() {
        let err: AppError = VarError::NotPresent.into();
        assert!(matches!(err, AppError::EnvError(VarError::NotPresent)));
    }
}
