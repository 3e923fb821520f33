use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FixtureError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FixtureError::IoError(e) => format!("Could not write program output: {}", e),
            FixtureError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            FixtureError::ConfigError { message } => format!("Configuration problem: {}", message),
            FixtureError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixtureError::IoError(_) => "Check that stdout is writable (closed pipe or full disk?)",
            FixtureError::TomlError(_) => "Fix the syntax of the configuration file",
            FixtureError::ConfigError { .. } => {
                "Review the configuration file and the environment it references"
            }
            FixtureError::InvalidConfigValueError { .. } => {
                "Correct the value in the configuration file or on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FixtureError = io.into();
        assert!(matches!(err, FixtureError::IoError(_)));
        assert!(err.user_friendly_message().contains("pipe closed"));
    }

    #[test]
    fn test_invalid_value_message() {
        let err = FixtureError::InvalidConfigValueError {
            field: "processor.name".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value '' for 'processor.name': Value cannot be empty or whitespace-only"
        );
        assert!(err.user_friendly_message().starts_with("Setting 'processor.name'"));
    }

    #[test]
    fn test_config_error_hint_is_generic() {
        let err = FixtureError::ConfigError {
            message: "invalid placeholder pattern".to_string(),
        };
        assert!(!err.recovery_suggestion().contains("Export"));
        assert_eq!(
            err.user_friendly_message(),
            "Configuration problem: invalid placeholder pattern"
        );
    }

    #[test]
    fn test_every_variant_has_a_hint() {
        let errors = [
            FixtureError::IoError(std::io::Error::other("boom")),
            FixtureError::TomlError(toml::from_str::<toml::Table>("a =").unwrap_err()),
            FixtureError::ConfigError {
                message: "x".to_string(),
            },
            FixtureError::InvalidConfigValueError {
                field: "f".to_string(),
                value: "v".to_string(),
                reason: "r".to_string(),
            },
        ];
        for err in &errors {
            assert!(!err.user_friendly_message().is_empty());
            assert!(!err.recovery_suggestion().is_empty());
        }
    }
}
