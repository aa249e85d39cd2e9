//! Error types for configuration loading.

/// Population-stage errors (environment → schema mapping failures).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PopulateError {
    #[error("missing required environment variable: {var}")]
    Missing { var: &'static str },

    #[error("invalid value {value:?} for {var}: {reason}")]
    Malformed {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Validation-stage errors (semantic invariant violations).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("env is invalid: {value:?}. Allowed values: dev, prod, test")]
    InvalidEnvironment { value: String },

    #[error("{field} is required and must be greater than 0")]
    NonPositiveTtl { field: &'static str },

    #[error("database port must be 5432 (got {got})")]
    WrongDatabasePort { got: u16 },
}

/// Top-level load errors (for the single load entry point).
///
/// Tags every fatal error with the stage that produced it. Dotenv discovery
/// problems never reach this type - they are advisory and only logged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to read environment variables: {0}")]
    Populate(#[from] PopulateError),

    #[error("config validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = PopulateError::Missing { var: "DB_HOST" };
        assert_eq!(
            err.to_string(),
            "missing required environment variable: DB_HOST"
        );

        let err = ValidationError::WrongDatabasePort { got: 5433 };
        assert_eq!(err.to_string(), "database port must be 5432 (got 5433)");
    }

    #[test]
    fn test_load_error_tags_the_stage() {
        let err = LoadError::from(PopulateError::Missing { var: "DB_NAME" });
        assert!(err.to_string().starts_with("failed to read environment"));

        let err = LoadError::from(ValidationError::Required { field: "secret_key" });
        assert!(err.to_string().starts_with("config validation failed"));
    }
}
