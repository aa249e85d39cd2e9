//! Semantic validation applied to a fully populated [`Config`].

use crate::error::ValidationError;
use crate::schema::Config;

/// Deployment environments the service recognizes.
pub const ALLOWED_ENVIRONMENTS: [&str; 3] = ["dev", "prod", "test"];

/// The only database port accepted by validation.
///
/// Any other value, including one set explicitly, is rejected. Kept for
/// compatibility with the deployed fleet; relaxing it means touching this
/// constant and [`ValidationError::WrongDatabasePort`].
pub const REQUIRED_DATABASE_PORT: u16 = 5432;

fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(())
}

impl Config {
    /// Checks every cross-field invariant, returning the first violation.
    ///
    /// Pure and deterministic. Sections are checked in a fixed order:
    /// general, HTTP server, database, object storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // General parameters
        require(&self.general.secret_key, "secret_key")?;
        if self.general.access_token_ttl == 0 {
            return Err(ValidationError::NonPositiveTtl {
                field: "access_token_ttl",
            });
        }
        if self.general.refresh_token_ttl == 0 {
            return Err(ValidationError::NonPositiveTtl {
                field: "refresh_token_ttl",
            });
        }
        match self.general.env.as_str() {
            env if ALLOWED_ENVIRONMENTS.contains(&env) => {}
            "" => return Err(ValidationError::Required { field: "env" }),
            other => {
                return Err(ValidationError::InvalidEnvironment {
                    value: other.to_string(),
                });
            }
        }

        // HTTP server parameters
        require(&self.http_server.address, "http server address")?;

        // Database parameters
        require(&self.database.host, "database host")?;
        require(&self.database.username, "database username")?;
        require(&self.database.password, "database password")?;
        if self.database.port != REQUIRED_DATABASE_PORT {
            return Err(ValidationError::WrongDatabasePort {
                got: self.database.port,
            });
        }
        require(&self.database.name, "database name")?;

        // S3 parameters
        require(&self.s3.endpoint, "S3 endpoint")?;
        require(&self.s3.access_key_id, "S3 access_key_id")?;
        require(&self.s3.secret_access_key, "S3 secret_access_key")?;
        require(&self.s3.bucket_name, "S3 bucket_name")?;

        Ok(())
    }
}
