//! Configuration sections and their derived connection strings.

use serde::Serialize;

/// Mask substituted for secret fields by [`Config::redacted`].
pub const REDACTED: &str = "<redacted>";

/// Fully populated service configuration.
///
/// Constructed exactly once at startup by `settings-loader` and treated as
/// read-only afterwards. Secrets are carried in plain `String`s; use
/// [`Config::redacted`] before logging or serializing a whole config.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub general: GeneralParams,
    pub http_server: HttpServerParams,
    pub database: DatabaseParams,
    pub s3: S3Params,
}

/// General service parameters (environment name, token secrets and TTLs).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralParams {
    /// Deployment environment (`APP_ENV`): `dev`, `prod`, or `test`.
    pub env: String,
    /// Token signing secret (`API_GENERAL_PARAMS_SECRET_KEY`).
    pub secret_key: String,
    /// Access token validity in minutes (`API_GENERAL_PARAMS_ACCESS_TOKEN_TTL`).
    pub access_token_ttl: u32,
    /// Refresh token validity in days (`API_GENERAL_PARAMS_REFRESH_TOKEN_TTL`).
    pub refresh_token_ttl: u32,
}

/// HTTP listener parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HttpServerParams {
    /// Bind address (`API_HTTP_SERVER_PARAMS_HTTP_SERVER_ADDRESS`).
    pub address: String,
    /// Bind port (`API_HTTP_SERVER_PARAMS_HTTP_SERVER_PORT`).
    pub port: u16,
}

/// Postgres connection parameters (`DB_*`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseParams {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    /// Connect timeout in seconds.
    pub timeout: u32,
}

/// Object storage parameters (`S3_*`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct S3Params {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
    pub use_ssl: bool,
}

impl HttpServerParams {
    /// Returns the listen address in `<address>:<port>` form.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl DatabaseParams {
    /// Compiles the Postgres connection string.
    ///
    /// TLS is disabled by convention; the connect timeout rides along as a
    /// query parameter.
    pub fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?connect_timeout={}&sslmode=disable",
            self.username, self.password, self.host, self.port, self.name, self.timeout,
        )
    }
}

impl Config {
    /// Returns a copy with every secret field masked.
    ///
    /// Safe to log or serialize: the signing secret, the database password,
    /// and the S3 secret key are replaced by [`REDACTED`]. A DSN derived
    /// from the copy is equally safe.
    pub fn redacted(&self) -> Config {
        let mut copy = self.clone();
        copy.general.secret_key = REDACTED.into();
        copy.database.password = REDACTED.into();
        copy.s3.secret_access_key = REDACTED.into();
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            general: GeneralParams {
                env: "dev".into(),
                secret_key: "sk".into(),
                access_token_ttl: 15,
                refresh_token_ttl: 7,
            },
            http_server: HttpServerParams {
                address: "127.0.0.1".into(),
                port: 9000,
            },
            database: DatabaseParams {
                host: "h".into(),
                port: 5432,
                username: "u".into(),
                password: "p".into(),
                name: "n".into(),
                timeout: 10,
            },
            s3: S3Params {
                endpoint: "http://minio:9000".into(),
                access_key_id: "ak".into(),
                secret_access_key: "sek".into(),
                bucket_name: "uploads".into(),
                use_ssl: false,
            },
        }
    }

    #[test]
    fn test_bind_addr_format() {
        assert_eq!(sample().http_server.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_dsn_format() {
        assert_eq!(
            sample().database.dsn(),
            "postgres://u:p@h:5432/n?connect_timeout=10&sslmode=disable"
        );
    }

    #[test]
    fn test_redacted_masks_secrets_only() {
        let redacted = sample().redacted();
        assert_eq!(redacted.general.secret_key, REDACTED);
        assert_eq!(redacted.database.password, REDACTED);
        assert_eq!(redacted.s3.secret_access_key, REDACTED);
        // Everything else survives untouched
        assert_eq!(redacted.general.env, "dev");
        assert_eq!(redacted.database.username, "u");
        assert_eq!(redacted.s3.access_key_id, "ak");
    }

    #[test]
    fn test_redacted_dsn_hides_password() {
        let dsn = sample().redacted().database.dsn();
        assert!(!dsn.contains(":p@"));
        assert!(dsn.contains(REDACTED));
    }
}
