//! Load orchestration and the read-only accessor surface.

use settings_types::{Config, DatabaseParams, GeneralParams, HttpServerParams, LoadError, S3Params};

use crate::populate::populate;
use crate::source::EnvSource;

/// Owns the validated configuration and lends read-only views.
///
/// Constructed once at startup via [`Manager::load`]; there is no reload.
#[derive(Debug)]
pub struct Manager {
    config: Config,
}

impl Manager {
    /// Loads configuration from the process environment, layered over an
    /// optional `.env` file discovered near the working directory.
    ///
    /// Dotenv problems are advisory and only logged; population and
    /// validation failures abort the load, tagged with the stage that
    /// produced them.
    pub fn load() -> Result<Self, LoadError> {
        Self::from_source(&EnvSource::capture())
    }

    /// Runs populate then validate over an explicit source.
    ///
    /// This is the injection seam: tests and embedders hand in an
    /// [`EnvSource`] built from maps instead of the ambient environment.
    pub fn from_source(src: &EnvSource) -> Result<Self, LoadError> {
        let config = populate(src)?;
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the whole configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the general parameters.
    pub fn general(&self) -> &GeneralParams {
        &self.config.general
    }

    /// Returns the HTTP server parameters.
    pub fn http_server(&self) -> &HttpServerParams {
        &self.config.http_server
    }

    /// Returns the database parameters.
    pub fn database(&self) -> &DatabaseParams {
        &self.config.database
    }

    /// Returns the object storage parameters.
    pub fn s3(&self) -> &S3Params {
        &self.config.s3
    }

    /// Returns the HTTP listen address as `<address>:<port>`.
    pub fn http_bind_addr(&self) -> String {
        self.config.http_server.bind_addr()
    }

    /// Returns the Postgres connection string.
    pub fn database_dsn(&self) -> String {
        self.config.database.dsn()
    }
}
