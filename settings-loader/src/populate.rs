//! Environment-to-schema population.
//!
//! Straight-line per-field mapping: each field reads its variable from the
//! source, falling back to its default or failing when a required variable
//! is absent. The first missing or malformed field aborts the whole
//! population; no partial `Config` ever reaches the caller.

use std::fmt::Display;
use std::str::FromStr;

use settings_types::{
    Config, DatabaseParams, GeneralParams, HttpServerParams, PopulateError, S3Params,
};

use crate::source::EnvSource;

fn required(src: &EnvSource, var: &'static str) -> Result<String, PopulateError> {
    src.get(var)
        .map(str::to_owned)
        .ok_or(PopulateError::Missing { var })
}

fn string_or(src: &EnvSource, var: &str, default: &str) -> String {
    src.get(var).unwrap_or(default).to_owned()
}

fn parsed_or<T>(src: &EnvSource, var: &'static str, default: T) -> Result<T, PopulateError>
where
    T: FromStr,
    T::Err: Display,
{
    match src.get(var) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|err: T::Err| PopulateError::Malformed {
            var,
            value: raw.to_owned(),
            reason: err.to_string(),
        }),
    }
}

/// Boolean coercion accepts `true`/`false` in any ASCII case; everything
/// else (including `1`/`0`, `yes`/`no`) is malformed.
fn bool_or(src: &EnvSource, var: &'static str, default: bool) -> Result<bool, PopulateError> {
    match src.get(var) {
        None => Ok(default),
        Some(raw) if raw.eq_ignore_ascii_case("true") => Ok(true),
        Some(raw) if raw.eq_ignore_ascii_case("false") => Ok(false),
        Some(raw) => Err(PopulateError::Malformed {
            var,
            value: raw.to_owned(),
            reason: "expected true or false".into(),
        }),
    }
}

/// Builds the whole [`Config`] aggregate from a source.
pub fn populate(src: &EnvSource) -> Result<Config, PopulateError> {
    Ok(Config {
        general: general_params(src)?,
        http_server: http_server_params(src)?,
        database: database_params(src)?,
        s3: s3_params(src)?,
    })
}

fn general_params(src: &EnvSource) -> Result<GeneralParams, PopulateError> {
    Ok(GeneralParams {
        env: string_or(src, "APP_ENV", "dev"),
        secret_key: required(src, "API_GENERAL_PARAMS_SECRET_KEY")?,
        access_token_ttl: parsed_or(src, "API_GENERAL_PARAMS_ACCESS_TOKEN_TTL", 15)?,
        refresh_token_ttl: parsed_or(src, "API_GENERAL_PARAMS_REFRESH_TOKEN_TTL", 7)?,
    })
}

fn http_server_params(src: &EnvSource) -> Result<HttpServerParams, PopulateError> {
    Ok(HttpServerParams {
        address: string_or(src, "API_HTTP_SERVER_PARAMS_HTTP_SERVER_ADDRESS", "0.0.0.0"),
        port: parsed_or(src, "API_HTTP_SERVER_PARAMS_HTTP_SERVER_PORT", 8080)?,
    })
}

fn database_params(src: &EnvSource) -> Result<DatabaseParams, PopulateError> {
    Ok(DatabaseParams {
        host: required(src, "DB_HOST")?,
        port: parsed_or(src, "DB_PORT", 5432)?,
        username: required(src, "DB_USERNAME")?,
        password: required(src, "DB_PASSWORD")?,
        name: required(src, "DB_NAME")?,
        timeout: parsed_or(src, "DB_TIMEOUT", 15)?,
    })
}

fn s3_params(src: &EnvSource) -> Result<S3Params, PopulateError> {
    Ok(S3Params {
        endpoint: required(src, "S3_ENDPOINT")?,
        access_key_id: required(src, "S3_ACCESS_KEY_ID")?,
        secret_access_key: required(src, "S3_SECRET_ACCESS_KEY")?,
        bucket_name: required(src, "S3_BUCKET_NAME")?,
        use_ssl: bool_or(src, "S3_USE_SSL", false)?,
    })
}
