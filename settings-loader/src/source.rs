//! Immutable layered key/value source for schema population.

use std::collections::HashMap;
use std::env;

use crate::dotenv;

/// Snapshot of the variables the schema is populated from.
///
/// Layering is resolved at construction time: a key present in both the
/// process environment and the `.env` file resolves to the process value,
/// matching the convention that a checked-in `.env` never overrides what
/// the operator exported. The process environment itself is never written.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshots the process environment layered over a `.env` file
    /// discovered from the working directory.
    ///
    /// Every dotenv problem is advisory: no working directory, no file
    /// within reach, or an unparsable file all log and fall back to the
    /// plain process snapshot.
    pub fn capture() -> Self {
        let file = match env::current_dir() {
            Ok(cwd) => match dotenv::discover(&cwd) {
                Some(path) => match dotenv::load(&path) {
                    Ok(vars) => {
                        tracing::info!(
                            path = %path.display(),
                            count = vars.len(),
                            "loaded environment overrides from .env"
                        );
                        vars
                    }
                    Err(err) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %err,
                            "could not parse .env file, continuing without it"
                        );
                        HashMap::new()
                    }
                },
                None => {
                    tracing::debug!("no .env file found near the working directory");
                    HashMap::new()
                }
            },
            Err(err) => {
                tracing::warn!(error = %err, "could not determine working directory, skipping .env discovery");
                HashMap::new()
            }
        };

        Self::layered(file, env::vars().collect())
    }

    /// Builds a source from explicit file and process layers; the process
    /// layer wins on duplicate keys.
    pub fn layered(file: HashMap<String, String>, process: HashMap<String, String>) -> Self {
        let mut vars = file;
        vars.extend(process);
        Self { vars }
    }

    /// Builds a source from a single flat map.
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Looks up a variable by exact name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}
