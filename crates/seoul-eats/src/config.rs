//! Startup configuration read from the process environment.

use std::env;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use seoul_eats_laas_model::{LaasConfig, LaasConfigBuilder};

/// Holds the LaaS API key. Required.
pub const API_KEY_VAR: &str = "LAAS_API_KEY";
/// Overrides the chat-completions endpoint URL.
pub const API_URL_VAR: &str = "LAAS_API_URL";
/// Overrides the `project` header.
pub const PROJECT_VAR: &str = "LAAS_PROJECT";
/// Overrides the prompt preset hash.
pub const HASH_VAR: &str = "LAAS_HASH";

/// Errors that prevent the program from starting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    Missing(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => {
                write!(f, "{name} environment variable is not set")
            }
        }
    }
}

impl Error for ConfigError {}

/// Loads the provider configuration from the environment.
#[inline]
pub fn from_env() -> Result<LaasConfig, ConfigError> {
    from_lookup(|name| env::var(name).ok())
}

/// Loads the provider configuration through `lookup`, which maps a
/// variable name to its value. Empty values count as unset.
pub fn from_lookup<F>(lookup: F) -> Result<LaasConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
    let mut builder = LaasConfigBuilder::with_api_key(api_key);
    if let Some(api_url) = get(API_URL_VAR) {
        builder = builder.with_api_url(api_url);
    }
    if let Some(project) = get(PROJECT_VAR) {
        builder = builder.with_project(project);
    }
    if let Some(hash) = get(HASH_VAR) {
        builder = builder.with_hash(hash);
    }

    let config = builder.build();
    debug!("loaded config: {config:?}");
    Ok(config)
}
