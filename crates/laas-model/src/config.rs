use std::fmt::Debug;

/// The preset chat-completions endpoint.
pub const DEFAULT_API_URL: &str =
    "https://api-laas.wanted.co.kr/api/preset/v2/chat/completions";

/// The project the SeoulEats prompt is registered under.
pub const DEFAULT_PROJECT: &str = "KNTO-PROMPTON-276";

/// The hash of the SeoulEats prompt preset.
pub const DEFAULT_HASH: &str =
    "c45d97d9d3e8c5027af31035f44b717e546bd1738e77478ac89f1f1e6decf9fb";

/// Builder for [`LaasConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LaasConfigBuilder {
    api_key: String,
    project: Option<String>,
    hash: Option<String>,
    api_url: Option<String>,
}

impl LaasConfigBuilder {
    /// Creates a builder with the given API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            project: None,
            hash: None,
            api_url: None,
        }
    }

    /// Sets the project sent in the `project` header.
    #[inline]
    pub fn with_project<S: Into<String>>(mut self, project: S) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Sets the prompt preset hash sent in the request body.
    #[inline]
    pub fn with_hash<S: Into<String>>(mut self, hash: S) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Sets a custom endpoint URL.
    #[inline]
    pub fn with_api_url<S: Into<String>>(mut self, api_url: S) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> LaasConfig {
        LaasConfig {
            api_key: self.api_key,
            project: self
                .project
                .unwrap_or_else(|| DEFAULT_PROJECT.to_owned()),
            hash: self.hash.unwrap_or_else(|| DEFAULT_HASH.to_owned()),
            api_url: self
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        }
    }
}

impl Debug for LaasConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaasConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("project", &self.project)
            .field("hash", &self.hash)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Configuration for the LaaS provider.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LaasConfig {
    pub(crate) api_key: String,
    pub(crate) project: String,
    pub(crate) hash: String,
    pub(crate) api_url: String,
}

impl LaasConfig {
    /// Returns the project name.
    #[inline]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the prompt preset hash.
    #[inline]
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Returns the endpoint URL.
    #[inline]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Debug for LaasConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LaasConfig")
            .field("api_key", &"<redacted>")
            .field("project", &self.project)
            .field("hash", &self.hash)
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LaasConfigBuilder::with_api_key("secret").build();
        assert_eq!(config.project(), DEFAULT_PROJECT);
        assert_eq!(config.hash(), DEFAULT_HASH);
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let builder = LaasConfigBuilder::with_api_key("secret")
            .with_project("demo");
        assert!(!format!("{builder:?}").contains("secret"));

        let config = builder.build();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("demo"));
    }
}
