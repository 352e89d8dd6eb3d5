//! Error types.
//!
//! Class resolution never fails: unknown tokens are dropped or passed through
//! as policy. Errors only come from the HTML layer and from loading
//! configuration documents.

use thiserror::Error;

/// Error returned when an [`Element`](crate::Element) cannot be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The markup template failed to render.
    #[error("failed to render <{tag}>: {source}")]
    Template {
        tag: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Error returned when a configuration document cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_from_yaml() {
        let err: ConfigError = serde_yaml::from_str::<Vec<String>>("{ not: [a list")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid YAML"));
    }

    #[test]
    fn test_config_error_from_json() {
        let err: ConfigError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
