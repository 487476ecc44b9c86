use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredscrubError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CredscrubError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse config as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid replacement token {0:?}: must be non-empty and free of URI delimiters, quotes and whitespace")]
    InvalidReplacement(String),
    #[error("invalid URI scheme: {0}")]
    InvalidScheme(String),
}
