use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unsupported browser '{0}', expected one of: chrome, firefox, edge")]
    UnsupportedBrowser(String),

    #[error("No value for [{section}] {key}: not in the environment, the config file, and no default was supplied")]
    Unresolved { section: String, key: String },

    #[error("Invalid URL for [{section}] {key}: {source}")]
    InvalidUrl {
        section: String,
        key: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
