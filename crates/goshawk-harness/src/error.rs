use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] goshawk_core::Error),

    #[error("Browser error: {0}")]
    Browser(#[from] goshawk_browser::Error),

    #[error("No active session for this scenario")]
    NoSession,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
