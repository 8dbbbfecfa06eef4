use goshawk_core::BrowserKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Browser config error: {0}")]
    Config(#[from] goshawk_core::Error),

    #[error("Failed to launch {kind} session at {endpoint}: {message}")]
    Launch {
        kind: BrowserKind,
        endpoint: String,
        message: String,
    },

    #[error("Options built for {descriptor} cannot launch a {requested} session")]
    MismatchedOptions {
        descriptor: BrowserKind,
        requested: BrowserKind,
    },

    #[error("WebDriver error: {0}")]
    WebDriver(String),

    #[error("Session already closed")]
    SessionClosed,

    #[error("Capture error: {0}")]
    Capture(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<thirtyfour::error::WebDriverError> for Error {
    fn from(err: thirtyfour::error::WebDriverError) -> Self {
        Error::WebDriver(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
