use crate::{BrowserOptions, DriverSession, Error, Result, WebDriverSession};
use async_trait::async_trait;
use goshawk_core::BrowserKind;
use thirtyfour::common::capabilities::firefox::FirefoxPreferences;
use thirtyfour::{Capabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

/// Produces driver sessions for the lifecycle controller.
///
/// Abstracted so lifecycle tests can hand out in-memory sessions; the
/// production implementation is [`SessionFactory`].
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn create_session(
        &self,
        kind: BrowserKind,
        options: &BrowserOptions,
    ) -> Result<Box<dyn DriverSession>>;
}

/// Creates one live WebDriver session per call against a configured
/// endpoint. No pooling, no reuse, no retry: a launch failure is the
/// caller's to surface.
pub struct SessionFactory {
    endpoint: String,
}

impl SessionFactory {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Open a session for `kind` using a previously built options
    /// descriptor.
    ///
    /// The descriptor's kind is validated against the requested kind even
    /// though the builder already guarantees consistency — the factory is a
    /// separate trust boundary and does not assume its input was built
    /// correctly.
    pub async fn create(
        &self,
        kind: BrowserKind,
        options: &BrowserOptions,
    ) -> Result<WebDriverSession> {
        if options.kind() != kind {
            return Err(Error::MismatchedOptions {
                descriptor: options.kind(),
                requested: kind,
            });
        }

        let caps = capabilities_for(options)?;

        tracing::info!(
            "Launching {} session via {} (headless: {})",
            kind,
            self.endpoint,
            options.is_headless()
        );

        let driver = WebDriver::new(&self.endpoint, caps)
            .await
            .map_err(|err| Error::Launch {
                kind,
                endpoint: self.endpoint.clone(),
                message: err.to_string(),
            })?;

        // Window directives the descriptor could not express as launch
        // arguments (Firefox geometry).
        if options.maximize_on_start() {
            driver.maximize_window().await?;
        }
        if options.fullscreen_on_start() {
            driver.fullscreen_window().await?;
        }

        tracing::info!("{} session established", kind);
        Ok(WebDriverSession::new(driver))
    }
}

#[async_trait]
impl SessionProvider for SessionFactory {
    async fn create_session(
        &self,
        kind: BrowserKind,
        options: &BrowserOptions,
    ) -> Result<Box<dyn DriverSession>> {
        Ok(Box::new(self.create(kind, options).await?))
    }
}

/// Translate an options descriptor into WebDriver capabilities.
fn capabilities_for(options: &BrowserOptions) -> Result<Capabilities> {
    match options.kind() {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            for arg in options.args() {
                caps.add_arg(arg)?;
            }
            Ok(caps.into())
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            for arg in options.args() {
                caps.add_arg(arg)?;
            }
            Ok(caps.into())
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            for arg in options.args() {
                caps.add_arg(arg)?;
            }
            let mut prefs = FirefoxPreferences::new();
            for (key, value) in options.prefs() {
                prefs.set(key, value.clone())?;
            }
            caps.set_preferences(prefs)?;
            Ok(caps.into())
        }
    }
}
