use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::Value;
use thirtyfour::WebDriver;

/// The slice of the browser automation surface the harness consumes.
///
/// Production sessions are [`WebDriverSession`]; tests substitute in-memory
/// implementations.
#[async_trait]
pub trait DriverSession: Send + Sync {
    /// Navigate the session to a URL.
    async fn goto(&self, url: &str) -> Result<()>;

    /// Run a script in the page and return its result.
    async fn execute_script(&self, script: &str) -> Result<Value>;

    /// Current window size as (width, height).
    async fn window_size(&self) -> Result<(u32, u32)>;

    /// Resize the window.
    async fn set_window_size(&self, width: u32, height: u32) -> Result<()>;

    /// Screenshot of the current viewport as PNG bytes.
    async fn screenshot_png(&self) -> Result<Vec<u8>>;

    /// End the session and close the browser. Calling this twice is a
    /// no-op, not an error.
    async fn quit(&mut self) -> Result<()>;
}

/// A live WebDriver session.
///
/// The inner driver moves out on `quit`, so every later call observes
/// [`Error::SessionClosed`] instead of talking to a dead browser.
#[derive(Debug)]
pub struct WebDriverSession {
    driver: Option<WebDriver>,
}

impl WebDriverSession {
    pub fn new(driver: WebDriver) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    fn driver(&self) -> Result<&WebDriver> {
        self.driver.as_ref().ok_or(Error::SessionClosed)
    }
}

#[async_trait]
impl DriverSession for WebDriverSession {
    async fn goto(&self, url: &str) -> Result<()> {
        self.driver()?.goto(url).await?;
        Ok(())
    }

    async fn execute_script(&self, script: &str) -> Result<Value> {
        let ret = self.driver()?.execute(script, Vec::new()).await?;
        Ok(ret.json().clone())
    }

    async fn window_size(&self) -> Result<(u32, u32)> {
        let rect = self.driver()?.get_window_rect().await?;
        Ok((rect.width as u32, rect.height as u32))
    }

    async fn set_window_size(&self, width: u32, height: u32) -> Result<()> {
        let driver = self.driver()?;
        let current = driver.get_window_rect().await?;
        driver
            .set_window_rect(current.x as u32, current.y as u32, width, height)
            .await?;
        Ok(())
    }

    async fn screenshot_png(&self) -> Result<Vec<u8>> {
        let png = self.driver()?.screenshot_as_png().await?;
        Ok(png)
    }

    async fn quit(&mut self) -> Result<()> {
        match self.driver.take() {
            Some(driver) => {
                tracing::debug!("Quitting WebDriver session");
                driver.quit().await?;
                Ok(())
            }
            None => {
                tracing::debug!("Session already quit; nothing to do");
                Ok(())
            }
        }
    }
}
