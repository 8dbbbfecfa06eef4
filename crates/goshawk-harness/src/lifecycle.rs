use crate::{Reporter, Result, ScenarioContext};
use goshawk_browser::{SessionFactory, SessionProvider, build_options};
use goshawk_core::HarnessSettings;

/// Fallback attachment label when a scenario has no display name.
const UNNAMED_SCENARIO_LABEL: &str = "Scenario_Failed";

/// Drives the per-scenario session lifecycle: resolve → build options →
/// create session before each scenario, quit after each scenario, capture
/// diagnostics on failed steps.
pub struct ScenarioLifecycle {
    settings: HarnessSettings,
    provider: Box<dyn SessionProvider>,
    reporter: Box<dyn Reporter>,
}

impl ScenarioLifecycle {
    pub fn new(
        settings: HarnessSettings,
        provider: Box<dyn SessionProvider>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            settings,
            provider,
            reporter,
        }
    }

    /// Lifecycle wired to the configured WebDriver endpoint and the
    /// file-backed reporter.
    pub fn with_webdriver(settings: HarnessSettings) -> Self {
        let provider = Box::new(SessionFactory::new(settings.webdriver_url.clone()));
        let reporter = Box::new(crate::FileReporter::new(settings.attachment_dir.clone()));
        Self::new(settings, provider, reporter)
    }

    pub fn settings(&self) -> &HarnessSettings {
        &self.settings
    }

    /// Idle → Active: build options, open the session, store it on the
    /// context, then navigate to the base URL when `auto_navigate` is on.
    ///
    /// The session lands on the context before navigation, so a failed
    /// first navigation still gets torn down by `after_scenario`.
    pub async fn before_scenario(
        &self,
        cx: &mut ScenarioContext,
        scenario_name: &str,
    ) -> Result<()> {
        tracing::info!("Starting scenario '{}'", scenario_name);

        let options = build_options(
            self.settings.browser,
            self.settings.headless,
            self.settings.maximized,
            self.settings.fullscreen,
        );
        let session = self
            .provider
            .create_session(self.settings.browser, &options)
            .await?;

        cx.activate(
            session,
            self.settings.base_url.clone(),
            scenario_name.to_string(),
        );

        if self.settings.auto_navigate {
            cx.session()?.goto(&self.settings.base_url).await?;
            tracing::debug!("Navigated to {}", self.settings.base_url);
        }

        Ok(())
    }

    /// Active → Idle, unconditionally. Runs after every scenario, failed or
    /// not; an Idle context (setup never succeeded, or already torn down)
    /// is a no-op.
    pub async fn after_scenario(&self, cx: &mut ScenarioContext) -> Result<()> {
        if cx.is_active() {
            tracing::info!("Scenario finished; quitting session");
        }
        cx.deactivate().await
    }

    /// Capture a screenshot of the live session when a step failed and hand
    /// it to the reporter.
    ///
    /// Capture problems are logged, never raised: a broken screenshot must
    /// not mask the step's own failure. Lifecycle state is unchanged.
    pub async fn after_step(&self, cx: &ScenarioContext, step_failed: bool) {
        if !step_failed || !cx.is_active() {
            return;
        }

        let label = match cx.scenario_name() {
            Some(name) => format!("Scenario: {name} failed"),
            None => UNNAMED_SCENARIO_LABEL.to_string(),
        };

        let session = match cx.session() {
            Ok(session) => session,
            Err(err) => {
                tracing::warn!("Skipping failure capture: {}", err);
                return;
            }
        };

        match session.screenshot_png().await {
            Ok(png) => {
                if let Err(err) = self.reporter.attach(&label, &mime::IMAGE_PNG, &png) {
                    tracing::warn!("Failed to attach failure screenshot: {}", err);
                }
            }
            Err(err) => {
                tracing::warn!("Failed to capture failure screenshot: {}", err);
            }
        }
    }
}
