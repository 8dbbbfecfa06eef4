use crate::{Error, Result};
use goshawk_browser::DriverSession;

/// Per-scenario state, passed `&mut` into every lifecycle hook.
///
/// Nothing here is shared between scenarios: a parallel runner hands each
/// scenario its own context, and with it its own session. The context has
/// exactly two states — Active while it holds a session, Idle otherwise.
#[derive(Default)]
pub struct ScenarioContext {
    session: Option<Box<dyn DriverSession>>,
    base_url: Option<String>,
    scenario_name: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The live session, or [`Error::NoSession`] while Idle.
    pub fn session(&self) -> Result<&dyn DriverSession> {
        self.session.as_deref().ok_or(Error::NoSession)
    }

    /// Base URL resolved at scenario start; available to test steps.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Display name of the running scenario, used to label failure
    /// attachments.
    pub fn scenario_name(&self) -> Option<&str> {
        self.scenario_name.as_deref()
    }

    pub(crate) fn activate(
        &mut self,
        session: Box<dyn DriverSession>,
        base_url: String,
        scenario_name: String,
    ) {
        self.session = Some(session);
        self.base_url = Some(base_url);
        self.scenario_name = Some(scenario_name);
    }

    /// Drop back to Idle, quitting the session if one is live.
    ///
    /// The session is taken out of the context before quitting, so the
    /// context is Idle again even when quit itself fails, and a second call
    /// is a no-op.
    pub(crate) async fn deactivate(&mut self) -> Result<()> {
        self.base_url = None;
        self.scenario_name = None;

        match self.session.take() {
            Some(mut session) => {
                session.quit().await?;
                Ok(())
            }
            None => Ok(()),
        }
    }
}
