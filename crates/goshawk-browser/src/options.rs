use goshawk_core::BrowserKind;
use serde_json::{Value, json};

// Applied to every Chromium-family session: hide the "controlled by
// automated software" banner and suppress notification prompts.
const CHROMIUM_FIXED_ARGS: [&str; 2] = [
    "--disable-blink-features=AutomationControlled",
    "--disable-notifications",
];

/// Launch options for one browser session.
///
/// Built once per scenario by [`build_options`] and immutable from then on;
/// the factory consuming it is the only reader. Firefox cannot take window
/// geometry as launch arguments, so those requests are carried as
/// post-launch directives the factory applies after the session is up.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserOptions {
    kind: BrowserKind,
    headless: bool,
    args: Vec<String>,
    prefs: Vec<(String, Value)>,
    maximize_on_start: bool,
    fullscreen_on_start: bool,
}

impl BrowserOptions {
    pub fn kind(&self) -> BrowserKind {
        self.kind
    }

    pub fn is_headless(&self) -> bool {
        self.headless
    }

    /// Command-line arguments for the browser binary.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Session preferences (Firefox only; empty for the Chromium family).
    pub fn prefs(&self) -> &[(String, Value)] {
        &self.prefs
    }

    pub fn maximize_on_start(&self) -> bool {
        self.maximize_on_start
    }

    pub fn fullscreen_on_start(&self) -> bool {
        self.fullscreen_on_start
    }
}

/// Map a resolved configuration onto browser-specific launch options.
///
/// Headless takes precedence: a headless session ignores window geometry, so
/// neither the maximize nor the fullscreen option is emitted no matter what
/// the flags say. When both maximized and fullscreen are requested for a
/// visible session, fullscreen wins and maximized is dropped.
pub fn build_options(
    kind: BrowserKind,
    headless: bool,
    maximized: bool,
    fullscreen: bool,
) -> BrowserOptions {
    let (maximized, fullscreen) = if !headless && maximized && fullscreen {
        tracing::warn!("Both maximized and fullscreen requested; using fullscreen");
        (false, true)
    } else {
        (maximized, fullscreen)
    };

    let mut args = Vec::new();
    let mut prefs = Vec::new();
    let mut maximize_on_start = false;
    let mut fullscreen_on_start = false;

    match kind {
        BrowserKind::Chrome | BrowserKind::Edge => {
            args.extend(CHROMIUM_FIXED_ARGS.iter().map(|arg| arg.to_string()));
            if headless {
                args.push("--headless".to_string());
            } else {
                if maximized {
                    args.push("--start-maximized".to_string());
                }
                if fullscreen {
                    args.push("--start-fullscreen".to_string());
                }
            }
        }
        BrowserKind::Firefox => {
            prefs.push(("dom.webdriver.enabled".to_string(), json!(false)));
            prefs.push(("useAutomationExtension".to_string(), json!(false)));
            prefs.push(("dom.webnotifications.enabled".to_string(), json!(false)));
            prefs.push(("dom.push.enabled".to_string(), json!(false)));
            if headless {
                args.push("-headless".to_string());
            } else {
                // No launch arguments for window geometry; the factory
                // issues the WebDriver commands once the session is live.
                maximize_on_start = maximized;
                fullscreen_on_start = fullscreen;
            }
        }
    }

    BrowserOptions {
        kind,
        headless,
        args,
        prefs,
        maximize_on_start,
        fullscreen_on_start,
    }
}
