use crate::{BrowserKind, ConfigResolver, Error, Result};
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

pub const SECTION_BASIC: &str = "basic info";
pub const SECTION_DRIVER: &str = "driver";
pub const SECTION_REPORT: &str = "report";

pub const ENV_BROWSER: &str = "GOSHAWK_BROWSER";
pub const ENV_HEADLESS: &str = "GOSHAWK_HEADLESS";
pub const ENV_MAXIMIZED: &str = "GOSHAWK_MAXIMIZED";
pub const ENV_FULLSCREEN: &str = "GOSHAWK_FULLSCREEN";
pub const ENV_URL: &str = "GOSHAWK_URL";
pub const ENV_AUTO_NAVIGATE: &str = "GOSHAWK_AUTO_NAVIGATE";
pub const ENV_WEBDRIVER: &str = "GOSHAWK_WEBDRIVER";
pub const ENV_SCREENSHOT_DIR: &str = "GOSHAWK_SCREENSHOT_DIR";
pub const ENV_REPORT_DIR: &str = "GOSHAWK_REPORT_DIR";

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";
const DEFAULT_REPORT_DIR: &str = "reports";

/// Caller-supplied overrides (typically CLI flags). These beat both the
/// environment and the config store.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub browser: Option<&'a str>,
    pub base_url: Option<&'a str>,
    pub webdriver_url: Option<&'a str>,
}

/// The fully resolved per-run configuration.
///
/// Resolved once before the first scenario and treated as immutable from
/// then on; `browser` and `base_url` have no defaults, so leaving them out
/// of every source is a hard error rather than a silently broken session.
#[derive(Debug, Clone, Serialize)]
pub struct HarnessSettings {
    pub browser: BrowserKind,
    pub headless: bool,
    pub maximized: bool,
    pub fullscreen: bool,
    pub base_url: String,
    pub auto_navigate: bool,
    pub webdriver_url: String,
    pub screenshot_dir: PathBuf,
    pub attachment_dir: PathBuf,
}

impl HarnessSettings {
    pub fn resolve(resolver: &ConfigResolver, overrides: &Overrides<'_>) -> Result<Self> {
        let browser_raw = match overrides.browser {
            Some(name) => name.to_string(),
            None => resolver.resolve(SECTION_BASIC, "browser", Some(ENV_BROWSER), None)?,
        };
        let browser: BrowserKind = browser_raw.parse()?;

        let headless = resolver.resolve_flag(SECTION_BASIC, "headless", Some(ENV_HEADLESS), false);
        let maximized =
            resolver.resolve_flag(SECTION_BASIC, "maximized", Some(ENV_MAXIMIZED), false);
        let fullscreen =
            resolver.resolve_flag(SECTION_BASIC, "fullscreen", Some(ENV_FULLSCREEN), false);
        let auto_navigate =
            resolver.resolve_flag(SECTION_BASIC, "auto_navigate", Some(ENV_AUTO_NAVIGATE), true);

        let base_url = match overrides.base_url {
            Some(url) => url.to_string(),
            None => resolver.resolve(SECTION_BASIC, "url", Some(ENV_URL), None)?,
        };
        validate_url(SECTION_BASIC, "url", &base_url)?;

        let webdriver_url = match overrides.webdriver_url {
            Some(url) => url.to_string(),
            None => resolver.resolve(
                SECTION_DRIVER,
                "endpoint",
                Some(ENV_WEBDRIVER),
                Some(DEFAULT_WEBDRIVER_URL),
            )?,
        };
        validate_url(SECTION_DRIVER, "endpoint", &webdriver_url)?;

        let screenshot_dir = resolver.resolve(
            SECTION_REPORT,
            "screenshot_dir",
            Some(ENV_SCREENSHOT_DIR),
            Some(DEFAULT_SCREENSHOT_DIR),
        )?;
        let attachment_dir = resolver.resolve(
            SECTION_REPORT,
            "attachments",
            Some(ENV_REPORT_DIR),
            Some(DEFAULT_REPORT_DIR),
        )?;

        Ok(Self {
            browser,
            headless,
            maximized,
            fullscreen,
            base_url,
            auto_navigate,
            webdriver_url,
            screenshot_dir: PathBuf::from(screenshot_dir),
            attachment_dir: PathBuf::from(attachment_dir),
        })
    }
}

fn validate_url(section: &str, key: &str, raw: &str) -> Result<()> {
    Url::parse(raw).map_err(|source| Error::InvalidUrl {
        section: section.to_string(),
        key: key.to_string(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigStore;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
["basic info"]
browser = "chrome"
headless = "true"
url = "https://example.com/login"
"#;

    fn resolver(env: &[(&str, &str)]) -> ConfigResolver {
        ConfigResolver::with_env(
            ConfigStore::from_toml_str(SAMPLE).unwrap(),
            env.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_resolves_from_store_with_defaults() {
        let settings = HarnessSettings::resolve(&resolver(&[]), &Overrides::default()).unwrap();

        assert_eq!(settings.browser, BrowserKind::Chrome);
        assert!(settings.headless);
        assert!(!settings.maximized);
        assert!(!settings.fullscreen);
        assert!(settings.auto_navigate);
        assert_eq!(settings.base_url, "https://example.com/login");
        assert_eq!(settings.webdriver_url, "http://localhost:4444");
        assert_eq!(settings.screenshot_dir, PathBuf::from("screenshots"));
    }

    #[test]
    fn test_env_overrides_store() {
        let settings = HarnessSettings::resolve(
            &resolver(&[("GOSHAWK_BROWSER", "firefox"), ("GOSHAWK_HEADLESS", "false")]),
            &Overrides::default(),
        )
        .unwrap();

        assert_eq!(settings.browser, BrowserKind::Firefox);
        assert!(!settings.headless);
    }

    #[test]
    fn test_explicit_override_beats_env_and_store() {
        let settings = HarnessSettings::resolve(
            &resolver(&[("GOSHAWK_BROWSER", "firefox")]),
            &Overrides {
                browser: Some("edge"),
                ..Overrides::default()
            },
        )
        .unwrap();

        assert_eq!(settings.browser, BrowserKind::Edge);
    }

    #[test]
    fn test_unsupported_browser_fails() {
        let err = HarnessSettings::resolve(
            &resolver(&[]),
            &Overrides {
                browser: Some("safari"),
                ..Overrides::default()
            },
        )
        .unwrap_err();

        assert!(matches!(err, Error::UnsupportedBrowser(_)));
    }

    #[test]
    fn test_missing_url_is_unresolved() {
        let resolver = ConfigResolver::with_env(
            ConfigStore::from_toml_str("[\"basic info\"]\nbrowser = \"chrome\"\n").unwrap(),
            HashMap::new(),
        );

        let err = HarnessSettings::resolve(&resolver, &Overrides::default()).unwrap_err();
        assert!(matches!(err, Error::Unresolved { ref key, .. } if key == "url"));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = HarnessSettings::resolve(
            &resolver(&[("GOSHAWK_URL", "not a url")]),
            &Overrides::default(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::InvalidUrl { ref key, .. } if key == "url"));
    }
}
