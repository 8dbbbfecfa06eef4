use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The browsers a harness session can be opened against.
///
/// Browser selection is a closed set: anything outside it is rejected at the
/// parse boundary instead of falling through to a half-configured session.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserKind {
    Chrome,
    Firefox,
    Edge,
}

impl BrowserKind {
    pub const ALL: [BrowserKind; 3] = [
        BrowserKind::Chrome,
        BrowserKind::Firefox,
        BrowserKind::Edge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Edge => "edge",
        }
    }

    /// Chrome and Edge share the Chromium launch-argument surface; Firefox
    /// is configured through session preferences instead.
    pub fn is_chromium(&self) -> bool {
        matches!(self, BrowserKind::Chrome | BrowserKind::Edge)
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "firefox" => Ok(BrowserKind::Firefox),
            "edge" => Ok(BrowserKind::Edge),
            _ => Err(Error::UnsupportedBrowser(s.trim().to_string())),
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_known_browsers_case_insensitively() {
        assert_eq!("chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
        assert_eq!("Firefox".parse::<BrowserKind>().unwrap(), BrowserKind::Firefox);
        assert_eq!("EDGE".parse::<BrowserKind>().unwrap(), BrowserKind::Edge);
        assert_eq!(" chrome ".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
    }

    #[test]
    fn test_rejects_unsupported_browser() {
        let err = "safari".parse::<BrowserKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedBrowser(ref name) if name == "safari"));
        assert!(err.to_string().contains("chrome, firefox, edge"));
    }

    #[test]
    fn test_chromium_family() {
        assert!(BrowserKind::Chrome.is_chromium());
        assert!(BrowserKind::Edge.is_chromium());
        assert!(!BrowserKind::Firefox.is_chromium());
    }

    #[test]
    fn test_round_trips_through_display() {
        for kind in BrowserKind::ALL {
            assert_eq!(kind.as_str().parse::<BrowserKind>().unwrap(), kind);
        }
    }
}
