use crate::commands::load_settings;
use anyhow::Result;
use goshawk_browser::capture_full_page;
use goshawk_core::Overrides;
use goshawk_harness::{ScenarioContext, ScenarioLifecycle};
use std::path::{Path, PathBuf};

pub fn execute(
    config_path: &Path,
    url: Option<&str>,
    browser: Option<&str>,
    output: Option<PathBuf>,
    webdriver_url: Option<&str>,
) -> Result<()> {
    let overrides = Overrides {
        browser,
        base_url: url,
        webdriver_url,
    };
    let settings = load_settings(config_path, &overrides)?;

    if !settings.headless {
        tracing::warn!(
            "Full-page capture is intended for headless sessions; a visible window is clamped to the display"
        );
    }

    let folder = output.unwrap_or_else(|| settings.screenshot_dir.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let lifecycle = ScenarioLifecycle::with_webdriver(settings.clone());
        let mut cx = ScenarioContext::new();

        println!("🚀 Launching {} via {}...", settings.browser, settings.webdriver_url);
        if let Err(err) = lifecycle.before_scenario(&mut cx, "full-page capture").await {
            // A partially started scenario (session up, navigation failed)
            // still owns a browser; tear it down before bailing.
            let _ = lifecycle.after_scenario(&mut cx).await;
            return Err(err.into());
        }

        // The lifecycle navigates when auto_navigate is on; a capture run
        // always wants the page, so cover the off case too.
        if !settings.auto_navigate {
            println!("📍 Navigating to {}", settings.base_url);
            cx.session()?.goto(&settings.base_url).await?;
        }

        println!("📸 Capturing full page into {}...", folder.display());
        let capture = capture_full_page(cx.session()?, &folder).await;

        // Teardown runs no matter how the capture went.
        let teardown = lifecycle.after_scenario(&mut cx).await;

        let path = capture?;
        teardown?;

        println!("✅ Saved full-page screenshot to {}", path.display());
        Ok(())
    })
}
