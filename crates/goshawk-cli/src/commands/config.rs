use crate::OutputFormat;
use crate::commands::load_settings;
use anyhow::Result;
use console::style;
use goshawk_core::Overrides;
use std::path::Path;

pub fn execute(config_path: &Path, browser: Option<&str>, format: OutputFormat) -> Result<()> {
    let overrides = Overrides {
        browser,
        ..Overrides::default()
    };
    let settings = load_settings(config_path, &overrides)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        OutputFormat::Pretty => {
            println!("{}", style("Resolved configuration").bold());
            println!("  browser:         {}", settings.browser);
            println!("  headless:        {}", settings.headless);
            println!("  maximized:       {}", settings.maximized);
            println!("  fullscreen:      {}", settings.fullscreen);
            println!("  base url:        {}", settings.base_url);
            println!("  auto navigate:   {}", settings.auto_navigate);
            println!("  webdriver:       {}", settings.webdriver_url);
            println!("  screenshot dir:  {}", settings.screenshot_dir.display());
            println!("  attachment dir:  {}", settings.attachment_dir.display());
        }
    }

    Ok(())
}
