use crate::{DriverSession, Error, Result};
use std::path::{Path, PathBuf};

// Browsers disagree on which DOM metric reflects the full document height,
// so take the max across all of them.
const FULL_HEIGHT_SCRIPT: &str = "return Math.max(document.body.scrollHeight, \
     document.body.offsetHeight, document.documentElement.clientHeight, \
     document.documentElement.scrollHeight, document.documentElement.offsetHeight);";

/// Resize the window to the full document height and save a screenshot.
///
/// Returns the path of the written PNG. The destination folder is created
/// if missing. Meaningful in headless sessions; visible windows are clamped
/// to the display, so callers should warn rather than rely on the result.
pub async fn capture_full_page<S>(session: &S, folder: &Path) -> Result<PathBuf>
where
    S: DriverSession + ?Sized,
{
    let (width, height) = session.window_size().await?;

    let metric = session.execute_script(FULL_HEIGHT_SCRIPT).await?;
    // Browsers may report the height as an integer or a float.
    let full_height = metric
        .as_i64()
        .or_else(|| metric.as_f64().map(|h| h.round() as i64))
        .ok_or_else(|| Error::Capture("page height script returned a non-numeric value".into()))?;
    let full_height = u32::try_from(full_height)
        .map_err(|_| Error::Capture(format!("page height script returned {full_height}")))?;

    tracing::debug!(
        "Resizing window from {}x{} to {}x{} for full-page capture",
        width,
        height,
        width,
        full_height
    );
    session.set_window_size(width, full_height).await?;

    std::fs::create_dir_all(folder)?;
    let path = unique_capture_path(folder, chrono::Utc::now().timestamp());

    let png = session.screenshot_png().await?;
    std::fs::write(&path, png)?;

    tracing::info!("Saved full-page screenshot to {}", path.display());
    Ok(path)
}

// Second-granularity timestamps collide when captures land in the same
// second; suffix a counter instead of overwriting the earlier file.
fn unique_capture_path(folder: &Path, timestamp: i64) -> PathBuf {
    let base = folder.join(format!("full_page_{timestamp}.png"));
    if !base.exists() {
        return base;
    }

    let mut n = 1u32;
    loop {
        let candidate = folder.join(format!("full_page_{timestamp}_{n}.png"));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
