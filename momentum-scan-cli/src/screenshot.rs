//! PNG capture of the rendered table
//!
//! Uses headless Chrome (the `screenshot` feature) to open the written page,
//! wait for it to settle, and capture the `.container` element plus a margin.
//! Without the feature, capture reports that it is unavailable and the caller
//! carries on without an image.

use crate::config::ScreenshotConfig;
use anyhow::Result;
use std::path::Path;

/// Element the capture is cropped to
#[cfg_attr(not(feature = "screenshot"), allow(dead_code))]
pub const CAPTURE_SELECTOR: &str = ".container";

/// Crop rectangle in CSS pixels
#[cfg_attr(not(feature = "screenshot"), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[cfg_attr(not(feature = "screenshot"), allow(dead_code))]
impl ClipRect {
    /// Grow by `padding` on every side, never starting left of or above the page
    pub fn padded(self, padding: f64) -> Self {
        Self {
            x: (self.x - padding).max(0.0),
            y: (self.y - padding).max(0.0),
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// Capture `html_path` to `png_path`
#[cfg(feature = "screenshot")]
pub fn capture(html_path: &Path, png_path: &Path, config: &ScreenshotConfig) -> Result<()> {
    use anyhow::{anyhow, Context};
    use headless_chrome::protocol::cdp::Page;
    use headless_chrome::{Browser, LaunchOptions};
    use std::time::Duration;

    let absolute = std::fs::canonicalize(html_path)
        .with_context(|| format!("Failed to resolve {:?}", html_path))?;
    let url = format!("file://{}", absolute.display());

    let launch_options = LaunchOptions::default_builder()
        .headless(true)
        .window_size(Some((config.viewport_width, config.viewport_height)))
        .build()
        .map_err(|e| anyhow!("Failed to build launch options: {}", e))?;

    let browser = Browser::new(launch_options).context("Failed to launch browser")?;
    let tab = browser.new_tab().context("Failed to create tab")?;

    tab.navigate_to(&url)
        .with_context(|| format!("Navigation to {} failed", url))?;
    tab.wait_until_navigated()
        .context("Wait for navigation failed")?;

    // Let web fonts and layout settle
    std::thread::sleep(Duration::from_millis(config.settle_ms));

    let container = tab
        .wait_for_element(CAPTURE_SELECTOR)
        .with_context(|| format!("No {} element on the page", CAPTURE_SELECTOR))?;
    let border = container
        .get_box_model()
        .context("Failed to measure table container")?
        .border_viewport();

    let clip = ClipRect {
        x: border.x,
        y: border.y,
        width: border.width,
        height: border.height,
    }
    .padded(config.padding);
    log::debug!("Capturing clip {:?}", clip);

    let png = tab
        .capture_screenshot(
            Page::CaptureScreenshotFormatOption::Png,
            None,
            Some(Page::Viewport {
                x: clip.x,
                y: clip.y,
                width: clip.width,
                height: clip.height,
                scale: 1.0,
            }),
            true,
        )
        .context("Screenshot failed")?;

    std::fs::write(png_path, png).with_context(|| format!("Failed to write {:?}", png_path))?;
    Ok(())
}

/// Capture `html_path` to `png_path`
#[cfg(not(feature = "screenshot"))]
pub fn capture(html_path: &Path, _png_path: &Path, _config: &ScreenshotConfig) -> Result<()> {
    log::debug!("Screenshot requested for {:?} without browser support", html_path);
    anyhow::bail!(
        "PNG generation requires headless Chrome support; rebuild with `--features screenshot`"
    )
}
