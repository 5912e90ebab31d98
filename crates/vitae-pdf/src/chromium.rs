//! Headless Chromium engine
//!
//! Drives Chromium over the DevTools protocol with `chromiumoxide`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::{
    EventLifecycleEvent, NavigateParams, PrintToPdfParams, SetLifecycleEventsEnabledParams,
};
use chromiumoxide::page::MediaTypeParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::{RenderEngine, RenderSession};
use crate::error::{RenderError, Result};
use crate::options::PdfOptions;

/// Navigation timeout applied when none is configured
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Lifecycle event Chromium emits once a document has had no network
/// connections for 500 ms
const NETWORK_IDLE: &str = "networkIdle";

/// Launches headless Chromium
#[derive(Debug, Clone)]
pub struct ChromiumEngine {
    executable: Option<PathBuf>,
    navigation_timeout: Duration,
}

impl Default for ChromiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromiumEngine {
    /// Engine using the Chromium found on the system
    pub fn new() -> Self {
        Self {
            executable: None,
            navigation_timeout: DEFAULT_NAVIGATION_TIMEOUT,
        }
    }

    /// Use a specific Chromium or Chrome binary
    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    /// Set the navigation timeout
    pub fn with_navigation_timeout(mut self, timeout: Duration) -> Self {
        self.navigation_timeout = timeout;
        self
    }

    /// Get the navigation timeout
    pub fn navigation_timeout(&self) -> Duration {
        self.navigation_timeout
    }
}

#[async_trait]
impl RenderEngine for ChromiumEngine {
    type Session = ChromiumSession;

    fn name(&self) -> &'static str {
        "chromium"
    }

    async fn launch(&self) -> Result<ChromiumSession> {
        let mut builder = BrowserConfig::builder();
        if let Some(executable) = &self.executable {
            builder = builder.chrome_executable(executable);
        }
        let config = builder.build().map_err(RenderError::EngineAcquisition)?;

        debug!("Launching headless Chromium");
        let (mut browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::EngineAcquisition(e.to_string()))?;

        // The handler drives the CDP connection and must be polled for the
        // browser's whole lifetime.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("CDP handler error: {}", e);
                }
            }
        });

        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if let Err(release_err) = release(&mut browser, &handler_task).await {
                    warn!("{}", release_err);
                }
                return Err(RenderError::EngineAcquisition(e.to_string()));
            }
        };

        Ok(ChromiumSession {
            browser,
            page,
            handler_task,
            navigation_timeout: self.navigation_timeout,
        })
    }
}

/// A running Chromium with one open page
pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    navigation_timeout: Duration,
}

#[async_trait]
impl RenderSession for ChromiumSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        match tokio::time::timeout(self.navigation_timeout, navigate_until_idle(&self.page, url))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(RenderError::Navigation(format!(
                "timeout of {}ms exceeded loading {}",
                self.navigation_timeout.as_millis(),
                url
            ))),
        }
    }

    async fn emulate_print_media(&mut self) -> Result<()> {
        self.page
            .emulate_media_type(MediaTypeParams::Print)
            .await
            .map_err(|e| RenderError::Render(e.to_string()))?;
        Ok(())
    }

    async fn print_to_file(&mut self, options: &PdfOptions, output: &Path) -> Result<()> {
        debug!("Printing to {}", output.display());
        self.page
            .save_pdf(print_params(options), output)
            .await
            .map_err(|e| RenderError::Render(e.to_string()))?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        release(&mut self.browser, &self.handler_task).await
    }
}

/// Load `url` and wait for the network-idle lifecycle event of the new
/// document
async fn navigate_until_idle(page: &Page, url: &str) -> Result<()> {
    let nav_err = |e: chromiumoxide::error::CdpError| RenderError::Navigation(e.to_string());

    page.execute(SetLifecycleEventsEnabledParams::new(true))
        .await
        .map_err(nav_err)?;
    let mut events = page
        .event_listener::<EventLifecycleEvent>()
        .await
        .map_err(nav_err)?;

    let response = page
        .execute(NavigateParams::new(url))
        .await
        .map_err(nav_err)?;
    if let Some(error_text) = &response.result.error_text {
        return Err(RenderError::Navigation(format!("{} at {}", error_text, url)));
    }
    let loader_id = response.result.loader_id.clone();

    while let Some(event) = events.next().await {
        let same_document = loader_id.as_ref().map_or(true, |id| *id == event.loader_id);
        if event.name == NETWORK_IDLE && same_document {
            return Ok(());
        }
    }

    Err(RenderError::Navigation(format!(
        "page closed before {} finished loading",
        url
    )))
}

/// Close the browser, falling back to killing its process, then reap it and
/// stop polling its connection
async fn release(browser: &mut Browser, handler_task: &JoinHandle<()>) -> Result<()> {
    let mut result = Ok(());
    if let Err(e) = browser.close().await {
        warn!("Graceful browser shutdown failed, killing it: {}", e);
        if let Some(Err(kill_err)) = browser.kill().await {
            result = Err(RenderError::Release(format!(
                "{} (kill failed: {})",
                e, kill_err
            )));
        }
    }

    if result.is_ok() {
        if let Err(e) = browser.wait().await {
            debug!("Waiting for browser exit failed: {}", e);
        }
    }
    handler_task.abort();
    result
}

/// Map print options onto the DevTools `Page.printToPDF` parameters
fn print_params(options: &PdfOptions) -> PrintToPdfParams {
    let (paper_width, paper_height) = options.paper_size();
    PrintToPdfParams {
        landscape: Some(options.is_landscape()),
        display_header_footer: Some(options.display_header_footer),
        print_background: Some(options.print_background),
        scale: options.scale,
        paper_width: Some(paper_width),
        paper_height: Some(paper_height),
        margin_top: Some(options.margin.top.to_inches()),
        margin_bottom: Some(options.margin.bottom.to_inches()),
        margin_left: Some(options.margin.left.to_inches()),
        margin_right: Some(options.margin.right.to_inches()),
        page_ranges: options.page_ranges.clone(),
        header_template: options.header_template.clone(),
        footer_template: options.footer_template.clone(),
        prefer_css_page_size: Some(options.prefer_css_page_size),
        ..Default::default()
    }
}
