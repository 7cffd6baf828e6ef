//! Browser lifecycle management and process control.
//!
//! `TestBrowser` launches Chrome, drives the DevTools connection and hands
//! out [`Page`]s, which are the live targets waits evaluate against.
//!
//! # Resource Safety
//!
//! Dropping a `TestBrowser` kills the Chrome process through chromiumoxide's
//! own Drop and removes the per-launch profile directory. Call `close()` for
//! a graceful shutdown.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Configuration for launching a browser.
#[derive(Debug, Clone)]
pub struct TestBrowserConfig {
    /// Run in headless mode (default: true, unless built with `visible`).
    pub headless: bool,

    /// Browser window size (default: 1920x1080).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<String>,
}

impl TestBrowserConfig {
    /// Creates a new config with defaults for headless use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the browser window.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Uses a specific Chrome executable.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<String>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    #[allow(clippy::result_large_err)]
    fn to_browser_config(&self, profile_dir: &Path) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        // chromiumoxide launches headless unless told otherwise
        if !self.headless {
            config = config.with_head();
        }

        config = config.window_size(self.window_size.0, self.window_size.1);

        config = config.user_data_dir(profile_dir);

        for arg in &self.args {
            config = config.arg(arg.clone());
        }

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path);
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for TestBrowserConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: (1920, 1080),
            args: vec![
                // Required when user namespaces are unavailable (containers, CI).
                // Never point a no-sandbox browser at untrusted content.
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containerized environments
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
        }
    }
}

/// A managed browser instance.
///
/// # Example
///
/// ```ignore
/// let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
/// let page = browser.new_page().await?;
/// page.navigate("https://example.com").await?;
/// WaitAction::new(WaitSpec::javascript("document.title !== ''")).run(&page).await?;
/// browser.close().await?;
/// ```
pub struct TestBrowser {
    inner: Arc<Mutex<Option<Browser>>>,
    profile_dir: TempDir,
}

// A fresh profile directory per launch avoids ProcessSingleton conflicts
// between browsers running in parallel.
fn create_profile_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("pagewait-").tempdir()?)
}

impl TestBrowser {
    /// Launches a new browser instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is not installed, not executable,
    /// or fails to start.
    pub async fn launch(config: TestBrowserConfig) -> Result<Self> {
        debug!(?config, "launching browser");

        let profile_dir = create_profile_dir()?;
        let browser_config = config.to_browser_config(profile_dir.path())?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide only processes CDP events while the handler is polled
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("browser handler error: {}", e);
                }
            }
        });

        debug!(profile = %profile_dir.path().display(), "browser launched");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
            profile_dir,
        })
    }

    /// Opens a new blank page (tab).
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` if the browser has been closed.
    pub async fn new_page(&self) -> Result<Page> {
        let browser = self.inner.lock().await;
        let browser = browser.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page))
    }

    /// Closes the browser, kills the Chrome process and removes its profile
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully. The
    /// profile directory is removed either way.
    pub async fn close(self) -> Result<()> {
        let Self { inner, profile_dir } = self;

        let closed = match inner.lock().await.take() {
            Some(mut browser) => {
                debug!("closing browser");
                browser
                    .close()
                    .await
                    .map(|_| ())
                    .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))
            }
            None => Ok(()),
        };

        let path = profile_dir.path().to_path_buf();
        if let Err(e) = profile_dir.close() {
            warn!(path = %path.display(), "failed to remove browser profile: {}", e);
        }

        closed
    }

    /// The temporary profile directory Chrome runs with.
    #[must_use]
    pub fn profile_dir(&self) -> &Path {
        self.profile_dir.path()
    }

    /// Returns true if the browser has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}
