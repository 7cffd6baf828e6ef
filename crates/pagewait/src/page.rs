//! Page-level browser operations and navigation.
//!
//! [`Page`] wraps a chromiumoxide tab and is the production
//! [`EvaluationTarget`]: every predicate poll becomes a `Runtime.evaluate`
//! call against the page's current state.

use crate::error::{BrowserError, EvaluationError, Result};
use crate::target::EvaluationTarget;
use crate::wait::{wait_for, WaitConfig};
use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page as ChromePage;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// How long `navigate` waits for `document.readyState` to reach "complete".
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// A browser page (tab) that waits can evaluate against.
#[derive(Debug, Clone)]
pub struct Page {
    inner: ChromePage,
}

impl Page {
    /// Wraps a chromiumoxide page. Called by `TestBrowser::new_page`.
    pub(crate) fn new(page: ChromePage) -> Self {
        Self { inner: page }
    }

    /// Navigates to an absolute URL and waits for the document to load.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or a wait error
    /// if the document never reaches the "complete" ready state.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(WaitConfig::with_timeout(LOAD_TIMEOUT))
            .await
    }

    /// Waits until `document.readyState` is "complete".
    ///
    /// Evaluation failures while a navigation is in flight are treated as
    /// "not ready yet".
    ///
    /// # Errors
    ///
    /// Returns a wait timeout if the document never finishes loading.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for(
            || async {
                self.inner
                    .evaluate("document.readyState")
                    .await
                    .ok()
                    .and_then(|result| result.value().cloned())
                    .is_some_and(|state| state == "complete")
            },
            config,
            "document ready",
        )
        .await?;
        Ok(())
    }

    /// Executes JavaScript in the page context and deserializes the result.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let path: String = page.evaluate("document.location.pathname").await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails or the result cannot be
    /// deserialized into `T`.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.evaluate_expression(script).await?;
        serde_json::from_value(value).map_err(|e| {
            EvaluationError::Script {
                expression: script.to_string(),
                message: format!("unexpected result type: {e}"),
            }
            .into()
        })
    }

    /// Returns the current page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// Returns the page title.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    /// Closes the page.
    ///
    /// # Errors
    ///
    /// Returns an error if closing the page fails.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

#[async_trait]
impl EvaluationTarget for Page {
    async fn evaluate_expression(
        &self,
        expression: &str,
    ) -> std::result::Result<Value, EvaluationError> {
        match self.inner.evaluate(expression).await {
            // `undefined` comes back without a value
            Ok(result) => Ok(result.value().cloned().unwrap_or(Value::Null)),
            Err(err @ CdpError::JavascriptException(_)) => Err(EvaluationError::Script {
                expression: expression.to_string(),
                message: err.to_string(),
            }),
            Err(err) => Err(EvaluationError::Unavailable(err.to_string())),
        }
    }
}

/// Turns a URL or a local file path into something `navigate` accepts.
///
/// Inputs with a scheme (`http:`, `file:`, `about:`, `data:` ...) pass
/// through unchanged. Anything else is treated as a path, which must exist,
/// and becomes a `file://` URL.
///
/// # Errors
///
/// Returns `InvalidUrl` if the path cannot be resolved.
pub fn resolve_url(input: &str) -> Result<String> {
    if has_scheme(input) {
        return Ok(input.to_string());
    }

    let path = Path::new(input)
        .canonicalize()
        .map_err(|e| BrowserError::InvalidUrl {
            input: input.to_string(),
            reason: e.to_string(),
        })?;

    let display = path.to_string_lossy().replace('\\', "/");
    if display.starts_with('/') {
        Ok(format!("file://{display}"))
    } else {
        Ok(format!("file:///{display}"))
    }
}

// Single-letter schemes are Windows drive letters, not URLs.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    scheme.len() > 1
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_with_schemes_pass_through() {
        for url in [
            "http://localhost:3000/blank.html",
            "about:blank",
            "data:text/html,<p>hi</p>",
            "file:///tmp/blank.html",
        ] {
            assert_eq!(resolve_url(url).unwrap(), url);
        }
    }

    #[test]
    fn drive_letters_are_not_schemes() {
        assert!(!has_scheme("C:/pages/blank.html"));
        assert!(!has_scheme("blank.html"));
        assert!(has_scheme("chrome-extension://abc"));
    }

    #[test]
    fn existing_paths_become_file_urls() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("blank.html");
        std::fs::write(&file, "<html></html>").unwrap();

        let url = resolve_url(file.to_str().unwrap()).unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("/blank.html"));
    }

    #[test]
    fn missing_paths_are_rejected() {
        let err = resolve_url("definitely/not/here.html").unwrap_err();
        assert!(matches!(err, BrowserError::InvalidUrl { .. }));
    }
}
