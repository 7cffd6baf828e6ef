//! # pagewait
//!
//! Conditional waits against live pages.
//!
//! A wait either sleeps for a fixed duration or polls a script predicate
//! against an [`EvaluationTarget`] until the predicate is truthy or a
//! deadline passes. The headless Chrome [`Page`] is the production target;
//! anything that can evaluate an expression can stand in for it.
//!
//! ## Architecture
//!
//! - **WaitSpec / WaitOptions**: validated condition vs. raw configuration
//! - **WaitAction**: runs one spec once against a target
//! - **EvaluationTarget**: the only capability the evaluator needs
//! - **TestBrowser / Page**: Chrome process lifecycle and the page target
//! - **WaitPlan**: ordered steps validated up front, run in sequence
//!
//! ## Example Usage
//!
//! ```ignore
//! use pagewait::{TestBrowser, TestBrowserConfig, WaitAction, WaitOptions};
//!
//! let browser = TestBrowser::launch(TestBrowserConfig::default()).await?;
//! let page = browser.new_page().await?;
//! page.navigate("http://localhost:8000/blank.html").await?;
//!
//! WaitAction::from_options(WaitOptions::duration(1.0))?
//!     .run(&page)
//!     .await?;
//!
//! let outcome = WaitAction::from_options(
//!     WaitOptions::javascript("document.readyState === 'complete'").with_timeout(5.0),
//! )?
//! .run(&page)
//! .await?;
//! println!("ready after {:?}", outcome.elapsed);
//!
//! browser.close().await?;
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Unit tests**: spec validation, truthiness, polling against scripted targets
//! 2. **Integration tests**: real browser tests (require Chrome installed)
//!
//! Run with `cargo test` (unit) or `cargo test -- --ignored` (integration).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod plan;
pub mod spec;
pub mod target;
pub mod wait;

// Re-export main types for convenience
pub use browser::{TestBrowser, TestBrowserConfig};
pub use error::{BrowserError, EvaluationError, Result, SpecError, WaitError};
pub use page::{resolve_url, Page};
pub use plan::{CompiledPlan, PlanError, WaitPlan};
pub use spec::{WaitOptions, WaitSpec};
pub use target::{is_truthy, EvaluationTarget};
pub use wait::{
    run_options, wait_for, wait_for_result, WaitAction, WaitConfig, WaitOutcome,
    DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT,
};
