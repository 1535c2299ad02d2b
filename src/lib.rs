//! WebDriver-Events: listenable interception layer for browser-automation drivers
//!
//! Wrap any [`WebDriver`](webdriver::WebDriver) and register listeners that
//! run before and after each operation, or when the driver raises a fault.
//! Everything reachable from the wrapped driver is wrapped too, and shares
//! its listeners.
//!
//! ```ignore
//! let driver = webdriver_events::wrap(real_driver);
//! driver.set_listener(
//!     BEFORE_CLICK,
//!     Arc::new(|_: &Arc<dyn WebDriver>, element: &Arc<dyn WebElement>| {
//!         tracing::info!("about to click");
//!     }),
//! );
//! driver.find_element(&By::id("submit")).await?.click().await?;
//! ```

pub mod config;
pub mod error;

pub mod listener;
pub mod webdriver;
pub mod wrapper;

// Re-exports
pub use config::Config;
pub use error::{Error, Result};
pub use wrapper::{wrap, wrap_with_config, ListenableDriver};

/// WebDriver-Events library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
