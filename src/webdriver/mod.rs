//! # Driver object model
//!
//! The capability interfaces this crate delegates to. A real driver
//! implements them; interception proxies implement them as well, so a
//! wrapped driver is a drop-in replacement for the one it wraps.
//!
//! ## Module structure
//! - `traits`: one trait per capability (driver, element, navigation,
//!   options, target locator, window, timeouts, logs, IME, alert,
//!   keyboard, mouse, touch screen)
//! - `types`: value types passed to and returned by those traits
//! - `mock`: in-memory journaling implementations for tests

pub mod mock;
pub mod traits;
pub mod types;

pub use traits::{
    Alert, ImeHandler, Keyboard, Logs, Mouse, Navigation, Options, TargetLocator, Timeouts,
    TouchScreen, WebDriver, WebElement, Window, WrapsElement, WrapsOriginal,
};

pub use types::{
    By, Coordinates, Cookie, Credentials, Dimension, LogEntries, LogEntry, OutputType, Point,
    Rectangle, Screenshot, ScriptValue,
};
