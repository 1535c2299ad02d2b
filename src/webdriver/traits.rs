//! Driver capability traits
//!
//! The object model of a browser-automation driver, seen as a set of
//! capabilities. Interception proxies implement the same traits as the
//! objects they stand in for.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::types::{
    By, Coordinates, Cookie, Credentials, Dimension, LogEntries, OutputType, Point, Rectangle,
    Screenshot, ScriptValue,
};
use crate::{Error, Result};

/// Exposes the real object an interception proxy delegates to
pub trait WrapsOriginal<T: ?Sized>: Send + Sync {
    /// The exact instance that was wrapped
    fn wrapped_original(&self) -> Arc<T>;
}

/// Element proxies additionally know the driver they came from
pub trait WrapsElement: WrapsOriginal<dyn WebElement> {
    /// Real root driver of the graph the element was found in
    fn wrapped_driver(&self) -> Arc<dyn WebDriver>;
}

/// Browser-automation driver
#[async_trait]
pub trait WebDriver: Send + Sync {
    /// Load a new page
    async fn get(&self, url: &str) -> Result<()>;

    /// URL of the current page
    async fn current_url(&self) -> Result<String>;

    /// Source of the current page
    async fn page_source(&self) -> Result<String>;

    /// Title of the current page
    async fn title(&self) -> Result<String>;

    /// Handle of the current window
    async fn window_handle(&self) -> Result<String>;

    /// Handles of all open windows
    async fn window_handles(&self) -> Result<Vec<String>>;

    /// First element matching `by`
    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>>;

    /// All elements matching `by`, in document order
    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>>;

    /// Close the current window
    async fn close(&self) -> Result<()>;

    /// Close every window and end the session
    async fn quit(&self) -> Result<()>;

    /// History navigation
    fn navigate(&self) -> Result<Arc<dyn Navigation>>;

    /// Frame, window and alert switching
    fn switch_to(&self) -> Result<Arc<dyn TargetLocator>>;

    /// Browser options
    fn manage(&self) -> Result<Arc<dyn Options>>;

    /// Keyboard device
    fn keyboard(&self) -> Result<Arc<dyn Keyboard>> {
        Err(Error::unsupported("getKeyboard"))
    }

    /// Mouse device
    fn mouse(&self) -> Result<Arc<dyn Mouse>> {
        Err(Error::unsupported("getMouse"))
    }

    /// Touch screen device
    fn touch(&self) -> Result<Arc<dyn TouchScreen>> {
        Err(Error::unsupported("getTouch"))
    }

    /// Run a synchronous script in the current page
    async fn execute_script(&self, _script: &str, _args: &[ScriptValue]) -> Result<ScriptValue> {
        Err(Error::unsupported("executeScript"))
    }

    /// Run a script that signals completion through a callback
    async fn execute_async_script(
        &self,
        _script: &str,
        _args: &[ScriptValue],
    ) -> Result<ScriptValue> {
        Err(Error::unsupported("executeAsyncScript"))
    }

    /// Screenshot of the current viewport
    async fn screenshot_as(&self, _output: OutputType) -> Result<Screenshot> {
        Err(Error::unsupported("getScreenshotAs"))
    }

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn WebDriver>> {
        None
    }
}

/// DOM element
#[async_trait]
pub trait WebElement: Send + Sync {
    async fn click(&self) -> Result<()>;

    async fn submit(&self) -> Result<()>;

    async fn clear(&self) -> Result<()>;

    async fn send_keys(&self, keys: &str) -> Result<()>;

    async fn tag_name(&self) -> Result<String>;

    async fn attribute(&self, name: &str) -> Result<Option<String>>;

    async fn is_selected(&self) -> Result<bool>;

    async fn is_enabled(&self) -> Result<bool>;

    async fn is_displayed(&self) -> Result<bool>;

    /// Visible text
    async fn text(&self) -> Result<String>;

    async fn css_value(&self, property: &str) -> Result<String>;

    /// Top-left corner on the page
    async fn location(&self) -> Result<Point>;

    async fn size(&self) -> Result<Dimension>;

    async fn rect(&self) -> Result<Rectangle>;

    /// Where input devices should aim to reach this element
    async fn coordinates(&self) -> Result<Coordinates>;

    /// First descendant matching `by`
    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>>;

    /// All descendants matching `by`
    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>>;

    /// Screenshot clipped to this element
    async fn screenshot_as(&self, _output: OutputType) -> Result<Screenshot> {
        Err(Error::unsupported("getScreenshotAs"))
    }

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsElement> {
        None
    }
}

/// Browser history
#[async_trait]
pub trait Navigation: Send + Sync {
    async fn back(&self) -> Result<()>;

    async fn forward(&self) -> Result<()>;

    async fn to(&self, url: &str) -> Result<()>;

    async fn to_url(&self, url: &Url) -> Result<()>;

    async fn refresh(&self) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Navigation>> {
        None
    }
}

/// Switches the focus of future commands
///
/// Every switch returns the driver so calls can be chained.
#[async_trait]
pub trait TargetLocator: Send + Sync {
    async fn frame_index(&self, index: usize) -> Result<Arc<dyn WebDriver>>;

    async fn frame_name(&self, name_or_id: &str) -> Result<Arc<dyn WebDriver>>;

    async fn frame_element(&self, frame: &Arc<dyn WebElement>) -> Result<Arc<dyn WebDriver>>;

    async fn parent_frame(&self) -> Result<Arc<dyn WebDriver>>;

    async fn window(&self, name_or_handle: &str) -> Result<Arc<dyn WebDriver>>;

    async fn default_content(&self) -> Result<Arc<dyn WebDriver>>;

    /// Element that currently has focus
    async fn active_element(&self) -> Result<Arc<dyn WebElement>>;

    /// Currently open alert
    async fn alert(&self) -> Result<Arc<dyn Alert>>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn TargetLocator>> {
        None
    }
}

/// Browser options: cookies, logs, IME, window and timeouts
#[async_trait]
pub trait Options: Send + Sync {
    async fn add_cookie(&self, cookie: &Cookie) -> Result<()>;

    async fn delete_cookie_named(&self, name: &str) -> Result<()>;

    async fn delete_cookie(&self, cookie: &Cookie) -> Result<()>;

    async fn delete_all_cookies(&self) -> Result<()>;

    async fn cookies(&self) -> Result<Vec<Cookie>>;

    async fn cookie_named(&self, name: &str) -> Result<Option<Cookie>>;

    fn timeouts(&self) -> Result<Arc<dyn Timeouts>>;

    fn ime(&self) -> Result<Arc<dyn ImeHandler>>;

    fn window(&self) -> Result<Arc<dyn Window>>;

    fn logs(&self) -> Result<Arc<dyn Logs>>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Options>> {
        None
    }
}

/// Driver wait configuration
///
/// Setters hand back a timeouts handle so configuration can be chained.
#[async_trait]
pub trait Timeouts: Send + Sync {
    async fn implicitly_wait(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>>;

    async fn set_script_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>>;

    async fn page_load_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Timeouts>> {
        None
    }
}

/// Input method editor
#[async_trait]
pub trait ImeHandler: Send + Sync {
    async fn available_engines(&self) -> Result<Vec<String>>;

    async fn active_engine(&self) -> Result<String>;

    async fn is_activated(&self) -> Result<bool>;

    async fn deactivate(&self) -> Result<()>;

    async fn activate_engine(&self, engine: &str) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn ImeHandler>> {
        None
    }
}

/// Current browser window
#[async_trait]
pub trait Window: Send + Sync {
    async fn set_size(&self, size: Dimension) -> Result<()>;

    async fn set_position(&self, position: Point) -> Result<()>;

    async fn size(&self) -> Result<Dimension>;

    async fn position(&self) -> Result<Point>;

    async fn maximize(&self) -> Result<()>;

    async fn fullscreen(&self) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Window>> {
        None
    }
}

/// Browser and driver logs
#[async_trait]
pub trait Logs: Send + Sync {
    /// Drain the entries of `log_type`
    async fn get(&self, log_type: &str) -> Result<LogEntries>;

    async fn available_log_types(&self) -> Result<Vec<String>>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Logs>> {
        None
    }
}

/// Open `alert`, `confirm` or `prompt` dialog
#[async_trait]
pub trait Alert: Send + Sync {
    async fn dismiss(&self) -> Result<()>;

    async fn accept(&self) -> Result<()>;

    async fn text(&self) -> Result<String>;

    async fn send_keys(&self, keys: &str) -> Result<()>;

    async fn authenticate_using(&self, credentials: &Credentials) -> Result<()>;

    async fn set_credentials(&self, credentials: &Credentials) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Alert>> {
        None
    }
}

/// Low-level keyboard
#[async_trait]
pub trait Keyboard: Send + Sync {
    async fn send_keys(&self, keys: &str) -> Result<()>;

    async fn press_key(&self, key: &str) -> Result<()>;

    async fn release_key(&self, key: &str) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Keyboard>> {
        None
    }
}

/// Low-level mouse
///
/// `None` coordinates act at the current pointer position.
#[async_trait]
pub trait Mouse: Send + Sync {
    async fn click(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn double_click(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn mouse_down(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn mouse_up(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn mouse_move(&self, to: Option<&Coordinates>) -> Result<()>;

    /// Move relative to the top-left corner of `to`
    async fn mouse_move_by(
        &self,
        to: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
    ) -> Result<()>;

    async fn context_click(&self, at: Option<&Coordinates>) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Mouse>> {
        None
    }
}

/// Touch screen gestures
#[async_trait]
pub trait TouchScreen: Send + Sync {
    async fn single_tap(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn down(&self, x: i64, y: i64) -> Result<()>;

    async fn up(&self, x: i64, y: i64) -> Result<()>;

    async fn move_to(&self, x: i64, y: i64) -> Result<()>;

    /// Scroll starting on `from`
    async fn scroll_from(&self, from: Option<&Coordinates>, x_offset: i64, y_offset: i64)
        -> Result<()>;

    async fn double_tap(&self, at: Option<&Coordinates>) -> Result<()>;

    async fn long_press(&self, at: Option<&Coordinates>) -> Result<()>;

    /// Scroll from wherever the finger is
    async fn scroll(&self, x_offset: i64, y_offset: i64) -> Result<()>;

    /// Flick anywhere on the screen at the given speed
    async fn flick(&self, x_speed: i64, y_speed: i64) -> Result<()>;

    /// Flick starting on `from`
    async fn flick_from(
        &self,
        from: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
        speed: i64,
    ) -> Result<()>;

    /// Set by interception proxies
    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn TouchScreen>> {
        None
    }
}
