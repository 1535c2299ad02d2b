//! Mock driver implementation for testing
//!
//! In-memory implementations of every capability. All mocks of one driver
//! append to a shared [`Journal`], so a test can assert the exact order in
//! which listeners and the underlying driver were reached. Any operation
//! can be made to fail once with [`Faults`].

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Weak};
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use super::traits::{
    Alert, ImeHandler, Keyboard, Logs, Mouse, Navigation, Options, TargetLocator, Timeouts,
    TouchScreen, WebDriver, WebElement, Window,
};
use super::types::{
    By, Coordinates, Cookie, Credentials, Dimension, LogEntries, LogEntry, OutputType, Point,
    Rectangle, Screenshot, ScriptValue,
};
use crate::{Error, Result};

/// Minimal 1x1 PNG returned by screenshot calls
const PNG_STUB: [u8; 33] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
    0x00, 0x00, 0x00, 0x0D, // IHDR length
    0x49, 0x48, 0x44, 0x52, // IHDR
    0x00, 0x00, 0x00, 0x01, // Width: 1
    0x00, 0x00, 0x00, 0x01, // Height: 1
    0x08, 0x02, 0x00, 0x00, 0x00, // Bit depth: 8, Color type: 2 (RGB)
    0x90, 0x77, 0x53, 0xDE, // CRC
];

/// Ordered record of everything that happened during a test
#[derive(Debug, Default)]
pub struct Journal {
    entries: Mutex<Vec<String>>,
}

impl Journal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record<S: Into<String>>(&self, entry: S) {
        self.entries.lock().push(entry.into());
    }

    /// Snapshot of the entries so far
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of entries equal to `entry`
    pub fn count(&self, entry: &str) -> usize {
        self.entries.lock().iter().filter(|e| *e == entry).count()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// One-shot faults keyed by operation name
#[derive(Debug, Default)]
pub struct Faults {
    pending: Mutex<HashMap<String, Error>>,
}

impl Faults {
    /// Make the next call of `operation` fail with `error`
    pub fn inject<S: Into<String>>(&self, operation: S, error: Error) {
        self.pending.lock().insert(operation.into(), error);
    }

    fn take(&self, operation: &str) -> Result<()> {
        match self.pending.lock().remove(operation) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Journal entry prefix plus fault table of one mock object
#[derive(Debug)]
struct Recorder {
    name: String,
    journal: Arc<Journal>,
    faults: Faults,
}

impl Recorder {
    fn new<S: Into<String>>(journal: Arc<Journal>, name: S) -> Self {
        Self {
            name: name.into(),
            journal,
            faults: Faults::default(),
        }
    }

    /// Journal `operation` and fail if a fault was injected for it
    fn call(&self, operation: &str) -> Result<()> {
        self.journal.record(format!("{}.{}", self.name, operation));
        self.faults.take(operation)
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Mock driver
pub struct MockDriver {
    recorder: Recorder,
    url: Mutex<String>,
    title: Mutex<String>,
    page_source: Mutex<String>,
    handles: Mutex<Vec<String>>,
    elements: Mutex<HashMap<By, Vec<Arc<dyn WebElement>>>>,
    script_results: Mutex<VecDeque<ScriptValue>>,
    script_args: Mutex<Vec<ScriptValue>>,
    navigation: Arc<MockNavigation>,
    target_locator: Arc<MockTargetLocator>,
    options: Arc<MockOptions>,
    keyboard: Arc<MockKeyboard>,
    mouse: Arc<MockMouse>,
    touch: Arc<MockTouchScreen>,
}

impl MockDriver {
    /// Create a new mock driver with its own journal
    pub fn new() -> Arc<Self> {
        Self::with_journal(Journal::new())
    }

    /// Create a new mock driver recording into `journal`
    pub fn with_journal(journal: Arc<Journal>) -> Arc<Self> {
        Arc::new_cyclic(|this: &Weak<MockDriver>| Self {
            recorder: Recorder::new(journal.clone(), "driver"),
            url: Mutex::new("about:blank".to_string()),
            title: Mutex::new(String::new()),
            page_source: Mutex::new(String::new()),
            handles: Mutex::new(vec![Uuid::new_v4().to_string()]),
            elements: Mutex::new(HashMap::new()),
            script_results: Mutex::new(VecDeque::new()),
            script_args: Mutex::new(Vec::new()),
            navigation: Arc::new(MockNavigation::new(journal.clone())),
            target_locator: Arc::new(MockTargetLocator::new(journal.clone(), this.clone())),
            options: Arc::new(MockOptions::new(journal.clone())),
            keyboard: Arc::new(MockKeyboard::new(journal.clone())),
            mouse: Arc::new(MockMouse::new(journal.clone())),
            touch: Arc::new(MockTouchScreen::new(journal)),
        })
    }

    pub fn journal(&self) -> Arc<Journal> {
        self.recorder.journal.clone()
    }

    /// Make the next call of `operation` on the driver fail
    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    /// New element sharing this driver's journal
    pub fn element<S: Into<String>>(&self, name: S) -> MockElement {
        MockElement::new(self.journal(), name)
    }

    /// Elements returned for `by`, in order
    pub fn add_elements(&self, by: By, elements: Vec<Arc<dyn WebElement>>) {
        self.elements.lock().entry(by).or_default().extend(elements);
    }

    pub fn set_title<S: Into<String>>(&self, title: S) {
        *self.title.lock() = title.into();
    }

    pub fn set_page_source<S: Into<String>>(&self, source: S) {
        *self.page_source.lock() = source.into();
    }

    /// Add a window handle; the first handle is the current window
    pub fn add_window_handle<S: Into<String>>(&self, handle: S) {
        self.handles.lock().push(handle.into());
    }

    /// Queue the result of the next script execution
    pub fn push_script_result(&self, value: ScriptValue) {
        self.script_results.lock().push_back(value);
    }

    /// Arguments the last executed script received
    pub fn last_script_args(&self) -> Vec<ScriptValue> {
        self.script_args.lock().clone()
    }

    pub fn mock_navigation(&self) -> Arc<MockNavigation> {
        self.navigation.clone()
    }

    pub fn mock_target_locator(&self) -> Arc<MockTargetLocator> {
        self.target_locator.clone()
    }

    pub fn mock_options(&self) -> Arc<MockOptions> {
        self.options.clone()
    }

    pub fn mock_keyboard(&self) -> Arc<MockKeyboard> {
        self.keyboard.clone()
    }

    pub fn mock_mouse(&self) -> Arc<MockMouse> {
        self.mouse.clone()
    }

    pub fn mock_touch(&self) -> Arc<MockTouchScreen> {
        self.touch.clone()
    }

    fn run_script(&self, args: &[ScriptValue]) -> ScriptValue {
        *self.script_args.lock() = args.to_vec();
        self.script_results
            .lock()
            .pop_front()
            .unwrap_or(ScriptValue::Null)
    }
}

fn first_match(
    elements: &Mutex<HashMap<By, Vec<Arc<dyn WebElement>>>>,
    by: &By,
) -> Result<Arc<dyn WebElement>> {
    elements
        .lock()
        .get(by)
        .and_then(|found| found.first().cloned())
        .ok_or_else(|| Error::no_such_element(by.to_string()))
}

fn all_matches(
    elements: &Mutex<HashMap<By, Vec<Arc<dyn WebElement>>>>,
    by: &By,
) -> Vec<Arc<dyn WebElement>> {
    elements.lock().get(by).cloned().unwrap_or_default()
}

#[async_trait]
impl WebDriver for MockDriver {
    async fn get(&self, url: &str) -> Result<()> {
        self.recorder.call("get")?;
        *self.url.lock() = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        self.recorder.call("getCurrentUrl")?;
        Ok(self.url.lock().clone())
    }

    async fn page_source(&self) -> Result<String> {
        self.recorder.call("getPageSource")?;
        Ok(self.page_source.lock().clone())
    }

    async fn title(&self) -> Result<String> {
        self.recorder.call("getTitle")?;
        Ok(self.title.lock().clone())
    }

    async fn window_handle(&self) -> Result<String> {
        self.recorder.call("getWindowHandle")?;
        self.handles
            .lock()
            .first()
            .cloned()
            .ok_or_else(|| Error::no_such_window("no open window"))
    }

    async fn window_handles(&self) -> Result<Vec<String>> {
        self.recorder.call("getWindowHandles")?;
        Ok(self.handles.lock().clone())
    }

    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>> {
        self.recorder.call("findElement")?;
        first_match(&self.elements, by)
    }

    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>> {
        self.recorder.call("findElements")?;
        Ok(all_matches(&self.elements, by))
    }

    async fn close(&self) -> Result<()> {
        self.recorder.call("close")
    }

    async fn quit(&self) -> Result<()> {
        self.recorder.call("quit")
    }

    fn navigate(&self) -> Result<Arc<dyn Navigation>> {
        self.recorder.call("navigate")?;
        Ok(self.navigation.clone())
    }

    fn switch_to(&self) -> Result<Arc<dyn TargetLocator>> {
        self.recorder.call("switchTo")?;
        Ok(self.target_locator.clone())
    }

    fn manage(&self) -> Result<Arc<dyn Options>> {
        self.recorder.call("manage")?;
        Ok(self.options.clone())
    }

    fn keyboard(&self) -> Result<Arc<dyn Keyboard>> {
        self.recorder.call("getKeyboard")?;
        Ok(self.keyboard.clone())
    }

    fn mouse(&self) -> Result<Arc<dyn Mouse>> {
        self.recorder.call("getMouse")?;
        Ok(self.mouse.clone())
    }

    fn touch(&self) -> Result<Arc<dyn TouchScreen>> {
        self.recorder.call("getTouch")?;
        Ok(self.touch.clone())
    }

    async fn execute_script(&self, _script: &str, args: &[ScriptValue]) -> Result<ScriptValue> {
        self.recorder.call("executeScript")?;
        Ok(self.run_script(args))
    }

    async fn execute_async_script(
        &self,
        _script: &str,
        args: &[ScriptValue],
    ) -> Result<ScriptValue> {
        self.recorder.call("executeAsyncScript")?;
        Ok(self.run_script(args))
    }

    async fn screenshot_as(&self, output: OutputType) -> Result<Screenshot> {
        self.recorder.call("getScreenshotAs")?;
        Ok(Screenshot::encode(PNG_STUB.to_vec(), output))
    }
}

// ============================================================================
// Element
// ============================================================================

/// Mock element
pub struct MockElement {
    recorder: Recorder,
    tag_name: String,
    text: String,
    attributes: HashMap<String, String>,
    css: HashMap<String, String>,
    rect: Rectangle,
    displayed: bool,
    enabled: bool,
    selected: Mutex<bool>,
    value: Mutex<String>,
    children: Mutex<HashMap<By, Vec<Arc<dyn WebElement>>>>,
}

impl MockElement {
    /// Create a new mock element; journal entries are prefixed with `name`
    pub fn new<S: Into<String>>(journal: Arc<Journal>, name: S) -> Self {
        Self {
            recorder: Recorder::new(journal, name),
            tag_name: "div".to_string(),
            text: String::new(),
            attributes: HashMap::new(),
            css: HashMap::new(),
            rect: Rectangle::new(Point::new(0, 0), Dimension::new(100, 100)),
            displayed: true,
            enabled: true,
            selected: Mutex::new(false),
            value: Mutex::new(String::new()),
            children: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_tag<S: Into<String>>(mut self, tag_name: S) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_css<K: Into<String>, V: Into<String>>(mut self, property: K, value: V) -> Self {
        self.css.insert(property.into(), value.into());
        self
    }

    pub fn with_rect(mut self, rect: Rectangle) -> Self {
        self.rect = rect;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.displayed = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Descendants returned for `by`
    pub fn add_children(&self, by: By, children: Vec<Arc<dyn WebElement>>) {
        self.children.lock().entry(by).or_default().extend(children);
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    /// Text typed so far
    pub fn typed(&self) -> String {
        self.value.lock().clone()
    }
}

#[async_trait]
impl WebElement for MockElement {
    async fn click(&self) -> Result<()> {
        self.recorder.call("click")?;
        if self.tag_name == "input" || self.tag_name == "option" {
            let mut selected = self.selected.lock();
            *selected = !*selected;
        }
        Ok(())
    }

    async fn submit(&self) -> Result<()> {
        self.recorder.call("submit")
    }

    async fn clear(&self) -> Result<()> {
        self.recorder.call("clear")?;
        self.value.lock().clear();
        Ok(())
    }

    async fn send_keys(&self, keys: &str) -> Result<()> {
        self.recorder.call("sendKeys")?;
        self.value.lock().push_str(keys);
        Ok(())
    }

    async fn tag_name(&self) -> Result<String> {
        self.recorder.call("getTagName")?;
        Ok(self.tag_name.clone())
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.recorder.call("getAttribute")?;
        Ok(self.attributes.get(name).cloned())
    }

    async fn is_selected(&self) -> Result<bool> {
        self.recorder.call("isSelected")?;
        Ok(*self.selected.lock())
    }

    async fn is_enabled(&self) -> Result<bool> {
        self.recorder.call("isEnabled")?;
        Ok(self.enabled)
    }

    async fn is_displayed(&self) -> Result<bool> {
        self.recorder.call("isDisplayed")?;
        Ok(self.displayed)
    }

    async fn text(&self) -> Result<String> {
        self.recorder.call("getText")?;
        Ok(self.text.clone())
    }

    async fn css_value(&self, property: &str) -> Result<String> {
        self.recorder.call("getCssValue")?;
        Ok(self.css.get(property).cloned().unwrap_or_default())
    }

    async fn location(&self) -> Result<Point> {
        self.recorder.call("getLocation")?;
        Ok(self.rect.point())
    }

    async fn size(&self) -> Result<Dimension> {
        self.recorder.call("getSize")?;
        Ok(self.rect.dimension())
    }

    async fn rect(&self) -> Result<Rectangle> {
        self.recorder.call("getRect")?;
        Ok(self.rect)
    }

    async fn coordinates(&self) -> Result<Coordinates> {
        self.recorder.call("getCoordinates")?;
        Ok(Coordinates {
            on_page: self.rect.point(),
            in_viewport: self.rect.point(),
            auxiliary: Some(self.recorder.name.clone()),
        })
    }

    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>> {
        self.recorder.call("findElement")?;
        first_match(&self.children, by)
    }

    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>> {
        self.recorder.call("findElements")?;
        Ok(all_matches(&self.children, by))
    }

    async fn screenshot_as(&self, output: OutputType) -> Result<Screenshot> {
        self.recorder.call("getScreenshotAs")?;
        Ok(Screenshot::encode(PNG_STUB.to_vec(), output))
    }
}

// ============================================================================
// Navigation and target locator
// ============================================================================

/// Mock navigation
pub struct MockNavigation {
    recorder: Recorder,
    visited: Mutex<Vec<String>>,
}

impl MockNavigation {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "navigation"),
            visited: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    /// URLs passed to `to`/`to_url`, in order
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().clone()
    }
}

#[async_trait]
impl Navigation for MockNavigation {
    async fn back(&self) -> Result<()> {
        self.recorder.call("back")
    }

    async fn forward(&self) -> Result<()> {
        self.recorder.call("forward")
    }

    async fn to(&self, url: &str) -> Result<()> {
        self.recorder.call("to")?;
        self.visited.lock().push(url.to_string());
        Ok(())
    }

    async fn to_url(&self, url: &Url) -> Result<()> {
        self.recorder.call("to")?;
        self.visited.lock().push(url.to_string());
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        self.recorder.call("refresh")
    }
}

/// Mock target locator
pub struct MockTargetLocator {
    recorder: Recorder,
    driver: Weak<MockDriver>,
    active: Mutex<Option<Arc<dyn WebElement>>>,
    alert: Arc<MockAlert>,
}

impl MockTargetLocator {
    pub fn new(journal: Arc<Journal>, driver: Weak<MockDriver>) -> Self {
        Self {
            recorder: Recorder::new(journal.clone(), "targetLocator"),
            driver,
            active: Mutex::new(None),
            alert: Arc::new(MockAlert::new(journal, "")),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    pub fn set_active_element(&self, element: Arc<dyn WebElement>) {
        *self.active.lock() = Some(element);
    }

    pub fn mock_alert(&self) -> Arc<MockAlert> {
        self.alert.clone()
    }

    fn driver(&self) -> Result<Arc<dyn WebDriver>> {
        self.driver
            .upgrade()
            .map(|driver| driver as Arc<dyn WebDriver>)
            .ok_or_else(|| Error::internal("mock driver dropped"))
    }
}

#[async_trait]
impl TargetLocator for MockTargetLocator {
    async fn frame_index(&self, _index: usize) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("frame")?;
        self.driver()
    }

    async fn frame_name(&self, _name_or_id: &str) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("frame")?;
        self.driver()
    }

    async fn frame_element(&self, _frame: &Arc<dyn WebElement>) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("frame")?;
        self.driver()
    }

    async fn parent_frame(&self) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("parentFrame")?;
        self.driver()
    }

    async fn window(&self, _name_or_handle: &str) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("window")?;
        self.driver()
    }

    async fn default_content(&self) -> Result<Arc<dyn WebDriver>> {
        self.recorder.call("defaultContent")?;
        self.driver()
    }

    async fn active_element(&self) -> Result<Arc<dyn WebElement>> {
        self.recorder.call("activeElement")?;
        self.active
            .lock()
            .clone()
            .ok_or_else(|| Error::no_such_element("no focused element"))
    }

    async fn alert(&self) -> Result<Arc<dyn Alert>> {
        self.recorder.call("alert")?;
        Ok(self.alert.clone())
    }
}

// ============================================================================
// Alert
// ============================================================================

/// Mock alert
pub struct MockAlert {
    recorder: Recorder,
    text: Mutex<String>,
    typed: Mutex<Vec<String>>,
    credentials: Mutex<Option<Credentials>>,
}

impl MockAlert {
    pub fn new<S: Into<String>>(journal: Arc<Journal>, text: S) -> Self {
        Self {
            recorder: Recorder::new(journal, "alert"),
            text: Mutex::new(text.into()),
            typed: Mutex::new(Vec::new()),
            credentials: Mutex::new(None),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    pub fn set_text<S: Into<String>>(&self, text: S) {
        *self.text.lock() = text.into();
    }

    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials.lock().clone()
    }
}

#[async_trait]
impl Alert for MockAlert {
    async fn dismiss(&self) -> Result<()> {
        self.recorder.call("dismiss")
    }

    async fn accept(&self) -> Result<()> {
        self.recorder.call("accept")
    }

    async fn text(&self) -> Result<String> {
        self.recorder.call("getText")?;
        Ok(self.text.lock().clone())
    }

    async fn send_keys(&self, keys: &str) -> Result<()> {
        self.recorder.call("sendKeys")?;
        self.typed.lock().push(keys.to_string());
        Ok(())
    }

    async fn authenticate_using(&self, credentials: &Credentials) -> Result<()> {
        self.recorder.call("authenticateUsing")?;
        *self.credentials.lock() = Some(credentials.clone());
        Ok(())
    }

    async fn set_credentials(&self, credentials: &Credentials) -> Result<()> {
        self.recorder.call("setCredentials")?;
        *self.credentials.lock() = Some(credentials.clone());
        Ok(())
    }
}

// ============================================================================
// Options and their sub-capabilities
// ============================================================================

/// Mock options
pub struct MockOptions {
    recorder: Recorder,
    cookies: Mutex<Vec<Cookie>>,
    timeouts: Arc<MockTimeouts>,
    ime: Arc<MockImeHandler>,
    window: Arc<MockWindow>,
    logs: Arc<MockLogs>,
}

impl MockOptions {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal.clone(), "options"),
            cookies: Mutex::new(Vec::new()),
            timeouts: Arc::new(MockTimeouts::new(journal.clone())),
            ime: Arc::new(MockImeHandler::new(journal.clone())),
            window: Arc::new(MockWindow::new(journal.clone())),
            logs: Arc::new(MockLogs::new(journal)),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    pub fn mock_timeouts(&self) -> Arc<MockTimeouts> {
        self.timeouts.clone()
    }

    pub fn mock_ime(&self) -> Arc<MockImeHandler> {
        self.ime.clone()
    }

    pub fn mock_window(&self) -> Arc<MockWindow> {
        self.window.clone()
    }

    pub fn mock_logs(&self) -> Arc<MockLogs> {
        self.logs.clone()
    }
}

#[async_trait]
impl Options for MockOptions {
    async fn add_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.recorder.call("addCookie")?;
        let mut cookies = self.cookies.lock();
        cookies.retain(|c| c.name != cookie.name);
        cookies.push(cookie.clone());
        Ok(())
    }

    async fn delete_cookie_named(&self, name: &str) -> Result<()> {
        self.recorder.call("deleteCookieNamed")?;
        self.cookies.lock().retain(|c| c.name != name);
        Ok(())
    }

    async fn delete_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.recorder.call("deleteCookie")?;
        self.cookies.lock().retain(|c| c.name != cookie.name);
        Ok(())
    }

    async fn delete_all_cookies(&self) -> Result<()> {
        self.recorder.call("deleteAllCookies")?;
        self.cookies.lock().clear();
        Ok(())
    }

    async fn cookies(&self) -> Result<Vec<Cookie>> {
        self.recorder.call("getCookies")?;
        Ok(self.cookies.lock().clone())
    }

    async fn cookie_named(&self, name: &str) -> Result<Option<Cookie>> {
        self.recorder.call("getCookieNamed")?;
        Ok(self.cookies.lock().iter().find(|c| c.name == name).cloned())
    }

    fn timeouts(&self) -> Result<Arc<dyn Timeouts>> {
        self.recorder.call("timeouts")?;
        Ok(self.timeouts.clone())
    }

    fn ime(&self) -> Result<Arc<dyn ImeHandler>> {
        self.recorder.call("ime")?;
        Ok(self.ime.clone())
    }

    fn window(&self) -> Result<Arc<dyn Window>> {
        self.recorder.call("window")?;
        Ok(self.window.clone())
    }

    fn logs(&self) -> Result<Arc<dyn Logs>> {
        self.recorder.call("logs")?;
        Ok(self.logs.clone())
    }
}

/// Mock timeouts
pub struct MockTimeouts {
    recorder: Recorder,
    implicit_wait: Mutex<Option<Duration>>,
    script_timeout: Mutex<Option<Duration>>,
    page_load_timeout: Mutex<Option<Duration>>,
}

impl MockTimeouts {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "timeouts"),
            implicit_wait: Mutex::new(None),
            script_timeout: Mutex::new(None),
            page_load_timeout: Mutex::new(None),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    pub fn current_implicit_wait(&self) -> Option<Duration> {
        *self.implicit_wait.lock()
    }

    pub fn current_script_timeout(&self) -> Option<Duration> {
        *self.script_timeout.lock()
    }

    pub fn current_page_load_timeout(&self) -> Option<Duration> {
        *self.page_load_timeout.lock()
    }
}

#[async_trait]
impl Timeouts for MockTimeouts {
    async fn implicitly_wait(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.recorder.call("implicitlyWait")?;
        *self.implicit_wait.lock() = Some(timeout);
        Ok(self)
    }

    async fn set_script_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.recorder.call("setScriptTimeout")?;
        *self.script_timeout.lock() = Some(timeout);
        Ok(self)
    }

    async fn page_load_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.recorder.call("pageLoadTimeout")?;
        *self.page_load_timeout.lock() = Some(timeout);
        Ok(self)
    }
}

/// Mock input method editor
pub struct MockImeHandler {
    recorder: Recorder,
    engines: Vec<String>,
    active: Mutex<Option<String>>,
}

impl MockImeHandler {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "ime"),
            engines: vec!["mozc".to_string(), "anthy".to_string()],
            active: Mutex::new(None),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }
}

#[async_trait]
impl ImeHandler for MockImeHandler {
    async fn available_engines(&self) -> Result<Vec<String>> {
        self.recorder.call("getAvailableEngines")?;
        Ok(self.engines.clone())
    }

    async fn active_engine(&self) -> Result<String> {
        self.recorder.call("getActiveEngine")?;
        Ok(self.active.lock().clone().unwrap_or_default())
    }

    async fn is_activated(&self) -> Result<bool> {
        self.recorder.call("isActivated")?;
        Ok(self.active.lock().is_some())
    }

    async fn deactivate(&self) -> Result<()> {
        self.recorder.call("deactivate")?;
        *self.active.lock() = None;
        Ok(())
    }

    async fn activate_engine(&self, engine: &str) -> Result<()> {
        self.recorder.call("activateEngine")?;
        if !self.engines.iter().any(|e| e == engine) {
            return Err(Error::invalid_argument(format!("unknown engine {}", engine)));
        }
        *self.active.lock() = Some(engine.to_string());
        Ok(())
    }
}

/// Mock window
pub struct MockWindow {
    recorder: Recorder,
    size: Mutex<Dimension>,
    position: Mutex<Point>,
}

impl MockWindow {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "window"),
            size: Mutex::new(Dimension::new(1920, 1080)),
            position: Mutex::new(Point::new(0, 0)),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }
}

#[async_trait]
impl Window for MockWindow {
    async fn set_size(&self, size: Dimension) -> Result<()> {
        self.recorder.call("setSize")?;
        *self.size.lock() = size;
        Ok(())
    }

    async fn set_position(&self, position: Point) -> Result<()> {
        self.recorder.call("setPosition")?;
        *self.position.lock() = position;
        Ok(())
    }

    async fn size(&self) -> Result<Dimension> {
        self.recorder.call("getSize")?;
        Ok(*self.size.lock())
    }

    async fn position(&self) -> Result<Point> {
        self.recorder.call("getPosition")?;
        Ok(*self.position.lock())
    }

    async fn maximize(&self) -> Result<()> {
        self.recorder.call("maximize")
    }

    async fn fullscreen(&self) -> Result<()> {
        self.recorder.call("fullscreen")
    }
}

/// Mock logs
pub struct MockLogs {
    recorder: Recorder,
    entries: Mutex<HashMap<String, Vec<LogEntry>>>,
}

impl MockLogs {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "logs"),
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    pub fn push<S: Into<String>>(&self, log_type: S, entry: LogEntry) {
        self.entries
            .lock()
            .entry(log_type.into())
            .or_default()
            .push(entry);
    }
}

#[async_trait]
impl Logs for MockLogs {
    async fn get(&self, log_type: &str) -> Result<LogEntries> {
        self.recorder.call("get")?;
        let drained = self.entries.lock().remove(log_type).unwrap_or_default();
        Ok(LogEntries::new(drained))
    }

    async fn available_log_types(&self) -> Result<Vec<String>> {
        self.recorder.call("getAvailableLogTypes")?;
        let mut types: Vec<String> = self.entries.lock().keys().cloned().collect();
        types.sort();
        Ok(types)
    }
}

// ============================================================================
// Input devices
// ============================================================================

/// Mock keyboard
pub struct MockKeyboard {
    recorder: Recorder,
    pressed: Mutex<Vec<String>>,
}

impl MockKeyboard {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "keyboard"),
            pressed: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }

    /// Keys currently held down
    pub fn pressed(&self) -> Vec<String> {
        self.pressed.lock().clone()
    }
}

#[async_trait]
impl Keyboard for MockKeyboard {
    async fn send_keys(&self, _keys: &str) -> Result<()> {
        self.recorder.call("sendKeys")
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        self.recorder.call("pressKey")?;
        self.pressed.lock().push(key.to_string());
        Ok(())
    }

    async fn release_key(&self, key: &str) -> Result<()> {
        self.recorder.call("releaseKey")?;
        self.pressed.lock().retain(|k| k != key);
        Ok(())
    }
}

/// Mock mouse
pub struct MockMouse {
    recorder: Recorder,
}

impl MockMouse {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "mouse"),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }
}

#[async_trait]
impl Mouse for MockMouse {
    async fn click(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("click")
    }

    async fn double_click(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("doubleClick")
    }

    async fn mouse_down(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("mouseDown")
    }

    async fn mouse_up(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("mouseUp")
    }

    async fn mouse_move(&self, _to: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("mouseMove")
    }

    async fn mouse_move_by(
        &self,
        _to: Option<&Coordinates>,
        _x_offset: i64,
        _y_offset: i64,
    ) -> Result<()> {
        self.recorder.call("mouseMove")
    }

    async fn context_click(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("contextClick")
    }
}

/// Mock touch screen
pub struct MockTouchScreen {
    recorder: Recorder,
}

impl MockTouchScreen {
    pub fn new(journal: Arc<Journal>) -> Self {
        Self {
            recorder: Recorder::new(journal, "touch"),
        }
    }

    pub fn fail_next<S: Into<String>>(&self, operation: S, error: Error) {
        self.recorder.faults.inject(operation, error);
    }
}

#[async_trait]
impl TouchScreen for MockTouchScreen {
    async fn single_tap(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("singleTap")
    }

    async fn down(&self, _x: i64, _y: i64) -> Result<()> {
        self.recorder.call("down")
    }

    async fn up(&self, _x: i64, _y: i64) -> Result<()> {
        self.recorder.call("up")
    }

    async fn move_to(&self, _x: i64, _y: i64) -> Result<()> {
        self.recorder.call("move")
    }

    async fn scroll_from(
        &self,
        _from: Option<&Coordinates>,
        _x_offset: i64,
        _y_offset: i64,
    ) -> Result<()> {
        self.recorder.call("scroll")
    }

    async fn double_tap(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("doubleTap")
    }

    async fn long_press(&self, _at: Option<&Coordinates>) -> Result<()> {
        self.recorder.call("longPress")
    }

    async fn scroll(&self, _x_offset: i64, _y_offset: i64) -> Result<()> {
        self.recorder.call("scroll")
    }

    async fn flick(&self, _x_speed: i64, _y_speed: i64) -> Result<()> {
        self.recorder.call("flick")
    }

    async fn flick_from(
        &self,
        _from: Option<&Coordinates>,
        _x_offset: i64,
        _y_offset: i64,
        _speed: i64,
    ) -> Result<()> {
        self.recorder.call("flick")
    }
}
