//! Common test utilities
//!
//! Shared fixtures for the integration tests: a wrapped mock driver and a
//! listener that writes every notification into the mock's journal, so a
//! single list shows listeners and driver calls in the order they happened.

#![allow(dead_code)]

use std::sync::Arc;

use webdriver_events::listener::*;
use webdriver_events::webdriver::mock::{Journal, MockDriver};
use webdriver_events::webdriver::{Alert, By, Navigation, WebDriver, WebElement};
use webdriver_events::{wrap, Error, ListenableDriver};

/// A wrapped mock driver plus handles on its internals
pub struct Fixture {
    pub mock: Arc<MockDriver>,
    pub driver: Arc<ListenableDriver>,
    pub journal: Arc<Journal>,
}

impl Fixture {
    pub fn new() -> Self {
        let mock = MockDriver::new();
        let journal = mock.journal();
        let driver = wrap(mock.clone());
        Self {
            mock,
            driver,
            journal,
        }
    }

    /// Register a real element under `by` and return it
    pub fn element(&self, by: By, name: &str, text: &str) -> Arc<dyn WebElement> {
        let element: Arc<dyn WebElement> = Arc::new(self.mock.element(name).with_text(text));
        self.mock.add_elements(by, vec![element.clone()]);
        element
    }

    pub fn entries(&self) -> Vec<String> {
        self.journal.entries()
    }
}

/// Struct listener implementing several contracts at once
pub struct Recorder {
    journal: Arc<Journal>,
}

impl Recorder {
    pub fn new(journal: Arc<Journal>) -> Arc<Self> {
        Arc::new(Self { journal })
    }
}

impl OnClose for Recorder {
    fn on_close(&self, _driver: &Arc<dyn WebDriver>) {
        self.journal.record("listener close");
    }
}

impl OnFindElementBefore for Recorder {
    fn on_find_element(
        &self,
        _driver: &Arc<dyn WebDriver>,
        root: Option<&Arc<dyn WebElement>>,
        by: &By,
    ) {
        let scope = if root.is_some() { "element" } else { "driver" };
        self.journal
            .record(format!("before findElement on {} {}", scope, by));
    }
}

impl OnNavigateTo for Recorder {
    fn on_to(&self, _driver: &Arc<dyn WebDriver>, _navigation: &Arc<dyn Navigation>, url: &str) {
        self.journal.record(format!("navigate to {}", url));
    }
}

impl OnGetTextAfter for Recorder {
    fn on_get_text(&self, _driver: &Arc<dyn WebDriver>, _element: &Arc<dyn WebElement>, text: &str) {
        self.journal.record(format!("element text {}", text));
    }
}

impl OnGetTextOfAlertAfter for Recorder {
    fn on_get_text(&self, _driver: &Arc<dyn WebDriver>, _alert: &Arc<dyn Alert>, text: &str) {
        self.journal.record(format!("alert text {}", text));
    }
}

impl OnException for Recorder {
    fn on_exception(
        &self,
        _driver: &Arc<dyn WebDriver>,
        _receiver: Receiver<'_>,
        operation: Operation,
        _args: &CallArgs<'_>,
        error: &Error,
    ) {
        self.journal
            .record(format!("exception in {}: {}", operation, error));
    }
}
