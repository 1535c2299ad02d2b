//! Interception integration tests
//!
//! Ordering, fault propagation and listener management on a wrapped driver.

mod common;

use common::{Fixture, Recorder};
use std::sync::Arc;
use tokio_test::{assert_err, assert_ok};
use url::Url;

use webdriver_events::listener::*;
use webdriver_events::webdriver::{
    Alert, By, Navigation, Options, TargetLocator, Timeouts, WebDriver, WebElement, WrapsOriginal,
};
use webdriver_events::Error;

#[derive(Debug, thiserror::Error)]
#[error("socket closed")]
struct SocketClosed;

/// Test 1: before, delegate, after in strict order
#[tokio::test]
async fn test_close_runs_between_listeners() {
    let fixture = Fixture::new();
    let journal = fixture.journal.clone();
    let before = journal.clone();
    let after = journal.clone();

    fixture.driver.set_listener(
        BEFORE_CLOSE,
        Arc::new(move |_: &Arc<dyn WebDriver>| before.record("before close")),
    );
    fixture.driver.set_listener(
        AFTER_CLOSE,
        Arc::new(move |_: &Arc<dyn WebDriver>| after.record("after close")),
    );

    assert_ok!(fixture.driver.close().await);

    assert_eq!(
        fixture.entries(),
        vec!["before close", "driver.close", "after close"]
    );
}

/// Test 2: a struct listener works the same as a closure
#[tokio::test]
async fn test_struct_listener_before_close() {
    let fixture = Fixture::new();
    let recorder = Recorder::new(fixture.journal.clone());
    fixture.driver.set_listener(BEFORE_CLOSE, recorder);

    assert_ok!(fixture.driver.close().await);

    assert_eq!(fixture.entries(), vec!["listener close", "driver.close"]);
}

/// Test 3: after findElement sees the real element, the caller gets a proxy
#[tokio::test]
async fn test_find_element_after_gets_raw_element() {
    let fixture = Fixture::new();
    let real = fixture.element(By::id("login"), "login", "Sign in");
    let seen: Arc<parking_lot::Mutex<Option<Arc<dyn WebElement>>>> = Default::default();
    let sink = seen.clone();

    fixture.driver.set_listener(
        BEFORE_FIND_ELEMENT,
        Recorder::new(fixture.journal.clone()),
    );
    fixture.driver.set_listener(
        AFTER_FIND_ELEMENT,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  root: Option<&Arc<dyn WebElement>>,
                  _: &By,
                  element: &Arc<dyn WebElement>| {
                assert!(root.is_none());
                *sink.lock() = Some(element.clone());
            },
        ),
    );

    let found = assert_ok!(fixture.driver.find_element(&By::id("login")).await);

    let raw = seen.lock().clone().unwrap();
    assert!(Arc::ptr_eq(&raw, &real));
    assert!(!Arc::ptr_eq(&found, &real));
    let wrapper = found.as_wrapper().unwrap();
    assert!(Arc::ptr_eq(&wrapper.wrapped_original(), &real));
    assert_eq!(
        fixture.entries(),
        vec!["before findElement on driver By.id: login", "driver.findElement"]
    );
}

/// Test 4: findElements wraps every element in a fresh list
#[tokio::test]
async fn test_find_elements_wraps_each() {
    let fixture = Fixture::new();
    let first: Arc<dyn WebElement> = Arc::new(fixture.mock.element("first"));
    let second: Arc<dyn WebElement> = Arc::new(fixture.mock.element("second"));
    fixture
        .mock
        .add_elements(By::css("li"), vec![first.clone(), second.clone()]);

    let count = Arc::new(parking_lot::Mutex::new(0));
    let sink = count.clone();
    fixture.driver.set_listener(
        AFTER_FIND_ELEMENTS,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: Option<&Arc<dyn WebElement>>,
                  _: &By,
                  elements: &[Arc<dyn WebElement>]| {
                assert!(elements.iter().all(|e| e.as_wrapper().is_none()));
                *sink.lock() = elements.len();
            },
        ),
    );

    let found = assert_ok!(fixture.driver.find_elements(&By::css("li")).await);

    assert_eq!(*count.lock(), 2);
    assert_eq!(found.len(), 2);
    assert!(Arc::ptr_eq(&found[0].as_wrapper().unwrap().wrapped_original(), &first));
    assert!(Arc::ptr_eq(&found[1].as_wrapper().unwrap().wrapped_original(), &second));
}

/// Test 5: navigate-to by text and by URL both reach the same listener
#[tokio::test]
async fn test_navigate_to_text_and_url() {
    let fixture = Fixture::new();
    fixture
        .driver
        .set_listener(BEFORE_NAVIGATE_TO, Recorder::new(fixture.journal.clone()));

    let navigation = assert_ok!(fixture.driver.navigate());
    let file = Url::parse("file://url").unwrap();
    let url = Url::parse("https://example.com/account").unwrap();
    assert_ok!(navigation.to("url").await);
    assert_ok!(navigation.to_url(&file).await);
    assert_ok!(navigation.to_url(&url).await);

    assert_eq!(
        fixture.entries(),
        vec![
            "driver.navigate",
            "navigate to url",
            "navigation.to",
            "navigate to file://url",
            "navigation.to",
            "navigate to https://example.com/account",
            "navigation.to",
        ]
    );
    assert_eq!(
        fixture.mock.mock_navigation().visited(),
        vec!["url", "file://url/", "https://example.com/account"]
    );
}

/// Test 6: the caller receives the very fault the driver raised
#[tokio::test]
async fn test_fault_identity_is_preserved() {
    let fixture = Fixture::new();
    let fault = Error::other(SocketClosed);
    let original = fault.as_other().cloned().unwrap();
    fixture.mock.fail_next("getTitle", fault);

    let seen: Arc<parking_lot::Mutex<Option<Arc<dyn std::error::Error + Send + Sync>>>> =
        Default::default();
    let sink = seen.clone();
    let after_called = Arc::new(parking_lot::Mutex::new(false));
    let after_sink = after_called.clone();

    fixture.driver.set_listener(
        AFTER_GET_TITLE,
        Arc::new(move |_: &Arc<dyn WebDriver>, _: &str| *after_sink.lock() = true),
    );
    fixture.driver.set_listener(
        ON_EXCEPTION,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  receiver: Receiver<'_>,
                  operation: Operation,
                  _: &CallArgs<'_>,
                  error: &Error| {
                assert_eq!(receiver.capability(), Capability::Driver);
                assert_eq!(operation, ops::GET_TITLE);
                *sink.lock() = error.as_other().cloned();
            },
        ),
    );

    let err = assert_err!(fixture.driver.title().await);

    assert!(Arc::ptr_eq(err.as_other().unwrap(), &original));
    assert!(Arc::ptr_eq(seen.lock().as_ref().unwrap(), &original));
    assert!(!*after_called.lock());
}

/// Test 7: faults from derived objects reach the same exception listener
#[tokio::test]
async fn test_fault_on_element_reaches_exception_listener() {
    let fixture = Fixture::new();
    let element = Arc::new(fixture.mock.element("field"));
    element.fail_next("click", Error::stale_element("field"));
    fixture
        .mock
        .add_elements(By::name("q"), vec![element.clone() as Arc<dyn WebElement>]);
    fixture
        .driver
        .set_listener(ON_EXCEPTION, Recorder::new(fixture.journal.clone()));

    let found = assert_ok!(fixture.driver.find_element(&By::name("q")).await);
    let err = assert_err!(found.click().await);

    assert!(matches!(err, Error::StaleElement(_)));
    assert_eq!(
        fixture.entries(),
        vec![
            "driver.findElement",
            "field.click",
            "exception in element.click: Stale element reference: field",
        ]
    );
}

/// Test 8: removing a listener stops notifications
#[tokio::test]
async fn test_remove_listener() {
    let fixture = Fixture::new();
    let journal = fixture.journal.clone();
    fixture.driver.set_listener(
        BEFORE_GET_TITLE,
        Arc::new(move |_: &Arc<dyn WebDriver>| journal.record("before getTitle")),
    );

    assert_ok!(fixture.driver.title().await);
    fixture.driver.remove_listener(BEFORE_GET_TITLE);
    fixture.driver.remove_listener(BEFORE_GET_TITLE);
    assert_ok!(fixture.driver.title().await);

    assert_eq!(
        fixture.entries(),
        vec!["before getTitle", "driver.getTitle", "driver.getTitle"]
    );
    assert_eq!(fixture.driver.listener_count(), 0);
}

/// Test 9: registering twice keeps one listener, the last one
#[tokio::test]
async fn test_set_listener_replaces() {
    let fixture = Fixture::new();
    let first = fixture.journal.clone();
    let second = fixture.journal.clone();
    fixture.driver.set_listener(
        BEFORE_QUIT,
        Arc::new(move |_: &Arc<dyn WebDriver>| first.record("first")),
    );
    fixture.driver.set_listener(
        BEFORE_QUIT,
        Arc::new(move |_: &Arc<dyn WebDriver>| second.record("second")),
    );

    assert_ok!(fixture.driver.quit().await);

    assert_eq!(fixture.entries(), vec!["second", "driver.quit"]);
    assert_eq!(fixture.driver.listener_count(), 1);
}

/// Test 10: listeners registered after a proxy was handed out still apply
#[tokio::test]
async fn test_late_registration_reaches_existing_proxies() {
    let fixture = Fixture::new();
    fixture.element(By::id("greeting"), "greeting", "Hello");
    let element = assert_ok!(fixture.driver.find_element(&By::id("greeting")).await);

    fixture
        .driver
        .set_listener(AFTER_GET_TEXT, Recorder::new(fixture.journal.clone()));
    assert_eq!(assert_ok!(element.text().await), "Hello");

    assert_eq!(
        fixture.entries(),
        vec!["driver.findElement", "greeting.getText", "element text Hello"]
    );
}

/// Test 11: every wrapped capability exposes the exact object it wraps
#[tokio::test]
async fn test_wrapped_original_round_trip() {
    let fixture = Fixture::new();
    let original: Arc<dyn WebDriver> = fixture.mock.clone();

    let wrapper = fixture.driver.as_wrapper().unwrap();
    assert!(Arc::ptr_eq(&wrapper.wrapped_original(), &original));
    assert!(Arc::ptr_eq(&fixture.driver.wrapped_original(), &original));
    assert!(original.as_wrapper().is_none());

    let navigation = assert_ok!(fixture.driver.navigate());
    let real_navigation: Arc<dyn Navigation> = fixture.mock.mock_navigation();
    assert!(Arc::ptr_eq(
        &navigation.as_wrapper().unwrap().wrapped_original(),
        &real_navigation
    ));

    let options = assert_ok!(fixture.driver.manage());
    let real_options: Arc<dyn Options> = fixture.mock.mock_options();
    assert!(Arc::ptr_eq(
        &options.as_wrapper().unwrap().wrapped_original(),
        &real_options
    ));

    let timeouts = assert_ok!(options.timeouts());
    let real_timeouts: Arc<dyn Timeouts> = fixture.mock.mock_options().mock_timeouts();
    assert!(Arc::ptr_eq(
        &timeouts.as_wrapper().unwrap().wrapped_original(),
        &real_timeouts
    ));

    let locator = assert_ok!(fixture.driver.switch_to());
    let real_locator: Arc<dyn TargetLocator> = fixture.mock.mock_target_locator();
    assert!(Arc::ptr_eq(
        &locator.as_wrapper().unwrap().wrapped_original(),
        &real_locator
    ));

    let alert = assert_ok!(locator.alert().await);
    let real_alert: Arc<dyn Alert> = fixture.mock.mock_target_locator().mock_alert();
    assert!(Arc::ptr_eq(
        &alert.as_wrapper().unwrap().wrapped_original(),
        &real_alert
    ));
}

/// Test 12: no listeners means plain delegation
#[tokio::test]
async fn test_unlistened_calls_delegate() {
    let fixture = Fixture::new();
    fixture.mock.set_title("Dashboard");

    assert_ok!(fixture.driver.get("https://example.com").await);
    assert_eq!(assert_ok!(fixture.driver.title().await), "Dashboard");
    assert_eq!(
        assert_ok!(fixture.driver.current_url().await),
        "https://example.com"
    );
    assert_eq!(
        fixture.entries(),
        vec!["driver.get", "driver.getTitle", "driver.getCurrentUrl"]
    );
}

/// Test 13: the navigation proxy reports its real receiver
#[tokio::test]
async fn test_navigation_listener_gets_real_receiver() {
    let fixture = Fixture::new();
    let real: Arc<dyn Navigation> = fixture.mock.mock_navigation();
    let seen: Arc<parking_lot::Mutex<Option<Arc<dyn Navigation>>>> = Default::default();
    let sink = seen.clone();
    fixture.driver.set_listener(
        BEFORE_REFRESH,
        Arc::new(move |_: &Arc<dyn WebDriver>, navigation: &Arc<dyn Navigation>| {
            *sink.lock() = Some(navigation.clone());
        }),
    );

    let navigation = assert_ok!(fixture.driver.navigate());
    assert_ok!(navigation.refresh().await);

    assert!(Arc::ptr_eq(seen.lock().as_ref().unwrap(), &real));
}

/// Test 14: a failing close notifies the exception listener once and re-raises the same fault
#[tokio::test]
async fn test_close_fault_reaches_listener_once() {
    let fixture = Fixture::new();
    let fault = Error::other(SocketClosed);
    let original = fault.as_other().cloned().unwrap();
    fixture.mock.fail_next("close", fault);

    let seen: Arc<parking_lot::Mutex<Vec<Arc<dyn std::error::Error + Send + Sync>>>> =
        Default::default();
    let sink = seen.clone();
    let journal = fixture.journal.clone();
    fixture.driver.set_listener(
        AFTER_CLOSE,
        Arc::new(move |_: &Arc<dyn WebDriver>| journal.record("after close")),
    );
    fixture.driver.set_listener(
        ON_EXCEPTION,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: Receiver<'_>,
                  operation: Operation,
                  _: &CallArgs<'_>,
                  error: &Error| {
                assert_eq!(operation, ops::CLOSE);
                sink.lock().extend(error.as_other().cloned());
            },
        ),
    );

    let err = assert_err!(fixture.driver.close().await);

    assert!(Arc::ptr_eq(err.as_other().unwrap(), &original));
    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert!(Arc::ptr_eq(&seen[0], &original));
    assert_eq!(fixture.entries(), vec!["driver.close"]);
}

/// Test 15: a panicking before-listener stops the call before it reaches the driver
#[tokio::test]
async fn test_before_listener_panic_skips_delegate() {
    let fixture = Fixture::new();
    fixture.driver.set_listener(
        BEFORE_CLOSE,
        Arc::new(|_: &Arc<dyn WebDriver>| {
            panic!("listener refused close");
        }),
    );
    fixture
        .driver
        .set_listener(ON_EXCEPTION, Recorder::new(fixture.journal.clone()));

    let driver = fixture.driver.clone();
    let outcome = tokio::spawn(async move { driver.close().await }).await;

    assert!(outcome.unwrap_err().is_panic());
    assert!(fixture.entries().is_empty());
}
