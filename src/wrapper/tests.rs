use super::*;
use crate::listener::ops;
use crate::listener::{
    CallShape, AFTER_CLOSE, AFTER_NAVIGATE, BEFORE_CLOSE, BEFORE_NAVIGATE, ON_EXCEPTION,
};
use crate::webdriver::mock::{Journal, MockDriver};
use crate::webdriver::{Navigation, WebDriver};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Registry entry with a fixed applicability answer
struct Probe {
    applicable: bool,
    delivered: bool,
    calls: AtomicUsize,
}

impl Probe {
    fn new(applicable: bool, delivered: bool) -> Arc<Self> {
        Arc::new(Self {
            applicable,
            delivered,
            calls: AtomicUsize::new(0),
        })
    }
}

impl EventListener for Probe {
    fn contract(&self) -> &'static str {
        "Probe"
    }

    fn is_applicable(&self, _receiver: Capability, _shape: CallShape) -> bool {
        self.applicable
    }

    fn dispatch(&self, _invocation: &Invocation<'_>) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.delivered
    }
}

fn record(journal: &Arc<Journal>, entry: &'static str) -> impl Fn(&Arc<dyn WebDriver>) {
    let journal = journal.clone();
    move |_: &Arc<dyn WebDriver>| journal.record(entry)
}

#[tokio::test]
async fn test_intercept_orders_listeners_around_delegate() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    let driver = wrap(mock);

    driver.set_listener(BEFORE_CLOSE, Arc::new(record(&journal, "before close")));
    driver.set_listener(AFTER_CLOSE, Arc::new(record(&journal, "after close")));

    driver.close().await.unwrap();

    assert_eq!(
        journal.entries(),
        vec!["before close", "driver.close", "after close"]
    );
}

#[test]
fn test_intercept_sync_orders_listeners_around_delegate() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    let driver = wrap(mock);

    driver.set_listener(BEFORE_NAVIGATE, Arc::new(record(&journal, "before navigate")));
    let sink = journal.clone();
    driver.set_listener(
        AFTER_NAVIGATE,
        Arc::new(move |_: &Arc<dyn WebDriver>, navigation: &Arc<dyn Navigation>| {
            assert!(navigation.as_wrapper().is_none());
            sink.record("after navigate");
        }),
    );

    let navigation = driver.navigate().unwrap();

    assert!(navigation.as_wrapper().is_some());
    assert_eq!(
        journal.entries(),
        vec!["before navigate", "driver.navigate", "after navigate"]
    );
}

#[tokio::test]
async fn test_fault_skips_after_listener() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    mock.fail_next("close", Error::webdriver("window already closed"));
    let driver = wrap(mock);

    driver.set_listener(AFTER_CLOSE, Arc::new(record(&journal, "after close")));
    let sink = journal.clone();
    driver.set_listener(
        ON_EXCEPTION,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: Receiver<'_>,
                  operation: Operation,
                  _: &CallArgs<'_>,
                  _: &Error| { sink.record(format!("exception in {}", operation)) },
        ),
    );

    let err = driver.close().await.unwrap_err();

    assert!(matches!(err, Error::WebDriver(ref msg) if msg == "window already closed"));
    assert_eq!(
        journal.entries(),
        vec!["driver.close", "exception in driver.close"]
    );
}

#[tokio::test]
async fn test_inapplicable_listener_is_not_dispatched() {
    let driver = wrap(MockDriver::new());
    let probe = Probe::new(false, true);
    driver
        .dispatcher()
        .listeners()
        .set_before(ops::CLOSE, probe.clone());

    driver.close().await.unwrap();

    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_mismatched_listener_does_not_block_call() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    let driver = wrap(mock);
    let probe = Probe::new(true, false);
    driver
        .dispatcher()
        .listeners()
        .set_after(ops::CLOSE, probe.clone());

    driver.close().await.unwrap();

    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
    assert_eq!(journal.entries(), vec!["driver.close"]);
}

#[tokio::test]
async fn test_locator_keeps_root_alive() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    let driver = wrap(mock);
    let root = Arc::as_ptr(&driver) as *const ();
    let sink = journal.clone();
    driver.set_listener(
        ON_EXCEPTION,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: Receiver<'_>,
                  operation: Operation,
                  _: &CallArgs<'_>,
                  _: &Error| { sink.record(format!("exception in {}", operation)) },
        ),
    );
    let locator = driver.switch_to().unwrap();
    drop(driver);

    let switched = locator.window("main").await.ok().unwrap();

    assert_eq!(Arc::as_ptr(&switched) as *const (), root);
    assert_eq!(
        journal.entries(),
        vec!["driver.switchTo", "targetLocator.window"]
    );
}

#[test]
fn test_set_and_remove_count() {
    let driver = wrap(MockDriver::new());
    let journal = Journal::new();
    assert_eq!(driver.listener_count(), 0);

    driver.set_listener(BEFORE_CLOSE, Arc::new(record(&journal, "a")));
    driver.set_listener(BEFORE_CLOSE, Arc::new(record(&journal, "b")));
    driver.set_listener(AFTER_CLOSE, Arc::new(record(&journal, "c")));
    assert_eq!(driver.listener_count(), 2);

    driver.remove_listener(BEFORE_CLOSE);
    driver.remove_listener(BEFORE_CLOSE);
    assert_eq!(driver.listener_count(), 1);
}

#[test]
fn test_trace_dispatch_config_keeps_semantics() {
    let mock = MockDriver::new();
    let journal = mock.journal();
    let config = Config {
        label: "traced".to_string(),
        trace_dispatch: true,
        ..Config::default()
    };
    let driver = wrap_with_config(mock, config);

    driver.set_listener(BEFORE_NAVIGATE, Arc::new(record(&journal, "before navigate")));
    driver.navigate().unwrap();

    assert_eq!(journal.entries(), vec!["before navigate", "driver.navigate"]);
}
