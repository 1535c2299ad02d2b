//! Wrapped object graph integration tests
//!
//! Everything reachable from a wrapped driver is itself wrapped and shares
//! the driver's listeners.

mod common;

use common::{Fixture, Recorder};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;

use webdriver_events::listener::*;
use webdriver_events::webdriver::mock::MockElement;
use webdriver_events::webdriver::{
    Alert, By, Cookie, Coordinates, Credentials, Dimension, ImeHandler, Keyboard, LogEntries,
    LogEntry, Logs, Mouse, Options, Point, ScriptValue, TargetLocator, Timeouts, TouchScreen,
    WebDriver, WebElement, Window, WrapsElement, WrapsOriginal,
};
use webdriver_events::Error;

/// Test 1: target-locator switches hand back the wrapped root driver
#[tokio::test]
async fn test_switches_return_wrapped_root() {
    let fixture = Fixture::new();
    let frame = fixture.element(By::tag_name("iframe"), "frame", "");
    let root: Arc<dyn WebDriver> = fixture.driver.clone();
    let locator = assert_ok!(fixture.driver.switch_to());

    let switched = vec![
        assert_ok!(locator.frame_index(0).await),
        assert_ok!(locator.frame_name("main").await),
        assert_ok!(locator.frame_element(&frame).await),
        assert_ok!(locator.parent_frame().await),
        assert_ok!(locator.window("popup").await),
        assert_ok!(locator.default_content().await),
    ];

    for driver in &switched {
        assert!(Arc::ptr_eq(driver, &root));
    }
}

/// Test 2: one frame listener covers every frame overload
#[tokio::test]
async fn test_frame_listener_sees_each_overload() {
    let fixture = Fixture::new();
    let frame = fixture.element(By::tag_name("iframe"), "frame", "");
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    fixture.driver.set_listener(
        BEFORE_SWITCH_TO_FRAME,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &Arc<dyn TargetLocator>, frame: FrameRef<'_>| {
                let target = match frame {
                    FrameRef::Index(index) => format!("index {}", index),
                    FrameRef::NameOrId(name) => format!("name {}", name),
                    FrameRef::Element(_) => "element".to_string(),
                };
                sink.lock().push(target);
            },
        ),
    );

    let locator = assert_ok!(fixture.driver.switch_to());
    assert_ok!(locator.frame_index(2).await);
    assert_ok!(locator.frame_name("content").await);
    assert_ok!(locator.frame_element(&frame).await);

    assert_eq!(*seen.lock(), vec!["index 2", "name content", "element"]);
}

/// Test 3: an active element that is already a proxy is not wrapped again
#[tokio::test]
async fn test_active_element_not_double_wrapped() {
    let fixture = Fixture::new();
    fixture.element(By::id("search"), "search", "");
    let proxy = assert_ok!(fixture.driver.find_element(&By::id("search")).await);
    fixture
        .mock
        .mock_target_locator()
        .set_active_element(proxy.clone());

    let locator = assert_ok!(fixture.driver.switch_to());
    let active = assert_ok!(locator.active_element().await);

    assert!(Arc::ptr_eq(&active, &proxy));
}

/// Test 4: a real active element comes back wrapped
#[tokio::test]
async fn test_active_element_wrapped() {
    let fixture = Fixture::new();
    let real: Arc<dyn WebElement> = Arc::new(fixture.mock.element("focused"));
    let journal = fixture.journal.clone();
    fixture
        .mock
        .mock_target_locator()
        .set_active_element(real.clone());
    fixture
        .driver
        .set_listener(AFTER_CLICK, Arc::new(move |_: &Arc<dyn WebDriver>, _: &Arc<dyn WebElement>| {
            journal.record("after click")
        }));

    let locator = assert_ok!(fixture.driver.switch_to());
    let active = assert_ok!(locator.active_element().await);
    assert_ok!(active.click().await);

    let wrapper = active.as_wrapper().unwrap();
    assert!(Arc::ptr_eq(&wrapper.wrapped_original(), &real));
    let original: Arc<dyn WebDriver> = fixture.mock.clone();
    assert!(Arc::ptr_eq(&wrapper.wrapped_driver(), &original));
    assert_eq!(
        fixture.entries(),
        vec![
            "driver.switchTo",
            "targetLocator.activeElement",
            "focused.click",
            "after click",
        ]
    );
}

/// Test 5: alert and element getText are independent listener points
#[tokio::test]
async fn test_alert_and_element_text_are_distinct() {
    let fixture = Fixture::new();
    fixture.element(By::id("title"), "title", "Welcome");
    fixture
        .mock
        .mock_target_locator()
        .mock_alert()
        .set_text("Are you sure?");

    let recorder = Recorder::new(fixture.journal.clone());
    fixture
        .driver
        .set_listener(AFTER_GET_TEXT_OF_ALERT, recorder.clone());

    let element = assert_ok!(fixture.driver.find_element(&By::id("title")).await);
    assert_ok!(element.text().await);
    let alert = assert_ok!(assert_ok!(fixture.driver.switch_to()).alert().await);
    assert_eq!(assert_ok!(alert.text().await), "Are you sure?");

    fixture.driver.set_listener(AFTER_GET_TEXT, recorder);
    assert_ok!(element.text().await);

    assert_eq!(
        fixture.entries(),
        vec![
            "driver.findElement",
            "title.getText",
            "driver.switchTo",
            "targetLocator.alert",
            "alert.getText",
            "alert text Are you sure?",
            "title.getText",
            "element text Welcome",
        ]
    );
}

/// Test 6: alert credentials reach both listener and driver
#[tokio::test]
async fn test_alert_credentials() {
    let fixture = Fixture::new();
    let users = Arc::new(Mutex::new(Vec::new()));
    let sink = users.clone();
    fixture.driver.set_listener(
        BEFORE_AUTHENTICATE_USING,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &Arc<dyn Alert>, credentials: &Credentials| {
                sink.lock().push(credentials.username.clone());
            },
        ),
    );

    let alert = assert_ok!(assert_ok!(fixture.driver.switch_to()).alert().await);
    assert_ok!(alert.authenticate_using(&Credentials::new("admin", "secret")).await);

    assert_eq!(*users.lock(), vec!["admin"]);
    let stored = fixture.mock.mock_target_locator().mock_alert().credentials();
    assert_eq!(stored.unwrap().username, "admin");
}

/// Test 7: timeouts setters return the proxy they were called on
#[tokio::test]
async fn test_timeouts_chain_returns_same_proxy() {
    let fixture = Fixture::new();
    let waits = Arc::new(Mutex::new(Vec::new()));
    let sink = waits.clone();
    fixture.driver.set_listener(
        AFTER_IMPLICITLY_WAIT,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, timeouts: &Arc<dyn Timeouts>, timeout: Duration| {
                assert!(timeouts.as_wrapper().is_none());
                sink.lock().push(timeout);
            },
        ),
    );

    let options = assert_ok!(fixture.driver.manage());
    let timeouts = assert_ok!(options.timeouts());
    let chained = assert_ok!(
        timeouts
            .clone()
            .implicitly_wait(Duration::from_secs(5))
            .await
    );
    let chained = assert_ok!(chained.page_load_timeout(Duration::from_secs(30)).await);
    let chained = assert_ok!(chained.set_script_timeout(Duration::from_secs(10)).await);

    assert!(Arc::ptr_eq(&chained, &timeouts));
    assert_eq!(*waits.lock(), vec![Duration::from_secs(5)]);
    let real = fixture.mock.mock_options().mock_timeouts();
    assert_eq!(real.current_implicit_wait(), Some(Duration::from_secs(5)));
    assert_eq!(real.current_page_load_timeout(), Some(Duration::from_secs(30)));
    assert_eq!(real.current_script_timeout(), Some(Duration::from_secs(10)));
}

/// Test 8: options hand out wrapped logs, IME and window
#[tokio::test]
async fn test_options_sub_objects_are_wrapped() {
    let fixture = Fixture::new();
    fixture
        .mock
        .mock_options()
        .mock_logs()
        .push("browser", LogEntry::new("SEVERE", "boom"));

    let sizes = Arc::new(Mutex::new(Vec::new()));
    let size_sink = sizes.clone();
    fixture.driver.set_listener(
        BEFORE_SET_WINDOW_SIZE,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &Arc<dyn Window>, size: Dimension| {
                size_sink.lock().push(size);
            },
        ),
    );
    let engines = Arc::new(Mutex::new(Vec::new()));
    let engine_sink = engines.clone();
    fixture.driver.set_listener(
        BEFORE_ACTIVATE_ENGINE,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &Arc<dyn ImeHandler>, engine: &str| {
                engine_sink.lock().push(engine.to_string());
            },
        ),
    );
    let drained = Arc::new(Mutex::new(0));
    let drained_sink = drained.clone();
    fixture.driver.set_listener(
        AFTER_LOGS_GET,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: &Arc<dyn Logs>,
                  log_type: &str,
                  entries: &LogEntries| {
                assert_eq!(log_type, "browser");
                *drained_sink.lock() = entries.len();
            },
        ),
    );

    let options = assert_ok!(fixture.driver.manage());
    assert!(options.as_wrapper().is_some());

    let window = assert_ok!(options.window());
    assert!(window.as_wrapper().is_some());
    assert_ok!(window.set_size(Dimension::new(800, 600)).await);

    let ime = assert_ok!(options.ime());
    assert!(ime.as_wrapper().is_some());
    assert_ok!(ime.activate_engine("mozc").await);

    let logs = assert_ok!(options.logs());
    assert!(logs.as_wrapper().is_some());
    assert_eq!(assert_ok!(logs.get("browser").await).len(), 1);

    assert_eq!(*sizes.lock(), vec![Dimension::new(800, 600)]);
    assert_eq!(*engines.lock(), vec!["mozc"]);
    assert_eq!(*drained.lock(), 1);
}

/// Test 9: element-level findElement shares the driver-level point
#[tokio::test]
async fn test_element_find_element_reports_root() {
    let fixture = Fixture::new();
    let form = Arc::new(fixture.mock.element("form"));
    let field: Arc<dyn WebElement> = Arc::new(fixture.mock.element("field"));
    form.add_children(By::name("email"), vec![field.clone()]);
    fixture
        .mock
        .add_elements(By::id("signup"), vec![form.clone() as Arc<dyn WebElement>]);
    fixture
        .driver
        .set_listener(BEFORE_FIND_ELEMENT, Recorder::new(fixture.journal.clone()));

    let form_proxy = assert_ok!(fixture.driver.find_element(&By::id("signup")).await);
    let field_proxy = assert_ok!(form_proxy.find_element(&By::name("email")).await);

    assert!(Arc::ptr_eq(
        &field_proxy.as_wrapper().unwrap().wrapped_original(),
        &field
    ));
    assert_eq!(
        fixture.entries(),
        vec![
            "before findElement on driver By.id: signup",
            "driver.findElement",
            "before findElement on element By.name: email",
            "form.findElement",
        ]
    );
}

/// Test 10: scripts receive real elements, listeners the caller's arguments
#[tokio::test]
async fn test_script_arguments_are_unwrapped() {
    let fixture = Fixture::new();
    let real = fixture.element(By::id("cart"), "cart", "3 items");
    fixture.mock.push_script_result(ScriptValue::from("done"));
    let seen_wrapped = Arc::new(Mutex::new(None));
    let sink = seen_wrapped.clone();
    fixture.driver.set_listener(
        BEFORE_EXECUTE_SCRIPT,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &str, args: &[ScriptValue]| {
                let element = args[0].as_element().map(|e| e.as_wrapper().is_some());
                *sink.lock() = element;
            },
        ),
    );

    let proxy = assert_ok!(fixture.driver.find_element(&By::id("cart")).await);
    let args = vec![
        ScriptValue::Element(proxy.clone()),
        ScriptValue::List(vec![ScriptValue::Element(proxy)]),
    ];
    let result = assert_ok!(
        fixture
            .driver
            .execute_script("arguments[0].click()", &args)
            .await
    );

    assert_eq!(result.as_str(), Some("done"));
    assert_eq!(*seen_wrapped.lock(), Some(true));
    let received = fixture.mock.last_script_args();
    assert!(Arc::ptr_eq(received[0].as_element().unwrap(), &real));
    let nested = received[1].as_list().unwrap()[0].as_element().unwrap();
    assert!(Arc::ptr_eq(nested, &real));
}

/// Test 11: mouse moves with and without offsets share one listener
#[tokio::test]
async fn test_mouse_move_normalization() {
    let fixture = Fixture::new();
    let moves = Arc::new(Mutex::new(Vec::new()));
    let sink = moves.clone();
    fixture.driver.set_listener(
        BEFORE_MOUSE_MOVE,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: &Arc<dyn Mouse>,
                  to: Option<&Coordinates>,
                  x: i64,
                  y: i64| {
                sink.lock().push((to.map(|c| c.on_page), x, y));
            },
        ),
    );

    let mouse = assert_ok!(fixture.driver.mouse());
    let target = Coordinates::on_page(Point::new(10, 20));
    assert_ok!(mouse.mouse_move(Some(&target)).await);
    assert_ok!(mouse.mouse_move_by(None, 5, 7).await);

    assert_eq!(
        *moves.lock(),
        vec![(Some(Point::new(10, 20)), 0, 0), (None, 5, 7)]
    );
}

/// Test 12: both flick overloads and both scroll overloads are normalized
#[tokio::test]
async fn test_touch_normalization() {
    let fixture = Fixture::new();
    let flicks = Arc::new(Mutex::new(Vec::new()));
    let flick_sink = flicks.clone();
    fixture.driver.set_listener(
        AFTER_TOUCH_FLICK,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: &Arc<dyn TouchScreen>,
                  from: Option<&Coordinates>,
                  x_offset: i64,
                  y_offset: i64,
                  speed: i64,
                  x_speed: i64,
                  y_speed: i64| {
                flick_sink
                    .lock()
                    .push((from.is_some(), x_offset, y_offset, speed, x_speed, y_speed));
            },
        ),
    );
    let scrolls = Arc::new(Mutex::new(Vec::new()));
    let scroll_sink = scrolls.clone();
    fixture.driver.set_listener(
        BEFORE_TOUCH_SCROLL,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: &Arc<dyn TouchScreen>,
                  from: Option<&Coordinates>,
                  x: i64,
                  y: i64| {
                scroll_sink.lock().push((from.is_some(), x, y));
            },
        ),
    );

    let touch = assert_ok!(fixture.driver.touch());
    let start = Coordinates::on_page(Point::new(1, 1));
    assert_ok!(touch.flick(30, 40).await);
    assert_ok!(touch.flick_from(Some(&start), 3, 4, 5).await);
    assert_ok!(touch.scroll(8, 9).await);
    assert_ok!(touch.scroll_from(Some(&start), 6, 7).await);

    assert_eq!(
        *flicks.lock(),
        vec![(false, 0, 0, 0, 30, 40), (true, 3, 4, 5, 0, 0)]
    );
    assert_eq!(*scrolls.lock(), vec![(false, 8, 9), (true, 6, 7)]);
}

/// Test 13: keyboard, mouse and element sendKeys/click are separate points
#[tokio::test]
async fn test_same_name_operations_are_independent() {
    let fixture = Fixture::new();
    let field = Arc::new(MockElement::new(fixture.journal.clone(), "field").with_tag("input"));
    fixture
        .mock
        .add_elements(By::id("q"), vec![field.clone() as Arc<dyn WebElement>]);
    let keyboard_journal = fixture.journal.clone();
    fixture.driver.set_listener(
        BEFORE_SEND_KEYS_FROM_KEYBOARD,
        Arc::new(
            move |_: &Arc<dyn WebDriver>, _: &Arc<dyn Keyboard>, keys: &str| {
                keyboard_journal.record(format!("keyboard keys {}", keys));
            },
        ),
    );

    let element = assert_ok!(fixture.driver.find_element(&By::id("q")).await);
    assert_ok!(element.send_keys("rust").await);
    let keyboard = assert_ok!(fixture.driver.keyboard());
    assert_ok!(keyboard.send_keys("\n").await);

    assert_eq!(field.typed(), "rust");
    assert_eq!(
        fixture.entries(),
        vec![
            "driver.findElement",
            "field.sendKeys",
            "driver.getKeyboard",
            "keyboard keys \n",
            "keyboard.sendKeys",
        ]
    );
}

/// Test 14: a failing accessor reports the fault and wraps nothing
#[tokio::test]
async fn test_failing_accessor() {
    let fixture = Fixture::new();
    fixture
        .mock
        .fail_next("manage", Error::webdriver("session gone"));
    fixture
        .driver
        .set_listener(ON_EXCEPTION, Recorder::new(fixture.journal.clone()));

    let err = fixture.driver.manage().err().unwrap();

    assert!(matches!(err, Error::WebDriver(_)));
    assert_eq!(
        fixture.entries(),
        vec![
            "driver.manage",
            "exception in driver.manage: WebDriver error: session gone",
        ]
    );
}

/// Test 15: cookie lookups report the raw optional result
#[tokio::test]
async fn test_cookie_named_after() {
    let fixture = Fixture::new();
    let found = Arc::new(Mutex::new(Vec::new()));
    let sink = found.clone();
    fixture.driver.set_listener(
        AFTER_GET_COOKIE_NAMED,
        Arc::new(
            move |_: &Arc<dyn WebDriver>,
                  _: &Arc<dyn Options>,
                  name: &str,
                  cookie: Option<&Cookie>| {
                sink.lock().push((name.to_string(), cookie.map(|c| c.value.clone())));
            },
        ),
    );

    let options = assert_ok!(fixture.driver.manage());
    assert_ok!(
        options
            .add_cookie(&Cookie::new("session", "abc"))
            .await
    );
    assert_ok!(options.cookie_named("session").await);
    assert_ok!(options.cookie_named("missing").await);

    assert_eq!(
        *found.lock(),
        vec![
            ("session".to_string(), Some("abc".to_string())),
            ("missing".to_string(), None),
        ]
    );
}
