use super::*;
use crate::listener::{
    CallArgs, CallShape, Capability, EventListener, Invocation, ListenerKind, Operation, Outcome,
    Receiver,
};
use crate::webdriver::mock::{Journal, MockDriver, MockElement, MockMouse, MockTouchScreen};
use crate::webdriver::{By, Coordinates, Mouse, Point, TouchScreen, WebDriver, WebElement};
use crate::Error;
use parking_lot::Mutex;
use std::sync::Arc;

fn invocation<'a>(
    driver: &'a Arc<dyn WebDriver>,
    receiver: Receiver<'a>,
    operation: Operation,
    args: CallArgs<'a>,
    outcome: Outcome<'a>,
) -> Invocation<'a> {
    Invocation {
        driver,
        receiver,
        operation,
        args,
        outcome,
    }
}

#[test]
fn test_closure_listener_dispatch() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let listener = <dyn OnGetTitleAfter>::erase(Arc::new(
        move |_: &Arc<dyn WebDriver>, title: &str| sink.lock().push(title.to_string()),
    ));

    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let title = "Home".to_string();
    let op = Operation::new(Capability::Driver, "getTitle");

    assert!(listener.is_applicable(Capability::Driver, CallShape::None));
    assert!(listener.dispatch(&invocation(
        &driver,
        Receiver::Driver,
        op,
        CallArgs::None,
        Outcome::Returned(&title),
    )));
    assert_eq!(*seen.lock(), vec!["Home"]);
}

#[test]
fn test_dispatch_rejects_mismatched_result() {
    let listener = <dyn OnGetTitleAfter>::erase(Arc::new(
        |_: &Arc<dyn WebDriver>, _: &str| panic!("must not be called"),
    ));
    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let wrong = 42_i64;

    assert!(!listener.dispatch(&invocation(
        &driver,
        Receiver::Driver,
        Operation::new(Capability::Driver, "getTitle"),
        CallArgs::None,
        Outcome::Returned(&wrong),
    )));
}

#[test]
fn test_find_element_applies_to_driver_and_element() {
    let listener = <dyn OnFindElementBefore>::erase(Arc::new(
        |_: &Arc<dyn WebDriver>, _: Option<&Arc<dyn WebElement>>, _: &By| {},
    ));

    assert!(listener.is_applicable(Capability::Driver, CallShape::Locator));
    assert!(listener.is_applicable(Capability::Element, CallShape::Locator));
    assert!(!listener.is_applicable(Capability::Alert, CallShape::Locator));
    assert!(!listener.is_applicable(Capability::Driver, CallShape::Text));
}

#[test]
fn test_find_element_reports_root() {
    let roots = Arc::new(Mutex::new(Vec::new()));
    let sink = roots.clone();
    let listener = <dyn OnFindElementBefore>::erase(Arc::new(
        move |_: &Arc<dyn WebDriver>, root: Option<&Arc<dyn WebElement>>, by: &By| {
            sink.lock().push((root.is_some(), by.to_string()))
        },
    ));

    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let element: Arc<dyn WebElement> = Arc::new(MockElement::new(Journal::new(), "form"));
    let by = By::id("x");
    let op = Operation::new(Capability::Driver, "findElement");

    listener.dispatch(&invocation(
        &driver,
        Receiver::Driver,
        op,
        CallArgs::Locator(&by),
        Outcome::Pending,
    ));
    listener.dispatch(&invocation(
        &driver,
        Receiver::Element(&element),
        op,
        CallArgs::Locator(&by),
        Outcome::Pending,
    ));

    assert_eq!(
        *roots.lock(),
        vec![(false, "By.id: x".to_string()), (true, "By.id: x".to_string())]
    );
}

#[test]
fn test_mouse_move_defaults_offsets_to_zero() {
    let moves = Arc::new(Mutex::new(Vec::new()));
    let sink = moves.clone();
    let listener = <dyn OnMouseMove>::erase(Arc::new(
        move |_: &Arc<dyn WebDriver>,
              _: &Arc<dyn Mouse>,
              to: Option<&Coordinates>,
              x: i64,
              y: i64| { sink.lock().push((to.map(|c| c.on_page), x, y)) },
    ));

    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let mouse: Arc<dyn Mouse> = Arc::new(MockMouse::new(Journal::new()));
    let target = Coordinates::on_page(Point::new(5, 6));
    let op = Operation::new(Capability::Mouse, "mouseMove");

    assert!(listener.is_applicable(Capability::Mouse, CallShape::Coordinates));
    assert!(listener.is_applicable(Capability::Mouse, CallShape::CoordinatesOffset));

    listener.dispatch(&invocation(
        &driver,
        Receiver::Mouse(&mouse),
        op,
        CallArgs::Coordinates(Some(&target)),
        Outcome::Pending,
    ));
    listener.dispatch(&invocation(
        &driver,
        Receiver::Mouse(&mouse),
        op,
        CallArgs::CoordinatesOffset(None, 3, 4),
        Outcome::Pending,
    ));

    assert_eq!(
        *moves.lock(),
        vec![(Some(Point::new(5, 6)), 0, 0), (None, 3, 4)]
    );
}

struct FlickLog(Mutex<Vec<(bool, i64, i64, i64, i64, i64)>>);

impl OnTouchFlick for FlickLog {
    fn on_touch_flick(
        &self,
        _driver: &Arc<dyn WebDriver>,
        _touch: &Arc<dyn TouchScreen>,
        from: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
        speed: i64,
        x_speed: i64,
        y_speed: i64,
    ) {
        self.0
            .lock()
            .push((from.is_some(), x_offset, y_offset, speed, x_speed, y_speed));
    }
}

#[test]
fn test_touch_flick_normalizes_both_overloads() {
    let log = Arc::new(FlickLog(Mutex::new(Vec::new())));
    let listener = <dyn OnTouchFlick>::erase(log.clone());

    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let touch: Arc<dyn TouchScreen> = Arc::new(MockTouchScreen::new(Journal::new()));
    let from = Coordinates::default();
    let op = Operation::new(Capability::TouchScreen, "flick");

    listener.dispatch(&invocation(
        &driver,
        Receiver::TouchScreen(&touch),
        op,
        CallArgs::Offset(7, 8),
        Outcome::Pending,
    ));
    listener.dispatch(&invocation(
        &driver,
        Receiver::TouchScreen(&touch),
        op,
        CallArgs::FlickFrom(Some(&from), 1, 2, 3),
        Outcome::Pending,
    ));

    assert_eq!(
        *log.0.lock(),
        vec![(false, 0, 0, 0, 7, 8), (true, 1, 2, 3, 0, 0)]
    );
}

#[test]
fn test_exception_listener_needs_a_fault() {
    let hits = Arc::new(Mutex::new(0));
    let sink = hits.clone();
    let listener = <dyn OnException>::erase(Arc::new(
        move |_: &Arc<dyn WebDriver>,
              receiver: Receiver<'_>,
              operation: Operation,
              _: &CallArgs<'_>,
              error: &Error| {
            assert_eq!(receiver.capability(), Capability::Driver);
            assert_eq!(operation.name(), "close");
            assert!(matches!(error, Error::WebDriver(_)));
            *sink.lock() += 1;
        },
    ));

    let driver: Arc<dyn WebDriver> = MockDriver::new();
    let fault = Error::webdriver("gone");
    let op = Operation::new(Capability::Driver, "close");

    assert!(listener.is_applicable(Capability::Mouse, CallShape::Offset));
    assert!(!listener.dispatch(&invocation(
        &driver,
        Receiver::Driver,
        op,
        CallArgs::None,
        Outcome::Pending,
    )));
    assert!(listener.dispatch(&invocation(
        &driver,
        Receiver::Driver,
        op,
        CallArgs::None,
        Outcome::Failed(&fault),
    )));
    assert_eq!(*hits.lock(), 1);
}
