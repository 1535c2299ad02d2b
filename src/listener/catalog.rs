//! Registration points for every interceptable operation
//!
//! The set is closed: callers pick one of these constants, they never
//! build a point themselves. The type parameter of each point names the
//! listener contract it accepts, so registering a mismatched listener
//! does not compile.

use super::contracts::*;
use super::point::{Capability, ListenerPoint, Operation, Phase};

macro_rules! points {
    ($(
        $scope:ident $name:literal as $op:ident
            => $before:ident: $before_ty:ident, $after:ident: $after_ty:ident;
    )*) => {
        /// Operation identities, named after their registration points
        pub mod ops {
            use crate::listener::point::{Capability, Operation};

            $(pub const $op: Operation = Operation::new(Capability::$scope, $name);)*
        }

        $(
            pub const $before: ListenerPoint<dyn $before_ty> = ops::$op.before();
            pub const $after: ListenerPoint<dyn $after_ty> = ops::$op.after();
        )*

        /// Every interceptable operation
        pub const OPERATIONS: &[Operation] = &[$(ops::$op),*];
    };
}

/// The exception channel; one slot per wrapped driver
pub const ON_EXCEPTION: ListenerPoint<dyn OnException> =
    ListenerPoint::new(Operation::new(Capability::Driver, "exception"), Phase::Exception);

points! {
    // Driver
    Driver "close" as CLOSE => BEFORE_CLOSE: OnClose, AFTER_CLOSE: OnClose;
    Driver "quit" as QUIT => BEFORE_QUIT: OnQuit, AFTER_QUIT: OnQuit;
    Driver "get" as GET => BEFORE_GET: OnGet, AFTER_GET: OnGet;
    Driver "getCurrentUrl" as GET_CURRENT_URL => BEFORE_GET_CURRENT_URL: OnGetCurrentUrlBefore, AFTER_GET_CURRENT_URL: OnGetCurrentUrlAfter;
    Driver "getPageSource" as GET_PAGE_SOURCE => BEFORE_GET_PAGE_SOURCE: OnGetPageSourceBefore, AFTER_GET_PAGE_SOURCE: OnGetPageSourceAfter;
    Driver "getTitle" as GET_TITLE => BEFORE_GET_TITLE: OnGetTitleBefore, AFTER_GET_TITLE: OnGetTitleAfter;
    Driver "getWindowHandle" as GET_WINDOW_HANDLE => BEFORE_GET_WINDOW_HANDLE: OnGetWindowHandleBefore, AFTER_GET_WINDOW_HANDLE: OnGetWindowHandleAfter;
    Driver "getWindowHandles" as GET_WINDOW_HANDLES => BEFORE_GET_WINDOW_HANDLES: OnGetWindowHandlesBefore, AFTER_GET_WINDOW_HANDLES: OnGetWindowHandlesAfter;
    Driver "findElement" as FIND_ELEMENT => BEFORE_FIND_ELEMENT: OnFindElementBefore, AFTER_FIND_ELEMENT: OnFindElementAfter;
    Driver "findElements" as FIND_ELEMENTS => BEFORE_FIND_ELEMENTS: OnFindElementsBefore, AFTER_FIND_ELEMENTS: OnFindElementsAfter;
    Driver "navigate" as NAVIGATE => BEFORE_NAVIGATE: OnNavigateBefore, AFTER_NAVIGATE: OnNavigateAfter;
    Driver "switchTo" as SWITCH_TO => BEFORE_SWITCH_TO: OnSwitchToBefore, AFTER_SWITCH_TO: OnSwitchToAfter;
    Driver "manage" as MANAGE => BEFORE_MANAGE: OnManageBefore, AFTER_MANAGE: OnManageAfter;
    Driver "getKeyboard" as GET_KEYBOARD => BEFORE_GET_KEYBOARD: OnGetKeyboardBefore, AFTER_GET_KEYBOARD: OnGetKeyboardAfter;
    Driver "getMouse" as GET_MOUSE => BEFORE_GET_MOUSE: OnGetMouseBefore, AFTER_GET_MOUSE: OnGetMouseAfter;
    Driver "getTouch" as GET_TOUCH => BEFORE_GET_TOUCH: OnGetTouchBefore, AFTER_GET_TOUCH: OnGetTouchAfter;
    Driver "executeScript" as EXECUTE_SCRIPT => BEFORE_EXECUTE_SCRIPT: OnExecuteScriptBefore, AFTER_EXECUTE_SCRIPT: OnExecuteScriptAfter;
    Driver "executeAsyncScript" as EXECUTE_ASYNC_SCRIPT => BEFORE_EXECUTE_ASYNC_SCRIPT: OnExecuteAsyncScriptBefore, AFTER_EXECUTE_ASYNC_SCRIPT: OnExecuteAsyncScriptAfter;
    Driver "getScreenshotAs" as GET_SCREENSHOT_AS => BEFORE_GET_SCREENSHOT_AS: OnGetScreenshotAsBefore, AFTER_GET_SCREENSHOT_AS: OnGetScreenshotAsAfter;

    // Element
    Element "click" as CLICK => BEFORE_CLICK: OnClick, AFTER_CLICK: OnClick;
    Element "clear" as CLEAR => BEFORE_CLEAR: OnClear, AFTER_CLEAR: OnClear;
    Element "submit" as SUBMIT => BEFORE_SUBMIT: OnSubmit, AFTER_SUBMIT: OnSubmit;
    Element "getTagName" as GET_TAG_NAME => BEFORE_GET_TAG_NAME: OnGetTagNameBefore, AFTER_GET_TAG_NAME: OnGetTagNameAfter;
    Element "getText" as GET_TEXT => BEFORE_GET_TEXT: OnGetTextBefore, AFTER_GET_TEXT: OnGetTextAfter;
    Element "isDisplayed" as IS_DISPLAYED => BEFORE_IS_DISPLAYED: OnIsDisplayedBefore, AFTER_IS_DISPLAYED: OnIsDisplayedAfter;
    Element "isEnabled" as IS_ENABLED => BEFORE_IS_ENABLED: OnIsEnabledBefore, AFTER_IS_ENABLED: OnIsEnabledAfter;
    Element "isSelected" as IS_SELECTED => BEFORE_IS_SELECTED: OnIsSelectedBefore, AFTER_IS_SELECTED: OnIsSelectedAfter;
    Element "sendKeys" as SEND_KEYS => BEFORE_SEND_KEYS: OnSendKeys, AFTER_SEND_KEYS: OnSendKeys;
    Element "getAttribute" as GET_ATTRIBUTE => BEFORE_GET_ATTRIBUTE: OnGetAttributeBefore, AFTER_GET_ATTRIBUTE: OnGetAttributeAfter;
    Element "getCssValue" as GET_CSS_VALUE => BEFORE_GET_CSS_VALUE: OnGetCssValueBefore, AFTER_GET_CSS_VALUE: OnGetCssValueAfter;
    Element "getLocation" as GET_LOCATION => BEFORE_GET_LOCATION: OnGetLocationBefore, AFTER_GET_LOCATION: OnGetLocationAfter;
    Element "getRect" as GET_RECT => BEFORE_GET_RECT: OnGetRectBefore, AFTER_GET_RECT: OnGetRectAfter;
    Element "getSize" as GET_SIZE => BEFORE_GET_SIZE: OnGetSizeBefore, AFTER_GET_SIZE: OnGetSizeAfter;
    Element "getCoordinates" as GET_COORDINATES => BEFORE_GET_COORDINATES: OnGetCoordinatesBefore, AFTER_GET_COORDINATES: OnGetCoordinatesAfter;

    // Navigation
    Navigation "back" as NAVIGATE_BACK => BEFORE_NAVIGATE_BACK: OnNavigateBack, AFTER_NAVIGATE_BACK: OnNavigateBack;
    Navigation "forward" as NAVIGATE_FORWARD => BEFORE_NAVIGATE_FORWARD: OnNavigateForward, AFTER_NAVIGATE_FORWARD: OnNavigateForward;
    Navigation "refresh" as REFRESH => BEFORE_REFRESH: OnRefresh, AFTER_REFRESH: OnRefresh;
    Navigation "to" as NAVIGATE_TO => BEFORE_NAVIGATE_TO: OnNavigateTo, AFTER_NAVIGATE_TO: OnNavigateTo;

    // Target locator
    TargetLocator "frame" as SWITCH_TO_FRAME => BEFORE_SWITCH_TO_FRAME: OnSwitchToFrame, AFTER_SWITCH_TO_FRAME: OnSwitchToFrame;
    TargetLocator "window" as SWITCH_TO_WINDOW => BEFORE_SWITCH_TO_WINDOW: OnSwitchToWindow, AFTER_SWITCH_TO_WINDOW: OnSwitchToWindow;
    TargetLocator "defaultContent" as SWITCH_TO_DEFAULT_CONTENT => BEFORE_SWITCH_TO_DEFAULT_CONTENT: OnSwitchToDefaultContent, AFTER_SWITCH_TO_DEFAULT_CONTENT: OnSwitchToDefaultContent;
    TargetLocator "parentFrame" as SWITCH_TO_PARENT_FRAME => BEFORE_SWITCH_TO_PARENT_FRAME: OnSwitchToParentFrame, AFTER_SWITCH_TO_PARENT_FRAME: OnSwitchToParentFrame;
    TargetLocator "activeElement" as SWITCH_TO_ACTIVE_ELEMENT => BEFORE_SWITCH_TO_ACTIVE_ELEMENT: OnSwitchToActiveElementBefore, AFTER_SWITCH_TO_ACTIVE_ELEMENT: OnSwitchToActiveElementAfter;
    TargetLocator "alert" as SWITCH_TO_ALERT => BEFORE_SWITCH_TO_ALERT: OnSwitchToAlertBefore, AFTER_SWITCH_TO_ALERT: OnSwitchToAlertAfter;

    // Alert
    Alert "accept" as ACCEPT => BEFORE_ACCEPT: OnAccept, AFTER_ACCEPT: OnAccept;
    Alert "dismiss" as DISMISS => BEFORE_DISMISS: OnDismiss, AFTER_DISMISS: OnDismiss;
    Alert "getText" as GET_TEXT_OF_ALERT => BEFORE_GET_TEXT_OF_ALERT: OnGetTextOfAlertBefore, AFTER_GET_TEXT_OF_ALERT: OnGetTextOfAlertAfter;
    Alert "sendKeys" as SEND_KEYS_TO_ALERT => BEFORE_SEND_KEYS_TO_ALERT: OnSendKeysToAlert, AFTER_SEND_KEYS_TO_ALERT: OnSendKeysToAlert;
    Alert "authenticateUsing" as AUTHENTICATE_USING => BEFORE_AUTHENTICATE_USING: OnAuthenticateUsing, AFTER_AUTHENTICATE_USING: OnAuthenticateUsing;
    Alert "setCredentials" as SET_CREDENTIALS => BEFORE_SET_CREDENTIALS: OnSetCredentials, AFTER_SET_CREDENTIALS: OnSetCredentials;

    // Options
    Options "addCookie" as ADD_COOKIE => BEFORE_ADD_COOKIE: OnAddCookie, AFTER_ADD_COOKIE: OnAddCookie;
    Options "deleteCookie" as DELETE_COOKIE => BEFORE_DELETE_COOKIE: OnDeleteCookie, AFTER_DELETE_COOKIE: OnDeleteCookie;
    Options "deleteAllCookies" as DELETE_ALL_COOKIES => BEFORE_DELETE_ALL_COOKIES: OnDeleteAllCookies, AFTER_DELETE_ALL_COOKIES: OnDeleteAllCookies;
    Options "getCookieNamed" as GET_COOKIE_NAMED => BEFORE_GET_COOKIE_NAMED: OnGetCookieNamedBefore, AFTER_GET_COOKIE_NAMED: OnGetCookieNamedAfter;
    Options "deleteCookieNamed" as DELETE_COOKIE_NAMED => BEFORE_DELETE_COOKIE_NAMED: OnDeleteCookieNamed, AFTER_DELETE_COOKIE_NAMED: OnDeleteCookieNamed;
    Options "getCookies" as GET_COOKIES => BEFORE_GET_COOKIES: OnGetCookiesBefore, AFTER_GET_COOKIES: OnGetCookiesAfter;
    Options "logs" as LOGS => BEFORE_LOGS: OnLogsBefore, AFTER_LOGS: OnLogsAfter;
    Options "ime" as IME => BEFORE_IME: OnImeBefore, AFTER_IME: OnImeAfter;
    Options "window" as WINDOW => BEFORE_WINDOW: OnWindowBefore, AFTER_WINDOW: OnWindowAfter;
    Options "timeouts" as TIMEOUTS => BEFORE_TIMEOUTS: OnTimeoutsBefore, AFTER_TIMEOUTS: OnTimeoutsAfter;

    // Logs
    Logs "get" as LOGS_GET => BEFORE_LOGS_GET: OnLogsGetBefore, AFTER_LOGS_GET: OnLogsGetAfter;
    Logs "getAvailableLogTypes" as GET_AVAILABLE_LOG_TYPES => BEFORE_GET_AVAILABLE_LOG_TYPES: OnGetAvailableLogTypesBefore, AFTER_GET_AVAILABLE_LOG_TYPES: OnGetAvailableLogTypesAfter;

    // Input method editor
    ImeHandler "getAvailableEngines" as GET_AVAILABLE_ENGINES => BEFORE_GET_AVAILABLE_ENGINES: OnGetAvailableEnginesBefore, AFTER_GET_AVAILABLE_ENGINES: OnGetAvailableEnginesAfter;
    ImeHandler "activateEngine" as ACTIVATE_ENGINE => BEFORE_ACTIVATE_ENGINE: OnActivateEngine, AFTER_ACTIVATE_ENGINE: OnActivateEngine;
    ImeHandler "deactivate" as DEACTIVATE => BEFORE_DEACTIVATE: OnDeactivate, AFTER_DEACTIVATE: OnDeactivate;
    ImeHandler "getActiveEngine" as GET_ACTIVE_ENGINE => BEFORE_GET_ACTIVE_ENGINE: OnGetActiveEngineBefore, AFTER_GET_ACTIVE_ENGINE: OnGetActiveEngineAfter;
    ImeHandler "isActivated" as IS_ACTIVATED => BEFORE_IS_ACTIVATED: OnIsActivatedBefore, AFTER_IS_ACTIVATED: OnIsActivatedAfter;

    // Window
    Window "fullscreen" as FULLSCREEN => BEFORE_FULLSCREEN: OnFullscreen, AFTER_FULLSCREEN: OnFullscreen;
    Window "maximize" as MAXIMIZE => BEFORE_MAXIMIZE: OnMaximize, AFTER_MAXIMIZE: OnMaximize;
    Window "getPosition" as GET_POSITION => BEFORE_GET_POSITION: OnGetPositionBefore, AFTER_GET_POSITION: OnGetPositionAfter;
    Window "getSize" as GET_WINDOW_SIZE => BEFORE_GET_WINDOW_SIZE: OnGetWindowSizeBefore, AFTER_GET_WINDOW_SIZE: OnGetWindowSizeAfter;
    Window "setPosition" as SET_POSITION => BEFORE_SET_POSITION: OnSetPosition, AFTER_SET_POSITION: OnSetPosition;
    Window "setSize" as SET_WINDOW_SIZE => BEFORE_SET_WINDOW_SIZE: OnSetWindowSize, AFTER_SET_WINDOW_SIZE: OnSetWindowSize;

    // Timeouts
    Timeouts "implicitlyWait" as IMPLICITLY_WAIT => BEFORE_IMPLICITLY_WAIT: OnImplicitlyWait, AFTER_IMPLICITLY_WAIT: OnImplicitlyWait;
    Timeouts "setScriptTimeout" as SET_SCRIPT_TIMEOUT => BEFORE_SET_SCRIPT_TIMEOUT: OnSetScriptTimeout, AFTER_SET_SCRIPT_TIMEOUT: OnSetScriptTimeout;
    Timeouts "pageLoadTimeout" as PAGE_LOAD_TIMEOUT => BEFORE_PAGE_LOAD_TIMEOUT: OnPageLoadTimeout, AFTER_PAGE_LOAD_TIMEOUT: OnPageLoadTimeout;

    // Keyboard
    Keyboard "pressKey" as PRESS_KEY => BEFORE_PRESS_KEY: OnPressKey, AFTER_PRESS_KEY: OnPressKey;
    Keyboard "releaseKey" as RELEASE_KEY => BEFORE_RELEASE_KEY: OnReleaseKey, AFTER_RELEASE_KEY: OnReleaseKey;
    Keyboard "sendKeys" as SEND_KEYS_FROM_KEYBOARD => BEFORE_SEND_KEYS_FROM_KEYBOARD: OnSendKeysFromKeyboard, AFTER_SEND_KEYS_FROM_KEYBOARD: OnSendKeysFromKeyboard;

    // Mouse
    Mouse "click" as MOUSE_CLICK => BEFORE_MOUSE_CLICK: OnMouseClick, AFTER_MOUSE_CLICK: OnMouseClick;
    Mouse "contextClick" as CONTEXT_CLICK => BEFORE_CONTEXT_CLICK: OnContextClick, AFTER_CONTEXT_CLICK: OnContextClick;
    Mouse "doubleClick" as DOUBLE_CLICK => BEFORE_DOUBLE_CLICK: OnDoubleClick, AFTER_DOUBLE_CLICK: OnDoubleClick;
    Mouse "mouseDown" as MOUSE_DOWN => BEFORE_MOUSE_DOWN: OnMouseDown, AFTER_MOUSE_DOWN: OnMouseDown;
    Mouse "mouseUp" as MOUSE_UP => BEFORE_MOUSE_UP: OnMouseUp, AFTER_MOUSE_UP: OnMouseUp;
    Mouse "mouseMove" as MOUSE_MOVE => BEFORE_MOUSE_MOVE: OnMouseMove, AFTER_MOUSE_MOVE: OnMouseMove;

    // Touch screen
    TouchScreen "singleTap" as SINGLE_TAP => BEFORE_SINGLE_TAP: OnSingleTap, AFTER_SINGLE_TAP: OnSingleTap;
    TouchScreen "doubleTap" as DOUBLE_TAP => BEFORE_DOUBLE_TAP: OnDoubleTap, AFTER_DOUBLE_TAP: OnDoubleTap;
    TouchScreen "longPress" as LONG_PRESS => BEFORE_LONG_PRESS: OnLongPress, AFTER_LONG_PRESS: OnLongPress;
    TouchScreen "down" as TOUCH_DOWN => BEFORE_TOUCH_DOWN: OnTouchDown, AFTER_TOUCH_DOWN: OnTouchDown;
    TouchScreen "up" as TOUCH_UP => BEFORE_TOUCH_UP: OnTouchUp, AFTER_TOUCH_UP: OnTouchUp;
    TouchScreen "move" as TOUCH_MOVE => BEFORE_TOUCH_MOVE: OnTouchMove, AFTER_TOUCH_MOVE: OnTouchMove;
    TouchScreen "scroll" as TOUCH_SCROLL => BEFORE_TOUCH_SCROLL: OnTouchScroll, AFTER_TOUCH_SCROLL: OnTouchScroll;
    TouchScreen "flick" as TOUCH_FLICK => BEFORE_TOUCH_FLICK: OnTouchFlick, AFTER_TOUCH_FLICK: OnTouchFlick;
}
