//! Options proxy and the proxies of its sub-objects

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{
    Cookie, Dimension, ImeHandler, LogEntries, Logs, Options, Point, Timeouts, Window,
    WrapsOriginal,
};
use crate::Result;

// ============================================================================
// Options
// ============================================================================

pub struct ListenableOptions {
    inner: Arc<dyn Options>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableOptions {
    pub(super) fn wrap(inner: Arc<dyn Options>, dispatcher: &Arc<Dispatcher>) -> Arc<dyn Options> {
        dispatcher.wrapped(Capability::Options);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Options(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Options> for ListenableOptions {
    fn wrapped_original(&self) -> Arc<dyn Options> {
        self.inner.clone()
    }
}

#[async_trait]
impl Options for ListenableOptions {
    async fn add_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::ADD_COOKIE, CallArgs::Cookie(cookie)),
                self.inner.add_cookie(cookie),
            )
            .await
    }

    async fn delete_cookie_named(&self, name: &str) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::DELETE_COOKIE_NAMED, CallArgs::Text(name)),
                self.inner.delete_cookie_named(name),
            )
            .await
    }

    async fn delete_cookie(&self, cookie: &Cookie) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::DELETE_COOKIE, CallArgs::Cookie(cookie)),
                self.inner.delete_cookie(cookie),
            )
            .await
    }

    async fn delete_all_cookies(&self) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::DELETE_ALL_COOKIES, CallArgs::None),
                self.inner.delete_all_cookies(),
            )
            .await
    }

    async fn cookies(&self) -> Result<Vec<Cookie>> {
        self.dispatcher
            .intercept(self.call(ops::GET_COOKIES, CallArgs::None), self.inner.cookies())
            .await
    }

    async fn cookie_named(&self, name: &str) -> Result<Option<Cookie>> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_COOKIE_NAMED, CallArgs::Text(name)),
                self.inner.cookie_named(name),
            )
            .await
    }

    fn timeouts(&self) -> Result<Arc<dyn Timeouts>> {
        let timeouts = self
            .dispatcher
            .intercept_sync(self.call(ops::TIMEOUTS, CallArgs::None), || self.inner.timeouts())?;
        Ok(ListenableTimeouts::wrap(timeouts, &self.dispatcher))
    }

    fn ime(&self) -> Result<Arc<dyn ImeHandler>> {
        let ime = self
            .dispatcher
            .intercept_sync(self.call(ops::IME, CallArgs::None), || self.inner.ime())?;
        Ok(ListenableImeHandler::wrap(ime, &self.dispatcher))
    }

    fn window(&self) -> Result<Arc<dyn Window>> {
        let window = self
            .dispatcher
            .intercept_sync(self.call(ops::WINDOW, CallArgs::None), || self.inner.window())?;
        Ok(ListenableWindow::wrap(window, &self.dispatcher))
    }

    fn logs(&self) -> Result<Arc<dyn Logs>> {
        let logs = self
            .dispatcher
            .intercept_sync(self.call(ops::LOGS, CallArgs::None), || self.inner.logs())?;
        Ok(ListenableLogs::wrap(logs, &self.dispatcher))
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Options>> {
        Some(self)
    }
}

// ============================================================================
// Timeouts
// ============================================================================

/// Timeouts proxy; every setter hands back this same proxy
pub struct ListenableTimeouts {
    inner: Arc<dyn Timeouts>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableTimeouts {
    pub(super) fn wrap(
        inner: Arc<dyn Timeouts>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn Timeouts> {
        dispatcher.wrapped(Capability::Timeouts);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call(&self, operation: Operation, timeout: Duration) -> Call<'_> {
        Call::new(
            Receiver::Timeouts(&self.inner),
            operation,
            CallArgs::Duration(timeout),
        )
    }
}

impl WrapsOriginal<dyn Timeouts> for ListenableTimeouts {
    fn wrapped_original(&self) -> Arc<dyn Timeouts> {
        self.inner.clone()
    }
}

#[async_trait]
impl Timeouts for ListenableTimeouts {
    async fn implicitly_wait(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.dispatcher
            .intercept(
                self.call(ops::IMPLICITLY_WAIT, timeout),
                self.inner.clone().implicitly_wait(timeout),
            )
            .await?;
        Ok(self as Arc<dyn Timeouts>)
    }

    async fn set_script_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.dispatcher
            .intercept(
                self.call(ops::SET_SCRIPT_TIMEOUT, timeout),
                self.inner.clone().set_script_timeout(timeout),
            )
            .await?;
        Ok(self as Arc<dyn Timeouts>)
    }

    async fn page_load_timeout(self: Arc<Self>, timeout: Duration) -> Result<Arc<dyn Timeouts>> {
        self.dispatcher
            .intercept(
                self.call(ops::PAGE_LOAD_TIMEOUT, timeout),
                self.inner.clone().page_load_timeout(timeout),
            )
            .await?;
        Ok(self as Arc<dyn Timeouts>)
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Timeouts>> {
        Some(self)
    }
}

// ============================================================================
// IME
// ============================================================================

pub struct ListenableImeHandler {
    inner: Arc<dyn ImeHandler>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableImeHandler {
    pub(super) fn wrap(
        inner: Arc<dyn ImeHandler>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn ImeHandler> {
        dispatcher.wrapped(Capability::ImeHandler);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::ImeHandler(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn ImeHandler> for ListenableImeHandler {
    fn wrapped_original(&self) -> Arc<dyn ImeHandler> {
        self.inner.clone()
    }
}

#[async_trait]
impl ImeHandler for ListenableImeHandler {
    async fn available_engines(&self) -> Result<Vec<String>> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_AVAILABLE_ENGINES, CallArgs::None),
                self.inner.available_engines(),
            )
            .await
    }

    async fn active_engine(&self) -> Result<String> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_ACTIVE_ENGINE, CallArgs::None),
                self.inner.active_engine(),
            )
            .await
    }

    async fn is_activated(&self) -> Result<bool> {
        self.dispatcher
            .intercept(self.call(ops::IS_ACTIVATED, CallArgs::None), self.inner.is_activated())
            .await
    }

    async fn deactivate(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::DEACTIVATE, CallArgs::None), self.inner.deactivate())
            .await
    }

    async fn activate_engine(&self, engine: &str) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::ACTIVATE_ENGINE, CallArgs::Text(engine)),
                self.inner.activate_engine(engine),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn ImeHandler>> {
        Some(self)
    }
}

// ============================================================================
// Window
// ============================================================================

pub struct ListenableWindow {
    inner: Arc<dyn Window>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableWindow {
    pub(super) fn wrap(inner: Arc<dyn Window>, dispatcher: &Arc<Dispatcher>) -> Arc<dyn Window> {
        dispatcher.wrapped(Capability::Window);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Window(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Window> for ListenableWindow {
    fn wrapped_original(&self) -> Arc<dyn Window> {
        self.inner.clone()
    }
}

#[async_trait]
impl Window for ListenableWindow {
    async fn set_size(&self, size: Dimension) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SET_WINDOW_SIZE, CallArgs::Dimension(size)),
                self.inner.set_size(size),
            )
            .await
    }

    async fn set_position(&self, position: Point) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SET_POSITION, CallArgs::Point(position)),
                self.inner.set_position(position),
            )
            .await
    }

    async fn size(&self) -> Result<Dimension> {
        self.dispatcher
            .intercept(self.call(ops::GET_WINDOW_SIZE, CallArgs::None), self.inner.size())
            .await
    }

    async fn position(&self) -> Result<Point> {
        self.dispatcher
            .intercept(self.call(ops::GET_POSITION, CallArgs::None), self.inner.position())
            .await
    }

    async fn maximize(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::MAXIMIZE, CallArgs::None), self.inner.maximize())
            .await
    }

    async fn fullscreen(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::FULLSCREEN, CallArgs::None), self.inner.fullscreen())
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Window>> {
        Some(self)
    }
}

// ============================================================================
// Logs
// ============================================================================

pub struct ListenableLogs {
    inner: Arc<dyn Logs>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableLogs {
    pub(super) fn wrap(inner: Arc<dyn Logs>, dispatcher: &Arc<Dispatcher>) -> Arc<dyn Logs> {
        dispatcher.wrapped(Capability::Logs);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Logs(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Logs> for ListenableLogs {
    fn wrapped_original(&self) -> Arc<dyn Logs> {
        self.inner.clone()
    }
}

#[async_trait]
impl Logs for ListenableLogs {
    async fn get(&self, log_type: &str) -> Result<LogEntries> {
        self.dispatcher
            .intercept(
                self.call(ops::LOGS_GET, CallArgs::Text(log_type)),
                self.inner.get(log_type),
            )
            .await
    }

    async fn available_log_types(&self) -> Result<Vec<String>> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_AVAILABLE_LOG_TYPES, CallArgs::None),
                self.inner.available_log_types(),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Logs>> {
        Some(self)
    }
}
