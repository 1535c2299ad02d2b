//! Root driver proxy

use async_trait::async_trait;
use std::sync::Arc;

use super::element::ListenableElement;
use super::input::{ListenableKeyboard, ListenableMouse, ListenableTouchScreen};
use super::navigation::ListenableNavigation;
use super::options::ListenableOptions;
use super::target_locator::ListenableTargetLocator;
use super::unwrap::unwrap_args;
use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, ListenerKind, ListenerPoint, Operation, Receiver};
use crate::webdriver::{
    By, Keyboard, Mouse, Navigation, Options, OutputType, Screenshot, ScriptValue, TargetLocator,
    TouchScreen, WebDriver, WebElement, WrapsOriginal,
};
use crate::Result;

/// A driver whose every operation can be observed
///
/// Obtained from [`wrap`](super::wrap). Implements [`WebDriver`] itself, so
/// it can be used wherever the wrapped driver was.
pub struct ListenableDriver {
    dispatcher: Arc<Dispatcher>,
}

impl ListenableDriver {
    pub(super) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub(super) fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Register `listener` at `point`, replacing whatever was there
    ///
    /// The registration applies to every proxy derived from this driver,
    /// including ones handed out before the call.
    pub fn set_listener<L>(&self, point: ListenerPoint<L>, listener: Arc<L>)
    where
        L: ListenerKind + ?Sized,
    {
        self.dispatcher.set_listener(point, listener);
    }

    /// Clear `point`; a no-op when nothing is registered there
    pub fn remove_listener<L: ?Sized>(&self, point: ListenerPoint<L>) {
        self.dispatcher.remove_listener(point);
    }

    /// Number of listeners registered across the whole graph
    pub fn listener_count(&self) -> usize {
        self.dispatcher.listeners().len()
    }

    fn inner(&self) -> &Arc<dyn WebDriver> {
        self.dispatcher.driver()
    }

    fn call<'a>(operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Driver, operation, args)
    }
}

impl WrapsOriginal<dyn WebDriver> for ListenableDriver {
    fn wrapped_original(&self) -> Arc<dyn WebDriver> {
        self.inner().clone()
    }
}

#[async_trait]
impl WebDriver for ListenableDriver {
    async fn get(&self, url: &str) -> Result<()> {
        self.dispatcher
            .intercept(Self::call(ops::GET, CallArgs::Text(url)), self.inner().get(url))
            .await
    }

    async fn current_url(&self) -> Result<String> {
        self.dispatcher
            .intercept(Self::call(ops::GET_CURRENT_URL, CallArgs::None), self.inner().current_url())
            .await
    }

    async fn page_source(&self) -> Result<String> {
        self.dispatcher
            .intercept(Self::call(ops::GET_PAGE_SOURCE, CallArgs::None), self.inner().page_source())
            .await
    }

    async fn title(&self) -> Result<String> {
        self.dispatcher
            .intercept(Self::call(ops::GET_TITLE, CallArgs::None), self.inner().title())
            .await
    }

    async fn window_handle(&self) -> Result<String> {
        self.dispatcher
            .intercept(
                Self::call(ops::GET_WINDOW_HANDLE, CallArgs::None),
                self.inner().window_handle(),
            )
            .await
    }

    async fn window_handles(&self) -> Result<Vec<String>> {
        self.dispatcher
            .intercept(
                Self::call(ops::GET_WINDOW_HANDLES, CallArgs::None),
                self.inner().window_handles(),
            )
            .await
    }

    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>> {
        let element = self
            .dispatcher
            .intercept(
                Self::call(ops::FIND_ELEMENT, CallArgs::Locator(by)),
                self.inner().find_element(by),
            )
            .await?;
        Ok(ListenableElement::wrap(element, &self.dispatcher))
    }

    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>> {
        let elements = self
            .dispatcher
            .intercept(
                Self::call(ops::FIND_ELEMENTS, CallArgs::Locator(by)),
                self.inner().find_elements(by),
            )
            .await?;
        Ok(elements
            .into_iter()
            .map(|element| ListenableElement::wrap(element, &self.dispatcher))
            .collect())
    }

    async fn close(&self) -> Result<()> {
        self.dispatcher
            .intercept(Self::call(ops::CLOSE, CallArgs::None), self.inner().close())
            .await
    }

    async fn quit(&self) -> Result<()> {
        self.dispatcher
            .intercept(Self::call(ops::QUIT, CallArgs::None), self.inner().quit())
            .await
    }

    fn navigate(&self) -> Result<Arc<dyn Navigation>> {
        let navigation = self
            .dispatcher
            .intercept_sync(Self::call(ops::NAVIGATE, CallArgs::None), || {
                self.inner().navigate()
            })?;
        Ok(ListenableNavigation::wrap(navigation, &self.dispatcher))
    }

    fn switch_to(&self) -> Result<Arc<dyn TargetLocator>> {
        let root = self.dispatcher.root()?;
        let target_locator = self
            .dispatcher
            .intercept_sync(Self::call(ops::SWITCH_TO, CallArgs::None), || {
                self.inner().switch_to()
            })?;
        Ok(ListenableTargetLocator::wrap(target_locator, root, &self.dispatcher))
    }

    fn manage(&self) -> Result<Arc<dyn Options>> {
        let options = self
            .dispatcher
            .intercept_sync(Self::call(ops::MANAGE, CallArgs::None), || self.inner().manage())?;
        Ok(ListenableOptions::wrap(options, &self.dispatcher))
    }

    fn keyboard(&self) -> Result<Arc<dyn Keyboard>> {
        let keyboard = self
            .dispatcher
            .intercept_sync(Self::call(ops::GET_KEYBOARD, CallArgs::None), || {
                self.inner().keyboard()
            })?;
        Ok(ListenableKeyboard::wrap(keyboard, &self.dispatcher))
    }

    fn mouse(&self) -> Result<Arc<dyn Mouse>> {
        let mouse = self
            .dispatcher
            .intercept_sync(Self::call(ops::GET_MOUSE, CallArgs::None), || self.inner().mouse())?;
        Ok(ListenableMouse::wrap(mouse, &self.dispatcher))
    }

    fn touch(&self) -> Result<Arc<dyn TouchScreen>> {
        let touch = self
            .dispatcher
            .intercept_sync(Self::call(ops::GET_TOUCH, CallArgs::None), || self.inner().touch())?;
        Ok(ListenableTouchScreen::wrap(touch, &self.dispatcher))
    }

    async fn execute_script(&self, script: &str, args: &[ScriptValue]) -> Result<ScriptValue> {
        // Listeners see the caller's arguments, the driver the real elements
        let unwrapped = unwrap_args(args);
        self.dispatcher
            .intercept(
                Self::call(ops::EXECUTE_SCRIPT, CallArgs::Script(script, args)),
                self.inner().execute_script(script, &unwrapped),
            )
            .await
    }

    async fn execute_async_script(
        &self,
        script: &str,
        args: &[ScriptValue],
    ) -> Result<ScriptValue> {
        let unwrapped = unwrap_args(args);
        self.dispatcher
            .intercept(
                Self::call(ops::EXECUTE_ASYNC_SCRIPT, CallArgs::Script(script, args)),
                self.inner().execute_async_script(script, &unwrapped),
            )
            .await
    }

    async fn screenshot_as(&self, output: OutputType) -> Result<Screenshot> {
        self.dispatcher
            .intercept(
                Self::call(ops::GET_SCREENSHOT_AS, CallArgs::Output(output)),
                self.inner().screenshot_as(output),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn WebDriver>> {
        Some(self)
    }
}
