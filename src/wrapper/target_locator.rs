//! Target-locator proxy
//!
//! Every switch that hands back a driver hands back the wrapped root, so
//! chained calls stay observable. The locator keeps the root alive for as
//! long as it is held.

use async_trait::async_trait;
use std::sync::Arc;

use super::alert::ListenableAlert;
use super::element::ListenableElement;
use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{Alert, TargetLocator, WebDriver, WebElement, WrapsOriginal};
use crate::Result;

pub struct ListenableTargetLocator {
    inner: Arc<dyn TargetLocator>,
    root: Arc<dyn WebDriver>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableTargetLocator {
    pub(super) fn wrap(
        inner: Arc<dyn TargetLocator>,
        root: Arc<dyn WebDriver>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn TargetLocator> {
        dispatcher.wrapped(Capability::TargetLocator);
        Arc::new(Self {
            inner,
            root,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::TargetLocator(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn TargetLocator> for ListenableTargetLocator {
    fn wrapped_original(&self) -> Arc<dyn TargetLocator> {
        self.inner.clone()
    }
}

#[async_trait]
impl TargetLocator for ListenableTargetLocator {
    async fn frame_index(&self, index: usize) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_FRAME, CallArgs::Index(index)),
                self.inner.frame_index(index),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn frame_name(&self, name_or_id: &str) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_FRAME, CallArgs::Text(name_or_id)),
                self.inner.frame_name(name_or_id),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn frame_element(&self, frame: &Arc<dyn WebElement>) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_FRAME, CallArgs::Element(frame)),
                self.inner.frame_element(frame),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn parent_frame(&self) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_PARENT_FRAME, CallArgs::None),
                self.inner.parent_frame(),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn window(&self, name_or_handle: &str) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_WINDOW, CallArgs::Text(name_or_handle)),
                self.inner.window(name_or_handle),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn default_content(&self) -> Result<Arc<dyn WebDriver>> {
        self.dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_DEFAULT_CONTENT, CallArgs::None),
                self.inner.default_content(),
            )
            .await?;
        Ok(self.root.clone())
    }

    async fn active_element(&self) -> Result<Arc<dyn WebElement>> {
        let element = self
            .dispatcher
            .intercept(
                self.call(ops::SWITCH_TO_ACTIVE_ELEMENT, CallArgs::None),
                self.inner.active_element(),
            )
            .await?;
        if element.as_wrapper().is_some() {
            return Ok(element);
        }
        Ok(ListenableElement::wrap(element, &self.dispatcher))
    }

    async fn alert(&self) -> Result<Arc<dyn Alert>> {
        let alert = self
            .dispatcher
            .intercept(self.call(ops::SWITCH_TO_ALERT, CallArgs::None), self.inner.alert())
            .await?;
        Ok(ListenableAlert::wrap(alert, &self.dispatcher))
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn TargetLocator>> {
        Some(self)
    }
}
