//! Element proxy

use async_trait::async_trait;
use std::sync::Arc;

use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{
    By, Coordinates, Dimension, OutputType, Point, Rectangle, Screenshot, WebDriver, WebElement,
    WrapsElement, WrapsOriginal,
};
use crate::Result;

/// Element found through a wrapped driver or a wrapped element
pub struct ListenableElement {
    inner: Arc<dyn WebElement>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableElement {
    pub(super) fn wrap(
        inner: Arc<dyn WebElement>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn WebElement> {
        dispatcher.wrapped(Capability::Element);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Element(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn WebElement> for ListenableElement {
    fn wrapped_original(&self) -> Arc<dyn WebElement> {
        self.inner.clone()
    }
}

impl WrapsElement for ListenableElement {
    fn wrapped_driver(&self) -> Arc<dyn WebDriver> {
        self.dispatcher.driver().clone()
    }
}

#[async_trait]
impl WebElement for ListenableElement {
    async fn click(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::CLICK, CallArgs::None), self.inner.click())
            .await
    }

    async fn submit(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::SUBMIT, CallArgs::None), self.inner.submit())
            .await
    }

    async fn clear(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::CLEAR, CallArgs::None), self.inner.clear())
            .await
    }

    async fn send_keys(&self, keys: &str) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::SEND_KEYS, CallArgs::Text(keys)), self.inner.send_keys(keys))
            .await
    }

    async fn tag_name(&self) -> Result<String> {
        self.dispatcher
            .intercept(self.call(ops::GET_TAG_NAME, CallArgs::None), self.inner.tag_name())
            .await
    }

    async fn attribute(&self, name: &str) -> Result<Option<String>> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_ATTRIBUTE, CallArgs::Text(name)),
                self.inner.attribute(name),
            )
            .await
    }

    async fn is_selected(&self) -> Result<bool> {
        self.dispatcher
            .intercept(self.call(ops::IS_SELECTED, CallArgs::None), self.inner.is_selected())
            .await
    }

    async fn is_enabled(&self) -> Result<bool> {
        self.dispatcher
            .intercept(self.call(ops::IS_ENABLED, CallArgs::None), self.inner.is_enabled())
            .await
    }

    async fn is_displayed(&self) -> Result<bool> {
        self.dispatcher
            .intercept(self.call(ops::IS_DISPLAYED, CallArgs::None), self.inner.is_displayed())
            .await
    }

    async fn text(&self) -> Result<String> {
        self.dispatcher
            .intercept(self.call(ops::GET_TEXT, CallArgs::None), self.inner.text())
            .await
    }

    async fn css_value(&self, property: &str) -> Result<String> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_CSS_VALUE, CallArgs::Text(property)),
                self.inner.css_value(property),
            )
            .await
    }

    async fn location(&self) -> Result<Point> {
        self.dispatcher
            .intercept(self.call(ops::GET_LOCATION, CallArgs::None), self.inner.location())
            .await
    }

    async fn size(&self) -> Result<Dimension> {
        self.dispatcher
            .intercept(self.call(ops::GET_SIZE, CallArgs::None), self.inner.size())
            .await
    }

    async fn rect(&self) -> Result<Rectangle> {
        self.dispatcher
            .intercept(self.call(ops::GET_RECT, CallArgs::None), self.inner.rect())
            .await
    }

    async fn coordinates(&self) -> Result<Coordinates> {
        self.dispatcher
            .intercept(self.call(ops::GET_COORDINATES, CallArgs::None), self.inner.coordinates())
            .await
    }

    async fn find_element(&self, by: &By) -> Result<Arc<dyn WebElement>> {
        let element = self
            .dispatcher
            .intercept(
                self.call(ops::FIND_ELEMENT, CallArgs::Locator(by)),
                self.inner.find_element(by),
            )
            .await?;
        Ok(ListenableElement::wrap(element, &self.dispatcher))
    }

    async fn find_elements(&self, by: &By) -> Result<Vec<Arc<dyn WebElement>>> {
        let elements = self
            .dispatcher
            .intercept(
                self.call(ops::FIND_ELEMENTS, CallArgs::Locator(by)),
                self.inner.find_elements(by),
            )
            .await?;
        Ok(elements
            .into_iter()
            .map(|element| ListenableElement::wrap(element, &self.dispatcher))
            .collect())
    }

    async fn screenshot_as(&self, output: OutputType) -> Result<Screenshot> {
        self.dispatcher
            .intercept(
                self.call(ops::GET_SCREENSHOT_AS, CallArgs::Output(output)),
                self.inner.screenshot_as(output),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsElement> {
        Some(self)
    }
}
