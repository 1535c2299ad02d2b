//! Navigation proxy

use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{Navigation, WrapsOriginal};
use crate::Result;

pub struct ListenableNavigation {
    inner: Arc<dyn Navigation>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableNavigation {
    pub(super) fn wrap(
        inner: Arc<dyn Navigation>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn Navigation> {
        dispatcher.wrapped(Capability::Navigation);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Navigation(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Navigation> for ListenableNavigation {
    fn wrapped_original(&self) -> Arc<dyn Navigation> {
        self.inner.clone()
    }
}

#[async_trait]
impl Navigation for ListenableNavigation {
    async fn back(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::NAVIGATE_BACK, CallArgs::None), self.inner.back())
            .await
    }

    async fn forward(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::NAVIGATE_FORWARD, CallArgs::None), self.inner.forward())
            .await
    }

    async fn to(&self, url: &str) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::NAVIGATE_TO, CallArgs::Text(url)), self.inner.to(url))
            .await
    }

    async fn to_url(&self, url: &Url) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::NAVIGATE_TO, CallArgs::Url(url)), self.inner.to_url(url))
            .await
    }

    async fn refresh(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::REFRESH, CallArgs::None), self.inner.refresh())
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Navigation>> {
        Some(self)
    }
}
