//! Alert proxy

use async_trait::async_trait;
use std::sync::Arc;

use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{Alert, Credentials, WrapsOriginal};
use crate::Result;

pub struct ListenableAlert {
    inner: Arc<dyn Alert>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableAlert {
    pub(super) fn wrap(inner: Arc<dyn Alert>, dispatcher: &Arc<Dispatcher>) -> Arc<dyn Alert> {
        dispatcher.wrapped(Capability::Alert);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Alert(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Alert> for ListenableAlert {
    fn wrapped_original(&self) -> Arc<dyn Alert> {
        self.inner.clone()
    }
}

#[async_trait]
impl Alert for ListenableAlert {
    async fn dismiss(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::DISMISS, CallArgs::None), self.inner.dismiss())
            .await
    }

    async fn accept(&self) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::ACCEPT, CallArgs::None), self.inner.accept())
            .await
    }

    async fn text(&self) -> Result<String> {
        self.dispatcher
            .intercept(self.call(ops::GET_TEXT_OF_ALERT, CallArgs::None), self.inner.text())
            .await
    }

    async fn send_keys(&self, keys: &str) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SEND_KEYS_TO_ALERT, CallArgs::Text(keys)),
                self.inner.send_keys(keys),
            )
            .await
    }

    async fn authenticate_using(&self, credentials: &Credentials) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::AUTHENTICATE_USING, CallArgs::Credentials(credentials)),
                self.inner.authenticate_using(credentials),
            )
            .await
    }

    async fn set_credentials(&self, credentials: &Credentials) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SET_CREDENTIALS, CallArgs::Credentials(credentials)),
                self.inner.set_credentials(credentials),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Alert>> {
        Some(self)
    }
}
