//! The exception channel

use std::sync::Arc;

use crate::listener::{
    CallArgs, CallShape, Capability, Erased, EventListener, Invocation, ListenerKind, Operation,
    Receiver,
};
use crate::webdriver::WebDriver;
use crate::Error;

/// Notified once for every fault raised by a wrapped receiver.
///
/// `receiver` is [`Receiver::Driver`] when the failing call was made on the
/// driver itself. The fault is only borrowed; the caller receives it
/// unchanged afterwards.
pub trait OnException: Send + Sync {
    fn on_exception(
        &self,
        driver: &Arc<dyn WebDriver>,
        receiver: Receiver<'_>,
        operation: Operation,
        args: &CallArgs<'_>,
        error: &Error,
    );
}

impl<F> OnException for F
where
    F: Fn(&Arc<dyn WebDriver>, Receiver<'_>, Operation, &CallArgs<'_>, &Error) + Send + Sync,
{
    fn on_exception(
        &self,
        driver: &Arc<dyn WebDriver>,
        receiver: Receiver<'_>,
        operation: Operation,
        args: &CallArgs<'_>,
        error: &Error,
    ) {
        self(driver, receiver, operation, args, error)
    }
}

impl ListenerKind for dyn OnException {
    fn erase(listener: Arc<Self>) -> Arc<dyn EventListener> {
        Arc::new(Erased(listener))
    }
}

impl EventListener for Erased<dyn OnException> {
    fn contract(&self) -> &'static str {
        "OnException"
    }

    fn is_applicable(&self, _receiver: Capability, _shape: CallShape) -> bool {
        true
    }

    fn dispatch(&self, invocation: &Invocation<'_>) -> bool {
        match invocation.error() {
            Some(error) => {
                self.0.on_exception(
                    invocation.driver,
                    invocation.receiver,
                    invocation.operation,
                    &invocation.args,
                    error,
                );
                true
            }
            None => false,
        }
    }
}
