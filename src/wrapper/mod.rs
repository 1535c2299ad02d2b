//! # Interception proxies
//!
//! [`wrap`] turns any [`WebDriver`] into a [`ListenableDriver`]. Every object
//! handed out by the wrapped driver (elements, navigation, options, target
//! locator, input devices, and their own sub-objects) is itself a proxy
//! sharing the same listener registry, so one registration observes the
//! whole graph.
//!
//! Each proxied call runs as:
//! 1. the operation's before-listener, if registered and applicable
//! 2. the real call
//! 3. on success, the after-listener with the raw result; on failure, the
//!    exception listener with the fault
//!
//! The caller then receives the (possibly wrapped) result, or the original
//! fault unchanged.

use std::any::Any;
use std::future::Future;
use std::sync::{Arc, Weak};

use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::listener::{
    CallArgs, Capability, EventListener, Invocation, ListenerKind, ListenerPoint, Listeners,
    Operation, Outcome, Phase, Receiver,
};
use crate::webdriver::WebDriver;
use crate::{Error, Result};

mod alert;
mod driver;
mod element;
mod input;
mod navigation;
mod options;
mod target_locator;
mod unwrap;

pub use alert::ListenableAlert;
pub use driver::ListenableDriver;
pub use element::ListenableElement;
pub use input::{ListenableKeyboard, ListenableMouse, ListenableTouchScreen};
pub use navigation::ListenableNavigation;
pub use options::{
    ListenableImeHandler, ListenableLogs, ListenableOptions, ListenableTimeouts, ListenableWindow,
};
pub use target_locator::ListenableTargetLocator;

/// Wrap `driver` with the default configuration
pub fn wrap(driver: Arc<dyn WebDriver>) -> Arc<ListenableDriver> {
    wrap_with_config(driver, Config::default())
}

/// Wrap `driver`; `config` only affects how the proxies log
pub fn wrap_with_config(driver: Arc<dyn WebDriver>, config: Config) -> Arc<ListenableDriver> {
    let wrapped = Arc::new_cyclic(|root| {
        ListenableDriver::new(Arc::new(Dispatcher::new(driver, root.clone(), config)))
    });
    wrapped.dispatcher().wrapped(Capability::Driver);
    wrapped
}

/// One call as described to the listeners
#[derive(Clone, Copy)]
pub(crate) struct Call<'a> {
    receiver: Receiver<'a>,
    operation: Operation,
    args: CallArgs<'a>,
}

impl<'a> Call<'a> {
    pub(crate) fn new(receiver: Receiver<'a>, operation: Operation, args: CallArgs<'a>) -> Self {
        Self {
            receiver,
            operation,
            args,
        }
    }
}

/// State shared by every proxy of one wrapped driver graph
pub(crate) struct Dispatcher {
    /// Identifies the graph in log events
    id: String,
    /// The real root driver
    driver: Arc<dyn WebDriver>,
    /// The proxy of the root driver
    root: Weak<ListenableDriver>,
    listeners: Listeners,
    config: Config,
}

impl Dispatcher {
    fn new(driver: Arc<dyn WebDriver>, root: Weak<ListenableDriver>, config: Config) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            driver,
            root,
            listeners: Listeners::new(),
            config,
        }
    }

    /// Real root driver of the graph
    pub(crate) fn driver(&self) -> &Arc<dyn WebDriver> {
        &self.driver
    }

    pub(crate) fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Proxy of the root driver, captured by `switch_to` for the locator's switches
    pub(crate) fn root(&self) -> Result<Arc<dyn WebDriver>> {
        match self.root.upgrade() {
            Some(root) => Ok(root as Arc<dyn WebDriver>),
            None => Err(Error::internal("wrapped driver has been dropped")),
        }
    }

    pub(crate) fn set_listener<L>(&self, point: ListenerPoint<L>, listener: Arc<L>)
    where
        L: ListenerKind + ?Sized,
    {
        let listener = L::erase(listener);
        debug!(
            graph = %self.id,
            label = %self.config.label,
            "Registering {} listener for {}",
            listener.contract(),
            point
        );

        match point.phase() {
            Phase::Before => self.listeners.set_before(point.operation(), listener),
            Phase::After => self.listeners.set_after(point.operation(), listener),
            Phase::Exception => self.listeners.set_exception(listener),
        }
    }

    pub(crate) fn remove_listener<L: ?Sized>(&self, point: ListenerPoint<L>) {
        debug!(
            graph = %self.id,
            label = %self.config.label,
            "Removing listener for {}",
            point
        );

        match point.phase() {
            Phase::Before => self.listeners.remove_before(point.operation()),
            Phase::After => self.listeners.remove_after(point.operation()),
            Phase::Exception => self.listeners.remove_exception(),
        }
    }

    /// Run `delegate` between the listeners of `call`
    pub(crate) async fn intercept<T, F>(&self, call: Call<'_>, delegate: F) -> Result<T>
    where
        T: Any,
        F: Future<Output = Result<T>>,
    {
        self.fire_before(&call);
        let result = delegate.await;
        self.settle(&call, result)
    }

    /// Same as [`intercept`](Self::intercept) for the synchronous accessors
    pub(crate) fn intercept_sync<T, F>(&self, call: Call<'_>, delegate: F) -> Result<T>
    where
        T: Any,
        F: FnOnce() -> Result<T>,
    {
        self.fire_before(&call);
        let result = delegate();
        self.settle(&call, result)
    }

    fn settle<T: Any>(&self, call: &Call<'_>, result: Result<T>) -> Result<T> {
        match result {
            Ok(value) => {
                if let Some(listener) = self.listeners.after(call.operation) {
                    self.deliver(&*listener, Phase::After, call, Outcome::Returned(&value));
                }
                Ok(value)
            }
            Err(error) => {
                if let Some(listener) = self.listeners.exception() {
                    self.deliver(&*listener, Phase::Exception, call, Outcome::Failed(&error));
                }
                Err(error)
            }
        }
    }

    fn fire_before(&self, call: &Call<'_>) {
        if let Some(listener) = self.listeners.before(call.operation) {
            self.deliver(&*listener, Phase::Before, call, Outcome::Pending);
        }
    }

    fn deliver(
        &self,
        listener: &dyn EventListener,
        phase: Phase,
        call: &Call<'_>,
        outcome: Outcome<'_>,
    ) {
        let capability = call.receiver.capability();
        if !listener.is_applicable(capability, call.args.shape()) {
            trace!(
                graph = %self.id,
                "{} listener {} does not apply to {:?} on {}",
                phase,
                listener.contract(),
                call.args.shape(),
                capability
            );
            return;
        }

        if self.config.trace_dispatch {
            debug!(
                graph = %self.id,
                label = %self.config.label,
                "Dispatching {} {} on {}",
                phase,
                call.operation,
                capability
            );
        } else {
            trace!(
                graph = %self.id,
                label = %self.config.label,
                "Dispatching {} {} on {}",
                phase,
                call.operation,
                capability
            );
        }

        let invocation = Invocation {
            driver: &self.driver,
            receiver: call.receiver,
            operation: call.operation,
            args: call.args,
            outcome,
        };
        if !listener.dispatch(&invocation) {
            warn!(
                graph = %self.id,
                label = %self.config.label,
                "Skipped {} listener {} for {}: arguments do not match its contract",
                phase,
                listener.contract(),
                call.operation
            );
        }
    }

    /// Log that a proxy was created
    pub(crate) fn wrapped(&self, capability: Capability) {
        debug!(
            graph = %self.id,
            label = %self.config.label,
            "Wrapped {}",
            capability
        );
    }
}

#[cfg(test)]
mod tests;
