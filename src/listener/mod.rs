//! # Listeners
//!
//! Everything a caller needs to observe a wrapped driver.
//!
//! ## Module structure
//! - `point`: operation identities and typed registration points
//! - `catalog`: the closed set of registration points
//! - `registry`: per-graph listener storage
//! - `invocation`: the argument/result bag passed to listeners
//! - `contracts`: one listener trait per operation signature
//!
//! Each contract has exactly one typed callback and is implemented for
//! matching closures, so both of these register the same way:
//!
//! ```ignore
//! driver.set_listener(BEFORE_CLOSE, Arc::new(MyRecorder::new()));
//! driver.set_listener(
//!     AFTER_CLOSE,
//!     Arc::new(|_: &Arc<dyn WebDriver>| println!("closed")),
//! );
//! ```

use std::sync::Arc;

pub mod catalog;
pub mod invocation;
pub mod point;
pub mod registry;

pub use invocation::{CallArgs, CallShape, FrameRef, Invocation, Outcome, Receiver};
pub use point::{Capability, ListenerPoint, Operation, Phase};
pub use registry::Listeners;

/// Type-erased listener as stored in the registry
pub trait EventListener: Send + Sync {
    /// Name of the contract the listener was registered as
    fn contract(&self) -> &'static str;

    /// Whether the call site (receiver kind and argument shape) is the one
    /// this contract was written for
    fn is_applicable(&self, receiver: Capability, shape: CallShape) -> bool;

    /// Extract the contract's parameters and invoke the typed callback.
    ///
    /// Returns `false` without calling anything when the invocation does
    /// not carry what the contract needs.
    fn dispatch(&self, invocation: &Invocation<'_>) -> bool;
}

/// Implemented by every listener contract trait object
pub trait ListenerKind {
    fn erase(listener: Arc<Self>) -> Arc<dyn EventListener>;
}

/// Registry adapter around a typed listener
pub struct Erased<L: ?Sized>(pub Arc<L>);

/// Declares a listener contract.
///
/// Generates the trait (first parameter is always the real root driver),
/// its implementation for matching closures, and the registry adapter
/// with the given applicability rule and dispatch expression. Inside the
/// dispatch expression `?` on `Option` aborts delivery.
macro_rules! listener_contract {
    (
        $(#[$meta:meta])*
        $contract:ident :: $method:ident ( $($arg:ident : $ty:ty),* $(,)? );
        applies [$($cap:ident),+] x [$($shape:ident),+];
        dispatch |$this:ident, $inv:ident| $body:expr;
    ) => {
        $(#[$meta])*
        pub trait $contract: Send + Sync {
            fn $method(
                &self,
                driver: &::std::sync::Arc<dyn $crate::webdriver::WebDriver>,
                $($arg: $ty),*
            );
        }

        impl<F> $contract for F
        where
            F: Fn(&::std::sync::Arc<dyn $crate::webdriver::WebDriver>, $($ty),*) + Send + Sync,
        {
            fn $method(
                &self,
                driver: &::std::sync::Arc<dyn $crate::webdriver::WebDriver>,
                $($arg: $ty),*
            ) {
                self(driver, $($arg),*)
            }
        }

        impl $crate::listener::ListenerKind for dyn $contract {
            fn erase(
                listener: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn $crate::listener::EventListener> {
                ::std::sync::Arc::new($crate::listener::Erased(listener))
            }
        }

        impl $crate::listener::EventListener for $crate::listener::Erased<dyn $contract> {
            fn contract(&self) -> &'static str {
                stringify!($contract)
            }

            fn is_applicable(
                &self,
                receiver: $crate::listener::Capability,
                shape: $crate::listener::CallShape,
            ) -> bool {
                matches!(receiver, $($crate::listener::Capability::$cap)|+)
                    && matches!(shape, $($crate::listener::CallShape::$shape)|+)
            }

            #[allow(clippy::redundant_closure_call)]
            fn dispatch(&self, $inv: &$crate::listener::Invocation<'_>) -> bool {
                let $this = &*self.0;
                let delivered = (|| -> Option<()> {
                    $body;
                    Some(())
                })();
                delivered.is_some()
            }
        }
    };
}

pub mod contracts;

pub use catalog::*;
pub use contracts::*;
