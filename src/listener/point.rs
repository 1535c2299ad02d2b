//! Operation identities
//!
//! An [`Operation`] names one interceptable call on one receiver family.
//! A [`ListenerPoint`] adds the phase and, through its type parameter, the
//! listener contract accepted at that point.

use std::fmt;
use std::marker::PhantomData;

/// Receiver kinds an operation can be invoked on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Driver,
    Element,
    Navigation,
    Options,
    TargetLocator,
    Window,
    Timeouts,
    Logs,
    ImeHandler,
    Alert,
    Keyboard,
    Mouse,
    TouchScreen,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Driver => "driver",
            Capability::Element => "element",
            Capability::Navigation => "navigation",
            Capability::Options => "options",
            Capability::TargetLocator => "target-locator",
            Capability::Window => "window",
            Capability::Timeouts => "timeouts",
            Capability::Logs => "logs",
            Capability::ImeHandler => "ime-handler",
            Capability::Alert => "alert",
            Capability::Keyboard => "keyboard",
            Capability::Mouse => "mouse",
            Capability::TouchScreen => "touch-screen",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interception phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Before,
    After,
    Exception,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Before => f.write_str("before"),
            Phase::After => f.write_str("after"),
            Phase::Exception => f.write_str("exception"),
        }
    }
}

/// One interceptable operation
///
/// The scope keeps same-named operations of different receivers apart:
/// `getText` on an element and on an alert are distinct operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    scope: Capability,
    name: &'static str,
}

impl Operation {
    pub const fn new(scope: Capability, name: &'static str) -> Self {
        Self { scope, name }
    }

    /// Receiver family that owns the operation
    pub fn scope(&self) -> Capability {
        self.scope
    }

    /// Operation name, as used for registry lookup
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub const fn before<L: ?Sized>(self) -> ListenerPoint<L> {
        ListenerPoint::new(self, Phase::Before)
    }

    pub const fn after<L: ?Sized>(self) -> ListenerPoint<L> {
        ListenerPoint::new(self, Phase::After)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.scope, self.name)
    }
}

/// Typed registration point: operation, phase and accepted listener
/// contract `L`
pub struct ListenerPoint<L: ?Sized> {
    operation: Operation,
    phase: Phase,
    _listener: PhantomData<fn(&L)>,
}

impl<L: ?Sized> ListenerPoint<L> {
    pub(crate) const fn new(operation: Operation, phase: Phase) -> Self {
        Self {
            operation,
            phase,
            _listener: PhantomData,
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn name(&self) -> &'static str {
        self.operation.name
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl<L: ?Sized> Clone for ListenerPoint<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for ListenerPoint<L> {}

impl<L: ?Sized> PartialEq for ListenerPoint<L> {
    fn eq(&self, other: &Self) -> bool {
        self.operation == other.operation && self.phase == other.phase
    }
}

impl<L: ?Sized> Eq for ListenerPoint<L> {}

impl<L: ?Sized> fmt::Debug for ListenerPoint<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerPoint")
            .field("operation", &self.operation)
            .field("phase", &self.phase)
            .finish()
    }
}

impl<L: ?Sized> fmt::Display for ListenerPoint<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.phase {
            Phase::Exception => f.write_str("on exception"),
            phase => write!(f, "{} {}", phase, self.operation.name),
        }
    }
}
