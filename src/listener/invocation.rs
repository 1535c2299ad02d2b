//! The argument/result bag handed to listeners
//!
//! A proxy describes each intercepted call as an [`Invocation`]: the real
//! root driver, the real receiver, the operation, the call arguments in one
//! of a fixed set of shapes, and the outcome so far.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::point::{Capability, Operation};
use crate::webdriver::{
    Alert, By, Cookie, Coordinates, Credentials, Dimension, ImeHandler, Keyboard, Logs, Mouse,
    Navigation, Options, OutputType, Point, ScriptValue, TargetLocator, Timeouts, TouchScreen,
    WebDriver, WebElement, Window,
};
use crate::Error;

/// Real object an operation was invoked on
#[derive(Clone, Copy)]
pub enum Receiver<'a> {
    /// The root driver itself; see [`Invocation::driver`]
    Driver,
    Element(&'a Arc<dyn WebElement>),
    Navigation(&'a Arc<dyn Navigation>),
    Options(&'a Arc<dyn Options>),
    TargetLocator(&'a Arc<dyn TargetLocator>),
    Window(&'a Arc<dyn Window>),
    Timeouts(&'a Arc<dyn Timeouts>),
    Logs(&'a Arc<dyn Logs>),
    ImeHandler(&'a Arc<dyn ImeHandler>),
    Alert(&'a Arc<dyn Alert>),
    Keyboard(&'a Arc<dyn Keyboard>),
    Mouse(&'a Arc<dyn Mouse>),
    TouchScreen(&'a Arc<dyn TouchScreen>),
}

impl Receiver<'_> {
    pub fn capability(&self) -> Capability {
        match self {
            Receiver::Driver => Capability::Driver,
            Receiver::Element(_) => Capability::Element,
            Receiver::Navigation(_) => Capability::Navigation,
            Receiver::Options(_) => Capability::Options,
            Receiver::TargetLocator(_) => Capability::TargetLocator,
            Receiver::Window(_) => Capability::Window,
            Receiver::Timeouts(_) => Capability::Timeouts,
            Receiver::Logs(_) => Capability::Logs,
            Receiver::ImeHandler(_) => Capability::ImeHandler,
            Receiver::Alert(_) => Capability::Alert,
            Receiver::Keyboard(_) => Capability::Keyboard,
            Receiver::Mouse(_) => Capability::Mouse,
            Receiver::TouchScreen(_) => Capability::TouchScreen,
        }
    }
}

/// Arguments of an intercepted call, one variant per call shape
#[derive(Clone, Copy)]
pub enum CallArgs<'a> {
    None,
    Text(&'a str),
    Url(&'a Url),
    Locator(&'a By),
    Index(usize),
    Element(&'a Arc<dyn WebElement>),
    Cookie(&'a Cookie),
    Credentials(&'a Credentials),
    Point(Point),
    Dimension(Dimension),
    Duration(Duration),
    Output(OutputType),
    Coordinates(Option<&'a Coordinates>),
    CoordinatesOffset(Option<&'a Coordinates>, i64, i64),
    Offset(i64, i64),
    FlickFrom(Option<&'a Coordinates>, i64, i64, i64),
    Script(&'a str, &'a [ScriptValue]),
}

/// Parameter-type signature of a call, without the values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallShape {
    None,
    Text,
    Url,
    Locator,
    Index,
    Element,
    Cookie,
    Credentials,
    Point,
    Dimension,
    Duration,
    Output,
    Coordinates,
    CoordinatesOffset,
    Offset,
    FlickFrom,
    Script,
}

impl<'a> CallArgs<'a> {
    pub fn shape(&self) -> CallShape {
        match self {
            CallArgs::None => CallShape::None,
            CallArgs::Text(_) => CallShape::Text,
            CallArgs::Url(_) => CallShape::Url,
            CallArgs::Locator(_) => CallShape::Locator,
            CallArgs::Index(_) => CallShape::Index,
            CallArgs::Element(_) => CallShape::Element,
            CallArgs::Cookie(_) => CallShape::Cookie,
            CallArgs::Credentials(_) => CallShape::Credentials,
            CallArgs::Point(_) => CallShape::Point,
            CallArgs::Dimension(_) => CallShape::Dimension,
            CallArgs::Duration(_) => CallShape::Duration,
            CallArgs::Output(_) => CallShape::Output,
            CallArgs::Coordinates(_) => CallShape::Coordinates,
            CallArgs::CoordinatesOffset(..) => CallShape::CoordinatesOffset,
            CallArgs::Offset(..) => CallShape::Offset,
            CallArgs::FlickFrom(..) => CallShape::FlickFrom,
            CallArgs::Script(..) => CallShape::Script,
        }
    }

    pub fn text(&self) -> Option<&'a str> {
        match *self {
            CallArgs::Text(text) => Some(text),
            _ => None,
        }
    }

    /// URL given either as text or as a parsed `Url`.
    ///
    /// A parsed URL whose only path is the root `/` added by parsing is
    /// reported without it, so `file://url` stays `file://url`.
    pub fn url_text(&self) -> Option<&'a str> {
        match *self {
            CallArgs::Text(text) => Some(text),
            CallArgs::Url(url) => {
                let text = url.as_str();
                if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
                    Some(text.strip_suffix('/').unwrap_or(text))
                } else {
                    Some(text)
                }
            }
            _ => None,
        }
    }

    pub fn locator(&self) -> Option<&'a By> {
        match *self {
            CallArgs::Locator(by) => Some(by),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&'a Arc<dyn WebElement>> {
        match *self {
            CallArgs::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn cookie(&self) -> Option<&'a Cookie> {
        match *self {
            CallArgs::Cookie(cookie) => Some(cookie),
            _ => None,
        }
    }

    pub fn credentials(&self) -> Option<&'a Credentials> {
        match *self {
            CallArgs::Credentials(credentials) => Some(credentials),
            _ => None,
        }
    }

    pub fn point(&self) -> Option<Point> {
        match *self {
            CallArgs::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn dimension(&self) -> Option<Dimension> {
        match *self {
            CallArgs::Dimension(dimension) => Some(dimension),
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        match *self {
            CallArgs::Duration(duration) => Some(duration),
            _ => None,
        }
    }

    pub fn output(&self) -> Option<OutputType> {
        match *self {
            CallArgs::Output(output) => Some(output),
            _ => None,
        }
    }

    /// Target of a single-target gesture; the inner `None` means "here"
    pub fn coordinates(&self) -> Option<Option<&'a Coordinates>> {
        match *self {
            CallArgs::Coordinates(at) => Some(at),
            _ => None,
        }
    }

    pub fn offset(&self) -> Option<(i64, i64)> {
        match *self {
            CallArgs::Offset(x, y) => Some((x, y)),
            _ => None,
        }
    }

    pub fn script(&self) -> Option<(&'a str, &'a [ScriptValue])> {
        match *self {
            CallArgs::Script(script, args) => Some((script, args)),
            _ => None,
        }
    }
}

/// Frame switch target
#[derive(Clone, Copy)]
pub enum FrameRef<'a> {
    Index(usize),
    NameOrId(&'a str),
    Element(&'a Arc<dyn WebElement>),
}

impl<'a> FrameRef<'a> {
    pub(crate) fn from_args(args: &CallArgs<'a>) -> Option<Self> {
        match *args {
            CallArgs::Index(index) => Some(FrameRef::Index(index)),
            CallArgs::Text(name) => Some(FrameRef::NameOrId(name)),
            CallArgs::Element(element) => Some(FrameRef::Element(element)),
            _ => None,
        }
    }
}

/// What the delegated call produced so far
#[derive(Clone, Copy)]
pub enum Outcome<'a> {
    /// Before delegation
    Pending,
    /// Raw value returned by the real receiver
    Returned(&'a dyn Any),
    /// Fault raised by the real receiver
    Failed(&'a Error),
}

/// One intercepted call as seen by a listener
#[derive(Clone, Copy)]
pub struct Invocation<'a> {
    /// Real root driver of the wrapped graph
    pub driver: &'a Arc<dyn WebDriver>,
    pub receiver: Receiver<'a>,
    pub operation: Operation,
    pub args: CallArgs<'a>,
    pub outcome: Outcome<'a>,
}

macro_rules! receiver_accessors {
    ($($method:ident => $variant:ident: $ty:ty;)*) => {
        impl<'a> Invocation<'a> {
            $(
                pub fn $method(&self) -> Option<&'a Arc<$ty>> {
                    match self.receiver {
                        Receiver::$variant(receiver) => Some(receiver),
                        _ => None,
                    }
                }
            )*
        }
    };
}

receiver_accessors! {
    element => Element: dyn WebElement;
    navigation => Navigation: dyn Navigation;
    options => Options: dyn Options;
    target_locator => TargetLocator: dyn TargetLocator;
    window => Window: dyn Window;
    timeouts => Timeouts: dyn Timeouts;
    logs => Logs: dyn Logs;
    ime => ImeHandler: dyn ImeHandler;
    alert => Alert: dyn Alert;
    keyboard => Keyboard: dyn Keyboard;
    mouse => Mouse: dyn Mouse;
    touch => TouchScreen: dyn TouchScreen;
}

impl<'a> Invocation<'a> {
    /// Raw result of the call, if it succeeded with a `T`
    pub fn result<T: Any>(&self) -> Option<&'a T> {
        match self.outcome {
            Outcome::Returned(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&'a Error> {
        match self.outcome {
            Outcome::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Element an element-level call was made on; `None` for driver calls
    pub fn root_element(&self) -> Option<Option<&'a Arc<dyn WebElement>>> {
        match self.receiver {
            Receiver::Driver => Some(None),
            Receiver::Element(element) => Some(Some(element)),
            _ => None,
        }
    }
}
