//! Keyboard, mouse and touch-screen proxies

use async_trait::async_trait;
use std::sync::Arc;

use super::{Call, Dispatcher};
use crate::listener::ops;
use crate::listener::{CallArgs, Capability, Operation, Receiver};
use crate::webdriver::{Coordinates, Keyboard, Mouse, TouchScreen, WrapsOriginal};
use crate::Result;

// ============================================================================
// Keyboard
// ============================================================================

pub struct ListenableKeyboard {
    inner: Arc<dyn Keyboard>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableKeyboard {
    pub(super) fn wrap(
        inner: Arc<dyn Keyboard>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn Keyboard> {
        dispatcher.wrapped(Capability::Keyboard);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, keys: &'a str) -> Call<'a> {
        Call::new(
            Receiver::Keyboard(&self.inner),
            operation,
            CallArgs::Text(keys),
        )
    }
}

impl WrapsOriginal<dyn Keyboard> for ListenableKeyboard {
    fn wrapped_original(&self) -> Arc<dyn Keyboard> {
        self.inner.clone()
    }
}

#[async_trait]
impl Keyboard for ListenableKeyboard {
    async fn send_keys(&self, keys: &str) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SEND_KEYS_FROM_KEYBOARD, keys),
                self.inner.send_keys(keys),
            )
            .await
    }

    async fn press_key(&self, key: &str) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::PRESS_KEY, key), self.inner.press_key(key))
            .await
    }

    async fn release_key(&self, key: &str) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::RELEASE_KEY, key), self.inner.release_key(key))
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Keyboard>> {
        Some(self)
    }
}

// ============================================================================
// Mouse
// ============================================================================

pub struct ListenableMouse {
    inner: Arc<dyn Mouse>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableMouse {
    pub(super) fn wrap(inner: Arc<dyn Mouse>, dispatcher: &Arc<Dispatcher>) -> Arc<dyn Mouse> {
        dispatcher.wrapped(Capability::Mouse);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::Mouse(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn Mouse> for ListenableMouse {
    fn wrapped_original(&self) -> Arc<dyn Mouse> {
        self.inner.clone()
    }
}

#[async_trait]
impl Mouse for ListenableMouse {
    async fn click(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::MOUSE_CLICK, CallArgs::Coordinates(at)), self.inner.click(at))
            .await
    }

    async fn double_click(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::DOUBLE_CLICK, CallArgs::Coordinates(at)),
                self.inner.double_click(at),
            )
            .await
    }

    async fn mouse_down(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::MOUSE_DOWN, CallArgs::Coordinates(at)),
                self.inner.mouse_down(at),
            )
            .await
    }

    async fn mouse_up(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::MOUSE_UP, CallArgs::Coordinates(at)),
                self.inner.mouse_up(at),
            )
            .await
    }

    async fn mouse_move(&self, to: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::MOUSE_MOVE, CallArgs::Coordinates(to)),
                self.inner.mouse_move(to),
            )
            .await
    }

    async fn mouse_move_by(
        &self,
        to: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
    ) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(
                    ops::MOUSE_MOVE,
                    CallArgs::CoordinatesOffset(to, x_offset, y_offset),
                ),
                self.inner.mouse_move_by(to, x_offset, y_offset),
            )
            .await
    }

    async fn context_click(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::CONTEXT_CLICK, CallArgs::Coordinates(at)),
                self.inner.context_click(at),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn Mouse>> {
        Some(self)
    }
}

// ============================================================================
// Touch screen
// ============================================================================

pub struct ListenableTouchScreen {
    inner: Arc<dyn TouchScreen>,
    dispatcher: Arc<Dispatcher>,
}

impl ListenableTouchScreen {
    pub(super) fn wrap(
        inner: Arc<dyn TouchScreen>,
        dispatcher: &Arc<Dispatcher>,
    ) -> Arc<dyn TouchScreen> {
        dispatcher.wrapped(Capability::TouchScreen);
        Arc::new(Self {
            inner,
            dispatcher: dispatcher.clone(),
        })
    }

    fn call<'a>(&'a self, operation: Operation, args: CallArgs<'a>) -> Call<'a> {
        Call::new(Receiver::TouchScreen(&self.inner), operation, args)
    }
}

impl WrapsOriginal<dyn TouchScreen> for ListenableTouchScreen {
    fn wrapped_original(&self) -> Arc<dyn TouchScreen> {
        self.inner.clone()
    }
}

#[async_trait]
impl TouchScreen for ListenableTouchScreen {
    async fn single_tap(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::SINGLE_TAP, CallArgs::Coordinates(at)),
                self.inner.single_tap(at),
            )
            .await
    }

    async fn down(&self, x: i64, y: i64) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::TOUCH_DOWN, CallArgs::Offset(x, y)), self.inner.down(x, y))
            .await
    }

    async fn up(&self, x: i64, y: i64) -> Result<()> {
        self.dispatcher
            .intercept(self.call(ops::TOUCH_UP, CallArgs::Offset(x, y)), self.inner.up(x, y))
            .await
    }

    async fn move_to(&self, x: i64, y: i64) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::TOUCH_MOVE, CallArgs::Offset(x, y)),
                self.inner.move_to(x, y),
            )
            .await
    }

    async fn scroll_from(
        &self,
        from: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
    ) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(
                    ops::TOUCH_SCROLL,
                    CallArgs::CoordinatesOffset(from, x_offset, y_offset),
                ),
                self.inner.scroll_from(from, x_offset, y_offset),
            )
            .await
    }

    async fn double_tap(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::DOUBLE_TAP, CallArgs::Coordinates(at)),
                self.inner.double_tap(at),
            )
            .await
    }

    async fn long_press(&self, at: Option<&Coordinates>) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::LONG_PRESS, CallArgs::Coordinates(at)),
                self.inner.long_press(at),
            )
            .await
    }

    async fn scroll(&self, x_offset: i64, y_offset: i64) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::TOUCH_SCROLL, CallArgs::Offset(x_offset, y_offset)),
                self.inner.scroll(x_offset, y_offset),
            )
            .await
    }

    async fn flick(&self, x_speed: i64, y_speed: i64) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(ops::TOUCH_FLICK, CallArgs::Offset(x_speed, y_speed)),
                self.inner.flick(x_speed, y_speed),
            )
            .await
    }

    async fn flick_from(
        &self,
        from: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
        speed: i64,
    ) -> Result<()> {
        self.dispatcher
            .intercept(
                self.call(
                    ops::TOUCH_FLICK,
                    CallArgs::FlickFrom(from, x_offset, y_offset, speed),
                ),
                self.inner.flick_from(from, x_offset, y_offset, speed),
            )
            .await
    }

    fn as_wrapper(&self) -> Option<&dyn WrapsOriginal<dyn TouchScreen>> {
        Some(self)
    }
}
