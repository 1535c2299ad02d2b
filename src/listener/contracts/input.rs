//! Keyboard, mouse and touch-screen listener contracts
//!
//! Gesture overloads share one contract. Arguments an overload does not
//! take are reported as zero, and a missing target as `None`.

use std::sync::Arc;

use crate::listener::CallArgs;
use crate::webdriver::{Coordinates, Keyboard, Mouse, TouchScreen};

listener_contract! {
    OnPressKey::on_press_key(keyboard: &Arc<dyn Keyboard>, key: &str);
    applies [Keyboard] x [Text];
    dispatch |this, inv| this.on_press_key(inv.driver, inv.keyboard()?, inv.args.text()?);
}

listener_contract! {
    OnReleaseKey::on_release_key(keyboard: &Arc<dyn Keyboard>, key: &str);
    applies [Keyboard] x [Text];
    dispatch |this, inv| this.on_release_key(inv.driver, inv.keyboard()?, inv.args.text()?);
}

listener_contract! {
    OnSendKeysFromKeyboard::on_send_keys(keyboard: &Arc<dyn Keyboard>, keys: &str);
    applies [Keyboard] x [Text];
    dispatch |this, inv| this.on_send_keys(inv.driver, inv.keyboard()?, inv.args.text()?);
}

// Mouse

listener_contract! {
    OnMouseClick::on_click(mouse: &Arc<dyn Mouse>, at: Option<&Coordinates>);
    applies [Mouse] x [Coordinates];
    dispatch |this, inv| this.on_click(inv.driver, inv.mouse()?, inv.args.coordinates()?);
}

listener_contract! {
    OnContextClick::on_context_click(mouse: &Arc<dyn Mouse>, at: Option<&Coordinates>);
    applies [Mouse] x [Coordinates];
    dispatch |this, inv| this.on_context_click(inv.driver, inv.mouse()?, inv.args.coordinates()?);
}

listener_contract! {
    OnDoubleClick::on_double_click(mouse: &Arc<dyn Mouse>, at: Option<&Coordinates>);
    applies [Mouse] x [Coordinates];
    dispatch |this, inv| this.on_double_click(inv.driver, inv.mouse()?, inv.args.coordinates()?);
}

listener_contract! {
    OnMouseDown::on_mouse_down(mouse: &Arc<dyn Mouse>, at: Option<&Coordinates>);
    applies [Mouse] x [Coordinates];
    dispatch |this, inv| this.on_mouse_down(inv.driver, inv.mouse()?, inv.args.coordinates()?);
}

listener_contract! {
    OnMouseUp::on_mouse_up(mouse: &Arc<dyn Mouse>, at: Option<&Coordinates>);
    applies [Mouse] x [Coordinates];
    dispatch |this, inv| this.on_mouse_up(inv.driver, inv.mouse()?, inv.args.coordinates()?);
}

listener_contract! {
    /// Before and after `mouseMove`, with or without offsets
    OnMouseMove::on_mouse_move(mouse: &Arc<dyn Mouse>, to: Option<&Coordinates>, x_offset: i64, y_offset: i64);
    applies [Mouse] x [Coordinates, CoordinatesOffset];
    dispatch |this, inv| {
        let (to, x_offset, y_offset) = match inv.args {
            CallArgs::Coordinates(to) => (to, 0, 0),
            CallArgs::CoordinatesOffset(to, x, y) => (to, x, y),
            _ => return None,
        };
        this.on_mouse_move(inv.driver, inv.mouse()?, to, x_offset, y_offset)
    };
}

// Touch screen

listener_contract! {
    OnSingleTap::on_single_tap(touch: &Arc<dyn TouchScreen>, at: Option<&Coordinates>);
    applies [TouchScreen] x [Coordinates];
    dispatch |this, inv| this.on_single_tap(inv.driver, inv.touch()?, inv.args.coordinates()?);
}

listener_contract! {
    OnDoubleTap::on_double_tap(touch: &Arc<dyn TouchScreen>, at: Option<&Coordinates>);
    applies [TouchScreen] x [Coordinates];
    dispatch |this, inv| this.on_double_tap(inv.driver, inv.touch()?, inv.args.coordinates()?);
}

listener_contract! {
    OnLongPress::on_long_press(touch: &Arc<dyn TouchScreen>, at: Option<&Coordinates>);
    applies [TouchScreen] x [Coordinates];
    dispatch |this, inv| this.on_long_press(inv.driver, inv.touch()?, inv.args.coordinates()?);
}

listener_contract! {
    OnTouchDown::on_touch_down(touch: &Arc<dyn TouchScreen>, x: i64, y: i64);
    applies [TouchScreen] x [Offset];
    dispatch |this, inv| {
        let (x, y) = inv.args.offset()?;
        this.on_touch_down(inv.driver, inv.touch()?, x, y)
    };
}

listener_contract! {
    OnTouchUp::on_touch_up(touch: &Arc<dyn TouchScreen>, x: i64, y: i64);
    applies [TouchScreen] x [Offset];
    dispatch |this, inv| {
        let (x, y) = inv.args.offset()?;
        this.on_touch_up(inv.driver, inv.touch()?, x, y)
    };
}

listener_contract! {
    OnTouchMove::on_touch_move(touch: &Arc<dyn TouchScreen>, x: i64, y: i64);
    applies [TouchScreen] x [Offset];
    dispatch |this, inv| {
        let (x, y) = inv.args.offset()?;
        this.on_touch_move(inv.driver, inv.touch()?, x, y)
    };
}

listener_contract! {
    /// Before and after `scroll`, from a target or from the current position
    OnTouchScroll::on_touch_scroll(touch: &Arc<dyn TouchScreen>, from: Option<&Coordinates>, x_offset: i64, y_offset: i64);
    applies [TouchScreen] x [Offset, CoordinatesOffset];
    dispatch |this, inv| {
        let (from, x_offset, y_offset) = match inv.args {
            CallArgs::Offset(x, y) => (None, x, y),
            CallArgs::CoordinatesOffset(from, x, y) => (from, x, y),
            _ => return None,
        };
        this.on_touch_scroll(inv.driver, inv.touch()?, from, x_offset, y_offset)
    };
}

listener_contract! {
    /// Before and after `flick`.
    ///
    /// A flick by speed reports no target and zero offsets and speed; a
    /// flick from a target reports zero x and y speed.
    OnTouchFlick::on_touch_flick(
        touch: &Arc<dyn TouchScreen>,
        from: Option<&Coordinates>,
        x_offset: i64,
        y_offset: i64,
        speed: i64,
        x_speed: i64,
        y_speed: i64,
    );
    applies [TouchScreen] x [Offset, FlickFrom];
    dispatch |this, inv| {
        let (from, x_offset, y_offset, speed, x_speed, y_speed) = match inv.args {
            CallArgs::Offset(x_speed, y_speed) => (None, 0, 0, 0, x_speed, y_speed),
            CallArgs::FlickFrom(from, x, y, speed) => (from, x, y, speed, 0, 0),
            _ => return None,
        };
        this.on_touch_flick(inv.driver, inv.touch()?, from, x_offset, y_offset, speed, x_speed, y_speed)
    };
}
