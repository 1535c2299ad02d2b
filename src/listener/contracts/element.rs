//! Element listener contracts

use std::sync::Arc;

use crate::webdriver::{Coordinates, Dimension, Point, Rectangle, WebElement};

listener_contract! {
    /// Before and after `click` on an element
    OnClick::on_click(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_click(inv.driver, inv.element()?);
}

listener_contract! {
    OnClear::on_clear(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_clear(inv.driver, inv.element()?);
}

listener_contract! {
    OnSubmit::on_submit(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_submit(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetTagNameBefore::on_get_tag_name(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_tag_name(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetTagNameAfter::on_get_tag_name(element: &Arc<dyn WebElement>, tag_name: &str);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_tag_name(inv.driver, inv.element()?, inv.result::<String>()?);
}

listener_contract! {
    OnGetTextBefore::on_get_text(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_text(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetTextAfter::on_get_text(element: &Arc<dyn WebElement>, text: &str);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_text(inv.driver, inv.element()?, inv.result::<String>()?);
}

listener_contract! {
    OnIsDisplayedBefore::on_is_displayed(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_displayed(inv.driver, inv.element()?);
}

listener_contract! {
    OnIsDisplayedAfter::on_is_displayed(element: &Arc<dyn WebElement>, displayed: bool);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_displayed(inv.driver, inv.element()?, *inv.result::<bool>()?);
}

listener_contract! {
    OnIsEnabledBefore::on_is_enabled(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_enabled(inv.driver, inv.element()?);
}

listener_contract! {
    OnIsEnabledAfter::on_is_enabled(element: &Arc<dyn WebElement>, enabled: bool);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_enabled(inv.driver, inv.element()?, *inv.result::<bool>()?);
}

listener_contract! {
    OnIsSelectedBefore::on_is_selected(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_selected(inv.driver, inv.element()?);
}

listener_contract! {
    OnIsSelectedAfter::on_is_selected(element: &Arc<dyn WebElement>, selected: bool);
    applies [Element] x [None];
    dispatch |this, inv| this.on_is_selected(inv.driver, inv.element()?, *inv.result::<bool>()?);
}

listener_contract! {
    /// Before and after `sendKeys` on an element
    OnSendKeys::on_send_keys(element: &Arc<dyn WebElement>, keys: &str);
    applies [Element] x [Text];
    dispatch |this, inv| this.on_send_keys(inv.driver, inv.element()?, inv.args.text()?);
}

listener_contract! {
    OnGetAttributeBefore::on_get_attribute(element: &Arc<dyn WebElement>, name: &str);
    applies [Element] x [Text];
    dispatch |this, inv| this.on_get_attribute(inv.driver, inv.element()?, inv.args.text()?);
}

listener_contract! {
    /// After `getAttribute`; `value` is `None` when the attribute is absent
    OnGetAttributeAfter::on_get_attribute(
        element: &Arc<dyn WebElement>,
        name: &str,
        value: Option<&str>,
    );
    applies [Element] x [Text];
    dispatch |this, inv| this.on_get_attribute(
        inv.driver,
        inv.element()?,
        inv.args.text()?,
        inv.result::<Option<String>>()?.as_deref(),
    );
}

listener_contract! {
    OnGetCssValueBefore::on_get_css_value(element: &Arc<dyn WebElement>, property: &str);
    applies [Element] x [Text];
    dispatch |this, inv| this.on_get_css_value(inv.driver, inv.element()?, inv.args.text()?);
}

listener_contract! {
    OnGetCssValueAfter::on_get_css_value(element: &Arc<dyn WebElement>, property: &str, value: &str);
    applies [Element] x [Text];
    dispatch |this, inv| this.on_get_css_value(
        inv.driver,
        inv.element()?,
        inv.args.text()?,
        inv.result::<String>()?,
    );
}

listener_contract! {
    OnGetLocationBefore::on_get_location(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_location(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetLocationAfter::on_get_location(element: &Arc<dyn WebElement>, location: Point);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_location(inv.driver, inv.element()?, *inv.result::<Point>()?);
}

listener_contract! {
    OnGetRectBefore::on_get_rect(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_rect(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetRectAfter::on_get_rect(element: &Arc<dyn WebElement>, rect: Rectangle);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_rect(inv.driver, inv.element()?, *inv.result::<Rectangle>()?);
}

listener_contract! {
    OnGetSizeBefore::on_get_size(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_size(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetSizeAfter::on_get_size(element: &Arc<dyn WebElement>, size: Dimension);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_size(inv.driver, inv.element()?, *inv.result::<Dimension>()?);
}

listener_contract! {
    OnGetCoordinatesBefore::on_get_coordinates(element: &Arc<dyn WebElement>);
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_coordinates(inv.driver, inv.element()?);
}

listener_contract! {
    OnGetCoordinatesAfter::on_get_coordinates(
        element: &Arc<dyn WebElement>,
        coordinates: &Coordinates,
    );
    applies [Element] x [None];
    dispatch |this, inv| this.on_get_coordinates(
        inv.driver,
        inv.element()?,
        inv.result::<Coordinates>()?,
    );
}
