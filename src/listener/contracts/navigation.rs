//! Navigation and target-locator listener contracts

use std::sync::Arc;

use crate::listener::FrameRef;
use crate::webdriver::{Alert, Navigation, TargetLocator, WebElement};

listener_contract! {
    OnNavigateBack::on_back(navigation: &Arc<dyn Navigation>);
    applies [Navigation] x [None];
    dispatch |this, inv| this.on_back(inv.driver, inv.navigation()?);
}

listener_contract! {
    OnNavigateForward::on_forward(navigation: &Arc<dyn Navigation>);
    applies [Navigation] x [None];
    dispatch |this, inv| this.on_forward(inv.driver, inv.navigation()?);
}

listener_contract! {
    OnRefresh::on_refresh(navigation: &Arc<dyn Navigation>);
    applies [Navigation] x [None];
    dispatch |this, inv| this.on_refresh(inv.driver, inv.navigation()?);
}

listener_contract! {
    /// Before and after `to`; a `Url` argument is reported as its text
    OnNavigateTo::on_to(navigation: &Arc<dyn Navigation>, url: &str);
    applies [Navigation] x [Text, Url];
    dispatch |this, inv| this.on_to(inv.driver, inv.navigation()?, inv.args.url_text()?);
}

listener_contract! {
    /// Before and after any of the `frame` overloads
    OnSwitchToFrame::on_switch_to_frame(target_locator: &Arc<dyn TargetLocator>, frame: FrameRef<'_>);
    applies [TargetLocator] x [Index, Text, Element];
    dispatch |this, inv| this.on_switch_to_frame(
        inv.driver,
        inv.target_locator()?,
        FrameRef::from_args(&inv.args)?,
    );
}

listener_contract! {
    OnSwitchToWindow::on_switch_to_window(target_locator: &Arc<dyn TargetLocator>, name_or_handle: &str);
    applies [TargetLocator] x [Text];
    dispatch |this, inv| this.on_switch_to_window(inv.driver, inv.target_locator()?, inv.args.text()?);
}

listener_contract! {
    OnSwitchToDefaultContent::on_switch_to_default_content(target_locator: &Arc<dyn TargetLocator>);
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_default_content(inv.driver, inv.target_locator()?);
}

listener_contract! {
    OnSwitchToParentFrame::on_switch_to_parent_frame(target_locator: &Arc<dyn TargetLocator>);
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_parent_frame(inv.driver, inv.target_locator()?);
}

listener_contract! {
    OnSwitchToActiveElementBefore::on_switch_to_active_element(target_locator: &Arc<dyn TargetLocator>);
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_active_element(inv.driver, inv.target_locator()?);
}

listener_contract! {
    OnSwitchToActiveElementAfter::on_switch_to_active_element(
        target_locator: &Arc<dyn TargetLocator>,
        element: &Arc<dyn WebElement>,
    );
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_active_element(
        inv.driver,
        inv.target_locator()?,
        inv.result::<Arc<dyn WebElement>>()?,
    );
}

listener_contract! {
    OnSwitchToAlertBefore::on_switch_to_alert(target_locator: &Arc<dyn TargetLocator>);
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_alert(inv.driver, inv.target_locator()?);
}

listener_contract! {
    OnSwitchToAlertAfter::on_switch_to_alert(target_locator: &Arc<dyn TargetLocator>, alert: &Arc<dyn Alert>);
    applies [TargetLocator] x [None];
    dispatch |this, inv| this.on_switch_to_alert(
        inv.driver,
        inv.target_locator()?,
        inv.result::<Arc<dyn Alert>>()?,
    );
}
