//! Driver-level listener contracts

use std::sync::Arc;

use crate::webdriver::{
    By, Keyboard, Mouse, Navigation, Options, OutputType, Screenshot, ScriptValue, TargetLocator,
    TouchScreen, WebElement,
};

listener_contract! {
    /// Before and after `close`
    OnClose::on_close();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_close(inv.driver);
}

listener_contract! {
    /// Before and after `quit`
    OnQuit::on_quit();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_quit(inv.driver);
}

listener_contract! {
    /// Before and after `get`
    OnGet::on_get(url: &str);
    applies [Driver] x [Text];
    dispatch |this, inv| this.on_get(inv.driver, inv.args.text()?);
}

listener_contract! {
    OnGetCurrentUrlBefore::on_get_current_url();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_current_url(inv.driver);
}

listener_contract! {
    OnGetCurrentUrlAfter::on_get_current_url(url: &str);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_current_url(inv.driver, inv.result::<String>()?);
}

listener_contract! {
    OnGetPageSourceBefore::on_get_page_source();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_page_source(inv.driver);
}

listener_contract! {
    OnGetPageSourceAfter::on_get_page_source(source: &str);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_page_source(inv.driver, inv.result::<String>()?);
}

listener_contract! {
    OnGetTitleBefore::on_get_title();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_title(inv.driver);
}

listener_contract! {
    OnGetTitleAfter::on_get_title(title: &str);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_title(inv.driver, inv.result::<String>()?);
}

listener_contract! {
    OnGetWindowHandleBefore::on_get_window_handle();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_window_handle(inv.driver);
}

listener_contract! {
    OnGetWindowHandleAfter::on_get_window_handle(handle: &str);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_window_handle(inv.driver, inv.result::<String>()?);
}

listener_contract! {
    OnGetWindowHandlesBefore::on_get_window_handles();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_window_handles(inv.driver);
}

listener_contract! {
    OnGetWindowHandlesAfter::on_get_window_handles(handles: &[String]);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_window_handles(inv.driver, inv.result::<Vec<String>>()?);
}

listener_contract! {
    /// Before `findElement` on the driver (`root` is `None`) or on an element
    OnFindElementBefore::on_find_element(root: Option<&Arc<dyn WebElement>>, by: &By);
    applies [Driver, Element] x [Locator];
    dispatch |this, inv| this.on_find_element(inv.driver, inv.root_element()?, inv.args.locator()?);
}

listener_contract! {
    /// After `findElement`; receives the real element, not its proxy
    OnFindElementAfter::on_find_element(
        root: Option<&Arc<dyn WebElement>>,
        by: &By,
        element: &Arc<dyn WebElement>,
    );
    applies [Driver, Element] x [Locator];
    dispatch |this, inv| this.on_find_element(
        inv.driver,
        inv.root_element()?,
        inv.args.locator()?,
        inv.result::<Arc<dyn WebElement>>()?,
    );
}

listener_contract! {
    OnFindElementsBefore::on_find_elements(root: Option<&Arc<dyn WebElement>>, by: &By);
    applies [Driver, Element] x [Locator];
    dispatch |this, inv| this.on_find_elements(inv.driver, inv.root_element()?, inv.args.locator()?);
}

listener_contract! {
    /// After `findElements`; receives the real elements
    OnFindElementsAfter::on_find_elements(
        root: Option<&Arc<dyn WebElement>>,
        by: &By,
        elements: &[Arc<dyn WebElement>],
    );
    applies [Driver, Element] x [Locator];
    dispatch |this, inv| this.on_find_elements(
        inv.driver,
        inv.root_element()?,
        inv.args.locator()?,
        inv.result::<Vec<Arc<dyn WebElement>>>()?,
    );
}

listener_contract! {
    OnNavigateBefore::on_navigate();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_navigate(inv.driver);
}

listener_contract! {
    OnNavigateAfter::on_navigate(navigation: &Arc<dyn Navigation>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_navigate(inv.driver, inv.result::<Arc<dyn Navigation>>()?);
}

listener_contract! {
    OnSwitchToBefore::on_switch_to();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_switch_to(inv.driver);
}

listener_contract! {
    OnSwitchToAfter::on_switch_to(target_locator: &Arc<dyn TargetLocator>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_switch_to(inv.driver, inv.result::<Arc<dyn TargetLocator>>()?);
}

listener_contract! {
    OnManageBefore::on_manage();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_manage(inv.driver);
}

listener_contract! {
    OnManageAfter::on_manage(options: &Arc<dyn Options>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_manage(inv.driver, inv.result::<Arc<dyn Options>>()?);
}

listener_contract! {
    OnGetKeyboardBefore::on_get_keyboard();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_keyboard(inv.driver);
}

listener_contract! {
    OnGetKeyboardAfter::on_get_keyboard(keyboard: &Arc<dyn Keyboard>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_keyboard(inv.driver, inv.result::<Arc<dyn Keyboard>>()?);
}

listener_contract! {
    OnGetMouseBefore::on_get_mouse();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_mouse(inv.driver);
}

listener_contract! {
    OnGetMouseAfter::on_get_mouse(mouse: &Arc<dyn Mouse>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_mouse(inv.driver, inv.result::<Arc<dyn Mouse>>()?);
}

listener_contract! {
    OnGetTouchBefore::on_get_touch();
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_touch(inv.driver);
}

listener_contract! {
    OnGetTouchAfter::on_get_touch(touch: &Arc<dyn TouchScreen>);
    applies [Driver] x [None];
    dispatch |this, inv| this.on_get_touch(inv.driver, inv.result::<Arc<dyn TouchScreen>>()?);
}

listener_contract! {
    /// Before `executeScript`; `args` are exactly what the caller passed
    OnExecuteScriptBefore::on_execute_script(script: &str, args: &[ScriptValue]);
    applies [Driver] x [Script];
    dispatch |this, inv| {
        let (script, args) = inv.args.script()?;
        this.on_execute_script(inv.driver, script, args)
    };
}

listener_contract! {
    /// After `executeScript` with the raw result and the caller's arguments
    OnExecuteScriptAfter::on_execute_script(result: &ScriptValue, script: &str, args: &[ScriptValue]);
    applies [Driver] x [Script];
    dispatch |this, inv| {
        let (script, args) = inv.args.script()?;
        this.on_execute_script(inv.driver, inv.result::<ScriptValue>()?, script, args)
    };
}

listener_contract! {
    OnExecuteAsyncScriptBefore::on_execute_async_script(script: &str, args: &[ScriptValue]);
    applies [Driver] x [Script];
    dispatch |this, inv| {
        let (script, args) = inv.args.script()?;
        this.on_execute_async_script(inv.driver, script, args)
    };
}

listener_contract! {
    OnExecuteAsyncScriptAfter::on_execute_async_script(
        result: &ScriptValue,
        script: &str,
        args: &[ScriptValue],
    );
    applies [Driver] x [Script];
    dispatch |this, inv| {
        let (script, args) = inv.args.script()?;
        this.on_execute_async_script(inv.driver, inv.result::<ScriptValue>()?, script, args)
    };
}

listener_contract! {
    /// Before a screenshot of the viewport (`element` is `None`) or of an
    /// element
    OnGetScreenshotAsBefore::on_get_screenshot_as(
        element: Option<&Arc<dyn WebElement>>,
        output: OutputType,
    );
    applies [Driver, Element] x [Output];
    dispatch |this, inv| this.on_get_screenshot_as(inv.driver, inv.root_element()?, inv.args.output()?);
}

listener_contract! {
    OnGetScreenshotAsAfter::on_get_screenshot_as(
        element: Option<&Arc<dyn WebElement>>,
        output: OutputType,
        screenshot: &Screenshot,
    );
    applies [Driver, Element] x [Output];
    dispatch |this, inv| this.on_get_screenshot_as(
        inv.driver,
        inv.root_element()?,
        inv.args.output()?,
        inv.result::<Screenshot>()?,
    );
}
