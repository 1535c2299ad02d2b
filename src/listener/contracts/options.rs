//! Options listener contracts, including logs, IME, window and timeouts

use std::sync::Arc;
use std::time::Duration;

use crate::webdriver::{
    Cookie, Dimension, ImeHandler, LogEntries, Logs, Options, Point, Timeouts, Window,
};

listener_contract! {
    OnAddCookie::on_add_cookie(options: &Arc<dyn Options>, cookie: &Cookie);
    applies [Options] x [Cookie];
    dispatch |this, inv| this.on_add_cookie(inv.driver, inv.options()?, inv.args.cookie()?);
}

listener_contract! {
    OnDeleteCookie::on_delete_cookie(options: &Arc<dyn Options>, cookie: &Cookie);
    applies [Options] x [Cookie];
    dispatch |this, inv| this.on_delete_cookie(inv.driver, inv.options()?, inv.args.cookie()?);
}

listener_contract! {
    OnDeleteAllCookies::on_delete_all_cookies(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_delete_all_cookies(inv.driver, inv.options()?);
}

listener_contract! {
    OnGetCookieNamedBefore::on_get_cookie_named(options: &Arc<dyn Options>, name: &str);
    applies [Options] x [Text];
    dispatch |this, inv| this.on_get_cookie_named(inv.driver, inv.options()?, inv.args.text()?);
}

listener_contract! {
    OnGetCookieNamedAfter::on_get_cookie_named(
        options: &Arc<dyn Options>,
        name: &str,
        cookie: Option<&Cookie>,
    );
    applies [Options] x [Text];
    dispatch |this, inv| this.on_get_cookie_named(
        inv.driver,
        inv.options()?,
        inv.args.text()?,
        inv.result::<Option<Cookie>>()?.as_ref(),
    );
}

listener_contract! {
    OnDeleteCookieNamed::on_delete_cookie_named(options: &Arc<dyn Options>, name: &str);
    applies [Options] x [Text];
    dispatch |this, inv| this.on_delete_cookie_named(inv.driver, inv.options()?, inv.args.text()?);
}

listener_contract! {
    OnGetCookiesBefore::on_get_cookies(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_get_cookies(inv.driver, inv.options()?);
}

listener_contract! {
    OnGetCookiesAfter::on_get_cookies(options: &Arc<dyn Options>, cookies: &[Cookie]);
    applies [Options] x [None];
    dispatch |this, inv| this.on_get_cookies(inv.driver, inv.options()?, inv.result::<Vec<Cookie>>()?);
}

listener_contract! {
    OnLogsBefore::on_logs(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_logs(inv.driver, inv.options()?);
}

listener_contract! {
    OnLogsAfter::on_logs(options: &Arc<dyn Options>, logs: &Arc<dyn Logs>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_logs(inv.driver, inv.options()?, inv.result::<Arc<dyn Logs>>()?);
}

listener_contract! {
    OnImeBefore::on_ime(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_ime(inv.driver, inv.options()?);
}

listener_contract! {
    OnImeAfter::on_ime(options: &Arc<dyn Options>, ime: &Arc<dyn ImeHandler>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_ime(inv.driver, inv.options()?, inv.result::<Arc<dyn ImeHandler>>()?);
}

listener_contract! {
    OnWindowBefore::on_window(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_window(inv.driver, inv.options()?);
}

listener_contract! {
    OnWindowAfter::on_window(options: &Arc<dyn Options>, window: &Arc<dyn Window>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_window(inv.driver, inv.options()?, inv.result::<Arc<dyn Window>>()?);
}

listener_contract! {
    OnTimeoutsBefore::on_timeouts(options: &Arc<dyn Options>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_timeouts(inv.driver, inv.options()?);
}

listener_contract! {
    OnTimeoutsAfter::on_timeouts(options: &Arc<dyn Options>, timeouts: &Arc<dyn Timeouts>);
    applies [Options] x [None];
    dispatch |this, inv| this.on_timeouts(
        inv.driver,
        inv.options()?,
        inv.result::<Arc<dyn Timeouts>>()?,
    );
}

// Logs

listener_contract! {
    OnLogsGetBefore::on_logs_get(logs: &Arc<dyn Logs>, log_type: &str);
    applies [Logs] x [Text];
    dispatch |this, inv| this.on_logs_get(inv.driver, inv.logs()?, inv.args.text()?);
}

listener_contract! {
    OnLogsGetAfter::on_logs_get(logs: &Arc<dyn Logs>, log_type: &str, entries: &LogEntries);
    applies [Logs] x [Text];
    dispatch |this, inv| this.on_logs_get(
        inv.driver,
        inv.logs()?,
        inv.args.text()?,
        inv.result::<LogEntries>()?,
    );
}

listener_contract! {
    OnGetAvailableLogTypesBefore::on_get_available_log_types(logs: &Arc<dyn Logs>);
    applies [Logs] x [None];
    dispatch |this, inv| this.on_get_available_log_types(inv.driver, inv.logs()?);
}

listener_contract! {
    OnGetAvailableLogTypesAfter::on_get_available_log_types(logs: &Arc<dyn Logs>, log_types: &[String]);
    applies [Logs] x [None];
    dispatch |this, inv| this.on_get_available_log_types(
        inv.driver,
        inv.logs()?,
        inv.result::<Vec<String>>()?,
    );
}

// Input method editor

listener_contract! {
    OnGetAvailableEnginesBefore::on_get_available_engines(ime: &Arc<dyn ImeHandler>);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_get_available_engines(inv.driver, inv.ime()?);
}

listener_contract! {
    OnGetAvailableEnginesAfter::on_get_available_engines(ime: &Arc<dyn ImeHandler>, engines: &[String]);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_get_available_engines(
        inv.driver,
        inv.ime()?,
        inv.result::<Vec<String>>()?,
    );
}

listener_contract! {
    OnActivateEngine::on_activate_engine(ime: &Arc<dyn ImeHandler>, engine: &str);
    applies [ImeHandler] x [Text];
    dispatch |this, inv| this.on_activate_engine(inv.driver, inv.ime()?, inv.args.text()?);
}

listener_contract! {
    OnDeactivate::on_deactivate(ime: &Arc<dyn ImeHandler>);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_deactivate(inv.driver, inv.ime()?);
}

listener_contract! {
    OnGetActiveEngineBefore::on_get_active_engine(ime: &Arc<dyn ImeHandler>);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_get_active_engine(inv.driver, inv.ime()?);
}

listener_contract! {
    OnGetActiveEngineAfter::on_get_active_engine(ime: &Arc<dyn ImeHandler>, engine: &str);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_get_active_engine(inv.driver, inv.ime()?, inv.result::<String>()?);
}

listener_contract! {
    OnIsActivatedBefore::on_is_activated(ime: &Arc<dyn ImeHandler>);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_is_activated(inv.driver, inv.ime()?);
}

listener_contract! {
    OnIsActivatedAfter::on_is_activated(ime: &Arc<dyn ImeHandler>, activated: bool);
    applies [ImeHandler] x [None];
    dispatch |this, inv| this.on_is_activated(inv.driver, inv.ime()?, *inv.result::<bool>()?);
}

// Window

listener_contract! {
    OnFullscreen::on_fullscreen(window: &Arc<dyn Window>);
    applies [Window] x [None];
    dispatch |this, inv| this.on_fullscreen(inv.driver, inv.window()?);
}

listener_contract! {
    OnMaximize::on_maximize(window: &Arc<dyn Window>);
    applies [Window] x [None];
    dispatch |this, inv| this.on_maximize(inv.driver, inv.window()?);
}

listener_contract! {
    OnGetPositionBefore::on_get_position(window: &Arc<dyn Window>);
    applies [Window] x [None];
    dispatch |this, inv| this.on_get_position(inv.driver, inv.window()?);
}

listener_contract! {
    OnGetPositionAfter::on_get_position(window: &Arc<dyn Window>, position: Point);
    applies [Window] x [None];
    dispatch |this, inv| this.on_get_position(inv.driver, inv.window()?, *inv.result::<Point>()?);
}

listener_contract! {
    OnGetWindowSizeBefore::on_get_size(window: &Arc<dyn Window>);
    applies [Window] x [None];
    dispatch |this, inv| this.on_get_size(inv.driver, inv.window()?);
}

listener_contract! {
    OnGetWindowSizeAfter::on_get_size(window: &Arc<dyn Window>, size: Dimension);
    applies [Window] x [None];
    dispatch |this, inv| this.on_get_size(inv.driver, inv.window()?, *inv.result::<Dimension>()?);
}

listener_contract! {
    OnSetPosition::on_set_position(window: &Arc<dyn Window>, position: Point);
    applies [Window] x [Point];
    dispatch |this, inv| this.on_set_position(inv.driver, inv.window()?, inv.args.point()?);
}

listener_contract! {
    OnSetWindowSize::on_set_size(window: &Arc<dyn Window>, size: Dimension);
    applies [Window] x [Dimension];
    dispatch |this, inv| this.on_set_size(inv.driver, inv.window()?, inv.args.dimension()?);
}

// Timeouts

listener_contract! {
    OnImplicitlyWait::on_implicitly_wait(timeouts: &Arc<dyn Timeouts>, timeout: Duration);
    applies [Timeouts] x [Duration];
    dispatch |this, inv| this.on_implicitly_wait(inv.driver, inv.timeouts()?, inv.args.duration()?);
}

listener_contract! {
    OnSetScriptTimeout::on_set_script_timeout(timeouts: &Arc<dyn Timeouts>, timeout: Duration);
    applies [Timeouts] x [Duration];
    dispatch |this, inv| this.on_set_script_timeout(inv.driver, inv.timeouts()?, inv.args.duration()?);
}

listener_contract! {
    OnPageLoadTimeout::on_page_load_timeout(timeouts: &Arc<dyn Timeouts>, timeout: Duration);
    applies [Timeouts] x [Duration];
    dispatch |this, inv| this.on_page_load_timeout(inv.driver, inv.timeouts()?, inv.args.duration()?);
}
