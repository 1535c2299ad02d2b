//! Alert listener contracts

use std::sync::Arc;

use crate::webdriver::{Alert, Credentials};

listener_contract! {
    OnAccept::on_accept(alert: &Arc<dyn Alert>);
    applies [Alert] x [None];
    dispatch |this, inv| this.on_accept(inv.driver, inv.alert()?);
}

listener_contract! {
    OnDismiss::on_dismiss(alert: &Arc<dyn Alert>);
    applies [Alert] x [None];
    dispatch |this, inv| this.on_dismiss(inv.driver, inv.alert()?);
}

listener_contract! {
    OnGetTextOfAlertBefore::on_get_text(alert: &Arc<dyn Alert>);
    applies [Alert] x [None];
    dispatch |this, inv| this.on_get_text(inv.driver, inv.alert()?);
}

listener_contract! {
    OnGetTextOfAlertAfter::on_get_text(alert: &Arc<dyn Alert>, text: &str);
    applies [Alert] x [None];
    dispatch |this, inv| this.on_get_text(inv.driver, inv.alert()?, inv.result::<String>()?);
}

listener_contract! {
    OnSendKeysToAlert::on_send_keys(alert: &Arc<dyn Alert>, keys: &str);
    applies [Alert] x [Text];
    dispatch |this, inv| this.on_send_keys(inv.driver, inv.alert()?, inv.args.text()?);
}

listener_contract! {
    OnAuthenticateUsing::on_authenticate_using(alert: &Arc<dyn Alert>, credentials: &Credentials);
    applies [Alert] x [Credentials];
    dispatch |this, inv| this.on_authenticate_using(inv.driver, inv.alert()?, inv.args.credentials()?);
}

listener_contract! {
    OnSetCredentials::on_set_credentials(alert: &Arc<dyn Alert>, credentials: &Credentials);
    applies [Alert] x [Credentials];
    dispatch |this, inv| this.on_set_credentials(inv.driver, inv.alert()?, inv.args.credentials()?);
}
