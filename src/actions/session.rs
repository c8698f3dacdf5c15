use crate::app::{AppMode, AppState, Page};
use tracing::info;

use super::navigation;

/// `L`: logs the operator out, or opens the login terminal for a visitor.
pub fn toggle_session(app: &mut AppState) {
    if app.is_admin() {
        app.store.logout();
        app.set_message("已退出管理模式");
    } else {
        navigation::open_page(app, Page::Login);
    }
}

pub fn switch_field(app: &mut AppState) {
    if let AppMode::Login(form) = &mut app.mode {
        form.toggle_focus();
    }
}

/// Checks the form against the operator pair. Success lands on the journal;
/// failure keeps the form open with the refusal in the status line.
pub fn submit_login(app: &mut AppState) {
    let AppMode::Login(form) = &app.mode else {
        return;
    };
    let operator_id = form.operator_id.text();
    let security_code = form.security_code.text();

    match app.store.login(&operator_id, &security_code) {
        Ok(()) => {
            info!("session unlocked");
            navigation::open_page(app, Page::Journal);
            app.set_message("权限已授予：欢迎回来，指挥官");
        }
        Err(err) => app.set_message(err.to_string()),
    }
}

pub fn cancel_login(app: &mut AppState) {
    navigation::open_page(app, Page::Journal);
}
