use crate::app::{AppMode, AppState};

pub fn show_help(app: &mut AppState) {
    app.mode = AppMode::Help;
}

pub fn close_help(app: &mut AppState) {
    app.mode = AppMode::Normal;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn test_help_mode() {
        let mut app = AppState::new(AppConfig::default());

        show_help(&mut app);
        assert!(matches!(app.mode, AppMode::Help));

        close_help(&mut app);
        assert!(matches!(app.mode, AppMode::Normal));
    }
}
