use crate::app::{AppState, Page};
use crate::model::Record;
use tracing::info;

use super::READ_ONLY_MESSAGE;

/// Prepends a draft record to the current list page.
pub fn add_record(app: &mut AppState) {
    if !app.is_admin() {
        app.set_message(READ_ONLY_MESSAGE);
        return;
    }

    let id = match app.page {
        Page::Journal => {
            app.selected_blog = 0;
            app.store.add_blog()
        }
        Page::Hobbies => {
            app.selected_hobby = 0;
            app.store.add_hobby()
        }
        Page::Projects => {
            app.selected_project = 0;
            app.store.add_project()
        }
        Page::MindMap | Page::Login => return,
    };

    info!(page = %app.page, %id, "record added");
    app.set_message("新记录已创建");
}

/// Deletes the highlighted record of the current list page.
pub fn delete_selected(app: &mut AppState) {
    if !app.is_admin() {
        app.set_message(READ_ONLY_MESSAGE);
        return;
    }

    let id = match app.page {
        Page::Journal => selected_id(app.store.blogs.items(), app.selected_blog),
        Page::Hobbies => selected_id(app.store.hobbies.items(), app.selected_hobby),
        Page::Projects => selected_id(app.store.projects.items(), app.selected_project),
        Page::MindMap | Page::Login => None,
    };
    let Some(id) = id else {
        return;
    };

    let removed = match app.page {
        Page::Journal => app.store.blogs.delete(&id),
        Page::Hobbies => app.store.hobbies.delete(&id),
        Page::Projects => app.store.projects.delete(&id),
        Page::MindMap | Page::Login => false,
    };

    if removed {
        info!(page = %app.page, %id, "record deleted");
        app.clamp_selections();
        app.set_message("记录已删除");
    }
}

fn selected_id<T: Record>(items: &[T], index: usize) -> Option<String> {
    items.get(index).map(|item| item.id().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::{ADMIN_ID, ADMIN_PASSWORD};

    fn create_test_app(admin: bool) -> AppState {
        let mut app = AppState::new(AppConfig::default());
        if admin {
            app.store.login(ADMIN_ID, ADMIN_PASSWORD).unwrap();
        }
        app
    }

    #[test]
    fn test_visitor_cannot_add_or_delete() {
        let mut app = create_test_app(false);

        add_record(&mut app);
        delete_selected(&mut app);

        assert_eq!(app.store.blogs.len(), 2);
        assert_eq!(app.message.as_deref(), Some(READ_ONLY_MESSAGE));
    }

    #[test]
    fn test_add_record_per_page() {
        let mut app = create_test_app(true);

        add_record(&mut app);
        app.open_page(Page::Projects);
        add_record(&mut app);

        assert_eq!(app.store.blogs.len(), 3);
        assert_eq!(app.store.blogs.items()[0].title, "新副本记录");
        assert_eq!(app.store.projects.len(), 3);
        assert_eq!(app.store.projects.items()[0].name, "新任务模块");
        assert_eq!(app.store.hobbies.len(), 3);
    }

    #[test]
    fn test_delete_selected_hobby() {
        let mut app = create_test_app(true);
        app.open_page(Page::Hobbies);
        app.selected_hobby = 2;

        delete_selected(&mut app);

        let ids: Vec<&str> = app.store.hobbies.items().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["h1", "h2"]);
        assert_eq!(app.selected_hobby, 1);
    }

    #[test]
    fn test_delete_until_empty() {
        let mut app = create_test_app(true);
        for _ in 0..5 {
            delete_selected(&mut app);
        }
        assert!(app.store.blogs.is_empty());
        assert_eq!(app.selected_blog, 0);
    }
}
