#![allow(dead_code)]

use quest_log::actions::{execute_action, Action};
use quest_log::config::AppConfig;
use quest_log::model::TreeNode;
use quest_log::store::{ADMIN_ID, ADMIN_PASSWORD};
use quest_log::{AppState, NodeId, Page};

/// Fresh seeded app, optionally unlocked, showing `page`.
pub fn app_on(page: Page, admin: bool) -> AppState {
    let mut app = AppState::new(AppConfig::default());
    if admin {
        app.store
            .login(ADMIN_ID, ADMIN_PASSWORD)
            .expect("operator credentials should be accepted");
    }
    app.open_page(page);
    app
}

pub fn run(app: &mut AppState, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        execute_action(action, app).expect("action should not fail");
    }
}

pub fn type_text(app: &mut AppState, text: &str) {
    run(app, text.chars().map(Action::TypeChar));
}

/// Labels of a node's children, in order.
pub fn child_labels(tree: &TreeNode, id: &str) -> Vec<String> {
    tree.find(&NodeId::new(id))
        .map(|node| node.children.iter().map(|c| c.label.clone()).collect())
        .unwrap_or_default()
}

/// Compare two trees for structural equality: ids, labels and child order.
pub fn trees_are_equal(a: &TreeNode, b: &TreeNode) -> bool {
    a.id == b.id
        && a.label == b.label
        && a.children.len() == b.children.len()
        && a
            .children
            .iter()
            .zip(&b.children)
            .all(|(x, y)| trees_are_equal(x, y))
}
