use crate::app::{AppMode, AppState, Page};
use crate::layout::{HotspotKind, MindMapLayout};
use crate::model::NodeId;
use crate::prompt::Prompt;
use tracing::debug;

use super::READ_ONLY_MESSAGE;

/// Falls back to the root when the selected id has gone missing.
fn ensure_selection(app: &mut AppState) {
    if !app.store.tree().contains(&app.selected_node) {
        app.selected_node = app.store.tree().id.clone();
    }
}

pub fn select_parent(app: &mut AppState) {
    ensure_selection(app);
    if let Some(parent) = app.store.tree().parent_of(&app.selected_node) {
        app.selected_node = parent.id.clone();
    }
}

pub fn select_first_child(app: &mut AppState) {
    ensure_selection(app);
    let first = app
        .store
        .tree()
        .find(&app.selected_node)
        .and_then(|node| node.children.first())
        .map(|child| child.id.clone());
    if let Some(id) = first {
        app.selected_node = id;
    }
}

fn step_sibling(app: &mut AppState, forward: bool) {
    ensure_selection(app);
    let tree = app.store.tree();
    let Some(parent) = tree.parent_of(&app.selected_node) else {
        return;
    };
    let Some(index) = parent
        .children
        .iter()
        .position(|child| child.id == app.selected_node)
    else {
        return;
    };
    let next = if forward {
        parent.children.get(index + 1)
    } else {
        index.checked_sub(1).and_then(|i| parent.children.get(i))
    };
    if let Some(node) = next {
        app.selected_node = node.id.clone();
    }
}

pub fn select_previous_sibling(app: &mut AppState) {
    step_sibling(app, false);
}

pub fn select_next_sibling(app: &mut AppState) {
    step_sibling(app, true);
}

pub fn start_rename(app: &mut AppState) {
    start_rename_of(app, app.selected_node.clone());
}

fn start_rename_of(app: &mut AppState, id: NodeId) {
    if !app.is_admin() {
        app.set_message(READ_ONLY_MESSAGE);
        return;
    }
    let Some(node) = app.store.tree().find(&id) else {
        return;
    };
    app.mode = AppMode::Prompt(Prompt::rename(id.clone(), &node.label));
}

pub fn start_add_child(app: &mut AppState) {
    start_add_child_of(app, app.selected_node.clone());
}

fn start_add_child_of(app: &mut AppState, id: NodeId) {
    if !app.is_admin() {
        app.set_message(READ_ONLY_MESSAGE);
        return;
    }
    if !app.store.tree().contains(&id) {
        return;
    }
    app.mode = AppMode::Prompt(Prompt::add_child(id));
}

/// Routes a mouse click on the map through the layout's hit-test: a node
/// body selects and renames, its "+" icon adds a child.
pub fn click_at(app: &mut AppState, column: u16, row: u16) {
    if app.page != Page::MindMap {
        return;
    }
    let Some(point) = app
        .map_viewport
        .and_then(|viewport| viewport.cell_to_world(column, row))
    else {
        return;
    };

    let layout = MindMapLayout::calculate(app.store.tree());
    let Some(hit) = layout.hit_test(point, app.is_admin()) else {
        return;
    };
    debug!(node = %hit.node, kind = ?hit.kind, "map click");

    let id = hit.node.clone();
    app.selected_node = id.clone();
    match hit.kind {
        HotspotKind::Rename => {
            // Visitors may still click around to select nodes.
            if app.is_admin() {
                start_rename_of(app, id);
            }
        }
        HotspotKind::AddChild => start_add_child_of(app, id),
    }
}
