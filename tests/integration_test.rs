mod common;

use common::{app_on, child_labels, run, trees_are_equal, type_text};
use quest_log::actions::Action;
use quest_log::model::{BlogPost, Record};
use quest_log::seed;
use quest_log::store::{AuthError, Collection, Store};
use quest_log::tree::{self, IdGenerator};
use quest_log::{AppMode, NodeId, Page};
use std::collections::HashSet;
use std::rc::Rc;

fn fixed_clock() -> u128 {
    1_700_000_000_000
}

#[test]
fn test_ids_stay_unique_across_many_adds() {
    let ids = IdGenerator::with_clock(fixed_clock);
    let mut tree = seed::initial_mind_map();

    let targets = ["root", "hobbies", "t-life", "p-sci", "root", "hobbies"];
    for round in 0..5 {
        for target in targets {
            tree = tree::add_child(&tree, &NodeId::new(target), &format!("n{round}"), &ids);
        }
        // Grow below freshly created nodes too.
        let newest = tree.children.last().map(|c| c.id.clone()).unwrap();
        tree = tree::add_child(&tree, &newest, "deeper", &ids);
    }

    let all = tree.ids();
    let unique: HashSet<_> = all.iter().collect();
    assert_eq!(all.len(), unique.len());
    assert_eq!(tree.node_count(), 12 + 5 * 7);
}

#[test]
fn test_edits_share_untouched_subtrees() {
    let ids = IdGenerator::new();
    let tree = seed::initial_mind_map();

    let renamed = tree::rename(&tree, &NodeId::new("h-music"), "唱片");
    assert!(Rc::ptr_eq(&tree.children[0], &renamed.children[0]));
    assert!(Rc::ptr_eq(&tree.children[2], &renamed.children[2]));
    assert!(Rc::ptr_eq(&tree.children[1].children[0], &renamed.children[1].children[0]));
    assert!(!Rc::ptr_eq(&tree.children[1], &renamed.children[1]));

    let grown = tree::add_child(&tree, &NodeId::new("t-tech"), "Rust", &ids);
    assert!(Rc::ptr_eq(&tree.children[0], &grown.children[0]));
    assert!(Rc::ptr_eq(&tree.children[1], &grown.children[1]));
    assert!(Rc::ptr_eq(&tree.children[2].children[1], &grown.children[2].children[1]));

    // The previous tree is untouched.
    assert_eq!(child_labels(&tree, "t-tech"), Vec::<String>::new());
}

#[test]
fn test_missing_target_is_a_noop() {
    let ids = IdGenerator::new();
    let tree = seed::initial_mind_map();

    let renamed = tree::rename(&tree, &NodeId::new("nonexistent-id"), "X");
    assert!(trees_are_equal(&tree, &renamed));

    let grown = tree::add_child(&tree, &NodeId::new("nonexistent-id"), "X", &ids);
    assert!(trees_are_equal(&tree, &grown));
}

#[test]
fn test_add_under_root_appends() {
    let ids = IdGenerator::new();
    let tree = seed::initial_mind_map();
    let before: Vec<(NodeId, String)> = tree
        .children
        .iter()
        .map(|c| (c.id.clone(), c.label.clone()))
        .collect();

    let grown = tree::add_child(&tree, &NodeId::new("root"), "NewNode", &ids);

    let after: Vec<(NodeId, String)> = grown
        .children
        .iter()
        .map(|c| (c.id.clone(), c.label.clone()))
        .collect();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after[before.len()].1, "NewNode");
}

#[test]
fn test_rename_round_trip() {
    let tree = seed::initial_mind_map();
    let id = NodeId::new("p-open");

    let there = tree::rename(&tree, &id, "A");
    let back = tree::rename(&there, &id, "开源贡献");

    assert!(!trees_are_equal(&tree, &there));
    assert!(trees_are_equal(&tree, &back));
}

#[test]
fn test_seed_scenario_add_hobby() {
    let ids = IdGenerator::new();
    let tree = seed::initial_mind_map();

    let grown = tree::add_child(&tree, &NodeId::new("hobbies"), "新爱好", &ids);

    let hobbies = grown.find(&NodeId::new("hobbies")).unwrap();
    assert_eq!(hobbies.children.len(), 4);
    let added = hobbies.children.last().unwrap();
    assert_eq!(added.label, "新爱好");
    assert!(!tree.contains(&added.id));
    assert!(added.is_leaf());
    assert!(trees_are_equal(&tree.children[0], &grown.children[0]));
    assert!(trees_are_equal(&tree.children[2], &grown.children[2]));
}

#[test]
fn test_login_boundary() {
    let mut store = Store::seeded();
    assert_eq!(store.login("12345", "wrong"), Err(AuthError::InvalidCredentials));
    assert_eq!(store.login("", ""), Err(AuthError::InvalidCredentials));
    assert!(!store.is_admin());
    assert_eq!(store.login("12345", "54321"), Ok(()));
    assert!(store.is_admin());
}

#[test]
fn test_delete_by_id() {
    let mut blogs: Collection<BlogPost> = Collection::new(seed::initial_blogs());
    let ids = IdGenerator::new();
    let first = blogs.add_placeholder(&ids);
    let second = blogs.add_placeholder(&ids);
    let order: Vec<String> = blogs.items().iter().map(|b| b.id().to_string()).collect();

    assert!(!blogs.delete("missing"));
    assert_eq!(blogs.len(), 4);

    assert!(blogs.delete(&first));
    let expected: Vec<String> = order.into_iter().filter(|id| *id != first).collect();
    let remaining: Vec<String> = blogs.items().iter().map(|b| b.id().to_string()).collect();
    assert_eq!(remaining, expected);
    assert!(blogs.contains(&second));
}

#[test]
fn test_full_session() {
    let mut app = app_on(Page::Journal, false);

    // Visitors are read-only.
    run(&mut app, [Action::Add]);
    assert_eq!(app.store.blogs.len(), 2);

    // Wrong code first, then the right one.
    run(&mut app, [Action::ToggleSession]);
    type_text(&mut app, "12345");
    run(&mut app, [Action::SwitchField]);
    type_text(&mut app, "11111");
    run(&mut app, [Action::Submit]);
    assert!(!app.is_admin());
    assert_eq!(app.page, Page::Login);

    run(&mut app, [Action::DeleteToStart]);
    type_text(&mut app, "54321");
    run(&mut app, [Action::Submit]);
    assert!(app.is_admin());
    assert_eq!(app.page, Page::Journal);

    // Grow the map under the thoughts branch.
    run(
        &mut app,
        [
            Action::OpenPage(Page::MindMap),
            Action::SelectRight,
            Action::SelectDown,
            Action::SelectDown,
            Action::Add,
        ],
    );
    assert!(matches!(app.mode, AppMode::Prompt(_)));
    type_text(&mut app, "  灵感  ");
    run(&mut app, [Action::Submit]);
    assert_eq!(child_labels(app.store.tree(), "thoughts"), vec!["技术总结", "生活瞬间", "灵感"]);

    // Rename the new node in place, then log out.
    run(&mut app, [Action::Edit, Action::DeleteToStart]);
    type_text(&mut app, "灵感库");
    run(&mut app, [Action::Submit, Action::ToggleSession]);
    assert_eq!(child_labels(app.store.tree(), "thoughts")[2], "灵感库");
    assert!(!app.is_admin());

    run(&mut app, [Action::Edit]);
    assert_eq!(app.mode, AppMode::Normal);
}
