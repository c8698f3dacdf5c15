//! Copy-on-write edits over the mind-map tree.
//!
//! Every edit walks depth-first from the root to the target node and rebuilds
//! only the nodes on that path. Subtrees off the path are shared with the
//! previous tree through their `Rc`, so an edit never touches them.

use crate::model::{NodeId, TreeNode};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Node with ID {0} not found")]
    NodeNotFound(NodeId),
}

/// Source of fresh identifiers for nodes and records.
///
/// Ids are `<millis>-<counter>`. The counter alone keeps ids from one
/// generator distinct; callers additionally pass a predicate for ids that are
/// already taken so that seeded or foreign ids never collide either.
pub struct IdGenerator {
    clock: fn() -> u128,
    counter: Cell<u64>,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::with_clock(now_millis)
    }

    pub fn with_clock(clock: fn() -> u128) -> Self {
        Self {
            clock,
            counter: Cell::new(0),
        }
    }

    fn candidate(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("{}-{}", (self.clock)(), n)
    }

    /// Returns the first candidate for which `taken` is false.
    pub fn next_unique(&self, taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = self.candidate();
            if !taken(&id) {
                return id;
            }
            debug!(%id, "skipping id already in use");
        }
    }

    pub fn next_node_id(&self, tree: &TreeNode) -> NodeId {
        NodeId::new(self.next_unique(|id| tree.contains(&NodeId::new(id))))
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Rebuilds the path from `node` down to `target`, applying `edit` to the
/// target. Returns `None` when `target` is not in this subtree.
fn rebuild<F>(node: &Rc<TreeNode>, target: &NodeId, edit: &mut F) -> Option<Rc<TreeNode>>
where
    F: FnMut(&TreeNode) -> TreeNode,
{
    if node.id == *target {
        return Some(Rc::new(edit(node)));
    }

    for (index, child) in node.children.iter().enumerate() {
        if let Some(replaced) = rebuild(child, target, edit) {
            let mut children = node.children.clone();
            children[index] = replaced;
            return Some(Rc::new(TreeNode {
                id: node.id.clone(),
                label: node.label.clone(),
                children,
            }));
        }
    }

    None
}

/// Renames `target`. Returns the input tree itself if `target` is absent.
///
/// `new_label` is applied as given; rejecting empty input is the caller's job.
pub fn rename(tree: &Rc<TreeNode>, target: &NodeId, new_label: &str) -> Rc<TreeNode> {
    try_rename(tree, target, new_label).unwrap_or_else(|_| Rc::clone(tree))
}

pub fn try_rename(
    tree: &Rc<TreeNode>,
    target: &NodeId,
    new_label: &str,
) -> Result<Rc<TreeNode>, EditError> {
    rebuild(tree, target, &mut |node| TreeNode {
        id: node.id.clone(),
        label: new_label.to_string(),
        children: node.children.clone(),
    })
    .ok_or_else(|| EditError::NodeNotFound(target.clone()))
}

/// Appends a new leaf labelled `label` as the last child of `target`.
/// Returns the input tree itself if `target` is absent.
pub fn add_child(
    tree: &Rc<TreeNode>,
    target: &NodeId,
    label: &str,
    ids: &IdGenerator,
) -> Rc<TreeNode> {
    try_add_child(tree, target, label, ids)
        .map(|(tree, _)| tree)
        .unwrap_or_else(|_| Rc::clone(tree))
}

/// Like [`add_child`], but reports a missing target and hands back the id of
/// the node it created.
pub fn try_add_child(
    tree: &Rc<TreeNode>,
    target: &NodeId,
    label: &str,
    ids: &IdGenerator,
) -> Result<(Rc<TreeNode>, NodeId), EditError> {
    if !tree.contains(target) {
        return Err(EditError::NodeNotFound(target.clone()));
    }

    let new_id = ids.next_node_id(tree);
    let new_tree = rebuild(tree, target, &mut |node| {
        let mut children = node.children.clone();
        children.push(Rc::new(TreeNode::leaf(new_id.clone(), label)));
        TreeNode {
            id: node.id.clone(),
            label: node.label.clone(),
            children,
        }
    })
    .ok_or_else(|| EditError::NodeNotFound(target.clone()))?;

    Ok((new_tree, new_id))
}

impl TreeNode {
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        if self.id == *id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.find(id).is_some()
    }

    /// The node whose children include `id`. `None` for the root or an
    /// unknown id.
    pub fn parent_of(&self, id: &NodeId) -> Option<&TreeNode> {
        if self.children.iter().any(|child| child.id == *id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.parent_of(id))
    }

    /// All ids in pre-order.
    pub fn ids(&self) -> Vec<&NodeId> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a NodeId>) {
        out.push(&self.id);
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Tab-indented outline, one label per line.
    pub fn outline(&self) -> String {
        fn build(node: &TreeNode, depth: usize, out: &mut String) {
            out.push_str(&"\t".repeat(depth));
            out.push_str(&node.label);
            out.push('\n');
            for child in &node.children {
                build(child, depth + 1, out);
            }
        }

        let mut out = String::new();
        build(self, 0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use std::collections::HashSet;

    fn fixed_clock() -> u128 {
        42
    }

    fn sample() -> Rc<TreeNode> {
        Rc::new(TreeNode::with_children(
            "root",
            "Root",
            vec![
                TreeNode::with_children("a", "A", vec![TreeNode::leaf("a1", "A1")]),
                TreeNode::leaf("b", "B"),
            ],
        ))
    }

    #[test]
    fn test_rename_replaces_only_label() {
        let tree = sample();
        let renamed = rename(&tree, &NodeId::new("a1"), "Renamed");

        let node = renamed.find(&NodeId::new("a1")).unwrap();
        assert_eq!(node.label, "Renamed");
        assert_eq!(renamed.node_count(), tree.node_count());
        assert_eq!(renamed.ids(), tree.ids());
    }

    #[test]
    fn test_rename_shares_untouched_subtrees() {
        let tree = sample();
        let renamed = rename(&tree, &NodeId::new("a1"), "Renamed");

        assert!(!Rc::ptr_eq(&tree, &renamed));
        assert!(!Rc::ptr_eq(&tree.children[0], &renamed.children[0]));
        assert!(Rc::ptr_eq(&tree.children[1], &renamed.children[1]));
    }

    #[test]
    fn test_rename_root() {
        let tree = sample();
        let renamed = rename(&tree, &NodeId::new("root"), "New Root");
        assert_eq!(renamed.label, "New Root");
        assert!(Rc::ptr_eq(&tree.children[0], &renamed.children[0]));
        assert!(Rc::ptr_eq(&tree.children[1], &renamed.children[1]));
    }

    #[test]
    fn test_rename_missing_target_is_noop() {
        let tree = sample();
        let result = rename(&tree, &NodeId::new("nonexistent-id"), "X");
        assert_eq!(*result, *tree);
        assert!(Rc::ptr_eq(&result, &tree));
    }

    #[test]
    fn test_try_rename_reports_missing_target() {
        let tree = sample();
        let err = try_rename(&tree, &NodeId::new("ghost"), "X").unwrap_err();
        assert_eq!(err, EditError::NodeNotFound(NodeId::new("ghost")));
    }

    #[test]
    fn test_rename_round_trip() {
        let tree = sample();
        let id = NodeId::new("a");
        let there = rename(&tree, &id, "Temporary");
        let back = rename(&there, &id, "A");
        assert_eq!(*back, *tree);
    }

    #[test]
    fn test_add_child_appends_at_end() {
        let tree = sample();
        let ids = IdGenerator::new();
        let updated = add_child(&tree, &NodeId::new("root"), "NewNode", &ids);

        assert_eq!(updated.children.len(), tree.children.len() + 1);
        for (before, after) in tree.children.iter().zip(updated.children.iter()) {
            assert_eq!(before.id, after.id);
            assert_eq!(before.label, after.label);
        }
        let last = updated.children.last().unwrap();
        assert_eq!(last.label, "NewNode");
        assert!(last.is_leaf());
        assert!(!tree.contains(&last.id));
    }

    #[test]
    fn test_add_child_to_leaf() {
        let tree = sample();
        let ids = IdGenerator::new();
        let (updated, new_id) = try_add_child(&tree, &NodeId::new("b"), "B1", &ids).unwrap();

        let b = updated.find(&NodeId::new("b")).unwrap();
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].id, new_id);
        assert!(Rc::ptr_eq(&tree.children[0], &updated.children[0]));
    }

    #[test]
    fn test_add_child_missing_target_is_noop() {
        let tree = sample();
        let ids = IdGenerator::new();
        let result = add_child(&tree, &NodeId::new("nowhere"), "X", &ids);
        assert!(Rc::ptr_eq(&result, &tree));
        assert!(try_add_child(&tree, &NodeId::new("nowhere"), "X", &ids).is_err());
    }

    #[test]
    fn test_rapid_add_child_ids_are_unique() {
        let ids = IdGenerator::with_clock(fixed_clock);
        let mut tree = seed::initial_mind_map();
        let targets = ["root", "projects", "hobbies", "thoughts", "t-life"];

        for round in 0..20 {
            let target = NodeId::new(targets[round % targets.len()]);
            tree = add_child(&tree, &target, "节点", &ids);
        }

        let all = tree.ids();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert_eq!(tree.node_count(), seed::initial_mind_map().node_count() + 20);
    }

    #[test]
    fn test_generator_skips_taken_ids() {
        let ids = IdGenerator::with_clock(fixed_clock);
        let tree = Rc::new(TreeNode::with_children(
            "root",
            "Root",
            vec![TreeNode::leaf("42-1", "Taken")],
        ));

        let (updated, new_id) = try_add_child(&tree, &NodeId::new("root"), "Fresh", &ids).unwrap();
        assert_eq!(new_id, "42-2");
        assert_eq!(updated.children.len(), 2);
    }

    #[test]
    fn test_seed_scenario_add_hobby() {
        let tree = seed::initial_mind_map();
        let ids = IdGenerator::new();
        let updated = add_child(&tree, &NodeId::new("hobbies"), "新爱好", &ids);

        let before = tree.find(&NodeId::new("hobbies")).unwrap();
        let after = updated.find(&NodeId::new("hobbies")).unwrap();
        assert_eq!(after.children.len(), before.children.len() + 1);
        let added = after.children.last().unwrap();
        assert_eq!(added.label, "新爱好");
        assert!(!tree.contains(&added.id));

        assert!(Rc::ptr_eq(&tree.children[0], &updated.children[0]));
        assert!(Rc::ptr_eq(&tree.children[2], &updated.children[2]));
    }

    #[test]
    fn test_lookups() {
        let tree = sample();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 2);
        assert_eq!(tree.parent_of(&NodeId::new("a1")).unwrap().id, "a");
        assert!(tree.parent_of(&NodeId::new("root")).is_none());
        let ids: Vec<&str> = tree.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["root", "a", "a1", "b"]);
    }

    #[test]
    fn test_outline() {
        assert_eq!(sample().outline(), "Root\n\tA\n\t\tA1\n\tB\n");
    }
}
