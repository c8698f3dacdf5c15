use crate::model::{BlogPost, HobbyItem, NodeId, Project, Record, TreeNode};
use crate::seed;
use crate::tree::{self, EditError, IdGenerator};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const ADMIN_ID: &str = "12345";
pub const ADMIN_PASSWORD: &str = "54321";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("身份识别错误！系统拒绝访问。")]
    InvalidCredentials,
}

/// Ordered list of records. New records go to the front.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Prepends a placeholder record and returns its id.
    pub fn add_placeholder(&mut self, ids: &IdGenerator) -> String {
        let id = ids.next_unique(|candidate| self.contains(candidate));
        self.items.insert(0, T::placeholder(id.clone()));
        id
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        before != self.items.len()
    }
}

/// Everything the session knows: the mind map, the three content lists and
/// whether the operator has unlocked write access.
///
/// Writes replace whole values; nothing hands out `&mut` to the tree.
pub struct Store {
    tree: Rc<TreeNode>,
    pub blogs: Collection<BlogPost>,
    pub hobbies: Collection<HobbyItem>,
    pub projects: Collection<Project>,
    is_admin: bool,
    ids: IdGenerator,
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Store {
    pub fn seeded() -> Self {
        Self::new(
            seed::initial_mind_map(),
            seed::initial_blogs(),
            seed::initial_hobbies(),
            seed::initial_projects(),
        )
    }

    pub fn new(
        tree: Rc<TreeNode>,
        blogs: Vec<BlogPost>,
        hobbies: Vec<HobbyItem>,
        projects: Vec<Project>,
    ) -> Self {
        Self {
            tree,
            blogs: Collection::new(blogs),
            hobbies: Collection::new(hobbies),
            projects: Collection::new(projects),
            is_admin: false,
            ids: IdGenerator::new(),
        }
    }

    pub fn tree(&self) -> &Rc<TreeNode> {
        &self.tree
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub fn replace_tree(&mut self, tree: Rc<TreeNode>) {
        debug!(nodes = tree.node_count(), "replacing mind map");
        self.tree = tree;
    }

    /// Renames a node when the prompt produced a label. `None` means the
    /// prompt was cancelled or left empty, and nothing happens.
    pub fn rename_node(&mut self, target: &NodeId, label: Option<&str>) -> Result<bool, EditError> {
        let Some(label) = label else {
            return Ok(false);
        };
        let tree = tree::try_rename(&self.tree, target, label)?;
        self.replace_tree(tree);
        Ok(true)
    }

    /// Adds a child when the prompt produced a label. Returns the new node's
    /// id, or `None` when the prompt was cancelled.
    pub fn add_child_node(
        &mut self,
        target: &NodeId,
        label: Option<&str>,
    ) -> Result<Option<NodeId>, EditError> {
        let Some(label) = label else {
            return Ok(None);
        };
        let (tree, new_id) = tree::try_add_child(&self.tree, target, label, &self.ids)?;
        self.replace_tree(tree);
        Ok(Some(new_id))
    }

    pub fn add_blog(&mut self) -> String {
        self.blogs.add_placeholder(&self.ids)
    }

    pub fn add_hobby(&mut self) -> String {
        self.hobbies.add_placeholder(&self.ids)
    }

    pub fn add_project(&mut self) -> String {
        self.projects.add_placeholder(&self.ids)
    }

    /// Unlocks write access when both values match the operator pair.
    /// A failed attempt leaves the state untouched.
    pub fn login(&mut self, id: &str, password: &str) -> Result<(), AuthError> {
        if id == ADMIN_ID && password == ADMIN_PASSWORD {
            self.is_admin = true;
            info!("operator logged in");
            Ok(())
        } else {
            warn!("rejected login attempt");
            Err(AuthError::InvalidCredentials)
        }
    }

    pub fn logout(&mut self) {
        if self.is_admin {
            info!("operator logged out");
        }
        self.is_admin = false;
    }
}
