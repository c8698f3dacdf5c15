use std::fmt;
use std::rc::Rc;

/// Identifier of a mind-map node. Unique across the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One node of the mind map.
///
/// Nodes are never mutated once they are part of a tree: edits go through
/// [`crate::tree`] and produce a new root that shares every untouched subtree
/// with the old one. Layout coordinates are not stored here; they are produced
/// fresh by [`crate::layout`] on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: NodeId,
    pub label: String,
    pub children: Vec<Rc<TreeNode>>,
}

impl TreeNode {
    pub fn leaf(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(
        id: impl Into<NodeId>,
        label: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: children.into_iter().map(Rc::new).collect(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Flat content records shown on the list pages.
pub trait Record: Clone {
    fn id(&self) -> &str;

    /// Builds the draft record inserted by "add" on the given page.
    fn placeholder(id: String) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub tags: Vec<String>,
}

impl Record for BlogPost {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            title: "新副本记录".to_string(),
            excerpt: "一段未知的冒险即将开始...".to_string(),
            content: String::new(),
            date: "2024-XX-XX".to_string(),
            tags: vec!["Draft".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HobbyKind {
    Book,
    Movie,
    Music,
}

impl HobbyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            HobbyKind::Book => "book",
            HobbyKind::Movie => "movie",
            HobbyKind::Music => "music",
        }
    }
}

/// Highest rating a hobby item can carry.
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HobbyItem {
    pub id: String,
    pub kind: HobbyKind,
    pub title: String,
    pub creator: String,
    pub comment: String,
    pub rating: u8,
}

impl Record for HobbyItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            kind: HobbyKind::Book,
            title: "神秘卷轴".to_string(),
            creator: "匿名".to_string(),
            comment: "...".to_string(),
            rating: MAX_RATING,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Game,
    Research,
    Dev,
}

impl ProjectCategory {
    /// Quest badge shown next to the project name.
    pub fn badge(&self) -> &'static str {
        match self {
            ProjectCategory::Game => "MAIN QUEST",
            ProjectCategory::Research | ProjectCategory::Dev => "SIDE TASK",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProjectCategory,
    pub link: Option<String>,
    pub image: Option<String>,
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn placeholder(id: String) -> Self {
        Self {
            id,
            name: "新任务模块".to_string(),
            description: "正在解析中...".to_string(),
            category: ProjectCategory::Dev,
            link: None,
            image: Some("https://picsum.photos/seed/quest/800/400".to_string()),
        }
    }
}
