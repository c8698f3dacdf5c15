use crate::config::AppConfig;
use crate::layout::Viewport;
use crate::model::NodeId;
use crate::prompt::{Prompt, TextInput};
use crate::store::Store;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Journal,
    Hobbies,
    Projects,
    MindMap,
    Login,
}

impl Page {
    /// Pages reachable from the tab bar, in tab order.
    pub const TABS: [Page; 4] = [Page::Journal, Page::Hobbies, Page::Projects, Page::MindMap];

    pub fn tab_label(&self) -> &'static str {
        match self {
            Page::Journal => "日志",
            Page::Hobbies => "收藏",
            Page::Projects => "任务",
            Page::MindMap => "地图",
            Page::Login => "登录",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Journal => "日志任务板 (Quest Log)",
            Page::Hobbies => "收藏家陈列室 (Trophy Room)",
            Page::Projects => "副本挑战 (Dungeon List)",
            Page::MindMap => "世界观/技术树 (Tech Tree)",
            Page::Login => "系统鉴权 (Secure Terminal)",
        }
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "journal" | "home" | "blog" => Ok(Page::Journal),
            "hobbies" => Ok(Page::Hobbies),
            "projects" => Ok(Page::Projects),
            "map" | "mindmap" | "overview" => Ok(Page::MindMap),
            "login" => Ok(Page::Login),
            other => Err(format!("unknown page: {other}")),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Journal => "journal",
            Page::Hobbies => "hobbies",
            Page::Projects => "projects",
            Page::MindMap => "map",
            Page::Login => "login",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    OperatorId,
    SecurityCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub operator_id: TextInput,
    pub security_code: TextInput,
    pub focus: LoginField,
}

impl LoginForm {
    pub fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            LoginField::OperatorId => &mut self.operator_id,
            LoginField::SecurityCode => &mut self.security_code,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::OperatorId => LoginField::SecurityCode,
            LoginField::SecurityCode => LoginField::OperatorId,
        };
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Prompt(Prompt),
    Login(LoginForm),
    Help,
}

pub struct AppState {
    pub running: bool,
    pub mode: AppMode,
    pub page: Page,
    pub store: Store,
    pub config: AppConfig,

    // Selection per list page
    pub selected_blog: usize,
    pub selected_hobby: usize,
    pub selected_project: usize,

    /// Highlighted mind-map node.
    pub selected_node: NodeId,

    /// Where the map was last drawn, for mouse hit-testing.
    pub map_viewport: Option<Viewport>,

    // Message for status line
    pub message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, Store::seeded())
    }

    pub fn with_store(config: AppConfig, store: Store) -> Self {
        let selected_node = store.tree().id.clone();
        let mut app = Self {
            running: true,
            mode: AppMode::Normal,
            page: Page::Journal,
            store,
            config,
            selected_blog: 0,
            selected_hobby: 0,
            selected_project: 0,
            selected_node,
            map_viewport: None,
            message: None,
        };
        let start = app.config.start_page;
        app.open_page(start);
        app
    }

    pub fn is_admin(&self) -> bool {
        self.store.is_admin()
    }

    /// Switches page. The login page opens its form.
    pub fn open_page(&mut self, page: Page) {
        self.page = page;
        self.mode = match page {
            Page::Login => AppMode::Login(LoginForm::default()),
            _ => AppMode::Normal,
        };
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Keeps list selections inside their lists after deletions.
    pub fn clamp_selections(&mut self) {
        fn clamp(index: usize, len: usize) -> usize {
            index.min(len.saturating_sub(1))
        }
        self.selected_blog = clamp(self.selected_blog, self.store.blogs.len());
        self.selected_hobby = clamp(self.selected_hobby, self.store.hobbies.len());
        self.selected_project = clamp(self.selected_project, self.store.projects.len());
    }
}
