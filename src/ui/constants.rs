use ratatui::style::Color;

pub const CURSOR_INDICATOR: char = '▌';
pub const MASK_CHAR: char = '*';
pub const ELLIPSIS: char = '…';
pub const STAR_FULL: char = '★';
pub const STAR_EMPTY: char = '☆';

pub const APP_TITLE: &str = " ADVENTURER'S LOG ";
pub const DEBUG_BADGE: &str = "DEBUG MODE: ON";
pub const ADMIN_BADGE: &str = "[管理员]";
pub const VISITOR_BADGE: &str = "[访客]";
pub const EMPTY_LIST: &str = "-- 暂无记录 --";
pub const HELP_HINT: &str = "? 帮助 | q 退出";

// Terminal rows are roughly twice as tall as columns are wide.
pub const CELL_ASPECT: f64 = 2.0;

// Layout units kept free around the map's bounding box.
pub const MAP_MARGIN: f64 = 40.0;

// Palette
pub mod palette {
    use super::Color;

    pub const ACCENT: Color = Color::Yellow;
    pub const FRAME: Color = Color::Green;
    pub const TEXT: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const NODE: Color = Color::Cyan;
    pub const SELECTED: Color = Color::Yellow;
    pub const CONNECTOR: Color = Color::Green;
    pub const ADD_ICON: Color = Color::Magenta;
    pub const ALERT: Color = Color::Red;
}
