use crate::model::NodeId;

/// Single-line text buffer with a cursor measured in chars, so multi-byte
/// labels edit correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled buffer with the cursor at the end.
    pub fn with_text(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Text before and after the cursor.
    pub fn split_at_cursor(&self) -> (String, String) {
        (
            self.chars[..self.cursor].iter().collect(),
            self.chars[self.cursor..].iter().collect(),
        )
    }

    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.chars.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    fn word_start_before(&self, mut pos: usize) -> usize {
        while pos > 0 && self.chars[pos - 1] == ' ' {
            pos -= 1;
        }
        while pos > 0 && self.chars[pos - 1] != ' ' {
            pos -= 1;
        }
        pos
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_start_before(self.cursor);
    }

    pub fn move_word_right(&mut self) {
        let len = self.chars.len();
        while self.cursor < len && self.chars[self.cursor] != ' ' {
            self.cursor += 1;
        }
        while self.cursor < len && self.chars[self.cursor] == ' ' {
            self.cursor += 1;
        }
    }

    pub fn delete_word_backward(&mut self) {
        let start = self.word_start_before(self.cursor);
        self.chars.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn delete_to_end(&mut self) {
        self.chars.truncate(self.cursor);
    }

    pub fn delete_to_start(&mut self) {
        self.chars.drain(..self.cursor);
        self.cursor = 0;
    }
}

/// What a submitted prompt will be applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    RenameNode(NodeId),
    AddChild(NodeId),
}

/// Modal request for one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub purpose: PromptPurpose,
    pub title: String,
    pub input: TextInput,
}

impl Prompt {
    pub fn rename(node: NodeId, current_label: &str) -> Self {
        Self {
            purpose: PromptPurpose::RenameNode(node),
            title: "重命名此节点:".to_string(),
            input: TextInput::with_text(current_label),
        }
    }

    pub fn add_child(parent: NodeId) -> Self {
        Self {
            purpose: PromptPurpose::AddChild(parent),
            title: "输入新子节点名称:".to_string(),
            input: TextInput::new(),
        }
    }

    /// The entered label, or `None` if it is blank. Cancelling the prompt
    /// never reaches here and is equally `None` for the caller.
    pub fn submit(&self) -> Option<String> {
        let text = self.input.text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace_multibyte() {
        let mut input = TextInput::with_text("新爱");
        input.insert('好');
        assert_eq!(input.text(), "新爱好");
        assert_eq!(input.cursor(), 3);

        input.move_left();
        input.backspace();
        assert_eq!(input.text(), "新好");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::with_text("abc");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "bc");
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "bc");
    }

    #[test]
    fn test_word_motion() {
        let mut input = TextInput::with_text("hello big world");
        input.move_word_left();
        assert_eq!(input.cursor(), 10);
        input.move_word_left();
        assert_eq!(input.cursor(), 6);
        input.move_home();
        input.move_word_right();
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = TextInput::with_text("hello big world");
        input.delete_word_backward();
        assert_eq!(input.text(), "hello big ");
        input.delete_word_backward();
        assert_eq!(input.text(), "hello ");
    }

    #[test]
    fn test_delete_to_start_and_end() {
        let mut input = TextInput::with_text("abcdef");
        input.move_left();
        input.move_left();
        input.delete_to_end();
        assert_eq!(input.text(), "abcd");
        input.move_left();
        input.delete_to_start();
        assert_eq!(input.text(), "d");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = TextInput::with_text("宇宙");
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("宇".to_string(), "宙".to_string()));
    }

    #[test]
    fn test_submit_rejects_blank() {
        let prompt = Prompt::add_child(NodeId::new("root"));
        assert_eq!(prompt.submit(), None);

        let mut prompt = Prompt::add_child(NodeId::new("root"));
        prompt.input.insert_str("   ");
        assert_eq!(prompt.submit(), None);

        prompt.input.insert_str("新爱好 ");
        assert_eq!(prompt.submit(), Some("新爱好".to_string()));
    }

    #[test]
    fn test_rename_prompt_prefilled() {
        let prompt = Prompt::rename(NodeId::new("root"), "我的宇宙");
        assert_eq!(prompt.input.text(), "我的宇宙");
        assert_eq!(prompt.purpose, PromptPurpose::RenameNode(NodeId::new("root")));
    }
}
