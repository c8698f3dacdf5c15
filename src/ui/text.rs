use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::constants::ELLIPSIS;

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Wraps on whitespace where there is some, and on display width
    /// otherwise, so CJK runs without spaces still break.
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let max_width = max_width.max(1);
        let mut lines = Vec::new();
        let mut current_line = String::new();
        let mut current_width = 0;

        for word in text.split_whitespace() {
            let word_width = word.width();

            if current_width > 0 && current_width + 1 + word_width > max_width {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            } else if current_width > 0 {
                current_line.push(' ');
                current_width += 1;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if current_width + w > max_width && current_width > 0 {
                    lines.push(std::mem::take(&mut current_line));
                    current_width = 0;
                }
                current_line.push(c);
                current_width += w;
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }

        if lines.is_empty() {
            lines.push(text.to_string());
        }

        lines
    }

    /// Cuts `text` to at most `max_width` columns, ending in an ellipsis
    /// when something was dropped.
    pub fn truncate(text: &str, max_width: usize) -> String {
        if text.width() <= max_width {
            return text.to_string();
        }
        if max_width == 0 {
            return String::new();
        }

        let mut out = String::new();
        let mut width = 0;
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if width + w + 1 > max_width {
                break;
            }
            out.push(c);
            width += w;
        }
        out.push(ELLIPSIS);
        out
    }
}
