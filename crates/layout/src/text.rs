use crate::metrics;
use playbook_types::Font;

/// Greedy word wrap against the measured width of each line.
///
/// Words are broken only at spaces; a single word wider than `max_width`
/// gets its own overflowing line rather than being hyphenated.
pub fn wrap_text(text: &str, font: Font, size: f32, max_width: f32) -> Vec<String> {
    let space_width = metrics::char_width(font, size, ' ');
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = metrics::text_width(font, size, word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
