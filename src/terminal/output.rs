//! Box drawing for help and usage text.

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

const FLAG_COL: usize = 24;

/// Box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// Box content line: │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Centered box content line: │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// Box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let desc_col = inner_width - FLAG_COL;

    let flag_padded = format!("{:<width$.width$}", flag, width = FLAG_COL);
    let indent = " ".repeat(FLAG_COL);

    let mut lines = wrap_words(desc, desc_col);
    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { &flag_padded } else { &indent };
            let padding = desc_col.saturating_sub(line.chars().count());
            format!("│ {}{}{} │", lead, line, " ".repeat(padding))
        })
        .collect()
}

/// Greedy word wrap at `width` columns.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Display width, skipping ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
