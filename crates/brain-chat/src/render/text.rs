//! Plain-text layout of the display tree for terminals.

use unicode_width::UnicodeWidthStr;

use super::{Align, Block, TABLE_COLUMNS};

/// Lays out display blocks as lines of text at a fixed column width.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    width: usize,
    user_label: String,
    assistant_label: String,
    thinking_text: String,
}

impl TextRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            user_label: "You".into(),
            assistant_label: "AI".into(),
            thinking_text: "AI is thinking…".into(),
        }
    }

    pub fn with_labels(mut self, user: impl Into<String>, assistant: impl Into<String>) -> Self {
        self.user_label = user.into();
        self.assistant_label = assistant.into();
        self
    }

    pub fn with_thinking_text(mut self, text: impl Into<String>) -> Self {
        self.thinking_text = text.into();
        self
    }

    /// Render blocks to a newline-separated string (no trailing newline).
    pub fn render(&self, blocks: &[Block]) -> String {
        let mut lines = Vec::new();
        for block in blocks {
            self.render_block(block, &mut lines);
        }
        lines.join("\n")
    }

    pub fn render_block(&self, block: &Block, lines: &mut Vec<String>) {
        match block {
            Block::Bubble {
                align: Align::Right,
                text,
                ..
            } => {
                let labelled = format!("{}: {text}", self.user_label);
                for line in labelled.split('\n') {
                    let pad = self.width.saturating_sub(line.width());
                    lines.push(format!("{}{line}", " ".repeat(pad)));
                }
            }
            Block::Bubble {
                align: Align::Left,
                text,
                citations,
            } => {
                let labelled = format!("{}: {text}", self.assistant_label);
                lines.extend(labelled.split('\n').map(String::from));
                if !citations.is_empty() {
                    lines.push(format!("Sources: {}", citations.join(", ")));
                }
            }
            Block::Table { rows } => render_table(rows, lines),
            Block::Thinking => lines.push(self.thinking_text.clone()),
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(80)
    }
}

fn render_table(rows: &[[String; 6]], lines: &mut Vec<String>) {
    let mut widths = TABLE_COLUMNS.map(UnicodeWidthStr::width);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    lines.push(table_line(TABLE_COLUMNS.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in rows {
        lines.push(table_line(row.iter().map(String::as_str), &widths));
    }
}

fn table_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize; 6]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.width());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    padded.join(" | ").trim_end().to_string()
}
