//! Transcript rendering.
//!
//! [`render_transcript`] is a pure function from transcript and pending
//! flag to a display tree; [`TextRenderer`] lays that tree out as terminal
//! text.

mod text;

pub use text::TextRenderer;

use crate::types::{DoorItem, Message};

/// Door schedule columns, in display order.
pub const TABLE_COLUMNS: [&str; 6] = [
    "Mark",
    "Location",
    "Width mm",
    "Height mm",
    "Fire rating",
    "Material",
];

/// Bubble alignment: user messages on the right, assistant on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One node of the display tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Bubble {
        align: Align,
        text: String,
        /// `"<file_name> p.<page>"` per source, in source order.
        citations: Vec<String>,
    },
    Table {
        rows: Vec<[String; 6]>,
    },
    /// Transient indicator shown while a request is outstanding.
    Thinking,
}

/// Render a whole transcript, appending the thinking indicator when
/// `pending` is set.
pub fn render_transcript(messages: &[Message], pending: bool) -> Vec<Block> {
    let mut blocks: Vec<Block> = messages.iter().flat_map(render_message).collect();
    if pending {
        blocks.push(Block::Thinking);
    }
    blocks
}

pub fn render_message(message: &Message) -> Vec<Block> {
    match message {
        Message::User { content } => vec![Block::Bubble {
            align: Align::Right,
            text: content.clone(),
            citations: Vec::new(),
        }],
        Message::Answer { content, sources } => vec![Block::Bubble {
            align: Align::Left,
            text: content.clone(),
            citations: sources.iter().map(ToString::to_string).collect(),
        }],
        Message::Table { content, rows, .. } => vec![
            Block::Bubble {
                align: Align::Left,
                text: content.clone(),
                citations: Vec::new(),
            },
            Block::Table {
                rows: rows.iter().map(table_row).collect(),
            },
        ],
    }
}

/// Cells for one door, blank where a field is missing.
pub fn table_row(item: &DoorItem) -> [String; 6] {
    [
        item.mark.clone(),
        item.location.clone(),
        format_mm(item.width_mm),
        format_mm(item.height_mm),
        item.fire_rating.clone().unwrap_or_default(),
        item.material.clone().unwrap_or_default(),
    ]
}

fn format_mm(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
