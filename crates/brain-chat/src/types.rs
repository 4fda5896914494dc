//! Transcript data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Content of the assistant message appended when the backend can't be
/// reached or its reply can't be decoded.
pub const BACKEND_ERROR_TEXT: &str = "Error contacting backend";

/// Caption shown above a door schedule table.
pub const DOOR_SCHEDULE_CAPTION: &str = "Here is the door schedule I found:";

/// A citation into the document corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub file_name: String,
    pub page: u32,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} p.{}", self.file_name, self.page)
    }
}

/// One row of a door schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorItem {
    pub mark: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_mm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fire_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Document the row was extracted from, when the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_page: Option<u32>,
}

impl DoorItem {
    pub fn new(mark: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            mark: mark.into(),
            location: location.into(),
            width_mm: None,
            height_mm: None,
            fire_rating: None,
            material: None,
            source_file: None,
            source_page: None,
        }
    }

    /// Read a row as the backend sends it. The backend extracts rows from
    /// model output, so fields may be missing, `null` or mistyped: text
    /// fields take strings or numbers, measurements take numbers or numeric
    /// strings, and anything else is left blank. Only a non-object row is
    /// rejected.
    pub fn from_json(row: &Value) -> Option<Self> {
        let obj = row.as_object()?;
        let text = |field: &str| obj.get(field).and_then(text_value);
        let mm = |field: &str| obj.get(field).and_then(mm_value);

        Some(Self {
            mark: text("mark").unwrap_or_default(),
            location: text("location").unwrap_or_default(),
            width_mm: mm("width_mm"),
            height_mm: mm("height_mm"),
            fire_rating: text("fire_rating"),
            material: text("material"),
            source_file: text("source_file"),
            source_page: obj.get("source_page").and_then(page_value),
        })
    }
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn mm_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches("mm").trim_end().parse().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn page_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Message {
    User {
        content: String,
    },
    /// Free-text answer with citations.
    Answer {
        content: String,
        sources: Vec<Source>,
    },
    /// Structured door schedule.
    Table {
        content: String,
        rows: Vec<DoorItem>,
        sources: Vec<Source>,
    },
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }

    pub fn answer(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self::Answer {
            content: content.into(),
            sources,
        }
    }

    pub fn table(rows: Vec<DoorItem>, sources: Vec<Source>) -> Self {
        Self::Table {
            content: DOOR_SCHEDULE_CAPTION.to_string(),
            rows,
            sources,
        }
    }

    /// The fixed entry recorded in place of a reply on transport failure.
    pub fn backend_error() -> Self {
        Self::answer(BACKEND_ERROR_TEXT, Vec::new())
    }

    pub fn content(&self) -> &str {
        match self {
            Self::User { content } | Self::Answer { content, .. } | Self::Table { content, .. } => {
                content
            }
        }
    }

    pub fn sources(&self) -> &[Source] {
        match self {
            Self::User { .. } => &[],
            Self::Answer { sources, .. } | Self::Table { sources, .. } => sources,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_display() {
        let s = Source {
            file_name: "spec.pdf".into(),
            page: 4,
        };
        assert_eq!(s.to_string(), "spec.pdf p.4");
    }

    #[test]
    fn backend_error_has_no_sources() {
        let msg = Message::backend_error();
        assert_eq!(msg.content(), BACKEND_ERROR_TEXT);
        assert!(msg.sources().is_empty());
        assert!(!msg.is_user());
    }

    #[test]
    fn table_uses_fixed_caption() {
        let msg = Message::table(vec![DoorItem::new("D1", "Lobby")], Vec::new());
        assert_eq!(msg.content(), DOOR_SCHEDULE_CAPTION);
    }

    #[test]
    fn message_serializes_with_role_tag() {
        let json = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));

        let json = serde_json::to_value(Message::table(vec![DoorItem::new("D1", "Lobby")], vec![]))
            .unwrap();
        assert_eq!(json["role"], "table");
        assert_eq!(json["rows"][0], serde_json::json!({"mark": "D1", "location": "Lobby"}));
    }

    #[test]
    fn door_item_accepts_nulls() {
        let item: DoorItem = serde_json::from_str(
            r#"{"mark":"D2","location":"Stair 1","width_mm":null,"height_mm":2100,
                "fire_rating":"FD60","material":null,"source_file":"doors.pdf","source_page":3}"#,
        )
        .unwrap();
        assert_eq!(item.width_mm, None);
        assert_eq!(item.height_mm, Some(2100.0));
        assert_eq!(item.fire_rating.as_deref(), Some("FD60"));
        assert_eq!(item.material, None);
        assert_eq!(item.source_page, Some(3));
    }

    #[test]
    fn row_missing_or_null_text_is_blank() {
        let item = DoorItem::from_json(&serde_json::json!({"location": "Lobby"})).unwrap();
        assert_eq!(item, DoorItem::new("", "Lobby"));

        let item = DoorItem::from_json(&serde_json::json!({"mark": null, "location": "Stair"}))
            .unwrap();
        assert_eq!(item.mark, "");
        assert_eq!(item.location, "Stair");
    }

    #[test]
    fn row_numeric_strings_are_parsed() {
        let item = DoorItem::from_json(&serde_json::json!({
            "mark": 12, "location": "Plant", "width_mm": "900", "height_mm": " 2100 mm",
            "fire_rating": 60, "source_page": "3"
        }))
        .unwrap();
        assert_eq!(item.mark, "12");
        assert_eq!(item.width_mm, Some(900.0));
        assert_eq!(item.height_mm, Some(2100.0));
        assert_eq!(item.fire_rating.as_deref(), Some("60"));
        assert_eq!(item.source_page, Some(3));
    }

    #[test]
    fn row_unreadable_values_are_blank() {
        let item = DoorItem::from_json(&serde_json::json!({
            "mark": "D3", "location": ["a"], "width_mm": "wide", "height_mm": true,
            "material": {"kind": "oak"}, "source_page": -1
        }))
        .unwrap();
        assert_eq!(item, DoorItem::new("D3", ""));
    }

    #[test]
    fn non_object_row_is_rejected() {
        assert_eq!(DoorItem::from_json(&serde_json::json!("D1 Lobby")), None);
        assert_eq!(DoorItem::from_json(&Value::Null), None);
    }
}
