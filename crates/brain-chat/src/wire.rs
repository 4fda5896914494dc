//! Wire types for the answer service.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::types::{DoorItem, Message, Source};

/// Value of the reply's `type` field that selects a door schedule.
pub const STRUCTURED_KIND: &str = "structured";

/// Body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
}

/// Decoded body of a `/chat` reply, before discrimination.
///
/// Every field is optional; `null` and absent are treated alike.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatReply {
    /// Any JSON value; only the string `"structured"` is significant.
    #[serde(rename = "type", default)]
    pub kind: Option<Value>,
    #[serde(default)]
    pub answer: Option<String>,
    /// Door rows, read one by one so a malformed row can't sink the reply.
    #[serde(default, deserialize_with = "door_rows")]
    pub data: Option<Vec<DoorItem>>,
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
}

impl ChatReply {
    /// A plain answer reply.
    pub fn plain(answer: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            kind: None,
            answer: Some(answer.into()),
            data: None,
            sources: Some(sources),
        }
    }

    /// A door schedule reply.
    pub fn structured(rows: Vec<DoorItem>, sources: Vec<Source>) -> Self {
        Self {
            kind: Some(Value::String(STRUCTURED_KIND.into())),
            answer: None,
            data: Some(rows),
            sources: Some(sources),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(&self.kind, Some(Value::String(kind)) if kind == STRUCTURED_KIND)
    }

    /// Map the reply to a transcript entry. The reply's declared type is the
    /// only discriminator.
    pub fn into_message(self) -> Message {
        let structured = self.is_structured();
        let sources = self.sources.unwrap_or_default();

        if structured {
            return Message::table(self.data.unwrap_or_default(), sources);
        }

        let content = self.answer.unwrap_or_else(|| {
            warn!("reply has no answer field, recording blank content");
            String::new()
        });
        Message::answer(content, sources)
    }
}

fn door_rows<'de, D>(deserializer: D) -> Result<Option<Vec<DoorItem>>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Value::Array(rows)) => rows,
        Some(other) => {
            warn!(data = %other, "door schedule data is not a list, ignoring it");
            return Ok(None);
        }
    };

    let items = rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let item = DoorItem::from_json(row);
            if item.is_none() {
                warn!(index, "skipping door schedule row that is not an object");
            }
            item
        })
        .collect();
    Ok(Some(items))
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// How the backend graded one evaluation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EvalLabel {
    #[serde(rename = "looks correct")]
    LooksCorrect,
    #[serde(rename = "partially correct")]
    PartiallyCorrect,
    #[serde(rename = "wrong")]
    Wrong,
}

impl EvalLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LooksCorrect => "looks correct",
            Self::PartiallyCorrect => "partially correct",
            Self::Wrong => "wrong",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalSummary {
    pub looks_correct: u32,
    pub partially_correct: u32,
    pub wrong: u32,
}

impl EvalSummary {
    pub fn total(&self) -> u32 {
        self.looks_correct + self.partially_correct + self.wrong
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    pub question: String,
    pub label: EvalLabel,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Body of `GET /eval`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    pub summary: EvalSummary,
    #[serde(default)]
    pub results: Vec<EvalResult>,
}
