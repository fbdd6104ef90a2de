use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

const PRETTY_INDENT: &[u8] = b"    ";

/// JSON written by the OCR producer. The viewer never inspects its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultDocument(pub Value);

impl ResultDocument {
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Indented rendering with non-ASCII characters left as-is.
    pub fn to_pretty_string(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(PRETTY_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.0.serialize(&mut ser)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Empty,
    Loaded(ResultDocument),
}

impl ViewState {
    pub fn is_empty(&self) -> bool {
        matches!(self, ViewState::Empty)
    }

    /// Pretty JSON for a loaded document, `None` otherwise.
    pub fn pretty_text(&self) -> Option<String> {
        match self {
            ViewState::Empty => None,
            ViewState::Loaded(doc) => doc.to_pretty_string().ok(),
        }
    }
}
