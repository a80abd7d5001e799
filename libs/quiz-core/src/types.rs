//! Core types for scraped flashcard sets.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Label of the card side holding the question.
pub const WORD_LABEL: &str = "word";

/// Label of the card side holding the answer.
pub const DEFINITION_LABEL: &str = "definition";

/// Suffix appended to every lettered option line.
pub const OPTION_SUFFIX: &str = ";[*]";

/// Marker appended to the option matching the correct answer.
pub const CORRECT_MARKER: &str = " =";

/// Identifier of a studiable item. The source page uses numbers, but strings are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One media entry of a card side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text: Option<String>,
}

/// One side of a card ("word", "definition", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSide {
    pub label: String,
    #[serde(default)]
    pub media: Vec<Media>,
}

impl CardSide {
    /// Text of the first media entry, if it has any.
    pub fn text(&self) -> Option<&str> {
        self.media
            .first()
            .and_then(|m| m.plain_text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// A question/answer card scraped from the set page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudiableItem {
    pub id: ItemId,
    #[serde(default)]
    pub card_sides: Vec<CardSide>,
}

impl StudiableItem {
    /// First side carrying the given label.
    pub fn side(&self, label: &str) -> Option<&CardSide> {
        self.card_sides.iter().find(|side| side.label == label)
    }

    /// Key used in the formatted set.
    pub fn key(&self) -> String {
        format!("Q{}", self.id)
    }
}

/// Question and answer text of one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedItem {
    pub question: String,
    pub answer: String,
}

/// Formatted cards keyed by `Q<id>`, in extraction order.
pub type FormattedSet = IndexMap<String, FormattedItem>;

/// Render-ready form of one question: numbered prompt plus formatted answer lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    pub number: usize,
    pub prompt: String,
    pub lines: Vec<String>,
}

impl QuestionBlock {
    /// Leading run text, e.g. `"1. What is 2+2?"`.
    pub fn heading(&self) -> String {
        format!("{}. {}", self.number, self.prompt)
    }
}
