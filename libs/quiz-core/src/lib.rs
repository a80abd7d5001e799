//! Core library for turning scraped flashcard sets into quiz documents.
//!
//! Provides:
//! - Extraction of studiable items from a page's embedded `__NEXT_DATA__` state
//! - Transformation of question/answer cards into numbered, lettered quiz blocks
//! - Shared types (StudiableItem, FormattedItem, QuestionBlock, etc.)

pub mod error;
pub mod extract;
pub mod transform;
pub mod types;

pub use error::{ExtractError, Result};
pub use extract::extract_studiable_items;
pub use transform::{format_answers, format_items, is_correct_line, question_block, question_blocks};
pub use types::{
    CardSide, FormattedItem, FormattedSet, ItemId, Media, QuestionBlock, StudiableItem,
    CORRECT_MARKER, DEFINITION_LABEL, OPTION_SUFFIX, WORD_LABEL,
};
