//! Extraction of studiable items from a set page's `__NEXT_DATA__` script.
//!
//! # Layout
//! ```text
//! __NEXT_DATA__ (JSON)
//! └── props.pageProps.dehydratedReduxStateKey   (JSON-encoded string)
//!     └── studyModesCommon.studiableData.studiableItems   (array)
//! ```
//!
//! The page state is double-encoded, so the inner key is parsed in a second pass.
//! Every key on the path is looked up individually so a missing one can be named.

use serde_json::Value;

use crate::error::{ExtractError, Result};
use crate::types::StudiableItem;

const OUTER_PATH: &[&str] = &["props", "pageProps"];
const STATE_KEY: &str = "dehydratedReduxStateKey";
const STATE_PATH: &[&str] = &["studyModesCommon", "studiableData"];
const ITEMS_KEY: &str = "studiableItems";

/// Parse the raw script text and return its studiable items.
pub fn extract_studiable_items(raw: &str) -> Result<Vec<StudiableItem>> {
    let page: Value = serde_json::from_str(raw).map_err(|source| ExtractError::InvalidJson {
        stage: "__NEXT_DATA__",
        source,
    })?;

    let page_props = walk(&page, OUTER_PATH)?;
    let encoded = field(page_props, STATE_KEY)?
        .as_str()
        .ok_or(ExtractError::NotAString(STATE_KEY))?;

    let state: Value = serde_json::from_str(encoded).map_err(|source| ExtractError::InvalidJson {
        stage: STATE_KEY,
        source,
    })?;

    let studiable_data = walk(&state, STATE_PATH)?;
    let items = field(studiable_data, ITEMS_KEY)?;

    serde_json::from_value(items.clone()).map_err(ExtractError::InvalidItems)
}

fn walk<'a>(root: &'a Value, path: &[&'static str]) -> Result<&'a Value> {
    path.iter().try_fold(root, |node, &key| field(node, key))
}

fn field<'a>(node: &'a Value, key: &'static str) -> Result<&'a Value> {
    match node.get(key) {
        Some(Value::Null) | None => Err(ExtractError::MissingField(key)),
        Some(value) => Ok(value),
    }
}
