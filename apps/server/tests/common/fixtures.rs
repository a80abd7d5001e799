//! Test fixtures and factory functions for building set pages.

use serde_json::{json, Value};

/// A card with a question and a definition side.
pub fn card(id: i64, question: &str, answer: &str) -> Value {
    json!({
        "id": id,
        "cardSides": [
            { "sideId": 0, "label": "word", "media": [{ "type": 1, "plainText": question }] },
            { "sideId": 1, "label": "definition", "media": [{ "type": 1, "plainText": answer }] }
        ]
    })
}

/// A card that only has a question side.
pub fn card_without_definition(id: i64, question: &str) -> Value {
    json!({
        "id": id,
        "cardSides": [
            { "sideId": 0, "label": "word", "media": [{ "type": 1, "plainText": question }] }
        ]
    })
}

/// Wrap studiable items the way the set page embeds them in `__NEXT_DATA__`.
pub fn next_data(items: Vec<Value>) -> String {
    let state = json!({
        "studyModesCommon": {
            "studiableData": { "studiableItems": items }
        }
    });
    json!({
        "props": {
            "pageProps": { "dehydratedReduxStateKey": state.to_string() }
        },
        "page": "/[...paths]"
    })
    .to_string()
}

/// A page whose outer JSON parses but lacks the embedded state key.
pub fn next_data_without_state() -> String {
    json!({ "props": { "pageProps": { "statusCode": 200 } } }).to_string()
}

/// Three items: two well-formed, one missing its definition side.
pub fn sample_items() -> Vec<Value> {
    vec![
        card(101, "What is 2+2?\na) three\nb) four", "b"),
        card_without_definition(102, "Orphan question"),
        card(103, "Capital of France\na) Paris\nb) Rome", "a"),
    ]
}
