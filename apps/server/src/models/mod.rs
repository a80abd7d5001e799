//! API response types

use serde::{Deserialize, Serialize};

/// Body returned when a set yields no data.
pub const NO_DATA_MESSAGE: &str = "No data found or unable to parse data.";

/// JSON error body: `{ "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Success message pointing at the written document.
pub fn saved_message(output_path: &std::path::Path) -> String {
    format!("Document saved at: {}", output_path.display())
}
