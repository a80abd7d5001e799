//! Fetch, extract and format one set.

use quiz_core::{extract_studiable_items, format_items, FormattedSet};

use crate::services::browser::{FetchError, PageFetcher};

/// Load the formatted cards of the set page at `url`.
///
/// Returns `None` when there is no data to write: the browser could not start,
/// the page failed to load, it has no `__NEXT_DATA__` script, or the embedded
/// state is missing a field. Every failure is logged here.
pub async fn load_set(fetcher: &dyn PageFetcher, url: &str) -> Option<FormattedSet> {
    let raw = match fetcher.fetch_next_data(url).await {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::error!("No __NEXT_DATA__ script found on {}", url);
            return None;
        }
        Err(FetchError::Launch(message)) => {
            tracing::error!("Unable to launch browser: {}", message);
            return None;
        }
        Err(e) => {
            tracing::error!("Unable to fetch {}: {}", url, e);
            return None;
        }
    };

    match extract_studiable_items(&raw) {
        Ok(items) => {
            let set = format_items(&items);
            tracing::info!("Extracted {} of {} studiable items", set.len(), items.len());
            Some(set)
        }
        Err(e) => {
            tracing::error!("Unable to extract studiable items: {}", e);
            None
        }
    }
}
