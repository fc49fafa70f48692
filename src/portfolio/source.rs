use crate::github::client::GitHubClient;
use crate::github::types::Record;
use crate::portfolio::card::filter_records;

pub const LOADING_MESSAGE: &str = "Loading repositories\u{2026}";
pub const FAILED_MESSAGE: &str = "Failed to load repositories from GitHub.";
pub const EMPTY_MESSAGE: &str = "No other public repositories found.";
pub const MISSING_STRUCTURE_MESSAGE: &str = "Error: Carousel structure missing.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Empty,
    Loaded(usize),
    /// Page containers for the carousel are missing; nothing is fetched.
    Unavailable,
}

impl LoadState {
    /// Text shown in place of the loading indicator, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            LoadState::Loading => Some(LOADING_MESSAGE),
            LoadState::Failed(_) => Some(FAILED_MESSAGE),
            LoadState::Empty => Some(EMPTY_MESSAGE),
            LoadState::Unavailable => Some(MISSING_STRUCTURE_MESSAGE),
            LoadState::Loaded(_) => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, LoadState::Failed(_) | LoadState::Unavailable)
    }
}

/// The single outbound fetch. Errors are flattened to text for the event bus.
pub async fn fetch_records(client: &GitHubClient) -> std::result::Result<Vec<Record>, String> {
    tracing::info!(owner = client.owner(), "fetching repositories");
    match client.fetch_repos().await {
        Ok(records) => {
            tracing::info!(count = records.len(), "repositories fetched");
            Ok(records)
        }
        Err(e) => {
            tracing::error!(error = %e, "error fetching repositories");
            Err(e.to_string())
        }
    }
}

/// Resolves a fetch result into the records to show and the resulting state.
pub fn resolve(
    result: std::result::Result<Vec<Record>, String>,
    highlighted: &str,
) -> (LoadState, Vec<Record>) {
    match result {
        Err(e) => (LoadState::Failed(e), Vec::new()),
        Ok(records) => {
            let kept = filter_records(records, highlighted);
            if kept.is_empty() {
                (LoadState::Empty, kept)
            } else {
                (LoadState::Loaded(kept.len()), kept)
            }
        }
    }
}
