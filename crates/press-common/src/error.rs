/// Errors surfaced by every content fetch.
///
/// None of these are meant to reach a user verbatim except `Config`, whose
/// message is a deployment diagnostic. Use [`ContentError::public_message`]
/// when rendering.
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("{0}")]
    Config(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid response JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("upstream returned error: status={status} message={message}")]
    Upstream { status: StatusCode, message: String },

    #[error("upstream returned non-JSON error: status={status} body={body}")]
    UpstreamBody { status: StatusCode, body: String },
}

pub const PRESS_RELEASE_NOT_FOUND: &str = "Press release not found.";

// Per-operation fallbacks for `public_message`.
pub const RELEASES_FAILED: &str = "Failed to fetch data from Contentful.";
pub const RELATED_FAILED: &str = "Failed to fetch related press releases.";
pub const PRESS_KIT_FAILED: &str = "Failed to fetch press kit assets.";
pub const TAGS_FAILED: &str = "Failed to fetch press release tags.";

impl ContentError {
    /// Text shown in the error panel. `fallback` names the failed operation
    /// and replaces any upstream detail.
    pub fn public_message(&self, fallback: &str) -> String {
        match self {
            ContentError::Config(msg) => msg.clone(),
            ContentError::NotFound(_) => PRESS_RELEASE_NOT_FOUND.to_string(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }

    pub fn is_config(&self) -> bool {
        matches!(self, ContentError::Config(_))
    }
}
