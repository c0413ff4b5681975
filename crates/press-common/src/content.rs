use async_trait::async_trait;
use serde::Serialize;

use crate::contentful::ReleaseQuery;
use crate::error::ContentError;
use crate::locale::Locale;
use crate::model::{PressKitAsset, PressRelease};

pub type FetchResult<T> = Result<T, ContentError>;

/// Read-only access to press content.
///
/// Every call is an independent request/response with no retries; callers
/// decide how a failure degrades the page.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Releases newest first, narrowed upstream by `query`.
    async fn list_press_releases(&self, query: &ReleaseQuery) -> FetchResult<Vec<PressRelease>>;

    /// `ContentError::NotFound` when no release has this slug.
    async fn press_release_by_slug(&self, slug: &str, locale: Locale) -> FetchResult<PressRelease>;

    /// Same-category releases sharing any of `tags`, excluding `slug`.
    async fn related_press_releases(
        &self,
        slug: &str,
        category: &str,
        tags: &[String],
        limit: u32,
        locale: Locale,
    ) -> FetchResult<Vec<PressRelease>>;

    /// Ordered by category then title.
    async fn list_press_kit_assets(
        &self,
        category: Option<&str>,
        locale: Locale,
    ) -> FetchResult<Vec<PressKitAsset>>;

    /// Tag vocabulary across every release in `locale`.
    async fn list_distinct_tags(&self, locale: Locale) -> FetchResult<Vec<String>>;
}

/// Success/failure envelope used by the JSON endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Wrap a fetch result; `fallback` replaces upstream detail on failure.
    pub fn from_result(result: FetchResult<T>, fallback: &str) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => Self::failure(e.public_message(fallback)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_envelope_serializes_without_data() {
        let resp: ApiResponse<Vec<String>> = ApiResponse::from_result(
            Err(ContentError::Config("credentials missing".to_string())),
            "Failed to fetch press release tags.",
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ok"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "credentials missing");
    }

    #[test]
    fn success_envelope_omits_error() {
        let resp = ApiResponse::success(vec!["Awards".to_string()]);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ok"], true);
        assert_eq!(json["data"][0], "Awards");
        assert!(json.get("error").is_none());
    }
}
