/// Contentful Content Delivery API client.
///
/// Credentials are optional at construction time: a client without them still
/// builds, and every call reports `ContentError::Config` so the page can show a
/// diagnostic instead of the process refusing to start.
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::content::{ContentSource, FetchResult};
use crate::error::ContentError;
use crate::filter::{sorted_unique, SearchFilters};
use crate::locale::Locale;
use crate::model::{PressKitAsset, PressRelease};
use crate::wire::{EntryCollection, ErrorEnvelope, KitFields, ReleaseFields, TagFields};

pub const RELEASE_CONTENT_TYPE: &str = "pressRelease";
pub const KIT_CONTENT_TYPE: &str = "pressKitAsset";
/// Upper bound on entries scanned when collecting the tag vocabulary.
pub const TAG_SCAN_LIMIT: u32 = 1000;

pub const MISSING_CREDENTIALS: &str = "Contentful environment variables are not set. Please add \
CONTENTFUL_SPACE_ID and CONTENTFUL_ACCESS_TOKEN to your environment.";

#[derive(Clone)]
pub struct ContentfulConfig {
    pub space_id: Option<String>,
    pub access_token: Option<String>,
    pub environment: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_error_body_bytes: usize,
}

impl fmt::Debug for ContentfulConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentfulConfig")
            .field("space_id", &self.space_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ContentfulConfig {
    fn default() -> Self {
        Self {
            space_id: None,
            access_token: None,
            environment: "master".to_string(),
            base_url: "https://cdn.contentful.com".to_string(),
            timeout: Duration::from_secs(10),
            max_error_body_bytes: 8 * 1024,
        }
    }
}

impl ContentfulConfig {
    /// Optional:
    /// - `CONTENTFUL_SPACE_ID`, `CONTENTFUL_ACCESS_TOKEN` (checked per request)
    /// - `CONTENTFUL_ENVIRONMENT` (default: "master")
    /// - `CONTENTFUL_BASE_URL` (default: "https://cdn.contentful.com")
    /// - `CONTENTFUL_TIMEOUT_SECS` (default: 10)
    /// - `CONTENTFUL_MAX_ERROR_BODY_BYTES` (default: 8192)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let timeout = std::env::var("CONTENTFUL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        let max_error_body_bytes = std::env::var("CONTENTFUL_MAX_ERROR_BODY_BYTES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.max_error_body_bytes);

        Self {
            space_id: non_empty("CONTENTFUL_SPACE_ID"),
            access_token: non_empty("CONTENTFUL_ACCESS_TOKEN"),
            environment: non_empty("CONTENTFUL_ENVIRONMENT").unwrap_or(defaults.environment),
            base_url: non_empty("CONTENTFUL_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            timeout,
            max_error_body_bytes,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.space_id.is_some() && self.access_token.is_some()
    }
}

/// Press release query with the fields the upstream understands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseQuery {
    pub category: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub tags: Vec<String>,
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub slug: Option<String>,
    pub exclude_slug: Option<String>,
    /// Field projection, e.g. `fields.tags`.
    pub select: Option<String>,
    pub locale: Option<Locale>,
}

impl ReleaseQuery {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
            ..Self::default()
        }
    }

    /// Tag-only projection over the first [`TAG_SCAN_LIMIT`] releases.
    pub fn tag_scan(locale: Locale) -> Self {
        Self {
            select: Some("fields.tags".to_string()),
            limit: Some(TAG_SCAN_LIMIT),
            ..Self::with_locale(locale)
        }
    }

    /// Wire parameters, newest first. `date_to` covers its whole day.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("content_type", RELEASE_CONTENT_TYPE.to_string()),
            ("order", "-fields.publishDate".to_string()),
        ];
        if let Some(category) = non_empty(&self.category) {
            params.push(("fields.category", category.to_string()));
        }
        if let Some(from) = self.date_from {
            params.push(("fields.publishDate[gte]", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.date_to {
            params.push((
                "fields.publishDate[lte]",
                format!("{}T23:59:59.999Z", to.format("%Y-%m-%d")),
            ));
        }
        if let Some(query) = non_empty(&self.query) {
            params.push(("query", query.to_string()));
        }
        if !self.tags.is_empty() {
            params.push(("fields.tags[in]", self.tags.join(",")));
        }
        if let Some(slug) = non_empty(&self.slug) {
            params.push(("fields.slug", slug.to_string()));
        }
        if let Some(slug) = non_empty(&self.exclude_slug) {
            params.push(("fields.slug[ne]", slug.to_string()));
        }
        if let Some(select) = non_empty(&self.select) {
            params.push(("select", select.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(locale) = self.locale {
            params.push(("locale", locale.cms_code().to_string()));
        }
        params
    }
}

impl From<&SearchFilters> for ReleaseQuery {
    fn from(filters: &SearchFilters) -> Self {
        Self {
            category: filters.category_value().map(str::to_string),
            date_from: filters.date_from,
            date_to: filters.date_to,
            tags: filters.tags.clone(),
            query: filters.query_text().map(str::to_string),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetQuery {
    pub category: Option<String>,
    pub locale: Option<Locale>,
}

impl AssetQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("content_type", KIT_CONTENT_TYPE.to_string()),
            ("order", "fields.category,fields.title".to_string()),
        ];
        if let Some(category) = non_empty(&self.category) {
            params.push(("fields.category", category.to_string()));
        }
        if let Some(locale) = self.locale {
            params.push(("locale", locale.cms_code().to_string()));
        }
        params
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct ContentfulClient {
    config: ContentfulConfig,
    http: reqwest::Client,
}

impl ContentfulClient {
    pub fn new(config: ContentfulConfig) -> Result<Self, ContentError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("press-room/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ContentfulConfig {
        &self.config
    }

    fn credentials(&self) -> Result<(&str, &str), ContentError> {
        match (self.config.space_id.as_deref(), self.config.access_token.as_deref()) {
            (Some(space), Some(token)) => Ok((space, token)),
            _ => {
                error!("{}", MISSING_CREDENTIALS);
                Err(ContentError::Config(MISSING_CREDENTIALS.to_string()))
            }
        }
    }

    async fn get_entries<F: DeserializeOwned>(
        &self,
        params: &[(&'static str, String)],
    ) -> Result<EntryCollection<F>, ContentError> {
        let (space, token) = self.credentials()?;
        let url = format!(
            "{}/spaces/{}/environments/{}/entries",
            self.config.base_url, space, self.config.environment
        );
        debug!(url = %url, ?params, "contentful request");
        let resp = self
            .http
            .get(&url)
            .bearer_auth(token)
            .query(params)
            .send()
            .await?;
        Self::parse_json_response(resp, self.config.max_error_body_bytes).await
    }

    async fn parse_json_response<T: DeserializeOwned>(
        resp: reqwest::Response,
        max_error_body_bytes: usize,
    ) -> Result<T, ContentError> {
        if resp.status().is_success() {
            let body = resp.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }
        Err(Self::to_upstream_error(resp, max_error_body_bytes).await)
    }

    async fn to_upstream_error(resp: reqwest::Response, max_error_body_bytes: usize) -> ContentError {
        let status = resp.status();
        let body = read_limited_text(resp, max_error_body_bytes).await;
        if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(&body) {
            let message = parsed
                .message
                .or_else(|| parsed.sys.map(|s| s.id))
                .unwrap_or_else(|| "unknown upstream error".to_string());
            return ContentError::Upstream { status, message };
        }
        ContentError::UpstreamBody { status, body }
    }
}

async fn read_limited_text(resp: reqwest::Response, max_bytes: usize) -> String {
    match resp.bytes().await {
        Ok(mut b) => {
            if b.len() > max_bytes {
                b.truncate(max_bytes);
            }
            String::from_utf8_lossy(&b).to_string()
        }
        Err(e) => {
            warn!(error = %e, "failed to read upstream error body");
            "<failed to read error body>".to_string()
        }
    }
}

#[async_trait]
impl ContentSource for ContentfulClient {
    async fn list_press_releases(&self, query: &ReleaseQuery) -> FetchResult<Vec<PressRelease>> {
        let collection: EntryCollection<ReleaseFields> = self
            .get_entries(&query.to_params())
            .await
            .inspect_err(|e| error!(error = %e, "failed to fetch press releases"))?;
        let releases = collection.into_press_releases();
        debug!(count = releases.len(), "fetched press releases");
        Ok(releases)
    }

    async fn press_release_by_slug(&self, slug: &str, locale: Locale) -> FetchResult<PressRelease> {
        let query = ReleaseQuery {
            slug: Some(slug.to_string()),
            limit: Some(1),
            locale: Some(locale),
            ..ReleaseQuery::default()
        };
        let collection: EntryCollection<ReleaseFields> = self
            .get_entries(&query.to_params())
            .await
            .inspect_err(|e| error!(error = %e, slug, "failed to fetch press release"))?;
        collection
            .into_press_releases()
            .into_iter()
            .next()
            .ok_or_else(|| ContentError::NotFound(slug.to_string()))
    }

    async fn related_press_releases(
        &self,
        slug: &str,
        category: &str,
        tags: &[String],
        limit: u32,
        locale: Locale,
    ) -> FetchResult<Vec<PressRelease>> {
        let query = ReleaseQuery {
            category: Some(category.to_string()),
            tags: tags.to_vec(),
            limit: Some(limit),
            exclude_slug: Some(slug.to_string()),
            locale: Some(locale),
            ..ReleaseQuery::default()
        };
        let collection: EntryCollection<ReleaseFields> = self
            .get_entries(&query.to_params())
            .await
            .inspect_err(|e| error!(error = %e, slug, "failed to fetch related press releases"))?;
        Ok(collection.into_press_releases())
    }

    async fn list_press_kit_assets(
        &self,
        category: Option<&str>,
        locale: Locale,
    ) -> FetchResult<Vec<PressKitAsset>> {
        let query = AssetQuery {
            category: category.map(str::to_string),
            locale: Some(locale),
        };
        let collection: EntryCollection<KitFields> = self
            .get_entries(&query.to_params())
            .await
            .inspect_err(|e| error!(error = %e, "failed to fetch press kit assets"))?;
        Ok(collection.into_press_kit_assets())
    }

    async fn list_distinct_tags(&self, locale: Locale) -> FetchResult<Vec<String>> {
        let query = ReleaseQuery::tag_scan(locale);
        let collection: EntryCollection<TagFields> = self
            .get_entries(&query.to_params())
            .await
            .inspect_err(|e| {
                error!(error = %e, locale = %locale, "failed to fetch press release tags")
            })?;
        if collection.total > u64::from(TAG_SCAN_LIMIT) {
            warn!(
                total = collection.total,
                limit = TAG_SCAN_LIMIT,
                "tag vocabulary truncated to the first entries"
            );
        }
        Ok(sorted_unique(
            collection
                .items
                .iter()
                .flat_map(|entry| entry.fields.tags.iter().flatten()),
        ))
    }
}
