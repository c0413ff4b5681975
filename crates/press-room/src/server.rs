/// HTTP routes for the press room site and its JSON API.
use std::future::Future;
use std::sync::{Arc, LazyLock};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use futures::future;
use press_common::content::{ApiResponse, ContentSource};
use press_common::contentful::ReleaseQuery;
use press_common::error::{ContentError, PRESS_KIT_FAILED, RELATED_FAILED, RELEASES_FAILED, TAGS_FAILED};
use press_common::filter;
use press_common::locale::{Locale, LOCALE_COOKIE};
use press_common::model::PressRelease;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::AppError;
use crate::params::{encode_component, ListingParams};
use crate::views::{self, PageContext, PressRoomView};

pub const RELATED_LIMIT: u32 = 3;
const LOCALE_COOKIE_MAX_AGE: u64 = 365 * 24 * 60 * 60;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("valid regex"));

#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentSource>,
    /// `max-age` for successful pages.
    pub max_age_secs: u64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/api/press-releases", get(api_press_releases))
        .route("/api/tags", get(api_tags))
        .route("/locale/{code}", get(switch_locale))
        .route("/press/{slug}", get(unprefixed_release))
        .route("/press-kit", get(unprefixed_press_kit))
        .route("/{locale}", get(press_room))
        .route("/{locale}/press/{slug}", get(release_detail))
        .route("/{locale}/press-kit", get(press_kit))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

fn cookie_locale(headers: &HeaderMap) -> Locale {
    let value = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == LOCALE_COOKIE)
        .map(|(_, value)| value);
    Locale::resolve(value)
}

/// An explicit `locale` query parameter wins over the cookie.
fn request_locale(pairs: &[(String, String)], headers: &HeaderMap) -> Locale {
    pairs
        .iter()
        .find(|(k, _)| k == "locale")
        .and_then(|(_, v)| Locale::from_code(v))
        .unwrap_or_else(|| cookie_locale(headers))
}

fn request_path(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// Only successful responses are cacheable.
fn with_cache_control(state: &AppState, mut resp: Response) -> Response {
    let cache = if resp.status().is_success() {
        format!("public, max-age={}", state.max_age_secs)
    } else {
        "no-store".to_string()
    };
    if let Ok(value) = HeaderValue::from_str(&cache) {
        resp.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    resp
}

fn page(state: &AppState, status: StatusCode, html: String) -> Response {
    with_cache_control(state, (status, Html(html)).into_response())
}

fn error_page(state: &AppState, ctx: &PageContext<'_>, err: &ContentError, fallback: &str) -> Response {
    page(
        state,
        StatusCode::BAD_GATEWAY,
        views::error_page(ctx, &err.public_message(fallback)),
    )
}

fn not_found(state: &AppState, locale: Locale, uri: &Uri) -> Response {
    let ctx = PageContext {
        locale,
        path: request_path(uri),
    };
    page(state, StatusCode::NOT_FOUND, views::not_found_page(&ctx))
}

fn api<T: Serialize>(state: &AppState, body: ApiResponse<T>) -> Response {
    let status = if body.ok {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    with_cache_control(state, (status, Json(body)).into_response())
}

#[derive(Serialize, Deserialize)]
struct Health {
    status: String,
}

async fn healthz() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

async fn root(headers: HeaderMap) -> Redirect {
    Redirect::temporary(&format!("/{}", cookie_locale(&headers)))
}

async fn fallback(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    not_found(&state, cookie_locale(&headers), &uri)
}

async fn unprefixed_release(headers: HeaderMap, Path(slug): Path<String>) -> Redirect {
    let locale = cookie_locale(&headers);
    Redirect::temporary(&format!("/{locale}/press/{}", encode_component(&slug)))
}

async fn unprefixed_press_kit(headers: HeaderMap, uri: Uri) -> Redirect {
    let locale = cookie_locale(&headers);
    let query = uri.query().map(|q| format!("?{q}")).unwrap_or_default();
    Redirect::temporary(&format!("/{locale}/press-kit{query}"))
}

#[derive(Deserialize)]
struct SwitchParams {
    redirect: Option<String>,
}

async fn switch_locale(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<SwitchParams>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_code(&code) else {
        return not_found(&state, cookie_locale(&headers), &uri);
    };
    let target = localized_target(params.redirect.as_deref(), locale);
    let cookie = format!(
        "{LOCALE_COOKIE}={}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE}; SameSite=Lax",
        locale.code()
    );
    info!(locale = %locale, target = %target, "switching locale");
    ([(header::SET_COOKIE, cookie)], Redirect::temporary(&target)).into_response()
}

/// Swap the locale prefix of a same-site path. Anything that is not a local
/// absolute path falls back to the locale's home page.
fn localized_target(redirect: Option<&str>, locale: Locale) -> String {
    let home = format!("/{}", locale.code());
    let Some(target) = redirect.filter(|t| {
        t.starts_with('/')
            && !t.starts_with("//")
            && !t.starts_with("/\\")
            && !t.chars().any(|c| c.is_control() || c.is_whitespace())
    }) else {
        return home;
    };
    let split = target.find(['?', '#']).unwrap_or(target.len());
    let (path, suffix) = target.split_at(split);
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.split_once('/') {
        Some((first, rest)) => (first, Some(rest)),
        None => (trimmed, None),
    };
    let path = if first.is_empty() {
        home
    } else if Locale::from_code(first).is_some() {
        match rest {
            Some(rest) if !rest.is_empty() => format!("{home}/{rest}"),
            _ => home,
        }
    } else {
        path.to_string()
    };
    format!("{path}{suffix}")
}

async fn press_room(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found(&state, cookie_locale(&headers), &uri);
    };
    let ctx = PageContext {
        locale,
        path: request_path(&uri),
    };
    let params = ListingParams::from_pairs(&pairs);

    let (releases, tags) = future::join(
        state
            .content
            .list_press_releases(&ReleaseQuery::with_locale(locale)),
        state.content.list_distinct_tags(locale),
    )
    .await;
    let releases = match releases {
        Ok(releases) => releases,
        Err(e) => return error_page(&state, &ctx, &e, RELEASES_FAILED),
    };
    let tags = tags
        .inspect_err(|e| warn!(error = %e, "tag vocabulary unavailable, rendering without tags"))
        .unwrap_or_default();

    let filtered = filter::apply(&releases, &params.filters);
    info!(
        locale = %locale,
        total = releases.len(),
        shown = filtered.len(),
        "rendered press room"
    );
    let view = PressRoomView {
        params: &params,
        releases: &filtered,
        total: releases.len(),
        tags: &tags,
    };
    page(&state, StatusCode::OK, views::press_room_page(&ctx, &view))
}

async fn release_detail(
    State(state): State<AppState>,
    Path((locale, slug)): Path<(String, String)>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found(&state, cookie_locale(&headers), &uri);
    };
    if !SLUG_RE.is_match(&slug) {
        return not_found(&state, locale, &uri);
    }
    let ctx = PageContext {
        locale,
        path: request_path(&uri),
    };

    let release = match state.content.press_release_by_slug(&slug, locale).await {
        Ok(release) => release,
        Err(e) if e.is_not_found() => {
            info!(slug = %slug, "press release not found");
            return not_found(&state, locale, &uri);
        }
        Err(e) => return error_page(&state, &ctx, &e, RELEASES_FAILED),
    };
    let related = related_releases(&state, &release, locale).await;
    info!(slug = %slug, related = related.len(), "rendered press release");
    page(
        &state,
        StatusCode::OK,
        views::release_page(&ctx, &release, &related),
    )
}

/// Related releases degrade to an empty list; the detail page still renders.
async fn related_releases(state: &AppState, release: &PressRelease, locale: Locale) -> Vec<PressRelease> {
    state
        .content
        .related_press_releases(
            &release.slug,
            &release.category,
            &release.tags,
            RELATED_LIMIT,
            locale,
        )
        .await
        .inspect_err(|e| warn!(error = %e, slug = %release.slug, "{}", RELATED_FAILED))
        .unwrap_or_default()
}

#[derive(Deserialize)]
struct KitParams {
    category: Option<String>,
}

async fn press_kit(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Query(params): Query<KitParams>,
    headers: HeaderMap,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_code(&locale) else {
        return not_found(&state, cookie_locale(&headers), &uri);
    };
    let ctx = PageContext {
        locale,
        path: request_path(&uri),
    };
    let category = params.category.as_deref().filter(|c| !c.is_empty());
    match state.content.list_press_kit_assets(category, locale).await {
        Ok(assets) => {
            info!(locale = %locale, count = assets.len(), "rendered press kit");
            page(&state, StatusCode::OK, views::press_kit_page(&ctx, &assets))
        }
        Err(e) => error_page(&state, &ctx, &e, PRESS_KIT_FAILED),
    }
}

async fn api_press_releases(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    let params = ListingParams::from_pairs(&pairs);
    let locale = request_locale(&pairs, &headers);

    // Structured facets narrow upstream; free text is matched locally because
    // the upstream search is word-based rather than substring-based.
    let mut query = ReleaseQuery::from(&params.filters);
    query.query = None;
    query.locale = Some(locale);

    let result = state
        .content
        .list_press_releases(&query)
        .await
        .map(|releases| filter::apply(&releases, &params.filters));
    api(&state, ApiResponse::from_result(result, RELEASES_FAILED))
}

async fn api_tags(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    let locale = request_locale(&pairs, &headers);
    let result = state.content.list_distinct_tags(locale).await;
    api(&state, ApiResponse::from_result(result, TAGS_FAILED))
}
