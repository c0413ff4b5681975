/// Server-rendered pages. Every view takes the request's [`PageContext`];
/// nothing here reads global state or performs I/O.
use chrono::{Datelike, Utc};
use press_common::locale::Locale;
use press_common::model::{group_by_kit_category, PressKitAsset, PressRelease, PressReleaseCategory};

use crate::markup::{escape, render_document};
use crate::params::{encode_component, ListingParams, ViewMode};

const PRESS_EMAIL: &str = "press@eightphases.com";
const PARTNERSHIP_EMAIL: &str = "partnerships@eightphases.com";
const MAX_CARD_TAGS: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub locale: Locale,
    /// Path of the current request; the language switcher returns here.
    pub path: &'a str,
}

impl PageContext<'_> {
    /// Escaped message text.
    fn t(&self, key: &str) -> String {
        escape(&self.locale.messages().t(key))
    }

    fn t_with(&self, key: &str, args: &[(&str, &dyn std::fmt::Display)]) -> String {
        escape(&self.locale.messages().t_with(key, args))
    }

    fn home(&self) -> String {
        format!("/{}", self.locale.code())
    }

    fn release_href(&self, slug: &str) -> String {
        format!("/{}/press/{}", self.locale.code(), encode_component(slug))
    }

    fn press_kit_href(&self) -> String {
        format!("/{}/press-kit", self.locale.code())
    }

    fn date(&self, date: &chrono::DateTime<Utc>) -> String {
        escape(&self.locale.format_date(date))
    }
}

pub fn layout(ctx: &PageContext<'_>, title: &str, body: &str) -> String {
    let brand = ctx.t("layout.brand");
    let switcher: Vec<String> = Locale::ALL
        .iter()
        .map(|locale| {
            let class = if *locale == ctx.locale {
                "font-semibold text-white"
            } else {
                "text-gray-400 hover:text-white"
            };
            format!(
                "<a href=\"/locale/{code}?redirect={}\" hreflang=\"{code}\" class=\"{class}\">{}</a>",
                encode_component(ctx.path),
                escape(locale.native_name()),
                code = locale.code(),
            )
        })
        .collect();
    format!(
        "<!doctype html><html lang=\"{lang}\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<meta name=\"description\" content=\"{description}\">\
<title>{title} | {brand}</title></head>\
<body class=\"bg-black text-white min-h-screen flex flex-col\">\
<header class=\"border-b border-gray-800\"><nav class=\"container mx-auto px-4 py-4 flex items-center justify-between\">\
<a href=\"{home}\" class=\"text-xl font-bold\">{brand}</a>\
<div class=\"flex items-center gap-6\">\
<a href=\"{home}\" class=\"text-gray-300 hover:text-white\">{press_room}</a>\
<a href=\"{kit}\" class=\"text-gray-300 hover:text-white\">{press_kit}</a>\
<div class=\"flex items-center gap-2\" aria-label=\"{language}\">{switcher}</div>\
</div></nav></header>\
<main class=\"flex-1\">{body}</main>\
<footer class=\"border-t border-gray-800 py-8 text-center text-sm text-gray-500\">{copyright}</footer>\
</body></html>",
        lang = ctx.locale.code(),
        description = ctx.t("layout.description"),
        title = escape(title),
        home = ctx.home(),
        kit = ctx.press_kit_href(),
        press_room = ctx.t("layout.pressRoom"),
        press_kit = ctx.t("layout.pressKit"),
        language = ctx.t("layout.language"),
        switcher = switcher.join(" "),
        copyright = ctx.t_with("footer.copyright", &[("year", &Utc::now().year())]),
    )
}

fn category_badge(category: &str) -> String {
    let class = match PressReleaseCategory::parse(category) {
        Some(PressReleaseCategory::Awards) => "bg-yellow-500/20 text-yellow-400 border-yellow-500/30",
        Some(PressReleaseCategory::HotelOpenings) => "bg-green-500/20 text-green-400 border-green-500/30",
        Some(PressReleaseCategory::Partnerships) => "bg-blue-500/20 text-blue-400 border-blue-500/30",
        Some(PressReleaseCategory::ExecutiveNews) => "bg-purple-500/20 text-purple-400 border-purple-500/30",
        Some(PressReleaseCategory::CompanyUpdates) => "bg-orange-500/20 text-orange-400 border-orange-500/30",
        Some(PressReleaseCategory::Events) => "bg-pink-500/20 text-pink-400 border-pink-500/30",
        Some(PressReleaseCategory::Sustainability) => {
            "bg-emerald-500/20 text-emerald-400 border-emerald-500/30"
        }
        None => "bg-gray-500/20 text-gray-400 border-gray-500/30",
    };
    format!(
        "<span class=\"category-badge px-3 py-1 text-xs rounded-full border {class}\">{}</span>",
        escape(category)
    )
}

fn tag_chip(tag: &str) -> String {
    format!(
        "<span class=\"tag px-2 py-1 text-xs rounded bg-gray-800 text-gray-300\">{}</span>",
        escape(tag)
    )
}

/// Listing state rendered by [`press_room_page`].
#[derive(Debug)]
pub struct PressRoomView<'a> {
    pub params: &'a ListingParams,
    /// Releases left after filtering.
    pub releases: &'a [PressRelease],
    /// Size of the unfiltered list.
    pub total: usize,
    pub tags: &'a [String],
}

pub fn press_room_page(ctx: &PageContext<'_>, view: &PressRoomView<'_>) -> String {
    let params = view.params;
    let filters = &params.filters;
    let base = ctx.home();
    let href = |p: ListingParams| format!("{base}{}", p.query_string());

    let search = format!(
        "<form method=\"get\" action=\"{base}\" role=\"search\" class=\"flex gap-2 mb-8\">\
<input type=\"search\" name=\"q\" value=\"{value}\" placeholder=\"{placeholder}\" class=\"flex-1 px-4 py-3 rounded bg-gray-900 border border-gray-800\">\
{hidden}<button type=\"submit\" class=\"px-6 py-3 rounded bg-primary\">{button}</button></form>",
        value = escape(filters.query_text().unwrap_or("")),
        placeholder = ctx.t("pressRoom.search.placeholder"),
        hidden = hidden_inputs(params, HiddenSkip::Query),
        button = ctx.t("pressRoom.search.button"),
    );

    let categories: String = PressReleaseCategory::ALL
        .iter()
        .map(|category| {
            let name = category.as_str();
            let active = filters.category_value() == Some(name);
            format!(
                "<li><a href=\"{}\" class=\"{}\"{}>{}</a></li>",
                escape(&href(params.with_filters(filters.toggle_category(name)))),
                if active { "text-primary font-semibold" } else { "text-gray-400 hover:text-white" },
                if active { " aria-current=\"true\"" } else { "" },
                escape(name),
            )
        })
        .collect();

    let tags: String = view
        .tags
        .iter()
        .map(|tag| {
            let active = filters.tags.contains(tag);
            format!(
                "<a href=\"{}\" class=\"px-2 py-1 text-xs rounded border {}\"{}>{}</a>",
                escape(&href(params.with_filters(filters.toggle_tag(tag)))),
                if active { "border-primary text-primary" } else { "border-gray-700 text-gray-400" },
                if active { " aria-pressed=\"true\"" } else { "" },
                escape(tag),
            )
        })
        .collect();

    let clear = if filters.has_facets() {
        format!(
            "<a href=\"{}\" class=\"block mt-6 text-sm text-primary hover:underline\">{}</a>",
            escape(&href(params.with_filters(filters.clear_facets()))),
            ctx.t("pressRoom.filters.clearAll"),
        )
    } else {
        String::new()
    };

    let date_value = |d: Option<chrono::NaiveDate>| d.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
    let sidebar = format!(
        "<aside class=\"filter-sidebar w-full lg:w-64 shrink-0\" aria-label=\"{filters_title}\">\
<h2 class=\"text-lg font-semibold mb-4\">{filters_title}</h2>\
<h3 class=\"text-sm uppercase text-gray-500 mb-2\">{categories_title}</h3><ul class=\"space-y-1 mb-6\">{categories}</ul>\
<h3 class=\"text-sm uppercase text-gray-500 mb-2\">{tags_title}</h3><div class=\"flex flex-wrap gap-2 mb-6\">{tags}</div>\
<h3 class=\"text-sm uppercase text-gray-500 mb-2\">{date_title}</h3>\
<form method=\"get\" action=\"{base}\" class=\"space-y-2\">{hidden}\
<label class=\"block text-xs text-gray-400\">{from_label}<input type=\"date\" name=\"from\" value=\"{from}\" class=\"w-full bg-gray-900 rounded px-2 py-1\"></label>\
<label class=\"block text-xs text-gray-400\">{to_label}<input type=\"date\" name=\"to\" value=\"{to}\" class=\"w-full bg-gray-900 rounded px-2 py-1\"></label>\
<button type=\"submit\" class=\"w-full py-2 rounded bg-gray-800\">{apply}</button></form>{clear}</aside>",
        filters_title = ctx.t("pressRoom.filters.title"),
        categories_title = ctx.t("pressRoom.filters.categories"),
        tags_title = ctx.t("pressRoom.filters.tags"),
        date_title = ctx.t("pressRoom.filters.dateRange"),
        hidden = hidden_inputs(params, HiddenSkip::Dates),
        from_label = ctx.t("pressRoom.filters.from"),
        to_label = ctx.t("pressRoom.filters.to"),
        from = date_value(filters.date_from),
        to = date_value(filters.date_to),
        apply = ctx.t("pressRoom.filters.apply"),
    );

    let count = if view.releases.len() == view.total {
        ctx.t_with("pressRoom.results.showing", &[("count", &view.total)])
    } else {
        ctx.t_with(
            "pressRoom.results.filtered",
            &[("filtered", &view.releases.len()), ("total", &view.total)],
        )
    };
    let view_toggle = [(ViewMode::Grid, "pressRoom.view.grid"), (ViewMode::List, "pressRoom.view.list")]
        .iter()
        .map(|(mode, key)| {
            format!(
                "<a href=\"{}\" class=\"px-3 py-1 rounded {}\">{}</a>",
                escape(&href(params.with_view(*mode))),
                if params.view == *mode { "bg-gray-800 text-white" } else { "text-gray-400" },
                ctx.t(key),
            )
        })
        .collect::<String>();

    let results = if view.releases.is_empty() {
        no_results(ctx, params, &href)
    } else {
        let container = match params.view {
            ViewMode::Grid => "grid gap-6 md:grid-cols-2 xl:grid-cols-3",
            ViewMode::List => "flex flex-col gap-4",
        };
        let cards: String = view
            .releases
            .iter()
            .map(|release| release_card(ctx, release, params.view))
            .collect();
        format!("<div class=\"results {container}\">{cards}</div>")
    };

    let media = format!(
        "<section class=\"mt-16 p-8 rounded-lg bg-gray-900 text-center\">\
<h2 class=\"text-2xl font-bold mb-2\">{}</h2><p class=\"text-gray-400 mb-6\">{}</p>\
<a href=\"{}\" class=\"inline-block px-6 py-3 rounded bg-primary\">{}</a></section>",
        ctx.t("home.mediaResources.title"),
        ctx.t("home.mediaResources.description"),
        ctx.press_kit_href(),
        ctx.t("home.mediaResources.downloadButton"),
    );

    let body = format!(
        "<div class=\"container mx-auto px-4 py-12\">\
<h1 class=\"text-4xl font-bold mb-2\">{title}</h1><p class=\"text-gray-400 mb-8\">{subtitle}</p>\
{search}<div class=\"flex flex-col lg:flex-row gap-8\">{sidebar}\
<section class=\"flex-1\"><div class=\"flex items-center justify-between mb-6\">\
<p class=\"results-count text-sm text-gray-400\">{count}</p><div class=\"flex gap-1\">{view_toggle}</div></div>\
{results}</section></div>{media}</div>",
        title = ctx.t("home.title"),
        subtitle = ctx.t("home.subtitle"),
    );
    layout(ctx, &ctx.locale.messages().t("home.title"), &body)
}

fn no_results(ctx: &PageContext<'_>, params: &ListingParams, href: &dyn Fn(ListingParams) -> String) -> String {
    let detail = if params.filters.is_empty() {
        format!("<p class=\"text-gray-400\">{}</p>", ctx.t("pressRoom.noResults.configError"))
    } else {
        format!(
            "<p class=\"text-gray-400 mb-4\">{}</p><a href=\"{}\" class=\"text-primary hover:underline\">{}</a>",
            ctx.t("pressRoom.noResults.searchAdjust"),
            escape(&href(params.with_filters(Default::default()))),
            ctx.t("pressRoom.filters.clearAll"),
        )
    };
    format!(
        "<div class=\"no-results text-center py-16 rounded-lg border border-gray-800\">\
<h2 class=\"text-xl font-semibold mb-2\">{}</h2>{detail}</div>",
        ctx.t("pressRoom.noResults.title"),
    )
}

#[derive(Clone, Copy, PartialEq)]
enum HiddenSkip {
    Query,
    Dates,
}

/// Carry the rest of the listing state through a GET form.
fn hidden_inputs(params: &ListingParams, skip: HiddenSkip) -> String {
    let filters = &params.filters;
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if skip != HiddenSkip::Query {
        if let Some(q) = filters.query_text() {
            pairs.push(("q", q.to_string()));
        }
    }
    if let Some(category) = filters.category_value() {
        pairs.push(("category", category.to_string()));
    }
    pairs.extend(filters.tags.iter().map(|t| ("tag", t.clone())));
    if skip != HiddenSkip::Dates {
        if let Some(from) = filters.date_from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = filters.date_to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
    }
    if params.view == ViewMode::List {
        pairs.push(("view", "list".to_string()));
    }
    pairs
        .iter()
        .map(|(name, value)| format!("<input type=\"hidden\" name=\"{name}\" value=\"{}\">", escape(value)))
        .collect()
}

fn card_image(ctx: &PageContext<'_>, release: &PressRelease, class: &str) -> String {
    match &release.cover_image {
        Some(image) => format!(
            "<img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\" loading=\"lazy\" class=\"{class} object-cover\">",
            escape(&image.url),
            escape(image.title.as_deref().unwrap_or(&release.title)),
            image.width_or(800),
            image.height_or(450),
        ),
        None => format!(
            "<div class=\"image-placeholder {class} flex items-center justify-center bg-gray-900 text-gray-600\">{}</div>",
            ctx.t("layout.brand")
        ),
    }
}

fn card_tags(ctx: &PageContext<'_>, tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let mut out: String = tags.iter().take(MAX_CARD_TAGS).map(|t| tag_chip(t)).collect();
    if tags.len() > MAX_CARD_TAGS {
        out.push_str(&format!(
            "<span class=\"tag-more text-xs text-gray-500\">{}</span>",
            ctx.t_with("pressRoom.tags.more", &[("count", &(tags.len() - MAX_CARD_TAGS))])
        ));
    }
    format!("<div class=\"flex flex-wrap gap-2 mt-4\">{out}</div>")
}

fn release_card(ctx: &PageContext<'_>, release: &PressRelease, mode: ViewMode) -> String {
    let (article_class, image_class) = match mode {
        ViewMode::Grid => ("flex flex-col", "w-full aspect-video"),
        ViewMode::List => ("flex flex-col md:flex-row", "w-full md:w-72 aspect-video"),
    };
    let href = ctx.release_href(&release.slug);
    format!(
        "<article class=\"press-card rounded-lg overflow-hidden border border-gray-800 {article_class}\">\
<a href=\"{href}\">{image}</a><div class=\"p-6 flex-1\">\
<div class=\"flex items-center gap-3 mb-3\"><time datetime=\"{iso}\" class=\"text-sm text-gray-500\">{date}</time>{badge}</div>\
<h3 class=\"text-xl font-semibold mb-2\"><a href=\"{href}\" class=\"hover:text-primary\">{title}</a></h3>\
<p class=\"text-gray-400 line-clamp-3\">{summary}</p>{tags}\
<a href=\"{href}\" class=\"inline-block mt-4 text-primary hover:underline\">{read_more}</a></div></article>",
        image = card_image(ctx, release, image_class),
        iso = release.publish_date.format("%Y-%m-%d"),
        date = ctx.date(&release.publish_date),
        badge = category_badge(&release.category),
        title = escape(&release.title),
        summary = escape(&release.summary),
        tags = card_tags(ctx, &release.tags),
        read_more = ctx.t("pressRoom.readMore"),
    )
}

pub fn release_page(ctx: &PageContext<'_>, release: &PressRelease, related: &[PressRelease]) -> String {
    let cover = release
        .cover_image
        .as_ref()
        .map(|image| {
            format!(
                "<figure class=\"mb-10\"><img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\" class=\"rounded-lg w-full h-auto\"></figure>",
                escape(&image.url),
                escape(image.title.as_deref().unwrap_or(&release.title)),
                image.width_or(1200),
                image.height_or(630),
            )
        })
        .unwrap_or_default();

    let tags = if release.tags.is_empty() {
        String::new()
    } else {
        let chips: String = release.tags.iter().map(|t| tag_chip(t)).collect();
        format!(
            "<section class=\"mt-12 pt-8 border-t border-gray-800\"><h2 class=\"text-sm uppercase text-gray-500 mb-3\">{}</h2>\
<div class=\"flex flex-wrap gap-2\">{chips}</div></section>",
            ctx.t("press.tags")
        )
    };

    let related = if related.is_empty() {
        String::new()
    } else {
        let cards: String = related
            .iter()
            .map(|r| release_card(ctx, r, ViewMode::Grid))
            .collect();
        format!(
            "<section class=\"related mt-16\"><h2 class=\"text-2xl font-bold mb-6\">{}</h2>\
<div class=\"grid gap-6 md:grid-cols-3\">{cards}</div></section>",
            ctx.t("press.related")
        )
    };

    let body = format!(
        "<article class=\"container mx-auto px-4 py-12 max-w-4xl\">\
<a href=\"{home}\" class=\"text-sm text-gray-400 hover:text-white\">&larr; {back}</a>\
<div class=\"flex items-center gap-3 mt-8 mb-4\"><time datetime=\"{iso}\" class=\"date-badge px-3 py-1 text-xs rounded-full bg-gray-800\">{date}</time>{badge}</div>\
<h1 class=\"text-4xl font-bold mb-6\">{title}</h1><p class=\"text-xl text-gray-400 mb-10\">{summary}</p>\
{cover}<div class=\"prose prose-invert max-w-none\">{content}</div>{tags}</article>\
<div class=\"container mx-auto px-4 pb-12 max-w-6xl\">{related}</div>",
        home = ctx.home(),
        back = ctx.t("press.backToPress"),
        iso = release.publish_date.format("%Y-%m-%d"),
        date = ctx.date(&release.publish_date),
        badge = category_badge(&release.category),
        title = escape(&release.title),
        summary = escape(&release.summary),
        content = render_document(&release.content),
    );
    layout(ctx, &release.title, &body)
}

pub fn press_kit_page(ctx: &PageContext<'_>, assets: &[PressKitAsset]) -> String {
    let groups = group_by_kit_category(assets);
    let listing = if groups.is_empty() {
        format!(
            "<div class=\"no-results text-center py-16 rounded-lg border border-gray-800\">\
<h2 class=\"text-xl font-semibold mb-2\">{}</h2><p class=\"text-gray-400\">{}</p></div>",
            ctx.t("pressKit.noAssets.title"),
            ctx.t("pressKit.noAssets.description"),
        )
    } else {
        groups
            .iter()
            .map(|(category, members)| {
                let key = format!("pressKit.assetCategories.{}", category.as_str());
                let items: String = members.iter().map(|asset| kit_asset_card(ctx, asset)).collect();
                format!(
                    "<section class=\"kit-group mb-12\"><h2 class=\"text-2xl font-bold mb-1\">{}</h2>\
<p class=\"text-gray-400 mb-6\">{}</p><div class=\"grid gap-4 md:grid-cols-2\">{items}</div></section>",
                    ctx.t(&format!("{key}.title")),
                    ctx.t(&format!("{key}.description")),
                )
            })
            .collect()
    };

    let fact = |label: &str, value: String| {
        format!(
            "<div><dt class=\"text-sm text-gray-500\">{}</dt><dd class=\"text-lg\">{value}</dd></div>",
            ctx.t(label)
        )
    };
    let about = format!(
        "<section class=\"mt-16 p-8 rounded-lg bg-gray-900\"><h2 class=\"text-2xl font-bold mb-4\">{}</h2>\
<p class=\"text-gray-400 mb-6\">{}</p><dl class=\"grid gap-6 md:grid-cols-3\">{}{}{}</dl></section>",
        ctx.t("pressKit.aboutTitle"),
        ctx.t("pressKit.aboutDescription"),
        fact("pressKit.founded.label", ctx.t("pressKit.founded.value")),
        fact(
            "pressKit.properties.label",
            format!("{} {}", ctx.t("pressKit.properties.value"), ctx.t("pressKit.coverage")),
        ),
        fact("pressKit.headquarters.label", ctx.t("pressKit.headquarters.value")),
    );

    let contact = format!(
        "<section class=\"mt-12\"><h2 class=\"text-2xl font-bold mb-4\">{}</h2><div class=\"grid gap-6 md:grid-cols-2\">\
<div><h3 class=\"font-semibold\">{}</h3><a href=\"mailto:{PRESS_EMAIL}\" class=\"text-gray-400 text-sm\">{PRESS_EMAIL}</a></div>\
<div><h3 class=\"font-semibold\">{}</h3><a href=\"mailto:{PARTNERSHIP_EMAIL}\" class=\"text-gray-400 text-sm\">{PARTNERSHIP_EMAIL}</a></div>\
</div></section>",
        ctx.t("pressKit.mediaContact"),
        ctx.t("pressKit.pressInquiries"),
        ctx.t("pressKit.partnershipInquiries"),
    );

    let body = format!(
        "<div class=\"container mx-auto px-4 py-12\">\
<a href=\"{home}\" class=\"text-sm text-gray-400 hover:text-white\">&larr; {back}</a>\
<h1 class=\"text-4xl font-bold mt-8 mb-2\">{title}</h1><p class=\"text-gray-400 mb-12\">{subtitle}</p>\
{listing}{about}{contact}</div>",
        home = ctx.home(),
        back = ctx.t("pressKit.backToPress"),
        title = ctx.t("pressKit.title"),
        subtitle = ctx.t("pressKit.subtitle"),
    );
    layout(ctx, &ctx.locale.messages().t("pressKit.title"), &body)
}

fn kit_asset_card(ctx: &PageContext<'_>, asset: &PressKitAsset) -> String {
    let description = asset
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format!("<p class=\"text-sm text-gray-400 mb-3\">{}</p>", escape(d)))
        .unwrap_or_default();
    let updated = asset
        .last_updated
        .as_ref()
        .map(|d| format!("<span>{} {}</span>", ctx.t("pressKit.updated"), ctx.date(d)))
        .unwrap_or_default();
    format!(
        "<div class=\"kit-asset p-6 rounded-lg border border-gray-800\">\
<h3 class=\"text-lg font-semibold mb-1\">{title}</h3>{description}\
<div class=\"flex items-center gap-4 text-xs text-gray-500 mb-4\"><span class=\"size\">{size}</span>{updated}</div>\
<a href=\"{url}\" download=\"{name}\" class=\"inline-block px-4 py-2 rounded bg-primary text-sm\">{download}</a></div>",
        title = escape(&asset.title),
        size = escape(&asset.size_label()),
        url = escape(&asset.file.url),
        name = escape(asset.download_name()),
        download = ctx.t("pressKit.download"),
    )
}

pub fn error_panel(ctx: &PageContext<'_>, message: &str) -> String {
    format!(
        "<div class=\"error-panel container mx-auto px-4 py-16\" role=\"alert\">\
<div class=\"max-w-2xl mx-auto p-8 rounded-lg border border-red-500/30 bg-red-500/10\">\
<h1 class=\"text-2xl font-bold text-red-400 mb-4\">{}</h1><p class=\"error-message mb-4\">{}</p>\
<p class=\"text-sm text-gray-400\">{}</p></div></div>",
        ctx.t("error.title"),
        escape(message),
        ctx.t("error.hint"),
    )
}

pub fn error_page(ctx: &PageContext<'_>, message: &str) -> String {
    layout(ctx, &ctx.locale.messages().t("error.title"), &error_panel(ctx, message))
}

pub fn not_found_page(ctx: &PageContext<'_>) -> String {
    let body = format!(
        "<div class=\"container mx-auto px-4 py-24 text-center\"><h1 class=\"text-4xl font-bold mb-4\">{}</h1>\
<p class=\"text-gray-400 mb-8\">{}</p><a href=\"{}\" class=\"text-primary hover:underline\">{}</a></div>",
        ctx.t("notFound.title"),
        ctx.t("notFound.description"),
        ctx.home(),
        ctx.t("notFound.back"),
    );
    layout(ctx, &ctx.locale.messages().t("notFound.title"), &body)
}
