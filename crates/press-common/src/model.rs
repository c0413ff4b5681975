use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::rich_text::Document;

/// A published news entry. Owned by the CMS; never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressRelease {
    /// CMS entry id.
    pub id: String,
    pub title: String,
    /// Unique, URL-safe routing key.
    pub slug: String,
    pub publish_date: DateTime<Utc>,
    pub summary: String,
    /// Upstream category string, normally one of [`PressReleaseCategory`].
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image: Option<ImageAsset>,
    #[serde(default)]
    pub content: Document,
}

/// A remote image with its intrinsic size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ImageAsset {
    pub fn width_or(&self, default: u32) -> u32 {
        self.width.unwrap_or(default)
    }

    pub fn height_or(&self, default: u32) -> u32 {
        self.height.unwrap_or(default)
    }
}

/// A downloadable brand or media file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressKitAsset {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub file: FileAsset,
    /// Editor-supplied size label such as "2.4 MB".
    pub file_size: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl PressKitAsset {
    /// Editor label first, then the byte count reported by the asset store.
    pub fn size_label(&self) -> String {
        if let Some(label) = self.file_size.as_deref().filter(|l| !l.trim().is_empty()) {
            return label.to_string();
        }
        match self.file.size_bytes {
            Some(bytes) => format_bytes(bytes),
            None => "N/A".to_string(),
        }
    }

    /// Name offered to the browser for the download.
    pub fn download_name(&self) -> &str {
        self.file
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAsset {
    pub url: String,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size_bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressReleaseCategory {
    Awards,
    HotelOpenings,
    Partnerships,
    ExecutiveNews,
    CompanyUpdates,
    Events,
    Sustainability,
}

impl PressReleaseCategory {
    pub const ALL: [PressReleaseCategory; 7] = [
        PressReleaseCategory::Awards,
        PressReleaseCategory::HotelOpenings,
        PressReleaseCategory::Partnerships,
        PressReleaseCategory::ExecutiveNews,
        PressReleaseCategory::CompanyUpdates,
        PressReleaseCategory::Events,
        PressReleaseCategory::Sustainability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PressReleaseCategory::Awards => "Awards",
            PressReleaseCategory::HotelOpenings => "Hotel Openings",
            PressReleaseCategory::Partnerships => "Partnerships",
            PressReleaseCategory::ExecutiveNews => "Executive News",
            PressReleaseCategory::CompanyUpdates => "Company Updates",
            PressReleaseCategory::Events => "Events",
            PressReleaseCategory::Sustainability => "Sustainability",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressKitCategory {
    Logos,
    BrandGuidelines,
    FactSheets,
    Images,
    Documents,
}

impl PressKitCategory {
    pub const ALL: [PressKitCategory; 5] = [
        PressKitCategory::Logos,
        PressKitCategory::BrandGuidelines,
        PressKitCategory::FactSheets,
        PressKitCategory::Images,
        PressKitCategory::Documents,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PressKitCategory::Logos => "Logos",
            PressKitCategory::BrandGuidelines => "Brand Guidelines",
            PressKitCategory::FactSheets => "Fact Sheets",
            PressKitCategory::Images => "Images",
            PressKitCategory::Documents => "Documents",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

/// Group assets by category in [`PressKitCategory::ALL`] order, keeping the
/// upstream order inside each group. Empty groups and unknown categories are
/// left out.
pub fn group_by_kit_category(
    assets: &[PressKitAsset],
) -> Vec<(PressKitCategory, Vec<&PressKitAsset>)> {
    PressKitCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let members: Vec<&PressKitAsset> = assets
                .iter()
                .filter(|a| a.category == category.as_str())
                .collect();
            (!members.is_empty()).then_some((category, members))
        })
        .collect()
}

/// Parse a CMS date or date-time. Values without an offset are taken as UTC.
pub fn parse_cms_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Upstream asset URLs are protocol-relative.
pub fn absolute_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn asset(category: &str, title: &str) -> PressKitAsset {
        PressKitAsset {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: None,
            category: category.to_string(),
            file: FileAsset {
                url: "https://assets.example.com/file.pdf".to_string(),
                title: None,
                file_name: Some("file.pdf".to_string()),
                content_type: Some("application/pdf".to_string()),
                size_bytes: None,
            },
            file_size: None,
            last_updated: None,
        }
    }

    #[test]
    fn parses_date_only_as_utc_midnight() {
        let dt = parse_cms_date("2024-03-15").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn parses_contentful_minute_precision() {
        let dt = parse_cms_date("2024-03-15T09:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_cms_date("2024-03-15T10:00:00.000+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_cms_date("last tuesday").is_none());
        assert!(parse_cms_date("").is_none());
    }

    #[test]
    fn category_round_trips_display_name() {
        for category in PressReleaseCategory::ALL {
            assert_eq!(PressReleaseCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(PressReleaseCategory::parse("awards"), None);
    }

    #[test]
    fn size_label_prefers_editor_label() {
        let mut a = asset("Logos", "Primary logo");
        a.file.size_bytes = Some(2_516_582);
        assert_eq!(a.size_label(), "2.4 MB");
        a.file_size = Some("2.5 MB (zip)".to_string());
        assert_eq!(a.size_label(), "2.5 MB (zip)");
        a.file_size = None;
        a.file.size_bytes = None;
        assert_eq!(a.size_label(), "N/A");
    }

    #[test]
    fn small_files_are_reported_in_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn groups_follow_category_order_and_skip_unknown() {
        let assets = vec![
            asset("Documents", "Annual report"),
            asset("Logos", "Primary logo"),
            asset("Mascots", "Owl"),
            asset("Logos", "Monogram"),
        ];
        let groups = group_by_kit_category(&assets);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, PressKitCategory::Logos);
        let titles: Vec<&str> = groups[0].1.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Primary logo", "Monogram"]);
        assert_eq!(groups[1].0, PressKitCategory::Documents);
    }

    #[test]
    fn protocol_relative_urls_become_https() {
        assert_eq!(
            absolute_url("//images.ctfassets.net/abc/cover.jpg"),
            "https://images.ctfassets.net/abc/cover.jpg"
        );
        assert_eq!(absolute_url("https://x.test/a.png"), "https://x.test/a.png");
    }

    #[test]
    fn download_name_falls_back_to_entry_title() {
        let mut a = asset("Logos", "Primary logo");
        assert_eq!(a.download_name(), "Primary logo");
        a.file.title = Some("eight-phases-logo".to_string());
        assert_eq!(a.download_name(), "eight-phases-logo");
    }
}
