/// Contentful Content Delivery API response shapes and link resolution.
///
/// Entry fields are all optional on the wire (a locale may be missing a value),
/// so conversion into the domain model happens here and incomplete entries are
/// skipped with a warning instead of failing the whole collection.
use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::model::{
    absolute_url, parse_cms_date, FileAsset, ImageAsset, PressKitAsset, PressRelease,
};
use crate::rich_text::Document;

#[derive(Debug, Deserialize)]
pub(crate) struct EntryCollection<F> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<Entry<F>>,
    #[serde(default)]
    pub includes: Includes,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Entry<F> {
    /// Absent when the query projects only `fields.*`.
    #[serde(default)]
    pub sys: Sys,
    pub fields: F,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sys {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Includes {
    #[serde(rename = "Asset", default)]
    pub assets: Vec<Entry<AssetFields>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Link {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LinkSys {
    pub id: String,
    pub link_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssetFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<AssetFile>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssetFile {
    pub url: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    #[serde(default)]
    pub details: AssetDetails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssetDetails {
    pub size: Option<u64>,
    pub image: Option<ImageDetails>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImageDetails {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ReleaseFields {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub publish_date: Option<String>,
    pub summary: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub cover_image: Option<Link>,
    pub content: Option<RawNode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct KitFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub file: Option<Link>,
    pub file_size: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TagFields {
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNode {
    pub node_type: String,
    #[serde(default)]
    pub content: Vec<RawNode>,
    pub value: Option<String>,
    #[serde(default)]
    pub marks: Vec<RawMark>,
    #[serde(default)]
    pub data: RawNodeData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMark {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawNodeData {
    pub uri: Option<String>,
    pub target: Option<Link>,
}

/// Upstream error body: `{"sys":{"id":"NotFound"},"message":"..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub message: Option<String>,
    pub sys: Option<Sys>,
}

/// Lookup of included assets by id.
pub(crate) struct AssetIndex<'a> {
    by_id: HashMap<&'a str, &'a AssetFields>,
}

impl<'a> AssetIndex<'a> {
    pub fn new(includes: &'a Includes) -> Self {
        let by_id = includes
            .assets
            .iter()
            .map(|a| (a.sys.id.as_str(), &a.fields))
            .collect();
        Self { by_id }
    }

    fn resolve(&self, link: &Link) -> Option<&'a AssetFields> {
        if let Some(kind) = link.sys.link_type.as_deref() {
            if kind != "Asset" {
                return None;
            }
        }
        self.by_id.get(link.sys.id.as_str()).copied()
    }

    /// Resolve a link to an image asset; non-image files resolve to `None`.
    pub fn image(&self, link: &Link) -> Option<ImageAsset> {
        let fields = self.resolve(link)?;
        let file = fields.file.as_ref()?;
        let is_image = file
            .content_type
            .as_deref()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(file.details.image.is_some());
        if !is_image {
            return None;
        }
        let dims = file.details.image.as_ref();
        Some(ImageAsset {
            url: absolute_url(&file.url),
            title: fields.title.clone(),
            description: fields.description.clone(),
            width: dims.and_then(|d| d.width),
            height: dims.and_then(|d| d.height),
        })
    }

    pub fn file(&self, link: &Link) -> Option<FileAsset> {
        let fields = self.resolve(link)?;
        let file = fields.file.as_ref()?;
        Some(FileAsset {
            url: absolute_url(&file.url),
            title: fields.title.clone(),
            file_name: file.file_name.clone(),
            content_type: file.content_type.clone(),
            size_bytes: file.details.size,
        })
    }
}

impl EntryCollection<ReleaseFields> {
    pub fn into_press_releases(self) -> Vec<PressRelease> {
        let index = AssetIndex::new(&self.includes);
        self.items
            .iter()
            .filter_map(|entry| release_from_entry(entry, &index))
            .collect()
    }
}

impl EntryCollection<KitFields> {
    pub fn into_press_kit_assets(self) -> Vec<PressKitAsset> {
        let index = AssetIndex::new(&self.includes);
        self.items
            .iter()
            .filter_map(|entry| kit_asset_from_entry(entry, &index))
            .collect()
    }
}

fn release_from_entry(entry: &Entry<ReleaseFields>, index: &AssetIndex<'_>) -> Option<PressRelease> {
    let f = &entry.fields;
    let id = entry.sys.id.as_str();

    let Some(slug) = f.slug.clone().filter(|s| !s.is_empty()) else {
        warn!(entry_id = id, "press release without slug, skipping");
        return None;
    };
    let Some(publish_date) = f.publish_date.as_deref().and_then(parse_cms_date) else {
        warn!(entry_id = id, slug = %slug, "press release without a valid publishDate, skipping");
        return None;
    };

    Some(PressRelease {
        id: id.to_string(),
        title: f.title.clone().unwrap_or_default(),
        slug,
        publish_date,
        summary: f.summary.clone().unwrap_or_default(),
        category: f.category.clone().unwrap_or_default(),
        tags: f.tags.clone().unwrap_or_default(),
        cover_image: f.cover_image.as_ref().and_then(|l| index.image(l)),
        content: f
            .content
            .as_ref()
            .map(|root| Document::from_wire(root, index))
            .unwrap_or_default(),
    })
}

fn kit_asset_from_entry(entry: &Entry<KitFields>, index: &AssetIndex<'_>) -> Option<PressKitAsset> {
    let f = &entry.fields;
    let id = entry.sys.id.as_str();

    let Some(file) = f.file.as_ref().and_then(|l| index.file(l)) else {
        warn!(entry_id = id, "press kit asset without a resolvable file, skipping");
        return None;
    };

    Some(PressKitAsset {
        id: id.to_string(),
        title: f.title.clone().unwrap_or_default(),
        description: f.description.clone().filter(|d| !d.is_empty()),
        category: f.category.clone().unwrap_or_default(),
        file,
        file_size: f.file_size.clone(),
        last_updated: f.last_updated.as_deref().and_then(parse_cms_date),
    })
}
