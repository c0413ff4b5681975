/// Rich-text document tree for press release bodies.
///
/// Upstream documents are generic `nodeType`-tagged JSON trees whose embedded
/// assets are links. [`Document::from_wire`] turns them into this closed set of
/// nodes with assets already resolved; node types outside the set are dropped.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::ImageAsset;
use crate::wire::{AssetIndex, RawNode};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Paragraph { children: Vec<Node> },
    Heading { level: u8, children: Vec<Node> },
    UnorderedList { items: Vec<Node> },
    OrderedList { items: Vec<Node> },
    ListItem { children: Vec<Node> },
    Quote { children: Vec<Node> },
    Rule,
    Hyperlink { uri: String, children: Vec<Node> },
    Text { value: String, marks: Vec<Mark> },
    Image(ImageAsset),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Code,
}

impl Mark {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "bold" => Some(Mark::Bold),
            "italic" => Some(Mark::Italic),
            "underline" => Some(Mark::Underline),
            "code" => Some(Mark::Code),
            _ => None,
        }
    }
}

impl Document {
    pub(crate) fn from_wire(root: &RawNode, assets: &AssetIndex<'_>) -> Self {
        let nodes = if root.node_type == "document" {
            convert_children(&root.content, assets)
        } else {
            convert(root, assets).into_iter().collect()
        };
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated text content, blocks separated by a blank line.
    pub fn plain_text(&self) -> String {
        let blocks: Vec<String> = self
            .nodes
            .iter()
            .map(Node::plain_text)
            .filter(|t| !t.is_empty())
            .collect();
        blocks.join("\n\n")
    }
}

impl Node {
    pub fn plain_text(&self) -> String {
        match self {
            Node::Text { value, .. } => value.clone(),
            Node::Rule | Node::Image(_) => String::new(),
            Node::UnorderedList { items } | Node::OrderedList { items } => items
                .iter()
                .map(Node::plain_text)
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::ListItem { children }
            | Node::Quote { children }
            | Node::Hyperlink { children, .. } => {
                children.iter().map(Node::plain_text).collect()
            }
        }
    }
}

fn convert_children(children: &[RawNode], assets: &AssetIndex<'_>) -> Vec<Node> {
    children.iter().filter_map(|c| convert(c, assets)).collect()
}

fn convert(raw: &RawNode, assets: &AssetIndex<'_>) -> Option<Node> {
    let children = || convert_children(&raw.content, assets);
    let node = match raw.node_type.as_str() {
        "paragraph" => Node::Paragraph { children: children() },
        "heading-1" | "heading-2" | "heading-3" | "heading-4" | "heading-5" | "heading-6" => {
            let level = raw.node_type[raw.node_type.len() - 1..].parse().unwrap_or(2);
            Node::Heading { level, children: children() }
        }
        "unordered-list" => Node::UnorderedList { items: children() },
        "ordered-list" => Node::OrderedList { items: children() },
        "list-item" => Node::ListItem { children: children() },
        "blockquote" => Node::Quote { children: children() },
        "hr" => Node::Rule,
        "hyperlink" => Node::Hyperlink {
            uri: raw.data.uri.clone().unwrap_or_default(),
            children: children(),
        },
        "text" => Node::Text {
            value: raw.value.clone().unwrap_or_default(),
            marks: raw.marks.iter().filter_map(|m| Mark::parse(&m.kind)).collect(),
        },
        "embedded-asset-block" => {
            let image = raw.data.target.as_ref().and_then(|link| assets.image(link));
            if image.is_none() {
                debug!("embedded asset is missing or not an image, skipping");
            }
            Node::Image(image?)
        }
        other => {
            debug!(node_type = other, "unsupported rich text node, skipping");
            return None;
        }
    };
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Includes;

    fn doc(json: serde_json::Value, includes: serde_json::Value) -> Document {
        let raw: RawNode = serde_json::from_value(json).unwrap();
        let includes: Includes = serde_json::from_value(includes).unwrap();
        let index = AssetIndex::new(&includes);
        Document::from_wire(&raw, &index)
    }

    fn text(value: &str) -> serde_json::Value {
        serde_json::json!({"nodeType": "text", "value": value, "marks": [], "data": {}})
    }

    #[test]
    fn converts_blocks_and_marks() {
        let d = doc(
            serde_json::json!({
                "nodeType": "document",
                "data": {},
                "content": [
                    {"nodeType": "heading-2", "data": {}, "content": [text("Opening")]},
                    {"nodeType": "paragraph", "data": {}, "content": [
                        {"nodeType": "text", "value": "Now open", "marks": [{"type": "bold"}, {"type": "superscript"}], "data": {}},
                        {"nodeType": "hyperlink", "data": {"uri": "https://eightphases.com"}, "content": [text("here")]}
                    ]},
                    {"nodeType": "unordered-list", "data": {}, "content": [
                        {"nodeType": "list-item", "data": {}, "content": [
                            {"nodeType": "paragraph", "data": {}, "content": [text("Spa")]}
                        ]}
                    ]},
                    {"nodeType": "table", "data": {}, "content": []}
                ]
            }),
            serde_json::json!({}),
        );
        assert_eq!(d.nodes.len(), 3);
        assert_eq!(
            d.nodes[0],
            Node::Heading {
                level: 2,
                children: vec![Node::Text { value: "Opening".to_string(), marks: vec![] }]
            }
        );
        let Node::Paragraph { children } = &d.nodes[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            children[0],
            Node::Text { value: "Now open".to_string(), marks: vec![Mark::Bold] }
        );
        assert!(matches!(&children[1], Node::Hyperlink { uri, .. } if uri == "https://eightphases.com"));
        assert_eq!(d.plain_text(), "Opening\n\nNow openhere\n\nSpa");
    }

    #[test]
    fn resolves_embedded_images_and_drops_other_assets() {
        let includes = serde_json::json!({
            "Asset": [
                {"sys": {"id": "img1"}, "fields": {"title": "Lobby", "file": {
                    "url": "//images.ctfassets.net/s/lobby.jpg",
                    "contentType": "image/jpeg",
                    "details": {"size": 1000, "image": {"width": 1200, "height": 800}}
                }}},
                {"sys": {"id": "pdf1"}, "fields": {"title": "Fact sheet", "file": {
                    "url": "//assets.ctfassets.net/s/facts.pdf",
                    "contentType": "application/pdf",
                    "details": {"size": 5000}
                }}}
            ]
        });
        let link = |id: &str| {
            serde_json::json!({
                "nodeType": "embedded-asset-block",
                "content": [],
                "data": {"target": {"sys": {"type": "Link", "linkType": "Asset", "id": id}}}
            })
        };
        let d = doc(
            serde_json::json!({
                "nodeType": "document",
                "data": {},
                "content": [link("img1"), link("pdf1"), link("missing")]
            }),
            includes,
        );
        assert_eq!(d.nodes.len(), 1);
        let Node::Image(image) = &d.nodes[0] else {
            panic!("expected image");
        };
        assert_eq!(image.url, "https://images.ctfassets.net/s/lobby.jpg");
        assert_eq!(image.width, Some(1200));
        assert_eq!(image.title.as_deref(), Some("Lobby"));
    }

    #[test]
    fn empty_document_has_no_text() {
        let d = Document::default();
        assert!(d.is_empty());
        assert_eq!(d.plain_text(), "");
    }
}
