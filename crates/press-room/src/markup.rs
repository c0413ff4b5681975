/// HTML escaping and the rich-text body renderer.
use press_common::model::ImageAsset;
use press_common::rich_text::{Document, Mark, Node};

/// Escape text for use in element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Only http(s), mailto, tel and relative links survive; anything else
/// (e.g. `javascript:`) becomes `#`.
fn safe_href(uri: &str) -> String {
    let lower = uri.trim().to_ascii_lowercase();
    let allowed = ["http://", "https://", "mailto:", "tel:", "/", "#"]
        .iter()
        .any(|p| lower.starts_with(p));
    if allowed {
        escape(uri.trim())
    } else {
        "#".to_string()
    }
}

pub fn render_document(doc: &Document) -> String {
    let mut out = String::new();
    for node in &doc.nodes {
        render_node(node, &mut out);
    }
    out
}

fn render_children(children: &[Node], out: &mut String) {
    for child in children {
        render_node(child, out);
    }
}

fn wrap(tag: &str, class: &str, children: &[Node], out: &mut String) {
    out.push_str(&format!("<{tag} class=\"{class}\">"));
    render_children(children, out);
    out.push_str(&format!("</{tag}>"));
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Paragraph { children } => wrap("p", "mb-6 leading-relaxed", children, out),
        Node::Heading { level, children } => {
            let level = (*level).clamp(1, 6);
            let class = match level {
                1 | 2 => "text-3xl font-bold mt-12 mb-6",
                3 => "text-2xl font-semibold mt-10 mb-4",
                _ => "text-xl font-semibold mt-8 mb-4",
            };
            wrap(&format!("h{level}"), class, children, out);
        }
        Node::UnorderedList { items } => wrap("ul", "list-disc pl-6 mb-6 space-y-2", items, out),
        Node::OrderedList { items } => wrap("ol", "list-decimal pl-6 mb-6 space-y-2", items, out),
        Node::ListItem { children } => {
            out.push_str("<li>");
            render_children(children, out);
            out.push_str("</li>");
        }
        Node::Quote { children } => wrap(
            "blockquote",
            "border-l-4 border-primary pl-6 italic my-8 text-gray-300",
            children,
            out,
        ),
        Node::Rule => out.push_str("<hr class=\"my-8 border-gray-800\">"),
        Node::Hyperlink { uri, children } => {
            out.push_str(&format!(
                "<a href=\"{}\" class=\"text-primary hover:underline\" target=\"_blank\" rel=\"noopener noreferrer\">",
                safe_href(uri)
            ));
            render_children(children, out);
            out.push_str("</a>");
        }
        Node::Text { value, marks } => render_text(value, marks, out),
        Node::Image(image) => render_figure(image, out),
    }
}

fn render_text(value: &str, marks: &[Mark], out: &mut String) {
    let tags: Vec<&str> = marks
        .iter()
        .map(|m| match m {
            Mark::Bold => "strong",
            Mark::Italic => "em",
            Mark::Underline => "u",
            Mark::Code => "code",
        })
        .collect();
    for tag in &tags {
        out.push_str(&format!("<{tag}>"));
    }
    out.push_str(&escape(value).replace('\n', "<br>"));
    for tag in tags.iter().rev() {
        out.push_str(&format!("</{tag}>"));
    }
}

fn render_figure(image: &ImageAsset, out: &mut String) {
    let alt = image.title.as_deref().unwrap_or("");
    out.push_str(&format!(
        "<figure class=\"my-8\"><img src=\"{}\" alt=\"{}\" width=\"{}\" height=\"{}\" loading=\"lazy\" class=\"rounded-lg w-full h-auto\">",
        escape(&image.url),
        escape(alt),
        image.width_or(1200),
        image.height_or(800),
    ));
    if let Some(caption) = image.description.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!(
            "<figcaption class=\"text-sm text-gray-500 mt-2 text-center\">{}</figcaption>",
            escape(caption)
        ));
    }
    out.push_str("</figure>");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Node {
        Node::Text {
            value: value.to_string(),
            marks: vec![],
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn renders_nested_blocks_and_marks() {
        let doc = Document {
            nodes: vec![
                Node::Heading {
                    level: 2,
                    children: vec![text("Opening <night>")],
                },
                Node::Paragraph {
                    children: vec![Node::Text {
                        value: "bold".to_string(),
                        marks: vec![Mark::Bold, Mark::Italic],
                    }],
                },
                Node::OrderedList {
                    items: vec![Node::ListItem {
                        children: vec![text("first")],
                    }],
                },
            ],
        };
        let html = render_document(&doc);
        assert!(html.contains("<h2 class=\"text-3xl font-bold mt-12 mb-6\">Opening &lt;night&gt;</h2>"));
        assert!(html.contains("<strong><em>bold</em></strong>"));
        assert!(html.contains("<ol class=\"list-decimal pl-6 mb-6 space-y-2\"><li>first</li></ol>"));
    }

    #[test]
    fn neutralises_script_links() {
        let doc = Document {
            nodes: vec![Node::Hyperlink {
                uri: "javascript:alert(1)".to_string(),
                children: vec![text("click")],
            }],
        };
        let html = render_document(&doc);
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn renders_images_with_caption() {
        let doc = Document {
            nodes: vec![Node::Image(ImageAsset {
                url: "https://images.ctfassets.net/s/lobby.jpg".to_string(),
                title: Some("Lobby".to_string()),
                description: Some("The new lobby".to_string()),
                width: Some(1600),
                height: None,
            })],
        };
        let html = render_document(&doc);
        assert!(html.contains("src=\"https://images.ctfassets.net/s/lobby.jpg\""));
        assert!(html.contains("width=\"1600\" height=\"800\""));
        assert!(html.contains("<figcaption"));
    }
}
