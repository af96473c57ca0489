//! Content blocks and their Notion wire form.

use serde_json::{Value, json};

/// Heading depth. Notion only supports three levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    One,
    Two,
    Three,
}

impl HeadingLevel {
    /// Returns the Notion block type for this level (`heading_1` .. `heading_3`).
    pub fn block_type(&self) -> &'static str {
        match self {
            HeadingLevel::One => "heading_1",
            HeadingLevel::Two => "heading_2",
            HeadingLevel::Three => "heading_3",
        }
    }
}

/// One discrete unit of page content.
///
/// Blocks are produced transiently while a page is being filed and are never
/// stored locally. Each variant carries a single run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A paragraph, optionally rendered as a hyperlink.
    Paragraph { text: String, link: Option<String> },
    Heading { level: HeadingLevel, text: String },
    BulletedListItem { text: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            link: None,
        }
    }

    /// A paragraph whose whole text links to `url`.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            link: Some(url.into()),
        }
    }

    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        Block::BulletedListItem { text: text.into() }
    }

    /// Returns the block's text payload.
    pub fn text(&self) -> &str {
        match self {
            Block::Paragraph { text, .. }
            | Block::Heading { text, .. }
            | Block::BulletedListItem { text } => text,
        }
    }

    /// Returns the Notion block type name.
    pub fn block_type(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { level, .. } => level.block_type(),
            Block::BulletedListItem { .. } => "bulleted_list_item",
        }
    }

    /// Renders the block as a Notion block object.
    pub fn to_json(&self) -> Value {
        let text = match self {
            Block::Paragraph {
                text,
                link: Some(url),
            } => json!({ "content": text, "link": { "url": url } }),
            _ => json!({ "content": self.text() }),
        };
        let kind = self.block_type();
        json!({
            "type": kind,
            (kind): { "rich_text": [{ "type": "text", "text": text }] },
        })
    }

    /// Size of the block's serialized representation, in characters.
    ///
    /// This is the unit the chunker budgets against.
    pub fn serialized_len(&self) -> usize {
        self.to_json().to_string().chars().count()
    }
}

/// Returns the plain content of the first rich-text run of a Notion block of
/// the given type, if there is one.
pub fn first_text_run<'a>(block: &'a Value, block_type: &str) -> Option<&'a str> {
    if block.get("type")?.as_str()? != block_type {
        return None;
    }
    block
        .get(block_type)?
        .get("rich_text")?
        .get(0)?
        .get("text")?
        .get("content")?
        .as_str()
}
