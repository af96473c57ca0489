//! Line-oriented markdown to block translation.
//!
//! Only four constructs are recognized: `# `, `## ` and `### ` headings,
//! `- ` bullet items, and paragraphs (consecutive non-blank lines, joined
//! with a single space). Everything else is paragraph text.

use crate::domain::{Block, HeadingLevel};

/// Converts markdown text into an ordered list of blocks.
///
/// Blank lines end the current paragraph. Headings and bullets also end it
/// and are never merged with neighbouring text. Empty or whitespace-only
/// input produces no blocks.
///
/// # Examples
///
/// ```
/// use notion_inbox::blocks::markdown_to_blocks;
/// use notion_inbox::domain::{Block, HeadingLevel};
///
/// let blocks = markdown_to_blocks("# H1\n\ntext\n- item");
/// assert_eq!(
///     blocks,
///     vec![
///         Block::heading(HeadingLevel::One, "H1"),
///         Block::paragraph("text"),
///         Block::bullet("item"),
///     ]
/// );
/// ```
pub fn markdown_to_blocks(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    if text.trim().is_empty() {
        return blocks;
    }

    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        let line = line.trim_end();

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        // Longest prefix first so "## " is never read as a level 1 heading.
        let marker = if let Some(rest) = line.strip_prefix("### ") {
            Some(Block::heading(HeadingLevel::Three, rest))
        } else if let Some(rest) = line.strip_prefix("## ") {
            Some(Block::heading(HeadingLevel::Two, rest))
        } else if let Some(rest) = line.strip_prefix("# ") {
            Some(Block::heading(HeadingLevel::One, rest))
        } else {
            line.strip_prefix("- ").map(Block::bullet)
        };

        match marker {
            Some(block) => {
                flush_paragraph(&mut paragraph, &mut blocks);
                blocks.push(block);
            }
            None => paragraph.push(line),
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::paragraph(lines.join(" ")));
        lines.clear();
    }
}
