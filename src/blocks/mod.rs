//! Markdown translation and payload chunking

mod chunk;
mod markdown;

pub use chunk::{DEFAULT_MAX_CHUNK_LEN, chunk_blocks};
pub use markdown::markdown_to_blocks;
