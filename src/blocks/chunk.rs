//! Size-bounded grouping of blocks for request payload limits.

use crate::domain::Block;

/// Default per-chunk budget, in serialized characters.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 2000;

/// Splits blocks into ordered chunks whose summed `serialized_len` stays
/// within `max_len`.
///
/// Blocks are never split or dropped: a block that is larger than `max_len`
/// on its own gets a chunk to itself. Empty input yields a single empty
/// chunk so callers always have something to iterate.
pub fn chunk_blocks(blocks: Vec<Block>, max_len: usize) -> Vec<Vec<Block>> {
    let mut chunks = Vec::new();
    let mut current: Vec<Block> = Vec::new();
    let mut current_len = 0;

    for block in blocks {
        let len = block.serialized_len();
        if current_len + len > max_len && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        current.push(block);
        current_len += len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    if chunks.is_empty() {
        chunks.push(Vec::new());
    }

    chunks
}
