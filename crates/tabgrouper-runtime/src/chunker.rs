//! Chunk splitting for AI requests.
//!
//! The ceiling exists to respect provider payload limits, not for
//! throughput.

use tabgrouper_protocols::types::TabRecord;

/// Maximum number of tabs submitted to the AI backend in one request.
pub const MAX_CHUNK_SIZE: usize = 75;

/// Partition tabs, preserving relative order, into consecutive batches of
/// at most [`MAX_CHUNK_SIZE`]. Pure and total: flattening the result gives
/// back the input, and an empty input yields zero chunks.
pub fn chunk_tabs(tabs: &[TabRecord]) -> Vec<Vec<TabRecord>> {
    tabs.chunks(MAX_CHUNK_SIZE)
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(n: usize) -> Vec<TabRecord> {
        (0..n)
            .map(|i| TabRecord::new(i as i64, format!("tab {i}"), format!("https://{i}.com")))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        assert!(chunk_tabs(&[]).is_empty());
    }

    #[test]
    fn test_single_chunk_under_limit() {
        let input = tabs(10);
        let chunks = chunk_tabs(&input);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], input);
    }

    #[test]
    fn test_exact_boundary() {
        let chunks = chunk_tabs(&tabs(MAX_CHUNK_SIZE));
        assert_eq!(chunks.len(), 1);

        let chunks = chunk_tabs(&tabs(MAX_CHUNK_SIZE + 1));
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].len(), 1);
    }

    #[test]
    fn test_flatten_equals_input() {
        for n in [0, 1, 74, 75, 76, 150, 151, 200] {
            let input = tabs(n);
            let flattened: Vec<TabRecord> =
                chunk_tabs(&input).into_iter().flatten().collect();
            assert_eq!(flattened, input, "n = {n}");
        }
    }

    #[test]
    fn test_every_chunk_within_limit() {
        for chunk in chunk_tabs(&tabs(400)) {
            assert!(chunk.len() <= MAX_CHUNK_SIZE);
            assert!(!chunk.is_empty());
        }
    }
}
