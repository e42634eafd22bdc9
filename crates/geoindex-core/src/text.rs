//! Tokenization helpers used by [`crate::index::TieredInvertedIndex`].
//!
//! Deliberately minimal: lower-casing plus whitespace/path splitting is the
//! only normalization this index performs. No accent folding, no stemming.

/// Lower-cases and splits on ASCII whitespace.
pub fn whitespace_words(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace().map(|w| w.to_lowercase())
}

/// Lower-cases and splits on `/`, dropping empty segments (so a timezone
/// like `"America/New_York"` yields `["america", "new_york"]`).
pub fn path_segments(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split('/').filter(|seg| !seg.is_empty()).map(|seg| seg.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_lowercases_whitespace() {
        let words: Vec<_> = whitespace_words("San  Jose").collect();
        assert_eq!(words, vec!["san", "jose"]);
    }

    #[test]
    fn splits_timezone_path() {
        let segs: Vec<_> = path_segments("America/Argentina/Buenos_Aires").collect();
        assert_eq!(segs, vec!["america", "argentina", "buenos_aires"]);
    }

    #[test]
    fn empty_timezone_segments_dropped() {
        let segs: Vec<_> = path_segments("/UTC/").collect();
        assert_eq!(segs, vec!["utc"]);
    }
}
