//! [`TieredInvertedIndex`]: a lexical index over place names, alternate
//! names, and administrative metadata, with tier-priority and
//! population-weighted ranking.

use crate::place::PlaceRecord;
use crate::text::{path_segments, whitespace_words};
use std::collections::{HashMap, HashSet};

/// Number of priority tiers. Tier 0 is the highest priority; a tier-0 hit
/// always outranks every tier-1 hit, which always outranks every tier-2
/// hit.
const TIERS: usize = 3;

/// Per-word posting lists, one `HashMap<id, weight>` per tier.
#[derive(Default)]
struct PostingLists {
    tiers: [HashMap<i64, u64>; TIERS],
}

/// A lexical index over a corpus of [`PlaceRecord`]s.
///
/// Words are indexed into three tiers per §4.2 of the index's contract:
/// tier 0 from the place's `name`, weighted by population; tier 1 from
/// `alternate_names`; tier 2 from country/feature/admin codes and
/// `/`-split timezone segments. [`TieredInvertedIndex::search`] ranks
/// strictly by tier first, then by keyword coverage, then by accumulated
/// weight.
#[derive(Default)]
pub struct TieredInvertedIndex {
    lists: HashMap<String, PostingLists>,
    df: HashMap<String, u64>,
    documents: HashSet<i64>,
}

impl TieredInvertedIndex {
    /// Creates an empty index. Tier count is fixed at 3.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct places indexed so far.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Indexes a place's name, alternate names, and administrative
    /// metadata. A second insert of the same `place.id` is a no-op.
    pub fn insert(&mut self, place: &PlaceRecord) {
        if self.documents.contains(&place.id) {
            return;
        }
        self.documents.insert(place.id);

        let mut words_seen: HashSet<String> = HashSet::new();

        for word in whitespace_words(&place.name) {
            self.add_posting(&word, 0, place.id, place.population);
            words_seen.insert(word);
        }

        for alt in &place.alternate_names {
            for word in whitespace_words(alt) {
                self.add_posting(&word, 1, place.id, 1);
                words_seen.insert(word);
            }
        }

        let tier2_fields = [
            place.country_code.as_str(),
            place.feature_class.as_str(),
            place.feature_code.as_str(),
            place.admin1.as_str(),
            place.admin2.as_str(),
            place.admin3.as_str(),
            place.admin4.as_str(),
        ];
        for field in tier2_fields {
            if !field.is_empty() {
                let word = field.to_lowercase();
                self.add_posting(&word, 2, place.id, 1);
                words_seen.insert(word);
            }
        }
        for word in path_segments(&place.timezone) {
            self.add_posting(&word, 2, place.id, 1);
            words_seen.insert(word);
        }

        for word in words_seen {
            *self.df.entry(word).or_insert(0) += 1;
        }
    }

    fn add_posting(&mut self, word: &str, tier: usize, id: i64, weight: u64) {
        let postings = self.lists.entry(word.to_string()).or_default();
        *postings.tiers[tier].entry(id).or_insert(0) += weight;
    }

    /// Searches the index, returning up to `k` place ids ranked by tier
    /// dominance, then idf-weighted keyword coverage, then idf-weighted
    /// posting weight (ties broken by id ascending for determinism).
    ///
    /// An empty query, or a query where every word is unrecognized,
    /// returns an empty list.
    ///
    /// # Panics
    ///
    /// Panics if `k == 0`.
    pub fn search(&self, query: &str, k: usize) -> Vec<i64> {
        assert!(k > 0, "TieredInvertedIndex::search: k must be > 0");

        let doc_count = self.documents.len() as f64;

        // Repeated query words are not deduplicated: each occurrence
        // contributes its own idf weight.
        let mut keywords: Vec<(&str, f64)> = query
            .to_lowercase()
            .split_whitespace()
            .filter_map(|word| {
                let df = *self.df.get(word)?;
                debug_assert!(df >= 1, "df[{word}] must be >= 1 for an indexed word");
                Some((word, (doc_count / df as f64).log10()))
            })
            .collect();
        if keywords.is_empty() {
            return Vec::new();
        }
        keywords.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("idf is finite"));

        let mut results = Vec::new();
        let mut emitted: HashSet<i64> = HashSet::new();

        for tier in 0..TIERS {
            let mut tier_scores: HashMap<i64, (f64, f64)> = HashMap::new();
            for &(word, idf) in &keywords {
                let Some(postings) = self.lists.get(word) else { continue };
                for (&id, &weight) in &postings.tiers[tier] {
                    let entry = tier_scores.entry(id).or_insert((0.0, 0.0));
                    entry.0 += idf;
                    entry.1 += weight as f64 * idf;
                }
            }

            let mut ranked: Vec<(i64, f64, f64)> =
                tier_scores.into_iter().map(|(id, (cov, w))| (id, cov, w)).collect();
            ranked.sort_by(|a, b| {
                b.1.partial_cmp(&a.1)
                    .expect("coverage is finite")
                    .then_with(|| b.2.partial_cmp(&a.2).expect("weight is finite"))
                    .then_with(|| a.0.cmp(&b.0))
            });

            for (id, _, _) in ranked {
                if emitted.insert(id) {
                    results.push(id);
                    if results.len() >= k {
                        return results;
                    }
                }
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(id: i64, name: &str, population: u64) -> PlaceRecord {
        PlaceRecord {
            id,
            name: name.into(),
            alternate_names: vec![],
            latitude: 0.0,
            longitude: 0.0,
            country_code: String::new(),
            feature_class: String::new(),
            feature_code: String::new(),
            admin1: String::new(),
            admin2: String::new(),
            admin3: String::new(),
            admin4: String::new(),
            timezone: String::new(),
            population,
        }
    }

    #[test]
    #[should_panic(expected = "k must be > 0")]
    fn zero_k_panics() {
        let index = TieredInvertedIndex::new();
        index.search("paris", 0);
    }

    #[test]
    fn empty_query_returns_empty() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "Paris", 100));
        assert!(index.search("", 10).is_empty());
        assert!(index.search("   ", 10).is_empty());
    }

    #[test]
    fn unknown_words_return_empty() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "Paris", 100));
        assert!(index.search("atlantis", 10).is_empty());
    }

    #[test]
    fn insert_is_idempotent() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "Paris", 100));
        index.insert(&place(1, "Paris", 100));
        assert_eq!(index.document_count(), 1);
        assert_eq!(index.df.get("paris"), Some(&1));
    }

    #[test]
    fn s4_tier_dominance() {
        let mut index = TieredInvertedIndex::new();
        let mut p1 = place(1, "Paris", 2_000_000);
        p1.alternate_names = vec![];
        index.insert(&p1);

        let mut p2 = place(2, "Lutetia", 0);
        p2.alternate_names = vec!["Paris".into()];
        index.insert(&p2);

        assert_eq!(index.search("paris", 10), vec![1, 2]);
    }

    #[test]
    fn s5_population_tie_break_within_tier0() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "Springfield", 150_000));
        index.insert(&place(2, "Springfield", 50_000));
        assert_eq!(index.search("springfield", 10), vec![1, 2]);
    }

    #[test]
    fn s6_coverage_before_weight() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "San Jose", 1_000_000));
        index.insert(&place(2, "San", 10_000_000));
        assert_eq!(index.search("san jose", 10), vec![1, 2]);
    }

    #[test]
    fn duplicate_words_accumulate_weight() {
        let mut index = TieredInvertedIndex::new();
        index.insert(&place(1, "San San Jose", 10));
        let postings = index.lists.get("san").unwrap();
        assert_eq!(postings.tiers[0].get(&1), Some(&20));
    }

    #[test]
    fn shared_word_bumps_df_once_across_tiers() {
        let mut index = TieredInvertedIndex::new();
        let mut p = place(1, "Oslo", 500_000);
        p.alternate_names = vec!["Oslo".into()];
        index.insert(&p);
        assert_eq!(index.df.get("oslo"), Some(&1));
        assert_eq!(index.lists.get("oslo").unwrap().tiers[0].get(&1), Some(&500_000));
        assert_eq!(index.lists.get("oslo").unwrap().tiers[1].get(&1), Some(&1));
    }

    #[test]
    fn size_bound_respected() {
        let mut index = TieredInvertedIndex::new();
        for i in 0..20 {
            index.insert(&place(i, "Springfield", i as u64));
        }
        let results = index.search("springfield", 5);
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn tier2_metadata_is_searchable() {
        let mut index = TieredInvertedIndex::new();
        let mut p = place(1, "Nowhere", 0);
        p.timezone = "America/New_York".into();
        p.country_code = "US".into();
        index.insert(&p);
        assert_eq!(index.search("america", 10), vec![1]);
        assert_eq!(index.search("us", 10), vec![1]);
    }
}
