//! Frequency and first-position ranking.
//!
//! Each document matching at least one query term gets a raw frequency
//! score (higher is better) and a raw location score (lower is better).
//! Both are normalized against the candidates of the current query only
//! and combined as `freq_norm + LOCATION_WEIGHT * loc_norm`.

use serde::Serialize;

use crate::corpus::{Corpus, Document};
use crate::TermId;

/// Location contribution of a query term missing from a document.
pub const ABSENCE_PENALTY: u64 = 100_000;
/// Floor for normalization denominators.
pub const NORMALIZATION_EPSILON: f64 = 1e-5;
/// Weight of the normalized location score in the combined score.
pub const LOCATION_WEIGHT: f64 = 0.8;

/// A document with its raw scores for one query.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub document: &'a Document,
    pub frequency: u64,
    pub location: u64,
}

/// One ranked hit.
///
/// `loc_score` is reported already multiplied by [`LOCATION_WEIGHT`] while
/// `freq_score` is not, so `score == freq_score + loc_score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub name: String,
    pub score: f64,
    pub freq_score: f64,
    pub loc_score: f64,
}

/// Occurrences of query terms in `terms`, counted once per query id
/// occurrence (a repeated query word counts its matches again).
pub fn frequency_score(terms: &[TermId], query_ids: &[TermId]) -> u64 {
    query_ids
        .iter()
        .map(|q| terms.iter().filter(|t| *t == q).count() as u64)
        .sum()
}

/// Sum over query ids of the 1-based first position in `terms`, or
/// [`ABSENCE_PENALTY`] when the term does not occur.
pub fn location_score(terms: &[TermId], query_ids: &[TermId]) -> u64 {
    query_ids
        .iter()
        .map(|q| match terms.iter().position(|t| t == q) {
            Some(idx) => idx as u64 + 1,
            None => ABSENCE_PENALTY,
        })
        .sum()
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Raw scores for every document containing at least one query term,
    /// in corpus order.
    pub fn candidates<'a>(corpus: &'a Corpus, query_ids: &[TermId]) -> Vec<Candidate<'a>> {
        corpus
            .documents()
            .iter()
            .filter_map(|document| {
                let frequency = frequency_score(&document.terms, query_ids);
                if frequency == 0 {
                    return None;
                }
                let location = location_score(&document.terms, query_ids);
                Some(Candidate { document, frequency, location })
            })
            .collect()
    }

    /// Normalize and combine candidate scores, best first.
    ///
    /// The sort is stable: candidates with equal scores keep corpus order.
    pub fn rank(candidates: &[Candidate<'_>]) -> Vec<SearchResult> {
        let Some(min_location) = candidates.iter().map(|c| c.location).min() else {
            return Vec::new();
        };
        let max_frequency = candidates
            .iter()
            .map(|c| c.frequency as f64)
            .fold(NORMALIZATION_EPSILON, f64::max);
        let min_location = min_location as f64;

        let mut results: Vec<SearchResult> = candidates
            .iter()
            .map(|c| {
                let freq_norm = c.frequency as f64 / max_frequency;
                let loc_norm = min_location / (c.location as f64).max(NORMALIZATION_EPSILON);
                SearchResult {
                    name: c.document.name.clone(),
                    score: freq_norm + LOCATION_WEIGHT * loc_norm,
                    freq_score: freq_norm,
                    loc_score: LOCATION_WEIGHT * loc_norm,
                }
            })
            .collect();
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }

    pub fn score(corpus: &Corpus, query_ids: &[TermId]) -> Vec<SearchResult> {
        if query_ids.is_empty() {
            return Vec::new();
        }
        let candidates = Self::candidates(corpus, query_ids);
        Self::rank(&candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusBuilder;

    fn go_run_corpus() -> Corpus {
        let mut b = CorpusBuilder::new();
        b.add_text("D1", "go run");
        b.add_text("D2", "run go go");
        b.finish().1
    }

    #[test]
    fn frequency_counts_every_occurrence() {
        assert_eq!(frequency_score(&[3, 1, 3, 3], &[3]), 3);
        assert_eq!(frequency_score(&[3, 1, 3, 3], &[3, 3]), 6);
        assert_eq!(frequency_score(&[3, 1], &[7]), 0);
    }

    #[test]
    fn location_uses_first_position_or_penalty() {
        assert_eq!(location_score(&[5, 2, 2], &[2]), 2);
        assert_eq!(location_score(&[5, 2, 2], &[5, 9]), 1 + ABSENCE_PENALTY);
        assert_eq!(location_score(&[5, 2], &[2, 2]), 4);
    }

    #[test]
    fn documents_without_matches_are_not_candidates() {
        let mut b = CorpusBuilder::new();
        b.add_text("a", "alpha beta");
        b.add_text("b", "gamma");
        let (_, corpus) = b.finish();
        let c = ScoringEngine::candidates(&corpus, &[2]);
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].document.name, "b");
    }

    #[test]
    fn go_run_scenario() {
        // go = 0, run = 1
        let corpus = go_run_corpus();
        let results = ScoringEngine::score(&corpus, &[0, 1]);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "D2");
        assert_eq!(results[1].name, "D1");
        assert!((results[0].score - 1.8).abs() < 1e-9);
        assert!((results[1].score - (2.0 / 3.0 + 0.8)).abs() < 1e-9);
        assert_eq!(results[0].freq_score, 1.0);
        assert!((results[0].loc_score - 0.8).abs() < 1e-12);
    }

    #[test]
    fn earlier_occurrence_scores_higher_location() {
        let mut b = CorpusBuilder::new();
        b.add_text("late", "x y z rust");
        b.add_text("early", "rust x y z");
        let (dict, corpus) = b.finish();
        let rust = dict.lookup("rust").unwrap();
        let results = ScoringEngine::score(&corpus, &[rust]);
        assert_eq!(results[0].name, "early");
        assert!((results[0].loc_score - LOCATION_WEIGHT).abs() < 1e-12);
        assert!((results[1].loc_score - LOCATION_WEIGHT / 4.0).abs() < 1e-12);
    }

    #[test]
    fn equal_scores_keep_corpus_order() {
        let mut b = CorpusBuilder::new();
        b.add_text("first", "same words");
        b.add_text("second", "same words");
        b.add_text("third", "same words");
        let (_, corpus) = b.finish();
        let names: Vec<_> = ScoringEngine::score(&corpus, &[0])
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_query_short_circuits() {
        assert!(ScoringEngine::score(&go_run_corpus(), &[]).is_empty());
        assert!(ScoringEngine::rank(&[]).is_empty());
    }
}
