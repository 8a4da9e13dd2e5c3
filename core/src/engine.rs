use std::path::Path;

use crate::corpus::{Corpus, CorpusLoader};
use crate::dictionary::TermDictionary;
use crate::error::LoadError;
use crate::query::QueryProcessor;
use crate::scoring::{ScoringEngine, SearchResult};

/// Immutable snapshot of the term space and the documents indexed in it.
///
/// Built once before serving. Queries only take `&self`, so the engine can
/// be shared across threads behind an `Arc` without locking. Reindexing
/// means building a new engine and swapping the whole value.
#[derive(Debug)]
pub struct SearchEngine {
    dictionary: TermDictionary,
    corpus: Corpus,
}

impl SearchEngine {
    pub fn from_parts(dictionary: TermDictionary, corpus: Corpus) -> Self {
        Self { dictionary, corpus }
    }

    pub fn load<I, P>(sources: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let (dictionary, corpus) = CorpusLoader::new(sources).load()?;
        Ok(Self::from_parts(dictionary, corpus))
    }

    /// Rank documents for `raw` query text. Returns an empty list when no
    /// query word is known.
    pub fn query(&self, raw: &str) -> Vec<SearchResult> {
        let query_ids = QueryProcessor::resolve(&self.dictionary, raw);
        if query_ids.is_empty() {
            return Vec::new();
        }
        let results = ScoringEngine::score(&self.corpus, &query_ids);
        tracing::debug!(terms = query_ids.len(), hits = results.len(), "query scored");
        results
    }

    pub fn dictionary(&self) -> &TermDictionary {
        &self.dictionary
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
