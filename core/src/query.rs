use crate::dictionary::TermDictionary;
use crate::tokenizer::tokenize_query;
use crate::TermId;

/// Turns raw query strings into term ids.
pub struct QueryProcessor;

impl QueryProcessor {
    /// Resolve each whitespace token against the dictionary, keeping order
    /// and duplicates. Unknown tokens are dropped.
    pub fn resolve(dictionary: &TermDictionary, query: &str) -> Vec<TermId> {
        tokenize_query(query)
            .into_iter()
            .filter_map(|token| {
                let id = dictionary.lookup(&token);
                if id.is_none() {
                    tracing::trace!(%token, "dropping unknown query token");
                }
                id
            })
            .collect()
    }
}
