pub mod corpus;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod query;
pub mod scoring;
pub mod tokenizer;

pub use corpus::{Corpus, CorpusBuilder, CorpusLoader, Document};
pub use dictionary::TermDictionary;
pub use engine::SearchEngine;
pub use error::LoadError;
pub use query::QueryProcessor;
pub use scoring::{Candidate, ScoringEngine, SearchResult};

pub type TermId = u32;
