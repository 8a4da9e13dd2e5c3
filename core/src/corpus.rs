use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::dictionary::TermDictionary;
use crate::error::LoadError;
use crate::tokenizer::tokenize;
use crate::TermId;

/// A loaded document: its name and the term ids of its tokens in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub terms: Vec<TermId>,
}

/// Ordered, read-only collection of documents.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn total_terms(&self) -> usize {
        self.documents.iter().map(|d| d.terms.len()).sum()
    }
}

/// Accumulates documents and the term space they share.
///
/// Only the builder can mutate the dictionary; `finish` hands out the
/// finished pair, after which neither can grow.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    dictionary: TermDictionary,
    documents: Vec<Document>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and append it as a document. Returns false when the
    /// text has no word tokens, in which case nothing is added.
    pub fn add_text(&mut self, name: impl Into<String>, text: &str) -> bool {
        let name = name.into();
        let tokens = tokenize(text);
        if tokens.is_empty() {
            tracing::debug!(%name, "skipping document without words");
            return false;
        }
        let terms = tokens
            .iter()
            .map(|t| self.dictionary.intern_if_absent(t))
            .collect();
        self.documents.push(Document { name, terms });
        true
    }

    pub fn finish(self) -> (TermDictionary, Corpus) {
        (self.dictionary, Corpus { documents: self.documents })
    }
}

/// Builds the dictionary and corpus from directories of text files.
pub struct CorpusLoader {
    sources: Vec<PathBuf>,
}

impl CorpusLoader {
    pub fn new<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self { sources: sources.into_iter().map(|p| p.as_ref().to_path_buf()).collect() }
    }

    /// Load every regular file directly inside each source directory.
    ///
    /// Sources are visited in the given order and files within a source in
    /// file-name order. Any enumeration or read failure aborts the load.
    pub fn load(&self) -> Result<(TermDictionary, Corpus), LoadError> {
        if self.sources.is_empty() {
            return Err(LoadError::NoSources);
        }
        let start = Instant::now();
        let mut builder = CorpusBuilder::new();
        for source in &self.sources {
            self.load_source(source, &mut builder)?;
        }
        let (dictionary, corpus) = builder.finish();
        tracing::info!(
            num_docs = corpus.len(),
            num_terms = dictionary.len(),
            total_tokens = corpus.total_terms(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus loaded"
        );
        Ok((dictionary, corpus))
    }

    fn load_source(&self, source: &Path, builder: &mut CorpusBuilder) -> Result<(), LoadError> {
        // Missing paths are reported by the walker itself.
        if let Ok(meta) = fs::metadata(source) {
            if !meta.is_dir() {
                return Err(LoadError::NotADirectory { path: source.to_path_buf() });
            }
        }
        let walker = WalkDir::new(source)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();
        let mut added = 0usize;
        for entry in walker {
            let entry = entry.map_err(|e| LoadError::Enumerate { path: source.to_path_buf(), source: e })?;
            if !entry.file_type().is_file() {
                tracing::debug!(path = %entry.path().display(), "skipping non-file entry");
                continue;
            }
            let path = entry.path();
            let bytes = fs::read(path).map_err(|e| LoadError::Read { path: path.to_path_buf(), source: e })?;
            let text = String::from_utf8_lossy(&bytes);
            let name = entry.file_name().to_string_lossy();
            if builder.add_text(name, &text) {
                added += 1;
            }
        }
        tracing::debug!(source = %source.display(), added, "source loaded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_interns_in_token_order() {
        let mut b = CorpusBuilder::new();
        assert!(b.add_text("D1", "go run"));
        assert!(b.add_text("D2", "Run, go GO!"));
        let (dict, corpus) = b.finish();
        assert_eq!(dict.len(), 2);
        assert_eq!(corpus.documents()[0].terms, vec![0, 1]);
        assert_eq!(corpus.documents()[1].terms, vec![1, 0, 0]);
        assert_eq!(corpus.total_terms(), 5);
    }

    #[test]
    fn builder_skips_texts_without_words() {
        let mut b = CorpusBuilder::new();
        assert!(!b.add_text("blank", "  ... !! "));
        let (dict, corpus) = b.finish();
        assert!(corpus.is_empty());
        assert!(dict.is_empty());
    }

    #[test]
    fn loader_requires_sources() {
        let loader = CorpusLoader::new(Vec::<PathBuf>::new());
        assert!(matches!(loader.load(), Err(LoadError::NoSources)));
    }
}
