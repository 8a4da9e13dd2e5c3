use std::collections::HashMap;

use crate::TermId;

/// Append-only mapping between normalized words and dense term ids.
///
/// Ids are handed out in first-seen order starting at 0 and never change.
/// Callers lowercase words before interning or looking them up.
#[derive(Debug, Default, Clone)]
pub struct TermDictionary {
    ids: HashMap<String, TermId>,
    words: Vec<String>,
}

impl TermDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `word`, assigning the next free id if it is new.
    pub fn intern_if_absent(&mut self, word: &str) -> TermId {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len() as TermId;
        self.ids.insert(word.to_owned(), id);
        self.words.push(word.to_owned());
        id
    }

    /// Read-only lookup used at query time.
    pub fn lookup(&self, word: &str) -> Option<TermId> {
        self.ids.get(word).copied()
    }

    pub fn term(&self, id: TermId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_first_seen_order() {
        let mut dict = TermDictionary::new();
        assert_eq!(dict.intern_if_absent("go"), 0);
        assert_eq!(dict.intern_if_absent("run"), 1);
        assert_eq!(dict.intern_if_absent("go"), 0);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.term(1), Some("run"));
    }

    #[test]
    fn lookup_never_inserts() {
        let mut dict = TermDictionary::new();
        dict.intern_if_absent("go");
        assert_eq!(dict.lookup("stop"), None);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.lookup("go"), Some(0));
    }

    #[test]
    fn no_case_folding_inside_dictionary() {
        let mut dict = TermDictionary::new();
        dict.intern_if_absent("rust");
        assert_eq!(dict.lookup("Rust"), None);
    }
}
