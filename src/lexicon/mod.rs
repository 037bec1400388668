use std::collections::HashMap;

/// Result of walking a string through the lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexiconQuery {
    /// Some character of the string has no matching branch
    Absent,
    /// Every character matched but the last node does not end a word
    Prefix,
    /// The string is a whole word in the lexicon
    Word,
}

impl LexiconQuery {
    /// True for `Prefix` and `Word`, i.e. a path worth extending
    pub fn is_viable(self) -> bool {
        !matches!(self, LexiconQuery::Absent)
    }
}

/// Lower-case `text` character by character, the same way words are stored
pub fn normalize(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<char, Node>,
    end_of_word: bool,
}

/// Multiway prefix tree holding the set of valid words.
///
/// Words are stored lower-cased. Each node owns its children, so dropping the
/// lexicon (or calling [`Lexicon::clear`]) releases the whole tree.
#[derive(Debug, Default)]
pub struct Lexicon {
    root: Node,
    word_count: usize,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, lower-casing it first. Inserting a word twice is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in word.chars().flat_map(char::to_lowercase) {
            node = node.children.entry(ch).or_default();
        }

        if !node.end_of_word {
            node.end_of_word = true;
            self.word_count += 1;
        }
    }

    /// Walk `text` through the tree one character at a time.
    ///
    /// `text` is matched as given; callers pass already-normalized text.
    pub fn query(&self, text: &str) -> LexiconQuery {
        let mut node = &self.root;
        for ch in text.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return LexiconQuery::Absent,
            }
        }

        if node.end_of_word {
            LexiconQuery::Word
        } else {
            LexiconQuery::Prefix
        }
    }

    /// Check if `word` is a whole word in the lexicon
    pub fn contains(&self, word: &str) -> bool {
        self.query(word) == LexiconQuery::Word
    }

    /// Drop every node below the root
    pub fn clear(&mut self) {
        self.root.children.clear();
        self.word_count = 0;
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Lexicon::new();
        lexicon.extend(iter);
        lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        ["cat", "cats", "car", "dog", "Do"].into_iter().collect()
    }

    #[test]
    fn test_inserted_words_are_words() {
        let lexicon = sample();
        for word in ["cat", "cats", "car", "dog", "do"] {
            assert_eq!(lexicon.query(word), LexiconQuery::Word, "{word}");
        }
    }

    #[test]
    fn test_proper_prefixes_are_prefixes() {
        let lexicon = sample();
        assert_eq!(lexicon.query("c"), LexiconQuery::Prefix);
        assert_eq!(lexicon.query("ca"), LexiconQuery::Prefix);
        assert_eq!(lexicon.query("d"), LexiconQuery::Prefix);
        // root is the empty prefix
        assert_eq!(lexicon.query(""), LexiconQuery::Prefix);
    }

    #[test]
    fn test_unrelated_strings_are_absent() {
        let lexicon = sample();
        assert_eq!(lexicon.query("x"), LexiconQuery::Absent);
        assert_eq!(lexicon.query("catz"), LexiconQuery::Absent);
        assert_eq!(lexicon.query("dogs"), LexiconQuery::Absent);
        assert!(!LexiconQuery::Absent.is_viable());
        assert!(LexiconQuery::Prefix.is_viable());
        assert!(LexiconQuery::Word.is_viable());
    }

    #[test]
    fn test_word_that_is_also_prefix() {
        let lexicon = sample();
        // "cat" has a child ("cats") but still reports as a word
        assert_eq!(lexicon.query("cat"), LexiconQuery::Word);
        assert!(lexicon.contains("cat"));
        assert!(!lexicon.contains("ca"));
    }

    #[test]
    fn test_insert_lowercases_but_query_does_not() {
        let lexicon = sample();
        assert_eq!(lexicon.query("do"), LexiconQuery::Word);
        assert_eq!(lexicon.query("Do"), LexiconQuery::Absent);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("boggle");
        lexicon.insert("BOGGLE");
        lexicon.insert("boggle");
        assert_eq!(lexicon.len(), 1);
        assert_eq!(lexicon.query("boggle"), LexiconQuery::Word);
    }

    #[test]
    fn test_empty_word_is_ignored() {
        let mut lexicon = Lexicon::new();
        lexicon.insert("");
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.query(""), LexiconQuery::Prefix);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut lexicon = sample();
        assert_eq!(lexicon.len(), 5);

        lexicon.clear();
        assert!(lexicon.is_empty());
        assert_eq!(lexicon.query("cat"), LexiconQuery::Absent);
        assert_eq!(lexicon.query("c"), LexiconQuery::Absent);

        lexicon.insert("cow");
        assert_eq!(lexicon.query("cow"), LexiconQuery::Word);
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn test_multibyte_characters() {
        let lexicon: Lexicon = ["Éclair", "straße"].into_iter().collect();
        assert_eq!(lexicon.query("éclair"), LexiconQuery::Word);
        assert_eq!(lexicon.query("stra"), LexiconQuery::Prefix);
        assert_eq!(lexicon.query("straß"), LexiconQuery::Prefix);
    }
}
