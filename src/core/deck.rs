//! Card storage and deck file parsing
//!
//! A deck file is plain text with one card per line, front and back separated
//! by the first occurrence of a single delimiter character (default `|`).
//! A line with no delimiter is an unpaired token and is discarded; blank
//! lines are skipped. An empty file is a valid, empty deck.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;

/// One flashcard: two text faces
///
/// Any string is accepted for either face, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    front: String,
    back: String,
}

impl Flashcard {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }
}

/// A loaded set of cards in two orderings
///
/// `persistent` is the order the file was read in and is never mutated after
/// construction; it is what the viewer shows while shuffle is off.
/// `working` starts as a copy of `persistent` and is the only ordering a
/// shuffle permutes, so toggling shuffle off can always fall back to the
/// original order.
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    persistent: Vec<Flashcard>,
    working: Vec<Flashcard>,
}

impl CardSet {
    /// Create an empty set (the state before any file has been opened)
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a deck file from disk
    ///
    /// The one recoverable failure: the path cannot be read. Malformed
    /// content is not an error; it degrades to a smaller (possibly empty)
    /// deck.
    pub fn load(path: &Path, delimiter: char) -> Result<Self, DeckError> {
        let text = fs::read_to_string(path).map_err(|e| DeckError::Unreadable {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::parse(&text, delimiter))
    }

    /// Tokenize deck text into cards
    ///
    /// Each line splits at the first `delimiter` into (front, back). Faces
    /// are trimmed of surrounding whitespace. A line without the delimiter
    /// has no back-face partner and is dropped by policy.
    pub fn parse(text: &str, delimiter: char) -> Self {
        let mut cards = Vec::new();
        let mut unpaired = 0usize;

        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match line.split_once(delimiter) {
                Some((front, back)) => {
                    cards.push(Flashcard::new(front.trim(), back.trim()));
                }
                None => unpaired += 1,
            }
        }

        if unpaired > 0 {
            tracing::debug!("Discarded {} line(s) with no '{}' delimiter", unpaired, delimiter);
        }

        Self {
            working: cards.clone(),
            persistent: cards,
        }
    }

    /// Uniformly permute the working order in place
    ///
    /// The persistent order is untouched.
    pub fn shuffle(&mut self) {
        let mut rng = rand::rng();
        self.working.shuffle(&mut rng);
    }

    pub fn len(&self) -> usize {
        self.persistent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persistent.is_empty()
    }

    /// Original file order (read-only)
    pub fn persistent(&self) -> &[Flashcard] {
        &self.persistent
    }

    /// Current working order, shuffled or not (read-only)
    pub fn working(&self) -> &[Flashcard] {
        &self.working
    }

    /// 1-based card lookup in the ordering the viewer is showing
    ///
    /// Returns `None` for position 0, positions past the end, or an empty
    /// set.
    pub fn card(&self, position: usize, shuffled: bool) -> Option<&Flashcard> {
        let order = if shuffled { &self.working } else { &self.persistent };
        position.checked_sub(1).and_then(|i| order.get(i))
    }
}

/// Deck loading errors
#[derive(Debug)]
pub enum DeckError {
    /// The deck file could not be opened or read
    Unreadable {
        path: String,
        source: std::io::Error,
    },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::Unreadable { path, source } => {
                write!(f, "Cannot read deck '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Unreadable { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pairs() {
        let deck = CardSet::parse("a|1\nb|2\nc|3", '|');
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.persistent()[0], Flashcard::new("a", "1"));
        assert_eq!(deck.persistent()[1], Flashcard::new("b", "2"));
        assert_eq!(deck.persistent()[2], Flashcard::new("c", "3"));
    }

    #[test]
    fn test_parse_orderings_match() {
        let deck = CardSet::parse("a|1\nb|2\nc|3", '|');
        assert_eq!(deck.persistent(), deck.working());
        assert_eq!(deck.persistent().len(), deck.working().len());
    }

    #[test]
    fn test_unpaired_line_discarded() {
        let deck = CardSet::parse("a|1\nb", '|');
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.persistent()[0], Flashcard::new("a", "1"));
    }

    #[test]
    fn test_empty_text() {
        let deck = CardSet::parse("", '|');
        assert_eq!(deck.len(), 0);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let deck = CardSet::parse("a|1\n\n   \nb|2\n", '|');
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let deck = CardSet::parse("a|1\r\nb|2\r\n", '|');
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.persistent()[1], Flashcard::new("b", "2"));
    }

    #[test]
    fn test_empty_back_face_accepted() {
        let deck = CardSet::parse("a|", '|');
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.persistent()[0].back(), "");
    }

    #[test]
    fn test_split_at_first_delimiter() {
        let deck = CardSet::parse("a|b|c", '|');
        assert_eq!(deck.persistent()[0], Flashcard::new("a", "b|c"));
    }

    #[test]
    fn test_custom_delimiter() {
        let deck = CardSet::parse("hi,hello\nbye,farewell", ',');
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.persistent()[0], Flashcard::new("hi", "hello"));
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let text: String = (0..50).map(|i| format!("front{}|back{}\n", i, i)).collect();
        let mut deck = CardSet::parse(&text, '|');
        let original = deck.persistent().to_vec();

        deck.shuffle();

        // Persistent order is untouched
        assert_eq!(deck.persistent(), original.as_slice());

        // Working order is a permutation: same multiset of cards
        let mut shuffled = deck.working().to_vec();
        shuffled.sort_by(|a, b| a.front().cmp(b.front()));
        let mut expected = original;
        expected.sort_by(|a, b| a.front().cmp(b.front()));
        assert_eq!(shuffled, expected);
    }

    #[test]
    fn test_card_lookup() {
        let deck = CardSet::parse("a|1\nb|2", '|');
        assert_eq!(deck.card(1, false).unwrap().front(), "a");
        assert_eq!(deck.card(2, false).unwrap().back(), "2");
        assert!(deck.card(0, false).is_none());
        assert!(deck.card(3, false).is_none());
        assert!(CardSet::new().card(1, false).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a|1\nb|2\nc|3").unwrap();

        let deck = CardSet::load(file.path(), '|').unwrap();
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CardSet::load(&dir.path().join("no-such-deck.txt"), '|').unwrap_err();
        assert!(matches!(err, DeckError::Unreadable { .. }));
        assert!(err.to_string().contains("no-such-deck.txt"));
    }
}
