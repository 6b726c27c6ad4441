//! Navigation and shuffle state for a viewing session
//!
//! The session is a plain value with pure transition methods, so the whole
//! state machine can be exercised without a terminal. Positions are 1-based
//! to match the "N/total" indicator in the status bar.

use serde::{Deserialize, Serialize};

use crate::core::deck::CardSet;

/// Direction for card navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Viewing session state: cursor position, visible face, shuffle toggle
///
/// Every transition is a no-op while the deck is empty. Navigation never
/// wraps around either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Current card position, 1-based; 0 while the deck is empty
    position: usize,
    /// Which face is showing
    on_front: bool,
    /// Whether the working (shuffled) order is active
    shuffled: bool,
    /// Position to resume at when shuffle is toggled off
    saved_position: usize,
    /// Card count of the deck this session views
    len: usize,
}

impl Session {
    /// Start a fresh session over a deck of `len` cards: first card, front
    /// face, unshuffled
    pub fn new(len: usize) -> Self {
        Self {
            position: if len == 0 { 0 } else { 1 },
            on_front: true,
            shuffled: false,
            saved_position: 1,
            len,
        }
    }

    /// Reinitialize after a new deck replaces the old one
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }

    /// Move one card backward or forward, saturating at the ends
    pub fn advance(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }
        match direction {
            Direction::Forward if self.position < self.len => self.position += 1,
            Direction::Backward if self.position > 1 => self.position -= 1,
            _ => {}
        }
    }

    /// Turn the current card over
    pub fn flip(&mut self) {
        if self.len == 0 {
            return;
        }
        self.on_front = !self.on_front;
    }

    /// Toggle between the persistent and working orderings
    ///
    /// Toggling on shuffles the working order, remembers the current
    /// position, and jumps to card 1. Toggling off only restores the saved
    /// position; the working order keeps its permutation and is re-shuffled
    /// on the next toggle-on.
    pub fn toggle_shuffle(&mut self, deck: &mut CardSet) {
        if self.len == 0 {
            return;
        }
        if self.shuffled {
            self.position = self.saved_position;
            self.shuffled = false;
        } else {
            deck.shuffle();
            self.saved_position = self.position;
            self.position = 1;
            self.shuffled = true;
        }
    }

    /// Text of the face currently showing, or `None` on an empty deck
    pub fn display_text<'a>(&self, deck: &'a CardSet) -> Option<&'a str> {
        let card = deck.card(self.position, self.shuffled)?;
        Some(if self.on_front { card.front() } else { card.back() })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn on_front(&self) -> bool {
        self.on_front
    }

    pub fn shuffled(&self) -> bool {
        self.shuffled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> CardSet {
        CardSet::parse("a|1\nb|2\nc|3", '|')
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new(3);
        assert_eq!(session.position(), 1);
        assert!(session.on_front());
        assert!(!session.shuffled());
    }

    #[test]
    fn test_no_wraparound() {
        let mut session = Session::new(3);

        session.advance(Direction::Backward);
        assert_eq!(session.position(), 1);

        session.advance(Direction::Forward);
        session.advance(Direction::Forward);
        assert_eq!(session.position(), 3);
        session.advance(Direction::Forward);
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn test_flip_twice_restores_face() {
        let mut session = Session::new(3);
        session.flip();
        assert!(!session.on_front());
        session.flip();
        assert!(session.on_front());
    }

    #[test]
    fn test_shuffle_toggle_restores_position() {
        let mut deck = deck();
        let mut session = Session::new(deck.len());

        session.advance(Direction::Forward);
        session.advance(Direction::Forward);
        assert_eq!(session.position(), 3);

        session.toggle_shuffle(&mut deck);
        assert!(session.shuffled());
        assert_eq!(session.position(), 1);

        session.toggle_shuffle(&mut deck);
        assert!(!session.shuffled());
        assert_eq!(session.position(), 3);
    }

    #[test]
    fn test_untoggle_keeps_working_permutation() {
        let mut deck = deck();
        let mut session = Session::new(deck.len());

        session.toggle_shuffle(&mut deck);
        let permutation = deck.working().to_vec();

        session.toggle_shuffle(&mut deck);
        assert_eq!(deck.working(), permutation.as_slice());
    }

    #[test]
    fn test_empty_deck_all_noops() {
        let mut deck = CardSet::new();
        let mut session = Session::new(0);

        session.advance(Direction::Forward);
        session.advance(Direction::Backward);
        session.flip();
        session.toggle_shuffle(&mut deck);

        assert_eq!(session.position(), 0);
        assert!(session.on_front());
        assert!(!session.shuffled());
        assert_eq!(session.display_text(&deck), None);
    }

    #[test]
    fn test_display_text_follows_face_and_position() {
        let deck = deck();
        let mut session = Session::new(deck.len());

        assert_eq!(session.display_text(&deck), Some("a"));
        session.flip();
        assert_eq!(session.display_text(&deck), Some("1"));
        session.flip();
        session.advance(Direction::Forward);
        assert_eq!(session.position(), 2);
        assert_eq!(session.display_text(&deck), Some("b"));
    }

    #[test]
    fn test_display_text_uses_working_order_while_shuffled() {
        let mut deck = deck();
        let mut session = Session::new(deck.len());

        session.toggle_shuffle(&mut deck);
        assert_eq!(session.display_text(&deck), Some(deck.working()[0].front()));
    }

    #[test]
    fn test_reset_after_new_deck() {
        let mut deck = deck();
        let mut session = Session::new(deck.len());
        session.advance(Direction::Forward);
        session.flip();
        session.toggle_shuffle(&mut deck);

        session.reset(5);
        assert_eq!(session.position(), 1);
        assert_eq!(session.len(), 5);
        assert!(session.on_front());
        assert!(!session.shuffled());
    }
}
