//! Error types for the game module

use thiserror::Error;

/// Errors raised while dealing a hand
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealError {
    /// The deck can't cover every hole card plus the board
    #[error("Deck exhausted: needed {needed} cards, {remaining} remaining")]
    DeckExhausted { needed: usize, remaining: usize },
}
