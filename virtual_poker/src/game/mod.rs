//! Cards, roster and dealing.
//!
//! Everything here is pure apart from the injected random source used by
//! the shuffle:
//! - [`entities`]: suits, ranks, cards and the deck stack
//! - [`functional`]: the Fisher-Yates shuffle
//! - [`roster`]: human/bot seat assignment from a requested human count
//! - [`dealer`]: two round-robin hole card rounds and a five card board

pub mod dealer;
pub mod entities;
pub mod errors;
pub mod functional;
pub mod roster;

pub use dealer::{BOARD_CARDS, DealtHand, HOLE_CARDS, deal_hand};
pub use entities::{Card, Color, Deck, Rank, Suit, build_deck};
pub use errors::DealError;
pub use functional::shuffle;
pub use roster::{BOT_NAMES, HumanCount, Player, Role, TABLE_SEATS, setup_players};
