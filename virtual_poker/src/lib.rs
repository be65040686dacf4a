//! # Virtual Poker
//!
//! A virtual poker table: build a deck, deal hole cards and a board to a
//! fixed six-seat mix of humans and bots, and project the result into
//! positioned visual elements around an oval table.
//!
//! There is no betting, hand evaluation or turn order. A hand is dealt and
//! shown in full, and the next deal starts from a fresh deck.
//!
//! ## Core Modules
//!
//! - [`game`]: cards, shuffle, roster setup and the dealer
//! - [`render`]: seat layout, the view model and HTML output
//! - [`session`]: the table identifier, share link and QR panel
//! - [`table`]: the controller that owns a table's state
//!
//! ## Example
//!
//! ```
//! use virtual_poker::{PageLocation, TableEvent, TableSession};
//!
//! let mut table = TableSession::new(PageLocation::default(), "3").unwrap();
//! assert_eq!(table.regions().summary.len(), 7);
//!
//! table.handle(TableEvent::ChangeHumanCount("9".into()), None).unwrap();
//! assert_eq!(table.human_input(), "6");
//! assert!(table.share_url().contains("?table="));
//! ```

/// Cards, roster and dealing.
pub mod game;
pub use game::{
    BOARD_CARDS, BOT_NAMES, Card, Color, DealError, DealtHand, Deck, HOLE_CARDS, HumanCount,
    Player, Rank, Role, Suit, TABLE_SEATS, build_deck, deal_hand, setup_players, shuffle,
};

/// Seat layout and rendering.
pub mod render;
pub use render::{CardFace, SEAT_POSITIONS, SeatPosition, SeatView, TableRegions};

/// Share link and QR panel.
pub mod session;
pub use session::{
    PageLocation, QrContent, QrError, QrOptions, QrPanel, QrRenderer, TableId, share_url,
};

pub mod errors;
pub use errors::TableError;

pub mod table;
pub use table::{TableEvent, TableSession};
