//! View model for a dealt hand.
//!
//! Rendering keeps no state between calls: every `render_*` function is a
//! pure projection, and [`TableRegions`] replaces a whole region at a time.

use serde::{Deserialize, Serialize};

use super::layout::{SEAT_POSITIONS, SeatPosition};
use crate::game::{Card, DealtHand, Player, Role};

const HUMAN_CAPTION: &str = "Stack: $1200";
const BOT_CAPTION: &str = "Bot ready";

/// How a single card is shown.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CardFace {
    Up(Card),
    /// Face down. A dimmed back is the bot's second card, drawn at reduced
    /// opacity as a "peek" cue; it carries no information.
    Down { dimmed: bool },
}

impl CardFace {
    /// Opacity the card should be drawn with.
    pub fn opacity(&self) -> f32 {
        match self {
            CardFace::Down { dimmed: true } => 0.7,
            _ => 1.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SeatView {
    pub seat: usize,
    pub position: SeatPosition,
    pub name: String,
    pub role: Role,
    pub cards: Vec<CardFace>,
    pub caption: String,
}

fn player_faces(player: &Player) -> Vec<CardFace> {
    player
        .cards
        .iter()
        .enumerate()
        .map(|(idx, card)| match player.role {
            Role::Human => CardFace::Up(*card),
            Role::Bot => CardFace::Down { dimmed: idx == 1 },
        })
        .collect()
}

/// One block per seat, placed by seat index only.
pub fn render_seats(players: &[Player]) -> Vec<SeatView> {
    players
        .iter()
        .zip(SEAT_POSITIONS)
        .enumerate()
        .map(|(seat, (player, position))| SeatView {
            seat,
            position,
            name: player.name.clone(),
            role: player.role,
            cards: player_faces(player),
            caption: match player.role {
                Role::Human => HUMAN_CAPTION,
                Role::Bot => BOT_CAPTION,
            }
            .to_string(),
        })
        .collect()
}

/// The whole board, face up.
pub fn render_community(cards: &[Card]) -> Vec<CardFace> {
    cards.iter().copied().map(CardFace::Up).collect()
}

fn card_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text hand summary: one line per player, then the board.
///
/// This lists bot hole cards too. It's meant for a moderator view, not
/// for players.
pub fn render_summary(players: &[Player], community: &[Card]) -> Vec<String> {
    players
        .iter()
        .map(|player| format!("{} → {}", player.name, card_list(&player.cards)))
        .chain(std::iter::once(format!("Board: {}", card_list(community))))
        .collect()
}

/// The three visual regions of the table.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct TableRegions {
    pub seats: Vec<SeatView>,
    pub community: Vec<CardFace>,
    pub summary: Vec<String>,
}

impl TableRegions {
    pub fn set_seats(&mut self, players: &[Player]) {
        self.seats = render_seats(players);
    }

    pub fn set_community(&mut self, cards: &[Card]) {
        self.community = render_community(cards);
    }

    pub fn set_summary(&mut self, players: &[Player], community: &[Card]) {
        self.summary = render_summary(players, community);
    }

    /// Re-render every region from `hand`.
    pub fn render(&mut self, hand: &DealtHand) {
        self.set_seats(&hand.players);
        self.set_community(&hand.community);
        self.set_summary(&hand.players, &hand.community);
    }
}

impl From<&DealtHand> for TableRegions {
    fn from(hand: &DealtHand) -> Self {
        let mut regions = Self::default();
        regions.render(hand);
        regions
    }
}
