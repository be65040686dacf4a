//! Dealing hole cards and the board from a shuffled deck.

use serde::{Deserialize, Serialize};

use super::{
    entities::{Card, Deck},
    errors::DealError,
    roster::Player,
};

/// Hole cards per player.
pub const HOLE_CARDS: usize = 2;

/// Community cards on the board.
pub const BOARD_CARDS: usize = 5;

/// The result of a single deal. Nothing carries over to the next hand.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DealtHand {
    pub players: Vec<Player>,
    pub community: Vec<Card>,
    /// Cards left undealt.
    pub deck: Deck,
}

impl DealtHand {
    /// Every dealt card: hole cards in seat order, then the board.
    pub fn dealt_cards(&self) -> impl Iterator<Item = &Card> {
        self.players
            .iter()
            .flat_map(|player| player.cards.iter())
            .chain(self.community.iter())
    }
}

/// Deal two round-robin rounds of hole cards, then the board.
///
/// Every card comes off the top of `deck`, so no card can be dealt twice.
pub fn deal_hand(players: Vec<Player>, mut deck: Deck) -> Result<DealtHand, DealError> {
    let needed = players.len() * HOLE_CARDS + BOARD_CARDS;
    if deck.len() < needed {
        return Err(DealError::DeckExhausted {
            needed,
            remaining: deck.len(),
        });
    }

    let mut players: Vec<Player> = players
        .into_iter()
        .map(|mut player| {
            player.cards.clear();
            player
        })
        .collect();

    for _ in 0..HOLE_CARDS {
        for player in &mut players {
            player.cards.push(draw(&mut deck, needed)?);
        }
    }

    let community = (0..BOARD_CARDS)
        .map(|_| draw(&mut deck, needed))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "dealt {} hole cards and {} board cards, {} left in deck",
        players.len() * HOLE_CARDS,
        community.len(),
        deck.len()
    );

    Ok(DealtHand {
        players,
        community,
        deck,
    })
}

fn draw(deck: &mut Deck, needed: usize) -> Result<Card, DealError> {
    deck.deal_card().ok_or(DealError::DeckExhausted {
        needed,
        remaining: 0,
    })
}
