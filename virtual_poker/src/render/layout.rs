//! Fixed seat placement around the oval table.

use serde::{Deserialize, Serialize};

use crate::game::TABLE_SEATS;

/// Where a seat's block is anchored, in percent of the table area.
///
/// `translate_x`/`translate_y` shift the block relative to its own size so
/// that seats on the rim sit over the edge rather than inside it.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SeatPosition {
    pub top: u8,
    pub left: u8,
    pub translate_x: i8,
    pub translate_y: i8,
}

impl SeatPosition {
    const fn new(top: u8, left: u8, translate_x: i8, translate_y: i8) -> Self {
        Self {
            top,
            left,
            translate_x,
            translate_y,
        }
    }

    /// Inline CSS for an absolutely positioned element.
    pub fn css(&self) -> String {
        format!(
            "top: {}%; left: {}%; transform: translate({}%, {}%);",
            self.top, self.left, self.translate_x, self.translate_y
        )
    }
}

/// Seat 0 is top centre, then clockwise.
pub const SEAT_POSITIONS: [SeatPosition; TABLE_SEATS] = [
    SeatPosition::new(12, 50, -50, -20),
    SeatPosition::new(28, 82, -50, -20),
    SeatPosition::new(68, 82, -50, -20),
    SeatPosition::new(84, 50, -50, -80),
    SeatPosition::new(68, 18, -50, -20),
    SeatPosition::new(28, 18, -50, -20),
];
