//! Table roster: who sits in each of the fixed seats.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::entities::Card;

/// Number of seats at the table. The roster always fills every seat.
pub const TABLE_SEATS: usize = 6;

/// Names handed out to bots in seat order.
pub const BOT_NAMES: [&str; 8] = [
    "Nova", "Maverick", "Jinx", "Echo", "Orbit", "Vega", "Blaze", "Rogue",
];

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Bot,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Human => write!(f, "human"),
            Role::Bot => write!(f, "bot"),
        }
    }
}

/// Number of human seats, always within `1..=TABLE_SEATS`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct HumanCount(u8);

impl HumanCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = TABLE_SEATS as u8;

    /// Clamp any integer into the valid range.
    pub fn clamp(n: i64) -> Self {
        Self(n.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// Normalize free-form user input. Never fails: unparseable input
    /// becomes the minimum, and fractional values round up since a
    /// partial human still takes a seat. Unsigned `0x`, `0o` and `0b`
    /// literals are read in their radix.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Self::clamp(n);
        }
        if let Some(n) = parse_prefixed(trimmed) {
            return Self::clamp(n);
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_nan() => Self::default(),
            Ok(n) if n == f64::INFINITY => Self(Self::MAX),
            Ok(n) if n == f64::NEG_INFINITY => Self(Self::MIN),
            Ok(n) => Self::clamp(n.ceil() as i64),
            Err(_) => Self::default(),
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for HumanCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for HumanCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    /// Hole cards. Empty until dealt, then exactly two.
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            cards: Vec::with_capacity(2),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.role == Role::Bot
    }
}

/// Parse a radix-prefixed literal. Too many digits saturate.
fn parse_prefixed(input: &str) -> Option<i64> {
    let radix = match input.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &input[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX))
}

/// Seat `count` humans followed by bots until the table is full.
pub fn setup_players(count: HumanCount) -> Vec<Player> {
    let humans = count.get();
    (0..TABLE_SEATS)
        .map(|seat| {
            if seat < humans {
                Player::new(format!("You {}", seat + 1), Role::Human)
            } else {
                Player::new(bot_name(seat - humans, seat), Role::Bot)
            }
        })
        .collect()
}

/// Name for the `nth` bot, who sits in `seat`. Falls back to a seat
/// based placeholder once the pool runs out.
fn bot_name(nth: usize, seat: usize) -> String {
    BOT_NAMES
        .get(nth)
        .map_or_else(|| format!("Bot {}", seat + 1), |name| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role_counts(players: &[Player]) -> (usize, usize) {
        let bots = players.iter().filter(|p| p.is_bot()).count();
        (players.len() - bots, bots)
    }

    #[test]
    fn test_parse_clamps_out_of_range() {
        assert_eq!(HumanCount::parse("0").get(), 1);
        assert_eq!(HumanCount::parse("-4").get(), 1);
        assert_eq!(HumanCount::parse("6").get(), 6);
        assert_eq!(HumanCount::parse("9").get(), 6);
        assert_eq!(HumanCount::parse("99999999999999999999").get(), 6);
    }

    #[test]
    fn test_parse_non_numeric_defaults_to_one() {
        assert_eq!(HumanCount::parse("abc").get(), 1);
        assert_eq!(HumanCount::parse("").get(), 1);
        assert_eq!(HumanCount::parse("   ").get(), 1);
        assert_eq!(HumanCount::parse("NaN").get(), 1);
    }

    #[test]
    fn test_parse_fractional_and_infinite() {
        assert_eq!(HumanCount::parse("2.5").get(), 3);
        assert_eq!(HumanCount::parse(" 4 ").get(), 4);
        assert_eq!(HumanCount::parse("inf").get(), 6);
        assert_eq!(HumanCount::parse("-inf").get(), 1);
    }

    #[test]
    fn test_parse_radix_literals() {
        assert_eq!(HumanCount::parse("0x10").get(), 6);
        assert_eq!(HumanCount::parse("0b11").get(), 3);
        assert_eq!(HumanCount::parse("0o7").get(), 6);
        assert_eq!(HumanCount::parse(" 0X2 ").get(), 2);
        assert_eq!(HumanCount::parse("0x0").get(), 1);
        assert_eq!(HumanCount::parse("0xffffffffffffffffffff").get(), 6);
    }

    #[test]
    fn test_parse_malformed_radix_literals() {
        assert_eq!(HumanCount::parse("0x").get(), 1);
        assert_eq!(HumanCount::parse("0b12").get(), 1);
        assert_eq!(HumanCount::parse("0x-5").get(), 1);
        assert_eq!(HumanCount::parse("-0x5").get(), 1);
    }

    #[test]
    fn test_setup_zero_humans() {
        let players = setup_players(HumanCount::parse("0"));
        assert_eq!(players.len(), TABLE_SEATS);
        assert_eq!(role_counts(&players), (1, 5));
    }

    #[test]
    fn test_setup_all_humans() {
        for input in ["6", "9"] {
            let players = setup_players(HumanCount::parse(input));
            assert_eq!(role_counts(&players), (6, 0));
            assert_eq!(players[5].name, "You 6");
        }
    }

    #[test]
    fn test_setup_names() {
        let players = setup_players(HumanCount::clamp(3));
        let names: Vec<_> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["You 1", "You 2", "You 3", "Nova", "Maverick", "Jinx"]);
        assert!(players.iter().all(|p| p.cards.is_empty()));
    }

    #[test]
    fn test_bot_name_pool_fallback() {
        assert_eq!(bot_name(0, 1), "Nova");
        assert_eq!(bot_name(7, 9), "Rogue");
        assert_eq!(bot_name(8, 9), "Bot 10");
    }

    #[test]
    fn test_display_is_clamped_value() {
        assert_eq!(HumanCount::parse("12").to_string(), "6");
        assert_eq!(HumanCount::parse("abc").to_string(), "1");
    }
}
