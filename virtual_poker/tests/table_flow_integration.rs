//! End-to-end table scenarios driven through `TableSession` events.

use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashSet;
use virtual_poker::{
    CardFace, PageLocation, QrContent, QrError, QrOptions, QrRenderer, Role, TableEvent,
    TableSession,
    session::QR_UNAVAILABLE,
};

struct StubRenderer;

impl QrRenderer for StubRenderer {
    fn render(&self, text: &str, options: &QrOptions) -> Result<String, QrError> {
        Ok(format!("qr:{}:{text}", options.size))
    }
}

fn open_table(seed: u64) -> TableSession {
    TableSession::with_rng(
        PageLocation::new(Some("https://cards.example".into()), "/index.html"),
        "1",
        StdRng::seed_from_u64(seed),
    )
    .expect("full deck")
}

#[test]
fn test_three_humans_new_hand() {
    let mut table = open_table(1);
    table
        .handle(TableEvent::ChangeHumanCount("3".into()), None)
        .expect("deal");
    table.handle(TableEvent::NewHand, None).expect("deal");

    let names: Vec<_> = table.hand().players.iter().map(|p| p.name.clone()).collect();
    assert_eq!(names[..3], ["You 1", "You 2", "You 3"]);
    assert_eq!(names[3..], ["Nova", "Maverick", "Jinx"]);
    assert!(
        table.hand().players[3..]
            .iter()
            .all(|p| p.role == Role::Bot)
    );
    assert!(table.hand().players.iter().all(|p| p.cards.len() == 2));
    assert_eq!(table.hand().community.len(), 5);
    assert_eq!(table.regions().summary.len(), 7);
    assert_eq!(table.human_input(), "3");
}

#[test]
fn test_every_hand_partitions_the_deck() {
    let mut table = open_table(2);
    for input in ["1", "2", "3", "4", "5", "6", "0", "42", "x"] {
        table.set_human_count(input).expect("deal");
        let hand = table.hand();
        let dealt: HashSet<_> = hand.dealt_cards().collect();
        assert_eq!(dealt.len(), 17, "input {input}");
        assert_eq!(hand.deck.len(), 35);
        assert!(hand.deck.remaining().iter().all(|c| !dealt.contains(c)));
    }
}

#[test]
fn test_seats_hide_bot_cards_but_summary_shows_them() {
    let mut table = open_table(3);
    table.set_human_count("2").expect("deal");

    let regions = table.regions();
    for (seat, player) in regions.seats.iter().zip(&table.hand().players) {
        match player.role {
            Role::Human => {
                let shown: Vec<_> = seat
                    .cards
                    .iter()
                    .filter_map(|face| match face {
                        CardFace::Up(card) => Some(*card),
                        CardFace::Down { .. } => None,
                    })
                    .collect();
                assert_eq!(shown, player.cards);
            }
            Role::Bot => {
                assert!(seat.cards.iter().all(|f| matches!(f, CardFace::Down { .. })));
            }
        }
    }

    let bot = &table.hand().players[5];
    let line = &regions.summary[5];
    assert!(line.starts_with(&bot.name));
    assert!(line.contains(&bot.cards[0].to_string()));
    assert!(line.contains(&bot.cards[1].to_string()));
}

#[test]
fn test_rendering_twice_is_stable() {
    let table = open_table(4);
    let mut regions = table.regions().clone();
    regions.render(table.hand());
    regions.render(table.hand());
    assert_eq!(&regions, table.regions());
}

#[test]
fn test_share_link_and_qr_panel() {
    let mut table = open_table(5);
    let url = table.share_url();
    assert!(url.starts_with("https://cards.example/index.html?table="));
    let id = url.split("table=").nth(1).expect("query value");
    assert!(!id.is_empty());
    assert_eq!(id, table.table_id().as_str());

    table.handle(TableEvent::ToggleQr, Some(&StubRenderer)).expect("toggle");
    assert!(table.qr_visible());
    let panel = table.qr_panel().expect("panel");
    assert_eq!(panel.url, url);
    assert_eq!(panel.content, QrContent::Code(format!("qr:180:{url}")));

    table.handle(TableEvent::ToggleQr, None).expect("toggle");
    assert!(!table.qr_visible());

    table.new_hand().expect("deal");
    table.handle(TableEvent::ToggleQr, None).expect("toggle");
    let panel = table.qr_panel().expect("panel");
    assert_eq!(panel.url, url);
    assert_eq!(panel.content, QrContent::Unavailable(QR_UNAVAILABLE.into()));
}

#[test]
fn test_hand_serializes_to_json() {
    let table = open_table(6);
    let json = serde_json::to_value(table.hand()).expect("serialize");
    assert_eq!(json["players"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["community"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["players"][0]["role"], "human");
}
