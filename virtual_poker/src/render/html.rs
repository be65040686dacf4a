//! HTML rendering of the table regions.
//!
//! Produces the same element structure a browser page would build: a
//! `seats` block per seat, a `community` row and a `handSummary` list. The
//! snapshot page wraps them with a minimal stylesheet so it opens on its
//! own.

use super::view::{CardFace, SeatView, TableRegions};
use crate::game::{Card, Color};
use crate::session::{QrContent, QrPanel};

const STYLE: &str = "\
body { background: #0b3d2e; color: #f4f4f4; font-family: sans-serif; }
.table { position: relative; width: 760px; height: 420px; margin: 40px auto;
  border-radius: 50%; background: #146b4a; border: 12px solid #4a2c16; }
.seat { position: absolute; text-align: center; }
.name { font-weight: bold; }
.stack { font-size: 12px; opacity: 0.8; }
.cards, #community { display: flex; gap: 4px; justify-content: center; }
#community { position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); }
.card { width: 36px; height: 52px; border-radius: 4px; background: #fff; color: #111;
  display: flex; flex-direction: column; align-items: center; justify-content: center; }
.card.red { color: #c62828; }
.card.back { background: repeating-linear-gradient(45deg, #1e3a8a, #1e3a8a 4px, #3b82f6 4px, #3b82f6 8px); }
.qr-panel { display: none; text-align: center; }
.qr-panel.active { display: block; }
";

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn face_up(card: &Card) -> String {
    let class = match card.color() {
        Color::Red => "card red",
        Color::Black => "card",
    };
    format!(
        r#"<div class="{class}"><span>{}</span><span class="suit">{}</span></div>"#,
        card.rank, card.suit
    )
}

pub fn card(face: &CardFace) -> String {
    match face {
        CardFace::Up(card) => face_up(card),
        CardFace::Down { dimmed: false } => r#"<div class="card back"></div>"#.to_string(),
        CardFace::Down { dimmed: true } => format!(
            r#"<div class="card back" style="opacity: {};"></div>"#,
            face.opacity()
        ),
    }
}

fn seat(view: &SeatView) -> String {
    let cards: String = view.cards.iter().map(card).collect();
    format!(
        r#"<div class="seat" style="{}"><div class="name">{}</div><div class="cards">{cards}</div><div class="stack">{}</div></div>"#,
        view.position.css(),
        escape(&view.name),
        escape(&view.caption),
    )
}

/// Inner HTML of the seats region.
pub fn seats(views: &[SeatView]) -> String {
    views.iter().map(seat).collect()
}

/// Inner HTML of the community region.
pub fn community(faces: &[CardFace]) -> String {
    faces.iter().map(card).collect()
}

/// Inner HTML of the summary list.
pub fn summary(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| format!("<li>{}</li>", escape(line)))
        .collect()
}

/// The QR panel. Code content is trusted renderer output (e.g. SVG) and
/// is inserted as is; everything else is escaped.
pub fn qr_panel(panel: Option<&QrPanel>, visible: bool) -> String {
    let (code, link) = match panel {
        Some(QrPanel {
            url,
            content: QrContent::Code(code),
        }) => (code.clone(), escape(url)),
        Some(QrPanel {
            url,
            content: QrContent::Unavailable(notice),
        }) => (escape(notice), escape(url)),
        None => (String::new(), String::new()),
    };
    format!(
        r#"<div id="qrPanel" class="qr-panel{}" aria-hidden="{}"><div id="qrCode">{code}</div><p id="qrLink">{link}</p></div>"#,
        if visible { " active" } else { "" },
        !visible,
    )
}

/// A standalone page showing the whole table.
pub fn snapshot_page(
    title: &str,
    regions: &TableRegions,
    panel: Option<&QrPanel>,
    qr_visible: bool,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{STYLE}</style>
</head>
<body>
<div class="table">
<div id="seats">{seats}</div>
<div id="community">{community}</div>
</div>
<ul id="handSummary">{summary}</ul>
{qr}
</body>
</html>
"#,
        title = escape(title),
        seats = seats(&regions.seats),
        community = community(&regions.community),
        summary = summary(&regions.summary),
        qr = qr_panel(panel, qr_visible),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Deck, HumanCount, Rank, Suit, deal_hand, setup_players};
    use crate::session::QR_UNAVAILABLE;

    fn regions() -> TableRegions {
        let hand = deal_hand(setup_players(HumanCount::clamp(2)), Deck::default())
            .expect("full deck");
        TableRegions::from(&hand)
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("You 1 → A♠"), "You 1 → A♠");
    }

    #[test]
    fn test_card_markup() {
        assert_eq!(
            card(&CardFace::Up(Card::new(Rank::Ten, Suit::Heart))),
            r#"<div class="card red"><span>10</span><span class="suit">♥</span></div>"#
        );
        assert_eq!(
            card(&CardFace::Up(Card::new(Rank::King, Suit::Club))),
            r#"<div class="card"><span>K</span><span class="suit">♣</span></div>"#
        );
        assert_eq!(
            card(&CardFace::Down { dimmed: true }),
            r#"<div class="card back" style="opacity: 0.7;"></div>"#
        );
    }

    #[test]
    fn test_seats_markup() {
        let html = seats(&regions().seats);
        assert_eq!(html.matches(r#"<div class="seat""#).count(), 6);
        assert_eq!(html.matches("card back").count(), 8);
        assert_eq!(html.matches("opacity: 0.7").count(), 4);
        assert!(html.contains("top: 12%; left: 50%"));
        assert!(html.contains(r#"<div class="name">You 2</div>"#));
        assert!(html.contains(r#"<div class="stack">Bot ready</div>"#));
    }

    #[test]
    fn test_summary_markup_is_escaped() {
        let html = summary(&["<b>".to_string(), "Board: A♠".to_string()]);
        assert_eq!(html, "<li>&lt;b&gt;</li><li>Board: A♠</li>");
    }

    #[test]
    fn test_qr_panel_states() {
        let hidden = qr_panel(None, false);
        assert!(hidden.contains(r#"class="qr-panel""#));
        assert!(hidden.contains(r#"aria-hidden="true""#));

        let fallback = QrPanel {
            url: "http://localhost:8080/?table=abcd1234".into(),
            content: QrContent::Unavailable(QR_UNAVAILABLE.into()),
        };
        let shown = qr_panel(Some(&fallback), true);
        assert!(shown.contains(r#"class="qr-panel active""#));
        assert!(shown.contains(r#"aria-hidden="false""#));
        assert!(shown.contains(QR_UNAVAILABLE));
        assert!(shown.contains("?table=abcd1234"));

        let code = QrPanel {
            url: "u".into(),
            content: QrContent::Code("<svg></svg>".into()),
        };
        assert!(qr_panel(Some(&code), true).contains(r#"<div id="qrCode"><svg></svg></div>"#));
    }

    #[test]
    fn test_snapshot_page() {
        let page = snapshot_page("Table <1>", &regions(), None, false);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Table &lt;1&gt;</title>"));
        assert_eq!(page.matches("<li>").count(), 7);
        assert!(page.contains(r#"<div id="community">"#));
    }
}
