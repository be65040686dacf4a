//! Table controller.
//!
//! [`TableSession`] owns everything that lives for the lifetime of one
//! open table: the session identifier, the human-count input as it is
//! displayed, the random source, the current hand and its rendered
//! regions, and the QR panel state. Each new deal replaces the hand and the
//! regions wholesale.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    errors::TableError,
    game::{Deck, DealtHand, HumanCount, deal_hand, setup_players},
    render::TableRegions,
    session::{PageLocation, QrOptions, QrPanel, QrRenderer, TableId, share_url},
};

/// User actions the table reacts to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TableEvent {
    NewHand,
    /// The human-count input changed. Also deals a new hand.
    ChangeHumanCount(String),
    ToggleQr,
}

pub struct TableSession<R = StdRng> {
    table_id: TableId,
    location: PageLocation,
    human_input: String,
    rng: R,
    hand: DealtHand,
    regions: TableRegions,
    qr_visible: bool,
    qr_panel: Option<QrPanel>,
    qr_options: QrOptions,
}

impl TableSession<StdRng> {
    /// Open a table seeded from the OS and deal the first hand.
    pub fn new(location: PageLocation, human_input: &str) -> Result<Self, TableError> {
        Self::with_rng(location, human_input, StdRng::from_os_rng())
    }
}

impl<R: Rng> TableSession<R> {
    pub fn with_rng(
        location: PageLocation,
        human_input: &str,
        mut rng: R,
    ) -> Result<Self, TableError> {
        let (count, hand) = deal_new(human_input, &mut rng)?;
        let table_id = TableId::generate();
        log::info!(
            "Opened table {table_id} with {count} human seat(s) at {}",
            share_url(&location, &table_id)
        );

        Ok(Self {
            table_id,
            location,
            human_input: count.to_string(),
            rng,
            regions: TableRegions::from(&hand),
            hand,
            qr_visible: false,
            qr_panel: None,
            qr_options: QrOptions::default(),
        })
    }

    pub fn with_qr_options(mut self, options: QrOptions) -> Self {
        self.qr_options = options;
        self
    }

    /// Dispatch a user action.
    pub fn handle(
        &mut self,
        event: TableEvent,
        qr: Option<&dyn QrRenderer>,
    ) -> Result<(), TableError> {
        match event {
            TableEvent::NewHand => self.new_hand(),
            TableEvent::ChangeHumanCount(input) => self.set_human_count(&input),
            TableEvent::ToggleQr => {
                self.toggle_qr(qr);
                Ok(())
            }
        }
    }

    /// Re-derive the roster from the current input, deal from a fresh
    /// shuffled deck and re-render every region.
    pub fn new_hand(&mut self) -> Result<(), TableError> {
        let (count, hand) = deal_new(&self.human_input, &mut self.rng)?;
        self.human_input = count.to_string();
        self.regions.render(&hand);
        self.hand = hand;
        Ok(())
    }

    pub fn set_human_count(&mut self, input: &str) -> Result<(), TableError> {
        self.human_input = input.to_string();
        self.new_hand()
    }

    /// Flip the QR panel. Opening it rebuilds the panel from the current
    /// share link; returns whether the panel is now visible.
    pub fn toggle_qr(&mut self, qr: Option<&dyn QrRenderer>) -> bool {
        self.qr_visible = !self.qr_visible;
        if self.qr_visible {
            self.qr_panel = Some(QrPanel::build(self.share_url(), qr, &self.qr_options));
        }
        log::info!(
            "QR panel {} for table {}",
            if self.qr_visible { "opened" } else { "closed" },
            self.table_id
        );
        self.qr_visible
    }

    pub fn table_id(&self) -> &TableId {
        &self.table_id
    }

    pub fn location(&self) -> &PageLocation {
        &self.location
    }

    pub fn share_url(&self) -> String {
        share_url(&self.location, &self.table_id)
    }

    /// The human-count input as displayed, always a clamped value after a
    /// deal.
    pub fn human_input(&self) -> &str {
        &self.human_input
    }

    pub fn hand(&self) -> &DealtHand {
        &self.hand
    }

    pub fn regions(&self) -> &TableRegions {
        &self.regions
    }

    pub fn qr_visible(&self) -> bool {
        self.qr_visible
    }

    /// The panel built when the QR view was last opened.
    pub fn qr_panel(&self) -> Option<&QrPanel> {
        self.qr_panel.as_ref()
    }
}

fn deal_new<R: Rng + ?Sized>(
    human_input: &str,
    rng: &mut R,
) -> Result<(HumanCount, DealtHand), TableError> {
    let count = HumanCount::parse(human_input);
    let hand = deal_hand(setup_players(count), Deck::shuffled(rng))?;
    Ok((count, hand))
}
