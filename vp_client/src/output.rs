//! One-shot output modes: summary text, JSON and an HTML snapshot.

use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use virtual_poker::{DealtHand, QrRenderer, TableRegions, TableSession, render::html};

/// Everything a one-shot run reports about the table.
#[derive(Debug, Serialize)]
pub struct TableSnapshot<'a> {
    pub table_id: &'a str,
    pub share_url: String,
    pub humans: &'a str,
    pub hand: &'a DealtHand,
    pub regions: &'a TableRegions,
}

impl<'a> TableSnapshot<'a> {
    pub fn new<R: Rng>(table: &'a TableSession<R>) -> Self {
        Self {
            table_id: table.table_id().as_str(),
            share_url: table.share_url(),
            humans: table.human_input(),
            hand: table.hand(),
            regions: table.regions(),
        }
    }
}

/// Summary lines followed by the share link.
pub fn summary_text<R: Rng>(table: &TableSession<R>) -> String {
    let mut lines = table.regions().summary.clone();
    lines.push(format!("Share: {}", table.share_url()));
    lines.join("\n")
}

pub fn hand_json<R: Rng>(table: &TableSession<R>) -> Result<String> {
    serde_json::to_string_pretty(&TableSnapshot::new(table)).context("Failed to serialize hand")
}

/// Write a standalone page of the current table with the QR panel open.
pub fn write_html<R: Rng>(
    table: &mut TableSession<R>,
    qr: Option<&dyn QrRenderer>,
    path: &Path,
) -> Result<()> {
    if !table.qr_visible() {
        table.toggle_qr(qr);
    }
    let title = format!("Poker table {}", table.table_id());
    let page = html::snapshot_page(
        &title,
        table.regions(),
        table.qr_panel(),
        table.qr_visible(),
    );
    std::fs::write(path, page)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
    tracing::info!(path = %path.display(), "Wrote table snapshot");
    Ok(())
}
