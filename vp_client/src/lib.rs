//! Internal modules for the virtual poker client.
//!
//! This library provides command parsing, configuration, logging, QR
//! renderers, one-shot output and the TUI used by the vp_client binary.

pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod qr;
pub mod tui_app;
