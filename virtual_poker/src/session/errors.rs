//! Error types for the session module

use thiserror::Error;

/// Errors a QR renderer may report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Text doesn't fit in a code at the requested error correction level
    #[error("Data too long for a QR code: {0} bytes")]
    DataTooLong(usize),

    /// Any other renderer failure
    #[error("QR rendering failed: {0}")]
    Render(String),
}
