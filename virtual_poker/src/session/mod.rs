//! Share link and QR panel for a table session.
//!
//! The link is cosmetic: it names the table but nothing on the other end
//! ever checks it.

pub mod errors;
pub mod link;
pub mod qr;

pub use errors::QrError;
pub use link::{DEFAULT_ORIGIN, PageLocation, TABLE_QUERY_KEY, TableId, share_url};
pub use qr::{ErrorCorrection, QR_UNAVAILABLE, QrContent, QrOptions, QrPanel, QrRenderer};
