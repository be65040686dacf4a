//! Projection of a dealt hand into visual elements.

pub mod html;
pub mod layout;
pub mod view;

pub use layout::{SEAT_POSITIONS, SeatPosition};
pub use view::{CardFace, SeatView, TableRegions, render_community, render_seats, render_summary};
