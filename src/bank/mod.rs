//! Score keeping: each player's reserve and captured counts.

mod reserve;

pub use reserve::{Account, Counter, ReserveBank};
