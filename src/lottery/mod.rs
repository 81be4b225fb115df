//! Giveaway support: one entry per commenter, then a uniform draw
//!
//! - [`dedup`] - collapse comments to one per display name
//! - [`draw`] - sample winners without replacement

pub mod dedup;
pub mod draw;

pub use dedup::deduplicate;
pub use draw::{draw_winners, draw_winners_with_rng};
