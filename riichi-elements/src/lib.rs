//! Building blocks of Japanese Riichi Mahjong: tiles, melds, and hands (C1/C2).
//!
//! This crate is deliberately inert: no rule knowledge lives here, only identity and shape.
//! Yaku/fu/scoring logic lives in the `riichi` crate; shape decomposition in `riichi-decomp`.

pub mod error;
pub mod hand;
pub mod meld;
pub mod player;
pub mod tile;

/// Re-exports the common vocabulary so downstream crates can `use riichi_elements::prelude::*;`.
pub mod prelude {
    pub use crate::error::ElementError;
    pub use crate::hand::Hand;
    pub use crate::meld::{Call, Meld};
    pub use crate::player::{Player, Wind, ALL_PLAYERS, P0, P1, P2, P3};
    pub use crate::tile::{t, Tile, TileId, TileKind, SuitFamily};
}
