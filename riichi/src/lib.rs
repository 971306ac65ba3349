//! Japanese Riichi Mahjong hand evaluation: yaku, fu, and scoring (C5-C8), built on
//! `riichi-elements` (tiles/melds/hands) and `riichi-decomp` (shape decomposition, waits,
//! furiten, riichi eligibility).
//!
//! Re-exports the full external interface (spec §6) from one place so a caller can depend on
//! this crate alone.

pub mod deck;
pub mod evaluate;
pub mod fu;
pub mod rules;
pub mod score;
pub mod win_context;
pub mod yaku;
pub mod yaku_detect;

pub mod prelude {
    pub use riichi_decomp::prelude::*;
    pub use riichi_elements::prelude::*;

    pub use crate::deck::generate_deck;
    pub use crate::evaluate::{evaluate, NotWinningReason, Outcome, WinningHand};
    pub use crate::fu::{calc_fu, FuBreakdown, FuDetail};
    pub use crate::rules::Rules;
    pub use crate::score::{base_points, compute_payment, yakuman_base_points, Payment};
    pub use crate::win_context::{AgariKind, DoraIndicators, WinContext};
    pub use crate::yaku::Yaku;
}
