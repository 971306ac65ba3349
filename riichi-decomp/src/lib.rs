//! Japanese Riichi Mahjong hand-shape decomposition and wait analysis (C3/C4).
//!
//! [`decomposer::find_decompositions`] enumerates every valid way a completed hand can be
//! partitioned into a pair and four groups (or seven pairs, or thirteen orphans); [`wait`]
//! answers tenpai/wait/furiten/riichi-eligibility questions over a 13-tile hand.

pub mod decomposer;
pub mod irregular;
pub mod regular;
pub mod wait;

pub mod prelude {
    pub use crate::decomposer::{find_decompositions, is_winning_shape, AgariLocation, Decomposition, WaitShape};
    pub use crate::irregular::{detect_seven_pairs, detect_thirteen_orphans, SevenPairsShape, ThirteenOrphansShape};
    pub use crate::wait::{
        can_declare_riichi, classify_furiten, enumerate_waits, is_tenpai,
        DeclinedRonRecord, FuritenKind, RiichiOption, RiichiState,
    };
}
