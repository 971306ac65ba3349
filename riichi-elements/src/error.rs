//! Invalid-input errors for tile/meld/hand construction (spec §7, "invalid input" category).
//!
//! These signal a programming error in the collaborator -- malformed shorthand, an
//! internally-inconsistent meld, duplicate instance ids -- never an ordinary "hand doesn't
//! win" outcome (that is [`crate::hand::Hand`]-agnostic and lives in `riichi::evaluate` as
//! `Outcome::NotWinning`).

use crate::tile::TileKind;

#[derive(Debug, thiserror::Error, Eq, PartialEq)]
pub enum ElementError {
    #[error("red-five flag set on non-rank-5 tile kind {0}")]
    InvalidRedFlag(TileKind),

    #[error("malformed tile shorthand")]
    MalformedShorthand,

    #[error("sequence tiles are not three consecutive same-suit numbers")]
    InvalidSequence,

    #[error("triplet/quad tiles do not all share the same suit and rank")]
    InvalidSameKindGroup,

    #[error("quad must have exactly four tiles, got {0}")]
    WrongQuadArity(usize),

    #[error("honor tiles cannot form a sequence")]
    HonorInSequence,

    #[error("duplicate tile instance id {0} in hand")]
    DuplicateInstanceId(u8),

    #[error("concealed tile count {concealed} inconsistent with {melds} melds (expected {expected})")]
    TileCountMismatch { concealed: usize, melds: usize, expected: usize },
}
