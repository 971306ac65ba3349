//! [`Meld`] (副露): a sequence, triplet, or quad group, either concealed or called.
//!
//! A single closed sum type serves two roles (spec §3): the declared-meld list hanging off a
//! [`crate::hand::Hand`] (chi/pon/kan), and a completed group inside a decomposition (where a
//! concealed triplet -- [`Meld::TripletConcealed`], ankou -- can appear even though it was never
//! "declared"). Each variant carries exactly the fields its fu/yaku rules need, per the
//! sum-type redesign in spec §9.

use core::fmt::{Display, Formatter};

use crate::error::ElementError;
use crate::player::Player;
use crate::tile::Tile;

/// Provenance of a called meld: who discarded the tile, and which physical tile it was.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Call {
    pub from: Player,
    pub called_tile: Tile,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Meld {
    /// Three consecutive same-suit numbers (chi when `call` is `Some`, a closed-hand sequence
    /// group when `call` is `None`).
    Sequence { tiles: [Tile; 3], call: Option<Call> },
    /// Pon: an open triplet called from a discard.
    TripletOpen { tiles: [Tile; 3], call: Call },
    /// Ankou: a triplet formed entirely from the concealed hand. Only ever appears inside a
    /// decomposition -- a player cannot "declare" an ankou.
    TripletConcealed { tiles: [Tile; 3] },
    /// Ankan: a concealed quad, declared from the player's own concealed hand.
    QuadConcealed { tiles: [Tile; 4] },
    /// Daiminkan: a quad called directly from a discard.
    QuadCalledDiscard { tiles: [Tile; 4], call: Call },
    /// Shouminkan: a pon upgraded to a quad by drawing the fourth tile.
    QuadUpgradedFromPon { tiles: [Tile; 4], call: Call, added: Tile },
}

impl Meld {
    pub fn sequence(mut tiles: [Tile; 3], call: Option<Call>) -> Result<Self, ElementError> {
        tiles.sort();
        if tiles.iter().any(|t| t.is_honor()) {
            return Err(ElementError::HonorInSequence);
        }
        let suit = tiles[0].kind().suit();
        let nums: Vec<u8> = tiles.iter().map(|t| t.kind().num().unwrap()).collect();
        if tiles.iter().any(|t| t.kind().suit() != suit)
            || nums[1] != nums[0] + 1
            || nums[2] != nums[0] + 2
        {
            return Err(ElementError::InvalidSequence);
        }
        Ok(Self::Sequence { tiles, call })
    }

    fn validate_same_kind(tiles: &[Tile]) -> Result<(), ElementError> {
        let first = tiles[0];
        if tiles.iter().any(|t| !t.same_type(first)) {
            return Err(ElementError::InvalidSameKindGroup);
        }
        Ok(())
    }

    pub fn triplet_open(tiles: [Tile; 3], call: Call) -> Result<Self, ElementError> {
        Self::validate_same_kind(&tiles)?;
        Ok(Self::TripletOpen { tiles, call })
    }

    pub fn triplet_concealed(tiles: [Tile; 3]) -> Result<Self, ElementError> {
        Self::validate_same_kind(&tiles)?;
        Ok(Self::TripletConcealed { tiles })
    }

    pub fn quad_concealed(tiles: [Tile; 4]) -> Result<Self, ElementError> {
        Self::validate_same_kind(&tiles)?;
        Ok(Self::QuadConcealed { tiles })
    }

    pub fn quad_called_discard(tiles: [Tile; 4], call: Call) -> Result<Self, ElementError> {
        Self::validate_same_kind(&tiles)?;
        Ok(Self::QuadCalledDiscard { tiles, call })
    }

    pub fn quad_upgraded_from_pon(
        tiles: [Tile; 4],
        call: Call,
        added: Tile,
    ) -> Result<Self, ElementError> {
        Self::validate_same_kind(&tiles)?;
        Ok(Self::QuadUpgradedFromPon { tiles, call, added })
    }

    pub fn tiles(&self) -> &[Tile] {
        match self {
            Meld::Sequence { tiles, .. } | Meld::TripletOpen { tiles, .. }
            | Meld::TripletConcealed { tiles } => tiles,
            Meld::QuadConcealed { tiles }
            | Meld::QuadCalledDiscard { tiles, .. }
            | Meld::QuadUpgradedFromPon { tiles, .. } => tiles,
        }
    }

    pub fn call(&self) -> Option<Call> {
        match self {
            Meld::Sequence { call, .. } => *call,
            Meld::TripletOpen { call, .. }
            | Meld::QuadCalledDiscard { call, .. }
            | Meld::QuadUpgradedFromPon { call, .. } => Some(*call),
            Meld::TripletConcealed { .. } | Meld::QuadConcealed { .. } => None,
        }
    }

    /// Concealed in the ordinary sense: formed without claiming another player's discard.
    /// Ankan is concealed by this definition too, but see [`Meld::is_concealed_for_menzen`] for
    /// the menzenchin-specific nuance (they agree here, but the two checks are kept distinct
    /// because a future meld kind might not).
    pub fn is_concealed(&self) -> bool {
        self.call().is_none()
    }

    /// A hand stays menzen (closed) with ankan melds but not with any other kind (spec §3).
    pub fn is_concealed_for_menzen(&self) -> bool {
        matches!(self, Meld::QuadConcealed { .. })
    }

    pub fn is_kan(&self) -> bool {
        matches!(
            self,
            Meld::QuadConcealed { .. } | Meld::QuadCalledDiscard { .. } | Meld::QuadUpgradedFromPon { .. }
        )
    }

    pub fn is_triplet_like(&self) -> bool {
        matches!(
            self,
            Meld::TripletOpen { .. } | Meld::TripletConcealed { .. } | Meld::QuadConcealed { .. }
                | Meld::QuadCalledDiscard { .. } | Meld::QuadUpgradedFromPon { .. }
        )
    }

    /// The tile-kind identity shared by all of this group's tiles (triplet/quad), or the lowest
    /// tile of a sequence.
    pub fn representative_tile(&self) -> Tile {
        self.tiles()[0]
    }
}

impl Display for Meld {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let kind = match self {
            Meld::Sequence { call: None, .. } => "seq",
            Meld::Sequence { call: Some(_), .. } => "chi",
            Meld::TripletOpen { .. } => "pon",
            Meld::TripletConcealed { .. } => "ankou",
            Meld::QuadConcealed { .. } => "ankan",
            Meld::QuadCalledDiscard { .. } => "daiminkan",
            Meld::QuadUpgradedFromPon { .. } => "shouminkan",
        };
        write!(f, "{}[", kind)?;
        for t in self.tiles() {
            write!(f, "{}", t)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::t;
    use crate::player::P2;

    #[test]
    fn sequence_rejects_non_consecutive() {
        let err = Meld::sequence([t!("1m"), t!("2m"), t!("4m")], None).unwrap_err();
        assert_eq!(err, ElementError::InvalidSequence);
    }

    #[test]
    fn sequence_rejects_honors() {
        let err = Meld::sequence([t!("1z"), t!("2z"), t!("3z")], None).unwrap_err();
        assert_eq!(err, ElementError::HonorInSequence);
    }

    #[test]
    fn triplet_rejects_mixed_kind() {
        let err = Meld::triplet_concealed([t!("1m"), t!("1m"), t!("2m")]).unwrap_err();
        assert_eq!(err, ElementError::InvalidSameKindGroup);
    }

    #[test]
    fn ankan_is_concealed_but_occupies_meld_slot() {
        let ankan = Meld::quad_concealed([t!("4z"), t!("4z"), t!("4z"), t!("4z")]).unwrap();
        assert!(ankan.is_concealed());
        assert!(ankan.is_concealed_for_menzen());
        assert!(ankan.is_kan());
    }

    #[test]
    fn pon_is_not_concealed() {
        let call = Call { from: P2, called_tile: t!("5p") };
        let pon = Meld::triplet_open([t!("5p"), t!("5p"), t!("5p")], call).unwrap();
        assert!(!pon.is_concealed());
        assert!(!pon.is_concealed_for_menzen());
    }

    #[test]
    fn shouminkan_not_concealed_for_menzen() {
        let call = Call { from: P2, called_tile: t!("5p") };
        let kan = Meld::quad_upgraded_from_pon(
            [t!("5p"), t!("5p"), t!("5p"), t!("5p")], call, t!("5p"),
        ).unwrap();
        assert!(!kan.is_concealed_for_menzen());
        assert!(kan.is_kan());
    }
}
