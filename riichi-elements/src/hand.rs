//! [`Hand`] (C2): the concealed-tile bag plus declared melds.

use std::collections::HashSet;

use crate::error::ElementError;
use crate::meld::Meld;
use crate::tile::Tile;

/// A player's hand: the concealed multiset of tiles, plus an ordered list of declared melds.
/// Once a meld is declared, its tiles leave the concealed multiset permanently (spec §3).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    concealed: Vec<Tile>,
    melds: Vec<Meld>,
}

impl Hand {
    /// Builds a hand, checking that every tile instance id is unique across the concealed bag
    /// and all meld tiles (spec §3 invariant).
    pub fn new(concealed: Vec<Tile>, melds: Vec<Meld>) -> Result<Self, ElementError> {
        let mut seen = HashSet::new();
        for tile in concealed.iter().chain(melds.iter().flat_map(|m| m.tiles())) {
            if !seen.insert(tile.id()) {
                return Err(ElementError::DuplicateInstanceId(tile.id()));
            }
        }
        Ok(Self { concealed, melds })
    }

    pub fn concealed(&self) -> &[Tile] { &self.concealed }
    pub fn melds(&self) -> &[Meld] { &self.melds }

    /// Menzen (closed) iff there are no melds, or only ankan melds (spec §3).
    pub fn is_menzen(&self) -> bool {
        self.melds.iter().all(Meld::is_concealed_for_menzen)
    }

    /// Total tile count: concealed tiles plus every meld's tiles.
    pub fn tile_count(&self) -> usize {
        self.concealed.len() + self.melds.iter().map(|m| m.tiles().len()).sum::<usize>()
    }

    /// Canonical sorted form: concealed tiles sorted by the tile total order, melds left in
    /// declaration order (meld order is not part of the canonical form; shuffling it must not
    /// change scoring -- see spec §8 idempotence property).
    pub fn sorted(&self) -> Hand {
        let mut concealed = self.concealed.clone();
        concealed.sort();
        Hand { concealed, melds: self.melds.clone() }
    }

    /// All tiles in the hand (concealed plus meld tiles), in no particular order. Convenient for
    /// yaku predicates that scan the whole hand (tanyao, honitsu, chanta, ...).
    pub fn all_tiles(&self) -> Vec<Tile> {
        let mut out = self.concealed.clone();
        for meld in &self.melds {
            out.extend_from_slice(meld.tiles());
        }
        out
    }
}
