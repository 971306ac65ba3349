//! [`Decomposition`] (C3): a complete partition of a winning hand, with the agari-hai's role
//! recorded so fu/yaku logic (in the `riichi` crate) can identify the wait shape without
//! re-deriving it.

use riichi_elements::prelude::*;

use crate::irregular::{detect_seven_pairs, detect_thirteen_orphans};
use crate::regular::enumerate_standard;

/// The shape of the wait that the agari-hai completed, for a group inside a standard
/// decomposition (spec §4.4 fu table).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaitShape {
    /// Two-sided sequence wait (e.g. 3-4 waiting on 2 or 5).
    Ryanmen,
    /// Closed (middle) sequence wait (e.g. 2-4 waiting on 3).
    Kanchan,
    /// Edge sequence wait: 1-2 waiting on 3, or 8-9 waiting on 7.
    Penchan,
    /// Two pairs, one completed into a triplet by the agari-hai.
    Shanpon,
}

/// Where the agari-hai landed in a standard (pair + 4 groups) decomposition.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgariLocation {
    /// Tanki: the agari-hai completed the pair.
    Pair,
    /// The agari-hai completed group `index` (0..4), with the given wait shape.
    Group { index: usize, shape: WaitShape },
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decomposition {
    Standard {
        pair: [Tile; 2],
        /// Exactly 4 groups: declared melds first (in declaration order), then groups found in
        /// the concealed portion.
        groups: Vec<Meld>,
        agari_location: AgariLocation,
    },
    SevenPairs {
        pairs: [[Tile; 2]; 7],
        /// Index (0..7) of the pair the agari-hai completed.
        agari_pair_index: usize,
    },
    ThirteenOrphans {
        tiles: Vec<Tile>,
        doubled: TileKind,
        /// True iff this is the 13-sided wait (tenpai on all 13 types with no pair yet).
        thirteen_sided: bool,
    },
}

/// Classifies the wait shape of a just-completed sequence group, given its three sorted tiles
/// and which one is the agari-hai (matched by instance id).
fn classify_sequence_wait(sorted: [Tile; 3], agari: Tile) -> WaitShape {
    let nums = sorted.map(|t| t.kind().num().unwrap());
    if sorted[1].same_instance(agari) {
        WaitShape::Kanchan
    } else if sorted[0].same_instance(agari) {
        if nums[1] == 8 && nums[2] == 9 { WaitShape::Penchan } else { WaitShape::Ryanmen }
    } else {
        if nums[0] == 1 && nums[1] == 2 { WaitShape::Penchan } else { WaitShape::Ryanmen }
    }
}

/// Locates the agari-hai within a fully-assembled group list (declared melds + concealed
/// groups) and the chosen pair, returning `None` if the agari-hai is not found anywhere (a
/// caller bug).
fn locate_in_standard(pair: [Tile; 2], groups: &[Meld], agari: Tile) -> Option<AgariLocation> {
    if pair.iter().any(|t| t.same_instance(agari)) {
        return Some(AgariLocation::Pair);
    }
    for (index, group) in groups.iter().enumerate() {
        let tiles = group.tiles();
        if !tiles.iter().any(|t| t.same_instance(agari)) { continue; }
        let shape = match group {
            Meld::Sequence { tiles, .. } => classify_sequence_wait(*tiles, agari),
            _ => WaitShape::Shanpon,
        };
        return Some(AgariLocation::Group { index, shape });
    }
    None
}

/// Enumerates every valid decomposition of `concealed` (including the agari-hai) plus `melds`.
/// Returns an empty vec (not an error) if the counts are consistent but the tiles simply do not
/// form a complete shape under any interpretation -- that is the ordinary "not winning" case.
///
/// Returns `Err` when `concealed`/`melds` could not possibly describe any 14-tile hand (more
/// than four melds, or a concealed count inconsistent with `melds.len()`) -- per spec §7 this is
/// a caller bug, not a legitimate non-winning shape, so it must not be silently folded into an
/// empty result.
pub fn find_decompositions(
    concealed: &[Tile],
    melds: &[Meld],
    agari: Tile,
) -> Result<Vec<Decomposition>, ElementError> {
    let k = melds.len();
    let num_groups = 4usize.saturating_sub(k);
    let expected_concealed = 2 + 3 * num_groups;
    if k > 4 || concealed.len() != expected_concealed {
        return Err(ElementError::TileCountMismatch {
            concealed: concealed.len(),
            melds: k,
            expected: expected_concealed,
        });
    }

    let mut results = Vec::new();

    if k == 0 && concealed.len() == 14 {
        if let Some(shape) = detect_thirteen_orphans(concealed) {
            let thirteen_sided = shape.doubled == agari.kind();
            results.push(Decomposition::ThirteenOrphans {
                tiles: shape.tiles,
                doubled: shape.doubled,
                thirteen_sided,
            });
        }
        if let Some(shape) = detect_seven_pairs(concealed) {
            if let Some(agari_pair_index) = shape.pairs.iter()
                .position(|p| p.iter().any(|t| t.same_instance(agari)))
            {
                results.push(Decomposition::SevenPairs { pairs: shape.pairs, agari_pair_index });
            }
        }
    }

    for (pair, concealed_groups) in enumerate_standard(concealed, num_groups) {
        let mut groups = melds.to_vec();
        groups.extend(concealed_groups);
        if let Some(agari_location) = locate_in_standard(pair, &groups, agari) {
            results.push(Decomposition::Standard { pair, groups, agari_location });
        }
    }

    log::trace!("find_decompositions: {} result(s) for {} concealed + {} meld(s)", results.len(), concealed.len(), melds.len());
    Ok(results)
}

/// `true` iff `concealed` (plus `melds`) forms at least one complete shape -- spec §8 universal
/// invariant 2: `is_winning_shape ⇔ find_decompositions non-empty`. A count mismatch (a caller
/// bug, see [`find_decompositions`]) is treated as simply not winning: this predicate has no
/// error channel of its own.
pub fn is_winning_shape(concealed: &[Tile], melds: &[Meld]) -> bool {
    // Any tile in `concealed` can stand in as the nominal agari-hai for a pure shape check;
    // membership is independent of which specific instance is "the" winning tile.
    match concealed.first() {
        Some(&probe) => matches!(find_decompositions(concealed, melds, probe), Ok(d) if !d.is_empty()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riichi_elements::tile::tiles_from_str;

    #[test]
    fn pinfu_ron_decomposition_has_ryanmen_wait() {
        // 234m 567p 345s 67s + agari 8s, East pair (valueless here).
        let mut concealed = tiles_from_str("234m567p345s678s").unwrap();
        concealed.extend(tiles_from_str("1z1z").unwrap());
        let agari = *concealed.iter().find(|t| t.kind() == "8s".parse().unwrap()).unwrap();
        let decomps = find_decompositions(&concealed, &[], agari).unwrap();
        assert!(!decomps.is_empty());
        let has_ryanmen = decomps.iter().any(|d| matches!(
            d,
            Decomposition::Standard { agari_location: AgariLocation::Group { shape: WaitShape::Ryanmen, .. }, .. }
        ));
        assert!(has_ryanmen);
    }

    #[test]
    fn shape_membership_is_permutation_stable() {
        let forward = tiles_from_str("123456789m11222s").unwrap();
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(is_winning_shape(&forward, &[]), is_winning_shape(&backward, &[]));
    }

    #[test]
    fn non_winning_shape_yields_no_decompositions() {
        // All 14 tiles distinct types: no pair candidate exists at all.
        let concealed = tiles_from_str("123456789m12345p").unwrap();
        assert!(find_decompositions(&concealed, &[], concealed[0]).unwrap().is_empty());
        assert!(!is_winning_shape(&concealed, &[]));
    }

    #[test]
    fn mismatched_tile_count_is_an_error_not_an_empty_result() {
        // 13 concealed tiles with zero melds can never complete a 14-tile hand: a caller bug,
        // not an ordinary non-winning shape.
        let concealed = tiles_from_str("123456789m1234p").unwrap();
        let err = find_decompositions(&concealed, &[], concealed[0]).unwrap_err();
        assert_eq!(err, ElementError::TileCountMismatch { concealed: 13, melds: 0, expected: 14 });
    }
}
