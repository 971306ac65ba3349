//! Seven-pairs (七対子) and thirteen-orphans (国士無双) detection -- the two irregular winning
//! shapes, per spec §4.1. Both require exactly 14 concealed tiles and zero melds.

use itertools::Itertools;
use riichi_elements::prelude::*;

/// The thirteen terminal/honor types: 1m/9m/1p/9p/1s/9s/1z/2z/3z/4z/5z/6z/7z.
pub fn kokushi_kinds() -> [TileKind; 13] {
    [
        "1m", "9m", "1p", "9p", "1s", "9s",
        "1z", "2z", "3z", "4z", "5z", "6z", "7z",
    ].map(|s| s.parse().unwrap())
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SevenPairsShape {
    /// The 7 pairs, each sorted `[lower, higher]` by instance id ordering from the input.
    pub pairs: [[Tile; 2]; 7],
}

/// Detects seven pairs: exactly seven distinct tile *types*, each appearing exactly twice. A
/// concealed four-of-a-kind is *not* two pairs for this form (spec §4.1) -- it is rejected here
/// because that type would appear with count 4, not 2.
pub fn detect_seven_pairs(tiles: &[Tile]) -> Option<SevenPairsShape> {
    if tiles.len() != 14 { return None; }
    let mut by_kind: Vec<(TileKind, Vec<Tile>)> = Vec::new();
    for &tile in tiles {
        match by_kind.iter_mut().find(|(k, _)| *k == tile.kind()) {
            Some((_, v)) => v.push(tile),
            None => by_kind.push((tile.kind(), vec![tile])),
        }
    }
    if by_kind.len() != 7 || by_kind.iter().any(|(_, v)| v.len() != 2) {
        return None;
    }
    let mut pairs = Vec::with_capacity(7);
    for (_, mut v) in by_kind {
        v.sort();
        pairs.push([v[0], v[1]]);
    }
    Some(SevenPairsShape { pairs: pairs.try_into().unwrap() })
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThirteenOrphansShape {
    /// All 14 tiles (13 singles + 1 duplicate of `doubled`).
    pub tiles: Vec<Tile>,
    /// Which of the 13 types appears twice.
    pub doubled: TileKind,
}

/// Detects thirteen orphans: all 13 terminal/honor types present, with exactly one doubled.
pub fn detect_thirteen_orphans(tiles: &[Tile]) -> Option<ThirteenOrphansShape> {
    if tiles.len() != 14 { return None; }
    if tiles.iter().any(|t| !t.is_terminal_or_honor()) { return None; }
    let kinds = kokushi_kinds();
    let mut doubled = None;
    for &kind in &kinds {
        let count = tiles.iter().filter(|t| t.kind() == kind).count();
        match count {
            1 => {}
            2 if doubled.is_none() => doubled = Some(kind),
            _ => return None,
        }
    }
    let doubled = doubled?;
    if tiles.iter().unique_by(|t| t.kind()).count() != 13 { return None; }
    Some(ThirteenOrphansShape { tiles: tiles.to_vec(), doubled })
}

#[cfg(test)]
mod tests {
    use super::*;
    use riichi_elements::tile::tiles_from_str;

    #[test]
    fn seven_distinct_pairs_detected() {
        let tiles = tiles_from_str("1122334m1z1z").unwrap();
        assert!(detect_seven_pairs(&tiles).is_some());
    }

    #[test]
    fn four_of_a_kind_is_not_seven_pairs() {
        let tiles = tiles_from_str("11112233m1z1z").unwrap();
        assert!(detect_seven_pairs(&tiles).is_none());
    }

    #[test]
    fn kokushi_all_thirteen_plus_one_double() {
        let tiles = tiles_from_str("19m19p19s1234567z1z").unwrap();
        let shape = detect_thirteen_orphans(&tiles).unwrap();
        assert_eq!(shape.doubled, "1z".parse().unwrap());
    }

    #[test]
    fn missing_type_is_not_kokushi() {
        let tiles = tiles_from_str("19m19p19s1234567z9m").unwrap();
        assert!(detect_thirteen_orphans(&tiles).is_none());
    }
}
