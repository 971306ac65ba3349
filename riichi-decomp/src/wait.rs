//! Wait analyser (C4): tenpai detection, wait enumeration, furiten classification, and riichi
//! declaration options.

use std::collections::HashSet;

use riichi_elements::prelude::*;

use crate::decomposer::is_winning_shape;

/// Minimum wall tiles conventionally required to declare riichi (enough left for the round to
/// plausibly finish) -- a ruleset default, not mandated by spec.md; see DESIGN.md.
pub const MIN_WALL_TILES_FOR_RIICHI: u32 = 4;
/// The cost of declaring riichi, in points.
pub const RIICHI_STICK_COST: i64 = 1000;

/// Enumerates every tile *type* that completes `concealed_13` (plus `melds`) into a winning
/// shape. Identity is by type -- the red-five flag is irrelevant to wait identity (spec §4.2).
pub fn enumerate_waits(concealed_13: &[Tile], melds: &[Meld]) -> HashSet<TileKind> {
    let mut waits = HashSet::new();
    for encoding in TileKind::MIN_ENCODING..=TileKind::MAX_ENCODING {
        let kind = TileKind::from_encoding(encoding).unwrap();
        // Winds/dragons only go up to the honor range; `from_num_suit` covers 0..=26, the rest
        // is already honors via `from_encoding`, so every encoding here is a valid probe kind.
        let probe = Tile::new(kind, false, u8::MAX).expect("non-red probe is always valid");
        let mut candidate = concealed_13.to_vec();
        candidate.push(probe);
        if is_winning_shape(&candidate, melds) {
            waits.insert(kind);
        }
    }
    waits
}

/// `true` iff there exists any tile type completing the hand (spec §4.2).
pub fn is_tenpai(concealed_13: &[Tile], melds: &[Meld]) -> bool {
    !enumerate_waits(concealed_13, melds).is_empty()
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiichiState {
    #[default]
    None,
    Riichi,
    DoubleRiichi,
}

/// What a player has declined to ron on, tracked by the caller (turn scheduler) between calls.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeclinedRonRecord {
    /// A ron was declined on some discard since this player's own last discard.
    pub since_last_discard: bool,
    /// A ron was declined on one of this player's riichi waits at any point since riichi was
    /// declared (latches for the remainder of the round once set).
    pub since_riichi_declared: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FuritenKind {
    None,
    /// Blocks ron; clears once the condition causing it (a wait tile in the discard pile, or a
    /// declined ron) no longer holds after this player's next discard changes their wait set.
    Temporary,
    /// Blocks ron for the remainder of the round; triggered by declining a ron while in riichi
    /// (the locked hand can never change its wait set to clear it).
    PermanentRiichi,
}

/// Classifies furiten per spec §4.2. `waits` is this player's current wait set; `discards` is
/// this player's own discard pile (by type); `declined` tracks declined-ron history;
/// `riichi_state` is this player's riichi declaration state.
pub fn classify_furiten(
    waits: &HashSet<TileKind>,
    discards: &[TileKind],
    declined: DeclinedRonRecord,
    riichi_state: RiichiState,
) -> FuritenKind {
    let own_discard_overlap = waits.iter().any(|w| discards.contains(w));
    let in_riichi = riichi_state != RiichiState::None;

    if in_riichi && (own_discard_overlap || declined.since_riichi_declared) {
        FuritenKind::PermanentRiichi
    } else if own_discard_overlap || declined.since_last_discard {
        FuritenKind::Temporary
    } else {
        FuritenKind::None
    }
}

/// One way to discard from a 14-tile hand that leaves the remaining 13 tiles tenpai.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiichiOption {
    pub discard: Tile,
    pub waits: HashSet<TileKind>,
}

/// Enumerates every riichi-eligible discard from a 14-tile concealed hand (spec §4.2). `melds`
/// must contain ankan only (the hand must be menzen to riichi); returns an empty list otherwise,
/// or if the player cannot afford the stick, or if too few tiles remain in the wall.
pub fn can_declare_riichi(
    hand_14: &[Tile],
    melds: &[Meld],
    score: i64,
    wall_tiles_remaining: u32,
) -> Vec<RiichiOption> {
    if score < RIICHI_STICK_COST { return Vec::new(); }
    if wall_tiles_remaining < MIN_WALL_TILES_FOR_RIICHI { return Vec::new(); }
    if !melds.iter().all(Meld::is_concealed_for_menzen) { return Vec::new(); }

    let mut seen_kinds = HashSet::new();
    let mut options = Vec::new();
    for i in 0..hand_14.len() {
        let discard = hand_14[i];
        if !seen_kinds.insert(discard.kind()) { continue; }
        let mut rest = hand_14.to_vec();
        rest.remove(i);
        let waits = enumerate_waits(&rest, melds);
        if !waits.is_empty() {
            options.push(RiichiOption { discard, waits });
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use riichi_elements::tile::tiles_from_str;

    #[test]
    fn tenpai_waits_agree_with_shape_membership() {
        // 234m 567p 345s 67s + East pair, waiting on 5s/8s.
        let mut hand = tiles_from_str("234m567p345s67s").unwrap();
        hand.extend(tiles_from_str("1z1z").unwrap());
        let waits = enumerate_waits(&hand, &[]);
        assert!(waits.contains(&"5s".parse().unwrap()));
        assert!(waits.contains(&"8s".parse().unwrap()));
        assert!(is_tenpai(&hand, &[]));
    }

    #[test]
    fn furiten_boundary_scenario() {
        // Tenpai with waits {3p, 6p}; previously discarded 6p -> Temporary (spec §8 scenario 6).
        let mut waits = HashSet::new();
        waits.insert("3p".parse().unwrap());
        waits.insert("6p".parse().unwrap());
        let discards = vec!["6p".parse().unwrap()];
        let kind = classify_furiten(&waits, &discards, DeclinedRonRecord::default(), RiichiState::None);
        assert_eq!(kind, FuritenKind::Temporary);
    }

    #[test]
    fn declining_ron_in_riichi_is_permanent() {
        let mut waits = HashSet::new();
        waits.insert("3p".parse().unwrap());
        let declined = DeclinedRonRecord { since_last_discard: false, since_riichi_declared: true };
        let kind = classify_furiten(&waits, &[], declined, RiichiState::Riichi);
        assert_eq!(kind, FuritenKind::PermanentRiichi);
    }

    #[test]
    fn riichi_requires_menzen_and_stake() {
        let hand = tiles_from_str("234567m234567p1z1z").unwrap();
        assert!(can_declare_riichi(&hand, &[], 500, 20).is_empty());
        assert!(can_declare_riichi(&hand, &[], 1000, 0).is_empty());
    }
}
