//! Fu (minipoints) calculator (C6), explaining its total as a list of named contributions —
//! grounded on the `FuDetail` list pattern from the corpus's `fu.rs` rather than the teacher's
//! bare lookup table, since a breakdown is worth surfacing to a caller building a scoresheet.

use riichi_decomp::prelude::{AgariLocation, Decomposition, WaitShape};
use riichi_elements::prelude::*;

use crate::rules::Rules;
use crate::win_context::WinContext;

// `name` is `&'static str`, which serde can only `Serialize` (not `Deserialize` -- that would
// need `'de: 'static`), so these two derive `Serialize` only.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FuDetail {
    pub name: &'static str,
    pub fu: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FuBreakdown {
    pub total: u32,
    pub details: Vec<FuDetail>,
}

fn is_value_tile(kind: TileKind, seat_wind: Wind, round_wind: Wind) -> (bool, bool, bool) {
    (kind.is_dragon(), kind.wind() == Some(seat_wind), kind.wind() == Some(round_wind))
}

fn is_shanpon_ron_open(index: usize, agari_location: &AgariLocation, ctx: &WinContext) -> bool {
    matches!(agari_location, AgariLocation::Group { index: i, shape: WaitShape::Shanpon } if *i == index)
        && ctx.kind.is_ron()
}

fn group_fu(meld: &Meld, effectively_open: bool) -> u32 {
    if matches!(meld, Meld::Sequence { .. }) {
        return 0;
    }
    let terminal_or_honor = meld.representative_tile().is_terminal_or_honor();
    match (meld, effectively_open) {
        (Meld::TripletConcealed { .. }, true) | (Meld::TripletOpen { .. }, _) => {
            if terminal_or_honor { 4 } else { 2 }
        }
        (Meld::TripletConcealed { .. }, false) => if terminal_or_honor { 8 } else { 4 },
        (Meld::QuadConcealed { .. }, _) => if terminal_or_honor { 32 } else { 16 },
        (Meld::QuadCalledDiscard { .. }, _) | (Meld::QuadUpgradedFromPon { .. }, _) => {
            if terminal_or_honor { 16 } else { 8 }
        }
        (Meld::Sequence { .. }, _) => unreachable!(),
    }
}

fn round_up_to_10(fu: u32) -> u32 { (fu + 9) / 10 * 10 }

/// Computes fu for a single decomposition (spec §4.4). Yakuman decompositions conventionally
/// score 0 fu (unused in the final total).
pub fn calc_fu(decomposition: &Decomposition, hand: &Hand, ctx: &WinContext, rules: &Rules) -> FuBreakdown {
    let is_menzen = hand.is_menzen();
    let is_tsumo = ctx.kind.is_tsumo();

    match decomposition {
        Decomposition::SevenPairs { .. } => FuBreakdown {
            total: 25,
            details: vec![FuDetail { name: "seven pairs", fu: 25 }],
        },
        Decomposition::ThirteenOrphans { .. } => FuBreakdown { total: 0, details: vec![] },
        Decomposition::Standard { pair, groups, agari_location } => {
            let structural_pinfu = groups.iter().all(|m| matches!(m, Meld::Sequence { .. }))
                && is_value_tile(pair[0].kind(), ctx.seat_wind, ctx.round_wind) == (false, false, false)
                && matches!(agari_location, AgariLocation::Group { shape: WaitShape::Ryanmen, .. });
            let effective_pinfu = structural_pinfu && is_menzen;

            if effective_pinfu {
                return if is_tsumo {
                    FuBreakdown { total: 20, details: vec![FuDetail { name: "pinfu tsumo", fu: 20 }] }
                } else {
                    FuBreakdown { total: 30, details: vec![FuDetail { name: "pinfu ron", fu: 30 }] }
                };
            }

            let mut details = vec![FuDetail { name: "base", fu: 20 }];
            if is_tsumo {
                details.push(FuDetail { name: "tsumo", fu: 2 });
            }
            if is_menzen && !is_tsumo {
                details.push(FuDetail { name: "menzen ron", fu: 10 });
            }

            let wait_fu = match agari_location {
                AgariLocation::Pair => 2,
                AgariLocation::Group { shape: WaitShape::Kanchan, .. } => 2,
                AgariLocation::Group { shape: WaitShape::Penchan, .. } => 2,
                AgariLocation::Group { shape: WaitShape::Ryanmen, .. } => 0,
                AgariLocation::Group { shape: WaitShape::Shanpon, .. } => 0,
            };
            if wait_fu > 0 {
                details.push(FuDetail { name: "wait shape", fu: wait_fu });
            }

            let (dragon, seat, round) = is_value_tile(pair[0].kind(), ctx.seat_wind, ctx.round_wind);
            if dragon {
                details.push(FuDetail { name: "dragon pair", fu: 2 });
            }
            if seat {
                details.push(FuDetail { name: "seat wind pair", fu: 2 });
            }
            if round {
                details.push(FuDetail { name: "round wind pair", fu: 2 });
            }

            for (index, meld) in groups.iter().enumerate() {
                let effectively_open = !meld.is_concealed() || is_shanpon_ron_open(index, agari_location, ctx);
                let fu = group_fu(meld, effectively_open);
                if fu > 0 {
                    details.push(FuDetail { name: "group", fu });
                }
            }

            let raw_total: u32 = details.iter().map(|d| d.fu).sum();
            let rounded = round_up_to_10(raw_total);
            let is_open_ron_pinfu_20 = structural_pinfu && !is_menzen && !is_tsumo && rounded == 20;
            let total = if is_open_ron_pinfu_20 && !rules.open_hand_20_fu_ron_becomes_30 {
                rounded
            } else {
                rounded.max(30)
            };

            FuBreakdown { total, details }
        }
    }
}
