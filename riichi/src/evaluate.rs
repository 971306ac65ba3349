//! Hand evaluator (C8): the orchestrator tying decomposition, yaku, fu, and scoring together
//! (spec §4.6). Replaces the source's interleaved shape-plus-yaku walk (spec §9 redesign note)
//! with full enumeration followed by a select-best pass.

use riichi_decomp::prelude::{find_decompositions, Decomposition, FuritenKind, RiichiState};
use riichi_elements::prelude::*;

use crate::fu::{calc_fu, FuBreakdown};
use crate::rules::Rules;
use crate::score::{base_points, compute_payment, yakuman_base_points, Payment};
use crate::win_context::WinContext;
use crate::yaku::Yaku;
use crate::yaku_detect::{detect_regular, detect_yakuman, resolve_precedence};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotWinningReason {
    /// No decomposition exists at all: the tiles do not form a complete shape.
    NoShape,
    /// At least one decomposition exists, but none carries a yaku (no-yaku, no-win).
    NoYaku,
    /// A ryanhan-shibari ruleset rejected every surviving decomposition's han total.
    RyanhanShibariFailed,
    /// The winner is in furiten and this is a ron attempt; furiten never blocks tsumo.
    Furiten,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinningHand {
    pub decomposition: Decomposition,
    pub yaku: Vec<(Yaku, u8)>,
    pub han: u32,
    pub fu: u32,
    pub dora_han: u32,
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    NotWinning { reason: NotWinningReason },
    Winning { hand: WinningHand, payment: Payment },
}

fn dora_han(hand: &Hand, ctx: &WinContext) -> u32 {
    let tiles = hand.all_tiles();
    let mut han = 0u32;
    for indicator in &ctx.dora.indicators {
        let target = indicator.indicated_dora();
        han += tiles.iter().filter(|t| t.kind() == target).count() as u32;
    }
    if ctx.riichi_state != RiichiState::None {
        for indicator in &ctx.dora.ura_indicators {
            let target = indicator.indicated_dora();
            han += tiles.iter().filter(|t| t.kind() == target).count() as u32;
        }
    }
    han += tiles.iter().filter(|t| t.is_red()).count() as u32;
    han
}

/// A single candidate scoring result for one decomposition, used to pick the best among
/// survivors (spec §4.6: maximise `(yakuman count, han, fu)` lexicographically).
struct Candidate {
    decomposition: Decomposition,
    yaku: Vec<(Yaku, u8)>,
    yakuman_count: u32,
    han: u32,
    fu: u32,
    dora_han: u32,
}

fn score_decomposition(
    decomposition: Decomposition,
    hand: &Hand,
    ctx: &WinContext,
    rules: &Rules,
) -> Option<Candidate> {
    let is_menzen = hand.is_menzen();
    let yakuman_hits = detect_yakuman(&decomposition, hand, ctx);
    let regular_hits = detect_regular(&decomposition, hand, ctx);
    let resolved = resolve_precedence(yakuman_hits, regular_hits, is_menzen)?;

    let is_yakuman = resolved.iter().any(|(y, _)| y.is_yakuman());
    let han_from_yaku: u32 = resolved.iter().map(|(_, h)| *h as u32).sum();
    let dora = if is_yakuman { 0 } else { dora_han(hand, ctx) };
    let han = han_from_yaku + dora;

    if !is_yakuman
        && ctx.ryanhan_shibari_active(rules.ryanhan_shibari_honba_threshold)
        && han_from_yaku < 2
    {
        return None;
    }

    let FuBreakdown { total: fu, .. } = calc_fu(&decomposition, hand, ctx, rules);
    let yakuman_count: u32 = resolved.iter()
        .filter(|(y, _)| y.is_yakuman())
        .map(|(_, mult)| *mult as u32)
        .sum();

    Some(Candidate { decomposition, yaku: resolved, yakuman_count, han, fu, dora_han: dora })
}

/// Evaluates a completed hand against a win context, selecting the highest-scoring interpretation
/// among every valid decomposition (spec §4.6).
pub fn evaluate(hand: &Hand, ctx: &WinContext, rules: &Rules) -> Outcome {
    if ctx.kind.is_ron() && ctx.furiten != FuritenKind::None {
        return Outcome::NotWinning { reason: NotWinningReason::Furiten };
    }

    let mut concealed_plus_agari = hand.concealed().to_vec();
    if !concealed_plus_agari.iter().any(|t| t.same_instance(ctx.agari_hai)) {
        concealed_plus_agari.push(ctx.agari_hai);
    }

    // A mismatched tile/meld count here means `hand` was built inconsistently -- a caller bug
    // (spec §7 "invalid input"), not a legitimate not-winning outcome, so this signals fatally
    // rather than folding into `Outcome::NotWinning`.
    let decompositions = find_decompositions(&concealed_plus_agari, hand.melds(), ctx.agari_hai)
        .expect("hand's concealed/meld tile counts must be internally consistent");
    log::debug!("evaluate: {} candidate decomposition(s) for {:?}", decompositions.len(), ctx.agari_hai);
    if decompositions.is_empty() {
        return Outcome::NotWinning { reason: NotWinningReason::NoShape };
    }

    let candidates: Vec<Candidate> = decompositions.into_iter()
        .filter_map(|d| score_decomposition(d, hand, ctx, rules))
        .collect();

    if candidates.is_empty() {
        let reason = if ctx.ryanhan_shibari_active(rules.ryanhan_shibari_honba_threshold) {
            NotWinningReason::RyanhanShibariFailed
        } else {
            NotWinningReason::NoYaku
        };
        return Outcome::NotWinning { reason };
    }

    let best = candidates.into_iter()
        .max_by_key(|c| (c.yakuman_count, c.han, c.fu))
        .expect("candidates is non-empty");

    let base = if best.yakuman_count > 0 {
        yakuman_base_points(best.yakuman_count)
    } else if rules.kazoe_yakuman && best.han >= 13 {
        yakuman_base_points(1)
    } else {
        base_points(best.han.min(u8::MAX as u32) as u8, best.fu)
    };

    let payment = compute_payment(ctx, ctx.winner, base);

    Outcome::Winning {
        hand: WinningHand {
            decomposition: best.decomposition,
            yaku: best.yaku,
            han: best.han,
            fu: best.fu,
            dora_han: best.dora_han,
        },
        payment,
    }
}
