//! Score table (C7): base-points formula with caps, point transfers, honba, riichi sticks, and
//! pao liability -- grounded on the teacher's `engine::scoring::{calc_regular_fu, fu_han_formula,
//! distribute_points}` shape, generalized to the full han/fu table and pao payer substitution.

use riichi_elements::prelude::Player;

use crate::win_context::{AgariKind, WinContext};

pub type Points = i64;

pub const RON_MULTIPLIER_NON_DEALER: i64 = 4;
pub const RON_MULTIPLIER_DEALER: i64 = 6;
pub const HONBA_RON: Points = 300;
pub const HONBA_TSUMO_PER_PLAYER: Points = 100;
pub const RIICHI_STICK_VALUE: Points = 1000;

fn round_up_100(points: Points) -> Points { (points + 99) / 100 * 100 }

/// Raw `fu * 2^(han+2)` with no cap, used both for the regular table and the kazoe-yakuman path.
pub fn fu_han_formula(fu: u32, han: u8) -> Points {
    fu as Points * (1i64 << (han as u32 + 2))
}

/// Base points (before dealer/non-dealer and ron/tsumo multipliers) for a regular (non-yakuman)
/// hand, per spec §4.5's capped table.
pub fn base_points(han: u8, fu: u32) -> Points {
    match han {
        13.. => 8000,
        11 | 12 => 6000,
        8..=10 => 4000,
        6 | 7 => 3000,
        5 => 2000,
        4 if fu >= 40 => 2000,
        3 if fu >= 70 => 2000,
        _ => fu_han_formula(fu, han).min(2000),
    }
}

/// Base points for a yakuman-class win: 8000 per yakuman multiple, optionally combined with
/// kazoe-yakuman (spec §9: kazoe never stacks with a literal yakuman already present).
pub fn yakuman_base_points(yakuman_multiplier: u32) -> Points {
    8000 * yakuman_multiplier as Points
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Payment {
    pub deltas: [Points; 4],
}

/// Computes the full point transfer for a win, including honba, riichi-stick pickup, and pao
/// substitution (spec §4.5). `base` is the capped base-points value from [`base_points`] /
/// [`yakuman_base_points`]; `pao_player`, when set, is a player fully liable for this win in
/// place of the normal payer(s).
pub fn compute_payment(ctx: &WinContext, winner: Player, base: Points) -> Payment {
    let mut deltas = [0 as Points; 4];
    let honba = ctx.honba as Points;

    if let Some(pao) = ctx.pao_player {
        let multiplier = if ctx.is_dealer { RON_MULTIPLIER_DEALER } else { RON_MULTIPLIER_NON_DEALER };
        let amount = round_up_100(base * multiplier) + HONBA_RON * honba;
        deltas[winner.to_usize()] += amount;
        deltas[pao.to_usize()] -= amount;
    } else {
        match ctx.kind {
            AgariKind::Ron { discarder } => {
                let multiplier = if ctx.is_dealer { RON_MULTIPLIER_DEALER } else { RON_MULTIPLIER_NON_DEALER };
                let amount = round_up_100(base * multiplier) + HONBA_RON * honba;
                deltas[winner.to_usize()] += amount;
                deltas[discarder.to_usize()] -= amount;
            }
            AgariKind::Tsumo => {
                // Dealer-winner: every payer owes the doubled rate. Non-dealer-winner: the
                // dealer among the three payers owes double, the other two owe single.
                for payer in winner.others_in_turn_order() {
                    let k = if ctx.is_dealer || payer == ctx.dealer { 2 } else { 1 };
                    let amount = round_up_100(k * base) + HONBA_TSUMO_PER_PLAYER * honba;
                    deltas[winner.to_usize()] += amount;
                    deltas[payer.to_usize()] -= amount;
                }
            }
        }
    }

    deltas[winner.to_usize()] += ctx.riichi_sticks as Points * RIICHI_STICK_VALUE;
    Payment { deltas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riichi_decomp::prelude::RiichiState;
    use riichi_elements::prelude::*;

    use crate::win_context::DoraIndicators;

    fn base_ctx() -> WinContext {
        WinContext {
            winner: P0,
            agari_hai: t!("5m"),
            kind: AgariKind::Tsumo,
            seat_wind: P0,
            round_wind: P0,
            riichi_state: RiichiState::None,
            furiten: riichi_decomp::prelude::FuritenKind::None,
            ippatsu: false,
            rinshan: false,
            chankan: false,
            last_tile: false,
            dora: DoraIndicators::default(),
            honba: 0,
            riichi_sticks: 0,
            is_dealer: false,
            dealer: P0,
            pao_player: None,
            is_first_chance: false,
        }
    }

    #[test]
    fn base_points_table_matches_named_limits() {
        assert_eq!(base_points(13, 30), 8000);
        assert_eq!(base_points(11, 30), 6000);
        assert_eq!(base_points(8, 30), 4000);
        assert_eq!(base_points(6, 30), 3000);
        assert_eq!(base_points(5, 30), 2000);
        assert_eq!(base_points(4, 40), 2000);
        assert_eq!(base_points(4, 30), fu_han_formula(30, 4));
        assert_eq!(base_points(3, 70), 2000);
        assert_eq!(base_points(3, 60), fu_han_formula(60, 3));
        assert_eq!(base_points(1, 30), fu_han_formula(30, 1));
    }

    #[test]
    fn ron_non_dealer_pays_quadruple_base_rounded_up() {
        let ctx = base_ctx(); // winner is P0, kind overwritten below
        let ctx = WinContext { kind: AgariKind::Ron { discarder: P2 }, is_dealer: false, ..ctx };
        let payment = compute_payment(&ctx, P0, 1000);
        assert_eq!(payment.deltas[P0.to_usize()], 4000);
        assert_eq!(payment.deltas[P2.to_usize()], -4000);
        assert_eq!(payment.deltas[P1.to_usize()], 0);
        assert_eq!(payment.deltas[P3.to_usize()], 0);
    }

    #[test]
    fn ron_dealer_pays_sextuple_base() {
        let ctx = WinContext { kind: AgariKind::Ron { discarder: P3 }, is_dealer: true, winner: P0, dealer: P0, ..base_ctx() };
        let payment = compute_payment(&ctx, P0, 2000);
        assert_eq!(payment.deltas[P0.to_usize()], 12000);
        assert_eq!(payment.deltas[P3.to_usize()], -12000);
    }

    #[test]
    fn dealer_tsumo_every_payer_owes_double_rate() {
        let ctx = WinContext { kind: AgariKind::Tsumo, is_dealer: true, winner: P0, dealer: P0, ..base_ctx() };
        let payment = compute_payment(&ctx, P0, 2000);
        for payer in P0.others_in_turn_order() {
            assert_eq!(payment.deltas[payer.to_usize()], -4000);
        }
        assert_eq!(payment.deltas[P0.to_usize()], 12000);
    }

    #[test]
    fn non_dealer_tsumo_splits_double_single() {
        // Winner P1, dealer is P0: P0 owes double, P2/P3 owe single.
        let ctx = WinContext { kind: AgariKind::Tsumo, is_dealer: false, winner: P1, dealer: P0, ..base_ctx() };
        let payment = compute_payment(&ctx, P1, 1000);
        assert_eq!(payment.deltas[P0.to_usize()], -2000);
        assert_eq!(payment.deltas[P2.to_usize()], -1000);
        assert_eq!(payment.deltas[P3.to_usize()], -1000);
        assert_eq!(payment.deltas[P1.to_usize()], 4000);
    }

    #[test]
    fn honba_and_riichi_sticks_add_on_top() {
        let ctx = WinContext {
            kind: AgariKind::Ron { discarder: P2 },
            is_dealer: false,
            winner: P0,
            honba: 2,
            riichi_sticks: 3,
            ..base_ctx()
        };
        let payment = compute_payment(&ctx, P0, 1000);
        assert_eq!(payment.deltas[P0.to_usize()], 4000 + 600 + 3000);
        assert_eq!(payment.deltas[P2.to_usize()], -4000 - 600);
    }

    #[test]
    fn pao_player_alone_absorbs_the_full_payment() {
        let ctx = WinContext {
            kind: AgariKind::Tsumo,
            is_dealer: false,
            winner: P1,
            dealer: P0,
            pao_player: Some(P3),
            ..base_ctx()
        };
        let payment = compute_payment(&ctx, P1, 8000);
        assert_eq!(payment.deltas[P3.to_usize()], -32000);
        assert_eq!(payment.deltas[P1.to_usize()], 32000);
        assert_eq!(payment.deltas[P0.to_usize()], 0);
        assert_eq!(payment.deltas[P2.to_usize()], 0);
    }

    #[test]
    fn payment_is_zero_sum_aside_from_riichi_stick_bonus() {
        let ctx = WinContext { kind: AgariKind::Tsumo, is_dealer: false, winner: P1, dealer: P0, riichi_sticks: 2, ..base_ctx() };
        let payment = compute_payment(&ctx, P1, 1000);
        let sum: Points = payment.deltas.iter().sum();
        assert_eq!(sum, 2 * RIICHI_STICK_VALUE);
    }
}
