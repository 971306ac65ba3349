//! [`WinContext`]: the immutable bundle a collaborator constructs at the moment of a ron/tsumo
//! declaration (spec §9 "from mutable game-state to explicit context"). Replaces the source's
//! pattern of threading a big mutable game-state record with flag fields through every check.

use riichi_elements::prelude::*;
use riichi_decomp::prelude::{FuritenKind, RiichiState};

/// How the hand was completed, carrying the ron-specific discarder identity so an invalid
/// state (a ron with no discarder) is unrepresentable.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgariKind {
    Tsumo,
    Ron { discarder: Player },
}

impl AgariKind {
    pub fn is_tsumo(self) -> bool { matches!(self, AgariKind::Tsumo) }
    pub fn is_ron(self) -> bool { matches!(self, AgariKind::Ron { .. }) }
}

/// Revealed dora indicators. Ura-dora is only ever consulted when the winner was in riichi
/// (spec §3); the caller should simply pass an empty `ura_indicators` otherwise.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DoraIndicators {
    pub indicators: Vec<TileKind>,
    pub ura_indicators: Vec<TileKind>,
}

/// Everything the yaku/fu/score stages need about the moment of the win. Constructed fresh per
/// evaluation by the collaborator and discarded afterward -- the core never retains it.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinContext {
    pub winner: Player,
    pub agari_hai: Tile,
    pub kind: AgariKind,
    pub seat_wind: Wind,
    pub round_wind: Wind,
    pub riichi_state: RiichiState,
    /// This player's furiten status at the moment of the win, as classified by
    /// `riichi_decomp::wait::classify_furiten` from the caller's discard pile and declined-ron
    /// history. `evaluate` rejects any ron while this is not `None` (spec §4.2, §7); a tsumo is
    /// never blocked by furiten.
    pub furiten: FuritenKind,
    /// Eligible for ippatsu: won within one uninterrupted go-around of declaring riichi.
    pub ippatsu: bool,
    /// Eligible for rinshan-kaihou: won on the replacement tile drawn after a kan.
    pub rinshan: bool,
    /// Eligible for chankan: won by robbing another player's added-kan tile.
    pub chankan: bool,
    /// Eligible for haitei (tsumo) / houtei (ron): won on the very last tile of the wall.
    pub last_tile: bool,
    pub dora: DoraIndicators,
    pub honba: u8,
    pub riichi_sticks: u8,
    pub is_dealer: bool,
    /// The current round's dealer, needed (alongside `is_dealer`) to split a non-dealer's tsumo
    /// payment: the dealer among the three payers owes double, the other two owe single.
    pub dealer: Player,
    /// If a yakuman this win qualifies for carries pao (daisangen, daisuushii), and another
    /// player's discard/call specifically enabled its completing meld, that player's identity.
    /// `None` if no pao liability applies.
    pub pao_player: Option<Player>,
    /// True for tenhou/chihou/renhou candidacy: this is the very first discard-free go-around
    /// of the hand for the winner (dealer's first draw, or a non-dealer's first draw/ron before
    /// any calls interrupted the opening go-around).
    pub is_first_chance: bool,
}

impl WinContext {
    /// Two-han minimum rule activates once `honba` reaches the ruleset's threshold (spec §4.3).
    pub fn ryanhan_shibari_active(&self, threshold: u8) -> bool {
        self.honba >= threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx_with_honba(honba: u8) -> WinContext {
        WinContext {
            winner: P0,
            agari_hai: t!("5m"),
            kind: AgariKind::Tsumo,
            seat_wind: P0,
            round_wind: P0,
            riichi_state: RiichiState::None,
            furiten: FuritenKind::None,
            ippatsu: false,
            rinshan: false,
            chankan: false,
            last_tile: false,
            dora: DoraIndicators::default(),
            honba,
            riichi_sticks: 0,
            is_dealer: true,
            dealer: P0,
            pao_player: None,
            is_first_chance: false,
        }
    }

    #[test]
    fn ryanhan_shibari_activates_at_threshold() {
        assert!(!ctx_with_honba(4).ryanhan_shibari_active(5));
        assert!(ctx_with_honba(5).ryanhan_shibari_active(5));
        assert!(ctx_with_honba(9).ryanhan_shibari_active(5));
    }

    #[test]
    fn ron_carries_the_discarder_but_tsumo_does_not() {
        let ron = AgariKind::Ron { discarder: P2 };
        assert!(ron.is_ron());
        assert!(!ron.is_tsumo());
        assert!(AgariKind::Tsumo.is_tsumo());
    }
}
