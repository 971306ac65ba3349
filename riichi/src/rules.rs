//! Rule-variant switches. The source this crate is modeled on left several of these as `TODO`
//! comments or silently-baked-in choices (spec §9 Open Questions); here they are explicit,
//! `Default`-constructible fields a collaborator can override.

/// Ruleset knobs resolving spec §9's open questions. See DESIGN.md for the rationale behind
/// each default.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    /// An open-hand (non-menzen) ron that would otherwise total exactly 20 fu is bumped to 30.
    /// Default `true` (the common "kuipinfu" convention: an open pinfu-shaped ron scores as if
    /// it had 30 fu, since pinfu itself is menzen-only and so cannot apply to an open hand).
    pub open_hand_20_fu_ron_becomes_30: bool,

    /// Whether a hand whose han total (regular yaku + dora) reaches 13+ scores as an actual
    /// yakuman-multiple ("kazoe-yakuman") in addition to any literal yakuman already present,
    /// or is simply capped as a very large regular hand. Default `true`: kazoe-yakuman is
    /// counted as a single yakuman when no literal yakuman applies, but never stacks with one
    /// (spec §9: "the source implicitly does not" stack them).
    pub kazoe_yakuman: bool,

    /// Honba threshold at which the two-han minimum rule ("ryanhan shibari") activates.
    pub ryanhan_shibari_honba_threshold: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            open_hand_20_fu_ron_becomes_30: true,
            kazoe_yakuman: true,
            ryanhan_shibari_honba_threshold: 5,
        }
    }
}
