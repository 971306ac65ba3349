//! [`Yaku`] (役): the catalogue of named scoring patterns (C5), as a closed enum rather than the
//! source's ad hoc string/bitfield mix (spec §9 redesign: "stringly-typed meld kinds to sum
//! type" applies here too -- yaku names gain the same treatment).

/// One named yaku or yakuman. Distinct double-value variants (e.g. [`Yaku::Suuankou`] vs.
/// [`Yaku::SuuankouTanki`]) are kept as separate variants rather than a single variant plus a
/// multiplier field, mirroring how the source already splits them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Yaku {
    Riichi,
    DoubleRiichi,
    Ippatsu,
    MenzenTsumo,
    Pinfu,
    Tanyao,
    YakuhaiHaku,
    YakuhaiHatsu,
    YakuhaiChun,
    YakuhaiSeatWind,
    YakuhaiRoundWind,
    Haitei,
    Houtei,
    Rinshankaihou,
    Chankan,
    Iipeikou,
    SanshokuDoukou,
    Chiitoitsu,
    Toitoihou,
    Sanankou,
    Shousangen,
    Honroutou,
    Sankantsu,
    SanshokuDoujun,
    Ittsuu,
    Ryanpeikou,
    Chanta,
    Junchan,
    Honitsu,
    Chinitsu,
    KokushiMusou,
    KokushiMusouJuusanmenmachi,
    Suuankou,
    SuuankouTanki,
    Daisangen,
    Shousuushii,
    Daisuushii,
    Tsuuiisou,
    Chinroutou,
    Ryuuiisou,
    Chuurenpoutou,
    JunseiChuurenpoutou,
    Suukantsu,
    Tenhou,
    Chihou,
    Renhou,
}

impl Yaku {
    /// `true` for a yakuman-class variant (scored via the 8000-point base instead of the
    /// han/fu table).
    pub const fn is_yakuman(self) -> bool {
        use Yaku::*;
        matches!(
            self,
            KokushiMusou | KokushiMusouJuusanmenmachi | Suuankou | SuuankouTanki | Daisangen
                | Shousuushii | Daisuushii | Tsuuiisou | Chinroutou | Ryuuiisou | Chuurenpoutou
                | JunseiChuurenpoutou | Suukantsu | Tenhou | Chihou | Renhou
        )
    }

    /// How many yakuman "multiples" this variant is worth (spec §4.3: most are single, a few
    /// double). Meaningless for non-yakuman variants.
    pub const fn yakuman_multiplier(self) -> u8 {
        use Yaku::*;
        match self {
            KokushiMusouJuusanmenmachi | SuuankouTanki | Daisuushii | JunseiChuurenpoutou => 2,
            _ => 1,
        }
    }

    /// `true` if this yaku can never apply to a non-menzen hand at all.
    pub const fn is_menzen_only(self) -> bool {
        use Yaku::*;
        matches!(
            self,
            Riichi | DoubleRiichi | Ippatsu | MenzenTsumo | Pinfu | Iipeikou | Ryanpeikou
                | Chiitoitsu
        )
    }

    /// Han value for a regular (non-yakuman) yaku, given whether the hand is menzen. Returns
    /// `None` if the yaku is menzen-only and the hand is open. Meaningless for yakuman variants.
    pub const fn han(self, is_menzen: bool) -> Option<u8> {
        use Yaku::*;
        if self.is_menzen_only() && !is_menzen {
            return None;
        }
        Some(match self {
            Riichi => 1,
            DoubleRiichi => 2,
            Ippatsu => 1,
            MenzenTsumo => 1,
            Pinfu => 1,
            Tanyao => 1,
            YakuhaiHaku | YakuhaiHatsu | YakuhaiChun | YakuhaiSeatWind | YakuhaiRoundWind => 1,
            Haitei | Houtei => 1,
            Rinshankaihou => 1,
            Chankan => 1,
            Iipeikou => 1,
            SanshokuDoukou => 2,
            Chiitoitsu => 2,
            Toitoihou => 2,
            Sanankou => 2,
            Shousangen => 2,
            Honroutou => 2,
            Sankantsu => 2,
            SanshokuDoujun => if is_menzen { 2 } else { 1 },
            Ittsuu => if is_menzen { 2 } else { 1 },
            Ryanpeikou => 3,
            Chanta => if is_menzen { 2 } else { 1 },
            Junchan => if is_menzen { 3 } else { 2 },
            Honitsu => if is_menzen { 3 } else { 2 },
            Chinitsu => if is_menzen { 6 } else { 5 },
            _ => return None, // yakuman variants
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yakuman_classification_matches_han_table() {
        assert!(Yaku::Daisangen.is_yakuman());
        assert!(Yaku::Daisangen.han(true).is_none());
        assert!(Yaku::Daisangen.han(false).is_none());
        assert!(!Yaku::Toitoihou.is_yakuman());
    }

    #[test]
    fn double_yakuman_variants_carry_multiplier_two() {
        assert_eq!(Yaku::SuuankouTanki.yakuman_multiplier(), 2);
        assert_eq!(Yaku::Suuankou.yakuman_multiplier(), 1);
        assert_eq!(Yaku::Daisuushii.yakuman_multiplier(), 2);
        assert_eq!(Yaku::Shousuushii.yakuman_multiplier(), 1);
    }

    #[test]
    fn menzen_only_yaku_vanish_on_an_open_hand() {
        assert_eq!(Yaku::Pinfu.han(true), Some(1));
        assert_eq!(Yaku::Pinfu.han(false), None);
        assert_eq!(Yaku::Riichi.han(false), None);
    }

    #[test]
    fn open_hand_downgrades_certain_han_counts() {
        assert_eq!(Yaku::Ittsuu.han(true), Some(2));
        assert_eq!(Yaku::Ittsuu.han(false), Some(1));
        assert_eq!(Yaku::Honitsu.han(true), Some(3));
        assert_eq!(Yaku::Honitsu.han(false), Some(2));
    }

    #[test]
    fn display_names_are_distinct() {
        use std::collections::HashSet;
        use strum::IntoEnumIterator;
        let names: HashSet<String> = Yaku::iter().map(|y| y.to_string()).collect();
        assert_eq!(names.len(), Yaku::iter().count());
    }
}
