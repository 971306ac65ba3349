//! Yaku predicates (C5), dispatched over a [`Decomposition`] much like the source's
//! `detect_yakus_for_regular` / `detect_yakus_for_irregular` split, but returning data instead of
//! mutating a shared builder.

use std::collections::HashSet;

use riichi_decomp::prelude::{AgariLocation, Decomposition, RiichiState, WaitShape};
use riichi_elements::prelude::*;

use crate::win_context::{AgariKind, WinContext};
use crate::yaku::Yaku;

fn all_tiles(decomposition: &Decomposition, hand: &Hand) -> Vec<Tile> {
    match decomposition {
        Decomposition::Standard { pair, .. } => {
            let mut tiles = hand.all_tiles();
            tiles.extend_from_slice(pair);
            tiles
        }
        Decomposition::SevenPairs { pairs, .. } => pairs.iter().flatten().copied().collect(),
        Decomposition::ThirteenOrphans { tiles, .. } => tiles.clone(),
    }
}

fn is_value_tile(kind: TileKind, seat_wind: Wind, round_wind: Wind) -> bool {
    kind.is_dragon() || kind.wind() == Some(seat_wind) || kind.wind() == Some(round_wind)
}

/// Detects yakuman predicates. If any apply, the orchestrator must suppress all regular yaku
/// (spec §4.3 precedence rule).
pub fn detect_yakuman(
    decomposition: &Decomposition,
    hand: &Hand,
    ctx: &WinContext,
) -> Vec<Yaku> {
    let mut hits = Vec::new();
    let is_menzen = hand.is_menzen();
    let tiles = all_tiles(decomposition, hand);

    match decomposition {
        Decomposition::ThirteenOrphans { thirteen_sided, .. } => {
            hits.push(if *thirteen_sided {
                Yaku::KokushiMusouJuusanmenmachi
            } else {
                Yaku::KokushiMusou
            });
        }
        Decomposition::Standard { groups, pair, agari_location } => {
            let concealed_triplets = groups.iter().enumerate()
                .filter(|(index, meld)| is_concealed_triplet_like(*index, meld, agari_location, ctx))
                .count();
            if concealed_triplets == 4 {
                hits.push(if matches!(agari_location, AgariLocation::Pair) {
                    Yaku::SuuankouTanki
                } else {
                    Yaku::Suuankou
                });
            }

            let dragon_triplets = groups.iter().filter(|m| {
                m.is_triplet_like() && m.representative_tile().kind().is_dragon()
            }).count();
            if dragon_triplets == 3 {
                hits.push(Yaku::Daisangen);
            }

            let wind_triplets: Vec<Wind> = groups.iter()
                .filter(|m| m.is_triplet_like())
                .filter_map(|m| m.representative_tile().kind().wind())
                .collect();
            if wind_triplets.len() == 4 {
                hits.push(Yaku::Daisuushii);
            } else if wind_triplets.len() == 3 && pair[0].kind().is_wind() {
                hits.push(Yaku::Shousuushii);
            }

            if groups.iter().filter(|m| m.is_kan()).count() == 4 {
                hits.push(Yaku::Suukantsu);
            }

            if tiles.iter().all(|t| t.is_honor()) {
                hits.push(Yaku::Tsuuiisou);
            }
            if tiles.iter().all(|t| t.is_terminal()) {
                hits.push(Yaku::Chinroutou);
            }
            if tiles.iter().all(|t| t.is_green_only()) {
                hits.push(Yaku::Ryuuiisou);
            }

            if is_menzen && groups.iter().all(|m| matches!(m, Meld::Sequence { .. })) {
                if let Some(nine_gates) = detect_chuuren(groups, *pair, ctx.agari_hai) {
                    hits.push(nine_gates);
                }
            }
        }
        Decomposition::SevenPairs { .. } => {}
    }

    if matches!(ctx.kind, AgariKind::Tsumo) && ctx.is_dealer && ctx.is_first_chance {
        hits.push(Yaku::Tenhou);
    } else if matches!(ctx.kind, AgariKind::Tsumo) && !ctx.is_dealer && ctx.is_first_chance {
        hits.push(Yaku::Chihou);
    } else if ctx.kind.is_ron() && !ctx.is_dealer && ctx.is_first_chance {
        hits.push(Yaku::Renhou);
    }

    hits
}

/// True iff `index` is the group that the agari-hai completed, the wait shape was shanpon, and
/// the win was by ron -- the shanpon-ron exception that makes an otherwise-concealed triplet
/// count as open (spec §4.4 note; also relevant to sanankou/suuankou, which both require the
/// completing triplet to be genuinely concealed).
fn is_shanpon_ron_open(index: usize, agari_location: &AgariLocation, ctx: &WinContext) -> bool {
    matches!(agari_location, AgariLocation::Group { index: i, shape: WaitShape::Shanpon } if *i == index)
        && ctx.kind.is_ron()
}

/// A triplet or quad group that counts as concealed for sanankou/suuankou purposes: genuinely
/// unclaimed, and not the shanpon-ron exception (spec §4.4 note; sanankou/suuankou share it).
fn is_concealed_triplet_like(
    index: usize,
    meld: &Meld,
    agari_location: &AgariLocation,
    ctx: &WinContext,
) -> bool {
    meld.is_triplet_like() && meld.is_concealed()
        && !(meld.tiles().len() == 3 && is_shanpon_ron_open(index, agari_location, ctx))
}

/// Nine gates: a single-suit concealed hand of 1112345678 9 + one extra copy of any rank,
/// completed by self-draw or claim with no calls. `9-sided` (junsei) iff the agari-hai could have
/// been any of the nine ranks, i.e. the pre-agari 13 tiles already contained 1112345678 9 exactly.
fn detect_chuuren(groups: &[Meld], pair: [Tile; 2], agari: Tile) -> Option<Yaku> {
    let mut all_tiles: Vec<Tile> = groups.iter().flat_map(|m| m.tiles().to_vec()).collect();
    all_tiles.extend_from_slice(&pair);
    let suit = all_tiles[0].kind().suit();
    if suit == 3 || all_tiles.iter().any(|t| t.kind().suit() != suit) {
        return None;
    }
    let mut counts = [0u8; 9];
    for t in &all_tiles {
        counts[t.kind().num().unwrap() as usize - 1] += 1;
    }
    let required = [3u8, 1, 1, 1, 1, 1, 1, 1, 3];
    let mut extra_rank = None;
    for i in 0..9 {
        if counts[i] < required[i] {
            return None;
        }
        if counts[i] > required[i] {
            if counts[i] != required[i] + 1 || extra_rank.is_some() {
                return None;
            }
            extra_rank = Some(i);
        }
    }
    let extra_rank = extra_rank?;
    let agari_rank = agari.kind().num().unwrap() as usize - 1;
    let nine_sided = extra_rank == agari_rank;
    Some(if nine_sided { Yaku::JunseiChuurenpoutou } else { Yaku::Chuurenpoutou })
}

/// Detects regular (non-yakuman) yaku.
pub fn detect_regular(
    decomposition: &Decomposition,
    hand: &Hand,
    ctx: &WinContext,
) -> Vec<Yaku> {
    let mut hits = Vec::new();
    let is_menzen = hand.is_menzen();
    let tiles = all_tiles(decomposition, hand);

    match ctx.riichi_state {
        RiichiState::Riichi => hits.push(Yaku::Riichi),
        RiichiState::DoubleRiichi => hits.push(Yaku::DoubleRiichi),
        RiichiState::None => {}
    }
    if ctx.riichi_state != RiichiState::None && ctx.ippatsu {
        hits.push(Yaku::Ippatsu);
    }
    if is_menzen && matches!(ctx.kind, AgariKind::Tsumo) {
        hits.push(Yaku::MenzenTsumo);
    }
    if ctx.rinshan {
        hits.push(Yaku::Rinshankaihou);
    }
    if ctx.chankan {
        hits.push(Yaku::Chankan);
    }
    if ctx.last_tile {
        hits.push(match ctx.kind {
            AgariKind::Tsumo => Yaku::Haitei,
            AgariKind::Ron { .. } => Yaku::Houtei,
        });
    }

    if tiles.iter().all(|t| t.is_simple()) {
        hits.push(Yaku::Tanyao);
    }

    match decomposition {
        Decomposition::SevenPairs { .. } => {
            hits.push(Yaku::Chiitoitsu);
            return hits;
        }
        Decomposition::ThirteenOrphans { .. } => return hits,
        Decomposition::Standard { pair, groups: std_groups, agari_location } => {
            detect_standard_only(&mut hits, pair, std_groups, agari_location, is_menzen, ctx);
        }
    }
    hits
}

fn detect_standard_only(
    hits: &mut Vec<Yaku>,
    pair: &[Tile; 2],
    groups: &[Meld],
    agari_location: &AgariLocation,
    is_menzen: bool,
    ctx: &WinContext,
) {
    if is_menzen
        && groups.iter().all(|m| matches!(m, Meld::Sequence { .. }))
        && !is_value_tile(pair[0].kind(), ctx.seat_wind, ctx.round_wind)
        && matches!(agari_location, AgariLocation::Group { shape: WaitShape::Ryanmen, .. })
    {
        hits.push(Yaku::Pinfu);
    }

    for dragon in [0u8, 1, 2] {
        if groups.iter().any(|m| m.is_triplet_like()
            && TileKind::from_dragon(dragon) == Some(m.representative_tile().kind()))
        {
            hits.push([Yaku::YakuhaiHaku, Yaku::YakuhaiHatsu, Yaku::YakuhaiChun][dragon as usize]);
        }
    }
    for meld in groups.iter().filter(|m| m.is_triplet_like()) {
        if let Some(wind) = meld.representative_tile().kind().wind() {
            if wind == ctx.seat_wind { hits.push(Yaku::YakuhaiSeatWind); }
            if wind == ctx.round_wind { hits.push(Yaku::YakuhaiRoundWind); }
        }
    }

    if groups.iter().filter(|m| m.is_triplet_like()).count() == 4 {
        hits.push(Yaku::Toitoihou);
    }

    let ankou_count = groups.iter().enumerate()
        .filter(|(index, m)| is_concealed_triplet_like(*index, m, agari_location, ctx))
        .count();
    if ankou_count >= 3 {
        hits.push(Yaku::Sanankou);
    }

    let dragon_triplets = groups.iter().filter(|m| m.is_triplet_like() && m.representative_tile().is_honor()
        && m.representative_tile().kind().is_dragon()).count();
    if dragon_triplets == 2 && pair[0].kind().is_dragon() {
        hits.push(Yaku::Shousangen);
    }

    let all_tiles: Vec<Tile> = groups.iter().flat_map(|m| m.tiles().to_vec())
        .chain(pair.iter().copied()).collect();
    if all_tiles.iter().all(|t| t.is_terminal_or_honor()) {
        hits.push(Yaku::Honroutou);
    }

    if groups.iter().filter(|m| m.is_kan()).count() == 3 {
        hits.push(Yaku::Sankantsu);
    }

    detect_suit_shape_yaku(hits, pair, groups);

    let sequences: Vec<[Tile; 3]> = groups.iter().filter_map(|m| match m {
        Meld::Sequence { tiles, .. } => Some(*tiles),
        _ => None,
    }).collect();
    let mut seq_nums_by_suit: Vec<(u8, u8)> = sequences.iter()
        .map(|s| (s[0].kind().suit(), s[0].kind().num().unwrap())).collect();
    seq_nums_by_suit.sort();
    for suit in 0..3u8 {
        let has = |n: u8| seq_nums_by_suit.contains(&(suit, n));
        if has(1) && has(4) && has(7) {
            hits.push(Yaku::Ittsuu);
        }
    }
    let mut by_num = [[false; 3]; 8];
    for (suit, num) in &seq_nums_by_suit {
        if *num <= 7 {
            by_num[(*num - 1) as usize][*suit as usize] = true;
        }
    }
    if by_num.iter().any(|row| row.iter().all(|x| *x)) {
        hits.push(Yaku::SanshokuDoujun);
    }

    let mut triplet_nums_by_suit: Vec<(u8, u8)> = groups.iter()
        .filter(|m| m.is_triplet_like())
        .filter_map(|m| {
            let k = m.representative_tile().kind();
            k.num().map(|n| (k.suit(), n))
        }).collect();
    triplet_nums_by_suit.sort();
    let mut tri_by_num = [[false; 3]; 9];
    for (suit, num) in &triplet_nums_by_suit {
        tri_by_num[(*num - 1) as usize][*suit as usize] = true;
    }
    if tri_by_num.iter().any(|row| row.iter().all(|x| *x)) {
        hits.push(Yaku::SanshokuDoukou);
    }

    let mut seq_multiset: Vec<(u8, u8)> = seq_nums_by_suit.clone();
    seq_multiset.sort();
    let mut i = 0;
    let mut identical_pairs = 0;
    while i + 1 < seq_multiset.len() {
        if seq_multiset[i] == seq_multiset[i + 1] {
            identical_pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    if is_menzen {
        if identical_pairs >= 2 {
            hits.push(Yaku::Ryanpeikou);
        } else if identical_pairs == 1 {
            hits.push(Yaku::Iipeikou);
        }
    }
}

fn detect_suit_shape_yaku(hits: &mut Vec<Yaku>, pair: &[Tile; 2], groups: &[Meld]) {
    let mut all: Vec<Tile> = groups.iter().flat_map(|m| m.tiles().to_vec()).collect();
    all.extend_from_slice(pair);

    let suits: HashSet<u8> = all.iter().filter(|t| !t.is_honor()).map(|t| t.kind().suit()).collect();
    let has_honor = all.iter().any(|t| t.is_honor());
    if suits.len() == 1 {
        hits.push(if has_honor { Yaku::Honitsu } else { Yaku::Chinitsu });
    }

    let all_terminal_or_honor_groups = groups.iter().all(|m| {
        m.tiles().iter().any(|t| t.is_terminal()) || m.representative_tile().is_honor()
    }) && pair[0].is_terminal_or_honor();
    if all_terminal_or_honor_groups {
        let pure = all.iter().all(|t| t.is_terminal());
        hits.push(if pure { Yaku::Junchan } else { Yaku::Chanta });
    }
}

/// Removes duplicate yaku hits (a predicate firing more than once, e.g. two suits independently
/// matching an ittsuu-shaped run -- impossible in practice but not worth relying on).
fn dedup_yaku(hits: &mut Vec<Yaku>) {
    let mut seen = HashSet::new();
    hits.retain(|y| seen.insert(*y));
}

/// Applies spec §4.3 precedence rules to a raw hit list, returning the final `(yaku, han)` pairs.
/// `None` is returned if no yaku survive (no-yaku, no-win).
pub fn resolve_precedence(
    mut yakuman: Vec<Yaku>,
    mut regular: Vec<Yaku>,
    is_menzen: bool,
) -> Option<Vec<(Yaku, u8)>> {
    dedup_yaku(&mut yakuman);
    if !yakuman.is_empty() {
        return Some(yakuman.into_iter().map(|y| (y, y.yakuman_multiplier())).collect());
    }

    if regular.contains(&Yaku::Chinitsu) {
        regular.retain(|y| *y != Yaku::Honitsu);
    }
    if regular.contains(&Yaku::Ryanpeikou) {
        regular.retain(|y| *y != Yaku::Iipeikou);
    }
    if regular.contains(&Yaku::Chiitoitsu) {
        regular.retain(|y| matches!(
            y,
            Yaku::Chiitoitsu | Yaku::Riichi | Yaku::DoubleRiichi | Yaku::Ippatsu
                | Yaku::MenzenTsumo | Yaku::Tanyao | Yaku::Honitsu | Yaku::Chinitsu
                | Yaku::Haitei | Yaku::Houtei
        ));
    }
    dedup_yaku(&mut regular);

    let resolved: Vec<(Yaku, u8)> = regular.into_iter()
        .filter_map(|y| y.han(is_menzen).map(|h| (y, h)))
        .collect();
    if resolved.is_empty() { None } else { Some(resolved) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riichi_decomp::prelude::find_decompositions;
    use riichi_elements::tile::tiles_from_str;

    fn base_ctx(kind: AgariKind) -> WinContext {
        WinContext {
            winner: P0,
            agari_hai: t!("8s"),
            kind,
            seat_wind: P1,
            round_wind: P2,
            riichi_state: RiichiState::None,
            furiten: riichi_decomp::prelude::FuritenKind::None,
            ippatsu: false,
            rinshan: false,
            chankan: false,
            last_tile: false,
            dora: crate::win_context::DoraIndicators::default(),
            honba: 0,
            riichi_sticks: 0,
            is_dealer: false,
            dealer: P0,
            pao_player: None,
            is_first_chance: false,
        }
    }

    #[test]
    fn riichi_and_ippatsu_require_an_active_riichi_state() {
        let mut ctx = base_ctx(AgariKind::Tsumo);
        ctx.ippatsu = true;
        let mut concealed = tiles_from_str("234m567p345s678s").unwrap();
        concealed.extend(tiles_from_str("1z1z").unwrap());
        let agari = *concealed.iter().find(|t| t.kind() == "8s".parse().unwrap()).unwrap();
        let hand = Hand::new(concealed.clone(), vec![]).unwrap();
        let decomp = find_decompositions(&concealed, &[], agari).unwrap().into_iter()
            .find(|d| matches!(d, Decomposition::Standard { .. }))
            .unwrap();

        let hits = detect_regular(&decomp, &hand, &ctx);
        assert!(!hits.contains(&Yaku::Riichi));
        assert!(!hits.contains(&Yaku::Ippatsu));
        assert!(hits.contains(&Yaku::MenzenTsumo));

        ctx.riichi_state = RiichiState::Riichi;
        let hits = detect_regular(&decomp, &hand, &ctx);
        assert!(hits.contains(&Yaku::Riichi));
        assert!(hits.contains(&Yaku::Ippatsu));
    }

    #[test]
    fn pinfu_requires_ryanmen_wait_and_valueless_pair() {
        let mut concealed = tiles_from_str("234m567p345s678s").unwrap();
        concealed.extend(tiles_from_str("1z1z").unwrap());
        let agari = *concealed.iter().find(|t| t.kind() == "8s".parse().unwrap()).unwrap();
        let hand = Hand::new(concealed.clone(), vec![]).unwrap();
        let decomp = find_decompositions(&concealed, &[], agari).unwrap().into_iter()
            .find(|d| matches!(d, Decomposition::Standard { .. }))
            .unwrap();
        let hits = detect_regular(&decomp, &hand, &base_ctx(AgariKind::Ron { discarder: P2 }));
        assert!(hits.contains(&Yaku::Pinfu));
    }

    #[test]
    fn shanpon_ron_completing_triplet_does_not_count_as_concealed() {
        // 234m 567p 345s + 22s/77z shanpon, ron completes 777z (discarded).
        let mut concealed = tiles_from_str("234m567p345s22s77z").unwrap();
        concealed.push(t!("7z"));
        let agari = concealed[concealed.len() - 1];
        let hand = Hand::new(concealed.clone(), vec![]).unwrap();
        let decomp = find_decompositions(&concealed, &[], agari).unwrap().into_iter()
            .find(|d| matches!(d, Decomposition::Standard { .. }))
            .unwrap();
        let hits = detect_regular(&decomp, &hand, &base_ctx(AgariKind::Ron { discarder: P2 }));
        // A single shanpon-ron triplet can never itself satisfy sanankou's 3-concealed-triplet
        // minimum, so this hand (one triplet, three sequences) correctly has no sanankou hit --
        // the assertion here exists to document the shanpon-ron-is-open exception's effect.
        assert!(!hits.contains(&Yaku::Sanankou));
    }

    #[test]
    fn chiitoitsu_detected_for_seven_pairs_decomposition() {
        let concealed = tiles_from_str("1122334455667m").unwrap();
        let mut concealed = concealed;
        concealed.push(t!("7m"));
        let decomp = Decomposition::SevenPairs {
            pairs: [
                [concealed[0], concealed[1]], [concealed[2], concealed[3]],
                [concealed[4], concealed[5]], [concealed[6], concealed[7]],
                [concealed[8], concealed[9]], [concealed[10], concealed[11]],
                [concealed[12], concealed[13]],
            ],
            agari_pair_index: 6,
        };
        let hand = Hand::new(concealed, vec![]).unwrap();
        let hits = detect_regular(&decomp, &hand, &base_ctx(AgariKind::Tsumo));
        assert!(hits.contains(&Yaku::Chiitoitsu));
    }

    #[test]
    fn resolve_precedence_suppresses_regular_yaku_under_yakuman() {
        let resolved = resolve_precedence(
            vec![Yaku::Daisangen],
            vec![Yaku::Tanyao, Yaku::Pinfu],
            true,
        ).unwrap();
        assert_eq!(resolved, vec![(Yaku::Daisangen, 1)]);
    }

    #[test]
    fn resolve_precedence_chinitsu_excludes_honitsu() {
        let resolved = resolve_precedence(vec![], vec![Yaku::Chinitsu, Yaku::Honitsu], true).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, Yaku::Chinitsu);
    }

    #[test]
    fn resolve_precedence_chiitoitsu_restricts_to_its_compatible_set() {
        let resolved = resolve_precedence(
            vec![],
            vec![Yaku::Chiitoitsu, Yaku::Tanyao, Yaku::Toitoihou],
            true,
        ).unwrap();
        let yaku: Vec<Yaku> = resolved.iter().map(|(y, _)| *y).collect();
        assert!(yaku.contains(&Yaku::Chiitoitsu));
        assert!(yaku.contains(&Yaku::Tanyao));
        assert!(!yaku.contains(&Yaku::Toitoihou));
    }

    #[test]
    fn resolve_precedence_returns_none_when_nothing_survives() {
        assert!(resolve_precedence(vec![], vec![], true).is_none());
        // Open hand with only menzen-only candidates collapses to no-yaku.
        assert!(resolve_precedence(vec![], vec![Yaku::Pinfu, Yaku::Riichi], false).is_none());
    }
}
