//! [`Tile`] (牌): an immutable tile identity plus its classification predicates.
//!
//! ## Ref
//! - <https://ja.wikipedia.org/wiki/%E9%BA%BB%E9%9B%80%E7%89%8C>
//! - <https://en.wikipedia.org/wiki/Mahjong_tiles>

use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::error::ElementError;
use crate::player::Wind;

/// A tile *type* (suit family + rank), ignoring which physical instance it is and ignoring
/// whether it is the red five.
///
/// Encoded as a 6-bit integer, the same scheme used throughout the crate:
///
/// | Encoding   |  Shorthand  | Suit family   |
/// |------------|-------------|---------------|
/// | 0  ..= 8   |  1m ..= 9m  | number-manzu  |
/// | 9  ..= 17  |  1p ..= 9p  | number-pinzu  |
/// | 18 ..= 26  |  1s ..= 9s  | number-souzu  |
/// | 27 ..= 30  |  1z ..= 4z  | wind (ESWN)   |
/// | 31 ..= 33  |  5z ..= 7z  | dragon (WGR)  |
///
/// This encoding is significant and assumed throughout the crate; it should never change.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileKind(u8);

/// The suit family of a [`TileKind`], per spec: number-manzu / number-pinzu / number-souzu /
/// wind / dragon.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SuitFamily {
    Manzu,
    Pinzu,
    Souzu,
    Wind,
    Dragon,
}

impl TileKind {
    pub const MIN_ENCODING: u8 = 0;
    pub const MAX_ENCODING: u8 = 33;
    pub const NUM_KINDS: usize = 34;

    pub const fn from_encoding(encoding: u8) -> Option<Self> {
        if encoding <= Self::MAX_ENCODING { Some(Self(encoding)) } else { None }
    }

    /// `num` is 1..=9 for a number suit (`suit` 0/1/2 => m/p/s), or 1..=4 for winds, or 1..=3
    /// for dragons (`suit` 3, `num` encodes E/S/W/N or White/Green/Red via 1..=4 / 1..=3 split
    /// handled by [`from_wind`](Self::from_wind) / [`from_dragon`](Self::from_dragon)).
    pub const fn from_num_suit(num: u8, suit: u8) -> Option<Self> {
        if suit > 2 || num == 0 || num > 9 { return None; }
        Some(Self(suit * 9 + num - 1))
    }

    pub const fn from_wind(wind: Wind) -> Self { Self(27 + wind.to_u8()) }

    /// `dragon` is 0 (White/Haku), 1 (Green/Hatsu), or 2 (Red/Chun).
    pub const fn from_dragon(dragon: u8) -> Option<Self> {
        if dragon <= 2 { Some(Self(31 + dragon)) } else { None }
    }

    pub const fn encoding(self) -> u8 { self.0 }

    pub const fn suit_family(self) -> SuitFamily {
        match self.0 {
            0..=8 => SuitFamily::Manzu,
            9..=17 => SuitFamily::Pinzu,
            18..=26 => SuitFamily::Souzu,
            27..=30 => SuitFamily::Wind,
            _ => SuitFamily::Dragon,
        }
    }

    pub const fn is_numeral(self) -> bool { self.0 <= 26 }
    pub const fn is_wind(self) -> bool { 27 <= self.0 && self.0 <= 30 }
    pub const fn is_dragon(self) -> bool { 31 <= self.0 && self.0 <= 33 }
    pub const fn is_honor(self) -> bool { self.is_wind() || self.is_dragon() }

    /// Terminal := number suit rank 1 or 9.
    pub const fn is_terminal(self) -> bool {
        self.is_numeral() && matches!(self.0 % 9, 0 | 8)
    }
    pub const fn is_terminal_or_honor(self) -> bool {
        self.is_terminal() || self.is_honor()
    }
    /// Simple := number suit rank 2..=8.
    pub const fn is_simple(self) -> bool {
        self.is_numeral() && !self.is_terminal()
    }

    /// Green-only: souzu 2/3/4/6/8, or the green dragon. Used only by ryuuiisou.
    pub const fn is_green_only(self) -> bool {
        matches!(self.0, 19 | 20 | 21 | 23 | 25 | 32)
    }

    /// The 0-indexed numeral 1..=9 for a number suit, `None` for honors.
    pub const fn num(self) -> Option<u8> {
        if self.is_numeral() { Some(self.0 % 9 + 1) } else { None }
    }
    pub const fn suit(self) -> u8 {
        if self.is_numeral() { self.0 / 9 } else { 3 }
    }

    pub const fn wind(self) -> Option<Wind> {
        if self.is_wind() { Some(Wind::new(self.0 - 27)) } else { None }
    }

    /// For numerals 1..=8, the next numeral up in the same suit.
    pub const fn succ(self) -> Option<Self> {
        match self.num() {
            Some(n) if n <= 8 => Some(Self(self.0 + 1)),
            _ => None,
        }
    }
    /// For numerals 1..=7, the numeral two up in the same suit.
    pub const fn succ2(self) -> Option<Self> {
        match self.num() {
            Some(n) if n <= 7 => Some(Self(self.0 + 2)),
            _ => None,
        }
    }
    /// For numerals 2..=9, the previous numeral in the same suit.
    pub const fn pred(self) -> Option<Self> {
        match self.num() {
            Some(n) if n >= 2 => Some(Self(self.0 - 1)),
            _ => None,
        }
    }

    /// Given this tile type as a dora indicator, the type it indicates (wraps within its suit
    /// family: 9->1 for numbers, 4z->1z for winds, 7z->5z for dragons).
    pub const fn indicated_dora(self) -> Self {
        const TABLE: [u8; 34] = [
            1, 2, 3, 4, 5, 6, 7, 8, 0, // m
            10, 11, 12, 13, 14, 15, 16, 17, 9, // p
            19, 20, 21, 22, 23, 24, 25, 26, 18, // s
            28, 29, 30, 27, // winds
            32, 33, 31, // dragons
        ];
        Self(TABLE[self.0 as usize])
    }

    pub fn suit_char(self) -> char {
        ['m', 'p', 's', 'z'][self.suit() as usize]
    }

    pub const fn as_str(self) -> &'static str {
        const NAMES: [&str; 34] = [
            "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m",
            "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p",
            "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s",
            "1z", "2z", "3z", "4z", "5z", "6z", "7z",
        ];
        NAMES[self.0 as usize]
    }
}

impl Ord for TileKind {
    fn cmp(&self, other: &Self) -> Ordering { self.0.cmp(&other.0) }
}
impl PartialOrd for TileKind {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl FromStr for TileKind {
    type Err = ElementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tile::from_str(s).map(|t| t.kind())
    }
}

impl Display for TileKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unique integer identifying one physical tile instance within a 136-tile deck.
///
/// Two [`Tile`]s with the same [`TileId`] are the *same physical tile*; two `Tile`s with the
/// same [`TileKind`] (ignoring red-five) are merely the *same type*. Callers must preserve
/// `TileId` across every hand mutation (draws, discards, meld declarations) -- see spec §6.
pub type TileId = u8;

/// One physical tile: a [`TileKind`], a red-five flag, and a [`TileId`] unique within the deck
/// it was dealt from.
///
/// Equality (`==`) compares the *type* (kind + red flag), matching "same tile type?" questions
/// (wait equivalence, furiten). Use [`Tile::same_instance`] for "same physical tile?" questions
/// (agari-hai group membership, chiitoitsu pairing).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    kind: TileKind,
    red: bool,
    id: TileId,
}

impl Tile {
    /// Constructs a tile, validating the red-five invariant (only rank-5 number tiles may be
    /// red).
    pub fn new(kind: TileKind, red: bool, id: TileId) -> Result<Self, ElementError> {
        if red && kind.num() != Some(5) {
            return Err(ElementError::InvalidRedFlag(kind));
        }
        Ok(Self { kind, red, id })
    }

    /// Constructs a tile without an instance id, for contexts that only care about type (e.g.
    /// test fixtures, wait sets). The id is `0`; do not rely on it for instance-identity
    /// comparisons.
    pub fn of_kind(kind: TileKind, red: bool) -> Result<Self, ElementError> {
        Self::new(kind, red, 0)
    }

    pub const fn kind(self) -> TileKind { self.kind }
    pub const fn id(self) -> TileId { self.id }
    pub const fn is_red(self) -> bool { self.red }

    /// True iff `self` and `other` are the same physical tile instance.
    pub const fn same_instance(self, other: Self) -> bool { self.id == other.id }
    /// True iff `self` and `other` are the same tile type (suit+rank), ignoring red-five and
    /// instance identity.
    pub const fn same_type(self, other: Self) -> bool { self.kind.0 == other.kind.0 }

    pub const fn is_terminal(self) -> bool { self.kind.is_terminal() }
    pub const fn is_honor(self) -> bool { self.kind.is_honor() }
    pub const fn is_terminal_or_honor(self) -> bool { self.kind.is_terminal_or_honor() }
    pub const fn is_simple(self) -> bool { self.kind.is_simple() }
    pub const fn is_green_only(self) -> bool { self.kind.is_green_only() }

    pub const fn succ(self) -> Option<TileKind> { self.kind.succ() }
    pub const fn pred(self) -> Option<TileKind> { self.kind.pred() }

    pub fn as_str(self) -> &'static str {
        if self.red {
            match self.kind.0 { 4 => "0m", 13 => "0p", 22 => "0s", _ => unreachable!() }
        } else {
            self.kind.as_str()
        }
    }
}

impl Ord for Tile {
    /// Orders by type first (1m < ... < 4m < 0m < 5m < ... < 9m < 1p < ...), then arbitrarily
    /// but consistently by instance id, matching canonical hand sorting (spec §3).
    fn cmp(&self, other: &Self) -> Ordering {
        let key = |t: &Tile| -> u16 {
            let base = t.kind.0 as u16 * 2;
            if t.red { base } else { base + 1 }
        };
        key(self).cmp(&key(other)).then_with(|| self.id.cmp(&other.id))
    }
}
impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl FromStr for Tile {
    type Err = ElementError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 { return Err(ElementError::MalformedShorthand); }
        let num = (bytes[0] as char).to_digit(10).ok_or(ElementError::MalformedShorthand)? as u8;
        let suit = match bytes[1] {
            b'm' => 0, b'p' => 1, b's' => 2, b'z' => 3,
            _ => return Err(ElementError::MalformedShorthand),
        };
        if suit == 3 {
            if !(1..=7).contains(&num) { return Err(ElementError::MalformedShorthand); }
            let kind = TileKind(26 + num);
            Tile::of_kind(kind, false)
        } else if num == 0 {
            let kind = TileKind::from_num_suit(5, suit).ok_or(ElementError::MalformedShorthand)?;
            Tile::of_kind(kind, true)
        } else {
            let kind = TileKind::from_num_suit(num, suit).ok_or(ElementError::MalformedShorthand)?;
            Tile::of_kind(kind, false)
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a shorthand run such as `"11123m8p8p777z"` into a list of tiles, assigning each a
/// fresh sequential id starting from 0 -- convenient for tests, not meaningful across hands.
pub fn tiles_from_str(s: &str) -> Result<Vec<Tile>, ElementError> {
    let mut nums = Vec::new();
    let mut out = Vec::new();
    let mut next_id: TileId = 0;
    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            nums.push(d as u8);
        } else {
            let suit = match c {
                'm' => 0, 'p' => 1, 's' => 2, 'z' => 3,
                _ => return Err(ElementError::MalformedShorthand),
            };
            for &num in &nums {
                let tile = if suit == 3 {
                    Tile::of_kind(TileKind(26 + num), false)?
                } else if num == 0 {
                    Tile::of_kind(TileKind::from_num_suit(5, suit).unwrap(), true)?
                } else {
                    Tile::of_kind(
                        TileKind::from_num_suit(num, suit).ok_or(ElementError::MalformedShorthand)?,
                        false,
                    )?
                };
                out.push(Tile { id: next_id, ..tile });
                next_id += 1;
            }
            nums.clear();
        }
    }
    if !nums.is_empty() { return Err(ElementError::MalformedShorthand); }
    Ok(out)
}

/// Shortcut for a single tile literal through its string shorthand, e.g. `t!("3s")`. Panics on
/// malformed input -- intended for tests and fixtures.
#[macro_export]
macro_rules! t {
    ($s:expr) => {{
        use core::str::FromStr;
        $crate::tile::Tile::from_str($s).unwrap()
    }};
}
pub use t;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_kinds() {
        for enc in TileKind::MIN_ENCODING..=TileKind::MAX_ENCODING {
            let kind = TileKind::from_encoding(enc).unwrap();
            let roundtrip: TileKind = kind.as_str().parse().unwrap();
            assert_eq!(kind, roundtrip);
        }
    }

    #[test]
    fn red_five_only_on_rank_five() {
        assert!(Tile::of_kind(TileKind::from_num_suit(5, 0).unwrap(), true).is_ok());
        assert!(Tile::of_kind(TileKind::from_num_suit(4, 0).unwrap(), true).is_err());
        assert!(Tile::of_kind(TileKind::from_wind(crate::player::P0), true).is_err());
    }

    #[test]
    fn type_equality_ignores_instance_id() {
        let a = Tile::new(TileKind::from_num_suit(3, 1).unwrap(), false, 5).unwrap();
        let b = Tile::new(TileKind::from_num_suit(3, 1).unwrap(), false, 99).unwrap();
        assert!(a.same_type(b));
        assert!(!a.same_instance(b));
    }

    #[test]
    fn total_order_places_red_five_before_normal_five() {
        let four: Tile = "4m".parse().unwrap();
        let red_five: Tile = "0m".parse().unwrap();
        let five: Tile = "5m".parse().unwrap();
        let six: Tile = "6m".parse().unwrap();
        assert!(four < red_five);
        assert!(red_five < five);
        assert!(five < six);
    }

    #[test]
    fn indicated_dora_wraps_within_suit() {
        let indicator: TileKind = "9p".parse().unwrap();
        assert_eq!(indicator.indicated_dora(), "1p".parse().unwrap());
        let indicator: TileKind = "4z".parse().unwrap();
        assert_eq!(indicator.indicated_dora(), "1z".parse().unwrap());
        let indicator: TileKind = "7z".parse().unwrap();
        assert_eq!(indicator.indicated_dora(), "5z".parse().unwrap());
    }

    #[test]
    fn tiles_from_str_assigns_sequential_ids() {
        let tiles = tiles_from_str("123m").unwrap();
        assert_eq!(tiles.iter().map(|t| t.id()).collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
