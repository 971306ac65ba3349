//! [`Player`] newtype (mod-4 arithmetic), doubling as [`Wind`].

use core::fmt::{Debug, Display, Formatter};
use derive_more::{From, Into};

/// Player index -- 0, 1, 2, 3 => seated East, South, West, North in the current hand.
///
/// Forced to mod-4 arithmetic; also used as [`Wind`] (the round wind and each player's seat
/// wind are both just a `Player`-shaped index in canonical East/South/West/North order).
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player(u8);

pub const P0: Player = Player(0);
pub const P1: Player = Player(1);
pub const P2: Player = Player(2);
pub const P3: Player = Player(3);
pub const ALL_PLAYERS: [Player; 4] = [P0, P1, P2, P3];

/// Wind index, identical representation to [`Player`] -- 0..=3 => East/South/West/North.
pub type Wind = Player;

impl Player {
    pub const fn new(x: u8) -> Self { Player(x & 3) }

    pub const fn add(self, other: Player) -> Player {
        Player(self.0.wrapping_add(other.0) & 3)
    }
    pub const fn sub(self, other: Player) -> Player {
        Player(self.0.wrapping_sub(other.0) & 3)
    }

    pub const fn to_u8(self) -> u8 { self.0 }
    pub const fn to_usize(self) -> usize { self.0 as usize }

    /// Successor: the next player in turn order (Shimocha, 下家).
    pub const fn succ(self) -> Self { self.add(P1) }
    /// The player across the table (Toimen, 対面).
    pub const fn oppo(self) -> Self { self.add(P2) }
    /// Predecessor: the player before me in turn order (Kamicha, 上家).
    pub const fn pred(self) -> Self { self.add(P3) }

    /// All three other players in turn order starting right after `self`.
    pub fn others_in_turn_order(self) -> [Player; 3] {
        [self.succ(), self.oppo(), self.pred()]
    }
}

impl Debug for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", ["East", "South", "West", "North"][self.0 as usize])
    }
}
