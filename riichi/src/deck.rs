//! Deck generation (spec §6): 136 tiles, one red five per number suit, shuffled by a
//! caller-supplied RNG (the source's bespoke shuffle crate is dropped in favor of `rand`
//! directly -- see DESIGN.md).

use rand::seq::SliceRandom;
use rand::Rng;

use riichi_elements::prelude::*;

/// Builds and shuffles a full 136-tile deck. Four copies of each of the 34 types, with the
/// rank-5 manzu/pinzu/souzu copy at a fixed position replaced by its red variant.
pub fn generate_deck(rng: &mut impl Rng) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(136);
    let mut next_id: TileId = 0;
    for encoding in TileKind::MIN_ENCODING..=TileKind::MAX_ENCODING {
        let kind = TileKind::from_encoding(encoding).unwrap();
        let red_copy = kind.num() == Some(5);
        for copy in 0..4 {
            let red = red_copy && copy == 0;
            tiles.push(Tile::new(kind, red, next_id).expect("generated tile is always valid"));
            next_id += 1;
        }
    }
    tiles.shuffle(rng);
    tiles
}
