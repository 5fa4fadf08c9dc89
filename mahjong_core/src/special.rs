use crate::decompose::ExposedMelds;
use crate::faan::WinningHandType;
use crate::tile::{SuitGroup, Tile, TileCounts};

const THIRTEEN_ORPHANS: [Tile; 13] = [
    Tile::East,
    Tile::South,
    Tile::West,
    Tile::North,
    Tile::Red,
    Tile::Green,
    Tile::White,
    Tile::C1,
    Tile::C9,
    Tile::B1,
    Tile::B9,
    Tile::D1,
    Tile::D9,
];

/// Whole-hand shapes that are scored without meld decomposition.
pub fn detect_special(counts: &TileCounts, exposed: &ExposedMelds) -> Option<WinningHandType> {
    if is_all_kongs(counts, exposed) {
        return Some(WinningHandType::AllKongs);
    }
    if is_thirteen_orphans(counts) {
        return Some(WinningHandType::ThirteenOrphans);
    }
    if is_nine_gates(counts, exposed) {
        return Some(WinningHandType::NineGates);
    }
    None
}

/// Four exposed kongs and the two concealed tiles form the eye.
fn is_all_kongs(counts: &TileCounts, exposed: &ExposedMelds) -> bool {
    exposed.kongs.len() == 4
        && counts.total() == 2
        && Tile::ALL.into_iter().any(|t| counts.get(t) == 2)
}

fn is_thirteen_orphans(counts: &TileCounts) -> bool {
    let mut singles = 0;
    let mut pairs = 0;
    for t in THIRTEEN_ORPHANS {
        match counts.get(t) {
            1 => singles += 1,
            2 => pairs += 1,
            _ => {}
        }
    }
    singles == 12 && pairs == 1
}

/// 1112345678999 plus any tile of the same suit, fully concealed.
fn is_nine_gates(counts: &TileCounts, exposed: &ExposedMelds) -> bool {
    if !exposed.is_empty() {
        return false;
    }

    SuitGroup::SUITED.into_iter().any(|group| {
        let slice = counts.group_slice(group);
        let size = group.size();
        counts.group_total(group) == 14
            && slice[1] >= 3
            && slice[size] >= 3
            && slice[2..size].iter().all(|&c| c >= 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::parse_tiles;

    fn special(tiles: &str, exposed: &ExposedMelds) -> Option<WinningHandType> {
        detect_special(
            &TileCounts::from_tiles(&parse_tiles(tiles).unwrap()),
            exposed,
        )
    }

    #[test]
    fn all_kongs() {
        let exposed = ExposedMelds::new(
            vec![],
            vec![],
            vec![Tile::D1, Tile::D2, Tile::D3, Tile::D4],
        );
        assert_eq!(special("D5 D5", &exposed), Some(WinningHandType::AllKongs));
        assert_eq!(special("D5 D6", &exposed), None);

        let three = ExposedMelds::new(vec![], vec![Tile::D4], vec![Tile::D1, Tile::D2, Tile::D3]);
        assert_eq!(special("D5 D5", &three), None);
    }

    #[test]
    fn thirteen_orphans() {
        let none = ExposedMelds::default();
        assert_eq!(
            special(
                "C1 C9 B1 B9 D1 D9 EAST SOUTH WEST NORTH RED GREEN WHITE C1",
                &none
            ),
            Some(WinningHandType::ThirteenOrphans)
        );
        assert_eq!(
            special(
                "C1 C9 B1 B9 D1 D9 EAST SOUTH WEST NORTH RED GREEN WHITE WHITE",
                &none
            ),
            Some(WinningHandType::ThirteenOrphans)
        );
        // no pair
        assert_eq!(
            special(
                "C1 C9 B1 B9 D1 D9 EAST SOUTH WEST NORTH RED GREEN WHITE D5",
                &none
            ),
            None
        );
    }

    #[test]
    fn nine_gates() {
        let none = ExposedMelds::default();
        assert_eq!(
            special("D1 D1 D1 D2 D3 D4 D5 D6 D7 D8 D9 D9 D9 D9", &none),
            Some(WinningHandType::NineGates)
        );
        assert_eq!(
            special("B1 B1 B1 B2 B3 B4 B5 B5 B6 B7 B8 B9 B9 B9", &none),
            Some(WinningHandType::NineGates)
        );
        // missing rank 5
        assert_eq!(
            special("C1 C1 C1 C2 C3 C4 C4 C6 C7 C8 C9 C9 C9 C9", &none),
            None
        );

        let exposed = ExposedMelds::new(vec![], vec![Tile::East], vec![]);
        assert_eq!(
            special("D1 D1 D1 D2 D3 D4 D5 D6 D7 D8 D9 D9 D9 D9", &exposed),
            None
        );
    }
}
