use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of distinct tile kinds (winds, dragons, 3 suits, flowers, seasons).
pub const TILE_KINDS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Honor,
    Suited,
    Bonus,
}

/// Tile kinds in catalog order. The discriminant is the tile index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Tile {
    East = 0,
    South,
    West,
    North,
    Red,
    Green,
    White,
    C1,
    C2,
    C3,
    C4,
    C5,
    C6,
    C7,
    C8,
    C9,
    B1,
    B2,
    B3,
    B4,
    B5,
    B6,
    B7,
    B8,
    B9,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
    F1,
    F2,
    F3,
    F4,
    S1,
    S2,
    S3,
    S4,
}

impl Tile {
    pub const ALL: [Tile; TILE_KINDS] = [
        Tile::East,
        Tile::South,
        Tile::West,
        Tile::North,
        Tile::Red,
        Tile::Green,
        Tile::White,
        Tile::C1,
        Tile::C2,
        Tile::C3,
        Tile::C4,
        Tile::C5,
        Tile::C6,
        Tile::C7,
        Tile::C8,
        Tile::C9,
        Tile::B1,
        Tile::B2,
        Tile::B3,
        Tile::B4,
        Tile::B5,
        Tile::B6,
        Tile::B7,
        Tile::B8,
        Tile::B9,
        Tile::D1,
        Tile::D2,
        Tile::D3,
        Tile::D4,
        Tile::D5,
        Tile::D6,
        Tile::D7,
        Tile::D8,
        Tile::D9,
        Tile::F1,
        Tile::F2,
        Tile::F3,
        Tile::F4,
        Tile::S1,
        Tile::S2,
        Tile::S3,
        Tile::S4,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn group(self) -> SuitGroup {
        use Tile::*;
        match self {
            East | South | West | North => SuitGroup::Wind,
            Red | Green | White => SuitGroup::Dragon,
            C1 | C2 | C3 | C4 | C5 | C6 | C7 | C8 | C9 => SuitGroup::Character,
            B1 | B2 | B3 | B4 | B5 | B6 | B7 | B8 | B9 => SuitGroup::Bamboo,
            D1 | D2 | D3 | D4 | D5 | D6 | D7 | D8 | D9 => SuitGroup::Dot,
            F1 | F2 | F3 | F4 => SuitGroup::Flower,
            S1 | S2 | S3 | S4 => SuitGroup::Season,
        }
    }

    /// 1-based position inside the tile's suit group.
    pub fn rank(self) -> usize {
        self.index() - self.group().first().index() + 1
    }

    /// First or last rank of a suited group.
    pub fn is_orphan(self) -> bool {
        let group = self.group();
        group.family() == Family::Suited && (self == group.first() || self == group.last())
    }

    /// The run starting at this tile, if it can start one.
    pub fn chow(self) -> Option<[Tile; 3]> {
        let group = self.group();
        if group.family() != Family::Suited || self.rank() > group.size() - 2 {
            return None;
        }
        let i = self.index();
        Some([Tile::ALL[i], Tile::ALL[i + 1], Tile::ALL[i + 2]])
    }

    pub fn code(self) -> &'static str {
        match self {
            Tile::East => "EAST",
            Tile::South => "SOUTH",
            Tile::West => "WEST",
            Tile::North => "NORTH",
            Tile::Red => "RED",
            Tile::Green => "GREEN",
            Tile::White => "WHITE",
            Tile::C1 => "C1",
            Tile::C2 => "C2",
            Tile::C3 => "C3",
            Tile::C4 => "C4",
            Tile::C5 => "C5",
            Tile::C6 => "C6",
            Tile::C7 => "C7",
            Tile::C8 => "C8",
            Tile::C9 => "C9",
            Tile::B1 => "B1",
            Tile::B2 => "B2",
            Tile::B3 => "B3",
            Tile::B4 => "B4",
            Tile::B5 => "B5",
            Tile::B6 => "B6",
            Tile::B7 => "B7",
            Tile::B8 => "B8",
            Tile::B9 => "B9",
            Tile::D1 => "D1",
            Tile::D2 => "D2",
            Tile::D3 => "D3",
            Tile::D4 => "D4",
            Tile::D5 => "D5",
            Tile::D6 => "D6",
            Tile::D7 => "D7",
            Tile::D8 => "D8",
            Tile::D9 => "D9",
            Tile::F1 => "F1",
            Tile::F2 => "F2",
            Tile::F3 => "F3",
            Tile::F4 => "F4",
            Tile::S1 => "S1",
            Tile::S2 => "S2",
            Tile::S3 => "S3",
            Tile::S4 => "S4",
        }
    }
}

impl FromStr for Tile {
    type Err = anyhow::Error;

    fn from_str(code: &str) -> Result<Self> {
        match Tile::ALL.into_iter().find(|t| t.code() == code) {
            Some(t) => Ok(t),
            None => bail!("unknown tile: {code}"),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Parse whitespace separated tile names, e.g. `"D1 D2 D3 EAST"`.
pub fn parse_tiles(s: &str) -> Result<Vec<Tile>> {
    s.split_whitespace().map(Tile::from_str).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuitGroup {
    Wind,
    Dragon,
    Character,
    Bamboo,
    Dot,
    Flower,
    Season,
}

impl SuitGroup {
    pub const ALL: [SuitGroup; 7] = [
        SuitGroup::Wind,
        SuitGroup::Dragon,
        SuitGroup::Character,
        SuitGroup::Bamboo,
        SuitGroup::Dot,
        SuitGroup::Flower,
        SuitGroup::Season,
    ];

    pub const SUITED: [SuitGroup; 3] = [SuitGroup::Character, SuitGroup::Bamboo, SuitGroup::Dot];

    pub fn first(self) -> Tile {
        match self {
            SuitGroup::Wind => Tile::East,
            SuitGroup::Dragon => Tile::Red,
            SuitGroup::Character => Tile::C1,
            SuitGroup::Bamboo => Tile::B1,
            SuitGroup::Dot => Tile::D1,
            SuitGroup::Flower => Tile::F1,
            SuitGroup::Season => Tile::S1,
        }
    }

    pub fn family(self) -> Family {
        match self {
            SuitGroup::Wind | SuitGroup::Dragon => Family::Honor,
            SuitGroup::Character | SuitGroup::Bamboo | SuitGroup::Dot => Family::Suited,
            SuitGroup::Flower | SuitGroup::Season => Family::Bonus,
        }
    }

    pub fn size(self) -> usize {
        match self {
            SuitGroup::Wind | SuitGroup::Flower | SuitGroup::Season => 4,
            SuitGroup::Dragon => 3,
            SuitGroup::Character | SuitGroup::Bamboo | SuitGroup::Dot => 9,
        }
    }

    pub fn last(self) -> Tile {
        Tile::ALL[self.first().index() + self.size() - 1]
    }

    pub fn contains(self, tile: Tile) -> bool {
        (self.first()..=self.last()).contains(&tile)
    }

    /// Tile at a 1-based rank inside this group.
    pub fn tile_at(self, rank: usize) -> Tile {
        Tile::ALL[self.first().index() + rank - 1]
    }

    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        (1..=self.size()).map(move |rank| self.tile_at(rank))
    }
}

/// Concealed tiles as a count per tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCounts([usize; TILE_KINDS]);

impl TileCounts {
    pub fn from_tiles(tiles: &[Tile]) -> Self {
        let mut counts = [0; TILE_KINDS];
        for t in tiles {
            counts[t.index()] += 1;
        }
        TileCounts(counts)
    }

    pub fn get(&self, tile: Tile) -> usize {
        self.0[tile.index()]
    }

    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn group_total(&self, group: SuitGroup) -> usize {
        group.tiles().map(|t| self.get(t)).sum()
    }

    /// Counts of one group, 1-indexed: slot 0 is unused, slot `r` holds rank `r`.
    pub fn group_slice(&self, group: SuitGroup) -> Vec<usize> {
        let mut slice = vec![0; group.size() + 1];
        for (rank, t) in group.tiles().enumerate() {
            slice[rank + 1] = self.get(t);
        }
        slice
    }
}
