use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WinningHandType {
    TrickHand,
    ChickenHand,
    CommonHand,
    AllInTriplets,
    SelfTriplets,
    MixedOneSuit,
    AllOneSuit,
    MixedOrphans,
    SmallDragon,
    GreatDragon,
    SmallWinds,
    GreatWinds,
    AllHonorTiles,
    Orphans,
    NineGates,
    ThirteenOrphans,
    AllKongs,
    GreatFlowers,
    FlowerHands,
    WinFromWall,
    NoFlowers,
    AllFlowers,
    FlowerOfOwnWind,
    PrevailingWind,
    SeatWind,
    OneDragon,
    SelfPick,
    SelfPickWithoutExtraFaan,
    WinByKong,
    WinByDoubleKong,
    WinByLastCatch,
    RobbingKong,
}

/// Score table entry for one winning hand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTypeInfo {
    pub name: &'static str,
    pub faans: i32,
    pub limit_hand: bool,
}

const fn entry(name: &'static str, faans: i32, limit_hand: bool) -> HandTypeInfo {
    HandTypeInfo {
        name,
        faans,
        limit_hand,
    }
}

impl WinningHandType {
    pub fn info(self) -> HandTypeInfo {
        use WinningHandType::*;
        match self {
            TrickHand => entry("Trick Hand", -1, false),
            ChickenHand => entry("Chicken Hand", 0, false),
            CommonHand => entry("Common Hand", 1, false),
            AllInTriplets => entry("All in Triplets", 3, false),
            SelfTriplets => entry("Self Triplets", 8, false),
            MixedOneSuit => entry("Mixed One Suit", 3, false),
            AllOneSuit => entry("All One Suit", 7, false),
            MixedOrphans => entry("Mixed Orphans", 1, false),
            SmallDragon => entry("Small Dragon", 5, false),
            GreatDragon => entry("Great Dragon", 8, false),
            SmallWinds => entry("Small Winds", 3, false),
            GreatWinds => entry("Great Winds", 13, true),
            AllHonorTiles => entry("All Honor Tiles", 10, true),
            Orphans => entry("Orphans", 10, true),
            NineGates => entry("Nine Gates", 10, true),
            ThirteenOrphans => entry("Thirteen Orphans", 13, true),
            AllKongs => entry("All Kongs", 13, true),
            GreatFlowers => entry("Great Flowers", 8, false),
            FlowerHands => entry("Flower Hands", 3, false),
            WinFromWall => entry("Win from Wall", 1, false),
            NoFlowers => entry("No Flowers", 1, false),
            AllFlowers => entry("All Flowers", 2, false),
            FlowerOfOwnWind => entry("Flower of Own Wind", 1, false),
            PrevailingWind => entry("Prevailing Wind", 1, false),
            SeatWind => entry("Seat Wind", 1, false),
            OneDragon => entry("A Meld of Dragon", 1, false),
            SelfPick => entry("Self Pick", 1, false),
            SelfPickWithoutExtraFaan => entry("Self Pick without Extra Faan", 0, false),
            WinByKong => entry("Win by Kong", 1, false),
            WinByDoubleKong => entry("Win by Double Kong", 8, false),
            WinByLastCatch => entry("Win by Last Catch", 1, false),
            RobbingKong => entry("Robbing Kong", 1, false),
        }
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn faans(self) -> i32 {
        self.info().faans
    }

    pub fn is_limit_hand(self) -> bool {
        self.info().limit_hand
    }
}

/// Every pattern a scored hand qualifies for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WinningHand {
    pub winning_hand_types: Vec<WinningHandType>,
}

impl WinningHand {
    pub fn new(winning_hand_types: Vec<WinningHandType>) -> Self {
        WinningHand { winning_hand_types }
    }

    pub fn contains(&self, hand_type: WinningHandType) -> bool {
        self.winning_hand_types.contains(&hand_type)
    }

    /// Trick Hand and All Honor Tiles replace the sum with their own value.
    pub fn faans(&self) -> i32 {
        for fixed in [WinningHandType::TrickHand, WinningHandType::AllHonorTiles] {
            if self.contains(fixed) {
                return fixed.faans();
            }
        }
        self.winning_hand_types.iter().map(|t| t.faans()).sum()
    }
}
