use crate::decompose::{decompose, ExposedMelds, Melds};
use crate::faan::WinningHandType;
use crate::special::detect_special;
use crate::tile::{SuitGroup, TileCounts};
use tracing::debug;

/// Shape of the hand before bonus tiles and winning conditions are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandShape {
    /// Scored as a whole without decomposition.
    Special(WinningHandType),
    /// Tiles do not form four melds and one eye.
    Trick,
    /// Regular hand; may have no pattern at all (a chicken hand).
    Regular(Vec<WinningHandType>),
}

impl HandShape {
    /// Shape patterns with the trick/chicken floor applied, never empty.
    pub fn into_winning_hand_types(self) -> Vec<WinningHandType> {
        match self {
            HandShape::Special(t) => vec![t],
            HandShape::Trick => vec![WinningHandType::TrickHand],
            HandShape::Regular(types) if types.is_empty() => vec![WinningHandType::ChickenHand],
            HandShape::Regular(types) => types,
        }
    }
}

/// Classify the concealed tiles plus exposed melds.
///
/// `wind` and `dragon` are the (single) decompositions of the honor groups;
/// the three suits are decomposed here.
pub fn classify(
    counts: &TileCounts,
    exposed: &ExposedMelds,
    wind: &Melds,
    dragon: &Melds,
) -> HandShape {
    if let Some(special) = detect_special(counts, exposed) {
        debug!(?special, "special hand");
        return HandShape::Special(special);
    }

    let characters = decompose(SuitGroup::Character, counts, exposed);
    let bamboos = decompose(SuitGroup::Bamboo, counts, exposed);
    let dots = decompose(SuitGroup::Dot, counts, exposed);

    // later candidates of a suit differ only in how its tiles split, so
    // completeness and the eye can be read off the first one
    if !is_valid([wind, dragon, &characters[0], &bamboos[0], &dots[0]]) {
        return HandShape::Trick;
    }

    let character = select_melds(&characters, &bamboos, &dots);
    let bamboo = select_melds(&bamboos, &characters, &dots);
    let dot = select_melds(&dots, &characters, &bamboos);

    debug!(?wind, ?dragon, "honor melds");
    debug!(?character, ?bamboo, ?dot, "suit melds");

    HandShape::Regular(shape_patterns(wind, dragon, [character, bamboo, dot]))
}

/// Every group fully used and exactly one eye in the whole hand.
fn is_valid(groups: [&Melds; 5]) -> bool {
    groups.iter().all(|m| m.is_complete()) && groups.iter().filter(|m| m.has_eye()).count() == 1
}

/// Pick one candidate of `target` using the other two suits as context.
///
/// Runs elsewhere mean the hand cannot be all triplets, so the run-heavy
/// (last) split is preferred; otherwise a pure triplet or pure run split wins.
fn select_melds<'a>(target: &'a [Melds], other: &[Melds], another: &[Melds]) -> &'a Melds {
    let first = &target[0];
    let last = &target[target.len() - 1];

    if target.len() == 1 {
        return first;
    }
    if !other[0].chows.is_empty() || !another[0].chows.is_empty() {
        return last;
    }
    if first.chows.is_empty() {
        return first;
    }
    if last.pong_kong_count() == 0 {
        return last;
    }
    first
}

fn shape_patterns(wind: &Melds, dragon: &Melds, suits: [&Melds; 3]) -> Vec<WinningHandType> {
    let honor_pong_kongs = wind.pong_kong_count() + dragon.pong_kong_count();
    let honor_eye = wind.has_eye() || dragon.has_eye();
    let orphan_pong_kongs: usize = suits.iter().map(|m| m.orphan_pong_kongs()).sum();
    let orphan_eye = suits.iter().any(|m| m.has_orphan_eye());

    // limit hands stand alone
    if wind.pong_kong_count() == 4 {
        return vec![WinningHandType::GreatWinds];
    }
    if honor_pong_kongs == 4 && honor_eye {
        return vec![WinningHandType::AllHonorTiles];
    }
    if orphan_pong_kongs == 4 && orphan_eye {
        return vec![WinningHandType::Orphans];
    }

    let mut types = vec![];

    if suits.iter().map(|m| m.chows.len()).sum::<usize>() == 4 {
        types.push(WinningHandType::CommonHand);
    }

    let suit_pong_kongs: usize = suits.iter().map(|m| m.pong_kong_count()).sum();
    if honor_pong_kongs + suit_pong_kongs == 4 {
        types.push(WinningHandType::AllInTriplets);
        if orphan_pong_kongs + honor_pong_kongs == 4 && (honor_eye || orphan_eye) {
            types.push(WinningHandType::MixedOrphans);
        }
    }

    if wind.pong_kong_count() == 3 && wind.has_eye() {
        types.push(WinningHandType::SmallWinds);
    }

    if dragon.pong_kong_count() == 3 {
        types.push(WinningHandType::GreatDragon);
    } else if dragon.pong_kong_count() == 2 && dragon.has_eye() {
        types.push(WinningHandType::SmallDragon);
    }

    if suits.iter().any(|m| is_all_one_suit(m)) {
        types.push(WinningHandType::AllOneSuit);
    } else if suits.iter().any(|m| is_mixed_one_suit(m, wind, dragon)) {
        types.push(WinningHandType::MixedOneSuit);
    }

    types
}

fn is_all_one_suit(suit: &Melds) -> bool {
    suit.meld_count() == 4 && suit.has_eye()
}

fn is_mixed_one_suit(suit: &Melds, wind: &Melds, dragon: &Melds) -> bool {
    suit.meld_count() + wind.pong_kong_count() + dragon.pong_kong_count() == 4
        && (suit.has_eye() || wind.has_eye() || dragon.has_eye())
}
