use crate::bonus::bonus_winning_hands;
use crate::classify::{classify, HandShape};
use crate::conditions::{extra_winning_hands, is_win_by_flowers_only};
use crate::decompose::{decompose, ExposedMelds, Melds};
use crate::faan::{WinningHand, WinningHandType};
use crate::tile::{SuitGroup, Tile, TileCounts};
use crate::{WindSettings, WinningConditions};
use tracing::debug;

pub fn evaluate(
    hand_tiles: &[Tile],
    exposed: &ExposedMelds,
    bonus_tiles: &[Tile],
    wind: WindSettings,
    conditions: &WinningConditions,
) -> WinningHand {
    let counts = TileCounts::from_tiles(hand_tiles);
    let (wind_melds, dragon_melds) = honor_melds(&counts, exposed);

    let bonus = bonus_winning_hands(&wind_melds, &dragon_melds, bonus_tiles, wind, exposed);
    let shape = match classify(&counts, exposed, &wind_melds, &dragon_melds) {
        HandShape::Special(special) => vec![special],
        HandShape::Regular(types) => types,
        // a full flower set wins on its own
        HandShape::Trick if is_win_by_flowers_only(&[], &bonus) => vec![],
        HandShape::Trick => return WinningHand::new(vec![WinningHandType::TrickHand]),
    };
    let extra = extra_winning_hands(conditions, &shape, &bonus);
    let flowers_only = is_win_by_flowers_only(&shape, &bonus);
    debug!(?shape, ?bonus, ?extra, "pattern groups");

    let mut types: Vec<WinningHandType> = shape.into_iter().chain(bonus).chain(extra).collect();

    if conditions.self_pick && exposed.is_empty() {
        for t in types.iter_mut() {
            if *t == WinningHandType::AllInTriplets {
                *t = WinningHandType::SelfTriplets;
            }
        }
    }

    if types.is_empty() {
        types.push(WinningHandType::ChickenHand);
    }

    let implied_self_pick = types.contains(&WinningHandType::NineGates)
        || types.contains(&WinningHandType::ThirteenOrphans);
    if flowers_only || implied_self_pick {
        types.retain(|&t| t != WinningHandType::WinFromWall);
    }

    WinningHand::new(types)
}

/// Shape patterns only, never empty.
pub fn evaluate_shape(hand_tiles: &[Tile], exposed: &ExposedMelds) -> Vec<WinningHandType> {
    let counts = TileCounts::from_tiles(hand_tiles);
    let (wind_melds, dragon_melds) = honor_melds(&counts, exposed);
    classify(&counts, exposed, &wind_melds, &dragon_melds).into_winning_hand_types()
}

/// Honor groups never form runs, so their best split is unique.
fn honor_melds(counts: &TileCounts, exposed: &ExposedMelds) -> (Melds, Melds) {
    let wind = decompose(SuitGroup::Wind, counts, exposed).swap_remove(0);
    let dragon = decompose(SuitGroup::Dragon, counts, exposed).swap_remove(0);
    (wind, dragon)
}
