use crate::decompose::{ExposedMelds, Melds};
use crate::faan::WinningHandType;
use crate::tile::{SuitGroup, Tile};
use crate::WindSettings;

/// Patterns that do not depend on the hand shape: a concealed hand, honor
/// melds matching the table, and the flowers/seasons held.
pub fn bonus_winning_hands(
    wind: &Melds,
    dragon: &Melds,
    bonus_tiles: &[Tile],
    settings: WindSettings,
    exposed: &ExposedMelds,
) -> Vec<WinningHandType> {
    let mut types = vec![];

    if exposed.is_empty() {
        types.push(WinningHandType::WinFromWall);
    }
    types.extend(wind_types(wind, settings));
    types.extend(dragon_types(dragon));
    types.extend(bonus_tile_types(bonus_tiles, settings.seat));

    types
}

fn wind_types(wind: &Melds, settings: WindSettings) -> Vec<WinningHandType> {
    let mut types = vec![];
    if wind.has_pong_kong(settings.prevailing) {
        types.push(WinningHandType::PrevailingWind);
    }
    if wind.has_pong_kong(settings.seat) {
        types.push(WinningHandType::SeatWind);
    }
    types
}

/// One entry per dragon pong or kong.
fn dragon_types(dragon: &Melds) -> Vec<WinningHandType> {
    vec![WinningHandType::OneDragon; dragon.pong_kong_count()]
}

fn bonus_tile_types(bonus_tiles: &[Tile], seat: Tile) -> Vec<WinningHandType> {
    let holds_all = |group: SuitGroup| group.tiles().all(|t| bonus_tiles.contains(&t));
    let all_flowers = holds_all(SuitGroup::Flower);
    let all_seasons = holds_all(SuitGroup::Season);

    match bonus_tiles.len() {
        8 => return vec![WinningHandType::GreatFlowers],
        7 if all_flowers || all_seasons => return vec![WinningHandType::FlowerHands],
        0 => return vec![WinningHandType::NoFlowers],
        _ => {}
    }

    let own_wind = seat.index() - SuitGroup::Wind.first().index();
    let mut types = vec![];

    if all_flowers || all_seasons {
        types.push(WinningHandType::AllFlowers);
        // with a full set, only the other set can still hold the own-wind tile
        let other = if all_flowers {
            SuitGroup::Season
        } else {
            SuitGroup::Flower
        };
        if holds_own_wind(bonus_tiles, own_wind, other) {
            types.push(WinningHandType::FlowerOfOwnWind);
        }
    } else {
        for group in [SuitGroup::Flower, SuitGroup::Season] {
            if holds_own_wind(bonus_tiles, own_wind, group) {
                types.push(WinningHandType::FlowerOfOwnWind);
            }
        }
    }

    types
}

fn holds_own_wind(bonus_tiles: &[Tile], own_wind: usize, group: SuitGroup) -> bool {
    bonus_tiles
        .iter()
        .any(|&t| group.contains(t) && t.rank() - 1 == own_wind)
}
