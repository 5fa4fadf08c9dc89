use crate::decompose::ExposedMelds;
use crate::engine::{evaluate, evaluate_shape};
use crate::faan::{WinningHand, WinningHandType};
use crate::tile::Tile;
use crate::{ScoreRequest, ScoreResult, WindSettings, WinningConditions};

pub fn score(req: &ScoreRequest) -> ScoreResult {
    let hand = score_hand(
        &req.hand_tiles,
        &req.exposed_melds,
        &req.bonus_tiles,
        req.wind,
        &req.winning_conditions,
    );
    ScoreResult::from(&hand)
}

/// Score a winning hand. `hand_tiles` are the concealed tiles only; the
/// tiles of exposed melds are passed through `exposed`.
pub fn score_hand(
    hand_tiles: &[Tile],
    exposed: &ExposedMelds,
    bonus_tiles: &[Tile],
    wind: WindSettings,
    conditions: &WinningConditions,
) -> WinningHand {
    evaluate(hand_tiles, exposed, bonus_tiles, wind, conditions)
}

/// Patterns of the hand shape alone, ignoring flowers, winds at the table and
/// how the hand was won.
pub fn winning_hand_types(hand_tiles: &[Tile], exposed: &ExposedMelds) -> Vec<WinningHandType> {
    evaluate_shape(hand_tiles, exposed)
}
