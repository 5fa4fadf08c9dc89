use serde::{Deserialize, Serialize};

mod bonus;
mod classify;
mod conditions;
mod decompose;
mod engine;
mod faan;
mod score;
mod special;
mod tile;

pub use decompose::{decompose, Chow, ExposedMelds, Melds};
pub use faan::{HandTypeInfo, WinningHand, WinningHandType};
pub use score::{score, score_hand, winning_hand_types};
pub use tile::{parse_tiles, Family, SuitGroup, Tile, TileCounts, TILE_KINDS};

/// Prevailing (round) wind and the winner's seat wind.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct WindSettings {
    pub prevailing: Tile,
    pub seat: Tile,
}

impl Default for WindSettings {
    fn default() -> Self {
        WindSettings {
            prevailing: Tile::East,
            seat: Tile::East,
        }
    }
}

/// How the winning tile was obtained.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct WinningConditions {
    pub self_pick: bool,
    pub win_by_last_catch: bool,
    pub robbing_kong: bool,
    pub win_by_kong: bool,
    pub win_by_double_kong: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Concealed tiles including the winning tile, without exposed melds.
    pub hand_tiles: Vec<Tile>,
    #[serde(default)]
    pub exposed_melds: ExposedMelds,
    #[serde(default)]
    pub bonus_tiles: Vec<Tile>,
    #[serde(default)]
    pub wind: WindSettings,
    #[serde(default)]
    pub winning_conditions: WinningConditions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WinningHandDescription {
    #[serde(rename = "type")]
    pub hand_type: WinningHandType,
    pub name: String,
    pub faans: i32,
    pub limit_hand: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_faans: i32,
    pub winning_hands: Vec<WinningHandDescription>,
}

impl From<&WinningHand> for ScoreResult {
    fn from(hand: &WinningHand) -> Self {
        ScoreResult {
            total_faans: hand.faans(),
            winning_hands: hand
                .winning_hand_types
                .iter()
                .map(|&t| {
                    let info = t.info();
                    WinningHandDescription {
                        hand_type: t,
                        name: info.name.to_string(),
                        faans: info.faans,
                        limit_hand: info.limit_hand,
                    }
                })
                .collect(),
        }
    }
}
