use crate::tile::{Family, SuitGroup, Tile, TileCounts};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Reverse;
use tracing::{debug, trace};

/// A run of three consecutive tiles, smallest first.
pub type Chow = [Tile; 3];

/// Melds already declared face-up by the player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposedMelds {
    #[serde(default, deserialize_with = "deserialize_chows")]
    pub chows: Vec<Chow>,
    #[serde(default)]
    pub pongs: Vec<Tile>,
    #[serde(default)]
    pub kongs: Vec<Tile>,
}

/// An exposed chow is written either as its three tiles or as its first tile.
#[derive(Deserialize)]
#[serde(untagged)]
enum ChowForm {
    Run(Chow),
    Start(Tile),
}

fn deserialize_chows<'de, D>(deserializer: D) -> Result<Vec<Chow>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<ChowForm>::deserialize(deserializer)?
        .into_iter()
        .map(|form| match form {
            ChowForm::Run(run) if run[0].chow() == Some(run) => Ok(run),
            ChowForm::Run([a, b, c]) => {
                Err(D::Error::custom(format!("{a} {b} {c} is not a chow")))
            }
            ChowForm::Start(t) => t
                .chow()
                .ok_or_else(|| D::Error::custom(format!("{t} cannot start a chow"))),
        })
        .collect()
}

impl ExposedMelds {
    pub fn new(chows: Vec<Chow>, pongs: Vec<Tile>, kongs: Vec<Tile>) -> Self {
        ExposedMelds {
            chows,
            pongs,
            kongs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.chows.is_empty() && self.pongs.is_empty() && self.kongs.is_empty()
    }

    /// Melds of one group only. Chows are matched by their first tile.
    pub fn for_group(&self, group: SuitGroup) -> ExposedMelds {
        let mut kongs: Vec<Tile> = self
            .kongs
            .iter()
            .copied()
            .filter(|&k| group.contains(k))
            .collect();
        kongs.sort();

        ExposedMelds {
            chows: self
                .chows
                .iter()
                .copied()
                .filter(|c| group.contains(c[0]))
                .collect(),
            pongs: self
                .pongs
                .iter()
                .copied()
                .filter(|&p| group.contains(p))
                .collect(),
            kongs,
        }
    }
}

/// One way of splitting a suit group into chows, pongs, kongs and an eye.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Melds {
    pub group: SuitGroup,
    pub chows: Vec<Chow>,
    pub pongs: Vec<Tile>,
    pub kongs: Vec<Tile>,
    pub eye: Option<Tile>,
    /// Leftover counts, 1-indexed by rank like [`TileCounts::group_slice`].
    pub unused_tiles: Vec<usize>,
    pub unused_tile_count: usize,
    pub unused_pairs: usize,
}

impl Melds {
    pub fn empty(group: SuitGroup) -> Self {
        Melds {
            group,
            chows: vec![],
            pongs: vec![],
            kongs: vec![],
            eye: None,
            unused_tiles: vec![0; group.size() + 1],
            unused_tile_count: 0,
            unused_pairs: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.unused_tile_count == 0
    }

    pub fn has_eye(&self) -> bool {
        self.eye.is_some()
    }

    pub fn pong_kong_count(&self) -> usize {
        self.pongs.len() + self.kongs.len()
    }

    pub fn meld_count(&self) -> usize {
        self.chows.len() + self.pong_kong_count()
    }

    pub fn has_pong_kong(&self, tile: Tile) -> bool {
        self.pongs.contains(&tile) || self.kongs.contains(&tile)
    }

    pub fn orphan_pong_kongs(&self) -> usize {
        self.pongs
            .iter()
            .chain(&self.kongs)
            .filter(|t| t.is_orphan())
            .count()
    }

    pub fn has_orphan_eye(&self) -> bool {
        self.eye.is_some_and(Tile::is_orphan)
    }

    /// Ordering used to pick the best candidate. A missing eye sorts before any eye.
    fn rank_key(&self) -> (usize, usize, Reverse<usize>, Reverse<usize>, Option<Tile>) {
        (
            self.unused_tile_count,
            self.unused_pairs,
            Reverse(self.pong_kong_count()),
            Reverse(self.chows.len()),
            self.eye,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    PongFirst,
    ChowFirst,
}

/// Split one suit group of the hand into its best melds.
///
/// Returns a single candidate unless the group has several complete splits,
/// in which case all of them come back, best first. An incomplete group yields
/// only its best (still incomplete) candidate.
pub fn decompose(group: SuitGroup, counts: &TileCounts, exposed: &ExposedMelds) -> Vec<Melds> {
    let exposed = exposed.for_group(group);

    if counts.group_total(group) == 0 && exposed.is_empty() {
        return vec![Melds::empty(group)];
    }

    let working = counts.group_slice(group);

    let mut candidates = vec![];
    push_candidate(
        &mut candidates,
        build_melds(group, working.clone(), &exposed, None, Pass::PongFirst),
    );
    push_candidate(
        &mut candidates,
        build_melds(group, working.clone(), &exposed, None, Pass::ChowFirst),
    );

    // every tile with a pair available gets a turn as the eye
    for rank in 1..working.len() {
        if working[rank] >= 2 {
            let mut reserved = working.clone();
            reserved[rank] -= 2;
            push_candidate(
                &mut candidates,
                build_melds(group, reserved, &exposed, Some(rank), Pass::ChowFirst),
            );
        }
    }

    debug!(?group, candidates = candidates.len(), "meld candidates");
    select_best(candidates)
}

fn push_candidate(candidates: &mut Vec<Melds>, melds: Melds) {
    trace!(?melds, "candidate");
    if !candidates.contains(&melds) {
        candidates.push(melds);
    }
}

fn build_melds(
    group: SuitGroup,
    mut tiles: Vec<usize>,
    exposed: &ExposedMelds,
    reserved_eye: Option<usize>,
    pass: Pass,
) -> Melds {
    let mut chows = exposed.chows.clone();
    let mut pongs = exposed.pongs.clone();

    match pass {
        Pass::PongFirst => {
            pongs.extend(take_pongs(group, &mut tiles, reserved_eye));
            chows.extend(take_chows(group, &mut tiles));
        }
        Pass::ChowFirst => {
            chows.extend(take_chows(group, &mut tiles));
            pongs.extend(take_pongs(group, &mut tiles, reserved_eye));
        }
    }

    chows.sort_by_key(|c| c[0]);
    pongs.sort();

    // first exact pair wins; other pairs stay behind as unused
    let eye_rank = (1..tiles.len()).find(|&rank| tiles[rank] == 2);
    if let Some(rank) = eye_rank {
        tiles[rank] = 0;
    }

    let unused_tile_count = tiles.iter().sum();
    let unused_pairs = tiles.iter().filter(|&&c| c >= 2).count();

    Melds {
        group,
        chows,
        pongs,
        kongs: exposed.kongs.clone(),
        eye: eye_rank.map(|rank| group.tile_at(rank)),
        unused_tiles: tiles,
        unused_tile_count,
        unused_pairs,
    }
}

/// Greedily removes runs from the lowest rank up. Only suited groups form runs.
fn take_chows(group: SuitGroup, tiles: &mut [usize]) -> Vec<Chow> {
    if group.family() != Family::Suited {
        return vec![];
    }

    let mut chows = vec![];
    for rank in 1..tiles.len() - 2 {
        while tiles[rank] > 0 && tiles[rank + 1] > 0 && tiles[rank + 2] > 0 {
            chows.push([
                group.tile_at(rank),
                group.tile_at(rank + 1),
                group.tile_at(rank + 2),
            ]);
            tiles[rank] -= 1;
            tiles[rank + 1] -= 1;
            tiles[rank + 2] -= 1;
        }
    }
    chows
}

/// Puts a reserved eye back first, then removes every exact triplet.
fn take_pongs(group: SuitGroup, tiles: &mut [usize], reserved_eye: Option<usize>) -> Vec<Tile> {
    if let Some(rank) = reserved_eye {
        tiles[rank] += 2;
    }

    let mut pongs = vec![];
    for rank in 1..tiles.len() {
        if tiles[rank] == 3 {
            pongs.push(group.tile_at(rank));
            tiles[rank] = 0;
        }
    }
    pongs
}

fn select_best(mut candidates: Vec<Melds>) -> Vec<Melds> {
    assert!(
        !candidates.is_empty(),
        "meld decomposition produced no candidates"
    );

    candidates.sort_by_key(Melds::rank_key);

    // an incomplete group makes the hand a trick hand whatever else we pick
    if candidates.len() == 1 || !candidates[0].is_complete() {
        candidates.truncate(1);
        return candidates;
    }

    candidates.retain(|m| m.is_complete() && m.unused_pairs == 0);
    candidates
}
