use crate::faan::WinningHandType;
use crate::WinningConditions;

/// No shape pattern at all, carried by Great Flowers or Flower Hands.
pub fn is_win_by_flowers_only(shape: &[WinningHandType], bonus: &[WinningHandType]) -> bool {
    shape.is_empty()
        && (bonus.contains(&WinningHandType::GreatFlowers)
            || bonus.contains(&WinningHandType::FlowerHands))
}

/// Patterns contributed by how the hand was won.
pub fn extra_winning_hands(
    conditions: &WinningConditions,
    shape: &[WinningHandType],
    bonus: &[WinningHandType],
) -> Vec<WinningHandType> {
    let mut types = vec![];
    let all_kongs = shape.contains(&WinningHandType::AllKongs);

    if conditions.win_by_kong && !all_kongs {
        types.push(WinningHandType::WinByKong);
    }
    if conditions.win_by_double_kong && !all_kongs {
        types.push(WinningHandType::WinByDoubleKong);
    }
    if conditions.win_by_last_catch {
        types.push(WinningHandType::WinByLastCatch);
    }
    if conditions.robbing_kong {
        types.push(WinningHandType::RobbingKong);
    }

    let flowers_only = is_win_by_flowers_only(shape, bonus);
    if conditions.self_pick {
        if flowers_only || shape.iter().any(|t| t.is_limit_hand()) {
            types.push(WinningHandType::SelfPickWithoutExtraFaan);
        } else {
            types.push(WinningHandType::SelfPick);
        }
    } else if flowers_only || shape.contains(&WinningHandType::ThirteenOrphans) {
        // counted as a self pick at zero faan
        types.push(WinningHandType::SelfPickWithoutExtraFaan);
    }

    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use WinningHandType::*;

    fn conditions(
        self_pick: bool,
        win_by_last_catch: bool,
        robbing_kong: bool,
        win_by_kong: bool,
        win_by_double_kong: bool,
    ) -> WinningConditions {
        WinningConditions {
            self_pick,
            win_by_last_catch,
            robbing_kong,
            win_by_kong,
            win_by_double_kong,
        }
    }

    fn self_pick() -> WinningConditions {
        conditions(true, false, false, false, false)
    }

    #[test]
    fn kong_wins_are_absorbed_by_all_kongs() {
        let by_kong = conditions(true, false, false, true, false);
        assert_eq!(
            extra_winning_hands(&by_kong, &[], &[]),
            vec![WinByKong, SelfPick]
        );
        assert_eq!(
            extra_winning_hands(&by_kong, &[AllKongs], &[]),
            vec![SelfPickWithoutExtraFaan]
        );

        let by_double_kong = conditions(true, false, false, false, true);
        assert_eq!(
            extra_winning_hands(&by_double_kong, &[], &[]),
            vec![WinByDoubleKong, SelfPick]
        );
        assert_eq!(
            extra_winning_hands(&by_double_kong, &[AllKongs], &[]),
            vec![SelfPickWithoutExtraFaan]
        );
    }

    #[test]
    fn last_catch_and_robbing_kong() {
        let last_catch = conditions(true, true, false, false, false);
        assert_eq!(
            extra_winning_hands(&last_catch, &[AllOneSuit], &[]),
            vec![WinByLastCatch, SelfPick]
        );

        let robbing_kong = conditions(false, false, true, false, false);
        assert_eq!(
            extra_winning_hands(&robbing_kong, &[AllOneSuit], &[]),
            vec![RobbingKong]
        );
    }

    #[test]
    fn self_pick_on_flowers_or_limit_hand_earns_nothing() {
        assert_eq!(
            extra_winning_hands(&self_pick(), &[], &[FlowerHands]),
            vec![SelfPickWithoutExtraFaan]
        );
        assert_eq!(
            extra_winning_hands(&self_pick(), &[], &[GreatFlowers]),
            vec![SelfPickWithoutExtraFaan]
        );
        assert_eq!(
            extra_winning_hands(&self_pick(), &[AllOneSuit], &[FlowerHands]),
            vec![SelfPick]
        );
        for limit in [
            ThirteenOrphans,
            GreatWinds,
            Orphans,
            NineGates,
            AllHonorTiles,
        ] {
            assert_eq!(
                extra_winning_hands(&self_pick(), &[limit], &[]),
                vec![SelfPickWithoutExtraFaan],
                "{limit:?}"
            );
        }
    }

    #[test]
    fn thirteen_orphans_and_flowers_count_as_self_pick() {
        let discard = WinningConditions::default();
        assert_eq!(
            extra_winning_hands(&discard, &[ThirteenOrphans], &[]),
            vec![SelfPickWithoutExtraFaan]
        );
        assert_eq!(
            extra_winning_hands(&discard, &[], &[GreatFlowers, WinFromWall]),
            vec![SelfPickWithoutExtraFaan]
        );
        assert_eq!(
            extra_winning_hands(&discard, &[], &[FlowerHands]),
            vec![SelfPickWithoutExtraFaan]
        );
        assert_eq!(
            extra_winning_hands(&discard, &[ThirteenOrphans], &[GreatFlowers]),
            vec![SelfPickWithoutExtraFaan]
        );
        let common = extra_winning_hands(&discard, &[CommonHand], &[NoFlowers]);
        assert!(common.is_empty());
    }

    #[test]
    fn flowers_only_needs_empty_shape() {
        assert!(is_win_by_flowers_only(&[], &[GreatFlowers]));
        assert!(is_win_by_flowers_only(&[], &[WinFromWall, FlowerHands]));
        assert!(!is_win_by_flowers_only(&[], &[AllFlowers]));
        assert!(!is_win_by_flowers_only(&[CommonHand], &[GreatFlowers]));
    }
}
