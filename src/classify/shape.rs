//! Finger shape tests shared by several letters.

use crate::{
    features::Features,
    hand::{Finger, LandmarkKind, Skeleton},
};

const MIN_HAND_SCALE: f32 = 1e-6;

/// The hand the letter rules run against, or `None` for a frame that cannot
/// match anything: not exactly 21 landmarks, a hand collapsed to a point, or
/// one whose size overflows.
pub(super) fn usable_hand(features: &Features) -> Option<Skeleton<'_>> {
    let hand_scale = features.hand_scale();
    features
        .skeleton()
        .filter(|_| hand_scale > MIN_HAND_SCALE && hand_scale.is_finite())
}

/// The fingertip is no further from the wrist than the PIP.
pub(super) fn is_curled(hand: &Skeleton<'_>, finger: Finger) -> bool {
    hand.reach(finger.tip()) <= hand.reach(finger.pip())
}

pub(super) fn are_curled(hand: &Skeleton<'_>, fingers: &[Finger]) -> bool {
    fingers.iter().all(|&finger| is_curled(hand, finger))
}

/// The thumb tip is at least as far from the wrist as the thumb IP.
pub(super) fn is_thumb_extended(hand: &Skeleton<'_>) -> bool {
    hand.reach(LandmarkKind::ThumbTip) >= hand.reach(LandmarkKind::ThumbIp)
}

/// The fingertip is above (smaller y than) every other joint of the finger.
pub(super) fn is_pointing_up(hand: &Skeleton<'_>, finger: Finger) -> bool {
    let [base, pip, dip, tip] = finger.chain().map(|kind| hand[kind].y());
    tip < base && tip < pip && tip < dip
}

#[cfg(test)]
mod tests {
    use super::{are_curled, is_curled, is_pointing_up, is_thumb_extended, usable_hand};
    use crate::{
        features::{derive_features, Handedness},
        hand::{fixtures, Finger, Landmark, LandmarkKind, Skeleton, NUM_LANDMARKS},
    };

    #[test]
    fn collapsed_hand_is_unusable() {
        let landmarks = vec![Landmark::zero(); NUM_LANDMARKS];
        assert!(usable_hand(&derive_features(&landmarks, Handedness::Left)).is_none());
        let landmarks = fixtures::letter_a();
        assert!(usable_hand(&derive_features(&landmarks, Handedness::Left)).is_some());
    }

    #[test]
    fn overflowing_hand_is_unusable() {
        let mut landmarks = fixtures::letter_e();
        landmarks[LandmarkKind::Wrist.idx()] = Landmark::new(3e38, 0.8, 0.0).unwrap();
        let features = derive_features(&landmarks, Handedness::Right);
        assert_eq!(features.hand_scale(), f32::INFINITY);
        assert!(usable_hand(&features).is_none());
    }

    #[test]
    fn fist_is_curled_and_not_pointing_up() {
        let landmarks = fixtures::letter_a();
        let hand = Skeleton::new(&landmarks).unwrap();
        assert!(are_curled(&hand, &Finger::NON_THUMB));
        assert!(Finger::NON_THUMB
            .iter()
            .all(|&finger| !is_pointing_up(&hand, finger)));
        assert!(is_thumb_extended(&hand));
    }

    #[test]
    fn flat_hand_points_up() {
        let landmarks = fixtures::letter_b();
        let hand = Skeleton::new(&landmarks).unwrap();
        for finger in Finger::NON_THUMB {
            assert!(is_pointing_up(&hand, finger));
            assert!(!is_curled(&hand, finger));
        }
    }

    #[test]
    fn tucked_thumb_is_not_extended() {
        let landmarks = fixtures::letter_e();
        let hand = Skeleton::new(&landmarks).unwrap();
        assert!(!is_thumb_extended(&hand));
    }
}
