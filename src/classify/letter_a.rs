//! A: a fist with the thumb extended alongside the index finger.

use super::shape::{are_curled, is_thumb_extended, usable_hand};
use crate::{
    features::Features,
    hand::{Finger, LandmarkKind},
};

const DEFAULT_PALM_MAX_NORMAL_Z: f32 = 0.1;
const DEFAULT_MIN_BASE_ANGLE: f32 = 80.0;
const DEFAULT_THUMB_INDEX_PIP_MAX_RATIO: f32 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LetterAThresholds {
    pub palm_max_normal_z: f32,
    /// Every non-thumb base angle must be at least this, in degrees.
    pub min_base_angle: f32,
    /// Thumb tip to index PIP, as a fraction of the hand scale.
    pub thumb_index_pip_max_ratio: f32,
}

impl Default for LetterAThresholds {
    fn default() -> Self {
        Self {
            palm_max_normal_z: DEFAULT_PALM_MAX_NORMAL_Z,
            min_base_angle: DEFAULT_MIN_BASE_ANGLE,
            thumb_index_pip_max_ratio: DEFAULT_THUMB_INDEX_PIP_MAX_RATIO,
        }
    }
}

pub fn is_letter_a(features: &Features, thresholds: &LetterAThresholds) -> bool {
    let hand = match usable_hand(features) {
        Some(hand) => hand,
        None => return false,
    };

    if features.palm_normal().z() > thresholds.palm_max_normal_z {
        return false;
    }

    let sharply_bent = Finger::NON_THUMB
        .iter()
        .all(|&finger| features.joint_angles.get(finger).base >= thresholds.min_base_angle);

    sharply_bent
        && are_curled(&hand, &Finger::NON_THUMB)
        && is_thumb_extended(&hand)
        && hand.distance(LandmarkKind::ThumbTip, LandmarkKind::IndexPip)
            <= features.hand_scale() * thresholds.thumb_index_pip_max_ratio
}

#[cfg(test)]
mod tests {
    use super::{is_letter_a, LetterAThresholds};
    use crate::{
        features::{derive_features, Handedness},
        hand::{fixtures, Landmark, LandmarkKind},
    };

    fn check(landmarks: &[Landmark]) -> bool {
        is_letter_a(
            &derive_features(landmarks, Handedness::Right),
            &LetterAThresholds::default(),
        )
    }

    #[test]
    fn fist_with_thumb_alongside() {
        assert!(check(&fixtures::letter_a()));
    }

    #[test]
    fn wrong_landmark_count() {
        let mut landmarks = fixtures::letter_a();
        landmarks.push(Landmark::zero());
        assert!(!check(&landmarks));
        assert!(!check(&landmarks[..20]));
        assert!(!check(&[]));
    }

    #[test]
    fn palm_turned_away() {
        let mut features = derive_features(&fixtures::letter_a(), Handedness::Right);
        features.hand_orientation.palm_normal_vector = Landmark::new(0.0, -0.866, 0.5).unwrap();
        assert!(!is_letter_a(&features, &LetterAThresholds::default()));
    }

    #[test]
    fn splayed_thumb() {
        let mut landmarks = fixtures::letter_a();
        // far out to the side, still further from the wrist than the IP
        landmarks[LandmarkKind::ThumbTip.idx()] = Landmark::new(0.85, 0.60, -0.03).unwrap();
        assert!(!check(&landmarks));
    }

    #[test]
    fn looser_curl_fails_the_angle_cutoff() {
        let features = derive_features(&fixtures::letter_a(), Handedness::Right);
        let strict = LetterAThresholds {
            min_base_angle: 120.0,
            ..Default::default()
        };
        assert!(!is_letter_a(&features, &strict));
    }

    #[test]
    fn cupped_hand_is_not_a() {
        assert!(!check(&fixtures::letter_c()));
    }
}
