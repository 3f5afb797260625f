//! D: index finger up, the other fingers curled onto the thumb.

use super::shape::{are_curled, usable_hand};
use crate::{
    features::Features,
    hand::{Finger, LandmarkKind},
};

const DEFAULT_PALM_MAX_NORMAL_Z: f32 = 0.1;
const DEFAULT_INDEX_MAX_ANGLE: f32 = 30.0;
const DEFAULT_THUMB_MIDDLE_TIP_MAX_RATIO: f32 = 0.4;
const DEFAULT_INDEX_THUMB_TIP_MIN_RATIO: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LetterDThresholds {
    pub palm_max_normal_z: f32,
    /// Upper bound on both index joint angles, in degrees.
    pub index_max_angle: f32,
    pub thumb_middle_tip_max_ratio: f32,
    pub index_thumb_tip_min_ratio: f32,
}

impl Default for LetterDThresholds {
    fn default() -> Self {
        Self {
            palm_max_normal_z: DEFAULT_PALM_MAX_NORMAL_Z,
            index_max_angle: DEFAULT_INDEX_MAX_ANGLE,
            thumb_middle_tip_max_ratio: DEFAULT_THUMB_MIDDLE_TIP_MAX_RATIO,
            index_thumb_tip_min_ratio: DEFAULT_INDEX_THUMB_TIP_MIN_RATIO,
        }
    }
}

pub fn is_letter_d(features: &Features, thresholds: &LetterDThresholds) -> bool {
    use LandmarkKind::*;

    let hand = match usable_hand(features) {
        Some(hand) => hand,
        None => return false,
    };

    if features.palm_normal().z() > thresholds.palm_max_normal_z {
        return false;
    }

    let index = features.joint_angles.get(Finger::Index);
    if index.base > thresholds.index_max_angle || index.tip > thresholds.index_max_angle {
        return false;
    }

    let hand_scale = features.hand_scale();
    hand.reach(IndexTip) > hand.reach(IndexPip)
        && are_curled(&hand, &[Finger::Middle, Finger::Ring, Finger::Pinky])
        && hand.distance(ThumbTip, MiddleTip) <= hand_scale * thresholds.thumb_middle_tip_max_ratio
        && hand.distance(IndexTip, ThumbTip) >= hand_scale * thresholds.index_thumb_tip_min_ratio
}
