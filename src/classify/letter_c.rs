//! C: fingers and thumb curved into an open "C".

use super::shape::{is_thumb_extended, usable_hand};
use crate::{
    features::Features,
    hand::{Finger, LandmarkKind},
};

const DEFAULT_PALM_MAX_NORMAL_Z: f32 = 0.4;
const DEFAULT_MIN_BASE_ANGLE: f32 = 30.0;
const DEFAULT_MAX_BASE_ANGLE: f32 = 85.0;
const DEFAULT_THUMB_INDEX_TIP_MIN_RATIO: f32 = 0.4;
const DEFAULT_THUMB_INDEX_MCP_MIN_RATIO: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LetterCThresholds {
    pub palm_max_normal_z: f32,
    /// Exclusive lower bound on every non-thumb base angle, in degrees.
    pub min_base_angle: f32,
    /// Exclusive upper bound on every non-thumb base angle, in degrees.
    pub max_base_angle: f32,
    /// Minimum gap between the thumb and index tips, as a fraction of the
    /// hand scale.
    pub thumb_index_tip_min_ratio: f32,
    /// Minimum thumb tip to index MCP distance, as a fraction of the hand
    /// scale.
    pub thumb_index_mcp_min_ratio: f32,
}

impl Default for LetterCThresholds {
    fn default() -> Self {
        Self {
            palm_max_normal_z: DEFAULT_PALM_MAX_NORMAL_Z,
            min_base_angle: DEFAULT_MIN_BASE_ANGLE,
            max_base_angle: DEFAULT_MAX_BASE_ANGLE,
            thumb_index_tip_min_ratio: DEFAULT_THUMB_INDEX_TIP_MIN_RATIO,
            thumb_index_mcp_min_ratio: DEFAULT_THUMB_INDEX_MCP_MIN_RATIO,
        }
    }
}

pub fn is_letter_c(features: &Features, thresholds: &LetterCThresholds) -> bool {
    let hand = match usable_hand(features) {
        Some(hand) => hand,
        None => return false,
    };

    if features.palm_normal().z() > thresholds.palm_max_normal_z {
        return false;
    }

    let moderately_bent = Finger::NON_THUMB.iter().all(|&finger| {
        let base = features.joint_angles.get(finger).base;
        base > thresholds.min_base_angle && base < thresholds.max_base_angle
    });
    if !moderately_bent {
        return false;
    }

    let hand_scale = features.hand_scale();
    hand.distance(LandmarkKind::ThumbTip, LandmarkKind::IndexTip)
        >= hand_scale * thresholds.thumb_index_tip_min_ratio
        && is_thumb_extended(&hand)
        && hand.distance(LandmarkKind::ThumbTip, LandmarkKind::IndexMcp)
            >= hand_scale * thresholds.thumb_index_mcp_min_ratio
}
