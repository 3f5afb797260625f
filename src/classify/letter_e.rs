//! E: fingers curled down over a thumb tucked underneath them.

use super::shape::{are_curled, usable_hand};
use crate::{
    features::Features,
    hand::{Finger, LandmarkKind},
};

const DEFAULT_PALM_MAX_NORMAL_Z: f32 = 0.1;
const DEFAULT_PALM_MIN_NORMAL_Y: f32 = -0.5;
const DEFAULT_THUMB_PINKY_MCP_MAX_RATIO: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LetterEThresholds {
    pub palm_max_normal_z: f32,
    /// Lower bound on the palm normal's y; below it the palm tilts downward.
    pub palm_min_normal_y: f32,
    pub thumb_pinky_mcp_max_ratio: f32,
}

impl Default for LetterEThresholds {
    fn default() -> Self {
        Self {
            palm_max_normal_z: DEFAULT_PALM_MAX_NORMAL_Z,
            palm_min_normal_y: DEFAULT_PALM_MIN_NORMAL_Y,
            thumb_pinky_mcp_max_ratio: DEFAULT_THUMB_PINKY_MCP_MAX_RATIO,
        }
    }
}

pub fn is_letter_e(features: &Features, thresholds: &LetterEThresholds) -> bool {
    use LandmarkKind::*;

    let hand = match usable_hand(features) {
        Some(hand) => hand,
        None => return false,
    };

    let normal = features.palm_normal();
    if normal.z() > thresholds.palm_max_normal_z || normal.y() < thresholds.palm_min_normal_y {
        return false;
    }

    are_curled(&hand, &Finger::NON_THUMB)
        && hand.distance(ThumbTip, PinkyMcp)
            <= features.hand_scale() * thresholds.thumb_pinky_mcp_max_ratio
        && hand[ThumbTip].y() >= hand[IndexMcp].y()
}
