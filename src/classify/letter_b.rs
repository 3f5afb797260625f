//! B: a flat hand, fingers together and up, thumb folded across the palm.
//!
//! "Up" is image space, so the hand must be held upright in the frame.

use super::shape::{is_pointing_up, usable_hand};
use crate::{
    features::{Features, Handedness},
    hand::{Finger, LandmarkKind},
};

#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct LetterBThresholds {
    /// Require the thumb tip to sit on the far side of the thumb MCP.
    pub require_thumb_across_palm: bool,
}

impl Default for LetterBThresholds {
    fn default() -> Self {
        Self {
            require_thumb_across_palm: true,
        }
    }
}

pub fn is_letter_b(features: &Features, thresholds: &LetterBThresholds) -> bool {
    let hand = match usable_hand(features) {
        Some(hand) => hand,
        None => return false,
    };

    if !Finger::NON_THUMB
        .iter()
        .all(|&finger| is_pointing_up(&hand, finger))
    {
        return false;
    }

    if !thresholds.require_thumb_across_palm {
        return true;
    }

    let tip_x = hand[LandmarkKind::ThumbTip].x();
    let mcp_x = hand[LandmarkKind::ThumbMcp].x();
    match features.handedness {
        Handedness::Right => tip_x < mcp_x,
        Handedness::Left => tip_x > mcp_x,
    }
}
