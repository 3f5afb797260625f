//! Per-frame output of the upstream hand landmark detector.
//!
//! Field names follow the detector's JSON (`categoryName`, `displayName`),
//! e.g.
//!
//! ```json
//! {
//!   "landmarks": [[{ "x": 0.5, "y": 0.8, "z": 0.0 }, ...]],
//!   "handedness": [[{ "categoryName": "Right", "score": 0.97, "index": 0 }]]
//! }
//! ```

use crate::{
    classify::{classify, Letter, Thresholds},
    error::Error,
    features::{derive_features, Features, Handedness},
    hand::Landmark,
};
use ordered_float::NotNan;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
    pub score: f32,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HandLandmarkerResult {
    /// One landmark list per detected hand.
    pub landmarks: Vec<Vec<NormalizedLandmark>>,
    /// One list of candidate labels per detected hand.
    pub handedness: Vec<Vec<Category>>,
}

impl HandLandmarkerResult {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::ParseDetection)
    }

    /// Landmarks and handedness of the first reported hand, or `None` if the
    /// frame has no hands. Any further hands are ignored.
    pub fn first_hand(&self) -> Result<Option<(Vec<Landmark>, Handedness)>, Error> {
        let raw = match self.landmarks.first() {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let landmarks = raw
            .iter()
            .map(|&NormalizedLandmark { x, y, z }| Landmark::new(x, y, z))
            .collect::<Result<Vec<_>, _>>()?;

        let top = self
            .handedness
            .first()
            .and_then(|categories| {
                categories
                    .iter()
                    .filter_map(|category| {
                        NotNan::new(category.score)
                            .ok()
                            .map(|score| (score, category))
                    })
                    .max_by_key(|&(score, _)| score)
            })
            .ok_or(Error::MissingHandedness)?;
        let handedness = top.1.category_name.parse()?;

        Ok(Some((landmarks, handedness)))
    }
}

/// The classifier's answer for one frame, with the features it was computed
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub letter: Option<Letter>,
    pub features: Features,
}

/// Classify the first hand of a detection result.
///
/// Frames without a hand produce `Ok(None)`; that is not an error.
pub fn recognize(
    result: &HandLandmarkerResult,
    thresholds: &Thresholds,
) -> Result<Option<Recognition>, Error> {
    let (landmarks, handedness) = match result.first_hand()? {
        Some(hand) => hand,
        None => {
            debug!("no hand in frame");
            return Ok(None);
        }
    };

    let features = derive_features(&landmarks, handedness);
    Ok(Some(Recognition {
        letter: classify(&features, thresholds),
        features,
    }))
}
