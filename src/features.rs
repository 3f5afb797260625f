use crate::{
    error::Error,
    hand::{Finger, Landmark, LandmarkKind, Skeleton},
    point::{vector, Point3},
};
use std::{fmt, str::FromStr};
use tracing::debug;

/// Which physical hand a landmark set belongs to, as labelled upstream.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Handedness {
    Left,
    Right,
}

impl FromStr for Handedness {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Self::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Self::Right)
        } else {
            Err(Error::UnknownHandedness(s.to_owned()))
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "Left",
            Self::Right => "Right",
        })
    }
}

/// Flexion of one finger, in degrees. `0` is straight.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FingerAngles {
    /// Between the first and second segments of the chain.
    pub base: f32,
    /// Between the second and third segments of the chain.
    pub tip: f32,
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct JointAngles([FingerAngles; 5]);

impl JointAngles {
    pub fn get(&self, finger: Finger) -> FingerAngles {
        self.0[finger as usize]
    }

    /// `("<finger>_base" | "<finger>_tip", degrees)` for every finger.
    pub fn iter(&self) -> impl Iterator<Item = (String, f32)> + '_ {
        Finger::ALL.into_iter().flat_map(move |finger| {
            let FingerAngles { base, tip } = self.get(finger);
            [
                (format!("{}_base", finger.name()), base),
                (format!("{}_tip", finger.name()), tip),
            ]
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct RelativeDistances {
    pub thumb_index: f32,
    pub index_middle: f32,
    pub middle_ring: f32,
    pub ring_pinky: f32,
    /// Wrist to middle fingertip.
    pub wrist_middle: f32,
}

impl RelativeDistances {
    /// Reference length that absolute distance thresholds are scaled by.
    #[inline]
    pub fn hand_scale(&self) -> f32 {
        self.wrist_middle
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HandOrientation {
    /// Unit normal of the wrist/index-MCP/pinky-MCP plane, or zero when those
    /// points are collinear. The sign follows the winding of those points, so
    /// it flips with handedness: a right palm facing the camera has `z < 0`,
    /// a left one `z > 0`.
    pub palm_normal_vector: Point3,
}

/// Everything the letter predicates look at for one hand in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub handedness: Handedness,
    pub landmarks: Vec<Landmark>,
    pub joint_angles: JointAngles,
    pub relative_distances: RelativeDistances,
    pub hand_orientation: HandOrientation,
}

impl Features {
    /// The landmarks as a complete hand, if there are exactly 21 of them.
    pub fn skeleton(&self) -> Option<Skeleton<'_>> {
        Skeleton::new(&self.landmarks)
    }

    #[inline]
    pub fn hand_scale(&self) -> f32 {
        self.relative_distances.hand_scale()
    }

    #[inline]
    pub fn palm_normal(&self) -> Point3 {
        self.hand_orientation.palm_normal_vector
    }
}

fn finger_angles(hand: &Skeleton<'_>, finger: Finger) -> FingerAngles {
    let [j0, j1, j2, j3] = finger.chain().map(|kind| hand[kind]);
    FingerAngles {
        base: vector(j0, j1).angle_between(vector(j1, j2)),
        tip: vector(j1, j2).angle_between(vector(j2, j3)),
    }
}

fn relative_distances(hand: &Skeleton<'_>) -> RelativeDistances {
    use LandmarkKind::*;

    RelativeDistances {
        thumb_index: hand.distance(ThumbTip, IndexTip),
        index_middle: hand.distance(IndexTip, MiddleTip),
        middle_ring: hand.distance(MiddleTip, RingTip),
        ring_pinky: hand.distance(RingTip, PinkyTip),
        wrist_middle: hand.distance(Wrist, MiddleTip),
    }
}

fn palm_normal(hand: &Skeleton<'_>) -> Point3 {
    use LandmarkKind::*;

    let wrist = hand[Wrist];
    vector(wrist, hand[IndexMcp])
        .cross(vector(wrist, hand[PinkyMcp]))
        .normalize()
}

/// Derive the per-frame features of one hand.
///
/// The landmarks are always copied. If there are not exactly 21 of them the
/// derived fields are left zeroed, and every letter predicate rejects the
/// result.
pub fn derive_features(landmarks: &[Landmark], handedness: Handedness) -> Features {
    let mut features = Features {
        handedness,
        landmarks: landmarks.to_vec(),
        joint_angles: JointAngles::default(),
        relative_distances: RelativeDistances::default(),
        hand_orientation: HandOrientation::default(),
    };

    match Skeleton::new(landmarks) {
        Some(hand) => {
            features.joint_angles =
                JointAngles(Finger::ALL.map(|finger| finger_angles(&hand, finger)));
            features.relative_distances = relative_distances(&hand);
            features.hand_orientation.palm_normal_vector = palm_normal(&hand);
        }
        None => debug!(
            message = "skipping feature derivation",
            num_landmarks = landmarks.len()
        ),
    }

    features
}
