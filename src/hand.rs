use crate::point::Point3;
use std::ops::Index;

#[cfg(test)]
pub(crate) mod fixtures;

/// One tracked anatomical point on a hand.
pub type Landmark = Point3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LandmarkKind {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

pub const NUM_LANDMARKS: usize = LandmarkKind::PinkyTip as usize + 1;

impl LandmarkKind {
    #[inline]
    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub const NON_THUMB: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    /// The finger's landmarks from its base joint to its tip.
    pub fn chain(self) -> [LandmarkKind; 4] {
        use LandmarkKind::*;

        match self {
            Finger::Thumb => [ThumbCmc, ThumbMcp, ThumbIp, ThumbTip],
            Finger::Index => [IndexMcp, IndexPip, IndexDip, IndexTip],
            Finger::Middle => [MiddleMcp, MiddlePip, MiddleDip, MiddleTip],
            Finger::Ring => [RingMcp, RingPip, RingDip, RingTip],
            Finger::Pinky => [PinkyMcp, PinkyPip, PinkyDip, PinkyTip],
        }
    }

    /// Second joint of the chain: the PIP for fingers, the IP for the thumb.
    pub fn pip(self) -> LandmarkKind {
        self.chain()[1]
    }

    pub fn tip(self) -> LandmarkKind {
        self.chain()[3]
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// A complete 21-point hand, indexable by [`LandmarkKind`].
#[derive(Debug, Copy, Clone)]
pub struct Skeleton<'a>(&'a [Landmark; NUM_LANDMARKS]);

impl<'a> Skeleton<'a> {
    /// Borrow `landmarks` as a skeleton, or `None` if it does not hold
    /// exactly [`NUM_LANDMARKS`] points.
    pub fn new(landmarks: &'a [Landmark]) -> Option<Self> {
        <&[Landmark; NUM_LANDMARKS]>::try_from(landmarks)
            .ok()
            .map(Self)
    }

    pub fn distance(&self, a: LandmarkKind, b: LandmarkKind) -> f32 {
        self[a].distance(self[b])
    }

    /// Distance from `kind` to the wrist.
    pub fn reach(&self, kind: LandmarkKind) -> f32 {
        self.distance(kind, LandmarkKind::Wrist)
    }
}

impl Index<LandmarkKind> for Skeleton<'_> {
    type Output = Landmark;

    fn index(&self, kind: LandmarkKind) -> &Self::Output {
        &self.0[kind.idx()]
    }
}
