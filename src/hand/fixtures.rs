//! Synthetic right-hand poses in image space (y grows downward). The palm
//! faces the camera: index on +x, pinky on -x, fingers curl toward -z.

use crate::hand::{Finger, Landmark};

type Chain = [(f32, f32, f32); 4];

const WRIST: (f32, f32, f32) = (0.50, 0.80, 0.0);

fn column(finger: Finger) -> (f32, f32) {
    match finger {
        Finger::Index => (0.56, 0.0),
        Finger::Middle => (0.52, -0.01),
        Finger::Ring => (0.48, 0.0),
        Finger::Pinky => (0.44, 0.02),
        Finger::Thumb => unreachable!("the thumb has no column"),
    }
}

fn curled(finger: Finger) -> Chain {
    let (x, dy) = column(finger);
    [
        (x, 0.60 + dy, 0.0),
        (x, 0.53 + dy, -0.03),
        (x, 0.57 + dy, -0.08),
        (x, 0.62 + dy, -0.06),
    ]
}

fn flat(finger: Finger) -> Chain {
    let (x, dy) = column(finger);
    [
        (x, 0.60 + dy, 0.0),
        (x, 0.50 + dy, 0.0),
        (x, 0.43 + dy, 0.0),
        (x, 0.37 + dy, 0.0),
    ]
}

// Bends 55 degrees at each of the PIP and DIP.
fn cupped(finger: Finger) -> Chain {
    let (x, dy) = column(finger);
    [
        (x, 0.60 + dy, 0.0),
        (x, 0.52 + dy, 0.0),
        (x, 0.4856 + dy, -0.0491),
        (x, 0.5027 + dy, -0.0961),
    ]
}

fn straight(finger: Finger) -> Chain {
    let (x, dy) = column(finger);
    [
        (x, 0.60 + dy, 0.0),
        (x, 0.52 + dy, 0.0),
        (x, 0.46 + dy, 0.0),
        (x, 0.41 + dy, 0.0),
    ]
}

fn every(shape: fn(Finger) -> Chain) -> [Chain; 4] {
    Finger::NON_THUMB.map(shape)
}

fn build(thumb: Chain, fingers: [Chain; 4]) -> Vec<Landmark> {
    let mut raw = vec![WRIST];
    raw.extend(thumb);
    for chain in fingers {
        raw.extend(chain);
    }
    raw.into_iter()
        .map(|(x, y, z)| Landmark::new(x, y, z).unwrap())
        .collect()
}

/// Fist, thumb extended alongside the index PIP.
pub(crate) fn letter_a() -> Vec<Landmark> {
    build(
        [
            (0.56, 0.74, 0.0),
            (0.60, 0.68, -0.01),
            (0.61, 0.62, -0.02),
            (0.60, 0.56, -0.03),
        ],
        every(curled),
    )
}

/// Flat hand, fingers up, thumb folded across the palm toward -x.
pub(crate) fn letter_b() -> Vec<Landmark> {
    build(
        [
            (0.56, 0.74, 0.0),
            (0.60, 0.68, 0.0),
            (0.56, 0.62, 0.0),
            (0.50, 0.60, 0.0),
        ],
        every(flat),
    )
}

pub(crate) fn letter_c() -> Vec<Landmark> {
    build(
        [
            (0.56, 0.74, 0.0),
            (0.62, 0.70, -0.02),
            (0.66, 0.66, -0.05),
            (0.70, 0.64, -0.10),
        ],
        every(cupped),
    )
}

/// Index straight up, thumb tip resting on the curled middle fingertip.
pub(crate) fn letter_d() -> Vec<Landmark> {
    build(
        [
            (0.56, 0.74, 0.0),
            (0.60, 0.70, -0.02),
            (0.58, 0.65, -0.05),
            (0.53, 0.61, -0.06),
        ],
        [
            straight(Finger::Index),
            curled(Finger::Middle),
            curled(Finger::Ring),
            curled(Finger::Pinky),
        ],
    )
}

/// Fist, thumb tucked low toward the pinky.
pub(crate) fn letter_e() -> Vec<Landmark> {
    build(
        [
            (0.56, 0.74, 0.0),
            (0.58, 0.68, -0.02),
            (0.54, 0.64, -0.05),
            (0.48, 0.66, -0.06),
        ],
        every(curled),
    )
}

pub(crate) fn scaled(landmarks: &[Landmark], factor: f32) -> Vec<Landmark> {
    landmarks.iter().map(|&landmark| landmark * factor).collect()
}
