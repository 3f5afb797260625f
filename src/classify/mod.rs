//! Rule-based recognition of static fingerspelled letters.
//!
//! Each letter is an independent predicate over [`Features`]. The predicates
//! overlap, so [`classify`] walks them in [`Letter::PRIORITY`] order and the
//! first match wins.

use crate::features::Features;
use std::fmt;
use tracing::trace;

mod letter_a;
mod letter_b;
mod letter_c;
mod letter_d;
mod letter_e;
mod shape;
mod thresholds;

pub use letter_a::{is_letter_a, LetterAThresholds};
pub use letter_b::{is_letter_b, LetterBThresholds};
pub use letter_c::{is_letter_c, LetterCThresholds};
pub use letter_d::{is_letter_d, LetterDThresholds};
pub use letter_e::{is_letter_e, LetterEThresholds};
pub use thresholds::Thresholds;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// Evaluation order of [`classify`].
    pub const PRIORITY: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }

    /// Whether `features` satisfies this letter's rules on its own, ignoring
    /// every other letter.
    pub fn matches(self, features: &Features, thresholds: &Thresholds) -> bool {
        match self {
            Self::A => is_letter_a(features, &thresholds.a),
            Self::B => is_letter_b(features, &thresholds.b),
            Self::C => is_letter_c(features, &thresholds.c),
            Self::D => is_letter_d(features, &thresholds.d),
            Self::E => is_letter_e(features, &thresholds.e),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Every letter whose predicate accepts `features`, in priority order.
pub fn matching_letters(features: &Features, thresholds: &Thresholds) -> Vec<Letter> {
    Letter::PRIORITY
        .into_iter()
        .filter(|letter| letter.matches(features, thresholds))
        .collect()
}

/// The highest-priority matching letter, or `None` when no letter matches.
pub fn classify(features: &Features, thresholds: &Thresholds) -> Option<Letter> {
    let letter = Letter::PRIORITY
        .into_iter()
        .find(|letter| letter.matches(features, thresholds));
    trace!(
        letter = ?letter,
        handedness = %features.handedness,
        hand_scale = features.hand_scale()
    );
    letter
}
