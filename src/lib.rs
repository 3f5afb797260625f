//! Static fingerspelling recognition from 21-point hand skeletons.
//!
//! A frame's landmarks go through [`derive_features`] and then [`classify`]:
//!
//! ```
//! use fingerspell::{classify, derive_features, Handedness, Landmark, Thresholds};
//!
//! let landmarks = vec![Landmark::zero(); 21];
//! let features = derive_features(&landmarks, Handedness::Right);
//! assert_eq!(classify(&features, &Thresholds::default()), None);
//! ```

pub mod classify;
pub mod detection;
pub mod error;
pub mod features;
pub mod hand;
pub mod point;

pub use classify::{classify, matching_letters, Letter, Thresholds};
pub use detection::{recognize, HandLandmarkerResult, Recognition};
pub use error::Error;
pub use features::{derive_features, Features, Handedness};
pub use hand::{Finger, Landmark, LandmarkKind, NUM_LANDMARKS};
