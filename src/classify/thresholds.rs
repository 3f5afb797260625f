use super::{
    letter_a::LetterAThresholds, letter_b::LetterBThresholds, letter_c::LetterCThresholds,
    letter_d::LetterDThresholds, letter_e::LetterEThresholds,
};
use crate::error::Error;
use std::path::Path;

/// Tunable constants for every letter predicate.
///
/// Loaded from JSON, any field left out keeps its default:
///
/// ```json
/// { "a": { "min_base_angle": 75.0 }, "e": { "palm_min_normal_y": -0.4 } }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub a: LetterAThresholds,
    pub b: LetterBThresholds,
    pub c: LetterCThresholds,
    pub d: LetterDThresholds,
    pub e: LetterEThresholds,
}

impl Thresholds {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_path<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::ReadThresholds(e, path.to_path_buf()))?;
        Self::from_json(&json).map_err(|e| Error::ParseThresholds(e, path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::Thresholds;
    use crate::error::Error;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn defaults() {
        let thresholds = Thresholds::default();
        assert_approx_eq!(thresholds.a.min_base_angle, 80.0);
        assert_approx_eq!(thresholds.a.thumb_index_pip_max_ratio, 0.9);
        assert!(thresholds.b.require_thumb_across_palm);
        assert_approx_eq!(thresholds.c.palm_max_normal_z, 0.4);
        assert_approx_eq!(thresholds.c.max_base_angle, 85.0);
        assert_approx_eq!(thresholds.d.index_max_angle, 30.0);
        assert_approx_eq!(thresholds.e.palm_min_normal_y, -0.5);
        assert_approx_eq!(thresholds.e.thumb_pinky_mcp_max_ratio, 0.6);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let thresholds =
            Thresholds::from_json(r#"{ "a": { "min_base_angle": 75.0 }, "d": {} }"#).unwrap();
        assert_approx_eq!(thresholds.a.min_base_angle, 75.0);
        assert_eq!(
            Thresholds {
                a: Default::default(),
                ..thresholds
            },
            Thresholds::default()
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Thresholds::from_json("{}").unwrap(), Thresholds::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(Thresholds::from_json(r#"{ "c": { "min_base_angle": "thirty" } }"#).is_err());
    }

    #[test]
    fn missing_file() {
        let err = Thresholds::from_path("/nonexistent/thresholds.json").unwrap_err();
        assert!(matches!(err, Error::ReadThresholds(..)));
    }
}
