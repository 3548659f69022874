//! Orientation label space and prediction decoding.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// A photo orientation: the clockwise rotation applied to an originally
/// upright image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

/// Classifier output index to orientation label, in model class order.
///
/// The order is `0, 180, 270, 90` — the class-folder enumeration order the
/// model was trained with, not numeric order. It must stay in lock-step with
/// the model's output layout: a model retrained with a different folder
/// enumeration silently breaks decoding.
pub const CLASS_ORDER: [Orientation; 4] = [
    Orientation::Deg0,
    Orientation::Deg180,
    Orientation::Deg270,
    Orientation::Deg90,
];

impl Orientation {
    /// The clockwise rotation in degrees.
    pub fn degrees(self) -> u32 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// Parse from a degree value.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Deg0),
            90 => Some(Orientation::Deg90),
            180 => Some(Orientation::Deg180),
            270 => Some(Orientation::Deg270),
            _ => None,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Serialize for Orientation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Orientation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let degrees = u32::deserialize(deserializer)?;
        Orientation::from_degrees(degrees)
            .ok_or_else(|| de::Error::custom(format!("invalid orientation: {}", degrees)))
    }
}

/// A decoded classifier prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// All 4 labels with their probabilities, in model class order.
    pub scores: [(Orientation, f32); 4],
    /// The label of the highest-probability class.
    pub label: Orientation,
}

/// Decode raw class probabilities into a prediction.
///
/// The final label is the class at the first maximum, so the lowest index
/// wins an exact tie.
pub fn decode_scores(probs: [f32; 4]) -> Prediction {
    let mut best = 0;
    for (i, &p) in probs.iter().enumerate().skip(1) {
        if p > probs[best] {
            best = i;
        }
    }

    Prediction {
        scores: std::array::from_fn(|i| (CLASS_ORDER[i], probs[i])),
        label: CLASS_ORDER[best],
    }
}
