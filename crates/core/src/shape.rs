//! Clip-polygon lookup table for blobs.
//!
//! Every shape is a fixed list of `(x%, y%)` vertices rendered as a CSS
//! `polygon(...)` clip path. The table is compile-time constant.

use crate::error::BackdropError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named clip polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum BlobShape {
    /// Irregular, asymmetric blob. The default.
    #[default]
    Organic,
    /// Flowing shape with a long diagonal tail.
    Wave,
    /// Rounded twelve-sided outline.
    Cloud,
    /// Five-pointed star burst.
    Splash,
}

/// A shape key together with its ordered polygon vertices in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDefinition {
    pub name: &'static str,
    pub points: &'static [(f64, f64)],
}

const ORGANIC: &[(f64, f64)] = &[
    (63.1, 29.5),
    (100.0, 17.1),
    (76.6, 3.0),
    (48.4, 0.0),
    (44.6, 4.7),
    (54.5, 25.3),
    (59.8, 49.0),
    (55.2, 57.8),
    (44.4, 57.2),
    (27.8, 47.9),
    (35.1, 81.5),
    (0.0, 97.7),
    (39.2, 100.0),
    (35.2, 81.4),
    (97.2, 52.8),
    (63.1, 29.5),
];

const WAVE: &[(f64, f64)] = &[
    (74.1, 44.1),
    (100.0, 61.6),
    (97.5, 26.9),
    (85.5, 0.1),
    (80.7, 2.0),
    (72.5, 32.5),
    (60.2, 62.4),
    (52.4, 68.1),
    (47.5, 58.3),
    (45.2, 34.5),
    (27.5, 76.7),
    (0.1, 64.9),
    (17.9, 100.0),
    (27.6, 76.8),
    (76.1, 97.7),
    (74.1, 44.1),
];

const CLOUD: &[(f64, f64)] = &[
    (0.0, 50.0),
    (10.0, 25.0),
    (25.0, 10.0),
    (50.0, 0.0),
    (75.0, 10.0),
    (90.0, 25.0),
    (100.0, 50.0),
    (90.0, 75.0),
    (75.0, 90.0),
    (50.0, 100.0),
    (25.0, 90.0),
    (10.0, 75.0),
];

const SPLASH: &[(f64, f64)] = &[
    (50.0, 0.0),
    (61.0, 35.0),
    (98.0, 35.0),
    (68.0, 57.0),
    (79.0, 91.0),
    (50.0, 70.0),
    (21.0, 91.0),
    (32.0, 57.0),
    (2.0, 35.0),
    (39.0, 35.0),
];

impl BlobShape {
    /// Every shape, in table order.
    pub const ALL: [BlobShape; 4] = [
        BlobShape::Organic,
        BlobShape::Wave,
        BlobShape::Cloud,
        BlobShape::Splash,
    ];

    /// The table key for this shape.
    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Looks up the polygon for this shape.
    pub fn definition(self) -> ShapeDefinition {
        let (name, points) = match self {
            BlobShape::Organic => ("organic", ORGANIC),
            BlobShape::Wave => ("wave", WAVE),
            BlobShape::Cloud => ("cloud", CLOUD),
            BlobShape::Splash => ("splash", SPLASH),
        };
        ShapeDefinition { name, points }
    }

    /// Returns all table keys.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl ShapeDefinition {
    /// Renders the vertices as a CSS `polygon(...)` value.
    pub fn clip_path(&self) -> String {
        let vertices: Vec<String> = self
            .points
            .iter()
            .map(|(x, y)| format!("{x}% {y}%"))
            .collect();
        format!("polygon({})", vertices.join(", "))
    }
}

impl FromStr for BlobShape {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| BackdropError::UnknownKey {
                table: "shape",
                key: s.to_string(),
                expected: Self::list_names(),
            })
    }
}

impl TryFrom<String> for BlobShape {
    type Error = BackdropError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for BlobShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
