//! Named gradient color pairs.

use crate::error::BackdropError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named preset selecting a `from`/`to` gradient pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum ColorVariant {
    /// Pink to periwinkle. The default.
    #[default]
    Aurora,
    /// Orange to pink.
    Sunset,
    /// Sky blue to cyan.
    Ocean,
    /// Green to emerald.
    Forest,
    /// Violet to purple.
    Lavender,
    /// Amber to darker amber.
    Golden,
}

/// Two gradient stops, bottom-left to top-right.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub from: String,
    pub to: String,
}

impl ColorPair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl ColorVariant {
    /// Every variant, in table order.
    pub const ALL: [ColorVariant; 6] = [
        ColorVariant::Aurora,
        ColorVariant::Sunset,
        ColorVariant::Ocean,
        ColorVariant::Forest,
        ColorVariant::Lavender,
        ColorVariant::Golden,
    ];

    /// The table key for this variant.
    pub fn name(self) -> &'static str {
        match self {
            ColorVariant::Aurora => "aurora",
            ColorVariant::Sunset => "sunset",
            ColorVariant::Ocean => "ocean",
            ColorVariant::Forest => "forest",
            ColorVariant::Lavender => "lavender",
            ColorVariant::Golden => "golden",
        }
    }

    /// The raw `(from, to)` hex stops for this variant.
    pub fn stops(self) -> (&'static str, &'static str) {
        match self {
            ColorVariant::Aurora => ("#ff80b5", "#9089fc"),
            ColorVariant::Sunset => ("#f97316", "#ec4899"),
            ColorVariant::Ocean => ("#0ea5e9", "#06b6d4"),
            ColorVariant::Forest => ("#22c55e", "#10b981"),
            ColorVariant::Lavender => ("#a78bfa", "#c084fc"),
            ColorVariant::Golden => ("#fbbf24", "#f59e0b"),
        }
    }

    /// The variant's stops as an owned [`ColorPair`].
    pub fn colors(self) -> ColorPair {
        let (from, to) = self.stops();
        ColorPair::new(from, to)
    }

    /// Returns all table keys.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.name()).collect()
    }
}

impl FromStr for ColorVariant {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| BackdropError::UnknownKey {
                table: "variant",
                key: s.to_string(),
                expected: Self::list_names(),
            })
    }
}

impl TryFrom<String> for ColorVariant {
    type Error = BackdropError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
