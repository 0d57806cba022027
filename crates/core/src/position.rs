//! Placement rules for the blob's outer layer.

use crate::error::BackdropError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the blob sits inside its positioned ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    Center,
}

/// Edge anchors plus responsive offsets, both as utility class tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRule {
    pub anchors: &'static [&'static str],
    pub offsets: &'static [&'static str],
}

impl PositionRule {
    /// Anchors followed by offsets, space separated.
    pub fn classes(&self) -> String {
        self.anchors
            .iter()
            .chain(self.offsets)
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

const PUSH_RIGHT: &[&str] = &["-ml-24", "lg:ml-24", "xl:ml-48"];
const PUSH_LEFT: &[&str] = &["-mr-24", "lg:mr-24", "xl:mr-48"];

impl Position {
    /// Every position, in table order.
    pub const ALL: [Position; 5] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
        Position::Center,
    ];

    /// The table key for this position.
    pub fn name(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::Center => "center",
        }
    }

    pub fn rule(self) -> PositionRule {
        match self {
            Position::TopRight => PositionRule {
                anchors: &["top-0", "right-0", "left-1/2"],
                offsets: PUSH_RIGHT,
            },
            Position::TopLeft => PositionRule {
                anchors: &["top-0", "left-0", "right-1/2"],
                offsets: PUSH_LEFT,
            },
            Position::BottomRight => PositionRule {
                anchors: &["bottom-0", "right-0", "left-1/2"],
                offsets: PUSH_RIGHT,
            },
            Position::BottomLeft => PositionRule {
                anchors: &["bottom-0", "left-0", "right-1/2"],
                offsets: PUSH_LEFT,
            },
            Position::Center => PositionRule {
                anchors: &["top-1/2", "left-1/2"],
                offsets: &["-translate-x-1/2", "-translate-y-1/2"],
            },
        }
    }

    /// Returns all table keys.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|p| p.name()).collect()
    }
}

impl FromStr for Position {
    type Err = BackdropError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.name() == s)
            .ok_or_else(|| BackdropError::UnknownKey {
                table: "position",
                key: s.to_string(),
                expected: Self::list_names(),
            })
    }
}

impl TryFrom<String> for Position {
    type Error = BackdropError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
