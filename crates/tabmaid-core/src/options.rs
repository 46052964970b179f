//! Compilation options.
//!
//! [`Options`] is a small immutable record threaded into every compiler.
//! Only the flowchart compiler reads [`Options::direction`] and
//! [`Options::swimlanes`]; the [`Theme`] exists for the external renderer
//! and is never embedded in markup.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TabmaidError;

/// Layout direction for flow diagrams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Top to bottom (`TD`).
    #[default]
    TopDown,
    /// Left to right (`LR`).
    LeftRight,
}

impl Direction {
    /// The markup token emitted on the diagram header line.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::TopDown => "TD",
            Direction::LeftRight => "LR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Direction {
    type Err = TabmaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "td" => Ok(Direction::TopDown),
            "lr" => Ok(Direction::LeftRight),
            _ => Err(TabmaidError::UnknownOption {
                option: "direction",
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Renderer theme name.
///
/// Carried through to the rendering boundary unchanged; no compiler reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Default,
    Forest,
    Dark,
    Neutral,
}

impl Theme {
    /// The lowercase wire name of this theme.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Forest => "forest",
            Theme::Dark => "dark",
            Theme::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = TabmaidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "forest" => Ok(Theme::Forest),
            "dark" => Ok(Theme::Dark),
            "neutral" => Ok(Theme::Neutral),
            _ => Err(TabmaidError::UnknownOption {
                option: "theme",
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Theme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Options for one compilation call.
///
/// The record is immutable per call and passed to every family's compiler,
/// including families that ignore some or all of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Layout direction for flow diagrams.
    pub direction: Direction,
    /// Group flowchart steps into per-assignee swimlanes.
    pub swimlanes: bool,
    /// Renderer theme, forwarded to the rendering boundary.
    pub theme: Theme,
}
