use crate::types::tolerant::{deserialize_tolerant, serialize_code, TolerantCode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The reference surface a parameter's `level` is measured from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelType {
    /// `hmsl`: height above mean sea level.
    SeaLevel,
    /// `hl`: height above ground.
    GroundLevel,
    /// Any other code.
    #[default]
    Unknown,
}

impl TolerantCode for LevelType {
    const UNKNOWN: Self = LevelType::Unknown;

    const KNOWN: &'static [(&'static str, Self)] =
        &[("hmsl", LevelType::SeaLevel), ("hl", LevelType::GroundLevel)];

    fn code(&self) -> &'static str {
        match self {
            LevelType::SeaLevel => "hmsl",
            LevelType::GroundLevel => "hl",
            LevelType::Unknown => "",
        }
    }
}

impl<'de> Deserialize<'de> for LevelType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_tolerant(deserializer)
    }
}

impl Serialize for LevelType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_code(self, serializer)
    }
}

impl fmt::Display for LevelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelType::Unknown => f.pad("unknown"),
            known => f.pad(known.code()),
        }
    }
}
