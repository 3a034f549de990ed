use crate::error::CompileError;
use itertools::Itertools;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A chain the decryption network accepts conditions for.
///
/// Serializes as the bare numeric chain id, which is how conditions
/// reference chains in the emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainId {
    Mainnet,
    Polygon,
    PolygonAmoy,
    Sepolia,
}

impl ChainId {
    /// The closed set of supported chains.
    pub const ALLOWED: [ChainId; 4] = [
        ChainId::Mainnet,
        ChainId::Polygon,
        ChainId::PolygonAmoy,
        ChainId::Sepolia,
    ];

    /// The numeric chain id.
    pub fn id(self) -> u64 {
        match self {
            ChainId::Mainnet => 1,
            ChainId::Polygon => 137,
            ChainId::PolygonAmoy => 80002,
            ChainId::Sepolia => 11155111,
        }
    }

    /// Looks up a chain by its numeric id.
    pub fn from_id(id: u64) -> Option<Self> {
        Self::ALLOWED.into_iter().find(|chain| chain.id() == id)
    }

    /// Parses a user-entered chain value.
    ///
    /// Anything that is not a supported numeric id is rejected with an
    /// error enumerating the valid set. Use [`ChainId::default`] only when
    /// no value was entered at all.
    pub fn from_entered(raw: &str) -> Result<Self, CompileError> {
        raw.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::from_id)
            .ok_or_else(|| CompileError::UnsupportedChain {
                value: raw.trim().to_string(),
            })
    }

    /// Comma-joined list of the allowed numeric ids, for error messages.
    pub fn allowed_list() -> String {
        Self::ALLOWED.iter().map(|chain| chain.id()).join(", ")
    }
}

impl Default for ChainId {
    /// The fallback chain substituted when a chain slot was left empty.
    fn default() -> Self {
        ChainId::Sepolia
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl Serialize for ChainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.id())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u64::deserialize(deserializer)?;
        ChainId::from_id(id).ok_or_else(|| {
            de::Error::custom(format!(
                "unsupported chain id {id}; valid chain ids are {}",
                ChainId::allowed_list()
            ))
        })
    }
}
