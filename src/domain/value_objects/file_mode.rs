//! FileMode value object - Unix permission bits for deployed static files

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DeployError;

/// Permission bits (`0..=0o777`), written as three octal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    /// Owner read/write, group and other read-only
    pub const WORLD_READABLE: FileMode = FileMode(0o644);

    pub fn new(bits: u32) -> Result<Self, DeployError> {
        if bits > 0o777 {
            return Err(DeployError::InvalidMode(format!("{:o}", bits)));
        }
        Ok(Self(bits))
    }

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Argument form accepted by `chmod`
    pub fn as_chmod_arg(&self) -> String {
        format!("{:03o}", self.0)
    }
}

impl Default for FileMode {
    fn default() -> Self {
        Self::WORLD_READABLE
    }
}

impl FromStr for FileMode {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0o")
            .or_else(|| trimmed.strip_prefix('0').filter(|rest| rest.len() == 3))
            .unwrap_or(trimmed);

        if digits.len() != 3 || !digits.bytes().all(|b| (b'0'..=b'7').contains(&b)) {
            return Err(DeployError::InvalidMode(s.to_string()));
        }

        u32::from_str_radix(digits, 8)
            .map_err(|_| DeployError::InvalidMode(s.to_string()))
            .and_then(FileMode::new)
    }
}

impl std::fmt::Display for FileMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03o}", self.0)
    }
}

impl Serialize for FileMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for FileMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
