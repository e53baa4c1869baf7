use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MetadataError;

/// `major.minor.patch` version of the metadata document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SpecVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SpecVersion {
    pub const CURRENT: SpecVersion = SpecVersion::new(1, 0, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SpecVersion {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SpecVersion {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetadataError::InvalidVersion(s.to_string());

        // Missing trailing components default to zero (`1` == `1.0.0`).
        let mut parts = [0u32; 3];
        let mut count = 0;
        for part in s.trim().split('.') {
            if count == parts.len() {
                return Err(invalid());
            }
            parts[count] = part.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(SpecVersion::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for SpecVersion {
    type Error = MetadataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SpecVersion> for String {
    fn from(version: SpecVersion) -> Self {
        version.to_string()
    }
}
