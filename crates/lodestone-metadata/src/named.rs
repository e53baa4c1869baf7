use serde::{Deserialize, Serialize};
use std::fmt;

/// A name known under up to two identities: the obfuscated name shipped in the
/// compiled artifact and the official name recovered from a mapping source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawNamed", into = "RawNamed")]
pub enum Named {
    /// Neither identity is known (e.g. a member without a generic signature).
    #[default]
    Empty,
    /// Only the obfuscated identity is known.
    Obfuscated(String),
    /// Only the official identity is known.
    Official(String),
    Resolved {
        obfuscated: String,
        official: String,
    },
}

impl Named {
    pub fn obfuscated(name: impl Into<String>) -> Self {
        Named::Obfuscated(name.into())
    }

    pub fn official(name: impl Into<String>) -> Self {
        Named::Official(name.into())
    }

    pub fn resolved(obfuscated: impl Into<String>, official: impl Into<String>) -> Self {
        Named::Resolved {
            obfuscated: obfuscated.into(),
            official: official.into(),
        }
    }

    pub fn from_parts(obfuscated: Option<String>, official: Option<String>) -> Self {
        match (obfuscated, official) {
            (None, None) => Named::Empty,
            (Some(obfuscated), None) => Named::Obfuscated(obfuscated),
            (None, Some(official)) => Named::Official(official),
            (Some(obfuscated), Some(official)) => Named::Resolved {
                obfuscated,
                official,
            },
        }
    }

    pub fn into_parts(self) -> (Option<String>, Option<String>) {
        match self {
            Named::Empty => (None, None),
            Named::Obfuscated(obfuscated) => (Some(obfuscated), None),
            Named::Official(official) => (None, Some(official)),
            Named::Resolved {
                obfuscated,
                official,
            } => (Some(obfuscated), Some(official)),
        }
    }

    pub fn obfuscated_name(&self) -> Option<&str> {
        match self {
            Named::Obfuscated(obfuscated) | Named::Resolved { obfuscated, .. } => Some(obfuscated),
            Named::Empty | Named::Official(_) => None,
        }
    }

    pub fn official_name(&self) -> Option<&str> {
        match self {
            Named::Official(official) | Named::Resolved { official, .. } => Some(official),
            Named::Empty | Named::Obfuscated(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Named::Empty)
    }

    /// Carries an obfuscated name but no official one yet.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Named::Obfuscated(_))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Named::Resolved { .. })
    }

    /// Returns a copy whose official half is `official`; the obfuscated half is kept.
    pub fn with_official(&self, official: impl Into<String>) -> Self {
        Named::from_parts(
            self.obfuscated_name().map(str::to_owned),
            Some(official.into()),
        )
    }

    /// Returns a copy whose obfuscated half is `obfuscated`; the official half is kept.
    pub fn with_obfuscated(&self, obfuscated: impl Into<String>) -> Self {
        Named::from_parts(
            Some(obfuscated.into()),
            self.official_name().map(str::to_owned),
        )
    }

    /// Fills in the halves `self` lacks from `other`. Where both carry a half, `self` wins.
    pub fn merge(&self, other: &Named) -> Self {
        Named::from_parts(
            self.obfuscated_name()
                .or_else(|| other.obfuscated_name())
                .map(str::to_owned),
            self.official_name()
                .or_else(|| other.official_name())
                .map(str::to_owned),
        )
    }

    /// Resolves an unresolved record by computing its official half from the obfuscated one.
    ///
    /// Every other state is returned unchanged, so the rewrite is only ever applied to a
    /// record that actually carries an obfuscated name.
    pub fn resolve_with<E>(
        &self,
        rewrite: impl FnOnce(&str) -> Result<String, E>,
    ) -> Result<Self, E> {
        match self {
            Named::Obfuscated(obfuscated) => Ok(Named::Resolved {
                official: rewrite(obfuscated)?,
                obfuscated: obfuscated.clone(),
            }),
            other => Ok(other.clone()),
        }
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Named::Empty => f.write_str("<unnamed>"),
            Named::Obfuscated(obfuscated) => write!(f, "{obfuscated} (unresolved)"),
            Named::Official(official) => f.write_str(official),
            Named::Resolved {
                obfuscated,
                official,
            } => write!(f, "{official} ({obfuscated})"),
        }
    }
}

/// Wire shape of [`Named`]: absent halves are omitted rather than written as empty strings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawNamed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    obfuscated: Option<String>,
    #[serde(default, alias = "mojang", skip_serializing_if = "Option::is_none")]
    official: Option<String>,
}

impl From<RawNamed> for Named {
    fn from(raw: RawNamed) -> Self {
        Named::from_parts(raw.obfuscated, raw.official)
    }
}

impl From<Named> for RawNamed {
    fn from(named: Named) -> Self {
        let (obfuscated, official) = named.into_parts();
        RawNamed {
            obfuscated,
            official,
        }
    }
}
