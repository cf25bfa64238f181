use super::PackageIdentity;
use std::fmt;
use thiserror::Error;

/// Why a lockfile dependency string could not be read as a reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceParseError {
    #[error("dependency entry is empty")]
    Empty,

    #[error("dependency entry '{raw}' is not of the form \"name [version] [(source)]\"")]
    Malformed { raw: String },
}

/// A declared dependency edge of a package node
///
/// Lockfiles write dependencies as either `"name"` or `"name version"`.
/// The name-only form is ambiguous when several versions of a package are
/// locked at once; resolution then yields every node with that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyReference {
    /// Matches any package with this name
    Unversioned { name: String },
    /// Matches exactly one identity
    Versioned { name: String, version: String },
}

impl DependencyReference {
    pub fn unversioned(name: impl Into<String>) -> Self {
        Self::Unversioned { name: name.into() }
    }

    pub fn versioned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self::Versioned {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parses a lockfile dependency string
    ///
    /// Accepted shapes:
    /// - `"name"`
    /// - `"name version"`
    /// - `"name version (source)"`, where the source suffix is dropped
    ///
    /// # Errors
    /// Returns [`ReferenceParseError::Empty`] for blank strings and
    /// [`ReferenceParseError::Malformed`] for any other unsupported shape
    pub fn parse(raw: &str) -> std::result::Result<Self, ReferenceParseError> {
        let mut parts = raw.split_whitespace();

        let name = match parts.next() {
            Some(name) => name,
            None => return Err(ReferenceParseError::Empty),
        };

        let version = match parts.next() {
            Some(version) => version,
            None => return Ok(Self::unversioned(name)),
        };

        let rest: Vec<&str> = parts.collect();
        if !rest.is_empty() {
            let source = rest.join(" ");
            if !(source.starts_with('(') && source.ends_with(')')) {
                return Err(ReferenceParseError::Malformed {
                    raw: raw.to_string(),
                });
            }
        }

        Ok(Self::versioned(name, version))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Unversioned { name } | Self::Versioned { name, .. } => name,
        }
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Unversioned { .. } => None,
            Self::Versioned { version, .. } => Some(version),
        }
    }

    /// Whether this reference resolves to the given identity
    pub fn matches(&self, identity: &PackageIdentity) -> bool {
        match self {
            Self::Unversioned { name } => name == identity.name(),
            Self::Versioned { name, version } => {
                name == identity.name() && version == identity.version()
            }
        }
    }
}

impl From<&PackageIdentity> for DependencyReference {
    fn from(identity: &PackageIdentity) -> Self {
        Self::versioned(identity.name(), identity.version())
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unversioned { name } => write!(f, "{}", name),
            Self::Versioned { name, version } => write!(f, "{} {}", name, version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let reference = DependencyReference::parse("libc").unwrap();
        assert_eq!(reference, DependencyReference::unversioned("libc"));
        assert_eq!(reference.version(), None);
    }

    #[test]
    fn test_parse_name_and_version() {
        let reference = DependencyReference::parse("syn 2.0.48").unwrap();
        assert_eq!(reference, DependencyReference::versioned("syn", "2.0.48"));
        assert_eq!(reference.name(), "syn");
        assert_eq!(reference.version(), Some("2.0.48"));
    }

    #[test]
    fn test_parse_drops_source_suffix() {
        let reference = DependencyReference::parse(
            "windows-sys 0.52.0 (registry+https://github.com/rust-lang/crates.io-index)",
        )
        .unwrap();
        assert_eq!(
            reference,
            DependencyReference::versioned("windows-sys", "0.52.0")
        );
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(
            DependencyReference::parse(""),
            Err(ReferenceParseError::Empty)
        );
        assert_eq!(
            DependencyReference::parse("   "),
            Err(ReferenceParseError::Empty)
        );
    }

    #[test]
    fn test_parse_extra_tokens_is_error() {
        let err = DependencyReference::parse("a 1.0 b").unwrap_err();
        assert_eq!(
            err,
            ReferenceParseError::Malformed {
                raw: "a 1.0 b".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "dependency entry 'a 1.0 b' is not of the form \"name [version] [(source)]\""
        );
    }

    #[test]
    fn test_matches_versioned_exactly() {
        let reference = DependencyReference::versioned("lib", "1.0");
        assert!(reference.matches(&PackageIdentity::new("lib", "1.0")));
        assert!(!reference.matches(&PackageIdentity::new("lib", "2.0")));
        assert!(!reference.matches(&PackageIdentity::new("other", "1.0")));
    }

    #[test]
    fn test_matches_unversioned_by_name() {
        let reference = DependencyReference::unversioned("lib");
        assert!(reference.matches(&PackageIdentity::new("lib", "1.0")));
        assert!(reference.matches(&PackageIdentity::new("lib", "2.0")));
        assert!(!reference.matches(&PackageIdentity::new("libc", "1.0")));
    }

    #[test]
    fn test_display_round_trips_lockfile_form() {
        assert_eq!(DependencyReference::unversioned("log").to_string(), "log");
        assert_eq!(
            DependencyReference::versioned("log", "0.4.20").to_string(),
            "log 0.4.20"
        );
    }
}
