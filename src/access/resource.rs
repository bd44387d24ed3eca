//! The fixed resource enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page of the sample application
///
/// The enumeration is static: there are exactly three resources, and an
/// identifier outside it is a caller error, not an extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    /// Visible to everyone, no authentication required
    Public,
    /// Requires an authenticated principal with the secured role
    Secured,
    /// Requires an authenticated principal with the admin role
    Admin,
}

impl Resource {
    /// All resources, in page order
    pub const ALL: [Resource; 3] = [Resource::Public, Resource::Secured, Resource::Admin];

    /// Canonical lowercase identifier
    pub fn name(&self) -> &'static str {
        match self {
            Resource::Public => "public",
            Resource::Secured => "secured",
            Resource::Admin => "admin",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = InvalidResourceError;

    /// Parse an identifier, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("public") {
            Ok(Resource::Public)
        } else if s.eq_ignore_ascii_case("secured") {
            Ok(Resource::Secured)
        } else if s.eq_ignore_ascii_case("admin") {
            Ok(Resource::Admin)
        } else {
            Err(InvalidResourceError { identifier: s.to_string() })
        }
    }
}

/// Identifier outside the fixed resource enumeration
///
/// Fatal and surfaced to the caller; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid resource identifier: {identifier:?} (expected one of: public, secured, admin)")]
pub struct InvalidResourceError {
    /// The identifier that failed to parse
    pub identifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!("public".parse::<Resource>().unwrap(), Resource::Public);
        assert_eq!("secured".parse::<Resource>().unwrap(), Resource::Secured);
        assert_eq!("admin".parse::<Resource>().unwrap(), Resource::Admin);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PUBLIC".parse::<Resource>().unwrap(), Resource::Public);
        assert_eq!("Secured".parse::<Resource>().unwrap(), Resource::Secured);
        assert_eq!("ADMIN".parse::<Resource>().unwrap(), Resource::Admin);
    }

    #[test]
    fn test_parse_rejects_unknown_identifier() {
        let err = "settings".parse::<Resource>().unwrap_err();
        assert_eq!(err.identifier, "settings");

        assert!("".parse::<Resource>().is_err());
        assert!("public ".parse::<Resource>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for resource in Resource::ALL {
            assert_eq!(resource.to_string().parse::<Resource>().unwrap(), resource);
        }
    }
}
