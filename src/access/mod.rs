//! Access decisions for protected resources
//!
//! This module contains the decision core: the fixed [`Resource`]
//! enumeration, the [`Principal`] identity, the rule table mapping
//! resources to required roles, and the [`AccessDecisionEngine`] that
//! turns all of that into a renderable [`Decision`].
//!
//! Evaluation is a pure function. No state is kept between calls and a
//! Decision is never cached or mutated after it is returned.

mod decision;
mod engine;
mod principal;
mod resource;

pub use decision::{CssClass, Decision};
pub use engine::{AccessDecisionEngine, Messages};
pub use principal::Principal;
pub use resource::{InvalidResourceError, Resource};

/// Maps a resource to the role required to view it
///
/// `required_role: None` means the resource is open to everyone,
/// authenticated or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRule {
    /// The resource this rule protects
    pub resource: Resource,

    /// Role a principal must hold, or None for open access
    pub required_role: Option<String>,
}

impl AccessRule {
    /// Create a rule requiring a role
    pub fn requires(resource: Resource, role: impl Into<String>) -> Self {
        Self { resource, required_role: Some(role.into()) }
    }

    /// Create a rule open to everyone
    pub fn open(resource: Resource) -> Self {
        Self { resource, required_role: None }
    }
}
