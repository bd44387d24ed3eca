//! Portcullis - Access decisions for login-protected resources
//!
//! Portcullis decides whether a request may see a resource, and what the
//! presentation layer should render either way. It models the classic
//! three-page sample application: a public page anyone can see, a secured
//! page for the "user" role, and an admin page for the "admin" role.
//!
//! # Overview
//!
//! The core is a single pure function: [`AccessDecisionEngine::evaluate`]
//! takes a [`Resource`] and an optional [`Principal`] and returns a
//! [`Decision`] carrying the message text and CSS class to render.
//! Everything around it is collaborator seams: an [`IdentityProvider`]
//! authenticates credentials into a Principal, a [`SessionManager`] keeps
//! that Principal alive between login and logout, and a
//! [`DecisionRenderer`] turns Decisions into markup.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use portcullis::prelude::*;
//!
//! let engine = AccessDecisionEngine::new();
//!
//! // Anonymous caller, public page: always granted
//! let decision = engine.evaluate(Resource::Public, None);
//! assert!(decision.granted);
//!
//! // Anonymous caller, secured page: denied with the error class
//! let decision = engine.evaluate(Resource::Secured, None);
//! assert_eq!(decision.css_class, CssClass::Error);
//!
//! // Authenticated "user": secured page granted
//! let alice = Principal::new("alice").with_role("user");
//! assert!(engine.evaluate(Resource::Secured, Some(&alice)).granted);
//! ```
//!
//! # Architecture
//!
//! - [`access`] - Resources, principals, rules, and the decision engine
//! - [`identity`] - Identity-provider seam and a directory-backed provider
//! - [`session`] - Principal lifecycle between login and logout
//! - [`render`] - Decision-to-markup seam for the presentation layer
//! - [`config`] - TOML configuration with environment overrides

pub mod access;
pub mod config;
pub mod identity;
pub mod render;
pub mod session;

pub use access::{
    AccessDecisionEngine, AccessRule, CssClass, Decision, InvalidResourceError, Principal,
    Resource,
};
pub use config::PortcullisConfig;
pub use identity::{DirectoryProvider, IdentityError, IdentityProvider, UserAccount, UserDirectory};
pub use render::{DecisionRenderer, HtmlRenderer};
pub use session::{MemorySessionStore, Session, SessionManager, SessionStore};

/// Common imports for Portcullis applications
pub mod prelude {
    pub use crate::access::{
        AccessDecisionEngine, AccessRule, CssClass, Decision, InvalidResourceError, Principal,
        Resource,
    };
    pub use crate::config::PortcullisConfig;
    pub use crate::identity::{
        DirectoryProvider, IdentityError, IdentityProvider, UserAccount, UserDirectory,
    };
    pub use crate::render::{DecisionRenderer, HtmlRenderer};
    pub use crate::session::{MemorySessionStore, Session, SessionManager, SessionStore};
}
