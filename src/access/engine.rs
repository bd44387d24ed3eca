//! The access decision engine

use super::{AccessRule, Decision, InvalidResourceError, Principal, Resource};
use crate::config::PortcullisConfig;

/// Message texts the engine puts on decisions
///
/// Defaults match the sample application's pages, which is what its
/// integration tests assert on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Success text for the public page
    pub public: String,
    /// Success text for the secured page
    pub secured: String,
    /// Success text for the admin page
    pub admin: String,
    /// Denial text, shared by the unauthenticated and missing-role cases
    pub unauthorized: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            public: "Message: public".to_string(),
            secured: "Message: secured".to_string(),
            admin: "Message: admin".to_string(),
            unauthorized: "403 Forbidden".to_string(),
        }
    }
}

impl Messages {
    /// Success text for a resource
    pub fn success_for(&self, resource: Resource) -> &str {
        match resource {
            Resource::Public => &self.public,
            Resource::Secured => &self.secured,
            Resource::Admin => &self.admin,
        }
    }
}

/// Decides whether a resource may be rendered for a principal
///
/// Evaluation is a pure function over the rule table: stateless,
/// synchronous, and side-effect-free. Identical inputs always produce
/// identical decisions.
///
/// # Example
///
/// ```rust,ignore
/// use portcullis::prelude::*;
///
/// let engine = AccessDecisionEngine::new();
/// let admin = Principal::new("admin").with_role("admin");
///
/// assert!(engine.evaluate(Resource::Admin, Some(&admin)).granted);
/// assert!(!engine.evaluate(Resource::Admin, None).granted);
/// ```
#[derive(Debug, Clone)]
pub struct AccessDecisionEngine {
    rules: Vec<AccessRule>,
    messages: Messages,
}

impl Default for AccessDecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessDecisionEngine {
    /// Create an engine with the sample application's rule table
    ///
    /// Public is open, Secured requires "user", Admin requires "admin".
    pub fn new() -> Self {
        Self {
            rules: vec![
                AccessRule::open(Resource::Public),
                AccessRule::requires(Resource::Secured, "user"),
                AccessRule::requires(Resource::Admin, "admin"),
            ],
            messages: Messages::default(),
        }
    }

    /// Replace the rule for a resource
    pub fn with_rule(mut self, rule: AccessRule) -> Self {
        self.rules.retain(|r| r.resource != rule.resource);
        self.rules.push(rule);
        self
    }

    /// Replace the message texts
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Build an engine from configuration
    pub fn from_config(config: &PortcullisConfig) -> Self {
        Self {
            rules: vec![
                AccessRule::open(Resource::Public),
                AccessRule::requires(Resource::Secured, config.access.secured_role.clone()),
                AccessRule::requires(Resource::Admin, config.access.admin_role.clone()),
            ],
            messages: Messages {
                public: config.access.public_message.clone(),
                secured: config.access.secured_message.clone(),
                admin: config.access.admin_message.clone(),
                unauthorized: config.access.unauthorized_message.clone(),
            },
        }
    }

    /// The role required for a resource, or None if it is open
    pub fn required_role(&self, resource: Resource) -> Option<&str> {
        self.rules
            .iter()
            .find(|r| r.resource == resource)
            .and_then(|r| r.required_role.as_deref())
    }

    /// Evaluate a resource request
    ///
    /// - An open resource is granted regardless of the principal.
    /// - A protected resource is denied when the principal is absent or
    ///   does not hold the required role.
    /// - Otherwise it is granted with the resource's success message.
    pub fn evaluate(&self, resource: Resource, principal: Option<&Principal>) -> Decision {
        let required = match self.required_role(resource) {
            None => {
                return Decision::granted(self.messages.success_for(resource));
            }
            Some(role) => role,
        };

        match principal {
            None => {
                log::debug!("Denied anonymous request for {}", resource);
                Decision::denied(&self.messages.unauthorized)
            }
            Some(p) if !p.has_role(required) => {
                log::debug!(
                    "Denied {} for {}: missing role {}",
                    resource,
                    p.username,
                    required
                );
                Decision::denied(&self.messages.unauthorized)
            }
            Some(_) => Decision::granted(self.messages.success_for(resource)),
        }
    }

    /// Evaluate a request named by its string identifier
    ///
    /// The only failure mode: identifiers outside the fixed enumeration
    /// are rejected with [`InvalidResourceError`].
    pub fn evaluate_named(
        &self,
        name: &str,
        principal: Option<&Principal>,
    ) -> Result<Decision, InvalidResourceError> {
        let resource: Resource = name.parse()?;
        Ok(self.evaluate(resource, principal))
    }
}
