//! Responder configuration.

/// When identifier-based registrations report the deprecation notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeprecationPolicy {
    /// Only the first registration made through a registry.
    #[default]
    Once,
    /// Every registration.
    EveryCall,
    /// Never.
    Silent,
}

/// Options shared by every registration made through a `Responder`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResponderConfig {
    /// Deprecation notice behaviour for the legacy registry.
    pub deprecation: DeprecationPolicy,
    /// Accept an empty query map instead of rejecting it as invalid `values`.
    pub allow_empty: bool,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponderConfig {
    /// Creates the default configuration.
    pub const fn new() -> Self {
        Self {
            deprecation: DeprecationPolicy::Once,
            allow_empty: false,
        }
    }

    /// Sets the deprecation policy.
    pub fn with_deprecation(mut self, policy: DeprecationPolicy) -> Self {
        self.deprecation = policy;
        self
    }

    /// Sets whether empty query maps are accepted.
    pub fn with_allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }
}
