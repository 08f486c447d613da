//! Provider error and diagnostic types.
//!
//! `ProviderError` covers every failure a provider operation can return;
//! `Diagnostics` is the plan-time validation result, one entry per problem.

use netbox_client::NetBoxError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur in provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider block is missing a value or holds an unusable one
    #[error("Invalid provider configuration: {0}")]
    InvalidConfig(String),

    /// Stored resource identifier is not a NetBox object id
    #[error("Invalid resource identifier {0:?}: expected a numeric NetBox id")]
    InvalidId(String),

    /// Configuration value has the wrong shape for its attribute
    #[error("Invalid attribute value: {0}")]
    AttributeType(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Validation(Diagnostics),

    /// NetBox API call failed
    #[error("{action}: {source}")]
    NetBox {
        /// What was being attempted, e.g. "Unable to create prefix"
        action: String,
        /// Underlying client error
        #[source]
        source: NetBoxError,
    },

    /// No resource adapter is registered under this type name
    #[error("Unknown resource type: {0}")]
    UnknownResourceType(String),

    /// No data-source adapter is registered under this type name
    #[error("Unknown data source type: {0}")]
    UnknownDataSourceType(String),

    /// A resource operation ran before `configure`
    #[error("Provider has not been configured")]
    NotConfigured,
}

impl ProviderError {
    /// Wrap a client error with the action that was being attempted
    pub fn netbox(action: impl Into<String>, source: NetBoxError) -> Self {
        ProviderError::NetBox {
            action: action.into(),
            source,
        }
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks the operation
    Error,
    /// Reported but does not block
    Warning,
}

/// A single validation finding, tied to an attribute path when there is one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Severity of the finding
    pub severity: Severity,
    /// One-line summary
    pub summary: String,
    /// Longer explanation
    pub detail: String,
    /// Attribute path, e.g. `tags.0.name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Error diagnostic for an attribute
    pub fn error(attribute: &str, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: (!attribute.is_empty()).then(|| attribute.to_string()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "{} ({}): {}", self.summary, attribute, self.detail),
            None => write!(f, "{}: {}", self.summary, self.detail),
        }
    }
}

/// Ordered collection of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Append every diagnostic of another collection
    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// True when any diagnostic is an error
    pub fn has_errors(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    /// True when nothing was reported
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of diagnostics
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate in report order
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Turn the collection into an error when it holds any error diagnostic
    pub fn into_result(self) -> Result<(), ProviderError> {
        if self.has_errors() {
            Err(ProviderError::Validation(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_errors() {
        let mut diags = Diagnostics::new();
        assert!(!diags.has_errors());
        diags.push(Diagnostic {
            severity: Severity::Warning,
            summary: "Deprecated".to_string(),
            detail: String::new(),
            attribute: None,
        });
        assert!(!diags.has_errors());
        diags.push(Diagnostic::error("name", "Missing required argument", "name is required"));
        assert!(diags.has_errors());
        assert!(diags.into_result().is_err());
    }

    #[test]
    fn test_netbox_error_message_carries_action() {
        let err = ProviderError::netbox(
            "Unable to create prefix",
            NetBoxError::Api("POST /ipam/prefixes/ failed: 400 Bad Request - {}".to_string()),
        );
        assert!(err.to_string().starts_with("Unable to create prefix: NetBox API error: POST"));
    }
}
