//! # Error Types
//!
//! Error taxonomy for reconciliation using `thiserror`.

/// Custom result type for reconciler operations
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Main error type for the gateway reconciler
#[derive(thiserror::Error, Debug)]
pub enum ReconcileError {
    /// A call against the gateway control plane failed
    #[error("Gateway error during {operation} on gateway '{gateway_id}': {message}")]
    Gateway {
        operation: String,
        gateway_id: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Endpoint metadata could not be read from a deployed resource
    #[error("Metadata error ({field}): {message}")]
    Metadata { field: String, message: String },

    /// Cluster topology could not be resolved
    #[error("Topology error: {message}")]
    Topology { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String, field: Option<String> },
}

impl ReconcileError {
    /// Create a gateway error for the given operation
    pub fn gateway<O: Into<String>, G: Into<String>, M: Into<String>>(
        operation: O,
        gateway_id: G,
        message: M,
    ) -> Self {
        Self::Gateway {
            operation: operation.into(),
            gateway_id: gateway_id.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a gateway error wrapping the underlying SDK error
    pub fn gateway_with_source<O: Into<String>, G: Into<String>, M: Into<String>>(
        operation: O,
        gateway_id: G,
        message: M,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Gateway {
            operation: operation.into(),
            gateway_id: gateway_id.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a metadata error for a resource field
    pub fn metadata<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Metadata { field: field.into(), message: message.into() }
    }

    /// Create a topology error
    pub fn topology<S: Into<String>>(message: S) -> Self {
        Self::Topology { message: message.into() }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), source: None }
    }

    /// Create a configuration error with source
    pub fn config_with_source<S: Into<String>>(
        message: S,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::Config { message: message.into(), source: Some(source) }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation { message: message.into(), field: None }
    }

    /// Create a validation error with field information
    pub fn validation_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Validation { message: message.into(), field: Some(field.into()) }
    }

    /// Check whether re-running the reconciliation on the next event may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, ReconcileError::Gateway { .. } | ReconcileError::Topology { .. })
    }
}

impl From<validator::ValidationErrors> for ReconcileError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let error_messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| e.message.as_ref().map_or("Invalid value".to_string(), |m| m.to_string()))
                    .collect();
                format!("{}: {}", field, error_messages.join(", "))
            })
            .collect::<Vec<_>>()
            .join("; ");

        Self::validation(format!("Validation failed: {}", message))
    }
}
