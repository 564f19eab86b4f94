use advprune_core_types::RequestId;
use thiserror::Error;

/// Result type alias using PruneError
pub type Result<T> = std::result::Result<T, PruneError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of every failure the pruning kernel and its host
/// glue can surface. Each kind maps to a stable error code used in log
/// lines and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidNodeId,
    NotFound,
    DuplicateNode,
    CycleDetected,

    // Host collaborators
    RegistryUnavailable,
    ResolutionFailed,
    RemovalFailed,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidNodeId => "ERR_INVALID_NODE_ID",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateNode => "ERR_DUPLICATE_NODE",
            ExErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ExErrorKind::RegistryUnavailable => "ERR_REGISTRY_UNAVAILABLE",
            ExErrorKind::ResolutionFailed => "ERR_RESOLUTION_FAILED",
            ExErrorKind::RemovalFailed => "ERR_REMOVAL_FAILED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// the single log line a failed pass produces.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a node id, a resource path, a file name)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain errors raised by the pruning kernel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PruneError {
    // ===== Identifier Errors =====
    /// Node id text could not be parsed
    #[error("Invalid node id '{raw}': {reason}")]
    InvalidNodeId { raw: String, reason: String },

    // ===== Structural Errors =====
    /// Node not present in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound { node_id: String },

    /// Registry enumerated the same id twice
    #[error("Duplicate node in snapshot: {node_id}")]
    DuplicateNode { node_id: String },

    /// Parent chain loops back on itself
    #[error("Cycle detected in parent chain involving node {node_id}")]
    CycleDetected { node_id: String },

    // ===== Host Collaborator Errors =====
    /// Registry could not be enumerated or mutated
    #[error("Registry error: {message}")]
    Registry { message: String },

    /// Resource lookup failed (callers normally absorb this as fail-open)
    #[error("Failed to resolve resource {resource}: {message}")]
    ResolutionFailed { resource: String, message: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<PruneError> for ExError {
    fn from(err: PruneError) -> Self {
        match err {
            PruneError::InvalidNodeId { raw, reason } => ExError::new(ExErrorKind::InvalidNodeId)
                .with_entity_id(raw)
                .with_op("parse_node_id")
                .with_message(reason),

            PruneError::NodeNotFound { node_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(node_id)
                .with_message("Node not found"),

            PruneError::DuplicateNode { node_id } => ExError::new(ExErrorKind::DuplicateNode)
                .with_entity_id(node_id)
                .with_op("build_graph")
                .with_message("Registry enumerated the same node twice"),

            PruneError::CycleDetected { node_id } => ExError::new(ExErrorKind::CycleDetected)
                .with_entity_id(node_id)
                .with_op("build_graph")
                .with_message("Parent chain contains a cycle"),

            PruneError::Registry { message } => {
                ExError::new(ExErrorKind::RegistryUnavailable).with_message(message)
            }

            PruneError::ResolutionFailed { resource, message } => {
                ExError::new(ExErrorKind::ResolutionFailed)
                    .with_entity_id(resource)
                    .with_op("resolve_origin")
                    .with_message(message)
            }

            PruneError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            PruneError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for PruneError {
    fn from(err: serde_json::Error) -> Self {
        PruneError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_stable() {
        let cases = [
            (ExErrorKind::InvalidNodeId, "ERR_INVALID_NODE_ID"),
            (ExErrorKind::DuplicateNode, "ERR_DUPLICATE_NODE"),
            (ExErrorKind::CycleDetected, "ERR_CYCLE_DETECTED"),
            (ExErrorKind::RegistryUnavailable, "ERR_REGISTRY_UNAVAILABLE"),
            (ExErrorKind::RemovalFailed, "ERR_REMOVAL_FAILED"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_prune_error_converts_with_context() {
        let err: ExError = PruneError::CycleDetected {
            node_id: "moda:a".to_string(),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::CycleDetected);
        assert_eq!(err.entity_id(), Some("moda:a"));
        assert_eq!(err.op(), Some("build_graph"));
    }

    #[test]
    fn test_display_includes_code_and_source() {
        let inner = ExError::new(ExErrorKind::Io).with_message("disk gone");
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("save_rules")
            .with_message("write failed")
            .with_source(inner);

        let text = err.to_string();
        assert!(text.starts_with("[ERR_PERSISTENCE] in operation 'save_rules'"));
        assert!(text.contains("write failed"));
        assert!(text.contains("[ERR_IO]"));
    }
}
