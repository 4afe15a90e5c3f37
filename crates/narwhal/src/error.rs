#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("invalid operation: {message}")]
    InvalidOperation { message: String },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error(transparent)]
    Collections(#[from] narwhal_collections::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn vertex_not_found(vertex: &impl std::fmt::Debug) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn edge_not_found(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
