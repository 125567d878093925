use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    DependencyFault {
        message: String,
        #[source]
        source: Box<CoreError>,
    },

    #[error("{0}")]
    UnvalidatedInput(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn dependency_fault(message: impl Into<String>, source: CoreError) -> Self {
        CoreError::DependencyFault {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Client-correctable errors, detected before any storage call.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidSortField(_) | CoreError::UnvalidatedInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn dependency_fault_keeps_its_cause() {
        let inner = CoreError::NotFound("Manufacturer with id 99 not found".to_string());
        let err = CoreError::dependency_fault("Failed to set manufacturer", inner.clone());

        assert_eq!(err.to_string(), "Failed to set manufacturer");
        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), inner.to_string());
        assert!(!err.is_client_error());
    }

    #[test]
    fn validation_errors_are_client_errors() {
        assert!(CoreError::InvalidSortField("color".to_string()).is_client_error());
        assert!(CoreError::UnvalidatedInput("missing".to_string()).is_client_error());
        assert!(!CoreError::NotFound("gone".to_string()).is_client_error());
        assert!(!CoreError::InternalServerError.is_client_error());
    }
}
