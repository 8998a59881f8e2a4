use thiserror::Error;

/// Errors that can occur while serving pokemon operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PokedexError {
    /// One or more input fields failed validation.
    #[error("{}", messages.join(", "))]
    Validation { messages: Vec<String> },

    /// A record with the same name already exists.
    #[error("Pokemon with name {name} already exists")]
    Duplicate { name: String },

    /// No record with this id exists locally or upstream.
    #[error("Pokemon with id {id} not found")]
    NotFound { id: u32 },

    /// The upstream API failed for any reason other than a missing record.
    #[error("Upstream request failed: {0}")]
    Upstream(String),
}

/// Result type for pokemon operations.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = PokedexError::NotFound { id: 400_000 };
        assert_eq!(error.to_string(), "Pokemon with id 400000 not found");
    }

    #[test]
    fn test_duplicate_display() {
        let error = PokedexError::Duplicate {
            name: "Pikachu".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Pokemon with name Pikachu already exists"
        );
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let error = PokedexError::Validation {
            messages: vec![
                "name must be a string".to_string(),
                "name should not be empty".to_string(),
            ],
        };
        assert_eq!(
            error.to_string(),
            "name must be a string, name should not be empty"
        );
    }

    #[test]
    fn test_upstream_display() {
        let error = PokedexError::Upstream("connection reset".to_string());
        assert_eq!(error.to_string(), "Upstream request failed: connection reset");
    }
}
