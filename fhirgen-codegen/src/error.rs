//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// A declared type that is neither a remap-table entry nor a class in
    /// the schema.
    #[error("unknown type '{type_name}' in property '{property}' of class '{class}'")]
    UnknownType {
        /// Declared type name.
        type_name: String,
        /// Owning class name.
        class: String,
        /// Property name.
        property: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates an unknown-type error naming the offending class and property.
    pub fn unknown_type(
        type_name: impl Into<String>,
        class: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            class: class.into(),
            property: property.into(),
        }
    }
}
