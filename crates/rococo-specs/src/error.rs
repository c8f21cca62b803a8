use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecsError {
    /// A composer binding that cannot be served by its entity schema.
    ///
    /// Only raised while composers are being built; never at request time.
    #[error("Invalid binding for {entity}.{field}: {reason}")]
    Configuration {
        entity: &'static str,
        field: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl SpecsError {
    pub(crate) fn configuration(
        entity: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SpecsError::Configuration {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpecsError>;
