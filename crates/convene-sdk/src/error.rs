use thiserror::Error;

/// Usage errors raised by entity services, plus setup failures.
///
/// Storage faults during normal operation never appear here; see the
/// crate docs.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("{entity}: missing required field `{field}`")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{entity}: `{field}` is not a valid date: {value:?}")]
    InvalidDate {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity}: `{field}` is not a valid URL: {value:?}")]
    InvalidUrl {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("{entity}: {reason}")]
    InvalidRange { entity: &'static str, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] convene_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
