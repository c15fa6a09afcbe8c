use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}
