//! Field checks shared by the services' `create` paths.

use convene_types::{is_valid_date, is_valid_url};

use crate::error::{SdkError, SdkResult};

/// Whitespace-only counts as missing.
pub(crate) fn require(entity: &'static str, field: &'static str, value: &str) -> SdkResult<()> {
    if value.trim().is_empty() {
        return Err(SdkError::MissingField { entity, field });
    }
    Ok(())
}

pub(crate) fn require_date(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> SdkResult<()> {
    require(entity, field, value)?;
    if !is_valid_date(value) {
        return Err(SdkError::InvalidDate {
            entity,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// An absent or blank optional date passes.
pub(crate) fn optional_date(
    entity: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> SdkResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => require_date(entity, field, v),
        _ => Ok(()),
    }
}

pub(crate) fn require_url(entity: &'static str, field: &'static str, value: &str) -> SdkResult<()> {
    require(entity, field, value)?;
    if !is_valid_url(value) {
        return Err(SdkError::InvalidUrl {
            entity,
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// An absent or blank optional URL passes.
pub(crate) fn optional_url(
    entity: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> SdkResult<()> {
    match value {
        Some(v) if !v.trim().is_empty() => require_url(entity, field, v),
        _ => Ok(()),
    }
}
