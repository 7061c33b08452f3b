//! Presence checks for inbound request bodies.

use tracing::warn;

use crate::error::{ApiError, ApiResult};

/// Fails on the first field whose value is absent, in the order given.
pub fn require_fields<'a, I>(fields: I) -> ApiResult<()>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    for (name, present) in fields {
        if !present {
            warn!(field = name, "required field missing");
            return Err(ApiError::validation(format!(
                "Missing '{name}' in request body"
            )));
        }
    }
    Ok(())
}

/// A value counts as supplied only when it is present and non-empty.
pub fn is_truthy(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Fails with `message` unless at least one value is truthy.
pub fn require_any<'a, I>(values: I, message: &str) -> ApiResult<()>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    if values.into_iter().any(is_truthy) {
        Ok(())
    } else {
        warn!("no usable fields supplied");
        Err(ApiError::validation(message))
    }
}
