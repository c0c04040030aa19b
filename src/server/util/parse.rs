use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake stored or configured as a string.
///
/// Surrounding whitespace is ignored.
///
/// # Returns
/// - `Ok(u64)` - Parsed snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - Not a valid u64
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    let id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(id)
}
