use crate::error::AppError;

/// Parses a u64 value from a String id column.
///
/// Discord and thread ids are stored as strings in the database; this
/// converts them back for use with the Discord API.
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError)` - Value was not a valid u64
pub fn parse_u64_from_string(value: &str) -> Result<u64, AppError> {
    value
        .parse::<u64>()
        .map_err(|e| AppError::InternalError(format!("Failed to parse ID from '{}': {}", value, e)))
}
