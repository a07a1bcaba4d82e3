use crate::error::ValidationError;

const MAX_CHANNEL_LENGTH: usize = 200;

/// Rejects channel values that would produce an invalid queue name at the
/// broker, so the failure surfaces as a client error instead of a publish
/// error.
pub fn validate_channel(channel: &str) -> Result<(), ValidationError> {
    if channel.len() > MAX_CHANNEL_LENGTH {
        return Err(ValidationError::InvalidChannel(channel.to_string()));
    }

    let valid_chars = channel
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.');

    if !valid_chars {
        return Err(ValidationError::InvalidChannel(channel.to_string()));
    }

    Ok(())
}
