use crate::error::ValidationError;
use crate::models::message::{MessageEnvelope, MessageTemplate, NotificationRequest};
use crate::models::validation::validate_channel;
use crate::utils::{Alphabet, normalize_timestamp, random_token};

pub const MESSAGE_ID_LENGTH: usize = 32;

/// Builds the canonical message envelope from an inbound request.
///
/// A fresh message ID is generated on every call. `templateParams` is
/// opaque payload and passes through untouched; `users` is split on single
/// spaces with interior empty tokens preserved.
pub fn map_request(request: &NotificationRequest) -> Result<MessageEnvelope, ValidationError> {
    let channel = required(&request.channel, "channel")?;
    validate_channel(channel)?;

    let template_name = required(&request.template_name, "templateName")?;

    let params = match &request.template_params {
        Some(value) if !value.is_null() => value.clone(),
        _ => return Err(ValidationError::MissingField("templateParams")),
    };

    let users_raw = required(&request.users, "users")?;
    let users: Vec<String> = users_raw.split(' ').map(str::to_owned).collect();
    if users.iter().all(|user| user.is_empty()) {
        return Err(ValidationError::EmptyRecipients);
    }

    let send_time = normalize_field(&request.datetime_send_message, "datetimeSendMessage")?;
    let expires = normalize_field(&request.datetime_expire, "datetimeExpire")?;

    Ok(MessageEnvelope {
        id: random_token(MESSAGE_ID_LENGTH, Alphabet::LowerAlnum, ""),
        template: MessageTemplate {
            name: template_name.to_owned(),
            params,
        },
        channel: channel.to_owned(),
        users,
        send_time,
        expires,
    })
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(value)
}

fn normalize_field(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let value = required(value, field)?;

    normalize_timestamp(value).map_err(|source| ValidationError::InvalidTimestamp { field, source })
}
