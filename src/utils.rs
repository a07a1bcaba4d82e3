use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

use crate::error::ParseError;

const CANONICAL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Symbol set a random token is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    All,
    Digits,
    LowerAlnum,
    UpperAlnum,
}

impl Alphabet {
    pub fn symbols(self) -> &'static [u8] {
        match self {
            Alphabet::All => {
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
            }
            Alphabet::Digits => b"0123456789",
            Alphabet::LowerAlnum => b"abcdefghijklmnopqrstuvwxyz0123456789",
            Alphabet::UpperAlnum => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
        }
    }
}

/// Generates `prefix` followed by `length` symbols drawn uniformly from
/// `alphabet`, using the thread-local generator. A `length` of zero yields
/// the prefix alone.
pub fn random_token(length: usize, alphabet: Alphabet, prefix: &str) -> String {
    random_token_with(&mut rand::rng(), length, alphabet, prefix)
}

pub fn random_token_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    alphabet: Alphabet,
    prefix: &str,
) -> String {
    let symbols = alphabet.symbols();

    let mut token = String::with_capacity(prefix.len() + length);
    token.push_str(prefix);

    for _ in 0..length {
        let index = rng.random_range(0..symbols.len());
        token.push(symbols[index] as char);
    }

    token
}

/// Reduces a timestamp string to the canonical `YYYY-MM-DD HH:MM:SS` form.
///
/// Accepts RFC 3339 with or without fractional seconds, `T`- or
/// space-separated date-times without an offset, and bare dates (taken as
/// midnight). An offset is discarded after parsing: the wall-clock digits
/// of the source offset are kept, no conversion to UTC happens.
pub fn normalize_timestamp(input: &str) -> Result<String, ParseError> {
    let trimmed = input.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local().format(CANONICAL_FORMAT).to_string());
    }

    const NAIVE_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.format(CANONICAL_FORMAT).to_string());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date
            .and_time(NaiveTime::MIN)
            .format(CANONICAL_FORMAT)
            .to_string());
    }

    Err(ParseError {
        input: input.to_string(),
    })
}
