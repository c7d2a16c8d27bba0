//! Paste form state behind the encryption and expiration controls.

use crate::constants::{MAX_EXPIRATION_SECS, NEVER_EXPIRE_VALUE};
use crate::error::AppError;
use crate::text::normalize_optional_nonempty;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// How long a paste lives.
///
/// Serializes as the lifetime in seconds, `null` for never.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(into = "Option<u64>")]
pub enum Expiration {
    Never,
    After(u64),
}

impl From<Expiration> for Option<u64> {
    fn from(value: Expiration) -> Self {
        match value {
            Expiration::Never => None,
            Expiration::After(seconds) => Some(seconds),
        }
    }
}

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(60 * 60),
        'd' => Some(24 * 60 * 60),
        _ => None,
    }
}

impl Expiration {
    /// Parse the `expire` form value.
    ///
    /// Empty and `-1` mean never. Otherwise the value is a sequence of
    /// `<integer><unit>` groups (`s`, `m`, `h`, `d`), e.g. `1h30m`, clamped to
    /// 15 days.
    ///
    /// # Errors
    /// Returns [`AppError::BadRequest`] for malformed or zero durations.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let Some(value) = normalize_optional_nonempty(Some(value.to_string())) else {
            return Ok(Self::Never);
        };
        if value == NEVER_EXPIRE_VALUE {
            return Ok(Self::Never);
        }

        let invalid = || AppError::BadRequest(format!("Invalid expiration '{}'", value));
        let mut total: u64 = 0;
        let mut digits = String::new();
        for ch in value.chars() {
            if ch.is_ascii_digit() {
                digits.push(ch);
                continue;
            }
            let scale = unit_seconds(ch).ok_or_else(invalid)?;
            let amount: u64 = digits.parse().map_err(|_| invalid())?;
            total = total.saturating_add(amount.saturating_mul(scale));
            digits.clear();
        }
        if !digits.is_empty() || total == 0 {
            return Err(invalid());
        }
        Ok(Self::After(total.min(MAX_EXPIRATION_SECS)))
    }

    pub fn as_duration(self) -> Option<Duration> {
        match self {
            Self::Never => None,
            Self::After(seconds) => Some(Duration::from_secs(seconds)),
        }
    }
}

/// Encryption toggle state, derived when the password dialog closes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncryptionState {
    Encrypted,
    Plain,
}

impl EncryptionState {
    /// Any non-empty password turns encryption on.
    pub fn from_password(password: &str) -> Self {
        if password.is_empty() {
            Self::Plain
        } else {
            Self::Encrypted
        }
    }

    /// Icon class shown on the encryption button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Encrypted => "icon-lock",
            Self::Plain => "icon-lock-open-alt",
        }
    }
}

/// Form fields keyed by name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PasteForm {
    fields: BTreeMap<String, String>,
}

impl PasteForm {
    /// Collect ordered `(name, value)` pairs; a later duplicate name wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Parsed `expire` field; missing means never.
    ///
    /// # Errors
    /// Propagates [`Expiration::parse`] failures.
    pub fn expiration(&self) -> Result<Expiration, AppError> {
        Expiration::parse(self.get("expire").unwrap_or_default())
    }

    /// Encryption state from the `password` field.
    pub fn encryption(&self) -> EncryptionState {
        EncryptionState::from_password(self.get("password").unwrap_or_default())
    }
}
