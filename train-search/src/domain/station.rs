//! Station code and station record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// Longest station code we accept (e.g. "KSRBE").
const MAX_CODE_LEN: usize = 5;

/// A URL-safe station code: 1 to 5 uppercase ASCII letters or digits.
///
/// Used where a code is interpolated into a request path. Searches and the
/// station index work on [`normalize_code`] output instead, which accepts any
/// non-blank text.
///
/// # Examples
///
/// ```
/// use train_search::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected by the strict parser...
/// assert!(StationCode::parse("ndls").is_err());
/// // ...but accepted after normalization.
/// assert_eq!(StationCode::parse_normalized(" ndls ").unwrap(), ndls);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode {
    bytes: [u8; MAX_CODE_LEN],
    len: u8,
}

impl StationCode {
    /// Parse a station code, which must already be uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let raw = s.as_bytes();

        if raw.is_empty() || raw.len() > MAX_CODE_LEN {
            return Err(InvalidStationCode {
                reason: "must be 1 to 5 characters",
            });
        }

        if !raw
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidStationCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        let mut bytes = [0u8; MAX_CODE_LEN];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(Self {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Parse user input: surrounding whitespace is trimmed and letters uppercased.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored.
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or("")
    }
}

/// Canonical form of a user-supplied station code or name: trimmed and
/// uppercased. `None` when nothing is left.
///
/// ```
/// use train_search::domain::normalize_code;
///
/// assert_eq!(normalize_code(" ndls ").as_deref(), Some("NDLS"));
/// assert_eq!(normalize_code("New Delhi").as_deref(), Some("NEW DELHI"));
/// assert_eq!(normalize_code("  "), None);
/// ```
pub fn normalize_code(s: &str) -> Option<String> {
    let code = s.trim().to_uppercase();
    (!code.is_empty()).then_some(code)
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station as returned by the autocomplete index.
///
/// `state` and `zone` are derived from the name and code when the index is
/// loaded; the raw dataset only carries code and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Station {
    /// Normalized code, see [`normalize_code`]
    pub code: String,
    pub name: String,
    pub state: String,
    pub zone: String,
}

/// A `{code, name}` record from the static station dataset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    pub code: String,
    pub name: String,
}
