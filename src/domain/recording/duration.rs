//! Recording limit value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default cap on an interactive recording (60 seconds)
pub const DEFAULT_MAX_RECORDING_SECS: u64 = 60;

/// A positive, whole-second time span such as `45s` or `1m30s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Upper bound for a recording when none is configured
    pub const fn default_max_recording() -> Self {
        Self::from_secs(DEFAULT_MAX_RECORDING_SECS)
    }

    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Accepts `<n>s`, `<n>m` and `<n>m<n>s`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DurationParseError {
            input: s.to_string(),
        };
        let input = s.trim().to_ascii_lowercase();

        let (minutes, rest) = match input.split_once('m') {
            Some((m, rest)) => (parse_component(m).ok_or_else(invalid)?, rest),
            None => (0, input.as_str()),
        };

        let seconds = if rest.is_empty() {
            if minutes == 0 && !input.contains('m') {
                return Err(invalid());
            }
            0
        } else {
            let digits = rest.strip_suffix('s').ok_or_else(invalid)?;
            parse_component(digits).ok_or_else(invalid)?
        };

        let total_secs = minutes
            .checked_mul(60)
            .and_then(|m| m.checked_add(seconds))
            .ok_or_else(invalid)?;
        if total_secs == 0 {
            return Err(invalid());
        }

        Ok(Self::from_secs(total_secs))
    }
}

fn parse_component(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        match (minutes, seconds) {
            (0, s) => write!(f, "{}s", s),
            (m, 0) => write!(f, "{}m", m),
            (m, s) => write!(f, "{}m{}s", m, s),
        }
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_max_recording()
    }
}
