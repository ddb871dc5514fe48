//! Amount representations used on the provider wire.

use serde::{Deserialize, Serialize};

/// Amount rendered as a whole-unit decimal string with no fractional part.
///
/// The provider reads `"1000"` as one thousand units of the currency; `10.00` is never
/// sent. Fractions are rounded to the nearest whole unit.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringWholeUnit(String);

impl StringWholeUnit {
    pub fn from_major_unit(amount: f64) -> Self {
        Self(format!("{amount:.0}"))
    }

    /// Read a provider string-encoded decimal. Blank or malformed values read as zero.
    pub fn to_major_unit_lossy(&self) -> f64 {
        parse_string_amount(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StringWholeUnit {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Parse a string-encoded decimal amount, defaulting to zero when it is blank or malformed.
pub fn parse_string_amount(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or_default()
}
