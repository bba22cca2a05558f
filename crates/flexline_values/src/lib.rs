//! Typed length values and basic geometry for the flexline layout engine.
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>

#![forbid(unsafe_code)]

pub mod rect;

pub use rect::LayoutRect;

use std::fmt;
use std::str::FromStr;

/// Parse error for value parsing utilities in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueParseError {
    /// The input did not match any accepted value grammar.
    Malformed,
    /// The numeric magnitude was NaN or infinite.
    NonFinite,
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed length value"),
            Self::NonFinite => f.write_str("length magnitude must be finite"),
        }
    }
}

impl std::error::Error for ValueParseError {}

/// A tagged length value as used by every style size/offset property.
///
/// `Points` and `Percent` carry a finite magnitude; the keyword variants
/// carry none. `Content` is only meaningful for `flex-basis`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Value {
    /// No value set; behaves like `Auto` for most properties.
    #[default]
    Undefined,
    /// The `auto` keyword.
    Auto,
    /// The `content` keyword (flex-basis only).
    Content,
    /// An absolute length in CSS px.
    Points(f32),
    /// A percentage of some basis, stored as the literal percentage
    /// (`Percent(50.0)` is half the basis).
    Percent(f32),
}

impl Value {
    /// Resolve against a basis. Returns `Some` only for definite results:
    /// points always resolve; percentages resolve when the basis is a
    /// finite non-negative number; keywords never resolve.
    pub fn resolve(self, basis: Option<f32>) -> Option<f32> {
        match self {
            Self::Points(magnitude) => Some(magnitude),
            Self::Percent(magnitude) => match basis {
                Some(base) if base.is_finite() && base >= 0.0 => Some(magnitude / 100.0 * base),
                _ => None,
            },
            Self::Undefined | Self::Auto | Self::Content => None,
        }
    }

    /// Resolve like [`Value::resolve`], treating an indefinite result as 0.
    /// Used for margins, padding, borders and gaps where `auto`/unset
    /// contribute no space.
    pub fn numeric(self, basis: Option<f32>) -> f32 {
        self.resolve(basis).unwrap_or(0.0)
    }

    /// True when the value resolves to a definite number against `basis`.
    pub fn is_definite(self, basis: Option<f32>) -> bool {
        self.resolve(basis).is_some()
    }

    /// True for `Auto` and `Undefined` (the "no explicit size" cases).
    pub const fn is_auto_like(self) -> bool {
        matches!(self, Self::Auto | Self::Undefined)
    }

    /// The raw magnitude for `Points`/`Percent`, `None` for keywords.
    pub const fn magnitude(self) -> Option<f32> {
        match self {
            Self::Points(magnitude) | Self::Percent(magnitude) => Some(magnitude),
            Self::Undefined | Self::Auto | Self::Content => None,
        }
    }

    /// True unless the value carries a NaN or infinite magnitude.
    pub fn is_finite(self) -> bool {
        self.magnitude().is_none_or(f32::is_finite)
    }
}

impl From<f32> for Value {
    fn from(points: f32) -> Self {
        Self::Points(points)
    }
}

/// Check the strict decimal shape accepted for percentage magnitudes:
/// an optional leading minus, digits, optionally a dot and more digits.
fn is_plain_decimal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut chars = digits.chars().peekable();
    if !chars.peek().is_some_and(char::is_ascii_digit) {
        return false;
    }
    for ch in chars {
        match ch {
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    // A trailing dot ("12.") is not part of the accepted grammar.
    !digits.ends_with('.')
}

impl FromStr for Value {
    type Err = ValueParseError;

    /// Parse a value from its string form: `"auto"`, `"content"`, a
    /// percentage such as `"-12.5%"`, or a plain numeric string (points).
    ///
    /// # Errors
    /// `Malformed` when the text matches no accepted grammar, `NonFinite`
    /// when the magnitude parses but is not a finite number.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        match trimmed {
            "auto" => return Ok(Self::Auto),
            "content" => return Ok(Self::Content),
            "" => return Err(ValueParseError::Malformed),
            _ => {}
        }
        if let Some(stripped) = trimmed.strip_suffix('%') {
            if !is_plain_decimal(stripped) {
                return Err(ValueParseError::Malformed);
            }
            let magnitude: f32 = stripped.parse().map_err(|_| ValueParseError::Malformed)?;
            if !magnitude.is_finite() {
                return Err(ValueParseError::NonFinite);
            }
            return Ok(Self::Percent(magnitude));
        }
        let magnitude: f32 = trimmed.parse().map_err(|_| ValueParseError::Malformed)?;
        if !magnitude.is_finite() {
            return Err(ValueParseError::NonFinite);
        }
        Ok(Self::Points(magnitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if point and percentage resolution deviate from the definite/indefinite rules.
    fn resolves_points_and_percentages() {
        assert_eq!(Value::Points(40.0).resolve(None), Some(40.0));
        assert_eq!(Value::Percent(50.0).resolve(Some(200.0)), Some(100.0));
        assert_eq!(Value::Percent(50.0).resolve(None), None);
        assert_eq!(Value::Percent(50.0).resolve(Some(f32::INFINITY)), None);
        assert_eq!(Value::Percent(50.0).resolve(Some(-10.0)), None);
        assert_eq!(Value::Auto.resolve(Some(100.0)), None);
        assert_eq!(Value::Content.resolve(Some(100.0)), None);
        assert_eq!(Value::Undefined.resolve(Some(100.0)), None);
    }

    #[test]
    /// # Panics
    /// Panics if `numeric` does not fall back to zero for indefinite results.
    fn numeric_defaults_indefinite_to_zero() {
        assert_eq!(Value::Auto.numeric(Some(100.0)), 0.0);
        assert_eq!(Value::Percent(10.0).numeric(None), 0.0);
        assert_eq!(Value::Percent(10.0).numeric(Some(50.0)), 5.0);
    }

    #[test]
    /// # Panics
    /// Panics if string parsing accepts or rejects the wrong grammar.
    fn parses_keywords_percentages_and_numbers() {
        assert_eq!("auto".parse::<Value>(), Ok(Value::Auto));
        assert_eq!("content".parse::<Value>(), Ok(Value::Content));
        assert_eq!("50%".parse::<Value>(), Ok(Value::Percent(50.0)));
        assert_eq!("-12.5%".parse::<Value>(), Ok(Value::Percent(-12.5)));
        assert_eq!("12.75".parse::<Value>(), Ok(Value::Points(12.75)));
        assert_eq!("-3".parse::<Value>(), Ok(Value::Points(-3.0)));
        assert_eq!("".parse::<Value>(), Err(ValueParseError::Malformed));
        assert_eq!("12.%".parse::<Value>(), Err(ValueParseError::Malformed));
        assert_eq!(".5%".parse::<Value>(), Err(ValueParseError::Malformed));
        assert_eq!("1e2%".parse::<Value>(), Err(ValueParseError::Malformed));
        assert_eq!("wide".parse::<Value>(), Err(ValueParseError::Malformed));
        assert_eq!("inf".parse::<Value>(), Err(ValueParseError::NonFinite));
    }

    #[test]
    /// # Panics
    /// Panics if finiteness checks miss NaN or infinite magnitudes.
    fn finiteness_checks() {
        assert!(Value::Points(1.0).is_finite());
        assert!(Value::Auto.is_finite());
        assert!(!Value::Points(f32::NAN).is_finite());
        assert!(!Value::Percent(f32::INFINITY).is_finite());
    }
}
