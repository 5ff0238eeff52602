//! CSS-style lengths, as accepted for letter spacing and base font size.
use std::fmt;
use std::str::FromStr;

/// Pixels in an `em` when no font size is known, as in browsers.
pub const DEFAULT_FONT_SIZE_PX: f64 = 16.0;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LengthError {
    #[error("empty length")]
    Empty,
    #[error("'{0}' is not a number")]
    BadNumber(String),
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),
    #[error("base font size must be positive")]
    NonPositiveBase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    Px,
    Em,
    Rem,
    Pt,
    Pc,
    In,
    Cm,
    Mm,
    Q,
}

impl Unit {
    /// How many pixels one of this unit is; `em` and `rem` use the default
    /// font size.
    pub fn px(self) -> f64 {
        match self {
            Unit::Px => 1.0,
            Unit::Em | Unit::Rem => DEFAULT_FONT_SIZE_PX,
            Unit::Pt => 96.0 / 72.0,
            Unit::Pc => 16.0,
            Unit::In => 96.0,
            Unit::Cm => 96.0 / 2.54,
            Unit::Mm => 96.0 / 25.4,
            Unit::Q => 96.0 / 101.6,
        }
    }

    pub fn is_font_relative(self) -> bool {
        matches!(self, Unit::Em | Unit::Rem)
    }
}

impl FromStr for Unit {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "px" => Ok(Unit::Px),
            "em" => Ok(Unit::Em),
            "rem" => Ok(Unit::Rem),
            "pt" => Ok(Unit::Pt),
            "pc" => Ok(Unit::Pc),
            "in" => Ok(Unit::In),
            "cm" => Ok(Unit::Cm),
            "mm" => Ok(Unit::Mm),
            "q" => Ok(Unit::Q),
            _ => Err(LengthError::UnknownUnit(s.to_string())),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Q => "q",
        };
        f.write_str(s)
    }
}

/// A number with a unit. A bare number is in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: Unit,
}

impl Length {
    pub fn new(value: f64, unit: Unit) -> Self {
        Length { value, unit }
    }

    pub fn to_px(&self) -> f64 {
        self.value * self.unit.px()
    }
}

impl FromStr for Length {
    type Err = LengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LengthError::Empty);
        }
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value = match number.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            _ => return Err(LengthError::BadNumber(number.to_string())),
        };
        Ok(Length {
            value,
            unit: unit.trim().parse()?,
        })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Express `letter_spacing` in ems of a font set at `base_font_size`.
///
/// Spacing given in `em` or `rem` is already relative to the font and is
/// returned unchanged.
pub fn letter_spacing_em(letter_spacing: &Length, base_font_size: &Length) -> Result<f64, LengthError> {
    if letter_spacing.unit.is_font_relative() {
        return Ok(letter_spacing.value);
    }
    let base = base_font_size.to_px();
    if base <= 0.0 {
        return Err(LengthError::NonPositiveBase);
    }
    Ok(letter_spacing.to_px() / base)
}
