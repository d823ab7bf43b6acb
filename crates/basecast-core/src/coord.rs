//! Decimal coordinate strings to the receiver's scaled integer encoding.
//!
//! The receiver takes a position as a standard-precision integer plus a
//! small high-precision remainder. Latitude and longitude use 1e-7 degree
//! units with a 2-digit remainder; height uses centimetres with a 1-digit
//! remainder. Conversion is done on the decimal digits directly so nothing
//! is lost to floating point.

/// Degrees ×10^7.
pub const LATLON_SCALE: u32 = 7;
pub const LATLON_HP_DIGITS: u32 = 2;

/// Metres ×10^2 (centimetres).
pub const HEIGHT_SCALE: u32 = 2;
pub const HEIGHT_HP_DIGITS: u32 = 1;

/// Metres ×10^4 (0.1 mm), the unit of accuracy limits.
pub const ACCURACY_SCALE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decomposed {
    pub primary: i32,
    pub high_precision: i8,
}

/// Split a decimal string into primary and high-precision parts.
///
/// The primary value is the integer part followed by the first `scale`
/// fraction digits (zero padded on the right). The high-precision value is
/// the last `hp_digits` characters of the fraction. Both carry the sign.
///
/// A fraction of exactly `scale + hp_digits` digits round-trips:
/// `primary·10^-scale + hp·10^-(scale+hp_digits)` equals the input.
pub fn decompose(value: &str, scale: u32, hp_digits: u32) -> Result<Decomposed, CoordError> {
    let (negative, int_part, frac) = split_decimal(value)?;
    let frac = frac.ok_or(CoordError::MissingDecimalPoint)?;

    if frac.len() < hp_digits as usize {
        return Err(CoordError::TooFewFractionDigits {
            got: frac.len(),
            need: hp_digits as usize,
        });
    }
    if frac.len() > (scale + hp_digits) as usize {
        return Err(CoordError::TooManyFractionDigits {
            got: frac.len(),
            max: (scale + hp_digits) as usize,
        });
    }

    let primary = scaled(int_part, frac, scale)?;
    let hp: i64 = frac[frac.len() - hp_digits as usize..]
        .parse()
        .unwrap_or(0);

    let sign = if negative { -1 } else { 1 };
    let primary = i32::try_from(sign * primary).map_err(|_| CoordError::Overflow)?;
    let high_precision = i8::try_from(sign * hp).map_err(|_| CoordError::Overflow)?;
    Ok(Decomposed {
        primary,
        high_precision,
    })
}

/// Parse a non-negative decimal (point optional) into units of 10^-scale.
///
/// Used for survey accuracy limits given in metres.
pub fn parse_scaled(value: &str, scale: u32) -> Result<u32, CoordError> {
    let (negative, int_part, frac) = split_decimal(value)?;
    let frac = frac.unwrap_or("");
    if negative {
        return Err(CoordError::Negative);
    }
    if frac.len() > scale as usize {
        return Err(CoordError::TooManyFractionDigits {
            got: frac.len(),
            max: scale as usize,
        });
    }
    let v = scaled(int_part, frac, scale)?;
    u32::try_from(v).map_err(|_| CoordError::Overflow)
}

/// Returns (negative, integer digits, fraction digits if a point was present).
fn split_decimal(value: &str) -> Result<(bool, &str, Option<&str>), CoordError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CoordError::Empty);
    }
    let (negative, unsigned) = match value.as_bytes()[0] {
        b'-' => (true, &value[1..]),
        b'+' => (false, &value[1..]),
        _ => (false, value),
    };
    let (int_part, frac) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if int_part.is_empty() {
        return Err(CoordError::Empty);
    }
    for c in int_part.chars().chain(frac.unwrap_or("").chars()) {
        if !c.is_ascii_digit() {
            return Err(CoordError::InvalidDigit(c));
        }
    }
    Ok((negative, int_part, frac))
}

/// `int_part · 10^scale + first scale digits of frac`, zero padded.
fn scaled(int_part: &str, frac: &str, scale: u32) -> Result<i64, CoordError> {
    let mut acc: i64 = 0;
    let fraction = frac
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(scale as usize);
    for b in int_part.bytes().chain(fraction) {
        acc = acc
            .checked_mul(10)
            .and_then(|a| a.checked_add((b - b'0') as i64))
            .ok_or(CoordError::Overflow)?;
    }
    Ok(acc)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("empty value")]
    Empty,

    #[error("missing decimal point")]
    MissingDecimalPoint,

    #[error("invalid character {0:?}")]
    InvalidDigit(char),

    #[error("need at least {need} fraction digits, got {got}")]
    TooFewFractionDigits { got: usize, need: usize },

    #[error("at most {max} fraction digits allowed, got {got}")]
    TooManyFractionDigits { got: usize, max: usize },

    #[error("value is negative")]
    Negative,

    #[error("value out of range")]
    Overflow,
}
