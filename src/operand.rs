use crate::Error;
use std::fmt;

// ----- F I X E D   P O I N T ---------------------------------------------------------

/// An exact decimal: `mantissa * 10^-scale`. Used for the keyed-in operands,
/// so that e.g. `0.1 + 0.2` comes out as `0.3`, not `0.30000000000000004`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    mantissa: i128,
    scale: u32,
}

impl Fixed {
    pub fn new(mantissa: i128, scale: u32) -> Fixed {
        Fixed { mantissa, scale }.normalized()
    }

    /// Read plain decimal text (`-12.50`, `7.`, `.5`). No exponents, and no
    /// more digits than an `i128` can hold
    pub fn parse(text: &str) -> Option<Fixed> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int.is_empty() && frac.is_empty() {
            return None;
        }
        if !int.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut mantissa: i128 = 0;
        for b in int.bytes().chain(frac.bytes()) {
            mantissa = mantissa
                .checked_mul(10)?
                .checked_add(i128::from(b - b'0'))?;
        }
        if negative {
            mantissa = -mantissa;
        }
        Some(Fixed::new(mantissa, u32::try_from(frac.len()).ok()?))
    }

    pub fn mantissa(&self) -> i128 {
        self.mantissa
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    // Drop trailing fractional zeros, keeping the scale as small as possible
    fn normalized(mut self) -> Fixed {
        while self.scale > 0 && self.mantissa % 10 == 0 {
            self.mantissa /= 10;
            self.scale -= 1;
        }
        self
    }

    fn rescaled(&self, scale: u32) -> Option<i128> {
        let factor = 10_i128.checked_pow(scale.checked_sub(self.scale)?)?;
        self.mantissa.checked_mul(factor)
    }

    /// Exact sum, `None` on overflow
    pub fn checked_add(self, other: Fixed) -> Option<Fixed> {
        let scale = self.scale.max(other.scale);
        let sum = self.rescaled(scale)?.checked_add(other.rescaled(scale)?)?;
        Some(Fixed::new(sum, scale))
    }

    /// Exact difference, `None` on overflow
    pub fn checked_sub(self, other: Fixed) -> Option<Fixed> {
        self.checked_add(Fixed::new(other.mantissa.checked_neg()?, other.scale))
    }

    /// Exact product, `None` on overflow
    pub fn checked_mul(self, other: Fixed) -> Option<Fixed> {
        let product = self.mantissa.checked_mul(other.mantissa)?;
        Some(Fixed::new(product, self.scale.checked_add(other.scale)?))
    }

    /// The nearest `f64`. Goes through the decimal text, so the rounding is
    /// done once, and correctly, by the float parser
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.mantissa.unsigned_abs().to_string();
        let sign = if self.mantissa < 0 { "-" } else { "" };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let digits = format!("{digits:0>width$}", width = scale + 1);
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{int}.{frac}")
    }
}

// ----- O P E R A N D S ---------------------------------------------------------------

/// A numeric value committed to the operand buffer. Values keyed in as
/// decimal text also carry their exact [`Fixed`] form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    value: f64,
    fixed: Option<Fixed>,
}

impl Operand {
    /// Read the text of a display. Anything not a finite number is malformed
    pub fn parse(text: &str) -> Result<Operand, Error> {
        let text = text.trim();
        let malformed = || Error::MalformedDisplay(text.to_string());
        let value: f64 = text.parse().map_err(|_| malformed())?;
        if !value.is_finite() {
            return Err(malformed());
        }
        Ok(Operand {
            value,
            fixed: Fixed::parse(text),
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn fixed(&self) -> Option<Fixed> {
        self.fixed
    }

    /// The display text for this operand
    pub fn to_display(&self) -> String {
        format_value(self.value)
    }
}

impl From<f64> for Operand {
    /// A floating point value, with no exact decimal form attached
    fn from(value: f64) -> Operand {
        Operand { value, fixed: None }
    }
}

impl From<Fixed> for Operand {
    fn from(fixed: Fixed) -> Operand {
        Operand {
            value: fixed.to_f64(),
            fixed: Some(fixed),
        }
    }
}

/// Render a value the way a pocket calculator shows it: the shortest text
/// that reads back as the same `f64`, switching to exponent notation for very
/// large and very small magnitudes
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0. { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    // Also folds -0 into 0
    if value == 0. {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        return format!("{value:e}");
    }
    format!("{value}")
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn fixed() {
        let a = Fixed::parse("0.1").unwrap();
        let b = Fixed::parse("0.2").unwrap();
        assert_eq!(a.checked_add(b), Some(Fixed::new(3, 1)));
        assert_eq!(a.checked_add(b).unwrap().to_f64(), 0.3);

        let c = Fixed::parse("1.10").unwrap();
        assert_eq!((c.mantissa(), c.scale()), (11, 1));
        assert_eq!(c.checked_mul(c).unwrap().to_string(), "1.21");
        assert_eq!(a.checked_sub(c).unwrap().to_string(), "-1");
        assert_eq!(Fixed::new(-5, 3).to_string(), "-0.005");

        assert_eq!(Fixed::parse("7."), Some(Fixed::new(7, 0)));
        assert_eq!(Fixed::parse(".5"), Some(Fixed::new(5, 1)));
        assert_eq!(Fixed::parse("1e3"), None);
        assert_eq!(Fixed::parse("."), None);
        assert_eq!(Fixed::parse(""), None);

        // Too many digits for an i128
        let huge = "9".repeat(40);
        assert_eq!(Fixed::parse(&huge), None);

        let big = Fixed::parse(&"9".repeat(30)).unwrap();
        assert_eq!(big.checked_mul(big), None);
    }

    #[test]
    fn operand() -> Result<(), Error> {
        let op = Operand::parse("12.5")?;
        assert_eq!(op.value(), 12.5);
        assert_eq!(op.fixed(), Some(Fixed::new(125, 1)));

        let op = Operand::parse("1e300")?;
        assert_eq!(op.fixed(), None);
        assert_float_eq!(op.value(), 1e300, rmax <= 1e-15);

        assert!(matches!(
            Operand::parse("NaN"),
            Err(Error::MalformedDisplay(_))
        ));
        assert!(Operand::parse("Infinity").is_err());
        assert!(Operand::parse("12.5.1").is_err());
        assert!(Operand::parse("").is_err());
        Ok(())
    }

    #[test]
    fn formatting() {
        assert_eq!(format_value(5.), "5");
        assert_eq!(format_value(-0.), "0");
        assert_eq!(format_value(0.25), "0.25");
        assert_eq!(format_value(1. / 3.), "0.3333333333333333");
        assert_eq!(format_value(1e21), "1e21");
        assert_eq!(format_value(123456789012.), "123456789012");
        assert_eq!(format_value(0.0000001), "1e-7");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(Operand::from(Fixed::new(3, 1)).to_display(), "0.3");
    }
}
