// ============================================================================
// Coordinates
// Exact decimal coordinates and the bridge to floating point
// ============================================================================

use super::errors::{VectorError, VectorResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// A single vector component, stored as an exact decimal.
pub type Coordinate = Decimal;

/// Default absolute tolerance for [`is_close`] (1e-10).
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Maximum number of fractional digits a decimal can carry.
pub const MAX_PRECISION: u32 = 28;

/// Absolute-tolerance comparison: `|a - b| <= tolerance`.
///
/// Despite the conventional name this is not a relative comparison. A
/// difference too large to represent is never close.
#[inline]
pub fn is_close(a: Decimal, b: Decimal, tolerance: Decimal) -> bool {
    a.checked_sub(b)
        .map(|diff| diff.abs() <= tolerance)
        .unwrap_or(false)
}

// ============================================================================
// Conversion Into Coordinates
// ============================================================================

/// Values that can become an exact decimal coordinate.
///
/// Integers convert losslessly. Strings must hold a decimal literal,
/// optionally in scientific notation (`"1.5e-3"`). Floats convert to the
/// nearest short decimal and reject NaN and infinities.
pub trait ToCoordinate {
    fn to_coordinate(&self) -> VectorResult<Coordinate>;
}

impl ToCoordinate for Decimal {
    #[inline]
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        Ok(*self)
    }
}

macro_rules! impl_to_coordinate_for_int {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                #[inline]
                fn to_coordinate(&self) -> VectorResult<Coordinate> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_coordinate_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToCoordinate for f64 {
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        Decimal::from_f64(*self).ok_or_else(|| VectorError::InvalidCoordinate(self.to_string()))
    }
}

impl ToCoordinate for f32 {
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        Decimal::from_f32(*self).ok_or_else(|| VectorError::InvalidCoordinate(self.to_string()))
    }
}

impl ToCoordinate for str {
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        let s = self.trim();
        let parsed = if s.contains(['e', 'E']) {
            Decimal::from_scientific(s)
        } else {
            Decimal::from_str_exact(s)
        };
        parsed.map_err(|_| VectorError::InvalidCoordinate(self.to_string()))
    }
}

impl ToCoordinate for String {
    #[inline]
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        self.as_str().to_coordinate()
    }
}

impl<T: ToCoordinate + ?Sized> ToCoordinate for &T {
    #[inline]
    fn to_coordinate(&self) -> VectorResult<Coordinate> {
        (**self).to_coordinate()
    }
}

// ============================================================================
// Checked Arithmetic
// ============================================================================

#[inline]
pub(crate) fn checked_add(a: Decimal, b: Decimal) -> VectorResult<Decimal> {
    a.checked_add(b).ok_or(VectorError::Overflow)
}

#[inline]
pub(crate) fn checked_sub(a: Decimal, b: Decimal) -> VectorResult<Decimal> {
    a.checked_sub(b).ok_or(VectorError::Overflow)
}

#[inline]
pub(crate) fn checked_mul(a: Decimal, b: Decimal) -> VectorResult<Decimal> {
    a.checked_mul(b).ok_or(VectorError::Overflow)
}

/// Sum of pairwise products, failing on the first overflow.
pub(crate) fn sum_of_products<'a, I>(pairs: I) -> VectorResult<Decimal>
where
    I: IntoIterator<Item = (&'a Decimal, &'a Decimal)>,
{
    pairs
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, (x, y)| checked_add(acc, checked_mul(*x, *y)?))
}

// ============================================================================
// Floating-Point Bridge
// ============================================================================

/// Decimal to `f64` for transcendental functions.
#[inline]
pub fn to_approx(value: Decimal) -> f64 {
    // Every Decimal lies well inside the f64 range.
    value.to_f64().unwrap_or(f64::NAN)
}

/// `f64` back to a decimal.
///
/// NaN and infinities are out of domain; finite values past the decimal
/// range overflow.
#[inline]
pub fn from_approx(value: f64) -> VectorResult<Decimal> {
    if !value.is_finite() {
        return Err(VectorError::OutOfDomain);
    }
    Decimal::from_f64(value).ok_or(VectorError::Overflow)
}

/// Euclidean norm computed in floating point and stored back as a decimal.
///
/// Squares are summed in `f64`: the square of any decimal lies between
/// 1e-56 and 7e57, so nothing underflows to zero or overflows the way a
/// decimal sum of squares would. Exact for integer Pythagorean tuples.
///
/// # Errors
/// `Overflow` if the norm itself exceeds the decimal range.
pub fn approx_norm<'a, I>(values: I) -> VectorResult<Decimal>
where
    I: IntoIterator<Item = &'a Decimal>,
{
    let squares: f64 = values
        .into_iter()
        .map(|x| {
            let x = to_approx(*x);
            x * x
        })
        .sum();
    from_approx(squares.sqrt())
}

/// Round half-to-even to `precision` fractional digits.
#[inline]
pub(crate) fn round_for_display(value: Decimal, precision: u32) -> Decimal {
    value.round_dp_with_strategy(precision, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tolerance() {
        assert_eq!(DEFAULT_TOLERANCE, Decimal::new(1, 10));
        assert_eq!(DEFAULT_TOLERANCE.to_string(), "0.0000000001");
    }

    #[test]
    fn test_is_close() {
        let a = Decimal::new(1, 0);
        let b = Decimal::new(10000000001, 10); // 1.0000000001
        assert!(is_close(a, b, DEFAULT_TOLERANCE));
        assert!(is_close(b, a, DEFAULT_TOLERANCE));

        let c = Decimal::new(10000000002, 10);
        assert!(!is_close(a, c, DEFAULT_TOLERANCE));

        // Absolute, not relative
        let big = Decimal::from(1_000_000_000);
        assert!(!is_close(big, big + Decimal::new(1, 6), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_is_close_unrepresentable_difference() {
        assert!(!is_close(Decimal::MAX, Decimal::MIN, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(3i32.to_coordinate().unwrap(), Decimal::from(3));
        assert_eq!((-7i64).to_coordinate().unwrap(), Decimal::from(-7));
        assert_eq!(42usize.to_coordinate().unwrap(), Decimal::from(42));
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("1.25".to_coordinate().unwrap(), Decimal::new(125, 2));
        assert_eq!(" -0.5 ".to_coordinate().unwrap(), Decimal::new(-5, 1));
        assert_eq!("1.5e-3".to_coordinate().unwrap(), Decimal::new(15, 4));
        assert_eq!(String::from("8").to_coordinate().unwrap(), Decimal::from(8));

        assert_eq!(
            "abc".to_coordinate(),
            Err(VectorError::InvalidCoordinate("abc".to_string()))
        );
        assert!("".to_coordinate().is_err());
    }

    #[test]
    fn test_string_outside_decimal_range() {
        assert_eq!(
            "1e30".to_coordinate(),
            Err(VectorError::InvalidCoordinate("1e30".to_string()))
        );
        assert_eq!(
            "1e-30".to_coordinate(),
            Err(VectorError::InvalidCoordinate("1e-30".to_string()))
        );

        // Edges that still fit
        assert!("7e28".to_coordinate().is_ok());
        assert_eq!("1e-28".to_coordinate().unwrap(), Decimal::new(1, 28));
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(0.5f64.to_coordinate().unwrap(), Decimal::new(5, 1));
        assert_eq!(2.0f32.to_coordinate().unwrap(), Decimal::from(2));
        assert!(f64::NAN.to_coordinate().is_err());
        assert!(f64::INFINITY.to_coordinate().is_err());
    }

    #[test]
    fn test_reference_conversion() {
        let d = Decimal::new(314, 2);
        let r = &d;
        assert_eq!(r.to_coordinate().unwrap(), d);
        assert_eq!((&&5u8).to_coordinate().unwrap(), Decimal::from(5));
    }

    #[test]
    fn test_sum_of_products() {
        let xs = [Decimal::from(1), Decimal::from(2), Decimal::from(3)];
        let ys = [Decimal::from(4), Decimal::from(5), Decimal::from(6)];
        assert_eq!(
            sum_of_products(xs.iter().zip(ys.iter())).unwrap(),
            Decimal::from(32)
        );
    }

    #[test]
    fn test_checked_overflow() {
        assert_eq!(
            checked_mul(Decimal::MAX, Decimal::from(2)),
            Err(VectorError::Overflow)
        );
        assert_eq!(
            checked_add(Decimal::MAX, Decimal::ONE),
            Err(VectorError::Overflow)
        );
    }

    #[test]
    fn test_approx_norm() {
        let pythagorean = [Decimal::from(3), Decimal::from(4)];
        assert_eq!(approx_norm(&pythagorean).unwrap(), Decimal::from(5));
        assert_eq!(approx_norm(&[Decimal::ZERO, Decimal::ZERO]).unwrap(), Decimal::ZERO);

        let ones = [Decimal::ONE, Decimal::ONE];
        let root_two = approx_norm(&ones).unwrap();
        assert!(is_close(
            root_two * root_two,
            Decimal::from(2),
            DEFAULT_TOLERANCE
        ));
    }

    #[test]
    fn test_approx_norm_extreme_magnitudes() {
        // Squares of these fall outside the decimal range in both directions
        let tiny = approx_norm(&[Decimal::new(1, 15), Decimal::ZERO]).unwrap();
        assert!(is_close(tiny, Decimal::new(1, 15), Decimal::new(1, 25)));

        let smallest = approx_norm(&[Decimal::new(1, 20)]).unwrap();
        assert!(!smallest.is_zero());

        let huge = approx_norm(&[Decimal::from(1_000_000_000_000_000i64), Decimal::ZERO]).unwrap();
        assert!(is_close(
            huge,
            Decimal::from(1_000_000_000_000_000i64),
            Decimal::new(1, 2)
        ));

        assert_eq!(
            approx_norm(&[Decimal::MAX, Decimal::MAX]),
            Err(VectorError::Overflow)
        );
    }

    #[test]
    fn test_from_approx() {
        assert_eq!(from_approx(0.25).unwrap(), Decimal::new(25, 2));
        assert_eq!(from_approx(f64::NAN), Err(VectorError::OutOfDomain));
        assert_eq!(from_approx(f64::INFINITY), Err(VectorError::OutOfDomain));
        assert_eq!(from_approx(1e40), Err(VectorError::Overflow));
    }

    #[test]
    fn test_round_for_display() {
        assert_eq!(round_for_display(Decimal::new(12345, 4), 3), Decimal::new(1234, 3));
        assert_eq!(round_for_display(Decimal::new(12355, 4), 3), Decimal::new(1236, 3));
        assert_eq!(round_for_display(Decimal::new(2, 0), 3), Decimal::from(2));
    }
}
