// ============================================================================
// Vector Domain Model
// Immutable N-dimensional Euclidean vector with exact decimal coordinates
// ============================================================================

use crate::domain::config::AngleUnit;
use crate::engine::VectorSpace;
use crate::numeric::{
    approx_norm, checked_mul, checked_sub, round_for_display, Coordinate,
    ToCoordinate, VectorError, VectorResult,
};
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Index, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline storage covers the common 2-D, 3-D, and 4-D cases.
pub(crate) type Coordinates = SmallVec<[Coordinate; 4]>;

/// Immutable Euclidean vector.
///
/// Coordinates are exact decimals, so equality is exact: `[1, 2] == ["1.0", "2"]`.
/// Only [`magnitude`](Vector::magnitude) and the operations built on it
/// (normalization, angles, areas) go through floating point.
///
/// Every operation returns a new value. Methods whose behaviour depends on
/// tolerance or dimension policy delegate to [`VectorSpace::STANDARD`]; use a
/// configured [`VectorSpace`] to change those settings.
///
/// # Example
/// ```
/// use linear_algebra::prelude::*;
///
/// let a = Vector::new([1, 0, 0])?;
/// let b = Vector::new([0, 1, 0])?;
/// assert_eq!(a.cross(&b)?, Vector::new([0, 0, 1])?);
/// assert_eq!(a.to_string(), "Vector: {1.000, 0.000, 0.000}");
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")
)]
pub struct Vector {
    coordinates: Coordinates,
    dimension: usize,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a vector from any non-empty sequence of coordinate-like values.
    ///
    /// # Errors
    /// - `EmptyCoordinates` if the sequence is empty
    /// - `InvalidCoordinate` if an element is not a finite decimal
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.to_coordinate())
            .collect::<VectorResult<Coordinates>>()?;
        Self::from_coordinates(coordinates)
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Decimal::ZERO, dimension))
    }

    pub(crate) fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        let dimension = coordinates.len();
        Ok(Self {
            coordinates,
            dimension,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ, `Overflow` on decimal overflow.
    pub fn plus(&self, other: &Vector) -> VectorResult<Vector> {
        VectorSpace::STANDARD.plus(self, other)
    }

    /// Element-wise difference.
    pub fn minus(&self, other: &Vector) -> VectorResult<Vector> {
        VectorSpace::STANDARD.minus(self, other)
    }

    /// Multiply every coordinate by `c`.
    pub fn times_scalar(&self, c: Coordinate) -> VectorResult<Vector> {
        let coordinates = self
            .coordinates
            .iter()
            .map(|x| checked_mul(c, *x))
            .collect::<VectorResult<Coordinates>>()?;
        Self::from_coordinates(coordinates)
    }

    /// Flip the sign of every coordinate.
    pub fn negated(&self) -> Vector {
        Self {
            coordinates: self.coordinates.iter().map(|x| -*x).collect(),
            dimension: self.dimension,
        }
    }

    // ========================================================================
    // Magnitude and Normalization
    // ========================================================================

    /// Euclidean length, √(Σ xᵢ²).
    ///
    /// Computed in `f64` and stored back as a decimal, so it stays
    /// meaningful for coordinates whose squares the decimal type cannot hold.
    ///
    /// # Errors
    /// `Overflow` if the length exceeds the decimal range.
    pub fn magnitude(&self) -> VectorResult<Coordinate> {
        approx_norm(&self.coordinates)
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// `ZeroVector` if the magnitude is exactly zero.
    pub fn normalized(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            tracing::debug!(dimension = self.dimension, "refusing to normalize zero vector");
            return Err(VectorError::ZeroVector);
        }
        let inverse = Decimal::ONE
            .checked_div(magnitude)
            .ok_or(VectorError::Overflow)?;
        self.times_scalar(inverse)
    }

    // ========================================================================
    // Products and Angles
    // ========================================================================

    /// Sum of element-wise products.
    pub fn dot(&self, other: &Vector) -> VectorResult<Coordinate> {
        VectorSpace::STANDARD.dot(self, other)
    }

    /// Standard 3-D cross product.
    ///
    /// # Errors
    /// `UnsupportedDimension` unless both operands are 3-dimensional.
    pub fn cross(&self, other: &Vector) -> VectorResult<Vector> {
        let [x1, y1, z1] = self.as_triple("cross product")?;
        let [x2, y2, z2] = other.as_triple("cross product")?;

        let x = checked_sub(checked_mul(y1, z2)?, checked_mul(y2, z1)?)?;
        let y = checked_sub(
            Decimal::ZERO,
            checked_sub(checked_mul(x1, z2)?, checked_mul(x2, z1)?)?,
        )?;
        let z = checked_sub(checked_mul(x1, y2)?, checked_mul(x2, y1)?)?;

        Self::from_coordinates(SmallVec::from_slice(&[x, y, z]))
    }

    /// Angle between the two directions, in the requested unit.
    ///
    /// # Errors
    /// `ZeroVector` if either operand is the zero vector.
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        VectorSpace::STANDARD.angle(self, other, unit)
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    pub fn is_zero(&self) -> VectorResult<bool> {
        VectorSpace::STANDARD.is_zero(self)
    }

    pub fn is_unit(&self) -> VectorResult<bool> {
        VectorSpace::STANDARD.is_unit(self)
    }

    /// True when the directions are the same or opposite.
    /// The zero vector is parallel to every vector.
    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        VectorSpace::STANDARD.is_parallel(self, other)
    }

    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        VectorSpace::STANDARD.is_orthogonal(self, other)
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Component of `self` along `basis`.
    pub fn parallel_project(&self, basis: &Vector) -> VectorResult<Vector> {
        VectorSpace::STANDARD.parallel_project(self, basis)
    }

    /// Component of `self` perpendicular to `basis`.
    pub fn orthogonal_project(&self, basis: &Vector) -> VectorResult<Vector> {
        VectorSpace::STANDARD.orthogonal_project(self, basis)
    }

    // ========================================================================
    // Area
    // ========================================================================

    /// Area of the parallelogram spanned by two 3-D vectors.
    pub fn area_parallelogram(&self, other: &Vector) -> VectorResult<Coordinate> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3-D vectors.
    pub fn area_triangle(&self, other: &Vector) -> VectorResult<Coordinate> {
        Ok(self.area_parallelogram(other)? / Decimal::TWO)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Display adapter rounding each coordinate to `precision` places.
    pub fn display_with_precision(&self, precision: u32) -> VectorDisplay<'_> {
        VectorDisplay {
            vector: self,
            precision,
        }
    }

    fn as_triple(&self, operation: &'static str) -> VectorResult<[Coordinate; 3]> {
        match self.coordinates.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(VectorError::UnsupportedDimension {
                operation,
                required: 3,
                found: self.dimension,
            }),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Index<usize> for Vector {
    type Output = Coordinate;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl Neg for &Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::from_coordinates(SmallVec::from_vec(coordinates))
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.into_vec()
    }
}

// ============================================================================
// Display
// ============================================================================

/// Renders `Vector: {c1, c2, ..., cn}` with a fixed number of decimal places.
#[derive(Debug, Clone, Copy)]
pub struct VectorDisplay<'a> {
    vector: &'a Vector,
    precision: u32,
}

impl fmt::Display for VectorDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.precision as usize;
        write!(f, "Vector: {{")?;
        for (i, x) in self.vector.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.width$}", round_for_display(*x, self.precision), width = width)?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with_precision(VectorSpace::STANDARD.config().display_precision)
            .fmt(f)
    }
}
