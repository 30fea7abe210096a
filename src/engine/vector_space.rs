// ============================================================================
// Vector Space
// Configured evaluator for tolerance- and dimension-sensitive operations
// ============================================================================

use crate::domain::config::{AngleUnit, DimensionPolicy, ParallelTest, VectorConfig};
use crate::domain::vector::{Coordinates, Vector};
use crate::numeric::{
    checked_add, checked_sub, is_close, sum_of_products, to_approx, Coordinate, VectorError,
    VectorResult,
};
use rust_decimal::Decimal;
use std::iter::Zip;
use std::slice::Iter;

type Pairs<'a> = Zip<Iter<'a, Coordinate>, Iter<'a, Coordinate>>;

/// Evaluates vector operations under a [`VectorConfig`].
///
/// `Vector`'s own methods run through [`VectorSpace::STANDARD`]. Build a
/// space from a custom config to loosen the tolerance, allow truncating
/// pairwise operations, or disable cosine clamping.
///
/// ```
/// use linear_algebra::prelude::*;
///
/// let space = VectorSpace::new(VectorConfig::legacy())?;
/// let a = Vector::new([1, 2, 3])?;
/// let b = Vector::new([10, 20])?;
/// assert_eq!(space.plus(&a, &b)?, Vector::new([11, 22])?);
/// assert!(a.plus(&b).is_err());
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorSpace {
    config: VectorConfig,
}

impl VectorSpace {
    /// Strict dimensions, 1e-10 tolerance, clamped angles
    pub const STANDARD: Self = Self {
        config: VectorConfig::STANDARD,
    };

    /// Create a vector space from a validated configuration.
    ///
    /// # Errors
    /// `InvalidConfig` if [`VectorConfig::validate`] fails.
    pub fn new(config: VectorConfig) -> VectorResult<Self> {
        config.validate().map_err(VectorError::InvalidConfig)?;

        if config != VectorConfig::STANDARD {
            tracing::debug!(
                tolerance = %config.tolerance,
                dimension_policy = ?config.dimension_policy,
                clamp_cosine = config.clamp_cosine,
                parallel_test = ?config.parallel_test,
                display_precision = config.display_precision,
                "Created vector space with custom configuration"
            );
        }

        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    // ========================================================================
    // Pairing
    // ========================================================================

    fn ensure_compatible(
        &self,
        operation: &'static str,
        left: &Vector,
        right: &Vector,
    ) -> VectorResult<()> {
        if left.dimension() == right.dimension() {
            return Ok(());
        }

        match self.config.dimension_policy {
            DimensionPolicy::Strict => Err(VectorError::DimensionMismatch {
                left: left.dimension(),
                right: right.dimension(),
            }),
            DimensionPolicy::Truncate => {
                tracing::trace!(
                    operation,
                    left = left.dimension(),
                    right = right.dimension(),
                    "Truncating to shorter operand"
                );
                Ok(())
            },
        }
    }

    fn pair<'a>(
        &self,
        operation: &'static str,
        left: &'a Vector,
        right: &'a Vector,
    ) -> VectorResult<Pairs<'a>> {
        self.ensure_compatible(operation, left, right)?;
        Ok(left.iter().zip(right.iter()))
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn plus(&self, left: &Vector, right: &Vector) -> VectorResult<Vector> {
        let coordinates = self
            .pair("plus", left, right)?
            .map(|(x, y)| checked_add(*x, *y))
            .collect::<VectorResult<Coordinates>>()?;
        Vector::from_coordinates(coordinates)
    }

    pub fn minus(&self, left: &Vector, right: &Vector) -> VectorResult<Vector> {
        let coordinates = self
            .pair("minus", left, right)?
            .map(|(x, y)| checked_sub(*x, *y))
            .collect::<VectorResult<Coordinates>>()?;
        Vector::from_coordinates(coordinates)
    }

    pub fn dot(&self, left: &Vector, right: &Vector) -> VectorResult<Coordinate> {
        sum_of_products(self.pair("dot", left, right)?)
    }

    /// Angle between two directions via arccos of the unit dot product.
    ///
    /// Rounding can push the cosine of (anti)parallel vectors just past ±1.
    /// With `clamp_cosine` it is pulled back; otherwise the call fails with
    /// `OutOfDomain`.
    pub fn angle(&self, left: &Vector, right: &Vector, unit: AngleUnit) -> VectorResult<f64> {
        self.ensure_compatible("angle", left, right)?;
        let u1 = left.normalized()?;
        let u2 = right.normalized()?;
        let cosine = to_approx(self.dot(&u1, &u2)?);
        Ok(unit.convert(self.arccos(cosine)?))
    }

    fn arccos(&self, cosine: f64) -> VectorResult<f64> {
        if (-1.0..=1.0).contains(&cosine) {
            return Ok(cosine.acos());
        }
        if !self.config.clamp_cosine {
            return Err(VectorError::OutOfDomain);
        }
        tracing::debug!(cosine, "Clamping cosine into [-1, 1]");
        Ok(cosine.clamp(-1.0, 1.0).acos())
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    pub fn is_zero(&self, vector: &Vector) -> VectorResult<bool> {
        Ok(is_close(
            vector.magnitude()?,
            Decimal::ZERO,
            self.config.tolerance,
        ))
    }

    pub fn is_unit(&self, vector: &Vector) -> VectorResult<bool> {
        Ok(is_close(
            vector.magnitude()?,
            Decimal::ONE,
            self.config.tolerance,
        ))
    }

    /// Same or opposite direction. The zero vector is parallel to everything.
    ///
    /// Under [`ParallelTest::Signed`] unit vectors are compared coordinate-wise
    /// against both orientations of the other operand, so sign patterns like
    /// `[1, 1]` and `[1, -1]` are told apart. [`ParallelTest::AbsoluteValue`]
    /// compares coordinate magnitudes only and reports those as parallel.
    pub fn is_parallel(&self, left: &Vector, right: &Vector) -> VectorResult<bool> {
        self.ensure_compatible("is_parallel", left, right)?;
        if self.is_zero(left)? || self.is_zero(right)? {
            return Ok(true);
        }

        let u1 = left.normalized()?;
        let u2 = right.normalized()?;
        let tolerance = self.config.tolerance;

        if self.config.parallel_test == ParallelTest::AbsoluteValue {
            return Ok(u1
                .iter()
                .zip(u2.iter())
                .all(|(x, y)| is_close(x.abs(), y.abs(), tolerance)));
        }

        let same = u1
            .iter()
            .zip(u2.iter())
            .all(|(x, y)| is_close(*x, *y, tolerance));
        let opposite = u1
            .iter()
            .zip(u2.iter())
            .all(|(x, y)| is_close(*x, -*y, tolerance));

        Ok(same || opposite)
    }

    pub fn is_orthogonal(&self, left: &Vector, right: &Vector) -> VectorResult<bool> {
        Ok(is_close(
            self.dot(left, right)?,
            Decimal::ZERO,
            self.config.tolerance,
        ))
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// `unit(basis) * (vector · unit(basis))`
    pub fn parallel_project(&self, vector: &Vector, basis: &Vector) -> VectorResult<Vector> {
        let unit = basis.normalized()?;
        let length = self.dot(vector, &unit)?;
        unit.times_scalar(length)
    }

    /// `vector - parallel_project(vector, basis)`
    pub fn orthogonal_project(&self, vector: &Vector, basis: &Vector) -> VectorResult<Vector> {
        let along = self.parallel_project(vector, basis)?;
        self.minus(vector, &along)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with the configured display precision.
    pub fn display(&self, vector: &Vector) -> String {
        vector
            .display_with_precision(self.config.display_precision)
            .to_string()
    }
}

impl Default for VectorSpace {
    fn default() -> Self {
        Self::STANDARD
    }
}
