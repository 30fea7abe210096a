// ============================================================================
// Vector Space Configuration
// Tolerances and policies for policy-sensitive vector operations
// ============================================================================

use crate::numeric::{DEFAULT_TOLERANCE, MAX_PRECISION};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Dimension Policy
// ============================================================================

/// How pairwise operations treat operands of different dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DimensionPolicy {
    /// Reject mismatched operands with `DimensionMismatch`
    #[default]
    Strict,

    /// Pair coordinates positionally and stop at the shorter operand.
    /// The result of `plus`/`minus` has the shorter operand's dimension.
    Truncate,
}

// ============================================================================
// Parallel Test
// ============================================================================

/// How `is_parallel` compares the two unit vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParallelTest {
    /// Equal to the other unit vector or to its negation
    #[default]
    Signed,

    /// Coordinate magnitudes equal, signs ignored.
    /// Also reports mirrored directions such as `[1, 1]` and `[1, -1]`.
    AbsoluteValue,
}

// ============================================================================
// Angle Unit
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert an angle given in radians into this unit.
    #[inline]
    pub fn convert(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        }
    }
}

// ============================================================================
// Complete Configuration
// ============================================================================

/// Configuration for a [`VectorSpace`](crate::engine::VectorSpace)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorConfig {
    /// Absolute tolerance for zero, parallel, orthogonal, and unit tests
    pub tolerance: Decimal,

    /// Treatment of mismatched dimensions in plus, minus, dot, and friends
    pub dimension_policy: DimensionPolicy,

    /// Clamp the cosine into [-1, 1] before taking arccos.
    /// When false an out-of-range cosine fails with `OutOfDomain`.
    pub clamp_cosine: bool,

    /// Comparison used by `is_parallel`
    pub parallel_test: ParallelTest,

    /// Fractional digits shown by the display format
    pub display_precision: u32,
}

impl VectorConfig {
    /// Strict dimensions, 1e-10 tolerance, clamped angles, 3 display digits
    pub const STANDARD: Self = Self {
        tolerance: DEFAULT_TOLERANCE,
        dimension_policy: DimensionPolicy::Strict,
        clamp_cosine: true,
        parallel_test: ParallelTest::Signed,
        display_precision: 3,
    };

    /// Create a new configuration with standard settings
    pub fn new() -> Self {
        Self::STANDARD
    }

    /// Builder method: Set the comparison tolerance
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: Set the dimension policy
    pub fn with_dimension_policy(mut self, policy: DimensionPolicy) -> Self {
        self.dimension_policy = policy;
        self
    }

    /// Builder method: Enable or disable cosine clamping
    pub fn with_clamp_cosine(mut self, clamp: bool) -> Self {
        self.clamp_cosine = clamp;
        self
    }

    /// Builder method: Set the parallel comparison
    pub fn with_parallel_test(mut self, test: ParallelTest) -> Self {
        self.parallel_test = test;
        self
    }

    /// Builder method: Set display precision
    pub fn with_display_precision(mut self, precision: u32) -> Self {
        self.display_precision = precision;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.tolerance < Decimal::ZERO {
            return Err("Tolerance cannot be negative".to_string());
        }

        if self.display_precision > MAX_PRECISION {
            return Err(format!(
                "Display precision cannot exceed {} digits",
                MAX_PRECISION
            ));
        }

        Ok(())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl VectorConfig {
    /// Same as [`VectorConfig::STANDARD`]
    pub fn strict() -> Self {
        Self::STANDARD
    }

    /// Positional pairing that truncates to the shorter operand, no cosine
    /// clamping, and the absolute-value parallel test
    pub fn legacy() -> Self {
        Self::new()
            .with_dimension_policy(DimensionPolicy::Truncate)
            .with_clamp_cosine(false)
            .with_parallel_test(ParallelTest::AbsoluteValue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = VectorConfig::new();

        assert_eq!(config.tolerance, Decimal::new(1, 10));
        assert_eq!(config.dimension_policy, DimensionPolicy::Strict);
        assert!(config.clamp_cosine);
        assert_eq!(config.parallel_test, ParallelTest::Signed);
        assert_eq!(config.display_precision, 3);
        assert!(config.validate().is_ok());
        assert_eq!(config, VectorConfig::default());
    }

    #[test]
    fn test_builder_pattern() {
        let config = VectorConfig::new()
            .with_tolerance(Decimal::new(1, 6))
            .with_dimension_policy(DimensionPolicy::Truncate)
            .with_clamp_cosine(false)
            .with_parallel_test(ParallelTest::AbsoluteValue)
            .with_display_precision(5);

        assert_eq!(config.tolerance, Decimal::new(1, 6));
        assert_eq!(config.dimension_policy, DimensionPolicy::Truncate);
        assert!(!config.clamp_cosine);
        assert_eq!(config.parallel_test, ParallelTest::AbsoluteValue);
        assert_eq!(config.display_precision, 5);
    }

    #[test]
    fn test_validation() {
        let negative = VectorConfig::new().with_tolerance(Decimal::new(-1, 3));
        assert!(negative.validate().is_err());

        let too_precise = VectorConfig::new().with_display_precision(29);
        assert!(too_precise.validate().is_err());

        let zero_tolerance = VectorConfig::new().with_tolerance(Decimal::ZERO);
        assert!(zero_tolerance.validate().is_ok());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(VectorConfig::strict(), VectorConfig::STANDARD);

        let legacy = VectorConfig::legacy();
        assert_eq!(legacy.dimension_policy, DimensionPolicy::Truncate);
        assert!(!legacy.clamp_cosine);
        assert_eq!(legacy.parallel_test, ParallelTest::AbsoluteValue);
        assert_eq!(legacy.tolerance, VectorConfig::STANDARD.tolerance);
    }

    #[test]
    fn test_angle_unit() {
        let half_turn = std::f64::consts::PI;
        assert_eq!(AngleUnit::Radians.convert(half_turn), half_turn);
        assert!((AngleUnit::Degrees.convert(half_turn) - 180.0).abs() < 1e-12);
        assert_eq!(AngleUnit::default(), AngleUnit::Radians);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde() {
        let config = VectorConfig::legacy();
        let json = serde_json::to_string(&config).unwrap();
        let back: VectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
