// ============================================================================
// Linear Algebra Library
// Immutable Euclidean vectors with exact decimal coordinates
// ============================================================================

//! # Linear Algebra
//!
//! An immutable N-dimensional Euclidean vector with exact decimal coordinates.
//!
//! ## Features
//!
//! - **Exact coordinates** stored as `rust_decimal::Decimal`, so equality and
//!   arithmetic carry no binary floating-point representation error
//! - **Standard operations**: sum, difference, scaling, magnitude,
//!   normalization, dot and cross products, angles, projections, areas
//! - **Checked arithmetic**: every fallible operation returns a `Result`
//! - **Configurable evaluation** through [`VectorSpace`](engine::VectorSpace):
//!   comparison tolerance, dimension policy, cosine clamping, display precision
//!
//! ## Example
//!
//! ```rust
//! use linear_algebra::prelude::*;
//!
//! let v = Vector::new(["3.039", "1.879"])?;
//! let basis = Vector::new(["0.825", "2.036"])?;
//!
//! let along = v.parallel_project(&basis)?;
//! let across = v.orthogonal_project(&basis)?;
//!
//! println!("{}", along); // Vector: {1.083, 2.672}
//! assert!(across.is_orthogonal(&basis)?);
//! assert!(along.is_parallel(&basis)?);
//!
//! let degrees = v.angle(&basis, AngleUnit::Degrees)?;
//! assert!(degrees > 0.0 && degrees < 90.0);
//! # Ok::<(), VectorError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        AngleUnit, DimensionPolicy, ParallelTest, Vector, VectorConfig, VectorDisplay,
    };
    pub use crate::engine::VectorSpace;
    pub use crate::numeric::{
        is_close, Coordinate, ErrorKind, ToCoordinate, VectorError, VectorResult,
        DEFAULT_TOLERANCE,
    };
}
