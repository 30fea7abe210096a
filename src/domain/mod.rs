// ============================================================================
// Domain Models Module
// The vector value type and its configuration
// ============================================================================

pub mod config;
pub mod vector;

pub use config::{AngleUnit, DimensionPolicy, ParallelTest, VectorConfig};
pub use vector::{Vector, VectorDisplay};
